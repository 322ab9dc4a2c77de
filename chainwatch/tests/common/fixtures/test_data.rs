//! Common test data and constants

use std::time::Duration;

/// Common chain ids
pub mod chains {
    pub const ALPHA: &str = "chain_alpha";
    pub const BETA: &str = "chain_beta";
    pub const GAMMA: &str = "chain_gamma";
    pub const NEVER_REGISTERED: &str = "chain_nobody";
}

/// Short intervals so expiry can be observed with real sleeps
pub mod intervals {
    use super::Duration;

    pub const SHORT: Duration = Duration::from_millis(150);
    pub const LONG: Duration = Duration::from_secs(60);
    pub const PROBE_TIMEOUT: Duration = Duration::from_millis(200);
}
