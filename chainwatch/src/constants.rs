//! Central repository for configuration defaults and fixed API values
//!
//! Constants are grouped by category so that timeouts, intervals, and
//! response strings have a single source of truth.

/// Default configuration values
pub mod defaults {
    /// Default bind host for the HTTP API
    pub const HOST: &str = "0.0.0.0";

    /// Default port for the HTTP API
    pub const PORT: u16 = 8000;

    /// Heartbeat interval used when a chain registers without one
    pub const PING_INTERVAL_SECONDS: u64 = 30;

    /// Tick of the periodic prober
    pub const PROBER_INTERVAL_SECONDS: u64 = 2;

    /// Upper bound on a single probe call (ping or status)
    pub const PROBE_TIMEOUT_SECONDS: u64 = 10;

    /// Directory holding main.toml and the chain files
    pub const CONFIG_DIR: &str = "config";
}

/// Fixed values returned by the API surface
pub mod api {
    /// Status reported by the overall API liveness endpoint
    pub const OPERATIONAL_STATUS: &str = "operational";

    /// Message reported alongside the operational status
    pub const OPERATIONAL_MESSAGE: &str = "API is healthy";

    /// Banner returned from the root route
    pub const SERVICE_BANNER: &str = "Chain health monitoring API is running";
}

/// Path suffixes appended to a chain's probe URL
pub mod probe {
    pub const PING_PATH: &str = "ping";
    pub const STATUS_PATH: &str = "status";
}
