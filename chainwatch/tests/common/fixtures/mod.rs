//! This module provides reusable test utilities:
//! - Scripted in-process probes
//! - Mock HTTP chain endpoints
//! - Test configuration directories
//! - Common test data

// Allow unused code in test fixtures - not every test binary uses every helper
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod mock_chain;
pub mod mock_probe;
pub mod test_config;
pub mod test_data;

pub use mock_chain::MockChainServer;
pub use mock_probe::{FailingProbe, FlakyProbe, ScriptedProbe, SlowProbe};
pub use test_config::TestConfigBuilder;
pub use test_data::*;
