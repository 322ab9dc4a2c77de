//! HTTP request handlers for the chain health API.
//!
//! - `common` - Shared response envelope
//! - `health` - Health monitoring endpoints

pub mod common;
pub mod health;

pub use health::*;
