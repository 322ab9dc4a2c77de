// File: chainwatch/src/web/mod.rs
pub mod handlers;
pub mod server;

pub use server::{create_router, start_web_server};

use std::sync::Arc;

use crate::config::Config;
use crate::services::HealthService;

// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub health_service: Arc<HealthService>,
}

impl AppState {
    pub fn new(config: Arc<Config>, health_service: Arc<HealthService>) -> Self {
        Self {
            config,
            health_service,
        }
    }
}
