// File: chainwatch/src/services/mod.rs

pub mod health_service;

pub use health_service::HealthService;
