// File: chainwatch/src/main.rs
use anyhow::Result;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use chainwatch::constants::defaults;
use chainwatch::web::start_web_server;
use chainwatch::{Config, ConfigManager, HealthService, HeartbeatRegistry, PeriodicProber};

#[tokio::main]
async fn main() -> Result<()> {
    let env_filter = EnvFilter::from_default_env()
        .add_directive("chainwatch=info".parse()?)
        .add_directive("tower_http=warn".parse()?)
        .add_directive("hyper=warn".parse()?)
        .add_directive("reqwest=warn".parse()?);

    fmt().with_env_filter(env_filter).init();

    info!("Starting chain health monitor");

    // Load configuration
    let main_config = format!("{}/main.toml", defaults::CONFIG_DIR);
    let config_manager = if Path::new(&main_config).exists() {
        ConfigManager::new(defaults::CONFIG_DIR.to_string()).await?
    } else {
        warn!("{} not found, running with default configuration", main_config);
        ConfigManager::from_config(Config::default())
    };
    let config = config_manager.get_current_config();

    // Heartbeat registry shared by the service and the prober
    let heartbeats = Arc::new(HeartbeatRegistry::new(config.default_ping_interval()));

    let health_service = Arc::new(HealthService::new(config.clone(), heartbeats.clone())?);
    for (chain_id, chain_config) in config.enabled_chains() {
        health_service
            .register_chain(chain_id, chain_config.ping_interval())
            .await;
    }
    info!(
        "Monitoring {} chains",
        health_service.monitored_chains().await.len()
    );

    // Lives for the whole process
    let _prober = PeriodicProber::new(heartbeats, config.prober_interval()).spawn();

    start_web_server(config, health_service).await?;

    Ok(())
}
