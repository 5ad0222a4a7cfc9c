use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::info;

use build_estimator::api::{AppState, create_router};
use build_estimator::config::{ConfigLoader, PricingConfig, ServerSettings};
use build_estimator::logging::init_tracing;

#[tokio::main]
async fn main() -> Result<()> {
    let settings = ServerSettings::from_env().context("Failed to read server settings")?;
    init_tracing(settings.log_format);

    let config = match &settings.config_dir {
        Some(dir) => ConfigLoader::load(dir)
            .with_context(|| format!("Failed to load pricing tables from {}", dir.display()))?
            .into_config(),
        None => PricingConfig::standard(),
    };
    info!(
        config_dir = ?settings.config_dir,
        provinces = config.provinces().len(),
        "Pricing configuration ready"
    );

    let app = create_router(AppState::new(config));
    let listener = TcpListener::bind(settings.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", settings.bind_addr))?;

    info!(addr = %settings.bind_addr, "Build estimator listening");
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
