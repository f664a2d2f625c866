use anyhow::Result;
use energy_morph::{api, config, state::AppState, telemetry};
use config::Config;
use telemetry::init_tracing;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cfg = Config::load()?;

    if let Some(seed) = cfg.simulation.random_seed {
        warn!(seed, "fixed random seed configured; every response will repeat");
    }

    let addr = cfg.server.socket_addr()?;
    let app = api::router(AppState::new(cfg));

    info!(%addr, "starting Energy-Morph API");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(telemetry::shutdown_signal())
        .await?;

    warn!("shutdown complete");
    Ok(())
}
