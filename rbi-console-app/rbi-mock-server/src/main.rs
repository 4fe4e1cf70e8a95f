use std::net::SocketAddr;

use tracing::{error, info};

use rbi_api::{build_router, AppState};
use rbi_shared::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env
    dotenvy::dotenv().ok();

    rbi_shared::telemetry::init_telemetry()?;

    info!("RBI mock server starting...");

    let config = match AppConfig::load() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let app = build_router(AppState::from_config(&config));

    let host: std::net::IpAddr = config.app.host.parse()?;
    let addr = SocketAddr::from((host, config.app.port));
    info!(
        env = %config.app.env,
        menu_delay_ms = config.mock.menu_delay_ms,
        "Listening on {}",
        addr
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
