use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use lingua_gateway::{create_router, AppState, Settings};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("lingua_gateway=info,tower_http=info")),
        )
        .init();

    let settings = Settings::load().context("Failed to load settings")?;
    info!("Starting {} v{}", settings.project_name, settings.version);

    let addr = format!("{}:{}", settings.host, settings.port);
    let prefix = settings.api_prefix();

    let app_state = AppState::new(settings).context("Failed to load Google credentials")?;
    let app = create_router(app_state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Server listening on {} (API prefix: '{}')", addr, prefix);

    axum::serve(listener, app).await?;

    Ok(())
}
