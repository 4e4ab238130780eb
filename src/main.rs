use anyhow::{Context, Result};
use image_resize_service::config::app::AppConfig;
use image_resize_service::web::router::{AppState, build_router};
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let cfg = AppConfig::from_env();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "image_resize_service=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let app = build_router(&cfg, AppState::from_config(&cfg));

    let listener = TcpListener::bind(&cfg.http.bind_addr)
        .await
        .with_context(|| format!("bind {}", cfg.http.bind_addr))?;
    info!(
        addr = %cfg.http.bind_addr,
        source = %cfg.upload.source_root().display(),
        dest = %cfg.upload.dest_root().display(),
        "image-resize-service listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "cannot listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}
