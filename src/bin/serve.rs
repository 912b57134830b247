//! HTTP service exposing `GET /articles/{documentId}`.
//!
//! Configuration comes from the environment (see `ServiceConfig`); a `.env`
//! file in the working directory is honoured.

use std::sync::Arc;

use anyhow::Context;
use drive_article_validator::{server, DriveExportSource, ServiceConfig};

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("serve error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    init_tracing()?;

    let config = ServiceConfig::from_env().context("failed to load configuration")?;
    let source = DriveExportSource::new(&config).context("failed to set up Drive source")?;
    let app = server::router(Arc::new(source));

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind to {addr}"))?;

    tracing::info!(%addr, "server is running");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::warn!(%error, "failed to listen for ctrl-c; running until killed");
        std::future::pending::<()>().await;
    }
}

fn init_tracing() -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_env("ARTICLE_VALIDATOR_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
