mod config;
mod routes;

use leptos::prelude::*;
use tracing_subscriber::EnvFilter;

use crate::config::{ConfigError, ServerConfig};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "server failed to start");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ConfigError> {
    let config = ServerConfig::from_env()?;
    let leptos_options = get_configuration(None)
        .map_err(|e| ConfigError::Leptos(e.to_string()))?
        .leptos_options;

    let addr = config.bind_addr(leptos_options.site_addr);
    let site_root = config.site_root(&leptos_options.site_root);
    let app = routes::app(leptos_options, &site_root);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind");

    tracing::info!(%addr, site_root = %site_root.display(), "mode-toggle listening");
    axum::serve(listener, app).await.expect("server failed");
    Ok(())
}
