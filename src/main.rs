mod config;
mod error;
mod routes;
mod state;
mod upstream;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match config::ProxyConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let upstream = upstream::UpstreamClient::new(&config).expect("HTTP client init failed");
    tracing::info!(
        upstream = %config.upstream_url,
        default_cultura = config.default_cultura.as_deref().unwrap_or("-"),
        "answer service configured"
    );

    let state = state::AppState::new(Arc::new(upstream), config.default_cultura.clone());

    let app = routes::leptos_app(state).expect("leptos app init failed");
    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "sb100 listening");
    axum::serve(listener, app).await.expect("server failed");
}
