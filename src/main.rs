mod config;
mod routes;

use std::net::SocketAddr;

use leptos::prelude::get_configuration;

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("failed to bind {addr}: {source}")]
    Bind { addr: SocketAddr, source: std::io::Error },
    #[error("server failed: {0}")]
    Serve(std::io::Error),
}

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "greetings host stopped");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), StartupError> {
    let host = config::HostConfig::from_env()?;
    let conf = get_configuration(None).map_err(|e| StartupError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;

    let addr = host.bind_addr(leptos_options.site_addr);
    let site_root = host.site_root(&leptos_options.site_root);
    let app = routes::app(leptos_options, &site_root);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| StartupError::Bind { addr, source })?;

    tracing::info!(%addr, site_root = %site_root.display(), "greetings listening");
    axum::serve(listener, app).await.map_err(StartupError::Serve)
}
