mod http_client;
mod linkedin;
mod model;

use clap::Parser;
use model::arg::Args;
use model::config::Config;

#[tokio::main]
async fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Resolve configuration once from the process environment.
    // Missing values are not fatal: the affected screen renders a
    // configuration error instead.
    let config = Config::from_env();
    if config.linkedin_client_id.is_none() {
        tracing::warn!(
            "{} not set, the connect page will show a configuration error",
            model::config::CLIENT_ID_VAR
        );
    }
    if config.backend_url.is_none() {
        tracing::warn!(
            "{} not set, the code exchange will show a configuration error",
            model::config::BACKEND_URL_VAR
        );
    }

    let app = linkedin::create_router(config);

    // Start server
    let addr = format!("{}:{}", args.host, args.port);
    tracing::info!("Starting LinkedIn connect server: {}", addr);
    tracing::info!("Available pages:");
    tracing::info!("  GET  /");
    tracing::info!("  GET  /linkedin/callback");

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
