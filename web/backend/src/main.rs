use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use wikirace_web::config::ServerConfig;
use wikirace_web::router;
use wikirace_web::state::WikipediaState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env();

    let app_state = match WikipediaState::from_config(&config) {
        Ok(state) => Arc::new(state),
        Err(e) => {
            error!(error = %e, "Failed to initialize app state");
            std::process::exit(1);
        }
    };

    let app = router(app_state);

    let listener = match tokio::net::TcpListener::bind(&config.bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(addr = %config.bind_addr, error = %e, "Failed to bind");
            std::process::exit(1);
        }
    };

    info!("Server running on http://{}", config.bind_addr);

    if let Err(e) = axum::serve(listener, app).await {
        error!(error = %e, "Server error");
        std::process::exit(1);
    }
}
