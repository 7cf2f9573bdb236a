pub mod handlers;
pub mod types;

use crate::{config::Config, prediction::HttpPredictionClient, Result};
use axum::{
    routing::{any, post},
    Router,
};
use handlers::AppState;
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/song",
            post(handlers::create_song).fallback(handlers::method_not_allowed),
        )
        .route("/song/", any(handlers::song_status))
        .route("/song/*id", any(handlers::song_status))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    let predictions = HttpPredictionClient::new(&config.prediction)?;

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    let app_state = AppState::new(config.server, config.prediction, Arc::new(predictions));
    let app = router(app_state);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            warn!("Failed to install Ctrl-C handler: {}", e);
            std::future::pending::<()>().await
        }
    }
}
