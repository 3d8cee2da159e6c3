pub mod handlers;
pub mod render;
mod types;

pub use types::DetectQuery;

use crate::{EmotionClassifier, Result, config::Config};
use axum::{
    Router,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use handlers::AppState;
use std::{any::Any, net::SocketAddr};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};
use tracing::{error, info};

/// Builds the application router over an already-constructed state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/emotionDetector", get(handlers::emotion_detector))
        .with_state(state)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
}

fn handle_panic(_payload: Box<dyn Any + Send + 'static>) -> Response {
    error!("Request handler panicked");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        render::UNEXPECTED_ERROR_MESSAGE,
    )
        .into_response()
}

pub async fn run(config: Config) -> Result<()> {
    // Initialize classifier
    let classifier = EmotionClassifier::new(config.classifier.clone())?;
    info!("Using emotion classifier at {}", classifier.url());

    let app = router(AppState::new(classifier));

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
