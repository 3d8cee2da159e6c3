use super::{render::render, types::DetectQuery};
use crate::EmotionClassifier;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Html,
};
use std::sync::Arc;
use tracing::{error, info};

const INDEX_HTML: &str = include_str!("../../static/index.html");

#[derive(Clone)]
pub struct AppState {
    pub classifier: Arc<EmotionClassifier>,
}

impl AppState {
    pub fn new(classifier: EmotionClassifier) -> Self {
        Self {
            classifier: Arc::new(classifier),
        }
    }
}

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn emotion_detector(
    State(state): State<AppState>,
    Query(query): Query<DetectQuery>,
) -> (StatusCode, String) {
    let text = query.text_to_analyze.unwrap_or_default();
    let text = text.trim();

    info!("Received emotion detection request ({} chars)", text.chars().count());

    let result = state.classifier.classify(text).await;
    let (status, body) = render(&result);

    if status.is_server_error() {
        error!("Emotion detection failed: {}", body);
    } else {
        info!("Emotion detection finished with status {}", status.as_u16());
    }

    (status, body)
}
