use crate::{ClassifyError, analysis::EmotionScores};
use serde::{Deserialize, Serialize};

pub const MODEL_ID_HEADER: &str = "grpc-metadata-mm-model-id";

/// Body of the outbound EmotionPredict call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifyRequest {
    pub raw_document: RawDocument,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawDocument {
    pub text: String,
}

impl ClassifyRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            raw_document: RawDocument { text: text.into() },
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifyResponse {
    /// Absent and `null` both read as no predictions.
    #[serde(default)]
    pub emotion_predictions: Option<Vec<EmotionPrediction>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmotionPrediction {
    #[serde(default)]
    pub emotion: EmotionScoresWire,
}

/// Scores as they appear on the wire. Missing keys read as zero and
/// unknown keys are dropped.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct EmotionScoresWire {
    pub anger: f64,
    pub disgust: f64,
    pub fear: f64,
    pub joy: f64,
    pub sadness: f64,
}

impl From<EmotionScoresWire> for EmotionScores {
    fn from(wire: EmotionScoresWire) -> Self {
        Self {
            anger: wire.anger,
            disgust: wire.disgust,
            fear: wire.fear,
            joy: wire.joy,
            sadness: wire.sadness,
        }
    }
}

/// Raw status and body returned by a [`Transport`](super::Transport).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// What the classifier made of one piece of text, before normalization.
#[derive(Debug, Clone, PartialEq)]
pub enum Classification {
    Scores(EmotionScores),
    Empty,
    Failed(ClassifyError),
}
