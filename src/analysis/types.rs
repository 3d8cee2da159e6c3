use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmotionKey {
    Anger,
    Disgust,
    Fear,
    Joy,
    Sadness,
}

impl EmotionKey {
    /// Declaration order. Rendering and tie-breaking both follow it.
    pub const ALL: [EmotionKey; 5] = [
        EmotionKey::Anger,
        EmotionKey::Disgust,
        EmotionKey::Fear,
        EmotionKey::Joy,
        EmotionKey::Sadness,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EmotionKey::Anger => "anger",
            EmotionKey::Disgust => "disgust",
            EmotionKey::Fear => "fear",
            EmotionKey::Joy => "joy",
            EmotionKey::Sadness => "sadness",
        }
    }
}

impl fmt::Display for EmotionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-emotion scores exactly as the classifier reported them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EmotionScores {
    pub anger: f64,
    pub disgust: f64,
    pub fear: f64,
    pub joy: f64,
    pub sadness: f64,
}

impl EmotionScores {
    pub fn get(&self, key: EmotionKey) -> f64 {
        match key {
            EmotionKey::Anger => self.anger,
            EmotionKey::Disgust => self.disgust,
            EmotionKey::Fear => self.fear,
            EmotionKey::Joy => self.joy,
            EmotionKey::Sadness => self.sadness,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (EmotionKey, f64)> + '_ {
        EmotionKey::ALL.into_iter().map(move |key| (key, self.get(key)))
    }

    /// The key with the strictly greatest score; ties go to the earliest key
    /// in declaration order.
    pub fn dominant(&self) -> EmotionKey {
        let mut best = EmotionKey::Anger;
        let mut best_score = self.anger;

        for (key, score) in self.iter().skip(1) {
            if score > best_score || best_score.is_nan() {
                best = key;
                best_score = score;
            }
        }

        best
    }
}

/// Outcome of analysing one piece of text. Exactly one variant applies.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisResult {
    Scored {
        scores: EmotionScores,
        dominant: EmotionKey,
    },
    /// Blank input, or text the classifier refused to process.
    Empty,
    Failed {
        message: String,
    },
}

impl AnalysisResult {
    pub fn scored(scores: EmotionScores) -> Self {
        Self::Scored {
            dominant: scores.dominant(),
            scores,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed {
            message: message.into(),
        }
    }

    pub fn dominant(&self) -> Option<EmotionKey> {
        match self {
            Self::Scored { dominant, .. } => Some(*dominant),
            _ => None,
        }
    }

    pub fn report(&self) -> EmotionReport {
        match self {
            Self::Scored { scores, dominant } => EmotionReport::Scores {
                anger: Some(scores.anger),
                disgust: Some(scores.disgust),
                fear: Some(scores.fear),
                joy: Some(scores.joy),
                sadness: Some(scores.sadness),
                dominant_emotion: Some(*dominant),
            },
            Self::Empty => EmotionReport::Scores {
                anger: None,
                disgust: None,
                fear: None,
                joy: None,
                sadness: None,
                dominant_emotion: None,
            },
            Self::Failed { message } => EmotionReport::Error {
                error: message.clone(),
            },
        }
    }
}

/// Flat, serializable view of an [`AnalysisResult`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum EmotionReport {
    Scores {
        anger: Option<f64>,
        disgust: Option<f64>,
        fear: Option<f64>,
        joy: Option<f64>,
        sadness: Option<f64>,
        dominant_emotion: Option<EmotionKey>,
    },
    Error {
        error: String,
    },
}
