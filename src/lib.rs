pub mod analysis;
pub mod classifier;
pub mod config;
pub mod error;
pub mod server;

pub use analysis::{AnalysisResult, EmotionKey, EmotionReport, EmotionScores};
pub use classifier::EmotionClassifier;
pub use error::{ClassifyError, Error, Result};
