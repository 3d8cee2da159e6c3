mod types;

pub use types::*;

use crate::classifier::Classification;
use tracing::debug;

/// Turns a raw classification into the caller-facing result.
///
/// `Empty` and `Failed` pass through unchanged; scores are kept as-is and
/// only gain a dominant emotion.
pub fn normalize(classification: Classification) -> AnalysisResult {
    match classification {
        Classification::Scores(scores) => {
            let result = AnalysisResult::scored(scores);
            debug!("Dominant emotion: {:?}", result.dominant());
            result
        }
        Classification::Empty => AnalysisResult::Empty,
        Classification::Failed(err) => AnalysisResult::failed(err.to_string()),
    }
}
