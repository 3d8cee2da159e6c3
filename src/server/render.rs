use crate::analysis::{AnalysisResult, EmotionKey, EmotionScores};
use axum::http::StatusCode;

pub const INVALID_TEXT_MESSAGE: &str = "Invalid text! Please try again!";
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred. Please try again later.";

/// Status code and plain-text body for an analysis result.
pub fn render(result: &AnalysisResult) -> (StatusCode, String) {
    match result {
        AnalysisResult::Empty => (StatusCode::BAD_REQUEST, INVALID_TEXT_MESSAGE.to_string()),
        AnalysisResult::Failed { message } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Emotion analysis failed: {}", message),
        ),
        AnalysisResult::Scored { scores, dominant } => (StatusCode::OK, sentence(scores, *dominant)),
    }
}

fn sentence(scores: &EmotionScores, dominant: EmotionKey) -> String {
    format!(
        "For the given statement, the system response is \
         'anger': {}, 'disgust': {}, 'fear': {}, 'joy': {} and 'sadness': {}. \
         The dominant emotion is {}.",
        format_score(scores.anger),
        format_score(scores.disgust),
        format_score(scores.fear),
        format_score(scores.joy),
        format_score(scores.sadness),
        dominant,
    )
}

/// Shortest round-trip form, in the layout of a Python float repr: a trailing
/// `.0` on whole numbers and a signed two-digit exponent outside `[1e-4, 1e16)`.
fn format_score(score: f64) -> String {
    let magnitude = score.abs();

    if !score.is_finite() {
        score.to_string()
    } else if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        let formatted = format!("{:e}", score);
        match formatted.split_once('e') {
            Some((mantissa, exponent)) => {
                let (sign, digits) = match exponent.strip_prefix('-') {
                    Some(digits) => ('-', digits),
                    None => ('+', exponent),
                };
                format!("{}e{}{:0>2}", mantissa, sign, digits)
            }
            None => formatted,
        }
    } else if score.fract() == 0.0 {
        format!("{:.1}", score)
    } else {
        score.to_string()
    }
}
