use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct DetectQuery {
    #[serde(default, rename = "textToAnalyze")]
    pub text_to_analyze: Option<String>,
}
