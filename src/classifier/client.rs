use super::types::*;
use crate::{
    ClassifyError, Error, Result,
    analysis::{self, AnalysisResult},
    config::ClassifierConfig,
};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};

/// Network seam for the classifier: one POST, one response, no retries.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post(
        &self,
        url: &str,
        headers: &[(&str, &str)],
        body: &ClassifyRequest,
    ) -> std::result::Result<TransportResponse, ClassifyError>;
}

pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(config: &ClassifierConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post(
        &self,
        url: &str,
        headers: &[(&str, &str)],
        body: &ClassifyRequest,
    ) -> std::result::Result<TransportResponse, ClassifyError> {
        let mut req_builder = self.client.post(url).json(body);

        for (key, value) in headers {
            req_builder = req_builder.header(*key, *value);
        }

        let response = req_builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(TransportResponse { status, body })
    }
}

pub struct EmotionClassifier {
    url: String,
    model_id: String,
    transport: Arc<dyn Transport>,
}

impl EmotionClassifier {
    /// Builds a classifier over HTTP. Fails if the endpoint is not a usable http(s) URL.
    pub fn new(config: ClassifierConfig) -> Result<Self> {
        let transport = HttpTransport::new(&config)?;
        Self::with_transport(config, Arc::new(transport))
    }

    pub fn with_transport(config: ClassifierConfig, transport: Arc<dyn Transport>) -> Result<Self> {
        let url = reqwest::Url::parse(&config.url).map_err(|e| {
            Error::config(format!("Invalid classifier URL '{}': {}", config.url, e))
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::config(format!(
                "Classifier URL must be http or https, got '{}'",
                url.scheme()
            )));
        }

        if config.model_id.trim().is_empty() {
            return Err(Error::config("Classifier model_id must not be empty"));
        }

        Ok(Self {
            url: config.url,
            model_id: config.model_id,
            transport,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Classifies `text` and assembles the caller-facing result.
    pub async fn classify(&self, text: &str) -> AnalysisResult {
        analysis::normalize(self.score(text).await)
    }

    /// Runs the remote classification without picking a dominant emotion.
    pub async fn score(&self, text: &str) -> Classification {
        if text.trim().is_empty() {
            debug!("Blank input, skipping classifier call");
            return Classification::Empty;
        }

        let request = ClassifyRequest::new(text);
        let headers = [(MODEL_ID_HEADER, self.model_id.as_str())];

        debug!("Calling emotion classifier at {}", self.url);

        let response = match self.transport.post(&self.url, &headers, &request).await {
            Ok(response) => response,
            Err(e) => {
                warn!("Emotion classifier call failed: {}", e);
                return Classification::Failed(e);
            }
        };

        if response.status == 400 {
            debug!("Classifier rejected the text with status 400");
            return Classification::Empty;
        }

        if !response.is_success() {
            warn!("Emotion classifier returned status {}", response.status);
            return Classification::Failed(ClassifyError::Status(response.status));
        }

        match parse_scores(&response.body) {
            Ok(scores) => Classification::Scores(scores),
            Err(e) => {
                warn!("Unusable classifier response: {}", e);
                Classification::Failed(e)
            }
        }
    }
}

/// Extracts the first prediction's scores from an EmotionPredict response body.
pub fn parse_scores(body: &str) -> std::result::Result<analysis::EmotionScores, ClassifyError> {
    let response: ClassifyResponse =
        serde_json::from_str(body).map_err(|e| ClassifyError::InvalidJson(e.to_string()))?;

    response
        .emotion_predictions
        .unwrap_or_default()
        .into_iter()
        .next()
        .map(|prediction| prediction.emotion.into())
        .ok_or(ClassifyError::NoPredictions)
}
