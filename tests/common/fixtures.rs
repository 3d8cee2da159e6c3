use emotion_detector::{
    EmotionClassifier,
    classifier::MODEL_ID_HEADER,
    config::{ClassifierConfig, DEFAULT_MODEL_ID},
};
use serde_json::{Value, json};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, method, path},
};

pub const PREDICT_PATH: &str = "/v1/watson.runtime.nlp.v1/NlpService/EmotionPredict";

/// Reference statements paired with their expected dominant emotion.
pub const CANONICAL_STATEMENTS: [(&str, &str); 5] = [
    ("I am glad this happened", "joy"),
    ("I am really mad about this", "anger"),
    ("I feel disgusted just hearing about this", "disgust"),
    ("I am so sad about this", "sadness"),
    ("I am really afraid that this will happen", "fear"),
];

pub fn classifier_config(server: &MockServer) -> ClassifierConfig {
    ClassifierConfig {
        url: format!("{}{}", server.uri(), PREDICT_PATH),
        ..ClassifierConfig::default()
    }
}

pub fn classifier_for(server: &MockServer) -> EmotionClassifier {
    EmotionClassifier::new(classifier_config(server)).unwrap()
}

/// EmotionPredict success body with a single prediction.
pub fn prediction_body(anger: f64, disgust: f64, fear: f64, joy: f64, sadness: f64) -> Value {
    json!({
        "emotionPredictions": [{
            "emotion": {
                "anger": anger,
                "disgust": disgust,
                "fear": fear,
                "joy": joy,
                "sadness": sadness
            },
            "target": "",
            "emotionMentions": []
        }],
        "producerId": {
            "name": "Ensemble Aggregated Emotion Workflow",
            "version": "0.0.1"
        }
    })
}

/// A body that makes `dominant` the clear winner.
pub fn body_favouring(dominant: &str) -> Value {
    let score = |key: &str| if key == dominant { 0.91 } else { 0.02 };
    prediction_body(
        score("anger"),
        score("disgust"),
        score("fear"),
        score("joy"),
        score("sadness"),
    )
}

/// Mounts a predict endpoint that only answers requests carrying the model header.
pub async fn mount_predict(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path(PREDICT_PATH))
        .and(header(MODEL_ID_HEADER, DEFAULT_MODEL_ID))
        .respond_with(response)
        .mount(server)
        .await;
}

pub async fn mount_never_called(server: &MockServer) {
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(server)
        .await;
}
