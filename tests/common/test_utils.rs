use super::mocks::MockPredictionApi;
use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use song_relay::{
    config::{PredictionConfig, ServerConfig},
    prediction::PredictionRecord,
    server::{self, handlers::AppState},
};
use serde_json::{Value, json};
use std::sync::Arc;

pub const TEST_TOKEN: &str = "r8_test_token";

/// Create a test prediction configuration pointing at the given base URL
pub fn create_prediction_config(api_base_url: &str) -> PredictionConfig {
    let mut config = PredictionConfig::new(TEST_TOKEN);
    config.api_base_url = api_base_url.to_string();
    config
}

/// Build a router backed by the given mock
pub fn create_mock_app(mock: &MockPredictionApi) -> Router {
    let state = AppState::new(
        ServerConfig::default(),
        create_prediction_config("http://upstream.invalid/v1/predictions"),
        Arc::new(mock.clone()),
    );
    server::router(state)
}

/// A freshly created upstream prediction record
pub fn sample_record_json(id: &str) -> Value {
    json!({
        "id": id,
        "model": "meta/musicgen",
        "version": "671ac645ce5e552cc63a54a2bbff63fcf798043055d2dac5fc9e36a837eedcfb",
        "input": {
            "prompt": "upbeat synthwave",
            "model_version": "stereo-large",
            "output_format": "mp3",
            "normalization_strategy": "peak"
        },
        "logs": "",
        "error": null,
        "status": "starting",
        "created_at": "2024-01-01T00:00:00Z",
        "urls": {
            "cancel": format!("https://api.replicate.com/v1/predictions/{id}/cancel"),
            "get": format!("https://api.replicate.com/v1/predictions/{id}")
        }
    })
}

pub fn sample_record(id: &str) -> PredictionRecord {
    serde_json::from_value(sample_record_json(id)).unwrap()
}

pub fn json_request(method: &str, uri: &str, body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

pub async fn body_string(response: Response<Body>) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}
