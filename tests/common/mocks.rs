use async_trait::async_trait;
use axum::{body::Bytes, http::StatusCode};
use song_relay::{
    Error, Result,
    prediction::{CreationRequest, PredictionApi, PredictionRecord, RelayedResponse},
};
use std::sync::{Arc, Mutex};

/// Mock prediction API that records every call it receives
#[derive(Debug, Default, Clone)]
pub struct MockPredictionApi {
    pub created: Arc<Mutex<Vec<CreationRequest>>>,
    pub lookups: Arc<Mutex<Vec<String>>>,
    pub record: Option<PredictionRecord>,
    pub relayed: Option<(StatusCode, String)>,
    pub fail_request: bool,
}

impl MockPredictionApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(mut self, record: PredictionRecord) -> Self {
        self.record = Some(record);
        self
    }

    pub fn with_relayed(mut self, status: StatusCode, body: impl Into<String>) -> Self {
        self.relayed = Some((status, body.into()));
        self
    }

    pub fn with_request_failure(mut self) -> Self {
        self.fail_request = true;
        self
    }

    pub fn created_requests(&self) -> Vec<CreationRequest> {
        self.created.lock().unwrap().clone()
    }

    pub fn looked_up_ids(&self) -> Vec<String> {
        self.lookups.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.created.lock().unwrap().len() + self.lookups.lock().unwrap().len()
    }

    fn request_error() -> Error {
        Error::request_build("simulated upstream failure")
    }
}

#[async_trait]
impl PredictionApi for MockPredictionApi {
    async fn create_prediction(&self, request: &CreationRequest) -> Result<PredictionRecord> {
        self.created.lock().unwrap().push(request.clone());

        if self.fail_request {
            return Err(Self::request_error());
        }

        self.record
            .clone()
            .ok_or_else(|| Error::ResponseParse(serde_json::from_str::<()>("").unwrap_err()))
    }

    async fn get_prediction(&self, id: &str) -> Result<RelayedResponse> {
        self.lookups.lock().unwrap().push(id.to_string());

        if self.fail_request {
            return Err(Self::request_error());
        }

        let (status, body) = self
            .relayed
            .clone()
            .unwrap_or((StatusCode::OK, "{}".to_string()));

        Ok(RelayedResponse {
            status,
            body: Bytes::from(body),
        })
    }
}
