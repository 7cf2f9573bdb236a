use super::types::{ApiError, SongResponse};
use crate::{
    config::{PredictionConfig, ServerConfig},
    prediction::{CreationRequest, PredictionApi},
};
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::header::CONTENT_TYPE,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tracing::{debug, error, info};

#[derive(Clone)]
pub struct AppState {
    pub server: Arc<ServerConfig>,
    pub prediction: Arc<PredictionConfig>,
    pub predictions: Arc<dyn PredictionApi>,
}

impl AppState {
    pub fn new(
        server: ServerConfig,
        prediction: PredictionConfig,
        predictions: Arc<dyn PredictionApi>,
    ) -> Self {
        Self {
            server: Arc::new(server),
            prediction: Arc::new(prediction),
            predictions,
        }
    }
}

/// `POST /song`: forwards a generation request with the configured model
/// parameters and returns a polling link for the new job.
pub async fn create_song(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let request = CreationRequest::decode(&body).map_err(|e| {
        debug!("Rejecting song request with invalid body: {}", e);
        ApiError::BadRequest("Invalid JSON format")
    })?;

    let request = request.with_fixed_parameters(&state.prediction);

    let record = state
        .predictions
        .create_prediction(&request)
        .await
        .map_err(|e| {
            error!("Failed to create prediction: {}", e);
            ApiError::from(e)
        })?;

    info!("Created prediction {} with status {}", record.id, record.status);

    let response = SongResponse::from_record(record, &state.server);
    let body = serde_json::to_vec(&response)
        .map_err(|_| ApiError::Internal("Error creating response"))?;

    Ok(([(CONTENT_TYPE, "application/json")], body).into_response())
}

/// `/song/<id>`: relays the upstream job record as-is. Any method is
/// accepted here.
pub async fn song_status(
    State(state): State<AppState>,
    id: Option<Path<String>>,
) -> Result<Response, ApiError> {
    let id = match id {
        Some(Path(id)) if !id.is_empty() => id,
        _ => return Err(ApiError::BadRequest("Invalid song ID")),
    };

    let relayed = state
        .predictions
        .get_prediction(&id)
        .await
        .map_err(ApiError::from)?;

    Ok((
        relayed.status,
        [(CONTENT_TYPE, "application/json")],
        relayed.body,
    )
        .into_response())
}

pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
