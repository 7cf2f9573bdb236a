use crate::{Error, config::ServerConfig, prediction::{Input, PredictionRecord}};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

pub const PROCESSING_MESSAGE: &str =
    "Your song is being processed, get the song with the link below";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SongResponse {
    pub message: String,
    pub song: String,
    pub input: Input,
    pub status: String,
    pub created_at: String,
}

impl SongResponse {
    pub fn from_record(record: PredictionRecord, server: &ServerConfig) -> Self {
        Self {
            message: PROCESSING_MESSAGE.to_string(),
            song: server.song_url(&record.id),
            input: record.input,
            status: record.status,
            created_at: record.created_at,
        }
    }
}

/// Failure returned to callers as a plain-text body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiError {
    BadRequest(&'static str),
    MethodNotAllowed,
    Internal(&'static str),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::BadRequest(msg) | Self::Internal(msg) => msg,
            Self::MethodNotAllowed => "Method not allowed",
        }
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        let msg = match err {
            Error::RequestBuild(_) => "Error creating HTTP request",
            Error::Network(_) => "Error calling prediction API",
            Error::ResponseRead(_) => "Error reading API response",
            Error::ResponseParse(_) => "Error parsing API response",
            Error::Serialization(_) => "Error preparing API request",
            _ => "Internal server error",
        };
        Self::Internal(msg)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), format!("{}\n", self.message())).into_response()
    }
}
