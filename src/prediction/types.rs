use crate::config::PredictionConfig;
use axum::{body::Bytes, http::StatusCode};
use serde::{Deserialize, Deserializer, Serialize};

/// Generation parameters. Only `prompt` is honoured from callers; the rest
/// are overwritten from configuration before forwarding.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Input {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub prompt: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub model_version: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub output_format: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub normalization_strategy: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreationRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub version: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub input: Input,
}

impl CreationRequest {
    /// Decodes the first JSON value in `body` and ignores anything after it.
    /// A top-level `null` yields an empty request.
    pub fn decode(body: &[u8]) -> serde_json::Result<Self> {
        let mut values = serde_json::Deserializer::from_slice(body).into_iter::<Option<Self>>();
        match values.next() {
            Some(value) => Ok(value?.unwrap_or_default()),
            None => serde_json::from_slice(body),
        }
    }

    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            version: String::new(),
            input: Input {
                prompt: prompt.into(),
                ..Input::default()
            },
        }
    }

    /// Forces the configured model parameters, discarding whatever the
    /// caller supplied for them.
    pub fn with_fixed_parameters(mut self, config: &PredictionConfig) -> Self {
        self.version = config.model_version.clone();
        self.input.model_version = config.model_variant.clone();
        self.input.output_format = config.output_format.clone();
        self.input.normalization_strategy = config.normalization_strategy.clone();
        self
    }
}

/// Job record as returned by the prediction API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRecord {
    /// Required: a document without an id is a parse failure, not an empty polling link.
    pub id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub model: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub version: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub input: Input,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub logs: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub error: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub status: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub created_at: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub urls: PredictionUrls,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PredictionUrls {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub cancel: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub get: String,
}

/// Upstream answer passed through without interpretation.
#[derive(Debug, Clone)]
pub struct RelayedResponse {
    pub status: StatusCode,
    pub body: Bytes,
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    null_as_default(deserializer)
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
