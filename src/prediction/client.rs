use super::types::*;
use crate::{Error, Result, config::PredictionConfig};
use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use std::time::Duration;
use tracing::{debug, info};

#[async_trait]
pub trait PredictionApi: Send + Sync {
    /// Submits a new prediction job and returns the upstream job record.
    async fn create_prediction(&self, request: &CreationRequest) -> Result<PredictionRecord>;

    /// Looks up a prediction job, returning the upstream answer untouched.
    async fn get_prediction(&self, id: &str) -> Result<RelayedResponse>;
}

pub struct HttpPredictionClient {
    client: reqwest::Client,
    base_url: String,
    authorization: String,
}

impl HttpPredictionClient {
    pub fn new(config: &PredictionConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();

        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        let client = builder
            .build()
            .map_err(|e| Error::config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url().to_string(),
            authorization: config.authorization(),
        })
    }

    fn auth_headers(&self) -> Result<HeaderMap> {
        let mut value = HeaderValue::from_str(&self.authorization)
            .map_err(|e| Error::request_build(format!("invalid authorization header: {}", e)))?;
        value.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, value);
        Ok(headers)
    }

    async fn execute(&self, request: reqwest::RequestBuilder) -> Result<reqwest::Response> {
        let request = request
            .build()
            .map_err(|e| Error::request_build(e.to_string()))?;

        debug!("Sending {} {}", request.method(), request.url());

        Ok(self.client.execute(request).await?)
    }
}

#[async_trait]
impl PredictionApi for HttpPredictionClient {
    async fn create_prediction(&self, request: &CreationRequest) -> Result<PredictionRecord> {
        let body = serde_json::to_vec(request)?;

        info!("Submitting prediction: {}", String::from_utf8_lossy(&body));

        let builder = self
            .client
            .post(&self.base_url)
            .headers(self.auth_headers()?)
            .header(CONTENT_TYPE, "application/json")
            .body(body);

        let response = self.execute(builder).await?;
        let raw = response.bytes().await.map_err(Error::ResponseRead)?;

        info!(
            "Prediction API Response: {}",
            String::from_utf8_lossy(&raw)
        );

        serde_json::from_slice(&raw).map_err(Error::ResponseParse)
    }

    async fn get_prediction(&self, id: &str) -> Result<RelayedResponse> {
        let builder = self
            .client
            .get(format!("{}/{}", self.base_url, id))
            .headers(self.auth_headers()?);

        let response = self.execute(builder).await?;
        let status = response.status();
        let body = response.bytes().await.map_err(Error::ResponseRead)?;

        debug!("Relaying prediction {} with status {}", id, status);

        Ok(RelayedResponse { status, body })
    }
}
