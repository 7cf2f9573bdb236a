mod types;

pub use types::*;

use crate::{Error, Result};
use std::env;
use tracing::debug;

pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());
    let mut config = load_from(&config_path).await?;

    if let Ok(token) = env::var("PREDICTION_API_TOKEN") {
        config.prediction.bearer_token = token;
    }

    validate(&config)?;
    Ok(config)
}

/// Reads a config file without applying environment overrides or validation.
pub async fn load_from(config_path: &str) -> Result<Config> {
    debug!("Loading configuration from: {}", config_path);

    let config_str = tokio::fs::read_to_string(config_path).await?;
    parse(&config_str)
}

pub fn parse(config_str: &str) -> Result<Config> {
    let config: Config = serde_yaml::from_str(config_str)?;
    Ok(config)
}

pub fn validate(config: &Config) -> Result<()> {
    let prediction = &config.prediction;

    if prediction.bearer_token.trim().is_empty() {
        return Err(Error::config("prediction.bearer_token must not be empty"));
    }

    if prediction.base_url().is_empty() {
        return Err(Error::config("prediction.api_base_url must not be empty"));
    }

    if prediction.request_timeout_secs == Some(0) {
        return Err(Error::config(
            "prediction.request_timeout_secs must be greater than zero",
        ));
    }

    Ok(())
}
