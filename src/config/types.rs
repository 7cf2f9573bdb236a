use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    pub prediction: PredictionConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Host name advertised in polling URLs handed back to callers.
    #[serde(default = "default_public_host")]
    pub public_host: String,
    #[serde(default)]
    pub logs: LogsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogsConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// Upstream prediction API settings, including the model parameters that are
/// forced onto every submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionConfig {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    pub bearer_token: String,
    #[serde(default = "default_model_version")]
    pub model_version: String,
    #[serde(default = "default_model_variant")]
    pub model_variant: String,
    #[serde(default = "default_output_format")]
    pub output_format: String,
    #[serde(default = "default_normalization_strategy")]
    pub normalization_strategy: String,
    /// Unset means outbound calls wait for the upstream indefinitely.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

impl ServerConfig {
    /// Polling URL for a prediction job, served by the status endpoint.
    pub fn song_url(&self, id: &str) -> String {
        format!("http://{}:{}/song/{}", self.public_host, self.port, id)
    }
}

impl PredictionConfig {
    pub fn new(bearer_token: impl Into<String>) -> Self {
        Self {
            api_base_url: default_api_base_url(),
            bearer_token: bearer_token.into(),
            model_version: default_model_version(),
            model_variant: default_model_variant(),
            output_format: default_output_format(),
            normalization_strategy: default_normalization_strategy(),
            request_timeout_secs: None,
        }
    }

    pub fn base_url(&self) -> &str {
        self.api_base_url.trim_end_matches('/')
    }

    pub fn authorization(&self) -> String {
        format!("Bearer {}", self.bearer_token)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            public_host: default_public_host(),
            logs: LogsConfig::default(),
        }
    }
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_public_host() -> String {
    "localhost".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_api_base_url() -> String {
    "https://api.replicate.com/v1/predictions".to_string()
}

fn default_model_version() -> String {
    "671ac645ce5e552cc63a54a2bbff63fcf798043055d2dac5fc9e36a837eedcfb".to_string()
}

fn default_model_variant() -> String {
    "stereo-large".to_string()
}

fn default_output_format() -> String {
    "mp3".to_string()
}

fn default_normalization_strategy() -> String {
    "peak".to_string()
}
