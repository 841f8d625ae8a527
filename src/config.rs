use std::fs;
use std::path::Path;
use std::time::Duration;

use reqwest::Url;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_PATH: &str = "config/chat.json";
pub const DEFAULT_ENDPOINT: &str =
    "https://pcb5eyhzc3332c4cv2ekxdxmpa0qjgts.lambda-url.us-east-1.on.aws/";
pub const DEFAULT_USER_ID: &str = "demo-user";
pub const DEFAULT_ERROR_MESSAGE: &str = "Error contacting server.";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid endpoint `{endpoint}`: {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },
    #[error("request_timeout_secs must be at least 1")]
    ZeroTimeout,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub endpoint: String,
    pub user_id: String,
    pub error_message: String,
    pub request_timeout_secs: u64,
    pub window_title: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            user_id: DEFAULT_USER_ID.to_string(),
            error_message: DEFAULT_ERROR_MESSAGE.to_string(),
            request_timeout_secs: 30,
            window_title: "Serverless Chat".to_string(),
        }
    }
}

impl AppConfig {
    /// Values given on the command line or in the environment win over the file.
    pub fn with_overrides(mut self, endpoint: Option<String>, user_id: Option<String>) -> Self {
        if let Some(endpoint) = endpoint {
            self.endpoint = endpoint;
        }
        if let Some(user_id) = user_id {
            self.user_id = user_id;
        }
        self
    }

    pub fn endpoint_url(&self) -> Result<Url, ConfigError> {
        Url::parse(&self.endpoint).map_err(|err| ConfigError::InvalidEndpoint {
            endpoint: self.endpoint.clone(),
            reason: err.to_string(),
        })
    }

    pub fn request_timeout(&self) -> Result<Duration, ConfigError> {
        match self.request_timeout_secs {
            0 => Err(ConfigError::ZeroTimeout),
            secs => Ok(Duration::from_secs(secs)),
        }
    }
}

pub fn load_config(path: &str) -> AppConfig {
    let path = Path::new(path);
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) => {
            log::info!(
                "No chat config at {} ({err}); using built-in endpoint",
                path.display()
            );
            return AppConfig::default();
        }
    };

    match serde_json::from_str::<AppConfig>(&content) {
        Ok(config) => {
            log::debug!(
                "Loaded chat config from {}: endpoint {}, user `{}`",
                path.display(),
                config.endpoint,
                config.user_id
            );
            config
        }
        Err(err) => {
            log::warn!(
                "Ignoring chat config {}: {err}; using built-in defaults",
                path.display()
            );
            AppConfig::default()
        }
    }
}
