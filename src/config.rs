use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default public execution endpoint.
pub const DEFAULT_API_URL: &str = "https://emkc.org/api/v2/piston";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecConfig {
    /// Base URL for the execution service API
    pub api_url: String,

    /// Runtime version selector sent with every request.
    /// The wildcard picks whatever version the service has installed.
    pub runtime_version: String,

    /// Request timeout
    pub timeout: Duration,
}

impl ExecConfig {
    pub fn new() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            runtime_version: "*".to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub fn with_runtime_version(mut self, version: impl Into<String>) -> Self {
        self.runtime_version = version.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for ExecConfig {
    fn default() -> Self {
        Self::new()
    }
}
