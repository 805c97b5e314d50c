use reqwest::Client;
use tracing::{debug, warn};

use crate::{
    config::ExecConfig,
    error::Error,
    report::ExecutionReport,
    types::{ExecutePayload, ExecuteResponse, ExecutionRequest, FilePayload},
};

/// Client for the remote code-execution API
pub struct ExecClient {
    client: Client,
    config: ExecConfig,
}

impl ExecClient {
    /// Create a new ExecClient with the given configuration
    pub fn new(config: ExecConfig) -> Result<Self, Error> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(Error::HttpClient)?;

        Ok(Self { client, config })
    }

    /// Submit one execution request and return the parsed response.
    ///
    /// Exactly one outbound call, no retry. The service reports its own
    /// errors through a `message` field, usually with a non-2xx status, so
    /// any body that parses as the service shape is returned as-is; the
    /// status only matters when the body is unparseable.
    pub async fn execute(&self, request: &ExecutionRequest) -> Result<ExecuteResponse, Error> {
        let payload = ExecutePayload {
            language: request.language.runtime_name().to_string(),
            version: self.config.runtime_version.clone(),
            files: vec![FilePayload {
                content: request.source.clone(),
            }],
            stdin: request.stdin.clone(),
        };

        debug!(language = %request.language, "submitting execution request");

        let response = self
            .client
            .post(format!("{}/execute", self.config.api_url))
            .header("Content-Type", "application/json")
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        match serde_json::from_str::<ExecuteResponse>(&body) {
            Ok(parsed) => Ok(parsed),
            Err(_) if !status.is_success() => Err(Error::Api {
                status_code: status.as_u16(),
                message: body,
            }),
            Err(err) => Err(Error::Decode(err)),
        }
    }

    /// Run a request end to end: execute, derive the display output, and
    /// compare it against `expected` when that trims to non-empty.
    ///
    /// Never fails; transport failures are rendered into the report so the
    /// caller always has something to display.
    pub async fn run(
        &self,
        request: &ExecutionRequest,
        expected: Option<&str>,
    ) -> ExecutionReport {
        match self.execute(request).await {
            Ok(response) => ExecutionReport::from_response(&response, expected),
            Err(error) => {
                warn!(%error, "execution request failed");
                ExecutionReport::from_failure(&error)
            }
        }
    }
}
