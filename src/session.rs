use std::sync::Arc;
use tokio::task::{AbortHandle, JoinHandle};
use tracing::debug;

use crate::{client::ExecClient, report::ExecutionReport, types::ExecutionRequest};

/// Owns the runs of a single caller, one in flight at a time.
///
/// Submitting a new run aborts whatever is still in flight, so a stale
/// response can never land after a newer one. Dropping the session aborts
/// the remaining run, which ties cancellation to the owner's lifetime.
pub struct RunSession {
    client: Arc<ExecClient>,
    in_flight: Option<AbortHandle>,
}

impl RunSession {
    pub fn new(client: ExecClient) -> Self {
        Self {
            client: Arc::new(client),
            in_flight: None,
        }
    }

    /// Start a run, superseding any in-flight one.
    ///
    /// The returned handle resolves to the report; if this run is itself
    /// superseded, awaiting the handle yields a cancelled `JoinError`.
    pub fn submit(
        &mut self,
        request: ExecutionRequest,
        expected: Option<String>,
    ) -> JoinHandle<ExecutionReport> {
        self.cancel();

        let client = Arc::clone(&self.client);
        let handle =
            tokio::spawn(async move { client.run(&request, expected.as_deref()).await });
        self.in_flight = Some(handle.abort_handle());
        handle
    }

    /// Abort the in-flight run, if any.
    pub fn cancel(&mut self) {
        if let Some(previous) = self.in_flight.take() {
            debug!("aborting superseded execution request");
            previous.abort();
        }
    }
}

impl Drop for RunSession {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::ExecConfig, language::Language};
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn session_against(mock_server: &MockServer) -> RunSession {
        let client =
            ExecClient::new(ExecConfig::new().with_api_url(mock_server.uri())).unwrap();
        RunSession::new(client)
    }

    #[tokio::test]
    async fn new_submission_aborts_the_previous_run() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/execute"))
            .and(body_partial_json(json!({"files": [{"content": "slow"}]})))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_delay(Duration::from_secs(10))
                    .set_body_json(json!({"run": {"stdout": "slow done"}})),
            )
            .mount(&mock_server)
            .await;

        Mock::given(method("POST"))
            .and(path("/execute"))
            .and(body_partial_json(json!({"files": [{"content": "fast"}]})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "run": {"stdout": "fast done"}
            })))
            .mount(&mock_server)
            .await;

        let mut session = session_against(&mock_server).await;

        let slow = session.submit(ExecutionRequest::new(Language::Python, "slow"), None);
        let fast = session.submit(ExecutionRequest::new(Language::Python, "fast"), None);

        let report = fast.await.unwrap();
        assert_eq!(report.output, "fast done");

        let err = slow.await.unwrap_err();
        assert!(err.is_cancelled());
    }

    #[tokio::test]
    async fn cancel_is_idempotent_and_safe_when_idle() {
        let mock_server = MockServer::start().await;
        let mut session = session_against(&mock_server).await;

        session.cancel();
        session.cancel();

        Mock::given(method("POST"))
            .and(path("/execute"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "run": {"stdout": "ok"}
            })))
            .mount(&mock_server)
            .await;

        let handle = session.submit(ExecutionRequest::new(Language::Go, "ok"), None);
        assert_eq!(handle.await.unwrap().output, "ok");
    }

    #[tokio::test]
    async fn completed_run_carries_the_verdict() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/execute"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "run": {"stdout": "Hello\n"}
            })))
            .mount(&mock_server)
            .await;

        let mut session = session_against(&mock_server).await;
        let handle = session.submit(
            ExecutionRequest::new(Language::Python, "print('Hello')"),
            Some("Hello".to_string()),
        );

        let report = handle.await.unwrap();
        assert_eq!(report.matched, Some(true));
    }
}
