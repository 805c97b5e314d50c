use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::types::ExecuteResponse;

/// Shown when the program produced no output at all.
pub const NO_OUTPUT_PLACEHOLDER: &str = "Execution finished with no output.";

/// Terminal outcome of one execution request: the display string and, when an
/// expected output was supplied, whether the produced output matched it.
///
/// `matched` is tri-state: `Some(true)` / `Some(false)` when an expected
/// output was given, `None` when it was empty or the run never produced
/// comparable output (service-level error, transport failure).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionReport {
    pub output: String,
    pub matched: Option<bool>,
}

impl ExecutionReport {
    /// Derive the report from a service response.
    ///
    /// A non-empty `message` wins over any `run` content and suppresses the
    /// comparison. Otherwise the display string is `stdout` then `stderr`
    /// with no separator, falling back to the service's combined `output`
    /// field, falling back to [`NO_OUTPUT_PLACEHOLDER`]. Comparison trims
    /// both sides and requires exact equality.
    pub fn from_response(response: &ExecuteResponse, expected: Option<&str>) -> Self {
        if let Some(message) = response.message.as_deref().filter(|m| !m.is_empty()) {
            return Self {
                output: format!("Error: {message}"),
                matched: None,
            };
        }

        let run = response.run.clone().unwrap_or_default();
        let combined = format!("{}{}", run.stdout, run.stderr);
        let output = if !combined.is_empty() {
            combined
        } else if !run.output.is_empty() {
            run.output
        } else {
            NO_OUTPUT_PLACEHOLDER.to_string()
        };

        let matched = expected
            .map(str::trim)
            .filter(|e| !e.is_empty())
            .map(|e| output.trim() == e);

        Self { output, matched }
    }

    /// Render a transport failure. The verdict stays absent.
    pub fn from_failure(error: &Error) -> Self {
        Self {
            output: format!("An error occurred: {error}"),
            matched: None,
        }
    }
}
