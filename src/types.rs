use serde::{Deserialize, Serialize};

use crate::language::Language;

/// A single code-execution request, constructed per invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionRequest {
    /// Programming language of the snippet
    pub language: Language,
    /// Source code to execute
    pub source: String,
    /// Standard input fed to the program
    #[serde(default)]
    pub stdin: String,
}

impl ExecutionRequest {
    pub fn new(language: Language, source: impl Into<String>) -> Self {
        Self {
            language,
            source: source.into(),
            stdin: String::new(),
        }
    }

    pub fn with_stdin(mut self, stdin: impl Into<String>) -> Self {
        self.stdin = stdin.into();
        self
    }
}

/// One file in the outbound payload; the service takes the source as a
/// single-element file list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilePayload {
    pub content: String,
}

/// Wire format of the execute call
#[derive(Debug, Clone, Serialize)]
pub struct ExecutePayload {
    pub language: String,
    pub version: String,
    pub files: Vec<FilePayload>,
    pub stdin: String,
}

/// Captured output of the program run
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RunResult {
    #[serde(default)]
    pub stdout: String,
    #[serde(default)]
    pub stderr: String,
    /// Combined output as reported by the service
    #[serde(default)]
    pub output: String,
    #[serde(default)]
    pub code: Option<i32>,
    #[serde(default)]
    pub signal: Option<String>,
}

/// Response payload: either a service-level `message` (the service could not
/// execute the request) or a `run` object with the captured output.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExecuteResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub run: Option<RunResult>,
}
