//! # Remote Exec
//!
//! A client library for a remote code-execution service (Piston-compatible
//! HTTP API). It submits a source snippet in one of a fixed set of languages,
//! derives a single human-readable output string from the response, and
//! optionally compares that output against an expected string, producing a
//! tri-state match verdict.
//!
//! ## Example
//!
//! ```rust,no_run
//! use remote_exec::{ExecClient, ExecConfig, ExecutionRequest, Language};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ExecClient::new(ExecConfig::default())?;
//!
//!     let request = ExecutionRequest::new(Language::Python, "print('Hello')");
//!     let report = client.run(&request, Some("Hello\n")).await;
//!
//!     println!("{}", report.output);
//!     assert_eq!(report.matched, Some(true));
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! The service distinguishes two failure surfaces:
//!
//! - A service-level error: the exchange succeeded but the service could not
//!   execute the request. The payload's `message` field is surfaced verbatim
//!   with an `Error:` prefix in the report.
//! - A transport failure: network error, timeout, or an unparseable body.
//!   [`ExecClient::execute`] returns these as [`Error`]; [`ExecClient::run`]
//!   renders them into the report as `An error occurred: <detail>`.
//!
//! No failure is retried. Every outcome is terminal for that invocation.

mod client;
mod config;
mod error;
mod language;
mod report;
mod session;
mod types;

pub use client::ExecClient;
pub use config::{ExecConfig, DEFAULT_API_URL};
pub use error::Error;
pub use language::Language;
pub use report::{ExecutionReport, NO_OUTPUT_PLACEHOLDER};
pub use session::RunSession;
pub use types::{ExecuteResponse, ExecutionRequest, RunResult};

/// Result type for remote execution operations
pub type Result<T> = std::result::Result<T, Error>;
