//! Structured JSON logging for AWS Lambda functions, built on [`tracing`].
//!
//! This crate composes a `tracing` subscriber that writes one JSON record
//! per event to stdout and stamps every record with request-scoped
//! metadata from the Lambda execution context (`request_id`,
//! `function_arn`) plus any caller-selected environment values. The level
//! threshold comes from the `LOG_LEVEL` environment variable and falls
//! back to `info` when the variable is absent or unparseable.
//!
//! Filtering, dispatch, and the sink are plain `tracing-subscriber`
//! machinery; this crate only composes them.
//!
//! # Example
//!
//! ```no_run
//! let subscriber = tracing_lambda::builder()
//!     .with_env_vars(["AWS_REGION"])
//!     .build();
//!
//! tracing::subscriber::with_default(subscriber, || {
//!     tracing::info!(cold_start = true, "function initialized");
//! });
//! ```
//!
//! Inside a handler, attach the invocation context so every record of
//! that invocation carries its identifiers:
//!
//! ```no_run
//! # fn per_invocation(context: &lambda_runtime::Context) {
//! let subscriber = tracing_lambda::builder()
//!     .with_lambda_context(context)
//!     .build();
//! tracing::subscriber::with_default(subscriber, || {
//!     tracing::info!("handling event");
//! });
//! # }
//! ```

mod fields;
mod format;
pub mod handler;
pub mod level;

pub use handler::{builder, new_subscriber, Builder, InitError};
pub use level::{level_from_env, LOG_LEVEL_VAR};
