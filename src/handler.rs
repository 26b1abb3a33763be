//! Handler construction.

use std::io;

use lambda_runtime::Context;
use tracing::level_filters::LevelFilter;
use tracing::Subscriber;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::Layer;

use crate::fields::ConstantFields;
use crate::format::JsonEventFormat;
use crate::level;

/// The error type returned when installing a handler globally.
#[derive(Debug, thiserror::Error)]
pub enum InitError {
    #[error("failed to install the global default subscriber")]
    SetGlobalDefault(#[from] TryInitError),
}

/// Start building a handler.
pub fn builder() -> Builder {
    Builder::default()
}

/// Build a handler for the given invocation in one call.
///
/// The context is optional; without it the handler simply carries no
/// `request_id`/`function_arn` attributes.
pub fn new_subscriber(
    context: Option<&Context>,
    env_vars: &[&str],
) -> impl Subscriber + Send + Sync {
    let mut builder = builder().with_env_vars(env_vars);
    if let Some(context) = context {
        builder = builder.with_lambda_context(context);
    }
    builder.build()
}

/// Builder for a Lambda log handler.
///
/// `build` composes a subscriber that writes one JSON record per event to
/// stdout, carrying the configured constant attributes on every record.
/// Composition never fails: an absent execution context simply yields a
/// handler without `request_id`/`function_arn`, and an unusable
/// `LOG_LEVEL` value falls back to the informational level.
///
/// Use [`Builder::init`] for one-shot global installation during cold
/// start, or [`Builder::build`] with
/// [`tracing::subscriber::with_default`] to scope request-bound
/// attributes to a single invocation.
pub struct Builder {
    fields: ConstantFields,
    max_level: Option<LevelFilter>,
    source_location: bool,
    writer: BoxMakeWriter,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            fields: ConstantFields::new(),
            max_level: None,
            source_location: false,
            writer: BoxMakeWriter::new(io::stdout),
        }
    }
}

impl Builder {
    /// Attach `request_id` and `function_arn` attributes from the Lambda
    /// execution context.
    pub fn with_lambda_context(self, context: &Context) -> Self {
        self.with_invocation(&context.request_id, &context.invoked_function_arn)
    }

    /// Attach `request_id` and `function_arn` attributes from raw values.
    pub fn with_invocation(mut self, request_id: &str, function_arn: &str) -> Self {
        self.fields.push("request_id", request_id);
        self.fields.push("function_arn", function_arn);
        self
    }

    /// Attach one attribute per named environment variable that is set,
    /// keyed by the lower-cased variable name. Unset variables are
    /// skipped.
    pub fn with_env_vars<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.fields.extend_from_env(names);
        self
    }

    /// Override the level threshold instead of resolving it from
    /// `LOG_LEVEL`.
    pub fn with_max_level(mut self, level: LevelFilter) -> Self {
        self.max_level = Some(level);
        self
    }

    /// Include `file` and `line` attributes on every record.
    pub fn with_source_location(mut self, enabled: bool) -> Self {
        self.source_location = enabled;
        self
    }

    /// Redirect output away from stdout.
    pub fn with_writer<M>(mut self, make_writer: M) -> Self
    where
        M: for<'a> MakeWriter<'a> + Send + Sync + 'static,
    {
        self.writer = BoxMakeWriter::new(make_writer);
        self
    }

    /// Compose the handler.
    pub fn build(self) -> impl Subscriber + Send + Sync {
        let level = self.max_level.unwrap_or_else(level::level_from_env);
        let fmt_layer = tracing_subscriber::fmt::layer()
            .event_format(JsonEventFormat::new(self.fields, self.source_location))
            .with_writer(self.writer);
        tracing_subscriber::registry().with(fmt_layer.with_filter(level))
    }

    /// Compose the handler and install it as the global default
    /// subscriber.
    pub fn try_init(self) -> Result<(), InitError> {
        self.build().try_init()?;
        Ok(())
    }

    /// Like [`Builder::try_init`] but panics if a global default
    /// subscriber is already installed.
    pub fn init(self) {
        self.try_init().expect("failed to install subscriber");
    }
}
