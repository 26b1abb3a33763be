//! JSON event formatting.
//!
//! One JSON object per record, terminated by a newline, so that each line
//! of the sink is an independent document for the log-ingestion backend.

use std::fmt;

use chrono::{SecondsFormat, Utc};
use serde_json::{Map, Value};
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

use crate::fields::ConstantFields;

/// Event formatter that merges a constant attribute set into every record.
///
/// Record layout: `timestamp`, `level`, `target`, the event's own fields
/// (`message` included), source location when enabled, then the constant
/// attributes. A constant attribute wins when an event field reuses its
/// key.
pub(crate) struct JsonEventFormat {
    attributes: ConstantFields,
    source_location: bool,
}

impl JsonEventFormat {
    pub(crate) fn new(attributes: ConstantFields, source_location: bool) -> Self {
        Self {
            attributes,
            source_location,
        }
    }
}

impl<S, N> FormatEvent<S, N> for JsonEventFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let metadata = event.metadata();

        let mut record = Map::new();
        record.insert(
            "timestamp".to_owned(),
            Value::from(Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)),
        );
        record.insert("level".to_owned(), Value::from(metadata.level().to_string()));
        record.insert("target".to_owned(), Value::from(metadata.target()));

        if self.source_location {
            if let Some(file) = metadata.file() {
                record.insert("file".to_owned(), Value::from(file));
            }
            if let Some(line) = metadata.line() {
                record.insert("line".to_owned(), Value::from(line));
            }
        }

        event.record(&mut JsonVisitor {
            record: &mut record,
        });

        for (key, value) in self.attributes.entries() {
            record.insert(key.clone(), Value::from(value.as_str()));
        }

        writeln!(writer, "{}", Value::Object(record))
    }
}

/// Collects event fields into a JSON map, keeping primitive types intact.
struct JsonVisitor<'a> {
    record: &'a mut Map<String, Value>,
}

impl Visit for JsonVisitor<'_> {
    fn record_f64(&mut self, field: &Field, value: f64) {
        self.record.insert(field.name().to_owned(), Value::from(value));
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record.insert(field.name().to_owned(), Value::from(value));
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.record.insert(field.name().to_owned(), Value::from(value));
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.record.insert(field.name().to_owned(), Value::from(value));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.record.insert(field.name().to_owned(), Value::from(value));
    }

    fn record_error(&mut self, field: &Field, value: &(dyn std::error::Error + 'static)) {
        self.record
            .insert(field.name().to_owned(), Value::from(value.to_string()));
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.record
            .insert(field.name().to_owned(), Value::from(format!("{:?}", value)));
    }
}
