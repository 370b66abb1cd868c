//! `tracing` integration.
//!
//! Provides a tracing `Layer` that routes events through prefixed console
//! output.

use std::fmt;
use std::sync::Arc;

use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::prelude::*;
use tracing_subscriber::registry::LookupSpan;

use crate::config::{LoggerConfig, LoggerOptions};
use crate::level::Level;
use crate::logger::Output;
use crate::sink::{ConsoleSink, sink_for};

/// A tracing layer writing each event as one console call.
///
/// The event target names the line, the `message` field is the primary
/// message, and remaining fields follow as `key=value` values. Events inside
/// spans get a trailing `span=outer::inner`.
pub struct BoiledLayer {
    config: LoggerConfig,
    sink: Arc<dyn ConsoleSink>,
}

impl BoiledLayer {
    /// Create a layer writing to the host's console.
    #[must_use]
    pub fn new(options: LoggerOptions) -> Self {
        let config = options.resolve();
        let sink = sink_for(config.host());
        Self { config, sink }
    }

    /// Create a layer writing to `sink`.
    #[must_use]
    pub fn with_sink(options: LoggerOptions, sink: Arc<dyn ConsoleSink>) -> Self {
        Self {
            config: options.resolve(),
            sink,
        }
    }

    /// Install `registry().with(layer)` as the global default subscriber.
    pub fn init(options: LoggerOptions) -> Result<(), tracing::subscriber::SetGlobalDefaultError> {
        let subscriber = tracing_subscriber::registry().with(Self::new(options));
        tracing::subscriber::set_global_default(subscriber)
    }
}

impl fmt::Debug for BoiledLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoiledLayer")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Splits an event into its message and `key=value` extras.
#[derive(Default)]
struct FieldCollector {
    message: Option<String>,
    extras: Vec<String>,
}

impl FieldCollector {
    fn push(&mut self, field: &Field, value: &dyn fmt::Display) {
        match field.name() {
            "message" if self.message.is_none() => self.message = Some(value.to_string()),
            "message" => {}
            name => self.extras.push(format!("{name}={value}")),
        }
    }
}

// Numbers and bools fall through to `record_debug`.
impl Visit for FieldCollector {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.push(field, &value);
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.push(field, &format_args!("{value:?}"));
    }
}

impl<S> Layer<S> for BoiledLayer
where
    S: Subscriber + for<'lookup> LookupSpan<'lookup>,
{
    fn on_event(&self, event: &Event<'_>, ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let mut collector = FieldCollector::default();
        event.record(&mut collector);

        if let Some(scope) = ctx.event_scope(event) {
            let spans: Vec<&str> = scope.from_root().map(|span| span.name()).collect();
            if !spans.is_empty() {
                collector.extras.push(format!("span={}", spans.join("::")));
            }
        }

        let message = collector
            .message
            .unwrap_or_else(|| metadata.name().to_string());
        let extras: Vec<&dyn fmt::Display> = collector
            .extras
            .iter()
            .map(|field| field as &dyn fmt::Display)
            .collect();

        let output = Output::bind(
            Level::from(*metadata.level()),
            Arc::from(metadata.target()),
            &self.config,
            self.sink.clone(),
        );
        output.call(&message, &extras);
    }
}
