//! `log` crate bridge.

use std::sync::Arc;

use log::{LevelFilter, Log, Metadata, Record};

use crate::config::{LoggerConfig, LoggerOptions};
use crate::level::Level;
use crate::logger::Output;
use crate::sink::{ConsoleSink, sink_for};

/// A `log::Log` implementation writing prefixed console lines.
///
/// Every record is accepted; `Trace` prints as `debug`.
pub struct LogBridge {
    config: LoggerConfig,
    sink: Arc<dyn ConsoleSink>,
}

impl LogBridge {
    /// Create a bridge writing to the host's console.
    #[must_use]
    pub fn new(options: LoggerOptions) -> Self {
        let config = options.resolve();
        let sink = sink_for(config.host());
        Self { config, sink }
    }

    /// Create a bridge writing to `sink`.
    #[must_use]
    pub fn with_sink(options: LoggerOptions, sink: Arc<dyn ConsoleSink>) -> Self {
        Self {
            config: options.resolve(),
            sink,
        }
    }

    /// Initialize as the global logger.
    ///
    /// Returns an error if a logger has already been set.
    pub fn init(options: LoggerOptions) -> Result<(), log::SetLoggerError> {
        log::set_boxed_logger(Box::new(Self::new(options)))?;
        log::set_max_level(LevelFilter::Trace);
        Ok(())
    }

    /// Initialize as the global logger, ignoring errors if already set.
    pub fn try_init(options: LoggerOptions) {
        let _ = Self::init(options);
    }
}

impl std::fmt::Debug for LogBridge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogBridge")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Log for LogBridge {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        let output = Output::bind(
            Level::from(record.level()),
            Arc::from(record.target()),
            &self.config,
            self.sink.clone(),
        );
        output.call(record.args(), &[]);
    }

    fn flush(&self) {}
}
