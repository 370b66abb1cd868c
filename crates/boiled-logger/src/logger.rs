//! The prefixed console logger.
//!
//! A [`BoiledLogger`] binds one [`Output`] per level at construction. Each
//! handle carries its style token and forwards calls straight to the sink:
//!
//! ```ignore
//! use boiled_logger::{BoiledLogger, LoggerOptions};
//!
//! let log = BoiledLogger::new("TradeChart", LoggerOptions::new().with_node_color(true));
//! log.info().log("chart ready");
//! boiled_logger::warn!(log, "slow frame", 42, "ms");
//! ```

use std::fmt;
use std::sync::Arc;

use crate::clock::Clock;
use crate::config::{LoggerConfig, LoggerOptions};
use crate::level::Level;
use crate::prefix::PrefixFormat;
use crate::sink::{ConsoleSink, sink_for};
use crate::style::StyleToken;

/// A leveled output handle with its prefix and style bound in.
///
/// Cheap to clone; clones write to the same sink.
#[derive(Clone)]
pub struct Output {
    level: Level,
    name: Arc<str>,
    style: StyleToken,
    prefix_format: PrefixFormat,
    show_time: bool,
    clock: Clock,
    sink: Arc<dyn ConsoleSink>,
}

impl Output {
    pub(crate) fn bind(
        level: Level,
        name: Arc<str>,
        config: &LoggerConfig,
        sink: Arc<dyn ConsoleSink>,
    ) -> Self {
        Self {
            level,
            name,
            style: config.style_strategy().resolve(level),
            prefix_format: config.prefix_format().clone(),
            show_time: config.enable_timestamp(),
            clock: config.clock().clone(),
            sink,
        }
    }

    /// The level this handle writes at
    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }

    /// The style token resolved at construction
    #[must_use]
    pub fn style(&self) -> StyleToken {
        self.style
    }

    /// Render the prefix as of now, unstyled.
    #[must_use]
    pub fn prefix(&self) -> String {
        let time = if self.show_time {
            self.clock.now()
        } else {
            String::new()
        };
        self.prefix_format.format(self.level, &self.name, &time)
    }

    /// Emit `message` followed by `rest`.
    ///
    /// With CSS styling the sink receives `"%c<prefix>"`, the CSS, then the
    /// values; otherwise the (possibly ANSI-wrapped) prefix, then the values.
    pub fn call(&self, message: &dyn fmt::Display, rest: &[&dyn fmt::Display]) {
        let prefix = self.prefix();

        match self.style {
            StyleToken::Css(css) => {
                let head = format!("%c{prefix}");
                let mut args: Vec<&dyn fmt::Display> = Vec::with_capacity(rest.len() + 3);
                args.push(&head);
                args.push(&css);
                args.push(message);
                args.extend_from_slice(rest);
                self.sink.write(self.level, &args);
            }
            StyleToken::Ansi { .. } | StyleToken::Plain => {
                let head = self.style.wrap(&prefix);
                let mut args: Vec<&dyn fmt::Display> = Vec::with_capacity(rest.len() + 2);
                args.push(&head);
                args.push(message);
                args.extend_from_slice(rest);
                self.sink.write(self.level, &args);
            }
        }
    }

    /// Emit a single message.
    pub fn log(&self, message: impl fmt::Display) {
        self.call(&message, &[]);
    }
}

impl fmt::Debug for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Output")
            .field("level", &self.level)
            .field("name", &self.name)
            .field("style", &self.style)
            .finish_non_exhaustive()
    }
}

/// Named logger exposing `info`, `debug`, `warn` and `error` handles
#[derive(Debug, Clone)]
pub struct BoiledLogger {
    name: Arc<str>,
    config: LoggerConfig,
    info: Output,
    debug: Output,
    warn: Output,
    error: Output,
}

impl BoiledLogger {
    /// Create a logger writing to the host's console.
    #[must_use]
    pub fn new(name: impl Into<Arc<str>>, options: LoggerOptions) -> Self {
        let config = options.resolve();
        let sink = sink_for(config.host());
        Self::from_config(name, config, sink)
    }

    /// Create a logger writing to `sink`.
    #[must_use]
    pub fn with_sink(
        name: impl Into<Arc<str>>,
        options: LoggerOptions,
        sink: Arc<dyn ConsoleSink>,
    ) -> Self {
        Self::from_config(name, options.resolve(), sink)
    }

    /// Create a logger from an already resolved configuration.
    #[must_use]
    pub fn from_config(
        name: impl Into<Arc<str>>,
        config: LoggerConfig,
        sink: Arc<dyn ConsoleSink>,
    ) -> Self {
        let name = name.into();
        let bind = |level| Output::bind(level, name.clone(), &config, sink.clone());

        Self {
            info: bind(Level::Info),
            debug: bind(Level::Debug),
            warn: bind(Level::Warn),
            error: bind(Level::Error),
            name,
            config,
        }
    }

    /// The logger's name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The resolved configuration
    #[must_use]
    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    /// `info` handle
    #[must_use]
    pub fn info(&self) -> &Output {
        &self.info
    }

    /// `debug` handle
    #[must_use]
    pub fn debug(&self) -> &Output {
        &self.debug
    }

    /// `warn` handle
    #[must_use]
    pub fn warn(&self) -> &Output {
        &self.warn
    }

    /// `error` handle
    #[must_use]
    pub fn error(&self) -> &Output {
        &self.error
    }

    /// Handle for `level`
    #[must_use]
    pub fn output(&self, level: Level) -> &Output {
        match level {
            Level::Info => &self.info,
            Level::Debug => &self.debug,
            Level::Warn => &self.warn,
            Level::Error => &self.error,
        }
    }
}

/// Log at `info`: `info!(logger, message, extra...)`.
#[macro_export]
macro_rules! info {
    ($logger:expr, $message:expr $(, $arg:expr)* $(,)?) => {
        $logger.info().call(&$message, &[$(&$arg),*])
    };
}

/// Log at `debug`: `debug!(logger, message, extra...)`.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $message:expr $(, $arg:expr)* $(,)?) => {
        $logger.debug().call(&$message, &[$(&$arg),*])
    };
}

/// Log at `warn`: `warn!(logger, message, extra...)`.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $message:expr $(, $arg:expr)* $(,)?) => {
        $logger.warn().call(&$message, &[$(&$arg),*])
    };
}

/// Log at `error`: `error!(logger, message, extra...)`.
#[macro_export]
macro_rules! error {
    ($logger:expr, $message:expr $(, $arg:expr)* $(,)?) => {
        $logger.error().call(&$message, &[$(&$arg),*])
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::HostKind;
    use crate::testing::CaptureConsole;

    fn terminal() -> LoggerOptions {
        LoggerOptions::new().with_host(HostKind::Terminal)
    }

    #[test]
    fn test_each_level_binds_its_own_handle() {
        let capture = CaptureConsole::new();
        let log = BoiledLogger::with_sink("svc", terminal(), capture.sink());

        for level in Level::ALL {
            assert_eq!(log.output(level).level(), level);
            log.output(level).log("x");
        }

        let levels: Vec<Level> = capture.calls().iter().map(|c| c.level).collect();
        assert_eq!(levels, Level::ALL);
    }

    #[test]
    fn test_plain_call_shape() {
        let capture = CaptureConsole::new();
        let log = BoiledLogger::with_sink(
            "svc",
            terminal().with_timestamp(false),
            capture.sink(),
        );

        log.warn().call(&"disk", &[&90, &"%"]);

        let call = capture.last().unwrap();
        assert_eq!(call.level, Level::Warn);
        assert_eq!(call.args, ["[warn] [svc]", "disk", "90", "%"]);
    }

    #[test]
    fn test_structured_call_shape() {
        let capture = CaptureConsole::new();
        let log = BoiledLogger::with_sink(
            "svc",
            LoggerOptions::new()
                .with_host(HostKind::Windowed)
                .with_timestamp(false),
            capture.sink(),
        );

        log.debug().log("tick");

        let call = capture.last().unwrap();
        assert_eq!(call.args, ["%c[debug] [svc]", "color: #999", "tick"]);
    }

    #[test]
    fn test_ansi_call_shape() {
        let capture = CaptureConsole::new();
        let log = BoiledLogger::with_sink(
            "svc",
            terminal().with_node_color(true).with_timestamp(false),
            capture.sink(),
        );

        log.info().log("up");

        let call = capture.last().unwrap();
        assert_eq!(call.args, ["\x1b[34m[info] [svc]\x1b[0m", "up"]);
    }

    #[test]
    fn test_macros_forward_extra_values() {
        let capture = CaptureConsole::new();
        let log = BoiledLogger::with_sink("m", terminal().with_timestamp(false), capture.sink());

        crate::info!(log, "a");
        crate::debug!(log, "b", 1);
        crate::warn!(log, "c", 2, 3.5,);
        crate::error!(log, format_args!("{}-{}", "d", 4), true);

        let args: Vec<Vec<String>> = capture.calls().into_iter().map(|c| c.args).collect();
        assert_eq!(
            args,
            vec![
                vec!["[info] [m]".to_string(), "a".into()],
                vec!["[debug] [m]".to_string(), "b".into(), "1".into()],
                vec!["[warn] [m]".to_string(), "c".into(), "2".into(), "3.5".into()],
                vec!["[error] [m]".to_string(), "d-4".into(), "true".into()],
            ]
        );
    }

    #[test]
    fn test_prefix_uses_current_time() {
        let log = BoiledLogger::with_sink("t", terminal(), CaptureConsole::new().sink());
        let re = regex::Regex::new(r"^\d{2}:\d{2}:\d{2}\.\d{3} \[info\] \[t\]$").unwrap();
        assert!(re.is_match(&log.info().prefix()));
    }

    #[test]
    fn test_time_is_read_on_every_call() {
        let ticks = std::sync::atomic::AtomicU32::new(0);
        let capture = CaptureConsole::new();
        let log = BoiledLogger::with_sink(
            "t",
            terminal().with_clock(move || {
                let tick = ticks.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
                format!("10:00:00.{tick:03}")
            }),
            capture.sink(),
        );

        log.info().log("first");
        log.info().log("second");
        log.error().log("third");

        let prefixes: Vec<String> = capture.calls().into_iter().map(|c| c.args[0].clone()).collect();
        assert_eq!(
            prefixes,
            [
                "10:00:00.000 [info] [t]",
                "10:00:00.001 [info] [t]",
                "10:00:00.002 [error] [t]",
            ]
        );
    }

    #[test]
    fn test_hidden_timestamp_skips_clock() {
        let capture = CaptureConsole::new();
        let log = BoiledLogger::with_sink(
            "t",
            terminal()
                .with_timestamp(false)
                .with_clock(|| panic!("clock read with timestamps off")),
            capture.sink(),
        );

        log.warn().log("x");

        assert_eq!(capture.last().unwrap().args[0], "[warn] [t]");
    }

    #[test]
    #[should_panic(expected = "formatter failed")]
    fn test_panicking_formatter_propagates() {
        let log = BoiledLogger::with_sink(
            "p",
            terminal().with_prefix_format(|_, _, _| panic!("formatter failed")),
            CaptureConsole::new().sink(),
        );
        log.error().log("never");
    }

    #[test]
    fn test_accessors() {
        let log = BoiledLogger::with_sink("acc", terminal(), CaptureConsole::new().sink());
        assert_eq!(log.name(), "acc");
        assert!(log.config().enable_timestamp());
        assert_eq!(log.error().style(), StyleToken::Plain);
        let cloned = log.warn().clone();
        assert_eq!(cloned.level(), Level::Warn);
    }
}
