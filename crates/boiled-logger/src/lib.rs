#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

pub mod clock;
pub mod config;
pub mod detection;
pub mod level;
pub mod logger;
pub mod logging; // log / tracing integration
pub mod prefix;
pub mod sink;
pub mod style;
pub mod testing; // Test utilities

pub use config::{LoggerConfig, LoggerOptions};
pub use detection::{HostKind, is_windowed_host};
pub use level::Level;
pub use logger::{BoiledLogger, Output};
pub use prefix::{PrefixFormat, default_prefix};
pub use sink::{ConsoleSink, TerminalConsole, default_sink};
pub use style::{StyleStrategy, StyleToken};
