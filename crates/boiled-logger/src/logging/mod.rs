//! Ecosystem logging integration.
//!
//! Routes records from the usual Rust logging facades through prefixed console
//! output:
//! - [`LogBridge`] - A `log` crate logger
//! - [`BoiledLayer`] - A `tracing_subscriber` layer
//!
//! Both name each line after the record's target, so
//! `log::info!(target: "db", "connected")` prints `... [info] [db] connected`.
//!
//! # Example
//!
//! ```ignore
//! use boiled_logger::LoggerOptions;
//! use boiled_logger::logging::LogBridge;
//!
//! LogBridge::init(LoggerOptions::from_env()).expect("logger already set");
//! log::warn!("cache miss");
//! ```

mod bridge;
mod subscriber;

pub use bridge::LogBridge;
pub use subscriber::BoiledLayer;
