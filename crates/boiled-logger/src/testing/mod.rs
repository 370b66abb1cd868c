//! Testing utilities for console output
//!
//! Provides `CaptureConsole` for capturing and asserting on console calls in tests.

mod capture;

pub use capture::{CaptureConsole, ConsoleCall};
