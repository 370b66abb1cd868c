//! CaptureConsole for recording console calls in tests
//!
//! Provides a [`ConsoleSink`] that keeps every call for assertion instead of
//! writing anywhere.

use std::fmt;
use std::sync::{Arc, Mutex};

use strip_ansi_escapes::strip;

use crate::level::Level;
use crate::sink::ConsoleSink;

/// One recorded console call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleCall {
    /// The leveled primitive that was called
    pub level: Level,
    /// Arguments as passed, rendered to strings (ANSI codes preserved)
    pub args: Vec<String>,
}

impl ConsoleCall {
    /// Arguments with ANSI codes stripped
    #[must_use]
    pub fn plain_args(&self) -> Vec<String> {
        self.args.iter().map(|arg| strip_ansi(arg)).collect()
    }

    /// Arguments joined by spaces, ANSI codes stripped
    #[must_use]
    pub fn line(&self) -> String {
        self.plain_args().join(" ")
    }
}

/// A console sink that records calls for testing
///
/// Clones share the same record, so keep one handle for assertions and hand
/// [`CaptureConsole::sink`] to the logger under test.
#[derive(Clone, Default)]
pub struct CaptureConsole {
    calls: Arc<Mutex<Vec<ConsoleCall>>>,
}

impl CaptureConsole {
    /// Create an empty capture console
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A sink sharing this console's record
    #[must_use]
    pub fn sink(&self) -> Arc<dyn ConsoleSink> {
        Arc::new(self.clone())
    }

    /// All recorded calls, oldest first
    #[must_use]
    pub fn calls(&self) -> Vec<ConsoleCall> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    /// Calls made at `level`
    #[must_use]
    pub fn calls_for(&self, level: Level) -> Vec<ConsoleCall> {
        self.calls()
            .into_iter()
            .filter(|call| call.level == level)
            .collect()
    }

    /// The most recent call
    #[must_use]
    pub fn last(&self) -> Option<ConsoleCall> {
        self.calls.lock().ok().and_then(|c| c.last().cloned())
    }

    /// Every call as one plain line, joined by newlines
    #[must_use]
    pub fn output_string(&self) -> String {
        self.calls()
            .iter()
            .map(ConsoleCall::line)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Check if output contains a string (case-insensitive)
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        self.output_string()
            .to_lowercase()
            .contains(&needle.to_lowercase())
    }

    /// Check if output matches a regex pattern
    #[must_use]
    pub fn matches(&self, pattern: &str) -> bool {
        match regex::Regex::new(pattern) {
            Ok(re) => re.is_match(&self.output_string()),
            Err(_) => false,
        }
    }

    /// Assert that output contains a string
    ///
    /// # Panics
    ///
    /// Panics if the output does not contain the needle string.
    pub fn assert_contains(&self, needle: &str) {
        assert!(
            self.contains(needle),
            "Output did not contain '{}'. Actual output:\n{}",
            needle,
            self.output_string()
        );
    }

    /// Assert that output does NOT contain a string
    ///
    /// # Panics
    ///
    /// Panics if the output contains the needle string.
    pub fn assert_not_contains(&self, needle: &str) {
        assert!(
            !self.contains(needle),
            "Output unexpectedly contained '{}'. Actual output:\n{}",
            needle,
            self.output_string()
        );
    }

    /// Assert the number of recorded calls
    ///
    /// # Panics
    ///
    /// Panics if the call count doesn't match expected.
    pub fn assert_call_count(&self, expected: usize) {
        let actual = self.calls().len();
        assert_eq!(
            actual,
            expected,
            "Expected {} calls but got {}. Actual output:\n{}",
            expected,
            actual,
            self.output_string()
        );
    }

    /// Forget all recorded calls
    pub fn clear(&self) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.clear();
        }
    }
}

impl ConsoleSink for CaptureConsole {
    fn write(&self, level: Level, args: &[&dyn fmt::Display]) {
        let args = args.iter().map(|arg| arg.to_string()).collect();
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(ConsoleCall { level, args });
        }
    }
}

impl fmt::Debug for CaptureConsole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CaptureConsole")
            .field("call_count", &self.calls().len())
            .finish()
    }
}

fn strip_ansi(text: &str) -> String {
    String::from_utf8_lossy(&strip(text)).into_owned()
}
