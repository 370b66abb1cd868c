//! Prefix formatting.
//!
//! A prefix is the text placed in front of every message. The default is
//! `<time> [<level>] [<name>]`; a caller can swap in any function taking the
//! same three inputs.

use std::fmt;
use std::sync::Arc;

use crate::level::Level;

/// Signature of a prefix formatter: `(level, name, time) -> prefix`.
pub type PrefixFn = dyn Fn(Level, &str, &str) -> String + Send + Sync;

/// A shareable prefix formatter.
///
/// The replacement fully overrides the default template; whatever string it
/// returns is used verbatim, including the empty string.
#[derive(Clone)]
pub struct PrefixFormat(Arc<PrefixFn>);

impl PrefixFormat {
    /// Wrap a custom formatter.
    pub fn new<F>(format: F) -> Self
    where
        F: Fn(Level, &str, &str) -> String + Send + Sync + 'static,
    {
        Self(Arc::new(format))
    }

    /// Render the prefix.
    #[must_use]
    pub fn format(&self, level: Level, name: &str, time: &str) -> String {
        (self.0)(level, name, time)
    }
}

impl Default for PrefixFormat {
    fn default() -> Self {
        Self::new(default_prefix)
    }
}

impl fmt::Debug for PrefixFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PrefixFormat").finish_non_exhaustive()
    }
}

/// `<time> [<level>] [<name>]`, or `[<level>] [<name>]` when `time` is empty.
#[must_use]
pub fn default_prefix(level: Level, name: &str, time: &str) -> String {
    if time.is_empty() {
        format!("[{level}] [{name}]")
    } else {
        format!("{time} [{level}] [{name}]")
    }
}
