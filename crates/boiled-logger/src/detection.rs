//! Host environment detection
//!
//! Determines whether the logger runs under a windowed (browser-like) host whose
//! console understands `%c` style directives, or under a terminal-like host.

/// The kind of host the process is running in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HostKind {
    /// Browser-like global present; console accepts `%c` CSS directives
    Windowed,
    /// No window global; ANSI escapes are the styling mechanism
    #[default]
    Terminal,
}

impl HostKind {
    /// Auto-detect the host kind
    #[must_use]
    pub fn detect() -> Self {
        if is_windowed_host() {
            Self::Windowed
        } else {
            Self::Terminal
        }
    }

    /// Check if this is a windowed host
    #[must_use]
    pub fn is_windowed(&self) -> bool {
        matches!(self, Self::Windowed)
    }

    /// Check if this is a terminal-like host
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Terminal)
    }
}

/// Determine if a browser-like `window` global is reachable
///
/// Web workers and non-browser wasm runtimes have no window, so they count as
/// terminal-like hosts.
#[cfg(target_arch = "wasm32")]
#[must_use]
pub fn is_windowed_host() -> bool {
    web_sys::window().is_some()
}

/// Determine if a browser-like `window` global is reachable
///
/// Always false on native targets.
#[cfg(not(target_arch = "wasm32"))]
#[must_use]
pub fn is_windowed_host() -> bool {
    false
}
