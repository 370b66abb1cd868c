//! Style resolution.
//!
//! Windowed hosts style a prefix with CSS consumed by the console's `%c`
//! directive; terminal hosts wrap it in ANSI escape codes, or leave it plain.

use std::fmt;

use crate::detection::HostKind;
use crate::level::Level;

/// Shared ANSI reset code.
pub const RESET: &str = "\x1b[0m";

/// CSS for the `%c` directive of a windowed console.
#[must_use]
pub fn css_style(level: Level) -> &'static str {
    match level {
        Level::Info => "color: #3a8fd3",
        Level::Debug => "color: #999",
        Level::Warn => "color: #d3a13a",
        Level::Error => "color: #e74c3c",
    }
}

/// ANSI foreground color start code.
#[must_use]
pub fn ansi_color(level: Level) -> &'static str {
    match level {
        Level::Info => "\x1b[34m",  // blue
        Level::Debug => "\x1b[90m", // grey
        Level::Warn => "\x1b[33m",  // yellow
        Level::Error => "\x1b[31m", // red
    }
}

/// A level's presentation hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleToken {
    /// CSS passed as a separate argument after a `%c` prefix
    Css(&'static str),
    /// Escape pair wrapped around the prefix
    Ansi {
        /// Level-specific color code
        start: &'static str,
        /// Reset code
        reset: &'static str,
    },
    /// No styling
    Plain,
}

impl StyleToken {
    /// Check if the token goes out as its own `%c` argument.
    #[must_use]
    pub fn is_structured(&self) -> bool {
        matches!(self, Self::Css(_))
    }

    /// Wrap `prefix` in the terminal escape pair, if any.
    ///
    /// CSS tokens leave the prefix untouched; they travel as a separate argument.
    #[must_use]
    pub fn wrap(&self, prefix: &str) -> String {
        match self {
            Self::Ansi { start, reset } => format!("{start}{prefix}{reset}"),
            Self::Css(_) | Self::Plain => prefix.to_string(),
        }
    }
}

/// Renders the raw token: the CSS text, the start code, or nothing.
impl fmt::Display for StyleToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Css(css) => f.write_str(css),
            Self::Ansi { start, .. } => f.write_str(start),
            Self::Plain => Ok(()),
        }
    }
}

/// How prefixes are styled, chosen once per logger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleStrategy {
    /// `%c` prefix followed by a CSS argument
    Structured,
    /// Prefix as a single leading argument, ANSI-wrapped when `color` is set
    Terminal {
        /// Wrap prefixes in ANSI color codes
        color: bool,
    },
}

impl StyleStrategy {
    /// Pick the strategy for a host.
    ///
    /// A windowed host and `force_browser_style` both select
    /// [`StyleStrategy::Structured`]; ANSI color only applies otherwise.
    #[must_use]
    pub fn select(host: HostKind, force_browser_style: bool, enable_color: bool) -> Self {
        if host.is_windowed() || force_browser_style {
            Self::Structured
        } else {
            Self::Terminal {
                color: enable_color,
            }
        }
    }

    /// Resolve the token for `level`.
    #[must_use]
    pub fn resolve(&self, level: Level) -> StyleToken {
        match self {
            Self::Structured => StyleToken::Css(css_style(level)),
            Self::Terminal { color: true } => StyleToken::Ansi {
                start: ansi_color(level),
                reset: RESET,
            },
            Self::Terminal { color: false } => StyleToken::Plain,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_windowed_host_selects_structured() {
        let strategy = StyleStrategy::select(HostKind::Windowed, false, true);
        assert_eq!(strategy, StyleStrategy::Structured);
    }

    #[test]
    fn test_force_browser_style_wins_over_color() {
        let strategy = StyleStrategy::select(HostKind::Terminal, true, true);
        assert_eq!(strategy, StyleStrategy::Structured);
        assert_eq!(strategy.resolve(Level::Info), StyleToken::Css("color: #3a8fd3"));
    }

    #[test]
    fn test_terminal_color_resolves_ansi_pair() {
        let strategy = StyleStrategy::select(HostKind::Terminal, false, true);
        assert_eq!(
            strategy.resolve(Level::Error),
            StyleToken::Ansi {
                start: "\x1b[31m",
                reset: RESET
            }
        );
    }

    #[test]
    fn test_terminal_without_color_is_plain() {
        let strategy = StyleStrategy::select(HostKind::Terminal, false, false);
        for level in Level::ALL {
            assert_eq!(strategy.resolve(level), StyleToken::Plain);
        }
    }

    #[test]
    fn test_css_styles_per_level() {
        assert_eq!(css_style(Level::Debug), "color: #999");
        assert_eq!(css_style(Level::Warn), "color: #d3a13a");
        assert_eq!(css_style(Level::Error), "color: #e74c3c");
    }

    #[test]
    fn test_wrap() {
        let ansi = StyleStrategy::Terminal { color: true }.resolve(Level::Warn);
        assert_eq!(ansi.wrap("p"), "\x1b[33mp\x1b[0m");
        assert_eq!(StyleToken::Css("color: red").wrap("p"), "p");
        assert_eq!(StyleToken::Plain.wrap("p"), "p");
    }

    #[test]
    fn test_display_plain_is_empty() {
        assert_eq!(StyleToken::Plain.to_string(), "");
        assert!(StyleToken::Css("x").is_structured());
        assert!(!StyleToken::Plain.is_structured());
    }
}
