//! Logger configuration.
//!
//! [`LoggerOptions`] is the partial, caller-facing form: every field is optional
//! and missing ones fall back to defaults when resolved into a [`LoggerConfig`].
//! Options can be built programmatically, deserialized, or read from the
//! environment on request.

use std::env;

use serde::de::{self, Deserialize, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};

use crate::clock::Clock;
use crate::detection::HostKind;
use crate::level::Level;
use crate::prefix::PrefixFormat;
use crate::style::StyleStrategy;

/// Caller-supplied logger options
///
/// Deserializing never fails on content: unknown keys are ignored, values of
/// the wrong type fall back to the default, and when a key appears under both
/// its camelCase and snake_case name the last one wins. `prefixFormat` and
/// the clock are functions and can only be set programmatically.
#[derive(Debug, Clone, Default)]
pub struct LoggerOptions {
    /// Wrap prefixes in ANSI colors on terminal hosts (default false)
    pub enable_node_color: Option<bool>,
    /// Include the time segment in prefixes (default true)
    pub enable_timestamp: Option<bool>,
    /// Replacement prefix formatter
    pub prefix_format: Option<PrefixFormat>,
    /// Use `%c` CSS styling even outside a windowed host (default false)
    pub force_browser_style: Option<bool>,
    /// Override host detection (None = auto-detect)
    pub host: Option<HostKind>,
    /// Replacement time source (default: UTC wall clock)
    pub clock: Option<Clock>,
}

impl LoggerOptions {
    /// Create empty options (all defaults)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read options from environment variables
    ///
    /// # Environment Variables
    ///
    /// | Variable | Values | Description |
    /// |----------|--------|-------------|
    /// | `BOILED_LOGGER_COLOR` | 0/1, false/true, off/on | ANSI color on terminals |
    /// | `NO_COLOR` | (set) | Disable colors (standard, wins) |
    /// | `BOILED_LOGGER_TIMESTAMP` | 0/1, false/true, off/on | Show the time segment |
    /// | `BOILED_LOGGER_BROWSER_STYLE` | (set) | Force `%c` styling |
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Like [`LoggerOptions::from_env`], reading values through `lookup`.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut options = Self::default();

        if let Some(val) = lookup("BOILED_LOGGER_COLOR") {
            options.enable_node_color = parse_flag(&val);
        }
        if lookup("NO_COLOR").is_some_and(|val| !val.is_empty()) {
            options.enable_node_color = Some(false);
        }
        if let Some(val) = lookup("BOILED_LOGGER_TIMESTAMP") {
            options.enable_timestamp = parse_flag(&val);
        }
        if let Some(val) = lookup("BOILED_LOGGER_BROWSER_STYLE") {
            options.force_browser_style = Some(parse_flag(&val).unwrap_or(true));
        }

        options
    }

    // ─────────────────────────────────────────────────
    // Builder Methods
    // ─────────────────────────────────────────────────

    /// Enable or disable ANSI colors on terminal hosts
    #[must_use]
    pub fn with_node_color(mut self, enable: bool) -> Self {
        self.enable_node_color = Some(enable);
        self
    }

    /// Show or hide the time segment
    #[must_use]
    pub fn with_timestamp(mut self, enable: bool) -> Self {
        self.enable_timestamp = Some(enable);
        self
    }

    /// Replace the prefix formatter
    #[must_use]
    pub fn with_prefix_format<F>(mut self, format: F) -> Self
    where
        F: Fn(Level, &str, &str) -> String + Send + Sync + 'static,
    {
        self.prefix_format = Some(PrefixFormat::new(format));
        self
    }

    /// Force `%c` CSS styling regardless of host
    #[must_use]
    pub fn force_browser_style(mut self, force: bool) -> Self {
        self.force_browser_style = Some(force);
        self
    }

    /// Set the host explicitly instead of detecting it
    #[must_use]
    pub fn with_host(mut self, host: HostKind) -> Self {
        self.host = Some(host);
        self
    }

    /// Replace the time source
    #[must_use]
    pub fn with_clock<F>(mut self, now: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        self.clock = Some(Clock::new(now));
        self
    }

    /// Merge over defaults.
    #[must_use]
    pub fn resolve(self) -> LoggerConfig {
        LoggerConfig {
            enable_node_color: self.enable_node_color.unwrap_or(false),
            enable_timestamp: self.enable_timestamp.unwrap_or(true),
            prefix_format: self.prefix_format.unwrap_or_default(),
            force_browser_style: self.force_browser_style.unwrap_or(false),
            host: self.host.unwrap_or_else(HostKind::detect),
            clock: self.clock.unwrap_or_default(),
        }
    }
}

/// Fully resolved logger configuration; immutable once built
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    enable_node_color: bool,
    enable_timestamp: bool,
    prefix_format: PrefixFormat,
    force_browser_style: bool,
    host: HostKind,
    clock: Clock,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        LoggerOptions::default().resolve()
    }
}

impl LoggerConfig {
    /// ANSI colors enabled
    #[must_use]
    pub fn enable_node_color(&self) -> bool {
        self.enable_node_color
    }

    /// Time segment enabled
    #[must_use]
    pub fn enable_timestamp(&self) -> bool {
        self.enable_timestamp
    }

    /// The prefix formatter in effect
    #[must_use]
    pub fn prefix_format(&self) -> &PrefixFormat {
        &self.prefix_format
    }

    /// `%c` styling forced
    #[must_use]
    pub fn force_browser_style(&self) -> bool {
        self.force_browser_style
    }

    /// The resolved host
    #[must_use]
    pub fn host(&self) -> HostKind {
        self.host
    }

    /// The time source
    #[must_use]
    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    /// The styling strategy this configuration selects
    #[must_use]
    pub fn style_strategy(&self) -> StyleStrategy {
        StyleStrategy::select(self.host, self.force_browser_style, self.enable_node_color)
    }
}

// ─────────────────────────────────────────────────────────
// Deserialization
// ─────────────────────────────────────────────────────────

impl<'de> Deserialize<'de> for LoggerOptions {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(OptionsVisitor)
    }
}

struct OptionsVisitor;

impl<'de> Visitor<'de> for OptionsVisitor {
    type Value = LoggerOptions;

    fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("a map of logger options")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut options = LoggerOptions::default();

        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "enableNodeColor" | "enable_node_color" => {
                    options.enable_node_color = map.next_value::<Loose>()?.flag();
                }
                "enableTimestamp" | "enable_timestamp" => {
                    options.enable_timestamp = map.next_value::<Loose>()?.flag();
                }
                "forceBrowserStyle" | "force_browser_style" => {
                    options.force_browser_style = map.next_value::<Loose>()?.flag();
                }
                "host" => options.host = map.next_value::<Loose>()?.host(),
                _ => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }

        Ok(options)
    }
}

/// An option value of any shape; only booleans and strings are kept.
enum Loose {
    Bool(bool),
    Str(String),
    Other,
}

impl Loose {
    fn flag(self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(value),
            Self::Str(_) | Self::Other => None,
        }
    }

    fn host(self) -> Option<HostKind> {
        match self {
            Self::Str(value) if value.eq_ignore_ascii_case("windowed") => Some(HostKind::Windowed),
            Self::Str(value) if value.eq_ignore_ascii_case("terminal") => Some(HostKind::Terminal),
            _ => None,
        }
    }
}

impl<'de> Deserialize<'de> for Loose {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(LooseVisitor)
    }
}

struct LooseVisitor;

impl<'de> Visitor<'de> for LooseVisitor {
    type Value = Loose;

    fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("any value")
    }

    fn visit_bool<E: de::Error>(self, value: bool) -> Result<Loose, E> {
        Ok(Loose::Bool(value))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Loose, E> {
        Ok(Loose::Str(value.to_string()))
    }

    fn visit_i64<E: de::Error>(self, _: i64) -> Result<Loose, E> {
        Ok(Loose::Other)
    }

    fn visit_u64<E: de::Error>(self, _: u64) -> Result<Loose, E> {
        Ok(Loose::Other)
    }

    fn visit_f64<E: de::Error>(self, _: f64) -> Result<Loose, E> {
        Ok(Loose::Other)
    }

    fn visit_bytes<E: de::Error>(self, _: &[u8]) -> Result<Loose, E> {
        Ok(Loose::Other)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Loose, E> {
        Ok(Loose::Other)
    }

    fn visit_none<E: de::Error>(self) -> Result<Loose, E> {
        Ok(Loose::Other)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Loose, D::Error>
    where
        D: Deserializer<'de>,
    {
        Loose::deserialize(deserializer)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Loose, A::Error>
    where
        A: SeqAccess<'de>,
    {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(Loose::Other)
    }

    fn visit_map<A>(self, mut map: A) -> Result<Loose, A::Error>
    where
        A: MapAccess<'de>,
    {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(Loose::Other)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
