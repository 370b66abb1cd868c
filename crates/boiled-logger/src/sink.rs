//! Console output primitives
//!
//! A [`ConsoleSink`] is the leveled output a logger forwards to. Sinks are
//! injected, so tests can capture calls and hosts can plug in their own console.

use std::fmt::{self, Write as _};
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use crate::detection::HostKind;
use crate::level::Level;

/// Leveled console output
pub trait ConsoleSink: Send + Sync {
    /// Emit one console call at `level` with the given arguments, in order.
    fn write(&self, level: Level, args: &[&dyn fmt::Display]);
}

impl<T: ConsoleSink + ?Sized> ConsoleSink for Arc<T> {
    fn write(&self, level: Level, args: &[&dyn fmt::Display]) {
        (**self).write(level, args);
    }
}

/// Pick the console for the detected host.
#[must_use]
pub fn default_sink() -> Arc<dyn ConsoleSink> {
    sink_for(HostKind::detect())
}

/// Pick the console for `host`.
#[cfg(target_arch = "wasm32")]
#[must_use]
pub fn sink_for(host: HostKind) -> Arc<dyn ConsoleSink> {
    if host.is_windowed() {
        Arc::new(WebConsole)
    } else {
        Arc::new(TerminalConsole::stdio())
    }
}

/// Pick the console for `host`.
///
/// Native builds have no browser console, so they always get a terminal.
#[cfg(not(target_arch = "wasm32"))]
#[must_use]
pub fn sink_for(_host: HostKind) -> Arc<dyn ConsoleSink> {
    Arc::new(TerminalConsole::stdio())
}

// ─────────────────────────────────────────────────────────
// Terminal console
// ─────────────────────────────────────────────────────────

type SharedWriter = Mutex<Box<dyn Write + Send>>;

/// Line-oriented console over two streams
///
/// `info` and `debug` go to the out stream, `warn` and `error` to the err
/// stream. Format directives in the first argument are applied before writing.
pub struct TerminalConsole {
    out: SharedWriter,
    err: SharedWriter,
}

impl TerminalConsole {
    /// Console over stdout and stderr
    #[must_use]
    pub fn stdio() -> Self {
        Self::with_writers(io::stdout(), io::stderr())
    }

    /// Console over custom writers (for testing)
    #[must_use]
    pub fn with_writers<O, E>(out: O, err: E) -> Self
    where
        O: Write + Send + 'static,
        E: Write + Send + 'static,
    {
        Self {
            out: Mutex::new(Box::new(out)),
            err: Mutex::new(Box::new(err)),
        }
    }

    fn stream(&self, level: Level) -> &SharedWriter {
        match level {
            Level::Info | Level::Debug => &self.out,
            Level::Warn | Level::Error => &self.err,
        }
    }
}

impl Default for TerminalConsole {
    fn default() -> Self {
        Self::stdio()
    }
}

impl fmt::Debug for TerminalConsole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TerminalConsole").finish_non_exhaustive()
    }
}

impl ConsoleSink for TerminalConsole {
    fn write(&self, level: Level, args: &[&dyn fmt::Display]) {
        let mut line = format_console_args(args);
        line.push('\n');

        // Console writes are best-effort.
        if let Ok(mut stream) = self.stream(level).lock() {
            let _ = stream.write_all(line.as_bytes());
            let _ = stream.flush();
        }
    }
}

/// Join console arguments into one line, applying `%` directives in the first.
///
/// `%s %d %i %f %o %O %j` take the next argument, `%c` takes it and prints
/// nothing, `%%` prints `%`. A directive with no argument left is kept
/// verbatim. Leftover arguments follow, separated by spaces.
#[must_use]
pub fn format_console_args(args: &[&dyn fmt::Display]) -> String {
    let Some((first, rest)) = args.split_first() else {
        return String::new();
    };

    let template = first.to_string();
    let mut rest = rest.iter();
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '%' {
            out.push(ch);
            continue;
        }
        match chars.peek().copied() {
            Some('%') => {
                chars.next();
                out.push('%');
            }
            Some(directive @ ('s' | 'd' | 'i' | 'f' | 'o' | 'O' | 'j' | 'c')) => match rest.next() {
                Some(arg) => {
                    chars.next();
                    if directive != 'c' {
                        let _ = write!(out, "{arg}");
                    }
                }
                None => out.push('%'),
            },
            _ => out.push('%'),
        }
    }

    for arg in rest {
        let _ = write!(out, " {arg}");
    }
    out
}

// ─────────────────────────────────────────────────────────
// Browser console
// ─────────────────────────────────────────────────────────

/// The browser's `console` object
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct WebConsole;

#[cfg(target_arch = "wasm32")]
impl ConsoleSink for WebConsole {
    fn write(&self, level: Level, args: &[&dyn fmt::Display]) {
        let values = js_sys::Array::new();
        for arg in args {
            values.push(&wasm_bindgen::JsValue::from_str(&arg.to_string()));
        }
        match level {
            Level::Info => web_sys::console::info(&values),
            Level::Debug => web_sys::console::debug(&values),
            Level::Warn => web_sys::console::warn(&values),
            Level::Error => web_sys::console::error(&values),
        }
    }
}
