//! Prints a few lines through differently configured loggers.
//!
//! Run with `cargo run -p boiled-logger --example trade_chart`.

use boiled_logger::{BoiledLogger, LoggerOptions};

fn main() {
    let plain = BoiledLogger::new("TradeChart", LoggerOptions::from_env());
    plain.info().log("chart initialised");
    boiled_logger::debug!(plain, "candles loaded", 500);

    let colored = BoiledLogger::new("OrderBook", LoggerOptions::new().with_node_color(true));
    boiled_logger::warn!(colored, "spread widened", 0.35, "%");
    colored.error().log("feed disconnected");

    let custom = BoiledLogger::new(
        "Ticker",
        LoggerOptions::new()
            .with_prefix_format(|level, name, time| format!("{time} :: {} ({level})", name.to_uppercase())),
    );
    custom.info().log("tick");

    let forced = BoiledLogger::new("Forced", LoggerOptions::new().force_browser_style(true));
    forced.info().log("the %c directive is dropped on terminals");
}
