use std::io::IsTerminal;

use chrono::Local;
use tracing_subscriber::Registry;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::{self, format::Writer, time::FormatTime};
use tracing_subscriber::prelude::*;

/// Local wall-clock timestamps.
struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", Local::now().format("%H:%M:%S"))
    }
}

fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Install the console logger. Logs go to stderr; stdout carries output.
pub fn init_logger(verbose: u8) {
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_timer(LocalTimer)
        .with_target(false)
        .with_level(true);

    Registry::default()
        .with(level_for(verbose))
        .with(console_layer)
        .init();
}
