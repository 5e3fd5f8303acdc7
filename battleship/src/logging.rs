use std::env;

use log::{LevelFilter, Metadata, Record};

/// Environment variable holding the log level, e.g. `BATTLESHIP_LOG=trace`.
const LEVEL_VAR: &str = "BATTLESHIP_LOG";

/// Writes log lines to stderr so they stay out of the game's own output.
struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{} [{}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Install the logger. The level comes from `BATTLESHIP_LOG`, defaulting to `warn`, or
/// `debug` when `verbose` is set and the variable is absent or invalid.
pub fn init(verbose: bool) {
    let fallback = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let level = env::var(LEVEL_VAR)
        .ok()
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(fallback);
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
