use std::{fmt, sync::OnceLock};

use chrono::Local;
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

use crate::config::{PROGRAM_LOG_LEVEL, PROGRAM_NAME, env_value};

/// Stderr logger shared by the library and the CLI.
pub struct Logger {
    level: Level,
}

impl Logger {
    fn new(level: Level) -> Self {
        Self { level }
    }
}

/// `<timestamp> <LEVEL> dirstat[<target>] <message>`
fn format_line(timestamp: impl fmt::Display, record: &Record<'_>) -> String {
    format!(
        "{} {} {}[{}] {}",
        timestamp,
        record.level(),
        PROGRAM_NAME,
        record.target(),
        record.args()
    )
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        eprintln!("{}", format_line(timestamp, record));
    }

    fn flush(&self) {}
}

/// Level from `DIRSTAT_LOG_LEVEL`; anything unparseable, or `off`, means `warn`.
fn level_from_env() -> Level {
    env_value(PROGRAM_LOG_LEVEL)
        .and_then(|s| s.parse::<LevelFilter>().ok())
        .and_then(|filter| filter.to_level())
        .unwrap_or(Level::Warn)
}

pub fn init() -> Result<(), SetLoggerError> {
    init_with_level(level_from_env())
}

/// Installs the logger once. Later calls are no-ops and keep the first level.
pub fn init_with_level(level: Level) -> Result<(), SetLoggerError> {
    static LOGGER: OnceLock<Logger> = OnceLock::new();

    // set_max_level must only follow the level the stored logger was built with
    let init_call = LOGGER.get().is_none();
    let logger = LOGGER.get_or_init(|| Logger::new(level));

    if init_call {
        log::set_logger(logger)?;
        log::set_max_level(logger.level.to_level_filter());
    }

    Ok(())
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
