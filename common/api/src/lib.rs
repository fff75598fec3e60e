use chrono::prelude::{DateTime, Local};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The severity of a log record.
/// Levels are ordered from the most verbose (`Trace`) to `Off`, which disables every record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
    Off,
}

pub const ALL_LEVELS: [Level; 7] =
    [Level::Trace, Level::Debug, Level::Info, Level::Warn, Level::Error, Level::Fatal, Level::Off];

impl Level {
    /// Returns the canonical name of the level as it appears in a configuration file.
    pub fn name(&self) -> &'static str {
        match self {
            Level::Trace => "TRACE",
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::Fatal => "FATAL",
            Level::Off => "OFF",
        }
    }

    /// Returns whether a record with the `record` level passes a threshold set to `self`.
    /// Nothing passes the `Off` threshold and an `Off` record is never emitted.
    pub fn allows(&self, record: Level) -> bool {
        *self != Level::Off && record != Level::Off && record >= *self
    }
}

impl Default for Level {
    fn default() -> Self {
        Level::Debug
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Error, Clone, Debug, PartialEq)]
pub enum CommonError {
    #[error("UnknownLevelError: [{level}] is not a valid level")]
    UnknownLevelError { level: String },
}

impl FromStr for Level {
    type Err = CommonError;

    /// Level names are matched exactly, surrounding whitespace excluded.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        ALL_LEVELS
            .iter()
            .find(|level| level.name() == trimmed)
            .copied()
            .ok_or_else(|| CommonError::UnknownLevelError { level: value.to_owned() })
    }
}

/// A single log record passed from a Logger to its Appenders.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEvent {
    pub level: Level,
    pub message: String,
    pub created: DateTime<Local>,
}

impl LogEvent {
    pub fn new<S: Into<String>>(level: Level, message: S) -> LogEvent {
        LogEvent { level, message: message.into(), created: Local::now() }
    }
}
