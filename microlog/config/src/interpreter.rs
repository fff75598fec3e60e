//! Decides which configuration style a set of properties uses and extracts the settings of
//! the simple style.

use crate::alias::CONSOLE_APPENDER_ALIAS;
use crate::error::ConfigurationError;
use crate::properties::RawProperties;
use crate::report::DiagnosticReporter;
use log::*;
use microlog_common_api::Level;
use std::str::FromStr;

/// The presence of this key selects the hierarchical style.
pub const ROOT_LOGGER_KEY: &str = "microlog.rootLogger";

/// The key (and key prefix) of the per-logger settings.
pub const LOGGER_PREFIX_KEY: &str = "microlog.logger";

pub const FORMATTER_PREFIX_KEY: &str = "microlog.formatter";

pub const APPENDER_PREFIX_KEY: &str = "microlog.appender";

pub const LOG_LEVEL_PREFIX_KEY: &str = "microlog.level";

/// The appender list used when the configuration does not declare one.
pub const DEFAULT_APPENDER: &str = CONSOLE_APPENDER_ALIAS;

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigurationStyle {
    /// A flat list of `microlog.*` settings for the root logger.
    Simple(SimpleConfiguration),
    /// Logger declarations introduced by `microlog.rootLogger`. Not supported yet.
    Hierarchical,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimpleConfiguration {
    /// `None` leaves the current level untouched.
    pub level: Option<Level>,
    /// The raw appender list, before splitting.
    pub appenders: String,
    pub formatter: Option<String>,
}

pub fn interpret(
    properties: &RawProperties,
    reporter: &dyn DiagnosticReporter,
) -> ConfigurationStyle {
    if properties.contains_key(ROOT_LOGGER_KEY) {
        info!("PropertyConfigurator - hierarchical configuration, not yet supported");
        return ConfigurationStyle::Hierarchical;
    }

    let ignored: Vec<&str> = properties
        .keys()
        .map(String::as_str)
        .filter(|key| is_logger_key(key))
        .collect();
    if !ignored.is_empty() {
        debug!("PropertyConfigurator - per-logger settings are not supported, ignoring {:?}", ignored);
    }

    ConfigurationStyle::Simple(SimpleConfiguration {
        level: level(properties, reporter),
        appenders: properties
            .get(APPENDER_PREFIX_KEY)
            .cloned()
            .unwrap_or_else(|| DEFAULT_APPENDER.to_owned()),
        formatter: properties.get(FORMATTER_PREFIX_KEY).cloned(),
    })
}

fn is_logger_key(key: &str) -> bool {
    key == LOGGER_PREFIX_KEY
        || key.strip_prefix(LOGGER_PREFIX_KEY).map(|rest| rest.starts_with('.')).unwrap_or(false)
}

fn level(properties: &RawProperties, reporter: &dyn DiagnosticReporter) -> Option<Level> {
    let level_string = properties.get(LOG_LEVEL_PREFIX_KEY)?;
    match Level::from_str(level_string) {
        Ok(level) => Some(level),
        Err(_) => {
            reporter.report(&ConfigurationError::InvalidLevel { level: level_string.to_owned() });
            None
        }
    }
}
