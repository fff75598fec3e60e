//! Diagnostic output for the microlog tools.
//!
//! Library crates report through the `log` facade; this crate installs the
//! `tracing` subscriber that renders those reports to stdout and/or a file.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;
use tracing::subscriber::set_global_default;
use tracing::Subscriber;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt::Layer, layer::SubscriberExt, EnvFilter};

/// Defines where and how verbosely the diagnostics are written.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggerConfig {
    /// Sets the diagnostics [`EnvFilter`].
    /// Example of a valid filter: "warn,microlog_config=debug"
    pub level: String,

    /// Determines whether the diagnostics are printed to standard output.
    pub stdout_output: bool,

    /// If provided, the diagnostics are appended to this file.
    pub file_output_path: Option<String>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        LoggerConfig { level: "info".to_owned(), stdout_output: true, file_output_path: None }
    }
}

#[derive(Error, Debug)]
pub enum LoggerError {
    #[error("LoggerConfigurationError: [{message}]")]
    LoggerConfigurationError { message: String },
}

impl From<std::io::Error> for LoggerError {
    fn from(error: std::io::Error) -> Self {
        LoggerError::LoggerConfigurationError { message: format!("{}", error) }
    }
}

/// Keeps the non-blocking writers alive. Dropping it flushes and stops them.
pub struct DiagnosticsGuard {
    _file_guard: Option<WorkerGuard>,
    _stdout_guard: Option<WorkerGuard>,
}

/// Installs the global diagnostics subscriber described by `logger_config`.
/// It can be called only once per process.
pub fn setup_logger(logger_config: &LoggerConfig) -> Result<DiagnosticsGuard, LoggerError> {
    let env_filter = EnvFilter::from_str(&logger_config.level).map_err(|err| {
        LoggerError::LoggerConfigurationError {
            message: format!(
                "Cannot parse the diagnostics level: [{}]. err: {:?}",
                logger_config.level, err
            ),
        }
    })?;

    let (file_layer, file_guard) = if let Some(file_output) = &logger_config.file_output_path {
        let (dir, filename) = path_to_dir_and_filename(file_output)?;
        let file_appender = tracing_appender::rolling::never(dir, filename);
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        (Some(Layer::new().with_ansi(false).with_writer(non_blocking)), Some(guard))
    } else {
        (None, None)
    };

    let (stdout_layer, stdout_guard) = if logger_config.stdout_output {
        let (non_blocking, guard) = tracing_appender::non_blocking(std::io::stdout());
        (Some(Layer::new().with_ansi(false).with_writer(non_blocking)), Some(guard))
    } else {
        (None, None)
    };

    let subscriber =
        tracing_subscriber::registry().with(env_filter).with(file_layer).with(stdout_layer);

    set_global_logger(subscriber)?;

    Ok(DiagnosticsGuard { _file_guard: file_guard, _stdout_guard: stdout_guard })
}

fn path_to_dir_and_filename(full_path: &str) -> Result<(String, String), LoggerError> {
    let full_path = full_path.replace('\\', "/");
    match full_path.rfind('/') {
        Some(index) if index + 1 < full_path.len() => {
            Ok((full_path[..=index].to_owned(), full_path[index + 1..].to_owned()))
        }
        _ => Err(LoggerError::LoggerConfigurationError {
            message: format!(
                "Diagnostics output file [{}] must be a path with a directory and a file name",
                full_path
            ),
        }),
    }
}

fn set_global_logger<S>(subscriber: S) -> Result<(), LoggerError>
where
    S: Subscriber + Send + Sync + 'static,
{
    tracing_log::LogTracer::init().map_err(|err| LoggerError::LoggerConfigurationError {
        message: format!("Cannot start the log bridge. err: {:?}", err),
    })?;
    set_global_default(subscriber).map_err(|err| LoggerError::LoggerConfigurationError {
        message: format!("Cannot start the diagnostics subscriber. err: {:?}", err),
    })
}

#[cfg(test)]
mod test {

    use super::*;

    #[test]
    fn should_split_the_file_path() {
        assert_eq!(
            ("/tmp/hello/".to_owned(), "filename".to_owned()),
            path_to_dir_and_filename("/tmp/hello/filename").unwrap()
        );
        assert_eq!(
            ("/".to_owned(), "microlog.log".to_owned()),
            path_to_dir_and_filename("/microlog.log").unwrap()
        );
        assert_eq!(
            ("c:/logs/".to_owned(), "diagnostics.txt".to_owned()),
            path_to_dir_and_filename(r#"c:\logs\diagnostics.txt"#).unwrap()
        );
    }

    #[test]
    fn should_fail_if_directory_or_filename_is_missing() {
        assert!(path_to_dir_and_filename("filename").is_err());
        assert!(path_to_dir_and_filename("/tmp/").is_err());
    }

    #[test]
    fn should_reject_an_invalid_filter() {
        let config = LoggerConfig {
            level: "microlog=notalevel".to_owned(),
            stdout_output: false,
            file_output_path: None,
        };
        assert!(setup_logger(&config).is_err());
    }
}
