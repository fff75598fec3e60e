use microlog_common_api::LogEvent;
use thiserror::Error;

pub mod callback;
pub mod formatter;

/// An Appender receives the records accepted by a Logger and writes them to a specific sink
/// (the console, a file, ...).
pub trait Appender: Send + Sync {
    /// Returns the canonical identifier of the Appender type.
    fn name(&self) -> &str;

    /// Writes a single record to the sink.
    fn append(&self, event: &LogEvent) -> Result<(), AppenderError>;

    /// Flushes any buffered output.
    fn flush(&self) -> Result<(), AppenderError> {
        Ok(())
    }
}

#[derive(Error, Debug, PartialEq, Clone)]
pub enum AppenderError {
    #[error("AppenderCreationError: [{message}]")]
    AppenderCreationError { message: String },
    #[error("AppenderWriteError: [{message}]")]
    AppenderWriteError { message: String },
}

impl From<std::io::Error> for AppenderError {
    fn from(error: std::io::Error) -> Self {
        AppenderError::AppenderWriteError { message: format!("{}", error) }
    }
}
