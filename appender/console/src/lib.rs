use microlog_appender_common::formatter::{Formatter, SimpleFormatter};
use microlog_appender_common::{Appender, AppenderError};
use microlog_common_api::LogEvent;
use std::io::Write;
use std::sync::Mutex;

/// The canonical identifier of the [`ConsoleAppender`].
pub const CONSOLE_APPENDER_ID: &str = "microlog_appender_console::ConsoleAppender";

/// An Appender that writes every record on its own line to the standard output.
pub struct ConsoleAppender {
    formatter: Box<dyn Formatter>,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleAppender {
    pub fn new() -> ConsoleAppender {
        ConsoleAppender::with_writer(Box::new(std::io::stdout()))
    }

    pub fn with_writer(writer: Box<dyn Write + Send>) -> ConsoleAppender {
        ConsoleAppender { formatter: Box::new(SimpleFormatter::new()), writer: Mutex::new(writer) }
    }
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        ConsoleAppender::new()
    }
}

impl Appender for ConsoleAppender {
    fn name(&self) -> &str {
        CONSOLE_APPENDER_ID
    }

    fn append(&self, event: &LogEvent) -> Result<(), AppenderError> {
        let line = self.formatter.format(event);
        let mut writer = self.writer.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        writeln!(writer, "{}", line)?;
        Ok(())
    }

    fn flush(&self) -> Result<(), AppenderError> {
        let mut writer = self.writer.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        writer.flush()?;
        Ok(())
    }
}
