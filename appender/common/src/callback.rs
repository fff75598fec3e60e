use crate::{Appender, AppenderError};
use microlog_common_api::LogEvent;

/// An Appender that hands every record to a callback.
pub struct CallbackAppender<F: Fn(&LogEvent) -> Result<(), AppenderError> + Send + Sync> {
    name: String,
    callback: F,
}

impl<F: Fn(&LogEvent) -> Result<(), AppenderError> + Send + Sync> CallbackAppender<F> {
    pub fn new<S: Into<String>>(name: S, callback: F) -> Self {
        Self { name: name.into(), callback }
    }
}

impl<F: Fn(&LogEvent) -> Result<(), AppenderError> + Send + Sync> Appender
    for CallbackAppender<F>
{
    fn name(&self) -> &str {
        &self.name
    }

    fn append(&self, event: &LogEvent) -> Result<(), AppenderError> {
        (self.callback)(event)
    }
}
