//! The logger repository holds the root Logger that the configurators set up and the
//! application writes to.
//!
//! A repository is an ordinary value: build it once at startup, share it behind an `Arc`
//! and hand it to whatever needs to configure or use it.

use log::*;
use microlog_appender_common::Appender;
use microlog_common_api::{Level, LogEvent};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// A Logger filters records by level and forwards the accepted ones to its Appenders,
/// in the order the Appenders were added.
pub struct Logger {
    name: String,
    level: RwLock<Level>,
    appenders: RwLock<Vec<Box<dyn Appender>>>,
}

impl Logger {
    pub fn new<S: Into<String>>(name: S) -> Logger {
        Logger {
            name: name.into(),
            level: RwLock::new(Level::default()),
            appenders: RwLock::new(vec![]),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> Level {
        *read(&self.level)
    }

    pub fn set_level(&self, level: Level) {
        *write(&self.level) = level;
    }

    /// Adds an Appender at the end of the list. The same Appender type can be added many times.
    pub fn add_appender(&self, appender: Box<dyn Appender>) {
        write(&self.appenders).push(appender);
    }

    pub fn number_of_appenders(&self) -> usize {
        read(&self.appenders).len()
    }

    /// Returns the names of the attached Appenders in the order they receive records.
    pub fn appender_names(&self) -> Vec<String> {
        read(&self.appenders).iter().map(|appender| appender.name().to_owned()).collect()
    }

    /// Flushes and detaches every Appender.
    pub fn remove_all_appenders(&self) {
        let mut appenders = write(&self.appenders);
        for appender in appenders.iter() {
            if let Err(err) = appender.flush() {
                warn!("Logger [{}] - cannot flush appender [{}]: {}", self.name, appender.name(), err);
            }
        }
        appenders.clear();
    }

    pub fn is_enabled(&self, level: Level) -> bool {
        self.level().allows(level)
    }

    pub fn log<S: Into<String>>(&self, level: Level, message: S) {
        if !self.is_enabled(level) {
            return;
        }
        let event = LogEvent::new(level, message);
        for appender in read(&self.appenders).iter() {
            if let Err(err) = appender.append(&event) {
                warn!("Logger [{}] - appender [{}] failed: {}", self.name, appender.name(), err);
            }
        }
    }

    pub fn trace<S: Into<String>>(&self, message: S) {
        self.log(Level::Trace, message)
    }

    pub fn debug<S: Into<String>>(&self, message: S) {
        self.log(Level::Debug, message)
    }

    pub fn info<S: Into<String>>(&self, message: S) {
        self.log(Level::Info, message)
    }

    pub fn warn<S: Into<String>>(&self, message: S) {
        self.log(Level::Warn, message)
    }

    pub fn error<S: Into<String>>(&self, message: S) {
        self.log(Level::Error, message)
    }

    pub fn fatal<S: Into<String>>(&self, message: S) {
        self.log(Level::Fatal, message)
    }
}

pub const ROOT_LOGGER_NAME: &str = "root";

/// Owns the root Logger.
pub struct LoggerRepository {
    root_logger: Logger,
}

impl LoggerRepository {
    pub fn new() -> LoggerRepository {
        LoggerRepository { root_logger: Logger::new(ROOT_LOGGER_NAME) }
    }

    pub fn root_logger(&self) -> &Logger {
        &self.root_logger
    }
}

impl Default for LoggerRepository {
    fn default() -> Self {
        LoggerRepository::new()
    }
}

fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(test)]
mod test {

    use super::*;
    use microlog_appender_common::callback::CallbackAppender;
    use microlog_appender_common::AppenderError;
    use std::sync::{Arc, Mutex};

    fn recorder(
        name: &str,
        received: Arc<Mutex<Vec<String>>>,
    ) -> Box<dyn Appender> {
        let name_owned = name.to_owned();
        Box::new(CallbackAppender::new(name, move |event: &LogEvent| {
            received.lock().unwrap().push(format!("{}:{}", name_owned, event.message));
            Ok(())
        }))
    }

    #[test]
    fn root_logger_should_start_with_default_level_and_no_appenders() {
        let repository = LoggerRepository::new();

        assert_eq!(ROOT_LOGGER_NAME, repository.root_logger().name());
        assert_eq!(Level::Debug, repository.root_logger().level());
        assert_eq!(0, repository.root_logger().number_of_appenders());
    }

    #[test]
    fn should_forward_records_to_appenders_in_order() {
        // Arrange
        let received = Arc::new(Mutex::new(vec![]));
        let logger = Logger::new("test");
        logger.add_appender(recorder("first", received.clone()));
        logger.add_appender(recorder("second", received.clone()));

        // Act
        logger.info("hello");

        // Assert
        assert_eq!(vec!["first", "second"], logger.appender_names());
        assert_eq!(
            vec!["first:hello".to_owned(), "second:hello".to_owned()],
            *received.lock().unwrap()
        );
    }

    #[test]
    fn should_drop_records_below_the_level() {
        // Arrange
        let received = Arc::new(Mutex::new(vec![]));
        let logger = Logger::new("test");
        logger.add_appender(recorder("only", received.clone()));
        logger.set_level(Level::Warn);

        // Act
        logger.trace("trace");
        logger.debug("debug");
        logger.info("info");
        logger.warn("warn");
        logger.error("error");
        logger.fatal("fatal");

        // Assert
        assert_eq!(
            vec!["only:warn".to_owned(), "only:error".to_owned(), "only:fatal".to_owned()],
            *received.lock().unwrap()
        );
    }

    #[test]
    fn should_emit_nothing_when_off() {
        let received = Arc::new(Mutex::new(vec![]));
        let logger = Logger::new("test");
        logger.add_appender(recorder("only", received.clone()));
        logger.set_level(Level::Off);

        logger.fatal("fatal");

        assert!(received.lock().unwrap().is_empty());
    }

    #[test]
    fn a_failing_appender_should_not_block_the_others() {
        // Arrange
        let received = Arc::new(Mutex::new(vec![]));
        let logger = Logger::new("test");
        logger.add_appender(Box::new(CallbackAppender::new("broken", |_: &LogEvent| {
            Err(AppenderError::AppenderWriteError { message: "broken".to_owned() })
        })));
        logger.add_appender(recorder("working", received.clone()));

        // Act
        logger.error("still delivered");

        // Assert
        assert_eq!(vec!["working:still delivered".to_owned()], *received.lock().unwrap());
    }

    #[test]
    fn should_remove_all_appenders() {
        let logger = Logger::new("test");
        logger.add_appender(recorder("one", Arc::new(Mutex::new(vec![]))));
        logger.add_appender(recorder("one", Arc::new(Mutex::new(vec![]))));
        assert_eq!(2, logger.number_of_appenders());

        logger.remove_all_appenders();

        assert_eq!(0, logger.number_of_appenders());
    }
}
