use crate::alias;
use crate::appender_list::parse_appender_list;
use crate::factory::AppenderFactory;
use crate::interpreter::SimpleConfiguration;
use crate::report::DiagnosticReporter;
use log::*;
use microlog_appender_common::Appender;
use microlog_repository::{Logger, LoggerRepository};

/// The extension point for the `microlog.formatter` setting.
pub trait FormatterConfigurator {
    /// Called once per pass, after the Appenders were attached to `logger`.
    fn configure_formatter(&self, formatter: Option<&str>, logger: &Logger);
}

/// Ignores the formatter setting.
#[derive(Default, Clone, Debug)]
pub struct NoopFormatterConfigurator {}

impl FormatterConfigurator for NoopFormatterConfigurator {
    fn configure_formatter(&self, formatter: Option<&str>, _logger: &Logger) {
        if let Some(formatter) = formatter {
            debug!("PropertyConfigurator - formatter setting [{}] is not supported yet", formatter);
        }
    }
}

/// Builds the Appenders listed in `appenders`, in order.
/// An entry that cannot be built is reported and left out.
pub fn create_appenders(
    appenders: &str,
    factory: &AppenderFactory,
    reporter: &dyn DiagnosticReporter,
) -> Vec<Box<dyn Appender>> {
    parse_appender_list(appenders)
        .iter()
        .filter_map(|token| match factory.create(alias::resolve(token)) {
            Ok(appender) => Some(appender),
            Err(err) => {
                reporter.report(&err);
                None
            }
        })
        .collect()
}

/// Applies a simple style configuration to the root logger of `repository`.
pub fn apply(
    config: &SimpleConfiguration,
    factory: &AppenderFactory,
    formatter: &dyn FormatterConfigurator,
    repository: &LoggerRepository,
    reporter: &dyn DiagnosticReporter,
) {
    let root_logger = repository.root_logger();

    if let Some(level) = config.level {
        root_logger.set_level(level);
        info!("PropertyConfigurator - root level: {}", root_logger.level());
    }

    for appender in create_appenders(&config.appenders, factory, reporter) {
        info!("PropertyConfigurator - adding appender {}", appender.name());
        root_logger.add_appender(appender);
    }

    formatter.configure_formatter(config.formatter.as_deref(), root_logger);
}

#[cfg(test)]
mod test {

    use super::*;
    use crate::error::ConfigurationError;
    use crate::report::RecordingReporter;
    use microlog_appender_common::AppenderError;
    use microlog_appender_console::CONSOLE_APPENDER_ID;
    use microlog_appender_file::FILE_APPENDER_ID;
    use microlog_common_api::Level;
    use std::cell::RefCell;

    fn simple(level: Option<Level>, appenders: &str) -> SimpleConfiguration {
        SimpleConfiguration { level, appenders: appenders.to_owned(), formatter: None }
    }

    #[test]
    fn should_create_appenders_through_aliases_and_identifiers() {
        let reporter = RecordingReporter::new();

        let appenders = create_appenders(
            &format!("FileAppender;{}", CONSOLE_APPENDER_ID),
            &AppenderFactory::new(),
            &reporter,
        );

        let names: Vec<&str> = appenders.iter().map(|appender| appender.name()).collect();
        assert_eq!(vec![FILE_APPENDER_ID, CONSOLE_APPENDER_ID], names);
        assert!(reporter.reports().is_empty());
    }

    #[test]
    fn should_skip_failing_entries_and_keep_going() {
        // Arrange
        let reporter = RecordingReporter::new();
        let mut factory = AppenderFactory::new();
        factory.deny("my_crate::PrivateAppender");
        factory.register("my_crate::BrokenAppender", || {
            Err(AppenderError::AppenderCreationError { message: "no sink".to_owned() })
        });

        // Act
        let appenders = create_appenders(
            "my_crate::PrivateAppender,UnknownFoo;my_crate::BrokenAppender,ConsoleAppender",
            &factory,
            &reporter,
        );

        // Assert
        assert_eq!(1, appenders.len());
        assert_eq!(CONSOLE_APPENDER_ID, appenders[0].name());
        let reports = reporter.reports();
        assert_eq!(3, reports.len());
        assert_eq!(
            ConfigurationError::ComponentAccessDenied {
                component: "my_crate::PrivateAppender".to_owned()
            },
            reports[0]
        );
        assert_eq!(
            ConfigurationError::ComponentNotFound { component: "UnknownFoo".to_owned() },
            reports[1]
        );
        assert!(matches!(reports[2], ConfigurationError::ComponentInstantiationFailure { .. }));
    }

    #[test]
    fn should_set_level_and_attach_appenders() {
        let repository = LoggerRepository::new();
        let reporter = RecordingReporter::new();

        apply(
            &simple(Some(Level::Error), "ConsoleAppender;FileAppender"),
            &AppenderFactory::new(),
            &NoopFormatterConfigurator::default(),
            &repository,
            &reporter,
        );

        assert_eq!(Level::Error, repository.root_logger().level());
        assert_eq!(
            vec![CONSOLE_APPENDER_ID, FILE_APPENDER_ID],
            repository.root_logger().appender_names()
        );
    }

    #[test]
    fn should_keep_the_level_when_none_is_resolved() {
        let repository = LoggerRepository::new();
        repository.root_logger().set_level(Level::Fatal);

        apply(
            &simple(None, ""),
            &AppenderFactory::new(),
            &NoopFormatterConfigurator::default(),
            &repository,
            &RecordingReporter::new(),
        );

        assert_eq!(Level::Fatal, repository.root_logger().level());
        assert_eq!(0, repository.root_logger().number_of_appenders());
    }

    #[derive(Default)]
    struct SpyFormatterConfigurator {
        calls: RefCell<Vec<(Option<String>, usize)>>,
    }

    impl FormatterConfigurator for SpyFormatterConfigurator {
        fn configure_formatter(&self, formatter: Option<&str>, logger: &Logger) {
            self.calls
                .borrow_mut()
                .push((formatter.map(str::to_owned), logger.number_of_appenders()));
        }
    }

    #[test]
    fn should_call_the_formatter_hook_after_the_appenders() {
        let repository = LoggerRepository::new();
        let spy = SpyFormatterConfigurator::default();
        let mut config = simple(None, "ConsoleAppender");
        config.formatter = Some("PatternFormatter".to_owned());

        apply(&config, &AppenderFactory::new(), &spy, &repository, &RecordingReporter::new());

        assert_eq!(vec![(Some("PatternFormatter".to_owned()), 1)], *spy.calls.borrow());
    }
}
