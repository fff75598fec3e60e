use crate::applier::{self, FormatterConfigurator, NoopFormatterConfigurator};
use crate::error::ConfigurationError;
use crate::factory::AppenderFactory;
use crate::interpreter::{self, ConfigurationStyle};
use crate::properties::load_properties;
use crate::report::{DiagnosticReporter, LogReporter};
use crate::source::ResourceProvider;
use log::*;
use microlog_repository::LoggerRepository;
use std::cell::Cell;
use std::io::Read;
use std::sync::Arc;

/// The asset read by [`PropertyConfigurator::configure`].
pub const DEFAULT_PROPERTIES_FILENAME: &str = "microlog.properties";

/// The stages of a configuration pass.
/// Only a source that cannot be opened or read leads to `Failed`; every other problem is
/// reported and the pass still reaches `Done`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigurationPhase {
    Idle,
    Loading,
    Parsing,
    Interpreting,
    Applying,
    Done,
    Failed,
}

/// Configures the root logger of a [`LoggerRepository`] from a properties source.
///
/// # Example
///
/// ```rust
/// use microlog_config::{InMemoryResourceProvider, PropertyConfigurator};
/// use microlog_common_api::Level;
/// use microlog_repository::LoggerRepository;
/// use std::sync::Arc;
///
/// let repository = Arc::new(LoggerRepository::new());
/// let resources = InMemoryResourceProvider::new()
///     .with_asset("microlog.properties", "microlog.level=WARN\nmicrolog.appender=ConsoleAppender");
///
/// PropertyConfigurator::new(resources, repository.clone()).configure();
///
/// assert_eq!(Level::Warn, repository.root_logger().level());
/// assert_eq!(1, repository.root_logger().number_of_appenders());
/// ```
pub struct PropertyConfigurator<R: ResourceProvider> {
    resources: R,
    repository: Arc<LoggerRepository>,
    factory: AppenderFactory,
    formatter: Box<dyn FormatterConfigurator>,
    reporter: Box<dyn DiagnosticReporter>,
    phase: Cell<ConfigurationPhase>,
}

impl<R: ResourceProvider> PropertyConfigurator<R> {
    pub fn new(resources: R, repository: Arc<LoggerRepository>) -> Self {
        PropertyConfigurator {
            resources,
            repository,
            factory: AppenderFactory::new(),
            formatter: Box::new(NoopFormatterConfigurator::default()),
            reporter: Box::new(LogReporter::new()),
            phase: Cell::new(ConfigurationPhase::Idle),
        }
    }

    pub fn with_factory(mut self, factory: AppenderFactory) -> Self {
        self.factory = factory;
        self
    }

    pub fn with_formatter_configurator<F: FormatterConfigurator + 'static>(
        mut self,
        formatter: F,
    ) -> Self {
        self.formatter = Box::new(formatter);
        self
    }

    pub fn with_reporter<D: DiagnosticReporter + 'static>(mut self, reporter: D) -> Self {
        self.reporter = Box::new(reporter);
        self
    }

    pub fn repository(&self) -> &Arc<LoggerRepository> {
        &self.repository
    }

    /// Returns the stage reached by the last pass.
    pub fn phase(&self) -> ConfigurationPhase {
        self.phase.get()
    }

    /// Configures from the default asset, `microlog.properties`.
    pub fn configure(&self) {
        self.configure_name(DEFAULT_PROPERTIES_FILENAME)
    }

    /// Configures from the named asset.
    pub fn configure_name(&self, name: &str) {
        info!("PropertyConfigurator - configuring from asset [{}]", name);
        self.run(|| self.resources.open_asset(name))
    }

    /// Configures from the raw resource with the given identifier.
    pub fn configure_resource(&self, id: u32) {
        info!("PropertyConfigurator - configuring from raw resource [{}]", id);
        self.run(|| self.resources.open_raw_resource(id))
    }

    fn run<F: FnOnce() -> Result<Box<dyn Read>, ConfigurationError>>(&self, open: F) {
        if let Err(err) = self.pass(open) {
            self.set_phase(ConfigurationPhase::Failed);
            self.reporter.report(&err);
        }
    }

    fn pass<F: FnOnce() -> Result<Box<dyn Read>, ConfigurationError>>(
        &self,
        open: F,
    ) -> Result<(), ConfigurationError> {
        self.set_phase(ConfigurationPhase::Loading);
        let stream = open()?;

        self.set_phase(ConfigurationPhase::Parsing);
        let properties = load_properties(stream)?;

        self.set_phase(ConfigurationPhase::Interpreting);
        let style = interpreter::interpret(&properties, self.reporter.as_ref());

        if let ConfigurationStyle::Simple(config) = style {
            self.set_phase(ConfigurationPhase::Applying);
            applier::apply(
                &config,
                &self.factory,
                self.formatter.as_ref(),
                &self.repository,
                self.reporter.as_ref(),
            );
        }

        self.set_phase(ConfigurationPhase::Done);
        Ok(())
    }

    fn set_phase(&self, phase: ConfigurationPhase) {
        trace!("PropertyConfigurator - phase: {:?} -> {:?}", self.phase.get(), phase);
        self.phase.set(phase);
    }
}
