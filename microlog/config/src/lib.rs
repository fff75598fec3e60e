//! Configures a microlog [`LoggerRepository`](microlog_repository::LoggerRepository) from a
//! `.properties` source.
//!
//! A configuration pass opens the source, parses its key/value pairs, recognizes the
//! configuration style and applies the simple style settings to the root logger:
//!
//! ```properties
//! # The root logger level: TRACE, DEBUG, INFO, WARN, ERROR, FATAL or OFF
//! microlog.level=DEBUG
//! # Appender aliases or canonical identifiers, separated by ';' or ','
//! microlog.appender=ConsoleAppender;FileAppender
//! ```
//!
//! Problems are reported through a [`DiagnosticReporter`] and never abort the pass, except a
//! source that cannot be opened or read.

pub mod alias;
pub mod appender_list;
pub mod applier;
pub mod configurator;
pub mod error;
pub mod factory;
pub mod interpreter;
pub mod properties;
pub mod report;
pub mod source;

pub use applier::{FormatterConfigurator, NoopFormatterConfigurator};
pub use configurator::{ConfigurationPhase, PropertyConfigurator, DEFAULT_PROPERTIES_FILENAME};
pub use error::ConfigurationError;
pub use factory::AppenderFactory;
pub use report::{DiagnosticReporter, LogReporter, RecordingReporter};
pub use source::{FsResourceProvider, InMemoryResourceProvider, ResourceProvider};
