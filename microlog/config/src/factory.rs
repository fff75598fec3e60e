//! The factory that builds Appenders from their canonical identifier.
//!
//! Every Appender type that can appear in a configuration is registered here with a
//! no-argument constructor. New types can be registered without touching the parser.

use crate::error::ConfigurationError;
use log::*;
use microlog_appender_common::{Appender, AppenderError};
use microlog_appender_console::{ConsoleAppender, CONSOLE_APPENDER_ID};
use microlog_appender_file::{FileAppender, FILE_APPENDER_ID};
use std::collections::HashMap;

pub type AppenderConstructor =
    Box<dyn Fn() -> Result<Box<dyn Appender>, AppenderError> + Send + Sync>;

enum Registration {
    Constructible(AppenderConstructor),
    Denied,
}

pub struct AppenderFactory {
    registrations: HashMap<String, Registration>,
}

impl AppenderFactory {
    /// Returns a factory with no registered Appender.
    pub fn empty() -> AppenderFactory {
        AppenderFactory { registrations: HashMap::new() }
    }

    /// Returns a factory that knows the built-in console and file Appenders.
    pub fn new() -> AppenderFactory {
        let mut factory = AppenderFactory::empty();
        factory.register(CONSOLE_APPENDER_ID, || Ok(Box::new(ConsoleAppender::new())));
        factory.register(FILE_APPENDER_ID, || Ok(Box::new(FileAppender::new())));
        factory
    }

    /// Registers the constructor of an Appender type.
    /// A previous registration with the same identifier is replaced.
    pub fn register<S, F>(&mut self, component: S, constructor: F)
    where
        S: Into<String>,
        F: Fn() -> Result<Box<dyn Appender>, AppenderError> + Send + Sync + 'static,
    {
        self.registrations
            .insert(component.into(), Registration::Constructible(Box::new(constructor)));
    }

    /// Marks an Appender type as known but not constructible from a configuration.
    pub fn deny<S: Into<String>>(&mut self, component: S) {
        self.registrations.insert(component.into(), Registration::Denied);
    }

    pub fn is_registered(&self, component: &str) -> bool {
        self.registrations.contains_key(component)
    }

    /// Builds a new instance of the Appender registered as `component`.
    pub fn create(&self, component: &str) -> Result<Box<dyn Appender>, ConfigurationError> {
        trace!("AppenderFactory - create: [{}]", component);
        match self.registrations.get(component) {
            None => Err(ConfigurationError::ComponentNotFound { component: component.to_owned() }),
            Some(Registration::Denied) => {
                Err(ConfigurationError::ComponentAccessDenied { component: component.to_owned() })
            }
            Some(Registration::Constructible(constructor)) => {
                constructor().map_err(|err| ConfigurationError::ComponentInstantiationFailure {
                    component: component.to_owned(),
                    cause: format!("{}", err),
                })
            }
        }
    }
}

impl Default for AppenderFactory {
    fn default() -> Self {
        AppenderFactory::new()
    }
}
