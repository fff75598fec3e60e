use crate::command::{resource_provider, run_configuration};
use crate::config::GlobalConfig;
use crate::ConfiguratorError;
use microlog_config::{PropertyConfigurator, RecordingReporter};
use microlog_repository::LoggerRepository;
use std::sync::Arc;

pub fn check(config: &GlobalConfig) -> Result<(), ConfiguratorError> {
    println!("Check microlog configuration");
    let reporter = RecordingReporter::new();
    let configurator =
        PropertyConfigurator::new(resource_provider(&config.resources), Arc::new(LoggerRepository::new()))
            .with_reporter(reporter.clone());

    run_configuration(&configurator, &config.resources);

    let reports = reporter.reports();
    if reports.is_empty() {
        println!("The configuration is correct.");
        Ok(())
    } else {
        for report in &reports {
            println!("- {}", report);
        }
        Err(ConfiguratorError::ConfigurationFailed {
            message: format!("{} problem(s) found", reports.len()),
        })
    }
}
