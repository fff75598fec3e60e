use crate::command::{resource_provider, run_configuration};
use crate::config::GlobalConfig;
use crate::ConfiguratorError;
use log::*;
use microlog_config::{ConfigurationPhase, PropertyConfigurator};
use microlog_repository::LoggerRepository;
use std::sync::Arc;

pub fn apply(config: &GlobalConfig) -> Result<(), ConfiguratorError> {
    let repository = Arc::new(LoggerRepository::new());
    let configurator =
        PropertyConfigurator::new(resource_provider(&config.resources), repository.clone());

    run_configuration(&configurator, &config.resources);

    if configurator.phase() == ConfigurationPhase::Failed {
        return Err(ConfiguratorError::ConfigurationFailed {
            message: "the microlog properties could not be loaded".to_owned(),
        });
    }

    let root_logger = repository.root_logger();
    info!(
        "Root logger configured. Level: [{}], appenders: {:?}",
        root_logger.level(),
        root_logger.appender_names()
    );
    root_logger.info("microlog configurator - root logger configured");
    root_logger.remove_all_appenders();
    Ok(())
}
