pub mod apply;
pub mod check;

use crate::config::ResourcesConfig;
use microlog_config::{FsResourceProvider, PropertyConfigurator};

/// Runs one configuration pass with the source selected by `resources`.
pub fn run_configuration(
    configurator: &PropertyConfigurator<FsResourceProvider>,
    resources: &ResourcesConfig,
) {
    match (resources.resource_id, &resources.properties_name) {
        (Some(id), _) => configurator.configure_resource(id),
        (None, Some(name)) => configurator.configure_name(name),
        (None, None) => configurator.configure(),
    }
}

pub fn resource_provider(resources: &ResourcesConfig) -> FsResourceProvider {
    FsResourceProvider::new(&resources.assets_dir, &resources.raw_resources_dir)
}

#[cfg(test)]
mod test {

    use super::*;
    use crate::config::build_config;
    use microlog_common_api::Level;
    use microlog_config::RecordingReporter;
    use microlog_repository::LoggerRepository;
    use std::sync::Arc;

    fn configure(resources: &ResourcesConfig) -> (Arc<LoggerRepository>, RecordingReporter) {
        let repository = Arc::new(LoggerRepository::new());
        let reporter = RecordingReporter::new();
        let configurator = PropertyConfigurator::new(resource_provider(resources), repository.clone())
            .with_reporter(reporter.clone());
        run_configuration(&configurator, resources);
        (repository, reporter)
    }

    #[test]
    fn should_configure_from_the_default_asset() {
        let resources = build_config("./config/").unwrap().resources;

        let (repository, reporter) = configure(&resources);

        assert!(reporter.reports().is_empty());
        assert_eq!(Level::Debug, repository.root_logger().level());
        assert_eq!(1, repository.root_logger().number_of_appenders());
    }

    #[test]
    fn the_raw_resource_should_take_precedence() {
        let mut resources = build_config("./config/").unwrap().resources;
        resources.resource_id = Some(1);
        resources.properties_name = Some("missing.properties".to_owned());

        let (repository, reporter) = configure(&resources);

        assert!(reporter.reports().is_empty());
        assert_eq!(Level::Warn, repository.root_logger().level());
        assert_eq!(2, repository.root_logger().number_of_appenders());
    }

    #[test]
    fn should_report_a_missing_asset() {
        let mut resources = build_config("./config/").unwrap().resources;
        resources.properties_name = Some("missing.properties".to_owned());

        let (repository, reporter) = configure(&resources);

        assert_eq!(1, reporter.reports().len());
        assert_eq!(0, repository.root_logger().number_of_appenders());
    }
}
