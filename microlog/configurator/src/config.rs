use clap::{Arg, ArgMatches, Command};
use config_rs::{Config, ConfigError, File};
use microlog_common_logger::LoggerConfig;
use serde::{Deserialize, Serialize};

pub const CONFIG_DIR_DEFAULT: Option<&'static str> =
    option_env!("MICROLOG_CONFIGURATOR_CONFIG_DIR_DEFAULT");

pub const CONFIG_FILE_NAME: &str = "microlog_configurator.toml";

pub fn arg_matches() -> ArgMatches {
    command().get_matches()
}

fn command() -> Command<'static> {
    Command::new("microlog_configurator")
        .arg(
            Arg::new("config-dir")
                .long("config-dir")
                .help("The filesystem folder where the configurator settings are saved")
                .takes_value(true)
                .default_value(CONFIG_DIR_DEFAULT.unwrap_or("/etc/microlog_configurator")),
        )
        .subcommand(
            Command::new("apply")
                .about("Configures the root logger and writes a test record through it"),
        )
        .subcommand(
            Command::new("check")
                .about("Checks that the microlog properties are valid"),
        )
}

#[derive(Deserialize, Serialize, Clone)]
pub struct GlobalConfig {
    /// The configuration of the diagnostics
    pub logger: LoggerConfig,
    pub resources: ResourcesConfig,
}

#[derive(Deserialize, Serialize, Clone)]
pub struct ResourcesConfig {
    pub assets_dir: String,
    pub raw_resources_dir: String,

    /// The asset to read. Defaults to `microlog.properties`.
    pub properties_name: Option<String>,

    /// If set, the raw resource with this id is read instead of the asset.
    pub resource_id: Option<u32>,
}

pub fn build_config(config_dir: &str) -> Result<GlobalConfig, ConfigError> {
    let config_file_path = format!("{}/{}", config_dir, CONFIG_FILE_NAME);
    let mut s = Config::new();
    s.merge(File::with_name(&config_file_path))?;
    s.try_into()
}

#[cfg(test)]
mod test {

    use super::*;

    #[test]
    fn should_read_configuration_from_file() {
        // Arrange
        let path = "./config/";

        // Act
        let config = build_config(path).unwrap();

        // Assert
        assert_eq!("./config/assets", config.resources.assets_dir);
        assert_eq!("./config/raw", config.resources.raw_resources_dir);
        assert_eq!(None, config.resources.resource_id);
        assert!(config.logger.stdout_output);
    }

    #[test]
    fn should_fail_if_the_file_is_missing() {
        assert!(build_config("./missing_dir/").is_err());
    }

    #[test]
    fn should_accept_only_the_known_subcommands() {
        for subcommand in &["apply", "check"] {
            assert!(command().try_get_matches_from(vec!["microlog_configurator", *subcommand]).is_ok());
        }
        assert!(command().try_get_matches_from(vec!["microlog_configurator"]).is_ok());
        assert!(command().try_get_matches_from(vec!["microlog_configurator", "reload"]).is_err());
    }
}
