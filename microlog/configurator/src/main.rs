use microlog_common_logger::setup_logger;
use thiserror::Error;

mod command;
pub mod config;

#[derive(Error, Debug)]
pub enum ConfiguratorError {
    #[error("ConfigurationFailed: [{message}]")]
    ConfigurationFailed { message: String },
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
    let arg_matches = config::arg_matches();

    let config_dir =
        arg_matches.value_of("config-dir").ok_or("config-dir should be provided")?;
    let global_config = config::build_config(config_dir)?;

    let _guard = setup_logger(&global_config.logger)?;

    match arg_matches.subcommand() {
        Some(("check", _)) => command::check::check(&global_config)?,
        _ => command::apply::apply(&global_config)?,
    }
    Ok(())
}
