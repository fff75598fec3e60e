use log::{debug, info, warn};
use microlog_common_logger::setup_logger;
use microlog_common_logger::LoggerConfig;
use std::path::Path;
use std::time::Duration;

#[test]
fn should_write_diagnostics_to_the_output_file() -> Result<(), std::io::Error> {
    let tempdir = tempfile::tempdir()?;
    let log_filename = format!(
        "{}/diagnostics_{}.log",
        tempdir.path().to_str().unwrap().to_owned(),
        rand::random::<u64>()
    );
    let config = LoggerConfig {
        stdout_output: false,
        level: "debug,logger_file_output_it=info".to_owned(),
        file_output_path: Some(log_filename.clone()),
    };

    let guard = setup_logger(&config).unwrap();

    debug!("main - this is debug");
    info!("main - this is info");
    warn!("main - this is warn");

    drop(guard);
    std::thread::sleep(Duration::from_millis(50));

    let path = Path::new(&log_filename);
    assert!(path.exists());

    let log_content = std::fs::read_to_string(path)?;
    assert!(log_content.contains("main - this is info"));
    assert!(log_content.contains("main - this is warn"));
    assert!(!log_content.contains("main - this is debug"));

    Ok(())
}
