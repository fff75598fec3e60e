use microlog_common_api::LogEvent;

/// Renders a record into the line written by an Appender.
pub trait Formatter: Send + Sync {
    fn format(&self, event: &LogEvent) -> String;
}

/// The default layout: `<timestamp> [<LEVEL>] <message>`
#[derive(Default, Clone, Debug)]
pub struct SimpleFormatter {}

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

impl SimpleFormatter {
    pub fn new() -> SimpleFormatter {
        Default::default()
    }
}

impl Formatter for SimpleFormatter {
    fn format(&self, event: &LogEvent) -> String {
        format!("{} [{}] {}", event.created.format(TIMESTAMP_FORMAT), event.level, event.message)
    }
}
