use crate::error::ConfigurationError;
use log::*;
use std::sync::{Arc, Mutex};

/// Receives the problems found during a configuration pass.
/// The configuration entry points do not return errors; this is the only place they are visible.
pub trait DiagnosticReporter {
    fn report(&self, error: &ConfigurationError);
}

/// Forwards every problem to the `log` facade.
#[derive(Default, Clone, Debug)]
pub struct LogReporter {}

impl LogReporter {
    pub fn new() -> LogReporter {
        Default::default()
    }
}

impl DiagnosticReporter for LogReporter {
    fn report(&self, error: &ConfigurationError) {
        if error.is_fatal() {
            error!("PropertyConfigurator - configuration aborted: {}", error);
        } else {
            warn!("PropertyConfigurator - {}", error);
        }
    }
}

/// Keeps every reported problem, then forwards it to the `log` facade.
#[derive(Default, Clone, Debug)]
pub struct RecordingReporter {
    reports: Arc<Mutex<Vec<ConfigurationError>>>,
    log: LogReporter,
}

impl RecordingReporter {
    pub fn new() -> RecordingReporter {
        Default::default()
    }

    /// Returns a copy of the problems reported so far, oldest first.
    pub fn reports(&self) -> Vec<ConfigurationError> {
        self.reports.lock().unwrap_or_else(|poisoned| poisoned.into_inner()).clone()
    }
}

impl DiagnosticReporter for RecordingReporter {
    fn report(&self, error: &ConfigurationError) {
        self.reports.lock().unwrap_or_else(|poisoned| poisoned.into_inner()).push(error.clone());
        self.log.report(error);
    }
}

#[cfg(test)]
mod test {

    use super::*;

    #[test]
    fn clones_should_share_the_recorded_reports() {
        let reporter = RecordingReporter::new();
        let clone = reporter.clone();

        clone.report(&ConfigurationError::InvalidLevel { level: "LOUD".to_owned() });

        assert_eq!(
            vec![ConfigurationError::InvalidLevel { level: "LOUD".to_owned() }],
            reporter.reports()
        );
    }
}
