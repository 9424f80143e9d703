use crate::logging::LogLevel;
use crate::scan::ScanOutcome;
use crate::scan::error::ScanError;

#[derive(Debug, Clone)]
pub struct ErrorClassifier;

impl ErrorClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn classify_scan_error(&self, error: &ScanError) -> LogLevel {
        // Network issues and unreadable bodies - usually temporary
        if error.is_unreachable() {
            return LogLevel::Warn;
        }
        match error {
            ScanError::Http { status, .. } => Self::classify_status(*status),

            // Misconfiguration - the user has to fix it
            ScanError::InvalidUrl { .. } => LogLevel::Error,

            ScanError::Reqwest(_) | ScanError::Decode(_) => LogLevel::Warn,
        }
    }

    pub fn classify_outcome(&self, outcome: &ScanOutcome) -> LogLevel {
        match outcome {
            ScanOutcome::Report(_) => LogLevel::Info,
            ScanOutcome::Rejected { status, .. } => Self::classify_status(*status),
            ScanOutcome::Unreachable { .. } => LogLevel::Warn,
        }
    }

    fn classify_status(status: u16) -> LogLevel {
        match status {
            // Rate limiting - low priority
            429 => LogLevel::Debug,
            // Server errors - temporary issues
            500..=599 => LogLevel::Warn,
            // Authentication errors - critical
            401 | 403 => LogLevel::Error,
            // Client errors and upstream errors reported in a 2xx body
            _ => LogLevel::Warn,
        }
    }
}

impl Default for ErrorClassifier {
    fn default() -> Self {
        Self::new()
    }
}
