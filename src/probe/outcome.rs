//! Classified result of a single probe attempt.

use std::fmt;

/// Outcome of one probe attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProbeOutcome {
    /// Response received with a 2xx status.
    Success,
    /// Non-2xx response or a transport error other than a timeout.
    Failure,
    /// The attempt did not complete within the bound.
    Timeout,
}

impl ProbeOutcome {
    /// Classify a completed response by status code.
    pub fn from_status(status: u16) -> Self {
        if (200..=299).contains(&status) {
            ProbeOutcome::Success
        } else {
            ProbeOutcome::Failure
        }
    }

    pub fn is_success(self) -> bool {
        matches!(self, ProbeOutcome::Success)
    }

    /// Stable label for logs and metrics.
    pub fn as_str(self) -> &'static str {
        match self {
            ProbeOutcome::Success => "success",
            ProbeOutcome::Failure => "failure",
            ProbeOutcome::Timeout => "timeout",
        }
    }
}

impl fmt::Display for ProbeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classification() {
        assert_eq!(ProbeOutcome::from_status(200), ProbeOutcome::Success);
        assert_eq!(ProbeOutcome::from_status(201), ProbeOutcome::Success);
        assert_eq!(ProbeOutcome::from_status(299), ProbeOutcome::Success);
        assert_eq!(ProbeOutcome::from_status(199), ProbeOutcome::Failure);
        assert_eq!(ProbeOutcome::from_status(301), ProbeOutcome::Failure);
        assert_eq!(ProbeOutcome::from_status(404), ProbeOutcome::Failure);
        assert_eq!(ProbeOutcome::from_status(503), ProbeOutcome::Failure);
    }

    #[test]
    fn test_only_success_counts() {
        assert!(ProbeOutcome::Success.is_success());
        assert!(!ProbeOutcome::Failure.is_success());
        assert!(!ProbeOutcome::Timeout.is_success());
    }
}
