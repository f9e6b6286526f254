//! Severity levels for diagnostics.

use std::fmt;

/// The severity level of a diagnostic.
///
/// Severity says how bad the problem is, not whether processing stops:
/// an unresolved arc is an error, yet the rest of the document is still
/// converted. Fatality is decided by how the diagnostic is reported (see
/// [`DiagnosticCollector`](crate::error::DiagnosticCollector)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Data that is wrong and was discarded or rejected.
    Error,

    /// Data that is suspicious but was kept, usually marked in the output.
    Warning,
}

impl Severity {
    /// Returns `true` if this is an error severity.
    pub fn is_error(&self) -> bool {
        matches!(self, Severity::Error)
    }

    /// Returns `true` if this is a warning severity.
    pub fn is_warning(&self) -> bool {
        matches!(self, Severity::Warning)
    }

    /// Returns the matching log level.
    pub fn log_level(&self) -> log::Level {
        match self {
            Severity::Error => log::Level::Error,
            Severity::Warning => log::Level::Warn,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_log_level() {
        assert_eq!(Severity::Error.log_level(), log::Level::Error);
        assert_eq!(Severity::Warning.log_level(), log::Level::Warn);
    }

    #[test]
    fn test_severity_display() {
        assert_eq!(Severity::Error.to_string(), "error");
        assert_eq!(Severity::Warning.to_string(), "warning");
    }
}
