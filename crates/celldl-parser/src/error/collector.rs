//! Collector for accumulating diagnostics during a processing phase.
//!
//! The [`DiagnosticCollector`] lets a phase report every problem it finds
//! instead of stopping at the first one. Diagnostics are reported either as
//! fatal ([`emit`](DiagnosticCollector::emit)) or as recoverable
//! ([`recover`](DiagnosticCollector::recover)); only fatal ones fail the
//! phase.

use crate::error::{Diagnostic, ParseError};

/// A collector for accumulating diagnostics during a processing phase.
///
/// # Example
///
/// ```
/// # use celldl_parser::error::{Diagnostic, DiagnosticCollector, ErrorCode};
///
/// let mut collector = DiagnosticCollector::new();
///
/// // The arc is dropped, conversion continues
/// collector.recover(
///     Diagnostic::error("Arc (a1) has invalid target (g9)")
///         .with_code(ErrorCode::E200)
///         .with_subject("a1"),
/// );
///
/// let recovered = collector.finish().expect("nothing fatal was emitted");
/// assert_eq!(recovered.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct DiagnosticCollector {
    fatal: Vec<Diagnostic>,
    recovered: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    /// Create a new empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit a fatal diagnostic.
    ///
    /// The phase will fail when [`finish`](Self::finish) is called.
    pub fn emit(&mut self, diagnostic: Diagnostic) {
        self.fatal.push(diagnostic);
    }

    /// Report a recoverable diagnostic.
    ///
    /// The diagnostic is logged immediately and kept for the caller.
    pub fn recover(&mut self, diagnostic: Diagnostic) {
        diagnostic.log();
        self.recovered.push(diagnostic);
    }

    /// Returns `true` if a fatal diagnostic has been emitted.
    pub fn has_fatal(&self) -> bool {
        !self.fatal.is_empty()
    }

    /// Finish collection and return a result.
    ///
    /// - If a fatal diagnostic was emitted, returns `Err(ParseError)` with
    ///   the fatal diagnostics.
    /// - Otherwise returns the recoverable diagnostics, in report order.
    pub fn finish(self) -> Result<Vec<Diagnostic>, ParseError> {
        if self.fatal.is_empty() {
            Ok(self.recovered)
        } else {
            Err(ParseError::new(self.fatal))
        }
    }
}
