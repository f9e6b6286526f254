//! Error and diagnostic system for SBGN-ML conversion.
//!
//! This module provides an error handling system with:
//! - Error codes for documentation and searchability
//! - Labeled spans pointing into the SBGN-ML source
//! - Severity levels
//! - A collector that separates fatal diagnostics from recoverable ones
//!
//! # Overview
//!
//! Every problem found while reading a document is a [`Diagnostic`].
//! Structural problems (a dangling `compartmentRef`, a malformed bounding
//! box) are fatal and are returned together in a [`ParseError`]. Problems
//! local to one arc or one process glyph are recoverable: they are logged,
//! kept for the caller, and processing continues.
//!
//! # Example
//!
//! ```
//! # use celldl_parser::error::{Diagnostic, ErrorCode};
//! # use celldl_parser::Span;
//!
//! let diag = Diagnostic::error("compartment `c9` referenced by `glyph3` does not exist")
//!     .with_code(ErrorCode::E103)
//!     .with_subject("glyph3")
//!     .with_label(Span::new(120..180), "declared here")
//!     .with_help("add the compartment glyph or remove the `compartmentRef` attribute");
//! ```

mod collector;
mod diagnostic;
mod error_code;
mod label;
mod parse_error;
mod severity;

pub use collector::DiagnosticCollector;
pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::Label;
pub use parse_error::ParseError;
pub use severity::Severity;
