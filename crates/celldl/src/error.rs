//! Error types for CellDL operations.
//!
//! This module provides the main error type [`CellDlError`] which wraps
//! the error conditions that can occur while converting a document.

use std::io;

use thiserror::Error;

use celldl_parser::error::ParseError;

use crate::layout::LayoutError;

/// The main error type for CellDL operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant contains structured error information with spans
/// into the SBGN-ML source, kept alongside it for rich error reporting.
#[derive(Debug, Error)]
pub enum CellDlError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<crate::export::Error> for CellDlError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}

impl CellDlError {
    /// Create a new `Parse` error with the associated source text.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
