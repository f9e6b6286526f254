//! Export functionality for CellDL diagrams.
//!
//! This module provides the [`Exporter`] trait that defines the interface for
//! converting a [`Diagram`] into an output format. It is the final stage in
//! the conversion pipeline.
//!
//! # Pipeline Position
//!
//! ```text
//! SBGN-ML text
//!     ↓ parse
//! Document
//!     ↓ layout
//! Document with percentage geometry
//!     ↓ inference
//! Diagram
//!     ↓ export (this module)
//! Output text
//! ```
//!
//! # Available Backends
//!
//! - [`celldl`] - nested CellDL markup with a style block
//! - [`json`] - flat node/link/group JSON graph
//! - [`turtle`] - RDF/Turtle provenance graph
//!
//! # Error Handling
//!
//! Export operations return [`Error`]. [`Error`] converts into
//! [`CellDlError::Export`] at the crate boundary.
//!
//! [`CellDlError::Export`]: crate::CellDlError::Export

pub mod celldl;
pub mod json;
pub mod turtle;

use std::fmt;

use celldl_core::semantic::{Document, GlyphIndex};

use crate::{config::ClassFilter, diagram::Diagram};

/// Abstraction for diagram export backends.
///
/// Implementors never mutate the diagram, so one diagram may be exported
/// repeatedly and by several backends.
pub trait Exporter {
    /// Exports a diagram to the backend's output format.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if the diagram cannot be converted to the
    /// target format, or [`Error::Json`] if JSON encoding fails.
    fn export(&self, diagram: &Diagram) -> Result<String, Error>;
}

/// Errors that can occur during diagram export.
#[derive(Debug)]
pub enum Error {
    /// A rendering or conversion failure described by `message`.
    Render(String),
    /// A JSON encoding failure.
    Json(serde_json::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Render(msg) => write!(f, "Render error: {msg}"),
            Self::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Render(_) => None,
            Self::Json(err) => Some(err),
        }
    }
}

impl From<fmt::Error> for Error {
    fn from(err: fmt::Error) -> Self {
        Self::Render(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

/// Mark the glyphs a class filter lets through, indexed by glyph.
///
/// A glyph is visible when its class is admitted and its parent is visible.
fn visible_glyphs(document: &Document, filter: &ClassFilter) -> Vec<bool> {
    fn visit(document: &Document, filter: &ClassFilter, index: usize, visible: &mut [bool]) {
        let glyph = document.glyph(GlyphIndex::new(index));
        if !filter.admits(glyph.class()) {
            return;
        }
        visible[index] = true;
        for child in glyph.children() {
            visit(document, filter, child.get(), visible);
        }
    }

    let mut visible = vec![false; document.len()];
    for root in document.roots() {
        visit(document, filter, root.get(), &mut visible);
    }
    visible
}
