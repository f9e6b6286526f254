//! The converted diagram handed to the serializers.

use celldl_core::semantic::{Connection, Document, Glyph, GlyphIndex};
use celldl_parser::error::Diagnostic;

/// A normalized, link-inferred SBGN document.
///
/// Serializers only read a `Diagram`; rendering it any number of times in
/// any order yields the same output.
#[derive(Debug)]
pub struct Diagram {
    document: Document,
    connections: Vec<Connection>,
    diagnostics: Vec<Diagnostic>,
}

impl Diagram {
    pub fn new(
        document: Document,
        connections: Vec<Connection>,
        diagnostics: Vec<Diagnostic>,
    ) -> Self {
        Self {
            document,
            connections,
            diagnostics,
        }
    }

    /// Get the underlying document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Get a glyph by index.
    pub fn glyph(&self, index: GlyphIndex) -> &Glyph {
        self.document.glyph(index)
    }

    /// Get the inferred connections, in process order.
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// Get every recoverable diagnostic: unresolved arcs, invalid arc
    /// classes, and process topology warnings.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Iterate over the warning diagnostics.
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|diagnostic| diagnostic.severity().is_warning())
    }
}
