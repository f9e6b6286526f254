//! Error codes for the CellDL diagnostic system.
//!
//! Error codes are organized by phase:
//! - `E0xx` - Document errors
//! - `E1xx` - Glyph structure errors
//! - `E2xx` - Arc resolution errors
//! - `E3xx` - Process topology warnings

use std::fmt;

/// Error codes for categorizing diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Document Errors (E0xx)
    // =========================================================================
    /// Malformed XML.
    ///
    /// The input could not be parsed as XML at all.
    E001,

    /// Not an SBGN document.
    ///
    /// The root element is not `sbgn` in a libsbgn namespace.
    E002,

    /// Missing map.
    ///
    /// The document has no `map` element.
    E003,

    // =========================================================================
    // Glyph Structure Errors (E1xx)
    // =========================================================================
    /// Duplicate glyph id.
    ///
    /// Two glyphs share the same `id` attribute.
    E100,

    /// Missing glyph class.
    ///
    /// A glyph has no `class` attribute.
    E101,

    /// Invalid bounding box.
    ///
    /// A glyph has no `bbox` element, or one of its `x`, `y`, `w`, `h`
    /// attributes is missing or not a number.
    E102,

    /// Undefined compartment reference.
    ///
    /// A glyph's `compartmentRef` names a glyph that does not exist.
    E103,

    /// Container is not a compartment.
    ///
    /// A glyph's `compartmentRef` names a glyph that is not a compartment.
    E104,

    /// Containment cycle.
    ///
    /// Compartment references form a loop, so some glyphs have no root.
    E105,

    /// Annotation about another glyph.
    ///
    /// An `rdf:Description` inside a glyph's annotation is not about that glyph.
    E106,

    // =========================================================================
    // Arc Resolution Errors (E2xx)
    // =========================================================================
    /// Unresolved arc endpoint.
    ///
    /// An arc's source or target does not name an existing glyph.
    E200,

    /// Invalid arc endpoint class.
    ///
    /// An arc connects glyph classes that cannot be linked in that direction,
    /// such as two processes or two entities.
    E201,

    // =========================================================================
    // Process Topology Warnings (E3xx)
    // =========================================================================
    /// Process is not connected.
    E300,

    /// Process has no sources and an unusable number of targets.
    E301,

    /// Process has no targets.
    E302,

    /// Process has several sources and several targets.
    E303,
}

impl ErrorCode {
    /// Returns the numeric code as a string (e.g., "E001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "E001",
            ErrorCode::E002 => "E002",
            ErrorCode::E003 => "E003",
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            ErrorCode::E102 => "E102",
            ErrorCode::E103 => "E103",
            ErrorCode::E104 => "E104",
            ErrorCode::E105 => "E105",
            ErrorCode::E106 => "E106",
            ErrorCode::E200 => "E200",
            ErrorCode::E201 => "E201",
            ErrorCode::E300 => "E300",
            ErrorCode::E301 => "E301",
            ErrorCode::E302 => "E302",
            ErrorCode::E303 => "E303",
        }
    }

    /// Returns a short description of what this error code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "malformed XML",
            ErrorCode::E002 => "not an SBGN document",
            ErrorCode::E003 => "missing map",
            ErrorCode::E100 => "duplicate glyph id",
            ErrorCode::E101 => "missing glyph class",
            ErrorCode::E102 => "invalid bounding box",
            ErrorCode::E103 => "undefined compartment",
            ErrorCode::E104 => "container is not a compartment",
            ErrorCode::E105 => "containment cycle",
            ErrorCode::E106 => "annotation about another glyph",
            ErrorCode::E200 => "unresolved arc endpoint",
            ErrorCode::E201 => "invalid arc endpoint class",
            ErrorCode::E300 => "process not connected",
            ErrorCode::E301 => "process without sources",
            ErrorCode::E302 => "process without targets",
            ErrorCode::E303 => "ambiguous process",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
