//! # CellDL Parser
//!
//! Reader for SBGN-ML process-description documents. This crate turns the
//! XML source into a [`celldl_core::semantic::Document`]: the glyph arena,
//! the compartment containment tree, and the resolved arcs.
//!
//! ## Usage
//!
//! ```
//! # use celldl_parser::{parse, error::ParseError};
//!
//! fn main() -> Result<(), ParseError> {
//!     let source = r#"
//!         <sbgn xmlns="http://sbgn.org/libsbgn/0.2">
//!           <map language="process description">
//!             <glyph id="c1" class="compartment">
//!               <label text="Cell"/>
//!               <bbox x="0" y="0" w="100" h="100"/>
//!             </glyph>
//!           </map>
//!         </sbgn>
//!     "#;
//!
//!     let parsed = parse(source, None)?;
//!     assert_eq!(parsed.document().len(), 1);
//!     Ok(())
//! }
//! ```

mod builder;
pub mod error;
mod span;

pub use builder::{Parsed, SBGN_NAMESPACES};
pub use span::Span;

use builder::Builder;
use error::ParseError;

/// Parse SBGN-ML source text into a glyph document.
///
/// Building runs in two phases:
///
/// 1. **Index** - Read every `map/glyph` record and assign its identifier
/// 2. **Link** - Resolve `compartmentRef` attributes into the containment tree
///
/// Arcs are then resolved against the indexed glyphs. Each call owns its
/// own identifier assigner, so identifiers never leak between documents.
///
/// # Arguments
///
/// * `source` - The SBGN-ML text, without a byte order mark
/// * `source_uri` - URI of the source file, kept on the document
///
/// # Returns
///
/// Returns the [`Parsed`] document with its recoverable diagnostics
/// (unresolved arcs), or a [`ParseError`] holding every structural
/// error found.
pub fn parse(source: &str, source_uri: Option<&str>) -> Result<Parsed, ParseError> {
    Builder::new(source).build(source_uri)
}
