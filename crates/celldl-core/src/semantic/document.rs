//! The document: glyph arena, containment roots, and arcs.

use std::fmt;

use crate::{
    geometry::Size,
    semantic::{Glyph, GlyphClass},
};

/// Index of a glyph within its [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GlyphIndex(usize);

impl GlyphIndex {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the position of the glyph in document order.
    pub fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for GlyphIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A source-document edge whose endpoints both resolved to glyphs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arc {
    id: String,
    class: String,
    source: GlyphIndex,
    target: GlyphIndex,
}

impl Arc {
    /// Create an arc between two resolved glyphs.
    pub fn new(
        id: impl Into<String>,
        class: impl Into<String>,
        source: GlyphIndex,
        target: GlyphIndex,
    ) -> Self {
        Self {
            id: id.into(),
            class: class.into(),
            source,
            target,
        }
    }

    /// Get the arc id from the source document.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get the SBGN arc class (`consumption`, `production`, ...), possibly empty.
    pub fn class(&self) -> &str {
        &self.class
    }

    pub fn source(&self) -> GlyphIndex {
        self.source
    }

    pub fn target(&self) -> GlyphIndex {
        self.target
    }
}

/// An inferred edge between two non-process glyphs.
///
/// Connections replace process glyphs: each one links an entity feeding a
/// process to an entity the process produces. The semantic type of the
/// eliminated process is carried along for styling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    source: GlyphIndex,
    target: GlyphIndex,
    semantic_type: Option<String>,
}

impl Connection {
    pub fn new(source: GlyphIndex, target: GlyphIndex, semantic_type: Option<String>) -> Self {
        Self {
            source,
            target,
            semantic_type,
        }
    }

    pub fn source(&self) -> GlyphIndex {
        self.source
    }

    pub fn target(&self) -> GlyphIndex {
        self.target
    }

    /// Get the semantic type URI inherited from the process, if any.
    pub fn semantic_type(&self) -> Option<&str> {
        self.semantic_type.as_deref()
    }
}

/// An SBGN process description after tree building.
///
/// Owns every glyph in document order. Containment is expressed through
/// [`GlyphIndex`] links on the glyphs themselves; [`Document::roots`] lists
/// the glyphs without a parent, in document order.
#[derive(Debug, Clone, Default)]
pub struct Document {
    glyphs: Vec<Glyph>,
    roots: Vec<GlyphIndex>,
    arcs: Vec<Arc>,
    source_uri: Option<String>,
    extent: Option<Size>,
}

impl Document {
    /// Create an empty document.
    ///
    /// # Arguments
    ///
    /// * `source_uri` - URI of the source file, used as the Turtle `@base`.
    pub fn new(source_uri: Option<String>) -> Self {
        Self {
            source_uri,
            ..Self::default()
        }
    }

    /// Add a glyph and return its index.
    pub fn add_glyph(&mut self, glyph: Glyph) -> GlyphIndex {
        self.glyphs.push(glyph);
        GlyphIndex::new(self.glyphs.len() - 1)
    }

    /// Register a glyph as a containment root.
    pub fn add_root(&mut self, index: GlyphIndex) {
        self.roots.push(index);
    }

    /// Link `child` into `parent`, updating both sides.
    ///
    /// # Panics
    ///
    /// Panics if either index does not belong to this document.
    pub fn link_child(&mut self, parent: GlyphIndex, child: GlyphIndex) {
        self.glyphs[child.0].set_parent(parent);
        self.glyphs[parent.0].add_child(child);
    }

    /// Add a resolved arc.
    pub fn add_arc(&mut self, arc: Arc) {
        self.arcs.push(arc);
    }

    /// Get a glyph by index.
    ///
    /// # Panics
    ///
    /// Panics if the index does not belong to this document.
    pub fn glyph(&self, index: GlyphIndex) -> &Glyph {
        &self.glyphs[index.0]
    }

    /// Get a glyph mutably by index.
    ///
    /// # Panics
    ///
    /// Panics if the index does not belong to this document.
    pub fn glyph_mut(&mut self, index: GlyphIndex) -> &mut Glyph {
        &mut self.glyphs[index.0]
    }

    /// Iterate over all glyphs in document order.
    pub fn glyphs(&self) -> impl Iterator<Item = (GlyphIndex, &Glyph)> {
        self.glyphs
            .iter()
            .enumerate()
            .map(|(i, glyph)| (GlyphIndex::new(i), glyph))
    }

    /// Iterate over the glyphs of one class in document order.
    pub fn glyphs_of_class<'a>(
        &'a self,
        class: &'a GlyphClass,
    ) -> impl Iterator<Item = (GlyphIndex, &'a Glyph)> + 'a {
        self.glyphs().filter(move |(_, glyph)| glyph.is_a(class))
    }

    /// Returns the number of glyphs.
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Returns `true` if the document has no glyphs.
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Get the containment roots in document order.
    pub fn roots(&self) -> &[GlyphIndex] {
        &self.roots
    }

    /// Get the resolved arcs in document order.
    pub fn arcs(&self) -> &[Arc] {
        &self.arcs
    }

    /// Get the source URI, if known.
    pub fn source_uri(&self) -> Option<&str> {
        self.source_uri.as_deref()
    }

    /// Get the raw extent of the root glyphs, once geometry has been normalized.
    pub fn extent(&self) -> Option<Size> {
        self.extent
    }

    /// Record the raw extent of the root glyphs.
    pub fn set_extent(&mut self, extent: Size) {
        self.extent = Some(extent);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::BBox;

    fn glyph(id: &str, class: GlyphClass) -> Glyph {
        Glyph::new(id, id, class, id, BBox::new(0.0, 0.0, 1.0, 1.0))
    }

    #[test]
    fn test_add_glyph_returns_sequential_indices() {
        let mut doc = Document::new(None);
        let a = doc.add_glyph(glyph("a", GlyphClass::Compartment));
        let b = doc.add_glyph(glyph("b", GlyphClass::Macromolecule));

        assert_eq!(a.get(), 0);
        assert_eq!(b.get(), 1);
        assert_eq!(doc.len(), 2);
        assert_eq!(doc.glyph(b).id(), "b");
    }

    #[test]
    fn test_link_child_updates_both_sides() {
        let mut doc = Document::new(None);
        let parent = doc.add_glyph(glyph("cell", GlyphClass::Compartment));
        let child = doc.add_glyph(glyph("atp", GlyphClass::Macromolecule));
        doc.add_root(parent);
        doc.link_child(parent, child);

        assert_eq!(doc.glyph(parent).children(), [child]);
        assert_eq!(doc.glyph(child).parent(), Some(parent));
        assert_eq!(doc.roots(), [parent]);
        assert!(!doc.glyph(parent).is_leaf());
    }

    #[test]
    fn test_glyphs_of_class() {
        let mut doc = Document::new(None);
        doc.add_glyph(glyph("p1", GlyphClass::Process));
        doc.add_glyph(glyph("m1", GlyphClass::Macromolecule));
        doc.add_glyph(glyph("p2", GlyphClass::Process));

        let ids: Vec<_> = doc
            .glyphs_of_class(&GlyphClass::Process)
            .map(|(_, g)| g.id())
            .collect();
        assert_eq!(ids, ["p1", "p2"]);
    }

    #[test]
    fn test_source_uri_and_extent() {
        let mut doc = Document::new(Some("file:///tmp/model.sbgn".to_string()));
        assert_eq!(doc.source_uri(), Some("file:///tmp/model.sbgn"));
        assert!(doc.extent().is_none());

        doc.set_extent(Size::new(800.0, 600.0));
        assert_eq!(doc.extent(), Some(Size::new(800.0, 600.0)));
    }
}
