//! Glyphs: the nodes of a process description.

use std::{convert::Infallible, fmt, str::FromStr};

use indexmap::IndexSet;
use serde::Deserialize;

use crate::{
    geometry::{BBox, Point, Size},
    semantic::GlyphIndex,
};

/// Style modifier attached to glyphs with topology warnings.
pub const WARN_TAG: &str = "warn";

/// The SBGN class of a glyph.
///
/// Only compartments, macromolecules, and processes take part in link
/// inference. Any other SBGN class (simple chemical, complex, ...) is kept
/// verbatim so it can still be emitted and styled.
///
/// The names match SBGN-ML `class` attribute values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum GlyphClass {
    Compartment,
    Macromolecule,
    Process,
    /// Any other SBGN glyph class.
    Other(String),
}

impl GlyphClass {
    /// Returns the SBGN-ML name of this class.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Compartment => "compartment",
            Self::Macromolecule => "macromolecule",
            Self::Process => "process",
            Self::Other(name) => name,
        }
    }

    /// Returns `true` for classes that may contain other glyphs.
    pub fn is_container(&self) -> bool {
        matches!(self, Self::Compartment)
    }

    /// Returns `true` for the classes a process may connect.
    pub fn is_entity(&self) -> bool {
        matches!(self, Self::Compartment | Self::Macromolecule)
    }

    /// Returns `true` for process glyphs.
    pub fn is_process(&self) -> bool {
        matches!(self, Self::Process)
    }
}

impl FromStr for GlyphClass {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "compartment" => Self::Compartment,
            "macromolecule" => Self::Macromolecule,
            "process" => Self::Process,
            other => Self::Other(other.to_string()),
        })
    }
}

impl From<&str> for GlyphClass {
    fn from(value: &str) -> Self {
        match value.parse() {
            Ok(class) => class,
            Err(never) => match never {},
        }
    }
}

impl From<String> for GlyphClass {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl fmt::Display for GlyphClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Style classes of a glyph.
///
/// The base tag is the glyph's SBGN class and never changes. Modifiers
/// (such as [`WARN_TAG`]) are appended as processing discovers them; each
/// appears at most once and they keep their insertion order.
///
/// # Examples
///
/// ```
/// use celldl_core::semantic::{GlyphClass, StyleTags};
///
/// let mut tags = StyleTags::new(GlyphClass::Process);
/// tags.add_modifier("warn");
/// tags.add_modifier("warn");
///
/// assert_eq!(tags.classes().collect::<Vec<_>>(), ["process", "warn"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleTags {
    base: GlyphClass,
    modifiers: IndexSet<String>,
}

impl StyleTags {
    /// Creates tags holding only the base class.
    pub fn new(base: GlyphClass) -> Self {
        Self {
            base,
            modifiers: IndexSet::new(),
        }
    }

    /// Returns the base class.
    pub fn base(&self) -> &GlyphClass {
        &self.base
    }

    /// Appends a modifier unless it is already present.
    pub fn add_modifier(&mut self, tag: impl Into<String>) {
        self.modifiers.insert(tag.into());
    }

    /// Returns `true` if `tag` has been added as a modifier.
    pub fn has_modifier(&self, tag: &str) -> bool {
        self.modifiers.contains(tag)
    }

    /// Returns the base class followed by the modifiers, in order.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.base.as_str()).chain(self.modifiers.iter().map(String::as_str))
    }
}

/// A diagram element read from one SBGN-ML `glyph` record.
///
/// Glyphs live in a [`Document`](crate::semantic::Document) arena and refer
/// to each other through [`GlyphIndex`] values. Containment (`parent` and
/// `children`) is acyclic. Connectivity (`sources` and `targets`) may form
/// cycles.
#[derive(Debug, Clone)]
pub struct Glyph {
    id: String,
    source_id: String,
    label: String,
    bbox: BBox,
    compartment_ref: Option<String>,
    style: StyleTags,
    parent: Option<GlyphIndex>,
    children: Vec<GlyphIndex>,
    sources: Vec<GlyphIndex>,
    targets: Vec<GlyphIndex>,
    derived_from: Vec<String>,
    semantic_type: Option<String>,
    position: Option<Point>,
    size: Option<Size>,
}

impl Glyph {
    /// Create a glyph with no links, annotations, or normalized geometry.
    ///
    /// # Arguments
    ///
    /// * `id` - The identifier issued for this glyph.
    /// * `source_id` - The glyph's `id` attribute in the source document.
    /// * `class` - The glyph's SBGN class.
    /// * `label` - The label text, possibly empty.
    /// * `bbox` - The raw bounding box.
    pub fn new(
        id: impl Into<String>,
        source_id: impl Into<String>,
        class: GlyphClass,
        label: impl Into<String>,
        bbox: BBox,
    ) -> Self {
        Self {
            id: id.into(),
            source_id: source_id.into(),
            label: label.into(),
            bbox,
            compartment_ref: None,
            style: StyleTags::new(class),
            parent: None,
            children: Vec::new(),
            sources: Vec::new(),
            targets: Vec::new(),
            derived_from: Vec::new(),
            semantic_type: None,
            position: None,
            size: None,
        }
    }

    /// Set the declared compartment (the source id of the containing glyph).
    pub fn with_compartment_ref(mut self, compartment_ref: Option<String>) -> Self {
        self.compartment_ref = compartment_ref;
        self
    }

    /// Set the provenance URIs read from `bqmodel:isDerivedFrom`.
    pub fn with_derived_from(mut self, derived_from: Vec<String>) -> Self {
        self.derived_from = derived_from;
        self
    }

    /// Set the semantic type URI read from `bqbiol:is`.
    pub fn with_semantic_type(mut self, semantic_type: Option<String>) -> Self {
        self.semantic_type = semantic_type;
        self
    }

    /// Get the issued identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get the identifier used in the source document.
    pub fn source_id(&self) -> &str {
        &self.source_id
    }

    /// Get the relative URI of this glyph, `<#source-id>`.
    pub fn uri(&self) -> String {
        format!("<#{}>", self.source_id)
    }

    /// Get the primary class.
    pub fn class(&self) -> &GlyphClass {
        self.style.base()
    }

    /// Returns `true` if the primary class equals `class`.
    pub fn is_a(&self, class: &GlyphClass) -> bool {
        self.class() == class
    }

    /// Get the label text (empty if the glyph has none).
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Get the raw bounding box.
    pub fn bbox(&self) -> BBox {
        self.bbox
    }

    /// Get the declared compartment reference, if any.
    pub fn compartment_ref(&self) -> Option<&str> {
        self.compartment_ref.as_deref()
    }

    /// Get the style tags.
    pub fn style(&self) -> &StyleTags {
        &self.style
    }

    /// Get the containing glyph, if any.
    pub fn parent(&self) -> Option<GlyphIndex> {
        self.parent
    }

    /// Get the contained glyphs, in document order.
    pub fn children(&self) -> &[GlyphIndex] {
        &self.children
    }

    /// Returns `true` if this glyph contains no other glyph.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Get the glyphs with a directed reference into this glyph.
    pub fn sources(&self) -> &[GlyphIndex] {
        &self.sources
    }

    /// Get the glyphs this glyph has a directed reference to.
    pub fn targets(&self) -> &[GlyphIndex] {
        &self.targets
    }

    /// Get the provenance URIs.
    pub fn derived_from(&self) -> &[String] {
        &self.derived_from
    }

    /// Get the semantic type URI, if annotated.
    pub fn semantic_type(&self) -> Option<&str> {
        self.semantic_type.as_deref()
    }

    /// Get the normalized position (percent of the parent), once computed.
    pub fn position(&self) -> Option<Point> {
        self.position
    }

    /// Get the normalized size (percent of the parent), once computed.
    pub fn size(&self) -> Option<Size> {
        self.size
    }

    /// Set the normalized geometry.
    pub fn set_geometry(&mut self, position: Point, size: Size) {
        self.position = Some(position);
        self.size = Some(size);
    }

    /// Append a style modifier.
    pub fn add_style_modifier(&mut self, tag: &str) {
        self.style.add_modifier(tag);
    }

    /// Record an inbound reference, ignoring duplicates.
    pub fn add_source(&mut self, source: GlyphIndex) {
        if !self.sources.contains(&source) {
            self.sources.push(source);
        }
    }

    /// Record an outbound reference, ignoring duplicates.
    pub fn add_target(&mut self, target: GlyphIndex) {
        if !self.targets.contains(&target) {
            self.targets.push(target);
        }
    }

    pub(crate) fn set_parent(&mut self, parent: GlyphIndex) {
        self.parent = Some(parent);
    }

    pub(crate) fn add_child(&mut self, child: GlyphIndex) {
        self.children.push(child);
    }
}
