//! Configuration types for CellDL conversion.
//!
//! This module provides configuration structures that control how SBGN-ML
//! documents are normalized, styled and serialized. All types implement
//! [`serde::Deserialize`] so they can be loaded from external sources; every
//! field has a default.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining the sections below.
//! - [`LayoutConfig`] - The percentage range positions are mapped into.
//! - [`StyleConfig`] - Default class sizes and the semantic-type style table.
//! - [`OutputConfig`] - Class filter and connection source for serializers.
//!
//! # Example
//!
//! ```
//! # use celldl::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.layout().min_position(), 5.0);
//! assert_eq!(config.layout().max_position(), 95.0);
//! ```

use indexmap::IndexMap;
use serde::Deserialize;

use celldl_core::semantic::GlyphClass;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,

    /// Output configuration section.
    #[serde(default)]
    output: OutputConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(layout: LayoutConfig, style: StyleConfig, output: OutputConfig) -> Self {
        Self {
            layout,
            style,
            output,
        }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Returns the output configuration.
    pub fn output(&self) -> &OutputConfig {
        &self.output
    }

    /// Returns the output configuration for modification.
    pub fn output_mut(&mut self) -> &mut OutputConfig {
        &mut self.output
    }
}

/// The percentage range normalized positions are mapped into.
#[derive(Debug, Clone, Deserialize)]
pub struct LayoutConfig {
    #[serde(default = "default_min_position")]
    min_position: f64,

    #[serde(default = "default_max_position")]
    max_position: f64,
}

impl LayoutConfig {
    /// Creates a new [`LayoutConfig`].
    ///
    /// # Arguments
    ///
    /// * `min_position` - Percentage the lowest sibling edge maps to.
    /// * `max_position` - Percentage the highest sibling edge maps to.
    pub fn new(min_position: f64, max_position: f64) -> Self {
        Self {
            min_position,
            max_position,
        }
    }

    pub fn min_position(&self) -> f64 {
        self.min_position
    }

    pub fn max_position(&self) -> f64 {
        self.max_position
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::new(default_min_position(), default_max_position())
    }
}

fn default_min_position() -> f64 {
    5.0
}

fn default_max_position() -> f64 {
    95.0
}

/// A default glyph size, in viewport units.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ClassSize {
    pub width: f64,
    pub height: f64,
}

impl ClassSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Default sizes per glyph class, used by the markup style rules.
#[derive(Debug, Clone, Deserialize)]
pub struct SizesConfig {
    #[serde(default = "default_compartment_size")]
    compartment: ClassSize,

    #[serde(default = "default_macromolecule_size")]
    macromolecule: ClassSize,

    #[serde(default = "default_process_size")]
    process: ClassSize,
}

impl SizesConfig {
    pub fn compartment(&self) -> ClassSize {
        self.compartment
    }

    pub fn macromolecule(&self) -> ClassSize {
        self.macromolecule
    }

    pub fn process(&self) -> ClassSize {
        self.process
    }
}

impl Default for SizesConfig {
    fn default() -> Self {
        Self {
            compartment: default_compartment_size(),
            macromolecule: default_macromolecule_size(),
            process: default_process_size(),
        }
    }
}

fn default_compartment_size() -> ClassSize {
    ClassSize::new(25.0, 25.0)
}

fn default_macromolecule_size() -> ClassSize {
    ClassSize::new(4.0, 2.0)
}

fn default_process_size() -> ClassSize {
    ClassSize::new(1.0, 1.0)
}

/// Visual styling configuration.
///
/// `semantic_types` maps the semantic type URI of a process (its
/// `bqbiol:is` annotation) to the style class given to the connections
/// that replace it.
#[derive(Debug, Clone, Deserialize)]
pub struct StyleConfig {
    #[serde(default)]
    sizes: SizesConfig,

    #[serde(default = "default_semantic_types")]
    semantic_types: IndexMap<String, String>,
}

impl StyleConfig {
    /// Returns the default class sizes.
    pub fn sizes(&self) -> &SizesConfig {
        &self.sizes
    }

    /// Returns the style class for a semantic type URI, if one is mapped.
    ///
    /// ```
    /// # use celldl::config::StyleConfig;
    /// let style = StyleConfig::default();
    /// assert_eq!(
    ///     style.class_for_type("http://identifiers.org/GO:0060077"),
    ///     Some("inhibitory")
    /// );
    /// assert_eq!(style.class_for_type("http://identifiers.org/GO:0000001"), None);
    /// ```
    pub fn class_for_type(&self, semantic_type: &str) -> Option<&str> {
        self.semantic_types.get(semantic_type).map(String::as_str)
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            sizes: SizesConfig::default(),
            semantic_types: default_semantic_types(),
        }
    }
}

fn default_semantic_types() -> IndexMap<String, String> {
    IndexMap::from([
        (
            "http://identifiers.org/GO:0060076".to_string(),
            "excitatory".to_string(),
        ),
        (
            "http://identifiers.org/GO:0060077".to_string(),
            "inhibitory".to_string(),
        ),
    ])
}

/// Which edges the markup serializer emits as `connection` elements.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionSource {
    /// Connections inferred by collapsing process glyphs.
    #[default]
    Inferred,
    /// One connection per resolved source-document arc.
    Arcs,
}

/// Output configuration shared by the serializers.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Glyph classes to emit. Ignored when `all_classes` is set.
    #[serde(default = "default_classes")]
    classes: Vec<GlyphClass>,

    #[serde(default)]
    all_classes: bool,

    #[serde(default)]
    connections: ConnectionSource,

    /// Apply the class filter to the JSON graph too. Off by default so every
    /// resolved arc has indexed endpoints.
    #[serde(default)]
    filter_json: bool,
}

impl OutputConfig {
    /// Returns the class filter described by this configuration.
    pub fn class_filter(&self) -> ClassFilter {
        if self.all_classes {
            ClassFilter::All
        } else {
            ClassFilter::only(self.classes.iter().cloned())
        }
    }

    pub fn connections(&self) -> ConnectionSource {
        self.connections
    }

    /// Returns the class filter for the JSON graph.
    pub fn json_class_filter(&self) -> ClassFilter {
        if self.filter_json {
            self.class_filter()
        } else {
            ClassFilter::All
        }
    }

    /// Emit every glyph class.
    pub fn set_all_classes(&mut self, all_classes: bool) {
        self.all_classes = all_classes;
    }

    pub fn set_connections(&mut self, connections: ConnectionSource) {
        self.connections = connections;
    }

    /// Restrict the JSON graph to the configured classes.
    pub fn set_filter_json(&mut self, filter_json: bool) {
        self.filter_json = filter_json;
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            classes: default_classes(),
            all_classes: false,
            connections: ConnectionSource::default(),
            filter_json: false,
        }
    }
}

fn default_classes() -> Vec<GlyphClass> {
    vec![GlyphClass::Compartment, GlyphClass::Macromolecule]
}

/// Restricts which glyphs a serializer emits.
///
/// A glyph is emitted when its class is admitted and its parent was
/// emitted, so filtering out a class prunes whole branches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassFilter {
    /// Every class is admitted.
    All,
    /// Only the listed classes are admitted.
    Only(Vec<GlyphClass>),
}

impl ClassFilter {
    /// Admit only the given classes.
    pub fn only(classes: impl IntoIterator<Item = GlyphClass>) -> Self {
        Self::Only(classes.into_iter().collect())
    }

    /// Returns `true` if glyphs of `class` may be emitted.
    pub fn admits(&self, class: &GlyphClass) -> bool {
        match self {
            Self::All => true,
            Self::Only(classes) => classes.contains(class),
        }
    }
}

impl Default for ClassFilter {
    fn default() -> Self {
        Self::only(default_classes())
    }
}
