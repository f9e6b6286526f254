//! Flat JSON graph export.
//!
//! Leaf glyphs become `nodes` and containers become `groups`, each numbered
//! densely from zero in depth-first visitation order. `links` reference
//! node indices, and `constraints` is always empty.

use std::collections::HashMap;

use log::debug;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use celldl_core::semantic::GlyphIndex;

use crate::{
    config::ClassFilter,
    diagram::Diagram,
    export::{Error, Exporter, visible_glyphs},
};

/// One leaf glyph.
///
/// Fields are declared in key order so the output keys are sorted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    pub height: f64,
    pub index: usize,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub width: f64,
}

/// One container glyph.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Group {
    /// Indices of the groups directly contained.
    pub groups: Vec<usize>,
    /// Indices of the leaves directly contained.
    pub leaves: Vec<usize>,
}

/// One resolved arc between two leaves.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Link {
    pub source: usize,
    pub target: usize,
    #[serde(rename = "type")]
    pub kind: String,
}

/// The whole JSON document.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Graph {
    pub constraints: Vec<serde_json::Value>,
    pub groups: Vec<Group>,
    pub links: Vec<Link>,
    pub nodes: Vec<Node>,
}

/// Exporter producing the flat JSON graph.
///
/// Unfiltered by default, so every resolved arc becomes a link.
#[derive(Debug, Clone)]
pub struct JsonExporter {
    filter: ClassFilter,
}

impl JsonExporter {
    pub fn new() -> Self {
        Self {
            filter: ClassFilter::All,
        }
    }

    /// Emit only the glyphs admitted by `filter`. Arcs touching a
    /// filtered-out glyph are dropped from `links`.
    pub fn with_class_filter(mut self, filter: ClassFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Build the graph without encoding it.
    pub fn graph(&self, diagram: &Diagram) -> Graph {
        let visible = visible_glyphs(diagram.document(), &self.filter);
        let mut walk = Walk {
            diagram,
            visible: &visible,
            graph: Graph::default(),
            node_index: HashMap::new(),
        };
        for &root in diagram.document().roots() {
            if visible[root.get()] {
                walk.visit(root, None);
            }
        }

        let Walk {
            mut graph,
            node_index,
            ..
        } = walk;
        graph.links = diagram
            .document()
            .arcs()
            .iter()
            .filter_map(|arc| {
                Some(Link {
                    source: *node_index.get(&arc.source())?,
                    target: *node_index.get(&arc.target())?,
                    kind: arc.class().to_string(),
                })
            })
            .collect();
        graph
    }
}

impl Default for JsonExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Exporter for JsonExporter {
    fn export(&self, diagram: &Diagram) -> Result<String, Error> {
        let graph = self.graph(diagram);
        debug!(
            nodes = graph.nodes.len(),
            groups = graph.groups.len(),
            links = graph.links.len();
            "Exporting JSON graph"
        );

        let mut buffer = Vec::new();
        let mut serializer =
            Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(b"    "));
        graph.serialize(&mut serializer)?;
        String::from_utf8(buffer).map_err(|err| Error::Render(err.to_string()))
    }
}

struct Walk<'a> {
    diagram: &'a Diagram,
    visible: &'a [bool],
    graph: Graph,
    node_index: HashMap<GlyphIndex, usize>,
}

impl Walk<'_> {
    /// Visit a glyph whose parent group, if any, is `parent`.
    fn visit(&mut self, index: GlyphIndex, parent: Option<usize>) {
        let glyph = self.diagram.glyph(index);
        if glyph.is_leaf() {
            let size = glyph.size().unwrap_or_else(|| glyph.bbox().size());
            let node = self.graph.nodes.len();
            self.graph.nodes.push(Node {
                height: size.height(),
                index: node,
                name: glyph.label().to_string(),
                kind: glyph.class().to_string(),
                width: size.width(),
            });
            self.node_index.insert(index, node);
            if let Some(parent) = parent {
                self.graph.groups[parent].leaves.push(node);
            }
        } else {
            let group = self.graph.groups.len();
            self.graph.groups.push(Group::default());
            if let Some(parent) = parent {
                self.graph.groups[parent].groups.push(group);
            }
            for &child in glyph.children() {
                if self.visible[child.get()] {
                    self.visit(child, Some(group));
                }
            }
        }
    }
}
