//! CellDL markup export.
//!
//! Emits a `cell-diagram` document: a `flat-map` of nested `component`
//! elements followed by `connection` elements, then a `style` block holding
//! the default class rules and one positioning rule per emitted glyph.

use std::{borrow::Cow, fmt::Write};

use log::debug;

use celldl_core::semantic::{Glyph, GlyphClass, GlyphIndex};

use crate::{
    config::{ClassFilter, ConnectionSource, StyleConfig},
    diagram::Diagram,
    export::{Error, Exporter, visible_glyphs},
};

const INDENT: &str = "    ";

/// Extra class given to compartments without a parent.
pub const OUTERMOST_TAG: &str = "outermost";

/// Exporter producing CellDL markup.
///
/// # Examples
///
/// ```rust,no_run
/// # use celldl::{DiagramBuilder, config::{ClassFilter, ConnectionSource, StyleConfig}};
/// # use celldl::export::{Exporter, celldl::CellDlExporter};
/// # let source = "";
/// let diagram = DiagramBuilder::default().parse(source, None).unwrap();
/// let style = StyleConfig::default();
/// let markup = CellDlExporter::new(&style)
///     .with_class_filter(ClassFilter::All)
///     .with_connections(ConnectionSource::Arcs)
///     .export(&diagram)
///     .unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct CellDlExporter<'a> {
    style: &'a StyleConfig,
    filter: ClassFilter,
    connections: ConnectionSource,
}

impl<'a> CellDlExporter<'a> {
    /// Create an exporter with the default class filter and inferred connections.
    pub fn new(style: &'a StyleConfig) -> Self {
        Self {
            style,
            filter: ClassFilter::default(),
            connections: ConnectionSource::default(),
        }
    }

    pub fn with_class_filter(mut self, filter: ClassFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_connections(mut self, connections: ConnectionSource) -> Self {
        self.connections = connections;
        self
    }

    fn write_component(
        &self,
        out: &mut String,
        diagram: &Diagram,
        visible: &[bool],
        index: GlyphIndex,
        level: usize,
    ) -> Result<(), Error> {
        let glyph = diagram.glyph(index);
        let indent = INDENT.repeat(level);
        let children: Vec<GlyphIndex> = glyph
            .children()
            .iter()
            .copied()
            .filter(|child| visible[child.get()])
            .collect();

        if children.is_empty() {
            writeln!(out, "{indent}<component {}/>", attributes(glyph))?;
        } else {
            writeln!(out, "{indent}<component {}>", attributes(glyph))?;
            for child in children {
                self.write_component(out, diagram, visible, child, level + 1)?;
            }
            writeln!(out, "{indent}</component>")?;
        }
        Ok(())
    }

    fn write_connections(
        &self,
        out: &mut String,
        diagram: &Diagram,
        visible: &[bool],
    ) -> Result<(), Error> {
        let indent = INDENT.repeat(2);
        let edges: Vec<(GlyphIndex, GlyphIndex, Option<&str>)> = match self.connections {
            ConnectionSource::Inferred => diagram
                .connections()
                .iter()
                .map(|c| {
                    let class = c
                        .semantic_type()
                        .and_then(|uri| self.style.class_for_type(uri));
                    (c.source(), c.target(), class)
                })
                .collect(),
            ConnectionSource::Arcs => diagram
                .document()
                .arcs()
                .iter()
                .map(|arc| {
                    let class = Some(arc.class()).filter(|class| !class.is_empty());
                    (arc.source(), arc.target(), class)
                })
                .collect(),
        };

        for (source, target, class) in edges {
            if !visible[source.get()] || !visible[target.get()] {
                continue;
            }
            write!(
                out,
                r#"{indent}<connection from="{}" to="{}""#,
                escape(diagram.glyph(source).id()),
                escape(diagram.glyph(target).id())
            )?;
            if let Some(class) = class {
                write!(out, r#" class="{}""#, escape(class))?;
            }
            writeln!(out, "/>")?;
        }
        Ok(())
    }

    fn write_style(&self, out: &mut String, diagram: &Diagram, visible: &[bool]) -> Result<(), Error> {
        let outer = INDENT.repeat(2);
        let inner = INDENT.repeat(3);

        let (width, height) = diagram
            .document()
            .extent()
            .map_or((0.0, 0.0), |extent| (extent.width(), extent.height()));
        writeln!(out, "{outer}cell-diagram {{")?;
        // Extents keep a fractional part, `200.0` rather than `200`
        writeln!(out, "{inner}width: {width:?};")?;
        writeln!(out, "{inner}height: {height:?};")?;
        writeln!(out, "{outer}}}")?;

        for (selector, declarations) in self.default_rules() {
            writeln!(out, "{outer}{selector} {{")?;
            for declaration in declarations {
                writeln!(out, "{inner}{declaration};")?;
            }
            writeln!(out, "{outer}}}")?;
        }

        for (index, glyph) in diagram.document().glyphs() {
            if !visible[index.get()] {
                continue;
            }
            let position = glyph.position().unwrap_or_else(|| glyph.bbox().center());
            writeln!(out, "{outer}#{} {{", escape(glyph.id()))?;
            writeln!(
                out,
                "{inner}position: {:.2}%, {:.2}%;",
                position.x(),
                position.y()
            )?;
            if glyph.is_a(&GlyphClass::Compartment) {
                let size = glyph.size().unwrap_or_else(|| glyph.bbox().size());
                writeln!(out, "{inner}size: {:.2}%, {:.2}%;", size.width(), size.height())?;
            }
            writeln!(out, "{outer}}}")?;
        }
        Ok(())
    }

    fn default_rules(&self) -> Vec<(&'static str, Vec<String>)> {
        let sizes = self.style.sizes();
        let size = |width: f64, height: f64| format!("size: {width}v, {height}v");
        let compartment = sizes.compartment();
        let macromolecule = sizes.macromolecule();
        let process = sizes.process();

        vec![
            (
                "connection",
                vec!["stroke-opacity: 0.7".into(), "stroke-width: 4px".into()],
            ),
            (
                ".compartment",
                vec![
                    "color: #CCC".into(),
                    "stroke: #111".into(),
                    "stroke-width: 2px".into(),
                    size(compartment.width, compartment.height),
                    "text-position: 50%, 90%".into(),
                    "shape: rounded-rectangle".into(),
                ],
            ),
            (
                ".compartment > .compartment",
                vec!["color: #DDD".into(), "stroke: #222".into()],
            ),
            (
                ".compartment > .compartment > .compartment",
                vec!["color: #EEE".into(), "stroke: #333".into()],
            ),
            (
                ".outermost",
                vec!["size: 95v, 95v".into(), "stroke: #c0c0c0".into()],
            ),
            (
                ".macromolecule",
                vec![
                    "color: #c0c0FF".into(),
                    "opacity: 0.7".into(),
                    size(macromolecule.width, macromolecule.height),
                    "shape: rounded-rectangle".into(),
                ],
            ),
            (
                ".process",
                vec!["color: green".into(), size(process.width, process.height)],
            ),
            (".consumption, .inhibitory", vec!["line-color: #8080FF".into()]),
            (".production, .excitatory", vec!["line-color: #FF8080".into()]),
            (
                ".warn",
                vec!["color: #ffff00".into(), "size: 1.5v, 1.5v".into()],
            ),
        ]
    }
}

impl Exporter for CellDlExporter<'_> {
    fn export(&self, diagram: &Diagram) -> Result<String, Error> {
        let visible = visible_glyphs(diagram.document(), &self.filter);
        debug!(
            glyphs = visible.iter().filter(|v| **v).count(),
            connections:? = self.connections;
            "Exporting CellDL markup"
        );

        let mut out = String::new();
        writeln!(out, "<cell-diagram>")?;
        writeln!(out, "{INDENT}<flat-map>")?;
        for &root in diagram.document().roots() {
            if visible[root.get()] {
                self.write_component(&mut out, diagram, &visible, root, 2)?;
            }
        }
        self.write_connections(&mut out, diagram, &visible)?;
        writeln!(out, "{INDENT}</flat-map>")?;
        writeln!(out, "{INDENT}<style>")?;
        self.write_style(&mut out, diagram, &visible)?;
        writeln!(out, "{INDENT}</style>")?;
        writeln!(out, "</cell-diagram>")?;
        Ok(out)
    }
}

/// Build the `id`, `class` and `label` attributes of a component.
fn attributes(glyph: &Glyph) -> String {
    let mut classes: Vec<&str> = glyph.style().classes().collect();
    if glyph.is_a(&GlyphClass::Compartment) && glyph.parent().is_none() {
        classes.push(OUTERMOST_TAG);
    }
    let label = if glyph.label().is_empty() {
        "_"
    } else {
        glyph.label()
    };
    format!(
        r#"id="{}" class="{}" label="{}""#,
        escape(glyph.id()),
        escape(&classes.join(" ")),
        escape(label)
    )
}

/// Escape a value for use inside a double-quoted XML attribute.
fn escape(value: &str) -> Cow<'_, str> {
    if !value.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(value);
    }
    let mut escaped = String::with_capacity(value.len() + 8);
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            c => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}
