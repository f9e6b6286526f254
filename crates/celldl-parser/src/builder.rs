//! Glyph and compartment tree building for SBGN-ML documents.
//!
//! Building runs in two phases over the `map` element:
//!
//! 1. **Index** - one [`Glyph`] per `glyph` record, with its class, label,
//!    bounding box, declared compartment and annotations. No links are made.
//! 2. **Link** - every `compartmentRef` is resolved and the child is
//!    registered with its parent in document order. No glyphs are created.
//!
//! Arcs are resolved last, against the index built in phase 1.

use indexmap::IndexMap;
use log::{debug, info, trace};
use roxmltree::{Node, TextPos};

use celldl_core::{
    geometry::BBox,
    identifier::IdAssigner,
    semantic::{Arc, Document, Glyph, GlyphClass, GlyphIndex},
};

use crate::{
    error::{Diagnostic, DiagnosticCollector, ErrorCode, ParseError},
    span::Span,
};

/// libsbgn namespaces accepted for the root `sbgn` element.
pub const SBGN_NAMESPACES: [&str; 2] = [
    "http://sbgn.org/libsbgn/0.2",
    "http://sbgn.org/libsbgn/0.3",
];

const RDF_NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
const BQBIOL_NS: &str = "http://biomodels.net/biology-qualifiers/";
const BQMODEL_NS: &str = "http://biomodels.net/model-qualifiers/";

/// The result of reading an SBGN-ML document.
///
/// Holds the built [`Document`] together with the recoverable diagnostics
/// reported while building it (unresolved arcs).
#[derive(Debug)]
pub struct Parsed {
    document: Document,
    diagnostics: Vec<Diagnostic>,
}

impl Parsed {
    /// Get the built document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Get the recoverable diagnostics, in report order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Split into the document and its diagnostics.
    pub fn into_parts(self) -> (Document, Vec<Diagnostic>) {
        (self.document, self.diagnostics)
    }
}

/// Annotation values read from a glyph's `rdf:Description`.
#[derive(Debug, Default)]
struct Annotations {
    derived_from: Vec<String>,
    semantic_type: Option<String>,
}

pub struct Builder<'a> {
    source: &'a str,
    ids: IdAssigner,
    collector: DiagnosticCollector,
    index: IndexMap<String, GlyphIndex>,
    spans: Vec<Span>,
}

impl<'a> Builder<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            ids: IdAssigner::new(),
            collector: DiagnosticCollector::new(),
            index: IndexMap::new(),
            spans: Vec::new(),
        }
    }

    pub fn build(mut self, source_uri: Option<&str>) -> Result<Parsed, ParseError> {
        let xml = roxmltree::Document::parse(self.source).map_err(|err| {
            let offset = byte_offset(self.source, err.pos());
            Diagnostic::error(format!("malformed XML: {err}"))
                .with_code(ErrorCode::E001)
                .with_label(Span::new(offset..offset), "here")
        })?;

        let root = xml.root_element();
        let namespace = match root.tag_name().namespace() {
            Some(ns) if root.tag_name().name() == "sbgn" && SBGN_NAMESPACES.contains(&ns) => ns,
            _ => {
                return Err(Diagnostic::error("Not a valid SBGN document")
                    .with_code(ErrorCode::E002)
                    .with_label(span_of(root), "root element")
                    .with_help(format!(
                        "the root element must be `sbgn` in the `{}` namespace",
                        SBGN_NAMESPACES[0]
                    ))
                    .into());
            }
        };
        debug!(namespace; "Reading SBGN-ML document");

        let Some(map) = root.children().find(|n| n.has_tag_name((namespace, "map"))) else {
            return Err(Diagnostic::error("SBGN document has no `map` element")
                .with_code(ErrorCode::E003)
                .with_label(span_of(root), "expected a `map` child")
                .into());
        };

        let mut document = Document::new(source_uri.map(str::to_string));

        // Phase 1: index
        for node in map
            .children()
            .filter(|n| n.has_tag_name((namespace, "glyph")))
        {
            if let Some(glyph) = self.read_glyph(node, namespace) {
                let source_id = glyph.source_id().to_string();
                let index = document.add_glyph(glyph);
                self.index.insert(source_id, index);
                self.spans.push(span_of(node));
            }
        }
        if self.collector.has_fatal() {
            return Err(self.fail());
        }
        trace!(glyphs = document.len(); "Indexed glyphs");

        // Phase 2: link
        let parents = self.resolve_parents(&document);
        self.check_acyclic(&document, &parents);
        if self.collector.has_fatal() {
            return Err(self.fail());
        }
        for (i, parent) in parents.into_iter().enumerate() {
            let child = GlyphIndex::new(i);
            match parent {
                Some(parent) => document.link_child(parent, child),
                None => document.add_root(child),
            }
        }

        for node in map.children().filter(|n| n.has_tag_name((namespace, "arc"))) {
            self.read_arc(node, &mut document);
        }

        info!(
            glyphs = document.len(),
            roots = document.roots().len(),
            arcs = document.arcs().len();
            "Built glyph tree"
        );

        let diagnostics = self.collector.finish()?;
        Ok(Parsed {
            document,
            diagnostics,
        })
    }

    fn fail(self) -> ParseError {
        match self.collector.finish() {
            Err(err) => err,
            Ok(_) => ParseError::new(Vec::new()),
        }
    }

    /// Read one `glyph` record. Returns `None` when the record is skipped or invalid.
    fn read_glyph(&mut self, node: Node<'_, '_>, namespace: &str) -> Option<Glyph> {
        let span = span_of(node);
        let Some(source_id) = node.attribute("id").filter(|id| !id.is_empty()) else {
            debug!(offset = span.start(); "Skipping glyph without an id");
            return None;
        };

        if let Some(&first) = self.index.get(source_id) {
            self.collector.emit(
                Diagnostic::error(format!("duplicate glyph id `{source_id}`"))
                    .with_code(ErrorCode::E100)
                    .with_subject(source_id)
                    .with_label(span, "duplicate here")
                    .with_secondary_label(self.spans[first.get()], "first defined here"),
            );
            return None;
        }

        let class = match node.attribute("class").filter(|c| !c.is_empty()) {
            Some(class) => GlyphClass::from(class),
            None => {
                self.collector.emit(
                    Diagnostic::error(format!("glyph `{source_id}` has no class"))
                        .with_code(ErrorCode::E101)
                        .with_subject(source_id)
                        .with_label(span, "missing `class` attribute"),
                );
                return None;
            }
        };

        let bbox = self.read_bbox(node, namespace, source_id)?;

        let label = node
            .children()
            .find(|n| n.has_tag_name((namespace, "label")))
            .and_then(|n| n.attribute("text"))
            .unwrap_or_default();

        let compartment_ref = node
            .attribute("compartmentRef")
            .filter(|r| !r.is_empty())
            .map(str::to_string);

        let annotations = self.read_annotations(node, namespace, source_id)?;

        let id = self.ids.assign(label, Some(source_id));
        trace!(id = id.as_str(), source_id, class = class.as_str(); "Indexed glyph");

        Some(
            Glyph::new(id, source_id, class, label, bbox)
                .with_compartment_ref(compartment_ref)
                .with_derived_from(annotations.derived_from)
                .with_semantic_type(annotations.semantic_type),
        )
    }

    fn read_bbox(&mut self, node: Node<'_, '_>, namespace: &str, source_id: &str) -> Option<BBox> {
        let Some(bbox) = node
            .children()
            .find(|n| n.has_tag_name((namespace, "bbox")))
        else {
            self.collector.emit(
                Diagnostic::error(format!("glyph `{source_id}` has no bounding box"))
                    .with_code(ErrorCode::E102)
                    .with_subject(source_id)
                    .with_label(span_of(node), "missing `bbox` element"),
            );
            return None;
        };

        let coordinate = |name: &str| {
            bbox.attribute(name)
                .and_then(|value| value.trim().parse::<f64>().ok())
                .filter(|value| value.is_finite())
        };
        match (
            coordinate("x"),
            coordinate("y"),
            coordinate("w"),
            coordinate("h"),
        ) {
            (Some(x), Some(y), Some(w), Some(h)) => Some(BBox::new(x, y, w, h)),
            _ => {
                self.collector.emit(
                    Diagnostic::error(format!("glyph `{source_id}` has an invalid bounding box"))
                        .with_code(ErrorCode::E102)
                        .with_subject(source_id)
                        .with_label(span_of(bbox), "expected numeric `x`, `y`, `w` and `h`"),
                );
                None
            }
        }
    }

    /// Read the `rdf:Description` annotations belonging to a glyph.
    ///
    /// Descriptions inside nested glyphs (state variables, units of
    /// information) are not the glyph's own and are ignored.
    fn read_annotations(
        &mut self,
        node: Node<'_, '_>,
        namespace: &str,
        source_id: &str,
    ) -> Option<Annotations> {
        let mut annotations = Annotations::default();
        let expected = format!("#{source_id}");

        let descriptions = node
            .descendants()
            .filter(|n| n.has_tag_name((namespace, "annotation")))
            .filter(|n| owning_glyph(*n, namespace) == Some(node))
            .flat_map(|annotation| {
                annotation
                    .descendants()
                    .filter(|n| n.has_tag_name((RDF_NS, "Description")))
            });

        for description in descriptions {
            let about = description.attribute((RDF_NS, "about")).unwrap_or_default();
            if about != expected {
                self.collector.emit(
                    Diagnostic::error(format!("Annotation is not about us ({source_id})"))
                        .with_code(ErrorCode::E106)
                        .with_subject(source_id)
                        .with_label(span_of(description), format!("`rdf:about` is `{about}`"))
                        .with_help(format!("expected `rdf:about=\"{expected}\"`")),
                );
                return None;
            }
            annotations.derived_from = bag_resources(description, (BQMODEL_NS, "isDerivedFrom"));
            if let Some(first) = bag_resources(description, (BQBIOL_NS, "is"))
                .into_iter()
                .next()
            {
                annotations.semantic_type = Some(first);
            }
        }
        Some(annotations)
    }

    /// Resolve every declared compartment to a parent index.
    fn resolve_parents(&mut self, document: &Document) -> Vec<Option<GlyphIndex>> {
        let mut parents = Vec::with_capacity(document.len());
        for (index, glyph) in document.glyphs() {
            let Some(compartment_ref) = glyph.compartment_ref() else {
                parents.push(None);
                continue;
            };
            let span = self.spans[index.get()];
            match self.index.get(compartment_ref) {
                None => {
                    self.collector.emit(
                        Diagnostic::error(format!(
                            "compartment `{compartment_ref}` referenced by `{}` does not exist",
                            glyph.source_id()
                        ))
                        .with_code(ErrorCode::E103)
                        .with_subject(glyph.source_id())
                        .with_label(span, "declared here")
                        .with_help(
                            "add the compartment glyph or remove the `compartmentRef` attribute",
                        ),
                    );
                    parents.push(None);
                }
                Some(&parent) if !document.glyph(parent).class().is_container() => {
                    let container = document.glyph(parent);
                    self.collector.emit(
                        Diagnostic::error(format!(
                            "`{}` is a {}, not a compartment, and cannot contain `{}`",
                            container.source_id(),
                            container.class(),
                            glyph.source_id()
                        ))
                        .with_code(ErrorCode::E104)
                        .with_subject(glyph.source_id())
                        .with_label(span, "declared here")
                        .with_secondary_label(self.spans[parent.get()], "container defined here"),
                    );
                    parents.push(None);
                }
                Some(&parent) => parents.push(Some(parent)),
            }
        }
        parents
    }

    /// Report every containment cycle once.
    fn check_acyclic(&mut self, document: &Document, parents: &[Option<GlyphIndex>]) {
        #[derive(Clone, Copy, PartialEq)]
        enum Mark {
            Unvisited,
            OnPath,
            Done,
        }

        let mut marks = vec![Mark::Unvisited; parents.len()];
        for start in 0..parents.len() {
            let mut path = Vec::new();
            let mut current = Some(start);
            while let Some(i) = current {
                match marks[i] {
                    Mark::Done => break,
                    Mark::OnPath => {
                        let cycle_start = path.iter().position(|&p| p == i).unwrap_or(0);
                        let members: Vec<&str> = path[cycle_start..]
                            .iter()
                            .map(|&m| document.glyph(GlyphIndex::new(m)).source_id())
                            .collect();
                        let subject = members[0].to_string();
                        self.collector.emit(
                            Diagnostic::error(format!(
                                "containment cycle between {}",
                                members
                                    .iter()
                                    .map(|m| format!("`{m}`"))
                                    .collect::<Vec<_>>()
                                    .join(", ")
                            ))
                            .with_code(ErrorCode::E105)
                            .with_subject(subject)
                            .with_label(self.spans[i], "cycle starts here"),
                        );
                        break;
                    }
                    Mark::Unvisited => {
                        marks[i] = Mark::OnPath;
                        path.push(i);
                        current = parents[i].map(GlyphIndex::get);
                    }
                }
            }
            for i in path {
                marks[i] = Mark::Done;
            }
        }
    }

    fn read_arc(&mut self, node: Node<'_, '_>, document: &mut Document) {
        let id = node.attribute("id").unwrap_or_default();
        let class = node.attribute("class").unwrap_or_default();
        let source = node.attribute("source").map(strip_port);
        let target = node.attribute("target").map(strip_port);

        let resolve = |endpoint: Option<&str>| endpoint.and_then(|e| self.index.get(e).copied());
        match (resolve(source), resolve(target)) {
            (Some(source), Some(target)) => {
                document.add_arc(Arc::new(id, class, source, target));
            }
            (resolved_source, _) => {
                let (side, endpoint) = if resolved_source.is_none() {
                    ("source", source)
                } else {
                    ("target", target)
                };
                self.collector.recover(
                    Diagnostic::error(format!("Arc ({id}) has invalid source/target"))
                        .with_code(ErrorCode::E200)
                        .with_subject(id)
                        .with_label(
                            span_of(node),
                            format!("{side} `{}` is not a glyph", endpoint.unwrap_or_default()),
                        ),
                );
            }
        }
    }
}

/// Strip a `.<port>` suffix from an arc endpoint.
fn strip_port(endpoint: &str) -> &str {
    endpoint
        .split_once('.')
        .map_or(endpoint, |(glyph, _port)| glyph)
}

/// Find the nearest enclosing `glyph` element of a node.
fn owning_glyph<'a, 'input>(
    node: Node<'a, 'input>,
    namespace: &str,
) -> Option<Node<'a, 'input>> {
    node.ancestors()
        .skip(1)
        .find(|n| n.has_tag_name((namespace, "glyph")))
}

/// Collect `rdf:Bag/rdf:li/@rdf:resource` values under a property element.
fn bag_resources(description: Node<'_, '_>, property: (&str, &str)) -> Vec<String> {
    description
        .children()
        .find(|n| n.has_tag_name(property))
        .and_then(|p| p.children().find(|n| n.has_tag_name((RDF_NS, "Bag"))))
        .map(|bag| {
            bag.children()
                .filter(|n| n.has_tag_name((RDF_NS, "li")))
                .filter_map(|li| li.attribute((RDF_NS, "resource")))
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn span_of(node: Node<'_, '_>) -> Span {
    Span::new(node.range())
}

/// Convert a 1-based row/column position into a byte offset.
fn byte_offset(source: &str, pos: TextPos) -> usize {
    let row = pos.row.saturating_sub(1) as usize;
    let col = pos.col.saturating_sub(1) as usize;
    let line_start: usize = source.split_inclusive('\n').take(row).map(str::len).sum();
    let line = source.get(line_start..).unwrap_or_default();
    let in_line = line
        .char_indices()
        .nth(col)
        .map_or(line.len(), |(offset, _)| offset);
    (line_start + in_line).min(source.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    const NS: &str = "http://sbgn.org/libsbgn/0.2";

    fn sbgn(body: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<sbgn xmlns="{NS}" xmlns:rdf="{RDF_NS}" xmlns:bqbiol="{BQBIOL_NS}" xmlns:bqmodel="{BQMODEL_NS}">
<map language="process description">
{body}
</map>
</sbgn>"#
        )
    }

    fn glyph(id: &str, class: &str, label: &str, compartment: Option<&str>) -> String {
        let compartment = compartment
            .map(|c| format!(r#" compartmentRef="{c}""#))
            .unwrap_or_default();
        format!(
            r#"<glyph id="{id}" class="{class}"{compartment}><label text="{label}"/><bbox x="0" y="0" w="10" h="10"/></glyph>"#
        )
    }

    fn build(source: &str) -> Result<Parsed, ParseError> {
        Builder::new(source).build(None)
    }

    fn codes(err: &ParseError) -> Vec<ErrorCode> {
        err.diagnostics().iter().filter_map(|d| d.code()).collect()
    }

    #[test]
    fn test_strip_port() {
        assert_eq!(strip_port("glyph1"), "glyph1");
        assert_eq!(strip_port("glyph1.1"), "glyph1");
        assert_eq!(strip_port("glyph1.in.2"), "glyph1");
    }

    #[test]
    fn test_byte_offset() {
        let source = "ab\ncdé\nf";
        assert_eq!(byte_offset(source, TextPos::new(1, 1)), 0);
        assert_eq!(byte_offset(source, TextPos::new(2, 2)), 4);
        assert_eq!(byte_offset(source, TextPos::new(3, 1)), 8);
        assert_eq!(byte_offset(source, TextPos::new(9, 9)), source.len());
    }

    #[test]
    fn test_malformed_xml() {
        let err = build("<sbgn><map>").unwrap_err();
        assert_eq!(codes(&err), vec![ErrorCode::E001]);
    }

    #[test]
    fn test_not_sbgn_root() {
        let err = build(r#"<svg xmlns="http://www.w3.org/2000/svg"/>"#).unwrap_err();
        assert_eq!(codes(&err), vec![ErrorCode::E002]);

        let err = build(r#"<sbgn xmlns="http://example.org/other"/>"#).unwrap_err();
        assert_eq!(codes(&err), vec![ErrorCode::E002]);
    }

    #[test]
    fn test_libsbgn_03_accepted() {
        let source = format!(r#"<sbgn xmlns="{}"><map/></sbgn>"#, SBGN_NAMESPACES[1]);
        let parsed = build(&source).unwrap();
        assert!(parsed.document().is_empty());
    }

    #[test]
    fn test_missing_map() {
        let err = build(&format!(r#"<sbgn xmlns="{NS}"/>"#)).unwrap_err();
        assert_eq!(codes(&err), vec![ErrorCode::E003]);
    }

    #[test]
    fn test_two_phase_tree() {
        let source = sbgn(&[
            glyph("m1", "macromolecule", "Ras", Some("c1")),
            glyph("c1", "compartment", "Cell", None),
            glyph("c2", "compartment", "Nucleus", Some("c1")),
            glyph("m2", "macromolecule", "", Some("c2")),
        ]
        .concat());
        let (document, diagnostics) = build(&source).unwrap().into_parts();

        assert!(diagnostics.is_empty());
        assert_eq!(document.len(), 4);
        assert_eq!(document.roots(), &[GlyphIndex::new(1)]);

        let cell = document.glyph(GlyphIndex::new(1));
        assert_eq!(cell.id(), "Cell");
        assert_eq!(cell.children(), &[GlyphIndex::new(0), GlyphIndex::new(2)]);

        let m2 = document.glyph(GlyphIndex::new(3));
        assert_eq!(m2.id(), "ID_m2");
        assert_eq!(m2.label(), "");
        assert_eq!(m2.parent(), Some(GlyphIndex::new(2)));
    }

    #[test]
    fn test_glyph_without_id_is_skipped() {
        let source = sbgn(r#"<glyph class="macromolecule"><bbox x="0" y="0" w="1" h="1"/></glyph>"#);
        let parsed = build(&source).unwrap();
        assert!(parsed.document().is_empty());
    }

    #[test]
    fn test_structural_errors_are_collected() {
        let source = sbgn(&[
            glyph("g1", "macromolecule", "A", None),
            glyph("g1", "macromolecule", "B", None),
            r#"<glyph id="g2"><bbox x="0" y="0" w="1" h="1"/></glyph>"#.to_string(),
            r#"<glyph id="g3" class="process"/>"#.to_string(),
            r#"<glyph id="g4" class="process"><bbox x="a" y="0" w="1" h="1"/></glyph>"#
                .to_string(),
        ]
        .concat());
        let err = build(&source).unwrap_err();
        assert_eq!(
            codes(&err),
            vec![
                ErrorCode::E100,
                ErrorCode::E101,
                ErrorCode::E102,
                ErrorCode::E102
            ]
        );
        assert_eq!(err.diagnostics()[0].labels().len(), 2);
    }

    #[test]
    fn test_dangling_and_invalid_containers() {
        let source = sbgn(&[
            glyph("m1", "macromolecule", "A", Some("nowhere")),
            glyph("m2", "macromolecule", "B", Some("m1")),
        ]
        .concat());
        let err = build(&source).unwrap_err();
        assert_eq!(codes(&err), vec![ErrorCode::E103, ErrorCode::E104]);
        assert_eq!(err.diagnostics()[1].subject(), Some("m2"));
    }

    #[test]
    fn test_containment_cycle() {
        let source = sbgn(&[
            glyph("c1", "compartment", "A", Some("c2")),
            glyph("c2", "compartment", "B", Some("c1")),
            glyph("c3", "compartment", "C", Some("c3")),
        ]
        .concat());
        let err = build(&source).unwrap_err();
        assert_eq!(codes(&err), vec![ErrorCode::E105, ErrorCode::E105]);
        assert_eq!(err.diagnostics()[0].subject(), Some("c1"));
        assert_eq!(err.diagnostics()[1].subject(), Some("c3"));
    }

    #[test]
    fn test_annotations() {
        let source = sbgn(
            r##"<glyph id="p1" class="process">
<bbox x="0" y="0" w="1" h="1"/>
<extension><annotation><rdf:RDF><rdf:Description rdf:about="#p1">
<bqmodel:isDerivedFrom><rdf:Bag>
<rdf:li rdf:resource="http://example.org/a"/><rdf:li rdf:resource="http://example.org/b"/>
</rdf:Bag></bqmodel:isDerivedFrom>
<bqbiol:is><rdf:Bag>
<rdf:li rdf:resource="http://identifiers.org/GO:0060076"/><rdf:li rdf:resource="http://identifiers.org/GO:1"/>
</rdf:Bag></bqbiol:is>
</rdf:Description></rdf:RDF></annotation></extension>
</glyph>"##,
        );
        let parsed = build(&source).unwrap();
        let p1 = parsed.document().glyph(GlyphIndex::new(0));
        assert_eq!(
            p1.derived_from(),
            &["http://example.org/a", "http://example.org/b"]
        );
        assert_eq!(p1.semantic_type(), Some("http://identifiers.org/GO:0060076"));
    }

    #[test]
    fn test_annotation_about_another_glyph() {
        let source = sbgn(
            r##"<glyph id="p1" class="process"><bbox x="0" y="0" w="1" h="1"/>
<annotation><rdf:RDF><rdf:Description rdf:about="#p2"/></rdf:RDF></annotation>
</glyph>"##,
        );
        let err = build(&source).unwrap_err();
        assert_eq!(codes(&err), vec![ErrorCode::E106]);
    }

    #[test]
    fn test_arcs_resolve_ports_and_drop_unresolved() {
        let source = sbgn(&[
            glyph("m1", "macromolecule", "A", None),
            glyph("p1", "process", "", None),
            r#"<arc id="a1" class="consumption" source="m1" target="p1.1"/>"#.to_string(),
            r#"<arc id="a2" class="production" source="p1.2" target="missing"/>"#.to_string(),
        ]
        .concat());
        let parsed = build(&source).unwrap();

        let arcs = parsed.document().arcs();
        assert_eq!(arcs.len(), 1);
        assert_eq!(arcs[0].id(), "a1");
        assert_eq!(arcs[0].source(), GlyphIndex::new(0));
        assert_eq!(arcs[0].target(), GlyphIndex::new(1));

        assert_eq!(parsed.diagnostics().len(), 1);
        assert_eq!(parsed.diagnostics()[0].code(), Some(ErrorCode::E200));
        assert_eq!(parsed.diagnostics()[0].subject(), Some("a2"));
    }

    #[test]
    fn test_source_uri_is_kept() {
        let parsed = Builder::new(&sbgn(""))
            .build(Some("file:///tmp/model.sbgn"))
            .unwrap();
        assert_eq!(parsed.document().source_uri(), Some("file:///tmp/model.sbgn"));
    }
}
