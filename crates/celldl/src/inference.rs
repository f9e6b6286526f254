//! Link inference: replacing process glyphs with direct connections.
//!
//! Runs in two steps over a normalized [`Document`]:
//!
//! 1. **Classify** every resolved arc. An arc from a process to an entity
//!    (compartment or macromolecule) adds a process target; an arc from an
//!    entity to a process adds a process source. Any other arc is reported
//!    and ignored.
//! 2. **Collapse** each process, in document order, according to how many
//!    sources and targets it has:
//!
//! | sources | targets | outcome                                |
//! |---------|---------|----------------------------------------|
//! | 0       | 0       | warning: not connected                 |
//! | 0       | 2       | both targets connected to each other   |
//! | 0       | other   | warning: no sources                    |
//! | 1+      | 0       | warning: no targets                    |
//! | 1       | 1+      | the source connected to every target   |
//! | 1+      | 1       | every source connected to the target   |
//! | 2+      | 2+      | warning: ambiguous                     |
//!
//! A warned process gets the `warn` style modifier. Connectivity is never
//! followed recursively, so cyclic connections are harmless.

use log::{debug, info};

use celldl_core::semantic::{Connection, Document, GlyphIndex, WARN_TAG};
use celldl_parser::error::{Diagnostic, DiagnosticCollector, ErrorCode};

/// The connections and diagnostics produced by [`infer`].
#[derive(Debug, Default)]
pub struct Inference {
    pub connections: Vec<Connection>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Classify arcs and collapse process glyphs into connections.
pub fn infer(document: &mut Document) -> Inference {
    let mut collector = DiagnosticCollector::new();

    classify_arcs(document, &mut collector);

    let processes: Vec<GlyphIndex> = document
        .glyphs()
        .filter(|(_, glyph)| glyph.class().is_process())
        .map(|(index, _)| index)
        .collect();

    let mut connections = Vec::new();
    for process in processes {
        collapse(document, process, &mut connections, &mut collector);
    }

    for connection in &connections {
        document
            .glyph_mut(connection.source())
            .add_target(connection.target());
        document
            .glyph_mut(connection.target())
            .add_source(connection.source());
    }

    // Only recoverable diagnostics are reported here
    let diagnostics = collector.finish().unwrap_or_default();
    info!(
        connections = connections.len(),
        diagnostics = diagnostics.len();
        "Inferred connections"
    );

    Inference {
        connections,
        diagnostics,
    }
}

fn classify_arcs(document: &mut Document, collector: &mut DiagnosticCollector) {
    let arcs = document.arcs().to_vec();
    for arc in arcs {
        let source = document.glyph(arc.source());
        let target = document.glyph(arc.target());

        let invalid = if source.class().is_process() {
            if target.class().is_entity() {
                document.glyph_mut(arc.source()).add_target(arc.target());
                continue;
            }
            format!(
                "Process ({}) target ({}) has invalid class",
                source.id(),
                target.id()
            )
        } else if source.class().is_entity() {
            if target.class().is_process() {
                document.glyph_mut(arc.target()).add_source(arc.source());
                continue;
            }
            format!(
                "Arc ({}) target ({}) of {} ({}) is not a process",
                arc.id(),
                target.id(),
                source.class(),
                source.id()
            )
        } else {
            format!("Invalid class of arc source ({})", source.id())
        };

        collector.recover(
            Diagnostic::error(invalid)
                .with_code(ErrorCode::E201)
                .with_subject(arc.id()),
        );
    }
}

fn collapse(
    document: &mut Document,
    process: GlyphIndex,
    connections: &mut Vec<Connection>,
    collector: &mut DiagnosticCollector,
) {
    let glyph = document.glyph(process);
    let sources = glyph.sources().to_vec();
    let targets = glyph.targets().to_vec();
    let semantic_type = glyph.semantic_type().map(str::to_string);
    let id = glyph.id().to_string();
    let ids = |indices: &[GlyphIndex]| {
        indices
            .iter()
            .map(|&i| document.glyph(i).id())
            .collect::<Vec<_>>()
            .join(", ")
    };

    let mut connect = |source: GlyphIndex, target: GlyphIndex| {
        connections.push(Connection::new(source, target, semantic_type.clone()));
    };

    let warning = match (sources.as_slice(), targets.as_slice()) {
        ([], []) => Some((ErrorCode::E300, format!("Process ({id}) is not connected"))),
        ([], &[t1, t2]) => {
            connect(t1, t2);
            connect(t2, t1);
            None
        }
        ([], _) => Some((
            ErrorCode::E301,
            format!(
                "Process ({id}) has no sources and targets [{}]",
                ids(&targets)
            ),
        )),
        (_, []) => Some((ErrorCode::E302, format!("Process ({id}) has no targets"))),
        (&[source], _) => {
            for &target in &targets {
                connect(source, target);
            }
            None
        }
        (_, &[target]) => {
            for &source in &sources {
                connect(source, target);
            }
            None
        }
        _ => Some((
            ErrorCode::E303,
            format!(
                "Process ({id}) has ambiguous sources [{}] and targets [{}]",
                ids(&sources),
                ids(&targets)
            ),
        )),
    };

    match warning {
        Some((code, message)) => {
            collector.recover(
                Diagnostic::warning(message)
                    .with_code(code)
                    .with_subject(id.as_str()),
            );
            document.glyph_mut(process).add_style_modifier(WARN_TAG);
        }
        None => debug!(process = id.as_str(); "Collapsed process"),
    }
}

#[cfg(test)]
mod tests {
    use celldl_core::{
        geometry::BBox,
        semantic::{Arc, Glyph, GlyphClass},
    };

    use super::*;

    fn add(document: &mut Document, id: &str, class: GlyphClass) -> GlyphIndex {
        let index = document.add_glyph(Glyph::new(id, id, class, id, BBox::new(0.0, 0.0, 1.0, 1.0)));
        document.add_root(index);
        index
    }

    fn arc(document: &mut Document, id: &str, source: GlyphIndex, target: GlyphIndex) {
        document.add_arc(Arc::new(id, "", source, target));
    }

    fn pairs(document: &Document, connections: &[Connection]) -> Vec<(String, String)> {
        connections
            .iter()
            .map(|c| {
                (
                    document.glyph(c.source()).id().to_string(),
                    document.glyph(c.target()).id().to_string(),
                )
            })
            .collect()
    }

    #[test]
    fn test_invalid_arc_classes_are_ignored() {
        let mut document = Document::new(None);
        let p1 = add(&mut document, "p1", GlyphClass::Process);
        let p2 = add(&mut document, "p2", GlyphClass::Process);
        let m1 = add(&mut document, "m1", GlyphClass::Macromolecule);
        let m2 = add(&mut document, "m2", GlyphClass::Macromolecule);
        let s1 = add(&mut document, "s1", GlyphClass::Other("simple chemical".to_string()));
        arc(&mut document, "a1", p1, p2);
        arc(&mut document, "a2", m1, m2);
        arc(&mut document, "a3", s1, p1);
        arc(&mut document, "a4", p1, s1);

        let inference = infer(&mut document);

        let subjects: Vec<_> = inference
            .diagnostics
            .iter()
            .filter(|d| d.code() == Some(ErrorCode::E201))
            .filter_map(|d| d.subject())
            .collect();
        assert_eq!(subjects, vec!["a1", "a2", "a3", "a4"]);
        assert!(document.glyph(p1).sources().is_empty());
        assert!(document.glyph(p1).targets().is_empty());
        assert!(inference.connections.is_empty());
    }

    #[test]
    fn test_semantic_type_is_carried() {
        let mut document = Document::new(None);
        let m1 = add(&mut document, "m1", GlyphClass::Macromolecule);
        let p = document.add_glyph(
            Glyph::new("p", "p", GlyphClass::Process, "", BBox::new(0.0, 0.0, 1.0, 1.0))
                .with_semantic_type(Some("http://identifiers.org/GO:0060076".to_string())),
        );
        let m2 = add(&mut document, "m2", GlyphClass::Macromolecule);
        arc(&mut document, "a1", m1, p);
        arc(&mut document, "a2", p, m2);

        let inference = infer(&mut document);

        assert_eq!(inference.connections.len(), 1);
        assert_eq!(
            inference.connections[0].semantic_type(),
            Some("http://identifiers.org/GO:0060076")
        );
        assert_eq!(document.glyph(m1).targets(), &[m2]);
        assert_eq!(document.glyph(m2).sources(), &[m1]);
    }

    #[test]
    fn test_warning_marks_process() {
        let mut document = Document::new(None);
        let p = add(&mut document, "p", GlyphClass::Process);

        let inference = infer(&mut document);

        assert!(document.glyph(p).style().has_modifier(WARN_TAG));
        assert_eq!(inference.diagnostics.len(), 1);
        assert!(inference.diagnostics[0].severity().is_warning());
        assert_eq!(inference.diagnostics[0].message(), "Process (p) is not connected");
    }

    #[test]
    fn test_cyclic_connectivity() {
        let mut document = Document::new(None);
        let a = add(&mut document, "a", GlyphClass::Macromolecule);
        let b = add(&mut document, "b", GlyphClass::Macromolecule);
        let p1 = add(&mut document, "p1", GlyphClass::Process);
        let p2 = add(&mut document, "p2", GlyphClass::Process);
        arc(&mut document, "a1", a, p1);
        arc(&mut document, "a2", p1, b);
        arc(&mut document, "a3", b, p2);
        arc(&mut document, "a4", p2, a);

        let inference = infer(&mut document);

        assert_eq!(
            pairs(&document, &inference.connections),
            vec![
                ("a".to_string(), "b".to_string()),
                ("b".to_string(), "a".to_string())
            ]
        );
        assert_eq!(document.glyph(a).targets(), &[b]);
        assert_eq!(document.glyph(a).sources(), &[b]);
    }
}
