//! RDF/Turtle export.
//!
//! One stanza per compartment, then one per macromolecule, in document
//! order. Process glyphs are not described; their effect is visible through
//! `fm:connected_to`.

use std::fmt::Write;

use log::debug;

use celldl_core::semantic::{Glyph, GlyphClass};

use crate::{
    diagram::Diagram,
    export::{Error, Exporter},
};

/// Prefix preamble written after the `@base` directive.
pub const PREFIXES: [(&str, &str); 8] = [
    ("rdf", "http://www.w3.org/1999/02/22-rdf-syntax-ns#"),
    ("rdfs", "http://www.w3.org/2000/01/rdf-schema#"),
    ("bqbiol", "http://biomodels.net/biology-qualifiers/"),
    ("bqmodel", "http://biomodels.net/model-qualifiers/"),
    ("obo", "http://purl.obolibrary.org/obo/"),
    ("cio", "http://purl.obolibrary.org/cio/"),
    ("ro", "http://purl.obolibrary.org/obo/"),
    ("fm", "http://example.org/flatmap-ontology/"),
];

/// Exporter producing RDF/Turtle.
#[derive(Debug, Clone, Copy, Default)]
pub struct TurtleExporter;

impl TurtleExporter {
    pub fn new() -> Self {
        Self
    }

    fn write_stanza(&self, out: &mut String, diagram: &Diagram, glyph: &Glyph) -> Result<(), Error> {
        writeln!(out, "{}", glyph.uri())?;
        writeln!(out, "    a fm:Component ;")?;
        if !glyph.label().is_empty() {
            writeln!(out, "    rdfs:label \"{}\" ;", escape_literal(glyph.label()))?;
        }

        let derived_from: Vec<String> = glyph
            .derived_from()
            .iter()
            .map(|uri| format!("<{uri}>"))
            .collect();
        write_objects(out, "bqmodel:isDerivedFrom", &derived_from)?;

        let contains: Vec<String> = glyph
            .children()
            .iter()
            .map(|&child| diagram.glyph(child))
            .filter(|child| !child.class().is_process())
            .map(Glyph::uri)
            .collect();
        write_objects(out, "fm:contains", &contains)?;

        let connected_to: Vec<String> = glyph
            .targets()
            .iter()
            .map(|&target| diagram.glyph(target).uri())
            .collect();
        write_objects(out, "fm:connected_to", &connected_to)?;

        writeln!(out, "    .")?;
        Ok(())
    }
}

impl Exporter for TurtleExporter {
    fn export(&self, diagram: &Diagram) -> Result<String, Error> {
        let document = diagram.document();
        let mut out = String::new();

        if let Some(base) = document.source_uri() {
            writeln!(out, "@base <{base}> .")?;
        }
        for (prefix, namespace) in PREFIXES {
            writeln!(out, "@prefix {prefix}: <{namespace}> .")?;
        }

        let mut stanzas = 0;
        for class in [GlyphClass::Compartment, GlyphClass::Macromolecule] {
            for (_, glyph) in document.glyphs_of_class(&class) {
                writeln!(out)?;
                self.write_stanza(&mut out, diagram, glyph)?;
                stanzas += 1;
            }
        }
        debug!(stanzas; "Exported Turtle");
        Ok(out)
    }
}

/// Write a property with one object per line; nothing when `objects` is empty.
fn write_objects(out: &mut String, property: &str, objects: &[String]) -> Result<(), Error> {
    if objects.is_empty() {
        return Ok(());
    }
    writeln!(out, "    {property}")?;
    writeln!(out, "        {} ;", objects.join(",\n        "))?;
    Ok(())
}

/// Escape a value for a double-quoted Turtle string literal.
fn escape_literal(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            c => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_escape_literal() {
        assert_eq!(escape_literal("Ras"), "Ras");
        assert_eq!(escape_literal("a \"b\"\\c\n"), "a \\\"b\\\"\\\\c\\n");
    }

    #[test]
    fn test_write_objects() {
        let mut out = String::new();
        write_objects(&mut out, "fm:contains", &[]).unwrap();
        assert!(out.is_empty());

        write_objects(
            &mut out,
            "fm:contains",
            &["<#a>".to_string(), "<#b>".to_string()],
        )
        .unwrap();
        assert_eq!(out, "    fm:contains\n        <#a>,\n        <#b> ;\n");
    }
}
