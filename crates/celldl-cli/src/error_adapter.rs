//! miette rendering for conversion errors.
//!
//! Structural problems in an SBGN-ML document carry byte spans into the XML,
//! so each one becomes its own report with the offending `glyph`, `arc` or
//! `rdf:Description` element underlined. I/O, layout and export failures
//! have no location and render as one plain report.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use celldl::CellDlError;
use celldl_parser::{Span, error::Diagnostic};

/// A renderable report borrowing from the error it describes.
pub type Report<'a> = Box<dyn MietteDiagnostic + 'a>;

/// One parser diagnostic together with the SBGN-ML text it points into.
pub struct SbgnDiagnostic<'a> {
    diag: &'a Diagnostic,
    xml: &'a str,
}

impl<'a> SbgnDiagnostic<'a> {
    pub fn new(diag: &'a Diagnostic, xml: &'a str) -> Self {
        Self { diag, xml }
    }
}

impl fmt::Debug for SbgnDiagnostic<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SbgnDiagnostic")
            .field("code", &self.diag.code())
            .field("subject", &self.diag.subject())
            .finish()
    }
}

impl fmt::Display for SbgnDiagnostic<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.diag.message())
    }
}

impl std::error::Error for SbgnDiagnostic<'_> {}

impl MietteDiagnostic for SbgnDiagnostic<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.diag
            .code()
            .map(|code| Box::new(code) as Box<dyn fmt::Display>)
    }

    fn severity(&self) -> Option<miette::Severity> {
        Some(if self.diag.severity().is_warning() {
            miette::Severity::Warning
        } else {
            miette::Severity::Error
        })
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.diag
            .help()
            .map(|help| Box::new(help) as Box<dyn fmt::Display>)
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.xml as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let labels = self.diag.labels();
        if labels.is_empty() {
            return None;
        }
        Some(Box::new(labels.iter().map(|label| {
            let message = Some(label.message().to_string());
            let span = source_span(label.span());
            if label.is_primary() {
                LabeledSpan::new_primary_with_span(message, span)
            } else {
                LabeledSpan::new_with_span(message, span)
            }
        })))
    }
}

/// A failure outside the document structure.
pub struct ConversionFailure<'a>(&'a CellDlError);

impl fmt::Debug for ConversionFailure<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.0, f)
    }
}

impl fmt::Display for ConversionFailure<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.0, f)
    }
}

impl std::error::Error for ConversionFailure<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ConversionFailure<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self.0 {
            CellDlError::Io(_) => "celldl::io",
            CellDlError::Parse { .. } => "celldl::parse",
            CellDlError::Layout(_) => "celldl::layout",
            CellDlError::Export(_) => "celldl::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self.0 {
            CellDlError::Layout(_) => Some(Box::new(
                "glyphs sharing a compartment must not all sit on one line; check their `bbox` values",
            )),
            _ => None,
        }
    }
}

fn source_span(span: Span) -> SourceSpan {
    SourceSpan::new(span.start().into(), span.len())
}

/// Split an error into the reports to render.
///
/// A [`CellDlError::Parse`] yields one report per structural problem in the
/// document; every other variant yields exactly one.
pub fn to_reports(err: &CellDlError) -> Vec<Report<'_>> {
    match err {
        CellDlError::Parse { err, src } => err
            .diagnostics()
            .iter()
            .map(|diag| Box::new(SbgnDiagnostic::new(diag, src)) as Report<'_>)
            .collect(),
        other => vec![Box::new(ConversionFailure(other)) as Report<'_>],
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use celldl::{
        DiagramBuilder,
        layout::{Axis, LayoutError},
    };
    use celldl_parser::error::ErrorCode;

    use super::*;

    const DUPLICATE_AND_BAD_BBOX: &str = r#"<sbgn xmlns="http://sbgn.org/libsbgn/0.2">
  <map>
    <glyph id="ras" class="macromolecule"><bbox x="0" y="0" w="10" h="10"/></glyph>
    <glyph id="ras" class="macromolecule"><bbox x="20" y="0" w="10" h="10"/></glyph>
    <glyph id="raf" class="macromolecule"><bbox x="forty" y="0" w="10" h="10"/></glyph>
  </map>
</sbgn>"#;

    const DANGLING_COMPARTMENT: &str = r#"<sbgn xmlns="http://sbgn.org/libsbgn/0.3">
  <map>
    <glyph id="raf" class="macromolecule" compartmentRef="nucleus"><bbox x="40" y="0" w="10" h="10"/></glyph>
  </map>
</sbgn>"#;

    fn conversion_error(source: &str) -> CellDlError {
        DiagramBuilder::default()
            .parse(source, None)
            .expect_err("document should be rejected")
    }

    fn labelled_text<'a>(xml: &'a str, label: &LabeledSpan) -> &'a str {
        &xml[label.offset()..label.offset() + label.len()]
    }

    #[test]
    fn test_one_report_per_structural_problem() {
        let err = conversion_error(DUPLICATE_AND_BAD_BBOX);

        let reports = to_reports(&err);

        let codes: Vec<String> = reports
            .iter()
            .map(|report| report.code().unwrap().to_string())
            .collect();
        assert_eq!(codes, vec!["E100", "E102"]);
        assert_eq!(reports[1].to_string(), "glyph `raf` has an invalid bounding box");
        assert_eq!(reports[1].severity(), Some(miette::Severity::Error));
    }

    #[test]
    fn test_duplicate_id_labels_both_glyphs() {
        let err = conversion_error(DUPLICATE_AND_BAD_BBOX);
        let reports = to_reports(&err);

        let labels: Vec<_> = reports[0].labels().unwrap().collect();

        assert_eq!(labels.len(), 2);
        assert!(labels[0].primary());
        assert_eq!(labels[0].label(), Some("duplicate here"));
        assert!(
            labelled_text(DUPLICATE_AND_BAD_BBOX, &labels[0])
                .starts_with(r#"<glyph id="ras" class="macromolecule"><bbox x="20""#)
        );
        assert!(!labels[1].primary());
        assert!(
            labelled_text(DUPLICATE_AND_BAD_BBOX, &labels[1])
                .starts_with(r#"<glyph id="ras" class="macromolecule"><bbox x="0""#)
        );
    }

    #[test]
    fn test_dangling_compartment_points_at_the_glyph() {
        let err = conversion_error(DANGLING_COMPARTMENT);
        let reports = to_reports(&err);

        assert_eq!(reports.len(), 1);
        assert_eq!(
            reports[0].to_string(),
            "compartment `nucleus` referenced by `raf` does not exist"
        );
        assert!(reports[0].help().is_some());
        assert!(reports[0].source_code().is_some());
        let labels: Vec<_> = reports[0].labels().unwrap().collect();
        assert!(labelled_text(DANGLING_COMPARTMENT, &labels[0]).contains(r#"compartmentRef="nucleus""#));
    }

    #[test]
    fn test_topology_warning_renders_as_warning() {
        let diag = Diagnostic::warning("Process (ID_p1) has no targets")
            .with_code(ErrorCode::E302)
            .with_subject("ID_p1");

        let report = SbgnDiagnostic::new(&diag, "");

        assert_eq!(report.severity(), Some(miette::Severity::Warning));
        assert!(report.labels().is_none());
    }

    #[test]
    fn test_missing_file_is_single_report() {
        let err = CellDlError::Io(io::Error::new(io::ErrorKind::NotFound, "model.sbgn"));

        let reports = to_reports(&err);

        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].code().unwrap().to_string(), "celldl::io");
        assert_eq!(reports[0].to_string(), "I/O error: model.sbgn");
        assert!(reports[0].source_code().is_none());
    }

    #[test]
    fn test_degenerate_layout_suggests_bbox_check() {
        let err = CellDlError::Layout(LayoutError::DegenerateBounds {
            parent: Some("Cytosol".to_string()),
            axis: Axis::Horizontal,
        });

        let reports = to_reports(&err);

        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].code().unwrap().to_string(), "celldl::layout");
        assert!(reports[0].help().unwrap().to_string().contains("bbox"));
    }
}
