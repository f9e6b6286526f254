//! CellDL - convert SBGN process descriptions into diagram models.
//!
//! Reads an SBGN-ML document, rebuilds its compartment hierarchy, normalizes
//! geometry into percentages, replaces process glyphs with direct
//! connections, and serializes the result as CellDL markup, a flat JSON
//! graph, or RDF/Turtle.

pub mod config;
pub mod export;
pub mod inference;
pub mod layout;

mod diagram;
mod error;

pub use celldl_core::{geometry, identifier, semantic};

pub use diagram::Diagram;
pub use error::CellDlError;

use log::{debug, info, trace};

use config::AppConfig;
use export::{Exporter, celldl::CellDlExporter, json::JsonExporter, turtle::TurtleExporter};

/// The serialization formats a [`Diagram`] can be rendered to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Nested CellDL markup with a style block.
    CellDl,
    /// Flat node/link/group JSON graph.
    Json,
    /// RDF/Turtle provenance graph.
    Turtle,
}

/// Builder for converting and rendering SBGN-ML documents.
///
/// # Examples
///
/// ```rust,no_run
/// use celldl::{DiagramBuilder, OutputFormat, config::AppConfig};
///
/// let source = std::fs::read_to_string("model.sbgn").expect("Failed to read");
///
/// let builder = DiagramBuilder::new(AppConfig::default());
///
/// // Parse, normalize and infer connections
/// let diagram = builder.parse(&source, Some("file:///models/model.sbgn"))
///     .expect("Failed to convert");
///
/// // Render in any format, any number of times
/// let markup = builder.render(&diagram, OutputFormat::CellDl)
///     .expect("Failed to render");
/// let turtle = builder.render_turtle(&diagram)
///     .expect("Failed to render");
/// ```
#[derive(Debug, Default)]
pub struct DiagramBuilder {
    config: AppConfig,
}

impl DiagramBuilder {
    /// Create a new diagram builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including layout, style and output settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration in use.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Convert SBGN-ML source into a diagram.
    ///
    /// This reads the document and builds the glyph tree, normalizes
    /// geometry, and collapses process glyphs into connections. Recoverable
    /// problems (unresolved arcs, invalid arc classes, process topology
    /// warnings) are logged and kept in [`Diagram::diagnostics`].
    ///
    /// # Arguments
    ///
    /// * `source` - SBGN-ML text, without a byte order mark
    /// * `source_uri` - URI of the source file, used as the Turtle `@base`
    ///
    /// # Errors
    ///
    /// Returns `CellDlError::Parse` for structural errors in the document and
    /// `CellDlError::Layout` when a sibling set has degenerate bounds.
    pub fn parse(&self, source: &str, source_uri: Option<&str>) -> Result<Diagram, CellDlError> {
        info!("Parsing SBGN-ML document");

        let parsed = celldl_parser::parse(source, source_uri)
            .map_err(|err| CellDlError::new_parse_error(err, source))?;
        let (mut document, mut diagnostics) = parsed.into_parts();
        debug!(glyphs = document.len(); "Document parsed successfully");

        layout::normalize(&mut document, self.config.layout())?;

        let inference = inference::infer(&mut document);
        diagnostics.extend(inference.diagnostics);

        let diagram = Diagram::new(document, inference.connections, diagnostics);
        trace!(diagram:?; "Converted diagram");
        Ok(diagram)
    }

    /// Render a diagram in the given format.
    pub fn render(&self, diagram: &Diagram, format: OutputFormat) -> Result<String, CellDlError> {
        match format {
            OutputFormat::CellDl => self.render_celldl(diagram),
            OutputFormat::Json => self.render_json(diagram),
            OutputFormat::Turtle => self.render_turtle(diagram),
        }
    }

    /// Render a diagram as CellDL markup.
    ///
    /// Uses the configured class filter and connection source.
    pub fn render_celldl(&self, diagram: &Diagram) -> Result<String, CellDlError> {
        let output = self.config.output();
        let markup = CellDlExporter::new(self.config.style())
            .with_class_filter(output.class_filter())
            .with_connections(output.connections())
            .export(diagram)?;
        info!("CellDL markup rendered successfully");
        Ok(markup)
    }

    /// Render a diagram as a JSON graph.
    ///
    /// Every glyph is emitted unless `filter_json` is configured.
    pub fn render_json(&self, diagram: &Diagram) -> Result<String, CellDlError> {
        let json = JsonExporter::new()
            .with_class_filter(self.config.output().json_class_filter())
            .export(diagram)?;
        info!("JSON graph rendered successfully");
        Ok(json)
    }

    /// Render a diagram as RDF/Turtle.
    pub fn render_turtle(&self, diagram: &Diagram) -> Result<String, CellDlError> {
        let turtle = TurtleExporter::new().export(diagram)?;
        info!("Turtle rendered successfully");
        Ok(turtle)
    }
}
