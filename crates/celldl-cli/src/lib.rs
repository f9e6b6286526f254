//! CLI logic for the CellDL converter.
//!
//! Reads an SBGN-ML file, converts it with [`celldl::DiagramBuilder`], and
//! writes the requested rendering to a file or standard output.

pub mod error_adapter;

mod args;
mod config;

pub use args::{Args, Connections, Mode};

use std::{
    fs,
    io::{self, Write},
    path::Path,
};

use log::{debug, info, warn};
use url::Url;

use celldl::{CellDlError, DiagramBuilder, OutputFormat};

/// Byte order mark some editors prepend to XML files.
const BOM: char = '\u{feff}';

/// Run the CellDL CLI application
///
/// # Errors
///
/// Returns `CellDlError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Structural errors in the SBGN-ML document
/// - Layout errors
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), CellDlError> {
    info!(
        mode:? = args.mode,
        input_path = args.input;
        "Converting diagram"
    );

    let mut app_config = config::load_config(args.config.as_ref())?;
    if args.all_classes {
        app_config.output_mut().set_all_classes(true);
    }
    if let Some(connections) = args.connections {
        app_config.output_mut().set_connections(connections.into());
    }

    let source = fs::read_to_string(&args.input)?;
    let source = strip_bom(&source);
    let source_uri = source_uri(Path::new(&args.input))?;
    debug!(source_uri; "Resolved source URI");

    let builder = DiagramBuilder::new(app_config);
    let diagram = builder.parse(source, Some(&source_uri))?;
    let warnings = diagram.warnings().count();
    if warnings > 0 {
        warn!(warnings; "Diagram converted with warnings");
    }
    let rendered = builder.render(&diagram, OutputFormat::from(args.mode))?;

    match &args.output {
        Some(output) => {
            fs::write(output, rendered)?;
            info!(output_file = output; "Output written successfully");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}

/// Remove a leading byte order mark.
fn strip_bom(source: &str) -> &str {
    source.strip_prefix(BOM).unwrap_or(source)
}

/// Compute the `file://` URI of a path, resolved to an absolute path.
fn source_uri(path: &Path) -> Result<String, CellDlError> {
    let absolute = fs::canonicalize(path)?;
    Url::from_file_path(&absolute)
        .map(String::from)
        .map_err(|()| {
            CellDlError::Io(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("cannot express {} as a file URI", absolute.display()),
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_bom() {
        assert_eq!(strip_bom("\u{feff}<sbgn/>"), "<sbgn/>");
        assert_eq!(strip_bom("<sbgn/>"), "<sbgn/>");
        assert_eq!(strip_bom(""), "");
    }

    #[test]
    fn test_source_uri() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model file.sbgn");
        fs::write(&path, "<sbgn/>").unwrap();

        let uri = source_uri(&path).unwrap();

        assert!(uri.starts_with("file:///"));
        assert!(uri.ends_with("/model%20file.sbgn"));
    }

    #[test]
    fn test_source_uri_missing_file() {
        let err = source_uri(Path::new("/nonexistent/model.sbgn")).unwrap_err();

        assert!(matches!(err, CellDlError::Io(_)));
    }
}
