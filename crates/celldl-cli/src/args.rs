//! Command-line argument definitions for the CellDL converter.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments select the output format, input/output paths,
//! configuration file, output overrides, and logging verbosity.

use clap::{Parser, ValueEnum};

use celldl::{OutputFormat, config::ConnectionSource};

/// Output format selected by the first positional argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// CellDL markup
    Celldl,
    /// Flat JSON graph
    Json,
    /// RDF/Turtle
    Rdf,
}

impl From<Mode> for OutputFormat {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Celldl => OutputFormat::CellDl,
            Mode::Json => OutputFormat::Json,
            Mode::Rdf => OutputFormat::Turtle,
        }
    }
}

/// Where CellDL connections come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Connections {
    /// Connections inferred by collapsing process glyphs
    Inferred,
    /// One connection per resolved arc
    Arcs,
}

impl From<Connections> for ConnectionSource {
    fn from(connections: Connections) -> Self {
        match connections {
            Connections::Inferred => ConnectionSource::Inferred,
            Connections::Arcs => ConnectionSource::Arcs,
        }
    }
}

/// Command-line arguments for the CellDL converter
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Output format
    #[arg(value_enum)]
    pub mode: Mode,

    /// Path to the input SBGN-ML file
    #[arg(help = "Path to the input file")]
    pub input: String,

    /// Path to the output file; standard output when omitted
    #[arg(short, long)]
    pub output: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Emit every glyph class in CellDL output
    #[arg(long)]
    pub all_classes: bool,

    /// Source of CellDL connections, overriding the configuration
    #[arg(long, value_enum)]
    pub connections: Option<Connections>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal() {
        let args = Args::try_parse_from(["celldl", "json", "model.sbgn"]).unwrap();

        assert_eq!(args.mode, Mode::Json);
        assert_eq!(args.input, "model.sbgn");
        assert!(args.output.is_none());
        assert!(!args.all_classes);
        assert!(args.connections.is_none());
        assert_eq!(args.log_level, "warn");
    }

    #[test]
    fn test_parse_all_options() {
        let args = Args::try_parse_from([
            "celldl",
            "celldl",
            "model.sbgn",
            "-o",
            "out.celldl",
            "-c",
            "config.toml",
            "--all-classes",
            "--connections",
            "arcs",
            "--log-level",
            "debug",
        ])
        .unwrap();

        assert_eq!(args.mode, Mode::Celldl);
        assert_eq!(args.output.as_deref(), Some("out.celldl"));
        assert_eq!(args.config.as_deref(), Some("config.toml"));
        assert!(args.all_classes);
        assert_eq!(args.connections, Some(Connections::Arcs));
        assert_eq!(args.log_level, "debug");
    }

    #[test]
    fn test_unknown_mode_is_usage_error() {
        let err = Args::try_parse_from(["celldl", "svg", "model.sbgn"]).unwrap_err();

        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
    }

    #[test]
    fn test_mode_to_format() {
        assert_eq!(OutputFormat::from(Mode::Rdf), OutputFormat::Turtle);
        assert_eq!(OutputFormat::from(Mode::Celldl), OutputFormat::CellDl);
    }
}
