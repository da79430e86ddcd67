//! CLI argument definitions for rexpaint

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rexpaint")]
#[command(about = "REXPaint .xp file inspector", long_about = None)]
pub struct Cli {
    /// Log decoder activity (same as RUST_LOG=rexpaint=debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show layer count and layer dimensions
    #[command(visible_alias = "i")]
    Info {
        /// Path to .xp file
        input: PathBuf,

        /// File layout (uses configured default if not provided)
        #[arg(short, long)]
        format: Option<FormatArg>,
    },

    /// Print the characters of one layer as rows of text
    #[command(visible_alias = "t")]
    Text {
        /// Path to .xp file
        input: PathBuf,

        /// 0-based layer number
        #[arg(short, long, default_value_t = 0)]
        layer: usize,

        /// File layout (uses configured default if not provided)
        #[arg(short, long)]
        format: Option<FormatArg>,
    },

    /// Decode every layer (text grid or JSON)
    #[command(visible_alias = "d")]
    Dump {
        /// Path to .xp file
        input: PathBuf,

        /// Emit the full map, colors included, as JSON
        #[arg(long)]
        json: bool,

        /// Output file (uses stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// File layout (uses configured default if not provided)
        #[arg(short, long)]
        format: Option<FormatArg>,
    },

    /// Configure default settings
    #[command(visible_alias = "c")]
    Configure {
        /// Set default file layout
        #[arg(long)]
        format: Option<FormatArg>,

        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum FormatArg {
    /// Layer count is the first field
    Legacy,
    /// A version tag precedes the layer count
    Versioned,
    /// Choose per file from the sign of the first field
    Detect,
}

impl From<FormatArg> for rexpaint::Format {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Legacy => rexpaint::Format::Legacy,
            FormatArg::Versioned => rexpaint::Format::Versioned,
            FormatArg::Detect => rexpaint::Format::Detect,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_text() {
        let cli = Cli::parse_from(["rexpaint", "text", "map.xp", "--layer", "2", "-f", "versioned"]);
        match cli.command {
            Commands::Text {
                input,
                layer,
                format,
            } => {
                assert_eq!(input, PathBuf::from("map.xp"));
                assert_eq!(layer, 2);
                assert!(matches!(format, Some(FormatArg::Versioned)));
            }
            _ => panic!("expected text command"),
        }
    }

    #[test]
    fn test_format_conversion() {
        assert_eq!(rexpaint::Format::from(FormatArg::Detect), rexpaint::Format::Detect);
    }
}
