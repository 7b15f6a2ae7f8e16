//! Command-line argument definitions for the panelgen CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments select the mode of operation, override the file
//! locations from the configuration, and control logging verbosity.

use clap::Parser;

/// What a run does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Create or extend the mapping file from the drawing.
    Init,
    /// Check the mapping against the drawing.
    Validate,
    /// Produce the code snippets.
    Generate,
}

/// Command-line arguments for the panelgen tool
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Create the mapping file with suggested entries for every shape
    #[arg(long, conflicts_with = "validate")]
    pub init: bool,

    /// Check the mapping file against the drawing
    #[arg(long)]
    pub validate: bool,

    /// Print the result instead of writing files
    #[arg(long)]
    pub dry_run: bool,

    /// With --init, replace an existing mapping instead of extending it
    #[arg(long)]
    pub force: bool,

    /// Path to the SVG drawing
    #[arg(long)]
    pub svg: Option<String>,

    /// Path to the mapping file (JSON)
    #[arg(long)]
    pub mapping: Option<String>,

    /// Directory receiving the generated snippets
    #[arg(long)]
    pub output_dir: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Args {
    /// Returns the selected mode; generation is the default.
    pub fn mode(&self) -> Mode {
        if self.init {
            Mode::Init
        } else if self.validate {
            Mode::Validate
        } else {
            Mode::Generate
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mode_is_generate() {
        let args = Args::try_parse_from(["panelgen"]).unwrap();
        assert_eq!(args.mode(), Mode::Generate);
        assert_eq!(args.log_level, "info");
        assert!(!args.dry_run);
    }

    #[test]
    fn test_mode_flags() {
        let args = Args::try_parse_from(["panelgen", "--init", "--force"]).unwrap();
        assert_eq!(args.mode(), Mode::Init);
        assert!(args.force);

        let args = Args::try_parse_from(["panelgen", "--validate", "--svg", "panel.svg"]).unwrap();
        assert_eq!(args.mode(), Mode::Validate);
        assert_eq!(args.svg.as_deref(), Some("panel.svg"));
    }

    #[test]
    fn test_init_and_validate_conflict() {
        assert!(Args::try_parse_from(["panelgen", "--init", "--validate"]).is_err());
    }

    #[test]
    fn test_path_overrides() {
        let args = Args::try_parse_from([
            "panelgen",
            "--dry-run",
            "--mapping",
            "m.json",
            "--output-dir",
            "out",
            "-c",
            "panelgen.toml",
        ])
        .unwrap();

        assert!(args.dry_run);
        assert_eq!(args.mapping.as_deref(), Some("m.json"));
        assert_eq!(args.output_dir.as_deref(), Some("out"));
        assert_eq!(args.config.as_deref(), Some("panelgen.toml"));
    }
}
