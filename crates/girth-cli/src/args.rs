//! Command-line argument definitions for the Girth CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control the scene input, configuration file
//! selection, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Girth perimeter tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to a TOML scene file; runs the built-in demonstration when omitted
    #[arg(help = "Path to the scene file")]
    pub input: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_arguments() {
        let args = Args::parse_from(["girth"]);
        assert_eq!(args.input, None);
        assert_eq!(args.config, None);
        assert_eq!(args.log_level, "info");
    }

    #[test]
    fn test_all_arguments() {
        let args = Args::parse_from([
            "girth",
            "scene.toml",
            "--config",
            "girth.toml",
            "--log-level",
            "debug",
        ]);
        assert_eq!(args.input.as_deref(), Some("scene.toml"));
        assert_eq!(args.config.as_deref(), Some("girth.toml"));
        assert_eq!(args.log_level, "debug");
    }
}
