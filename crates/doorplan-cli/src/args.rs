//! Command-line argument definitions for the Doorplan CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, connector lines,
//! configuration file selection, and logging verbosity.

use std::path::PathBuf;

use clap::Parser;

/// Command-line arguments for the Doorplan diagram generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the door configuration report CSV
    #[arg(help = "Path to the door configuration report CSV")]
    pub input: Option<PathBuf>,

    /// Directory where diagram images are written
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Include vertical connector lines in the diagrams (default: no lines)
    #[arg(long)]
    pub show_lines: bool,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Pick the input file and output directory interactively
    #[cfg(feature = "dialog")]
    #[arg(long)]
    pub pick: bool,
}
