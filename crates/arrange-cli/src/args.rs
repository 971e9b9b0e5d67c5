//! Command-line argument definitions for the Arrange CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control the layout direction, preset selection,
//! output path, configuration file selection, and logging verbosity.

use clap::Parser;

use arrange::direction::Direction;

/// Command-line arguments for the Arrange preset tool
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Layout direction for direction-aware presets (UNDEFINED, RIGHT, LEFT, DOWN, UP)
    #[arg(short, long)]
    pub direction: Option<Direction>,

    /// Only print the configuration with this id
    #[arg(short, long)]
    pub id: Option<String>,

    /// Path to the output TOML file, stdout when omitted
    #[arg(short, long)]
    pub output: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}
