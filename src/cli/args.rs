//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::Config;

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum OutputFormat {
    /// Plain CSV rows (default)
    #[default]
    Csv,
    /// Human-readable table
    Table,
    /// JSON array of winning pairs
    Json,
}

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum ColorMode {
    /// Auto-detect based on terminal (default)
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser)]
#[command(name = "coworked")]
#[command(
    about = "Finds the employee pair(s) with the most days worked together on shared projects",
    version
)]
pub(crate) struct Cli {
    /// Path to the assignments file (.csv, .txt or no extension); prompts when omitted
    pub(crate) path: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub(crate) format: OutputFormat,

    /// Resolve open-ended (NULL) assignments against this date instead of today
    #[arg(long, value_name = "DATE")]
    pub(crate) as_of: Option<String>,

    /// Color output mode (table format only)
    #[arg(long, value_enum, default_value = "auto")]
    pub(crate) color: ColorMode,

    /// Disable colored output (shorthand for --color=never)
    #[arg(long)]
    pub(crate) no_color: bool,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        // Only apply config values if CLI is still at its defaults
        if let Some(ref format) = config.format
            && self.format == OutputFormat::Csv
        {
            match format.to_lowercase().as_str() {
                "table" => self.format = OutputFormat::Table,
                "json" => self.format = OutputFormat::Json,
                _ => {}
            }
        }

        if let Some(ref color) = config.color
            && self.color == ColorMode::Auto
        {
            match color.to_lowercase().as_str() {
                "always" => self.color = ColorMode::Always,
                "never" => self.color = ColorMode::Never,
                _ => {}
            }
        }

        if !self.no_color && config.no_color {
            self.no_color = true;
        }

        self
    }

    pub(crate) fn use_color(&self) -> bool {
        if self.no_color {
            return false;
        }
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        }
    }
}
