//! Command-line argument definitions for the edaphic query tool.

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the interactive soil query tool
///
/// Drills down through a soil sample dataset by geographic hierarchy and
/// summarizes the edaphic variables of the filtered records.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "edaphic-query",
    version,
    about = "Interactive drill-down queries over soil sample spreadsheets",
    long_about = "An interactive terminal tool for exploring soil sample datasets by \
                  geographic hierarchy (department, municipality, crop) and summarizing \
                  the edaphic variables (median pH, phosphorus and potassium) of the \
                  filtered records. Reads Excel workbooks and CSV files."
)]
pub struct Args {
    /// Path to the soil samples spreadsheet
    ///
    /// Supports Excel workbooks (.xlsx, .xls, .xlsb, .ods) and CSV files.
    /// When omitted, the tool prompts for a path interactively; a path
    /// that does not exist falls back to the same prompt.
    #[arg(
        short = 'f',
        long = "file",
        value_name = "PATH",
        help = "Path to the soil samples spreadsheet"
    )]
    pub data_file: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress log output (quiet mode)
    ///
    /// Only show errors. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress log output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

impl Args {
    /// Determine the appropriate log level based on verbosity flags
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}
