//! CLI argument definitions for the slab sweep.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use slabs_model::SheetSelector;

#[derive(Parser)]
#[command(
    name = "slabs",
    version,
    about = "Remove values existing in OUTLET CODE and shift remaining values up",
    long_about = "Remove values existing in OUTLET CODE and shift remaining values up.\n\n\
                  Reads a .csv or Excel workbook, strips every outlet code from the slab\n\
                  columns, and writes 'Final Slabs V2.csv' next to the input file."
)]
pub struct Cli {
    /// Path to the .csv/.xlsx file.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Sheet name or zero-based index for Excel files.
    #[arg(long = "sheet", value_name = "SHEET", value_parser = parse_sheet)]
    pub sheet: Option<SheetSelector>,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

fn parse_sheet(raw: &str) -> Result<SheetSelector, String> {
    Ok(SheetSelector::parse(raw))
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
