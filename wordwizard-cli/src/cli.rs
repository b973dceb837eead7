//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use wordwizard_types::ReportLabels;

/// Analyze text files and write lexical statistics as JSON.
///
/// With no FILES, prompts for paths until `koniec` (or `quit`/`exit`).
#[derive(Debug, Parser)]
#[command(name = "wordwizard", version, about)]
pub struct Cli {
    /// Text files to analyze.
    pub files: Vec<PathBuf>,

    /// JSON file with the letter sequences: {"sequences": [["c","a","t"], ...]}.
    #[arg(long, env = "WORDWIZARD_SEQUENCES", default_value = "sekwencje.json")]
    pub sequences: PathBuf,

    /// Directory for the reports; created if missing.
    #[arg(long, env = "WORDWIZARD_OUT_DIR", default_value = "wyniki")]
    pub out_dir: PathBuf,

    /// Field names used in the report.
    #[arg(long, value_enum, default_value_t = LabelStyle::Standard)]
    pub labels: LabelStyle,

    /// Print reports to stdout instead of writing files.
    #[arg(long)]
    pub stdout: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LabelStyle {
    /// snake_case English keys
    Standard,
    /// legacy Polish headings
    Legacy,
}

impl From<LabelStyle> for ReportLabels {
    fn from(style: LabelStyle) -> Self {
        match style {
            LabelStyle::Standard => ReportLabels::Standard,
            LabelStyle::Legacy => ReportLabels::Legacy,
        }
    }
}
