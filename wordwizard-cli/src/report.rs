//! Reading inputs and writing JSON reports.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value;
use tracing::{debug, info};
use wordwizard_core::{parse_query_document, Document};
use wordwizard_types::{AnalysisResult, ReportLabels, SequenceQuery};

const REPORT_SUFFIX: &str = "_wyniki.json";

/// Where reports go and how they look.
#[derive(Debug, Clone)]
pub struct Reporter {
    pub sequences: PathBuf,
    pub out_dir: PathBuf,
    pub labels: ReportLabels,
    pub stdout: bool,
}

/// What happened to one input file.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Written(PathBuf),
    Printed(String),
}

impl Reporter {
    /// Analyzes `input` and writes (or returns) its report.
    ///
    /// The sequences file is reread for every input so edits take effect
    /// between files of an interactive session.
    pub fn process(&self, input: &Path) -> Result<Outcome> {
        let queries = load_queries(&self.sequences)?;
        let result = analyze_file(input, &queries)?;
        let rendered = render(&result, self.labels)?;

        if self.stdout {
            return Ok(Outcome::Printed(rendered));
        }

        let path = report_path(&self.out_dir, input);
        write_report(&path, &rendered)?;
        info!(input = %input.display(), report = %path.display(), "report written");
        Ok(Outcome::Written(path))
    }
}

/// Loads and validates the query document at `path`.
pub fn load_queries(path: &Path) -> Result<Vec<SequenceQuery>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("cannot read sequences file '{}'", path.display()))?;
    let document: Value = serde_json::from_str(&raw)
        .with_context(|| format!("sequences file '{}' is not valid JSON", path.display()))?;
    let queries = parse_query_document(&document)
        .with_context(|| format!("sequences file '{}' is malformed", path.display()))?;

    debug!(count = queries.len(), "sequences loaded");
    Ok(queries)
}

/// Reads `input` and analyzes it.
pub fn analyze_file(input: &Path, queries: &[SequenceQuery]) -> Result<AnalysisResult> {
    let text = fs::read_to_string(input)
        .with_context(|| format!("cannot read text file '{}'", input.display()))?;
    debug!(input = %input.display(), bytes = text.len(), "text loaded");
    Ok(Document::from(text).analyze(queries))
}

/// `<out_dir>/<input stem>_wyniki.json`
pub fn report_path(out_dir: &Path, input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();
    out_dir.join(format!("{stem}{REPORT_SUFFIX}"))
}

/// Pretty JSON with four-space indentation; non-ASCII text is kept as is.
pub fn render(result: &AnalysisResult, labels: ReportLabels) -> Result<String> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    result
        .labeled(labels)
        .serialize(&mut ser)
        .context("cannot serialize report")?;
    String::from_utf8(buf).context("report is not valid UTF-8")
}

/// Writes `contents` to `path`, creating parent directories.
pub fn write_report(path: &Path, contents: &str) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("cannot create directory '{}'", dir.display()))?;
    }
    fs::write(path, contents).with_context(|| format!("cannot write '{}'", path.display()))
}
