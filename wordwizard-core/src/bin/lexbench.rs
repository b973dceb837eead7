//! Extraction Rule Benchmarking Tool
//!
//! Measures the throughput of each extraction rule on a large text file
//! (a book, a Wikipedia dump, a log). It gives realistic numbers for the
//! per-document work done by a full analysis.
//!
//! ## What It Benchmarks
//!
//! 1. **Words**: letter-only word rule
//! 2. **Numbers**: numeric literal rule
//! 3. **Capitalized**: ASCII uppercase-initial rule
//! 4. **Mixed**: word/number/punctuation scan used for frequencies
//! 5. **Match**: sequence matcher with a handful of fixed queries
//!
//! ## Usage
//!
//! ```bash
//! cargo build --release --features bench
//!
//! # Run every mode
//! ./target/release/lexbench /path/to/book.txt
//!
//! # One mode only
//! ./target/release/lexbench /path/to/book.txt --mode mixed
//! ```
//!
//! ## Example Output
//!
//! ```text
//! Mixed        best 0.448 s   mean 0.452 s   428.1 MiB/s   154.9 M tokens (342.7 M/s)
//! ```
//!
//! Build with `--release` and use an input of 100MB+ for stable results.

use std::fs;
use std::hint::black_box;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::{Parser, ValueEnum};
use wordwizard_core::analyzer::{
    extract_capitalized, extract_mixed, extract_numbers, extract_words,
};
use wordwizard_core::match_sequences;
use wordwizard_types::SequenceQuery;

const WARMUP_RUNS: usize = 1;
const MEASURE_RUNS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    Words,
    Numbers,
    Capitalized,
    Mixed,
    Match,
    All,
}

/// Throughput benchmark for the extraction rules.
#[derive(Debug, Parser)]
#[command(name = "lexbench")]
struct Args {
    /// UTF-8 text file to scan.
    path: PathBuf,

    /// Which rule to measure.
    #[arg(long, value_enum, default_value_t = Mode::All)]
    mode: Mode,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    let input = fs::read_to_string(&args.path)?;
    println!("{}: {:.1} MiB\n", args.path.display(), mib(input.len()));

    let run = |mode: Mode| args.mode == Mode::All || args.mode == mode;

    if run(Mode::Words) {
        bench("Words", &input, |text| extract_words(text).count());
    }
    if run(Mode::Numbers) {
        bench("Numbers", &input, |text| extract_numbers(text).count());
    }
    if run(Mode::Capitalized) {
        bench("Capitalized", &input, |text| extract_capitalized(text).count());
    }
    if run(Mode::Mixed) {
        bench("Mixed", &input, |text| extract_mixed(text).count());
    }
    if run(Mode::Match) {
        let queries = [
            SequenceQuery::new(["t", "h", "e"]),
            SequenceQuery::new(["c", "a", "t"]),
            SequenceQuery::new(["ż", "ł"]),
            SequenceQuery::new(["in", "g"]),
        ];
        bench("Match", &input, |text| {
            match_sequences(text, &queries)
                .iter()
                .map(|(_, words)| words.len())
                .sum()
        });
    }

    Ok(())
}

/// Timings of the measured runs of one mode.
struct Samples {
    runs: Vec<Duration>,
    tokens: usize,
}

impl Samples {
    fn best(&self) -> Duration {
        self.runs.iter().copied().min().unwrap_or_default()
    }

    fn mean(&self) -> Duration {
        let total: Duration = self.runs.iter().sum();
        total / self.runs.len().max(1) as u32
    }
}

fn bench<F: FnMut(&str) -> usize>(label: &str, input: &str, mut scan: F) {
    for _ in 0..WARMUP_RUNS {
        black_box(scan(black_box(input)));
    }

    let mut samples = Samples {
        runs: Vec::with_capacity(MEASURE_RUNS),
        tokens: 0,
    };
    for _ in 0..MEASURE_RUNS {
        let start = Instant::now();
        samples.tokens = black_box(scan(black_box(input)));
        samples.runs.push(start.elapsed());
    }

    report(label, input.len(), &samples);
}

fn report(label: &str, input_bytes: usize, samples: &Samples) {
    let best = samples.best().as_secs_f64();
    let mean = samples.mean().as_secs_f64();
    let millions = samples.tokens as f64 / 1e6;

    println!(
        "{label:<12} best {best:.3} s   mean {mean:.3} s   {:.1} MiB/s   {millions:.1} M tokens ({:.1} M/s)",
        mib(input_bytes) / best,
        millions / best,
    );
}

fn mib(bytes: usize) -> f64 {
    bytes as f64 / (1024.0 * 1024.0)
}
