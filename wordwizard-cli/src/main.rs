//! WordWizard - lexical statistics for text files
//!
//! Reads text files, counts words, numbers and capitalized words, matches
//! letter sequences, and writes one JSON report per file.

mod cli;
mod report;
mod session;

use std::io;

use anyhow::{bail, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::cli::Cli;
use crate::report::{Outcome, Reporter};

fn main() -> Result<()> {
    // Logs go to stderr so --stdout reports stay clean.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let reporter = Reporter {
        sequences: cli.sequences,
        out_dir: cli.out_dir,
        labels: cli.labels.into(),
        stdout: cli.stdout,
    };

    if cli.files.is_empty() {
        return session::run(&reporter, io::stdin().lock(), io::stdout());
    }

    let mut failed = 0usize;
    for input in &cli.files {
        match reporter.process(input) {
            Ok(Outcome::Written(path)) => {
                info!(input = %input.display(), "done");
                println!("{} -> {}", input.display(), path.display());
            }
            Ok(Outcome::Printed(json)) => println!("{json}"),
            Err(e) => {
                error!("{e:#}");
                failed += 1;
            }
        }
    }

    if failed > 0 {
        bail!("{failed} of {} files could not be analyzed", cli.files.len());
    }
    Ok(())
}
