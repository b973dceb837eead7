//! Interactive mode: ask for file paths until the user quits.

use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::Result;
use tracing::warn;

use crate::report::{Outcome, Reporter};

const QUIT_WORDS: [&str; 3] = ["koniec", "quit", "exit"];

const BANNER: &str = "\
Welcome to WordWizard!

WordWizard counts the words, numbers and capitalized words of a text file,
finds words matching the letter sequences from the sequences file,
and saves detailed statistics as JSON.
";

/// Runs the prompt loop over `input`, writing prompts and results to `out`.
///
/// Ends on a quit word or end of input. Failures for one path are reported
/// and the loop continues.
pub fn run<R: BufRead, W: Write>(reporter: &Reporter, mut input: R, mut out: W) -> Result<()> {
    writeln!(out, "{BANNER}")?;
    let mut line = String::new();

    loop {
        write!(
            out,
            "Enter the path of a text file, or \"koniec\" to quit: "
        )?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            break;
        }

        let answer = line.trim();
        if answer.is_empty() {
            continue;
        }
        if QUIT_WORDS.iter().any(|w| answer.eq_ignore_ascii_case(w)) {
            writeln!(out, "Closing WordWizard.")?;
            break;
        }

        let path = Path::new(answer);
        if !path.exists() {
            writeln!(out, "File '{answer}' does not exist. Try again.")?;
            continue;
        }

        match reporter.process(path) {
            Ok(Outcome::Written(report)) => writeln!(
                out,
                "Analysis of '{answer}' finished. Results saved to '{}'.",
                report.display()
            )?,
            Ok(Outcome::Printed(json)) => writeln!(out, "{json}")?,
            Err(e) => {
                warn!("{e:#}");
                writeln!(out, "Analysis of '{answer}' failed: {e:#}")?;
            }
        }
    }
    Ok(())
}
