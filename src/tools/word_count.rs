//! Word frequency tool

use crate::app::AppConfig;
use crate::error::ExitStatus;
use crate::input::{read_lines, BlankLines};
use crate::report::{print_issues, word_count_report, WORD_COUNT_RESULTS};
use crate::words::{count_frequencies, tokenize_line};
use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;
use std::time::Instant;
use tracing::info;

/// Final path component of the input as given on the command line
fn source_name(input: &Path) -> String {
    input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| input.display().to_string())
}

/// Count the distinct words in `input`
pub fn run(config: &AppConfig, input: &Path, console: &mut dyn Write) -> Result<i32> {
    let start = Instant::now();

    let parsed = read_lines(input, BlankLines::Ignore, tokenize_line);
    print_issues(console, &parsed.issues).context("Failed to print input issues")?;

    let total_words: usize = parsed.values.iter().map(Vec::len).sum();
    let counts = count_frequencies(parsed.values.iter().flatten());
    let elapsed = start.elapsed();

    word_count_report(&source_name(input), &counts, elapsed)
        .emit(console, &config.output_path(WORD_COUNT_RESULTS))?;
    info!(
        "Counted {} words, {} distinct, in {:?}",
        total_words,
        counts.len(),
        elapsed
    );
    Ok(ExitStatus::SUCCESS)
}
