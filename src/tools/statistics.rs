//! Descriptive statistics tool

use crate::app::AppConfig;
use crate::error::ExitStatus;
use crate::input::{read_lines, BlankLines};
use crate::report::{no_numbers_report, print_issues, statistics_report, STATISTICS_RESULTS};
use crate::stats::{parse_number, Summary};
use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;
use std::time::Instant;
use tracing::info;

/// Summarize the numbers in `input`
///
/// Returns [`ExitStatus::NO_DATA`] when no line held a valid number; the
/// results file then says so instead of listing statistics.
pub fn run(config: &AppConfig, input: &Path, console: &mut dyn Write) -> Result<i32> {
    let start = Instant::now();

    let parsed = read_lines(input, BlankLines::Report, parse_number);
    print_issues(console, &parsed.issues).context("Failed to print input issues")?;

    let output = config.output_path(STATISTICS_RESULTS);

    if parsed.is_empty() {
        let report = no_numbers_report(start.elapsed());
        report.emit(console, &output)?;
        info!("No valid numbers in {}", input.display());
        return Ok(ExitStatus::NO_DATA);
    }

    let summary = Summary::from_values(&parsed.values)?;
    let elapsed = start.elapsed();

    statistics_report(&summary, elapsed).emit(console, &output)?;
    info!(
        "Summarized {} numbers ({} lines skipped) in {:?}",
        summary.count,
        parsed.issues.len(),
        elapsed
    );
    Ok(ExitStatus::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn run_on(contents: &str) -> (i32, String, String) {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("numbers.txt");
        std::fs::write(&input, contents).unwrap();
        let config = AppConfig::default().with_working_dir(temp_dir.path().to_path_buf());

        let mut console = Vec::new();
        let status = run(&config, &input, &mut console).unwrap();
        let written =
            std::fs::read_to_string(temp_dir.path().join(STATISTICS_RESULTS)).unwrap();
        (status, String::from_utf8(console).unwrap(), written)
    }

    #[test]
    fn test_reports_statistics_and_skipped_line() {
        let (status, console, written) = run_on("1\n2\n3\n3\nx\n");

        assert_eq!(status, ExitStatus::SUCCESS);
        assert!(console.starts_with("ERROR: Line 5: invalid number 'x' (skipped)\n"));
        assert!(written.starts_with(
            "Count: 4\nMean: 2.250000\nMedian: 2.500000\nMode: 3.000000\n"
        ));
        assert!(console.ends_with(&written));
    }

    #[test]
    fn test_no_valid_numbers() {
        let (status, console, written) = run_on("\nabc\n");

        assert_eq!(status, ExitStatus::NO_DATA);
        assert!(console.contains("ERROR: Line 1: empty line (skipped)"));
        assert!(console.contains("ERROR: Line 2: invalid number 'abc' (skipped)"));
        assert!(written.starts_with("No valid numbers to process.\nTime Elapsed (s): "));
    }

    #[test]
    fn test_missing_input_degrades_to_no_data() {
        let temp_dir = TempDir::new().unwrap();
        let config = AppConfig::default().with_working_dir(temp_dir.path().to_path_buf());
        let missing = temp_dir.path().join("nope.txt");

        let mut console = Vec::new();
        let status = run(&config, &missing, &mut console).unwrap();

        assert_eq!(status, ExitStatus::NO_DATA);
        let console = String::from_utf8(console).unwrap();
        assert!(console.starts_with(&format!("ERROR: File not found: {}\n", missing.display())));
    }
}
