//! Report rendering and output
//!
//! Each tool produces a [`Report`]: a list of text lines that is printed to
//! the console and written, newline-terminated, to a fixed file name.

use crate::convert::ConversionRow;
use crate::error::{Result, ToolError};
use crate::input::Issue;
use crate::stats::Summary;
use crate::words::WordCount;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::time::Duration;
use tracing::debug;

pub const STATISTICS_RESULTS: &str = "StatisticsResults.txt";
pub const CONVERSION_RESULTS: &str = "ConvertionResults.txt";
pub const WORD_COUNT_RESULTS: &str = "WordCountResults.txt";

/// Placeholder row for an input without any words
pub const NO_WORDS_ROW: &str = "(no words found)\t0";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    lines: Vec<String>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The report as written to disk, every line newline-terminated
    pub fn text(&self) -> String {
        self.lines.iter().map(|line| format!("{line}\n")).collect()
    }

    /// Print to `console` and overwrite `path` with the same text
    pub fn emit<W: Write + ?Sized>(&self, console: &mut W, path: &Path) -> Result<()> {
        let text = self.text();
        let write_error = |source: std::io::Error| ToolError::OutputWrite {
            path: path.to_path_buf(),
            source,
        };

        console.write_all(text.as_bytes()).map_err(write_error)?;
        fs::write(path, &text).map_err(write_error)?;

        debug!("Wrote {} lines to {}", self.lines.len(), path.display());
        Ok(())
    }
}

/// Print every issue as an `ERROR:` line
pub fn print_issues<W: Write + ?Sized>(
    console: &mut W,
    issues: &[Issue],
) -> std::io::Result<()> {
    for issue in issues {
        writeln!(console, "ERROR: {issue}")?;
    }
    Ok(())
}

fn seconds(elapsed: Duration) -> String {
    format!("{:.6}", elapsed.as_secs_f64())
}

pub fn statistics_report(summary: &Summary, elapsed: Duration) -> Report {
    let mode = summary
        .mode
        .map_or_else(|| "N/A".to_string(), |value| format!("{value:.6}"));

    let mut report = Report::new();
    report.push(format!("Count: {}", summary.count));
    report.push(format!("Mean: {:.6}", summary.mean));
    report.push(format!("Median: {:.6}", summary.median));
    report.push(format!("Mode: {mode}"));
    report.push(format!(
        "Standard Deviation (Population): {:.6}",
        summary.std_dev
    ));
    report.push(format!("Variance (Population): {:.6}", summary.variance));
    report.push(format!("Time Elapsed (s): {}", seconds(elapsed)));
    report
}

pub fn no_numbers_report(elapsed: Duration) -> Report {
    let mut report = Report::new();
    report.push("No valid numbers to process.");
    report.push(format!("Time Elapsed (s): {}", seconds(elapsed)));
    report
}

pub fn conversion_report(rows: &[ConversionRow], elapsed: Duration) -> Report {
    let mut report = Report::new();
    report.push("ITEM\tDEC\tBIN\tHEX");
    for row in rows {
        report.push(row.to_string());
    }
    report.push(format!("Time Elapsed (s):\t{}", seconds(elapsed)));
    report
}

/// `source_name` is the input file's base name, used in the header
pub fn word_count_report(source_name: &str, counts: &[WordCount], elapsed: Duration) -> Report {
    let mut report = Report::new();
    report.push(format!("Row Labels\tCount of {source_name}"));
    if counts.is_empty() {
        report.push(NO_WORDS_ROW);
    }
    for count in counts {
        report.push(count.to_string());
    }
    report.push(format!("Time Elapsed (s):\t{}", seconds(elapsed)));
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::conversion_rows;
    use crate::words::count_frequencies;
    use num_bigint::BigInt;
    use tempfile::TempDir;

    const NO_TIME: Duration = Duration::ZERO;

    #[test]
    fn test_statistics_report_layout() {
        let summary = Summary::from_values(&[1.0, 2.0, 3.0, 3.0]).unwrap();
        let report = statistics_report(&summary, Duration::from_millis(1500));

        assert_eq!(
            report.lines(),
            [
                "Count: 4",
                "Mean: 2.250000",
                "Median: 2.500000",
                "Mode: 3.000000",
                "Standard Deviation (Population): 0.829156",
                "Variance (Population): 0.687500",
                "Time Elapsed (s): 1.500000",
            ]
        );
    }

    #[test]
    fn test_statistics_report_without_mode() {
        let summary = Summary::from_values(&[1.0, 2.0, 3.0]).unwrap();
        let report = statistics_report(&summary, NO_TIME);
        assert_eq!(report.lines()[3], "Mode: N/A");
    }

    #[test]
    fn test_no_numbers_report() {
        assert_eq!(
            no_numbers_report(NO_TIME).text(),
            "No valid numbers to process.\nTime Elapsed (s): 0.000000\n"
        );
    }

    #[test]
    fn test_conversion_report_layout() {
        let rows = conversion_rows(vec![BigInt::from(10), BigInt::from(-10)]).unwrap();
        let report = conversion_report(&rows, NO_TIME);
        assert_eq!(
            report.lines(),
            [
                "ITEM\tDEC\tBIN\tHEX",
                "1\t10\t1010\tA",
                "2\t-10\t-1010\t-A",
                "Time Elapsed (s):\t0.000000",
            ]
        );
    }

    #[test]
    fn test_word_count_report_placeholder_when_empty() {
        let report = word_count_report("empty.txt", &[], NO_TIME);
        assert_eq!(
            report.lines(),
            [
                "Row Labels\tCount of empty.txt",
                "(no words found)\t0",
                "Time Elapsed (s):\t0.000000",
            ]
        );
    }

    #[test]
    fn test_word_count_report_rows() {
        let counts = count_frequencies(["b", "a", "b"]);
        let report = word_count_report("words.txt", &counts, NO_TIME);
        assert_eq!(report.lines()[1..3], ["b\t2", "a\t1"]);
    }

    #[test]
    fn test_emit_prints_and_overwrites_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONVERSION_RESULTS);
        std::fs::write(&path, "stale contents that are longer than the report\n").unwrap();

        let mut report = Report::new();
        report.push("first");
        report.push("second");

        let mut console = Vec::new();
        report.emit(&mut console, &path).unwrap();

        assert_eq!(String::from_utf8(console).unwrap(), "first\nsecond\n");
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "first\nsecond\n");
    }

    #[test]
    fn test_emit_reports_unwritable_destination() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing-dir").join(STATISTICS_RESULTS);

        let err = Report::new().emit(&mut Vec::new(), &path).unwrap_err();
        assert!(matches!(err, ToolError::OutputWrite { path: p, .. } if p == path));
    }

    #[test]
    fn test_print_issues_prefixes_error() {
        let mut console = Vec::new();
        print_issues(&mut console, &[Issue::EmptyLine { line: 2 }]).unwrap();
        assert_eq!(
            String::from_utf8(console).unwrap(),
            "ERROR: Line 2: empty line (skipped)\n"
        );
    }
}
