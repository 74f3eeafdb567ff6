//! Binary and hexadecimal conversion tool

use crate::app::AppConfig;
use crate::convert::{conversion_rows, parse_integer};
use crate::error::ExitStatus;
use crate::input::{read_lines, BlankLines};
use crate::report::{conversion_report, print_issues, CONVERSION_RESULTS};
use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;
use std::time::Instant;
use tracing::info;

/// Convert every integer in `input` to binary and hexadecimal
///
/// An input without valid integers still produces the header and timing
/// rows and exits successfully.
pub fn run(config: &AppConfig, input: &Path, console: &mut dyn Write) -> Result<i32> {
    let start = Instant::now();

    let parsed = read_lines(input, BlankLines::Report, parse_integer);
    print_issues(console, &parsed.issues).context("Failed to print input issues")?;

    let skipped = parsed.issues.len();
    let rows = conversion_rows(parsed.values).context("Failed to convert integers")?;
    let elapsed = start.elapsed();

    conversion_report(&rows, elapsed).emit(console, &config.output_path(CONVERSION_RESULTS))?;
    info!(
        "Converted {} integers ({} lines skipped) in {:?}",
        rows.len(),
        skipped,
        elapsed
    );
    Ok(ExitStatus::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_converts_and_reports_bad_line() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("ints.txt");
        std::fs::write(&input, "10\n255\n-10\nbad\n").unwrap();
        let config = AppConfig::default().with_working_dir(temp_dir.path().to_path_buf());

        let mut console = Vec::new();
        let status = run(&config, &input, &mut console).unwrap();
        let console = String::from_utf8(console).unwrap();
        let written =
            std::fs::read_to_string(temp_dir.path().join(CONVERSION_RESULTS)).unwrap();

        assert_eq!(status, ExitStatus::SUCCESS);
        assert!(console.starts_with("ERROR: Line 4: invalid integer 'bad' (skipped)\n"));
        assert!(written.starts_with(concat!(
            "ITEM\tDEC\tBIN\tHEX\n",
            "1\t10\t1010\tA\n",
            "2\t255\t11111111\tFF\n",
            "3\t-10\t-1010\t-A\n",
            "Time Elapsed (s):\t",
        )));
    }

    #[test]
    fn test_empty_input_still_succeeds() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("empty.txt");
        std::fs::write(&input, "").unwrap();
        let config = AppConfig::default().with_working_dir(temp_dir.path().to_path_buf());

        let mut console = Vec::new();
        let status = run(&config, &input, &mut console).unwrap();

        assert_eq!(status, ExitStatus::SUCCESS);
        let lines: Vec<_> = String::from_utf8(console)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "ITEM\tDEC\tBIN\tHEX");
    }
}
