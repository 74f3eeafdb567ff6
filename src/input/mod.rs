//! Line-oriented input reading
//!
//! All three tools read their input the same way: one record per line, bad
//! lines are noted and skipped, and a file that cannot be opened at all is
//! reported once and treated as empty. The per-tool part is the parse
//! callback handed to [`read_lines`].

use std::borrow::Cow;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::{debug, trace, warn};

/// Something worth telling the user about the input, without stopping
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    /// A blank line where a value was expected
    EmptyLine { line: usize },
    /// A line whose content could not be parsed
    InvalidValue {
        line: usize,
        kind: &'static str,
        content: String,
    },
    /// The input file does not exist
    FileNotFound { path: PathBuf },
    /// The input file could not be opened or read
    Unreadable { path: PathBuf, reason: String },
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyLine { line } => write!(f, "Line {}: empty line (skipped)", line),
            Self::InvalidValue {
                line,
                kind,
                content,
            } => write!(f, "Line {}: invalid {} '{}' (skipped)", line, kind, content),
            Self::FileNotFound { path } => write!(f, "File not found: {}", path.display()),
            Self::Unreadable { path, reason } => {
                write!(f, "Could not read file '{}': {}", path.display(), reason)
            }
        }
    }
}

/// Why a parse callback refused a line
///
/// Carries the name of the value kind that was expected (`"number"`,
/// `"integer"`); the reader adds the line number and content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rejection {
    pub kind: &'static str,
}

impl Rejection {
    pub fn new(kind: &'static str) -> Self {
        Self { kind }
    }
}

/// Drop `_` digit separators from a numeral
///
/// Each `_` must sit between two ASCII digits (`1_000`, `0.000_1`); a
/// leading, trailing or doubled separator returns `None`.
pub fn strip_digit_separators(text: &str) -> Option<Cow<'_, str>> {
    if !text.contains('_') {
        return Some(Cow::Borrowed(text));
    }
    let bytes = text.as_bytes();
    for (index, &byte) in bytes.iter().enumerate() {
        if byte != b'_' {
            continue;
        }
        let before = index.checked_sub(1).map(|i| bytes[i]);
        let after = bytes.get(index + 1).copied();
        let flanked = before.is_some_and(|b| b.is_ascii_digit())
            && after.is_some_and(|b| b.is_ascii_digit());
        if !flanked {
            return None;
        }
    }
    Some(Cow::Owned(text.replace('_', "")))
}

/// What to do with lines that are empty after trimming
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlankLines {
    /// Record an [`Issue::EmptyLine`]
    Report,
    /// Skip silently
    Ignore,
}

/// Values gathered from an input file together with everything skipped
#[derive(Debug, Clone, PartialEq)]
pub struct Parsed<T> {
    pub values: Vec<T>,
    pub issues: Vec<Issue>,
}

impl<T> Default for Parsed<T> {
    fn default() -> Self {
        Self {
            values: Vec::new(),
            issues: Vec::new(),
        }
    }
}

impl<T> Parsed<T> {
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Read `path` line by line, parsing each trimmed line with `parse`
///
/// Never fails: a missing or unreadable file yields a single issue and
/// whatever values were read before the failure (none, if it never opened).
pub fn read_lines<T, F>(path: &Path, blank_lines: BlankLines, parse: F) -> Parsed<T>
where
    F: FnMut(&str) -> Result<T, Rejection>,
{
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            let issue = open_issue(path, &e);
            warn!("{}", issue);
            return Parsed {
                values: Vec::new(),
                issues: vec![issue],
            };
        }
    };

    let parsed = parse_reader(BufReader::new(file), path, blank_lines, parse);
    debug!(
        "Read {} values with {} issues from {}",
        parsed.values.len(),
        parsed.issues.len(),
        path.display()
    );
    parsed
}

/// Same as [`read_lines`] over any buffered reader
///
/// `path` is only used to label a mid-stream read failure.
pub fn parse_reader<R, T, F>(
    reader: R,
    path: &Path,
    blank_lines: BlankLines,
    mut parse: F,
) -> Parsed<T>
where
    R: BufRead,
    F: FnMut(&str) -> Result<T, Rejection>,
{
    let mut parsed = Parsed::default();

    for (index, line) in reader.lines().enumerate() {
        let line_number = index + 1;
        let raw = match line {
            Ok(raw) => raw,
            Err(e) => {
                let issue = Issue::Unreadable {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                };
                warn!("{}", issue);
                parsed.issues.push(issue);
                break;
            }
        };

        let text = raw.trim();
        if text.is_empty() {
            if blank_lines == BlankLines::Report {
                parsed.issues.push(Issue::EmptyLine { line: line_number });
            }
            continue;
        }

        match parse(text) {
            Ok(value) => parsed.values.push(value),
            Err(rejection) => {
                trace!("Line {} rejected as {}", line_number, rejection.kind);
                parsed.issues.push(Issue::InvalidValue {
                    line: line_number,
                    kind: rejection.kind,
                    content: text.to_string(),
                });
            }
        }
    }

    parsed
}

fn open_issue(path: &Path, error: &io::Error) -> Issue {
    match error.kind() {
        io::ErrorKind::NotFound => Issue::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => Issue::Unreadable {
            path: path.to_path_buf(),
            reason: error.to_string(),
        },
    }
}
