//! The three batch tools
//!
//! Each `run` reads one input file, prints any input issues followed by the
//! report, writes the report to its results file in the working directory
//! and returns the process exit status.

use crate::app::AppConfig;
use std::io::Write;
use std::path::Path;

pub mod conversion;
pub mod statistics;
pub mod word_count;

/// Signature shared by every tool entry point
pub type ToolRun = fn(&AppConfig, &Path, &mut dyn Write) -> anyhow::Result<i32>;
