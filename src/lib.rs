//! # Tally
//!
//! Three small batch tools that read a text file line by line, compute a
//! result, print it and save it to a fixed results file.
//!
//! ## Usage
//!
//! ```bash
//! compute-statistics numbers.txt   # -> StatisticsResults.txt
//! convert-numbers integers.txt     # -> ConvertionResults.txt
//! word-count story.txt             # -> WordCountResults.txt
//! ```
//!
//! ## Modules
//!
//! - `input` - Line reader that collects per-line issues instead of failing
//! - `stats` - Mean, median, mode and population variance/standard deviation
//! - `convert` - Base 2..=16 conversion of arbitrary precision integers
//! - `words` - Word normalization and frequency counting
//! - `report` - Report rendering, console output and results files
//! - `tools` - The three tool pipelines
//! - `cli` - Argument definitions shared by the binaries
//! - `app` - Configuration, logging and fatal error handling
//! - `error` - Error type and exit status registry
pub mod app;
pub mod cli;
pub mod convert;
pub mod error;
pub mod input;
pub mod report;
pub mod stats;
pub mod tools;
pub mod words;
