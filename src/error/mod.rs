use std::path::PathBuf;
use thiserror::Error;

pub mod codes;

pub use codes::{describe_error_code, ErrorCode, ExitStatus};

/// Errors that stop a tool outright.
///
/// Bad lines and unreadable input files are not errors in this sense; they
/// are collected as [`crate::input::Issue`]s and reported next to the results.
#[derive(Error, Debug)]
pub enum ToolError {
    #[error("[E{code:04}] Configuration error: {message}", code = ErrorCode::CONFIG_GENERIC)]
    Config { message: String },

    #[error(
        "[E{code:04}] Base must be between 2 and 16, got {base}",
        code = ErrorCode::COMPUTE_INVALID_BASE
    )]
    InvalidBase { base: u32 },

    #[error("[E{code:04}] No values to summarize", code = ErrorCode::COMPUTE_EMPTY_SAMPLE)]
    EmptySample,

    #[error(
        "[E{code:04}] Could not write results to {}",
        .path.display(),
        code = ErrorCode::OUTPUT_WRITE_FAILED
    )]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ToolError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Get the error code
    pub fn code(&self) -> u16 {
        match self {
            Self::Config { .. } => ErrorCode::CONFIG_GENERIC,
            Self::InvalidBase { .. } => ErrorCode::COMPUTE_INVALID_BASE,
            Self::EmptySample => ErrorCode::COMPUTE_EMPTY_SAMPLE,
            Self::OutputWrite { .. } => ErrorCode::OUTPUT_WRITE_FAILED,
        }
    }

    /// Get the process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::EmptySample => ExitStatus::NO_DATA,
            _ => 1,
        }
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Config { message } => format!("Configuration problem: {}", message),
            Self::InvalidBase { base } => {
                format!("Cannot convert to base {}: supported bases are 2 to 16", base)
            }
            Self::EmptySample => "No valid numbers to process.".to_string(),
            Self::OutputWrite { path, source } => {
                format!("Could not write '{}': {}", path.display(), source)
            }
        }
    }

    /// Get a developer-oriented message including the code and source chain
    pub fn developer_message(&self) -> String {
        let mut message = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            message.push_str(&format!("\n  caused by: {}", cause));
            source = cause.source();
        }
        message
    }
}

pub type Result<T> = std::result::Result<T, ToolError>;
