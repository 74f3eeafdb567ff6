//! Application configuration
//!
//! The tools take no configuration files or environment variables; this
//! only carries what the command line and the process environment decide.

use crate::error::ToolError;
use std::path::{Path, PathBuf};

/// Application configuration structure
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Verbosity level for logging
    pub verbose: u8,
    /// Directory the results file is written into
    pub working_dir: PathBuf,
}

impl AppConfig {
    /// Create a new application configuration rooted at the current directory
    pub fn new(verbose: u8) -> Result<Self, ToolError> {
        let working_dir = std::env::current_dir().map_err(|e| {
            ToolError::config(format!("Failed to get current directory: {}", e))
        })?;

        Ok(Self {
            verbose,
            working_dir,
        })
    }

    /// Set the working directory
    pub fn with_working_dir(mut self, dir: PathBuf) -> Self {
        self.working_dir = dir;
        self
    }

    /// Full path of a results file inside the working directory
    pub fn output_path(&self, file_name: impl AsRef<Path>) -> PathBuf {
        self.working_dir.join(file_name)
    }

    /// Get the log filter directive based on verbosity
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            verbose: 0,
            working_dir: PathBuf::from("."),
        }
    }
}
