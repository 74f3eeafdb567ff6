//! Application module
//!
//! Process-level plumbing shared by the three binaries:
//! - Configuration handling
//! - Logging setup
//! - Fatal error reporting

pub mod config;
pub mod error_handling;
pub mod logging;

// Re-export main application functions
pub use config::AppConfig;
pub use error_handling::report_fatal_error;
pub use logging::init_logging;
