//! Error handling utilities

use crate::error::{describe_error_code, ToolError};
use std::io::Write;
use tracing::error;

/// Print a fatal error to stderr and return the exit code it maps to
///
/// - For `ToolError`: shows the user message, plus the error code and the
///   coded developer message in verbose mode, and returns the error's own status
/// - For other errors: shows the message (and chain when verbose) and returns 1
pub fn report_fatal_error(error: &anyhow::Error, verbose: u8) -> i32 {
    write_fatal_error(&mut std::io::stderr(), error, verbose)
}

fn write_fatal_error(out: &mut dyn Write, error: &anyhow::Error, verbose: u8) -> i32 {
    error!("Fatal error: {:#}", error);

    if let Some(tool_err) = error.downcast_ref::<ToolError>() {
        let _ = writeln!(out, "{}", tool_err.user_message());

        if verbose >= 1 {
            let code = tool_err.code();
            let _ = writeln!(out, "\nError code E{:04}: {}", code, describe_error_code(code));
            let _ = writeln!(out, "\nContext Chain:\n{}", tool_err.developer_message());
        }

        tool_err.exit_code()
    } else {
        let _ = writeln!(out, "Error: {error}");

        if verbose >= 1 {
            let _ = writeln!(out, "\nError chain:");
            for (i, cause) in error.chain().enumerate() {
                let _ = writeln!(out, "  {}: {}", i, cause);
            }
        }

        1
    }
}
