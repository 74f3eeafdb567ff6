//! Command-line plumbing shared by the binaries

use crate::app::{init_logging, report_fatal_error, AppConfig};
use crate::tools::ToolRun;
use clap::Args;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::{debug, warn};

/// Arguments every tool accepts
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Text file to process
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Enable verbose logging on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Run a tool against already-parsed arguments and return the exit status
///
/// Fatal errors are printed to stderr here and mapped to their exit code.
pub fn execute(args: &InputArgs, tool: ToolRun) -> i32 {
    let config = match AppConfig::new(args.verbose) {
        Ok(config) => config,
        Err(e) => return report_fatal_error(&anyhow::Error::new(e), args.verbose),
    };
    init_logging(&config);
    debug!("Processing {}", args.input.display());

    let stdout = std::io::stdout();
    let mut console = stdout.lock();
    let result = tool(&config, &args.input, &mut console);
    let flushed = console.flush();

    finish(result, flushed, config.verbose)
}

/// Combine a tool's outcome with the final console flush
///
/// Output that never reached stdout is fatal even when the tool succeeded.
fn finish(result: anyhow::Result<i32>, flushed: io::Result<()>, verbose: u8) -> i32 {
    let result = match (result, flushed) {
        (Ok(status), Ok(())) => Ok(status),
        (Ok(_), Err(e)) => {
            Err(anyhow::Error::new(e).context("Failed to flush standard output"))
        }
        (Err(e), Ok(())) => Err(e),
        (Err(e), Err(flush_err)) => {
            warn!("Failed to flush standard output: {}", flush_err);
            Err(e)
        }
    };

    match result {
        Ok(status) => status,
        Err(e) => report_fatal_error(&e, verbose),
    }
}
