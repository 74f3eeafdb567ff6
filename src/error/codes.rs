/// Error code registry for tally
///
/// Error codes are organized by category:
/// - 1000-1999: Configuration errors
/// - 3000-3999: Output errors
/// - 4000-4999: Computation errors
pub struct ErrorCode;

impl ErrorCode {
    // Configuration errors (1000-1999)
    pub const CONFIG_GENERIC: u16 = 1000;

    // Output errors (3000-3999)
    pub const OUTPUT_WRITE_FAILED: u16 = 3001;

    // Computation errors (4000-4999)
    pub const COMPUTE_EMPTY_SAMPLE: u16 = 4001;
    pub const COMPUTE_INVALID_BASE: u16 = 4002;
}

/// Process exit statuses shared by every tool
pub struct ExitStatus;

impl ExitStatus {
    /// Report produced, possibly with skipped lines
    pub const SUCCESS: i32 = 0;
    /// Nothing usable in the input (statistics tool only)
    pub const NO_DATA: i32 = 1;
    /// Wrong number of arguments
    pub const USAGE: i32 = 2;
}

/// Get a human-readable description for an error code
pub fn describe_error_code(code: u16) -> &'static str {
    match code {
        ErrorCode::CONFIG_GENERIC => "General configuration error",
        ErrorCode::OUTPUT_WRITE_FAILED => "Results file could not be written",
        ErrorCode::COMPUTE_EMPTY_SAMPLE => "Statistic requested over an empty sample",
        ErrorCode::COMPUTE_INVALID_BASE => "Conversion base outside 2..=16",
        _ => "Unknown error",
    }
}
