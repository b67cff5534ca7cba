//! Process exit codes. Part of the CLI contract.

pub const SUCCESS: i32 = 0;
pub const REJECTED: i32 = 1; // Unknown algorithm or invalid/oversized input
pub const INTERNAL_ERROR: i32 = 2; // Config error, I/O failure, failed trace verification
