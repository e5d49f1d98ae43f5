//! Process exit statuses shared by the binaries.

/// No diagnostics, nothing to check, or the checker is not installed.
pub const SUCCESS: i32 = 0;
/// At least one file produced diagnostics, or a clean target survived.
pub const FAILURE: i32 = 1;
pub const ERROR: i32 = 2;
/// Terminated by a signal after cleanup ran.
pub const INTERRUPTED: i32 = 130;
