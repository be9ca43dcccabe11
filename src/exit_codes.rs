//! Exit code constants for the missive CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unreadable input)
//! - 2: Invalid recipient address
//! - 3: Missing attachment file

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or an input file that could not be read/parsed.
pub const USER_ERROR: i32 = 1;

/// Recipient address failed the format check.
pub const INVALID_RECIPIENT: i32 = 2;

/// An attachment path does not exist on disk.
pub const MISSING_ATTACHMENT: i32 = 3;
