//! Error types for the missive CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for missive operations.
///
/// Each variant maps to a specific exit code. The template renderer itself
/// never fails; these errors come from the validation and I/O layers around
/// it.
#[derive(Error, Debug)]
pub enum MissiveError {
    /// User provided invalid arguments or an input file could not be read.
    #[error("{0}")]
    UserError(String),

    /// Recipient address failed the format check.
    #[error("invalid recipient address: '{0}'")]
    InvalidRecipient(String),

    /// An attachment path does not exist on disk.
    #[error("attachment file not found: {}", .0.display())]
    MissingAttachment(PathBuf),
}

impl MissiveError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            MissiveError::UserError(_) => exit_codes::USER_ERROR,
            MissiveError::InvalidRecipient(_) => exit_codes::INVALID_RECIPIENT,
            MissiveError::MissingAttachment(_) => exit_codes::MISSING_ATTACHMENT,
        }
    }
}

/// Result type alias for missive operations.
pub type Result<T> = std::result::Result<T, MissiveError>;
