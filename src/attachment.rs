//! Attachment validation.
//!
//! Attachments are local files referenced by path. Delivery is simulated,
//! so the only requirement is that each path exists when the message is
//! assembled. The check is synchronous and runs before any rendering.

use crate::error::{MissiveError, Result};
use std::path::{Path, PathBuf};

/// Check whether a single attachment path exists.
pub fn attachment_exists(path: &Path) -> bool {
    path.exists()
}

/// Verify every attachment path, in order.
///
/// Fails on the first missing path with `MissingAttachment` naming it.
/// An empty list passes.
pub fn verify_attachments(paths: &[PathBuf]) -> Result<()> {
    for path in paths {
        if !attachment_exists(path) {
            return Err(MissiveError::MissingAttachment(path.clone()));
        }
    }
    Ok(())
}
