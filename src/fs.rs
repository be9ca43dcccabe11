//! Atomic file output.
//!
//! `--out` targets are written via temp-file-then-rename so an interrupted
//! write never leaves a partial file behind. The temporary file lives in
//! the same directory as the target, keeping the rename on one filesystem.

use crate::error::{MissiveError, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

/// Atomically write a string to a file.
///
/// Content is written to a `.{filename}.tmp` sibling, synced to disk, and
/// then renamed over the target. Parent directories are created as needed.
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| {
            MissiveError::UserError(format!(
                "failed to create parent directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    let file_name = path.file_name().and_then(|n| n.to_str()).ok_or_else(|| {
        MissiveError::UserError(format!("invalid output path '{}'", path.display()))
    })?;
    let temp_path = path.with_file_name(format!(".{}.tmp", file_name));

    let mut file = File::create(&temp_path).map_err(|e| {
        MissiveError::UserError(format!(
            "failed to create temporary file '{}': {}",
            temp_path.display(),
            e
        ))
    })?;

    file.write_all(content.as_bytes()).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        MissiveError::UserError(format!("failed to write output: {}", e))
    })?;

    file.sync_all().map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        MissiveError::UserError(format!("failed to sync output to disk: {}", e))
    })?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        MissiveError::UserError(format!("failed to replace '{}': {}", path.display(), e))
    })
}
