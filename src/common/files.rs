//! Utilities for file operations with automatic parent directory creation.

use anyhow::Result;
use std::fs;
use std::path::Path;

/// Write a file, creating parent directories as needed.
///
/// Combines creating the parent directory with writing the file content,
/// eliminating the common pattern of:
/// ```ignore
/// if let Some(parent) = path.parent() {
///     fs::create_dir_all(parent)?;
/// }
/// fs::write(path, content)?;
/// ```
pub fn write_file_with_dirs<P: AsRef<Path>, C: AsRef<[u8]>>(path: P, content: C) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}

/// Copy a single file, creating the destination's parent directories.
pub fn copy_file_with_dirs<P: AsRef<Path>, Q: AsRef<Path>>(from: P, to: Q) -> Result<()> {
    let to = to.as_ref();
    if let Some(parent) = to.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::copy(from.as_ref(), to)?;
    Ok(())
}
