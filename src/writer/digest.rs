//! Listing and hashing written trees.

use std::fs;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};
use walkdir::WalkDir;

use crate::error::{Result, TestkitError};

/// Relative paths of every regular file below `root`, sorted.
pub fn list_files(root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        if let Ok(relative) = entry.path().strip_prefix(root) {
            files.push(relative.to_path_buf());
        }
    }
    files.sort();
    Ok(files)
}

/// SHA-256 over the relative path and bytes of every file below `root`.
///
/// Paths are hashed with `/` separators so the digest does not depend on
/// the host platform.
pub fn tree_digest(root: &Path) -> Result<String> {
    let mut hasher = Sha256::new();

    for relative in list_files(root)? {
        let path = root.join(&relative);
        let content = fs::read(&path).map_err(|e| TestkitError::FileReadError {
            path: path.clone(),
            source: e,
        })?;

        let name: Vec<String> = relative
            .components()
            .map(|component| component.as_os_str().to_string_lossy().to_string())
            .collect();
        hasher.update(name.join("/").as_bytes());
        hasher.update([0u8]);
        hasher.update(&content);
        hasher.update([0u8]);
    }

    Ok(format!("{:x}", hasher.finalize()))
}
