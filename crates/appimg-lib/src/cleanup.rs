use crate::error::AppImgError;
use std::path::{Path, PathBuf};

/// Removes directories below `root` that are completely empty and returns how
/// many were removed. `root` itself is never removed.
///
/// This is a single depth-first pass over an explicit stack: a directory is
/// judged when it is popped, before its own children have been visited. A
/// directory that only holds empty subdirectories therefore survives the pass
/// even though those subdirectories are removed afterwards.
pub fn remove_empty_dirs(root: &Path) -> Result<usize, AppImgError> {
    let mut removed = 0;
    let mut pending: Vec<PathBuf> = vec![root.to_path_buf()];

    while let Some(current) = pending.pop() {
        let read_error = |e: std::io::Error| AppImgError::DirectoryRead {
            path: current.clone(),
            reason: e.to_string(),
        };

        let mut subdirectories = Vec::new();
        let mut has_files = false;
        for entry in std::fs::read_dir(&current).map_err(read_error)? {
            let entry = entry.map_err(read_error)?;
            if entry.file_type().map_err(read_error)?.is_dir() {
                subdirectories.push(entry.path());
            } else {
                has_files = true;
            }
        }

        if current != root && !has_files && subdirectories.is_empty() {
            std::fs::remove_dir(&current).map_err(|e| AppImgError::DirectoryRemoval {
                path: current.clone(),
                reason: e.to_string(),
            })?;
            tracing::debug!(path = %current.display(), "Removed empty folder");
            removed += 1;
        }

        pending.extend(subdirectories);
    }

    Ok(removed)
}
