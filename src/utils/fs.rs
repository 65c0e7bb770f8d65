//! Filesystem helpers used across the pack root
//!
//! Thin wrappers over `std::fs` that attach the offending path to every
//! error so the user sees which file or directory failed.

use crate::error::{Error, Result};
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use walkdir::WalkDir;

pub fn dir_exists(path: &Path) -> bool {
    path.is_dir()
}

pub fn file_exists(path: &Path) -> bool {
    path.is_file()
}

/// Create `path` and all of its parents.
pub fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| {
        Error::Io(std::io::Error::new(
            e.kind(),
            format!("Failed to create directory {}: {}", path.display(), e),
        ))
    })
}

/// List the files directly inside `dir` whose file name matches `pattern`.
///
/// A missing directory yields an empty list. Results are sorted by path.
pub fn list_dir(dir: &Path, pattern: &Regex) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| {
            Error::Io(std::io::Error::other(format!(
                "Failed to read directory {}: {}",
                dir.display(),
                e
            )))
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        if pattern.is_match(&entry.file_name().to_string_lossy()) {
            files.push(entry.into_path());
        }
    }

    files.sort();
    Ok(files)
}

/// Move `src` to `dst`, replacing `dst` if it exists.
///
/// Falls back to copy + remove when a plain rename is not possible
/// (e.g. across filesystems).
pub fn move_file(src: &Path, dst: &Path) -> Result<()> {
    if let Some(parent) = dst.parent() {
        ensure_dir(parent)?;
    }

    if fs::rename(src, dst).is_ok() {
        return Ok(());
    }

    fs::copy(src, dst).map_err(|e| {
        Error::Io(std::io::Error::new(
            e.kind(),
            format!(
                "Failed to move {} to {}: {}",
                src.display(),
                dst.display(),
                e
            ),
        ))
    })?;
    fs::remove_file(src).map_err(|e| {
        Error::Io(std::io::Error::new(
            e.kind(),
            format!("Failed to remove {}: {}", src.display(), e),
        ))
    })
}

/// Create `path` if absent, otherwise set its modification time to now.
pub fn touch_file(path: &Path) -> Result<()> {
    let wrap = |e: std::io::Error| {
        Error::Io(std::io::Error::new(
            e.kind(),
            format!("Failed to touch {}: {}", path.display(), e),
        ))
    };

    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(wrap)?;
    file.set_modified(SystemTime::now()).map_err(wrap)
}

/// Remove a directory tree if it exists.
pub fn remove_dir_all(path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }

    fs::remove_dir_all(path).map_err(|e| {
        Error::Io(std::io::Error::new(
            e.kind(),
            format!("Failed to remove {}: {}", path.display(), e),
        ))
    })
}

/// Remove empty ancestors of `path`, stopping at (and never removing) `stop`.
pub fn remove_empty_parents(path: &Path, stop: &Path) {
    let mut current = path.parent();
    while let Some(dir) = current {
        if dir == stop || !dir.starts_with(stop) {
            break;
        }

        let is_empty = fs::read_dir(dir)
            .map(|mut entries| entries.next().is_none())
            .unwrap_or(false);
        if !is_empty || fs::remove_dir(dir).is_err() {
            break;
        }

        current = dir.parent();
    }
}
