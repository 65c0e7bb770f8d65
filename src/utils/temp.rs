//! Temporary download file management
//!
//! Downloads land in a uniquely named file inside the download cache and are
//! only moved to their final name once they have been validated. Anything
//! that is not persisted is deleted when the guard goes out of scope.

use crate::error::{Error, Result};
use crate::utils::fs::move_file;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// A temporary downloaded file that auto-deletes on drop.
///
/// Cleanup happens on every exit path, including early `?` returns and
/// panics, unless the file has been moved away with [`TempDownload::persist`].
#[derive(Debug)]
pub struct TempDownload {
    path: PathBuf,
}

impl TempDownload {
    /// Create an empty temporary file in `dir` and return it opened for writing.
    ///
    /// `hint` is the final file name, used as a suffix to ease debugging.
    pub fn create(dir: &Path, hint: &str) -> Result<(Self, File)> {
        let path = dir.join(generate_temp_filename(hint));
        let file = File::create(&path).map_err(|e| {
            Error::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to create {}: {}", path.display(), e),
            ))
        })?;

        Ok((Self { path }, file))
    }

    /// Get the path to the temporary file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Move the file to `dest`, disarming the cleanup.
    pub fn persist(self, dest: &Path) -> Result<()> {
        move_file(&self.path, dest)
        // `self` drops here; removing the already-moved path is a no-op
    }
}

impl Drop for TempDownload {
    fn drop(&mut self) {
        // Best-effort cleanup - don't panic if the file is already gone
        let _ = fs::remove_file(&self.path);
    }
}

/// Global counter for unique filename generation
static FILENAME_COUNTER: AtomicU32 = AtomicU32::new(0);

/// Generate a unique temporary filename.
///
/// Format: `.tmp_{timestamp}_{pid}_{counter}_{hint}`
fn generate_temp_filename(hint: &str) -> String {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis();

    let pid = std::process::id();
    let counter = FILENAME_COUNTER.fetch_add(1, Ordering::Relaxed);

    format!(".tmp_{}_{}_{}_{}", timestamp, pid, counter, hint)
}
