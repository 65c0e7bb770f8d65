//! Manifests registered from local files
//!
//! Registering a `.pdsc` makes its pack known to the local index without
//! installing anything. The entry records the `file://` URL of the
//! directory holding the manifest; nothing resolves archives through it.
//! Unregistering goes by the `Vendor.Name.pdsc` file name alone, so it
//! works after the manifest changed or was deleted.

use super::installation::Installation;
use super::pack_info::PackInfo;
use crate::error::{Error, Result};
use crate::utils::fs::file_exists;
use crate::xml::{PdscTag, PdscXml};
use reqwest::Url;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct PdscType {
    pub tag: PdscTag,
    pub path: PathBuf,
}

/// Read the manifest at `input` and build its local index entry.
pub fn prepare_pdsc(input: &str) -> Result<PdscType> {
    let path = PathBuf::from(input.trim());
    if !file_exists(&path) {
        return Err(Error::FileNotFound { path });
    }
    let path = std::path::absolute(&path)?;

    let mut pdsc = PdscXml::new(&path);
    pdsc.read()?;

    let mut tag = pdsc.to_tag();
    tag.url = directory_url(&path)?;

    Ok(PdscType { tag, path })
}

/// Remove the local index entry (in memory) for the manifest named by
/// `input`, whatever version it was registered with.
pub fn unregister_pdsc(installation: &mut Installation, input: &str) -> Result<PdscTag> {
    let input = input.trim();
    let info = Path::new(input)
        .file_name()
        .and_then(|n| n.to_str())
        .and_then(PackInfo::from_pdsc_file_name)
        .ok_or_else(|| Error::BadPackName {
            name: input.to_string(),
        })?;

    let local = installation.local_pidx()?;
    let key = local
        .find_pdsc_tag(&info.vendor, &info.name)
        .map(|tag| tag.key())
        .ok_or_else(|| Error::PdscEntryNotFound {
            key: format!("{}.{}", info.vendor, info.name),
        })?;

    tracing::debug!("Unregistering \"{}\"", key);
    local.remove_pdsc(&key)
}

/// `file://` URL of the directory containing `path`, with a trailing slash.
fn directory_url(path: &Path) -> Result<String> {
    let dir = path.parent().unwrap_or(path);
    Url::from_directory_path(dir)
        .map(|u| u.to_string())
        .map_err(|_| Error::InternalConsistency {
            detail: format!("cannot express {} as a file URL", dir.display()),
        })
}

impl PdscType {
    pub fn key(&self) -> String {
        self.tag.key()
    }

    /// Add the entry to the local index (in memory).
    pub fn install(&self, installation: &mut Installation) -> Result<()> {
        tracing::debug!("Registering \"{}\" from {}", self.key(), self.path.display());
        installation.local_pidx()?.add_pdsc(self.tag.clone())
    }

}
