//! Turning a pack id into a download URL

use super::installation::Installation;
use super::pack::PackType;
use crate::error::{Error, Result};
use crate::utils::fs::file_exists;
use crate::xml::{PdscXml, ReleaseTag};

/// Find the archive URL of a pack named by id.
///
/// Public packs are looked up in their cached manifest under `.Web/`,
/// everything else in a manifest registered under `.Local/`. An empty
/// version selects the latest release and is filled in on `pack`.
pub fn find_pack_url(installation: &Installation, pack: &mut PackType) -> Result<String> {
    if !pack.is_pack_id {
        return Err(Error::InternalConsistency {
            detail: format!("\"{}\" is not a pack id", pack.path),
        });
    }

    tracing::debug!("Finding URL for \"{}\"", pack.key());
    let pdsc_file_name = pack.tag.pdsc_file_name();

    if pack.is_public {
        let mut pdsc = PdscXml::new(installation.web_dir.join(&pdsc_file_name));
        pdsc.read()?;

        let release = pdsc
            .find_release_by_version(&pack.tag.version)
            .ok_or_else(|| Error::InternalConsistency {
                detail: format!(
                    "public manifest {} has no release {}",
                    pdsc.path().display(),
                    pack.tag.version
                ),
            })?;

        if pack.tag.version.is_empty() {
            pack.tag.version = release.version.clone();
        }
        return Ok(release_url(&pdsc, release));
    }

    let local_path = installation.local_dir.join(&pdsc_file_name);
    if !file_exists(&local_path) {
        return Err(Error::UrlCannotBeFound { pack: pack.key() });
    }

    let mut pdsc = PdscXml::new(local_path);
    pdsc.read()?;

    let release = pdsc
        .find_release_by_version(&pack.tag.version)
        .ok_or_else(|| Error::VersionNotFoundInManifest {
            pack: pack.key(),
            version: pack.tag.version.clone(),
        })?;

    pack.tag.version = release.version.clone();
    Ok(release_url(&pdsc, release))
}

/// Explicit release URL, or the manifest's base URL + archive name.
fn release_url(pdsc: &PdscXml, release: &ReleaseTag) -> String {
    if release.url.is_empty() {
        pdsc.pack_url(&release.version)
    } else {
        release.url.clone()
    }
}
