//! Pack root operations invoked by the command line
//!
//! Each operation works on an already initialized [`Installation`] and
//! touches `pack.idx` whenever it changed what is installed or registered.

use super::installation::Installation;
use super::pack::{prepare_pack, InstallOutcome};
use super::pdsc::{prepare_pdsc, unregister_pdsc};
use super::resolve::find_pack_url;
use crate::error::{Error, Result};
use crate::utils::download::download_file;
use crate::utils::fs::file_exists;
use crate::xml::PidxXml;

/// Install a pack given by file, URL or id.
///
/// With `extract_eula` only the embedded license is saved. Packs already
/// installed are rejected before anything is written.
pub fn add_pack(
    installation: &mut Installation,
    pack_path: &str,
    check_eula: bool,
    extract_eula: bool,
) -> Result<InstallOutcome> {
    tracing::info!("Adding pack \"{}\"", pack_path);

    let mut pack = prepare_pack(installation, pack_path)?;

    if pack.is_installed && !extract_eula {
        return Err(Error::AlreadyInstalled {
            pack: pack.key(),
            path: installation.installed_dir(&pack.tag),
        });
    }

    if pack.is_pack_id {
        pack.is_public = installation.pack_is_public(&pack.tag)?;
        pack.path = find_pack_url(installation, &mut pack)?;
        tracing::debug!("Resolved \"{}\" to {}", pack.key(), pack.path);

        // A bare id may have resolved to an installed version
        if !extract_eula && installation.pack_is_installed(&pack.tag) {
            return Err(Error::AlreadyInstalled {
                pack: pack.key(),
                path: installation.installed_dir(&pack.tag),
            });
        }
    }

    pack.fetch(installation)?;

    let outcome = pack.install(installation, check_eula, extract_eula)?;
    if let InstallOutcome::Installed(_) = outcome {
        installation.touch_pack_idx()?;
        tracing::info!("Installed \"{}\"", pack.key());
    }

    Ok(outcome)
}

/// Uninstall a pack; with `purge` its cached archive is deleted as well.
///
/// A pack that is not installed can still be purged.
pub fn remove_pack(installation: &mut Installation, pack_path: &str, purge: bool) -> Result<()> {
    tracing::info!("Removing pack \"{}\"", pack_path);

    let pack = prepare_pack(installation, pack_path)?;

    if !pack.is_installed {
        if purge {
            return pack.purge(installation);
        }
        return Err(Error::NotInstalled { pack: pack.key() });
    }

    pack.uninstall(installation)?;

    if purge {
        match pack.purge(installation) {
            Ok(()) | Err(Error::PackNotPurgeable { .. }) => {}
            Err(e) => return Err(e),
        }
    }

    installation.touch_pack_idx()
}

/// Register a local manifest in the local index.
pub fn add_pdsc(installation: &mut Installation, pdsc_path: &str) -> Result<()> {
    tracing::info!("Adding pdsc \"{}\"", pdsc_path);

    let pdsc = prepare_pdsc(pdsc_path)?;
    pdsc.install(installation)?;
    installation.local_pidx()?.write()?;
    installation.touch_pack_idx()
}

/// Remove a local manifest from the local index.
pub fn remove_pdsc(installation: &mut Installation, pdsc_path: &str) -> Result<()> {
    tracing::info!("Removing pdsc \"{}\"", pdsc_path);

    unregister_pdsc(installation, pdsc_path)?;
    installation.local_pidx()?.write()?;
    installation.touch_pack_idx()
}

/// Replace the public index with the one served at `index_url`.
///
/// Only `https://` is accepted. An existing index is kept unless
/// `overwrite` is set. The download is validated before it replaces
/// anything.
pub fn update_public_index(
    installation: &mut Installation,
    index_url: &str,
    overwrite: bool,
) -> Result<()> {
    tracing::info!("Updating public index");

    if !index_url.to_ascii_lowercase().starts_with("https://") {
        return Err(Error::UnsafeIndexPath {
            url: index_url.to_string(),
        });
    }

    if file_exists(&installation.public_index) {
        if !overwrite {
            return Err(Error::CannotOverwrite {
                path: installation.public_index.clone(),
            });
        }
        tracing::info!("Overwriting public index {}", installation.public_index.display());
    }

    tracing::info!("Downloading {}", index_url);
    let download = download_file(installation.downloader(), index_url, &installation.download_dir)?;

    let mut candidate = PidxXml::new(download.path());
    candidate.read()?;
    tracing::debug!("Downloaded index lists {} pack(s)", candidate.entries().len());

    download.persist(&installation.public_index)?;
    installation.reload_public_index()
}
