//! Packs: prepare, fetch, install, uninstall and purge
//!
//! A pack is named either by an archive location (local path or URL
//! ending in `.pack`/`.zip`) or by a pack id (`Vendor.Name[.Version]`).
//! Ids are resolved to a URL before fetching; see [`super::resolve`].

use super::installation::Installation;
use super::pack_info::PackInfo;
use crate::error::{Error, Result};
use crate::ui::{prompt_license, LicenseChoice};
use crate::utils::download::{download_file, file_name_from_url};
use crate::utils::fs::{ensure_dir, file_exists, list_dir, remove_dir_all, remove_empty_parents};
use crate::xml::{PdscTag, PdscXml};
use regex::Regex;
use std::fs::{self, File};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use zip::ZipArchive;

const REMOTE_SCHEMES: [&str; 3] = ["http://", "https://", "file://"];

/// Outcome of [`PackType::install`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    /// Pack contents now live in this directory
    Installed(PathBuf),
    /// Only the embedded license was saved (None if the pack has none)
    LicenseExtracted(Option<PathBuf>),
}

/// A pack as requested on the command line.
#[derive(Debug, Clone)]
pub struct PackType {
    pub tag: PdscTag,
    /// What the user typed; replaced by the download URL once resolved
    pub path: String,
    pub is_pack_id: bool,
    pub is_installed: bool,
    pub is_public: bool,
    archive: Option<PathBuf>,
}

/// Parse `input` into a pack and record whether it is installed.
///
/// Public availability is not evaluated here since it may download a
/// manifest; callers that need it call [`Installation::pack_is_public`].
pub fn prepare_pack(installation: &Installation, input: &str) -> Result<PackType> {
    let input = input.trim();
    let bad_name = || Error::BadPackName {
        name: input.to_string(),
    };

    let (info, is_pack_id) = if is_remote(input) || has_archive_extension(input) {
        let file_name = archive_file_name(input).ok_or_else(bad_name)?;
        (PackInfo::from_file_name(file_name).ok_or_else(bad_name)?, false)
    } else {
        (PackInfo::parse_id(input).ok_or_else(bad_name)?, true)
    };

    let tag = info.to_tag();
    let is_installed = installation.pack_is_installed(&tag);
    tracing::debug!(
        "Prepared \"{}\" (pack id: {}, installed: {})",
        tag.key(),
        is_pack_id,
        is_installed
    );

    Ok(PackType {
        tag,
        path: input.to_string(),
        is_pack_id,
        is_installed,
        is_public: false,
        archive: None,
    })
}

fn archive_file_name(input: &str) -> Option<&str> {
    if is_remote(input) {
        return file_name_from_url(input);
    }
    input.rsplit(['/', '\\']).next().filter(|n| !n.is_empty())
}

fn has_archive_extension(path: &str) -> bool {
    let lower = path.to_ascii_lowercase();
    lower.ends_with(".pack") || lower.ends_with(".zip")
}

fn is_remote(path: &str) -> bool {
    let lower = path.to_ascii_lowercase();
    REMOTE_SCHEMES.iter().any(|scheme| lower.starts_with(scheme))
}

impl PackType {
    pub fn key(&self) -> String {
        self.tag.key()
    }

    /// Make the archive available on disk.
    ///
    /// Remote archives land in `.Download/` under their canonical name and
    /// are reused from there when already cached. Local archives are used
    /// in place.
    pub fn fetch(&mut self, installation: &Installation) -> Result<()> {
        if self.is_pack_id || is_remote(&self.path) {
            let cached = installation.cached_pack_path(&self.tag);
            if file_exists(&cached) {
                tracing::debug!("Using cached archive {}", cached.display());
            } else {
                tracing::info!("Downloading {}", self.path);
                download_file(installation.downloader(), &self.path, &installation.download_dir)?
                    .persist(&cached)?;
            }
            self.archive = Some(cached);
            return Ok(());
        }

        let local = PathBuf::from(&self.path);
        if !file_exists(&local) {
            return Err(Error::FileNotFound { path: local });
        }
        self.archive = Some(local);
        Ok(())
    }

    /// Unpack the fetched archive into `<root>/Vendor/Name/Version/`.
    ///
    /// When the manifest declares a license and `check_eula` is set the user
    /// is asked to accept it first. With `extract_eula` the license is saved
    /// as `.Download/Vendor.Name.Version.license` and nothing is installed.
    pub fn install(
        &self,
        installation: &Installation,
        check_eula: bool,
        extract_eula: bool,
    ) -> Result<InstallOutcome> {
        let archive_path = self.archive.as_ref().ok_or_else(|| Error::InternalConsistency {
            detail: format!("\"{}\" was installed before being fetched", self.key()),
        })?;

        let file = File::open(archive_path).map_err(|e| {
            Error::Io(io::Error::new(
                e.kind(),
                format!("Failed to open {}: {}", archive_path.display(), e),
            ))
        })?;
        let mut archive = ZipArchive::new(file)
            .map_err(|e| Error::Archive(format!("{}: {}", archive_path.display(), e)))?;

        let pdsc_file_name = self.tag.pdsc_file_name();
        let prefix = find_manifest_prefix(&archive, &pdsc_file_name).ok_or_else(|| {
            Error::PdscFileNotFoundInPack {
                pack: self.key(),
                file: pdsc_file_name.clone(),
            }
        })?;

        let text = read_entry(&mut archive, &format!("{}{}", prefix, pdsc_file_name))?;
        let pdsc = PdscXml::read_str(Path::new(&pdsc_file_name), &text)?;
        if pdsc.find_release_by_version(&self.tag.version).is_none() {
            return Err(Error::VersionNotFoundInManifest {
                pack: self.key(),
                version: self.tag.version.clone(),
            });
        }

        match (&pdsc.license, extract_eula) {
            (None, true) => {
                tracing::info!("\"{}\" has no embedded license to extract", self.key());
                return Ok(InstallOutcome::LicenseExtracted(None));
            }
            (Some(license), true) => {
                let text = read_entry(&mut archive, &format!("{}{}", prefix, license))?;
                let saved = self.save_license(installation, &text)?;
                return Ok(InstallOutcome::LicenseExtracted(Some(saved)));
            }
            (Some(license), false) if check_eula => {
                let text = read_entry(&mut archive, &format!("{}{}", prefix, license))?;
                match prompt_license(&self.key(), &text) {
                    LicenseChoice::Accept => {}
                    LicenseChoice::Decline => {
                        return Err(Error::LicenseNotAccepted { pack: self.key() })
                    }
                    LicenseChoice::Extract => {
                        let saved = self.save_license(installation, &text)?;
                        return Ok(InstallOutcome::LicenseExtracted(Some(saved)));
                    }
                }
            }
            _ => {}
        }

        let destination = installation.installed_dir(&self.tag);
        tracing::info!("Extracting files to {}", destination.display());
        if let Err(e) = extract(&mut archive, &prefix, &destination) {
            // Never leave a half-installed pack behind
            let _ = remove_dir_all(&destination);
            remove_empty_parents(&destination, &installation.pack_root);
            return Err(e);
        }

        Ok(InstallOutcome::Installed(destination))
    }

    fn save_license(&self, installation: &Installation, text: &str) -> Result<PathBuf> {
        let path = installation
            .download_dir
            .join(format!("{}.license", self.tag.key()));
        fs::write(&path, text).map_err(|e| {
            Error::Io(io::Error::new(
                e.kind(),
                format!("Failed to write {}: {}", path.display(), e),
            ))
        })?;
        tracing::info!("License extracted to {}", path.display());
        Ok(path)
    }

    /// Remove the installed files; with an empty version every installed
    /// version goes.
    pub fn uninstall(&self, installation: &Installation) -> Result<()> {
        let dir = if self.tag.version.is_empty() {
            installation.pack_root.join(&self.tag.vendor).join(&self.tag.name)
        } else {
            installation.installed_dir(&self.tag)
        };

        tracing::debug!("Removing {}", dir.display());
        remove_dir_all(&dir)?;
        remove_empty_parents(&dir, &installation.pack_root);
        Ok(())
    }

    /// Delete cached archives and extracted licenses of this pack.
    pub fn purge(&self, installation: &Installation) -> Result<()> {
        let version = if self.tag.version.is_empty() {
            r"\d+\.\d+\.\d+[0-9A-Za-z.+-]*".to_string()
        } else {
            regex::escape(&self.tag.version)
        };
        let pattern = Regex::new(&format!(
            r"^{}\.{}\.{}\.(?:pack|license)$",
            regex::escape(&self.tag.vendor),
            regex::escape(&self.tag.name),
            version
        ))
        .map_err(|e| Error::InternalConsistency {
            detail: format!("purge pattern for \"{}\": {}", self.key(), e),
        })?;

        let files = list_dir(&installation.download_dir, &pattern)?;
        if files.is_empty() {
            return Err(Error::PackNotPurgeable { pack: self.key() });
        }

        for file in files {
            tracing::debug!("Purging {}", file.display());
            fs::remove_file(&file).map_err(|e| {
                Error::Io(io::Error::new(
                    e.kind(),
                    format!("Failed to remove {}: {}", file.display(), e),
                ))
            })?;
        }
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn archive(&self) -> Option<&Path> {
        self.archive.as_deref()
    }
}

/// `""` if the manifest sits at the archive root, `"Folder/"` if it sits
/// inside exactly one top-level folder.
fn find_manifest_prefix<R: Read + io::Seek>(
    archive: &ZipArchive<R>,
    pdsc_file_name: &str,
) -> Option<String> {
    let mut nested = None;
    for name in archive.file_names() {
        if name == pdsc_file_name {
            return Some(String::new());
        }
        if let Some((folder, file)) = name.split_once('/') {
            if file == pdsc_file_name && !folder.is_empty() {
                nested = Some(format!("{}/", folder));
            }
        }
    }
    nested
}

fn read_entry<R: Read + io::Seek>(archive: &mut ZipArchive<R>, name: &str) -> Result<String> {
    let mut entry = archive
        .by_name(name)
        .map_err(|e| Error::Archive(format!("{}: {}", name, e)))?;
    let mut text = String::new();
    entry
        .read_to_string(&mut text)
        .map_err(|e| Error::Archive(format!("Failed to read {}: {}", name, e)))?;
    Ok(text)
}

fn extract<R: Read + io::Seek>(
    archive: &mut ZipArchive<R>,
    prefix: &str,
    destination: &Path,
) -> Result<()> {
    ensure_dir(destination)?;
    let prefix_path = Path::new(prefix.trim_end_matches('/'));

    for i in 0..archive.len() {
        let mut entry = archive
            .by_index(i)
            .map_err(|e| Error::Archive(format!("Failed to read entry {}: {}", i, e)))?;

        let Some(enclosed) = entry.enclosed_name().map(|p| p.to_path_buf()) else {
            tracing::warn!("Skipping unsafe archive entry \"{}\"", entry.name());
            continue;
        };
        let Ok(relative) = enclosed.strip_prefix(prefix_path) else {
            continue;
        };
        if relative.as_os_str().is_empty() {
            continue;
        }

        let target = destination.join(relative);
        if entry.is_dir() {
            ensure_dir(&target)?;
            continue;
        }

        if let Some(parent) = target.parent() {
            ensure_dir(parent)?;
        }
        let mut out = File::create(&target).map_err(|e| {
            Error::Io(io::Error::new(
                e.kind(),
                format!("Failed to create {}: {}", target.display(), e),
            ))
        })?;
        io::copy(&mut entry, &mut out)
            .map_err(|e| Error::Archive(format!("Failed to extract {}: {}", target.display(), e)))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::installer::test_support::{fake_installation, pack_bytes, pdsc_text, write_pack};
    use crate::utils::download::testing::FakeDownloader;

    fn cmsis_files(license: Option<&str>) -> Vec<(&'static str, String)> {
        let mut files = vec![
            (
                "ARM.CMSIS.pdsc",
                pdsc_text("ARM", "CMSIS", "https://packs.example/", &["5.9.0"], license),
            ),
            ("Include/core.h", "#define CORE 1\n".to_string()),
        ];
        if license.is_some() {
            files.push(("LICENSE.txt", "Be nice.\n".to_string()));
        }
        files
    }

    fn as_refs<'a>(files: &'a [(&'static str, String)]) -> Vec<(&'static str, &'a str)> {
        files.iter().map(|(n, c)| (*n, c.as_str())).collect()
    }

    #[test]
    fn test_prepare_pack_id() {
        let (_temp, installation) = fake_installation(FakeDownloader::new());

        let pack = prepare_pack(&installation, "ARM.CMSIS.5.9.0").unwrap();
        assert!(pack.is_pack_id);
        assert!(!pack.is_installed);
        assert_eq!(pack.key(), "ARM.CMSIS.5.9.0");

        let bare = prepare_pack(&installation, "ARM.CMSIS").unwrap();
        assert_eq!(bare.tag.version, "");
    }

    #[test]
    fn test_prepare_pack_file_and_url() {
        let (_temp, installation) = fake_installation(FakeDownloader::new());

        let local = prepare_pack(&installation, "/tmp/dl/ARM.CMSIS.5.9.0.pack").unwrap();
        assert!(!local.is_pack_id);
        assert_eq!(local.key(), "ARM.CMSIS.5.9.0");

        let remote =
            prepare_pack(&installation, "https://x.example/p/Keil.MDK.1.0.0.zip?x=1").unwrap();
        assert_eq!(remote.key(), "Keil.MDK.1.0.0");
        assert!(!remote.is_pack_id);

        let fragment =
            prepare_pack(&installation, "HTTPS://x.example/p/Keil.MDK.1.0.0.pack#top").unwrap();
        assert!(!fragment.is_pack_id);
        assert_eq!(fragment.key(), "Keil.MDK.1.0.0");
    }

    #[test]
    fn test_prepare_pack_bad_names() {
        let (_temp, installation) = fake_installation(FakeDownloader::new());

        for input in ["CMSIS", "ARM.CMSIS.pack", "ARM.CMSIS.v5", "https://x.example/"] {
            let err = prepare_pack(&installation, input).unwrap_err();
            assert!(matches!(err, Error::BadPackName { .. }), "{input}: {err}");
        }
    }

    #[test]
    fn test_fetch_missing_local_file() {
        let (temp, installation) = fake_installation(FakeDownloader::new());
        let path = temp.path().join("ARM.CMSIS.5.9.0.pack");

        let mut pack = prepare_pack(&installation, path.to_str().unwrap()).unwrap();
        let err = pack.fetch(&installation).unwrap_err();

        assert!(matches!(err, Error::FileNotFound { .. }));
    }

    #[test]
    fn test_fetch_remote_goes_to_download_cache() {
        let url = "https://x.example/ARM.CMSIS.5.9.0.pack";
        let files = cmsis_files(None);
        let fake = FakeDownloader::new().with_file(url, pack_bytes(&as_refs(&files)));
        let requests = fake.requests();
        let (_temp, installation) = fake_installation(fake);

        let mut pack = prepare_pack(&installation, url).unwrap();
        pack.fetch(&installation).unwrap();

        let cached = installation.download_dir.join("ARM.CMSIS.5.9.0.pack");
        assert_eq!(pack.archive(), Some(cached.as_path()));
        assert!(cached.is_file());
        // Only the cached archive remains, no temporary files
        assert_eq!(fs::read_dir(&installation.download_dir).unwrap().count(), 1);

        // A second fetch reuses the cache
        let mut again = prepare_pack(&installation, url).unwrap();
        again.fetch(&installation).unwrap();
        assert_eq!(requests.borrow().len(), 1);
    }

    #[test]
    fn test_fetch_failure_leaves_no_temp_files() {
        let (_temp, installation) = fake_installation(FakeDownloader::new());

        let mut pack = prepare_pack(&installation, "https://x.example/ARM.CMSIS.5.9.0.pack")
            .unwrap();
        assert!(matches!(pack.fetch(&installation), Err(Error::Network(_))));
        assert_eq!(fs::read_dir(&installation.download_dir).unwrap().count(), 0);
    }

    #[test]
    fn test_install_local_pack() {
        let (temp, installation) = fake_installation(FakeDownloader::new());
        let files = cmsis_files(None);
        let path = write_pack(&temp.path().join("ARM.CMSIS.5.9.0.pack"), &as_refs(&files));

        let mut pack = prepare_pack(&installation, path.to_str().unwrap()).unwrap();
        pack.fetch(&installation).unwrap();
        let outcome = pack.install(&installation, true, false).unwrap();

        let dir = installation.pack_root.join("ARM/CMSIS/5.9.0");
        assert_eq!(outcome, InstallOutcome::Installed(dir.clone()));
        assert!(dir.join("ARM.CMSIS.pdsc").is_file());
        assert_eq!(
            fs::read_to_string(dir.join("Include/core.h")).unwrap(),
            "#define CORE 1\n"
        );
        assert!(installation.pack_is_installed(&pack.tag));
    }

    #[test]
    fn test_install_from_single_top_level_folder() {
        let (temp, installation) = fake_installation(FakeDownloader::new());
        let manifest = pdsc_text("ARM", "CMSIS", "https://packs.example/", &["5.9.0"], None);
        let path = write_pack(
            &temp.path().join("ARM.CMSIS.5.9.0.pack"),
            &[
                ("CMSIS-5.9.0/", ""),
                ("CMSIS-5.9.0/ARM.CMSIS.pdsc", manifest.as_str()),
                ("CMSIS-5.9.0/Doc/readme.txt", "hi"),
            ],
        );

        let mut pack = prepare_pack(&installation, path.to_str().unwrap()).unwrap();
        pack.fetch(&installation).unwrap();
        pack.install(&installation, false, false).unwrap();

        let dir = installation.pack_root.join("ARM/CMSIS/5.9.0");
        assert!(dir.join("ARM.CMSIS.pdsc").is_file());
        assert!(dir.join("Doc/readme.txt").is_file());
        assert!(!dir.join("CMSIS-5.9.0").exists());
    }

    #[test]
    fn test_install_without_manifest_fails() {
        let (temp, installation) = fake_installation(FakeDownloader::new());
        let path = write_pack(
            &temp.path().join("ARM.CMSIS.5.9.0.pack"),
            &[("readme.txt", "no manifest")],
        );

        let mut pack = prepare_pack(&installation, path.to_str().unwrap()).unwrap();
        pack.fetch(&installation).unwrap();
        let err = pack.install(&installation, false, false).unwrap_err();

        assert!(matches!(err, Error::PdscFileNotFoundInPack { .. }));
        assert!(!installation.pack_root.join("ARM").exists());
    }

    #[test]
    fn test_install_version_not_in_manifest() {
        let (temp, installation) = fake_installation(FakeDownloader::new());
        let files = cmsis_files(None);
        let path = write_pack(&temp.path().join("ARM.CMSIS.6.0.0.pack"), &as_refs(&files));

        let mut pack = prepare_pack(&installation, path.to_str().unwrap()).unwrap();
        pack.fetch(&installation).unwrap();
        let err = pack.install(&installation, false, false).unwrap_err();

        assert!(matches!(err, Error::VersionNotFoundInManifest { .. }));
    }

    #[test]
    fn test_install_corrupt_archive() {
        let (temp, installation) = fake_installation(FakeDownloader::new());
        let path = temp.path().join("ARM.CMSIS.5.9.0.pack");
        fs::write(&path, "not a zip").unwrap();

        let mut pack = prepare_pack(&installation, path.to_str().unwrap()).unwrap();
        pack.fetch(&installation).unwrap();

        assert!(matches!(
            pack.install(&installation, false, false),
            Err(Error::Archive(_))
        ));
    }

    #[test]
    fn test_extract_license_installs_nothing() {
        let (temp, installation) = fake_installation(FakeDownloader::new());
        let files = cmsis_files(Some("LICENSE.txt"));
        let path = write_pack(&temp.path().join("ARM.CMSIS.5.9.0.pack"), &as_refs(&files));

        let mut pack = prepare_pack(&installation, path.to_str().unwrap()).unwrap();
        pack.fetch(&installation).unwrap();
        let outcome = pack.install(&installation, true, true).unwrap();

        let license = installation.download_dir.join("ARM.CMSIS.5.9.0.license");
        assert_eq!(outcome, InstallOutcome::LicenseExtracted(Some(license.clone())));
        assert_eq!(fs::read_to_string(license).unwrap(), "Be nice.\n");
        assert!(!installation.pack_root.join("ARM").exists());
    }

    #[test]
    fn test_extract_without_license() {
        let (temp, installation) = fake_installation(FakeDownloader::new());
        let files = cmsis_files(None);
        let path = write_pack(&temp.path().join("ARM.CMSIS.5.9.0.pack"), &as_refs(&files));

        let mut pack = prepare_pack(&installation, path.to_str().unwrap()).unwrap();
        pack.fetch(&installation).unwrap();

        assert_eq!(
            pack.install(&installation, false, true).unwrap(),
            InstallOutcome::LicenseExtracted(None)
        );
        assert!(!installation.pack_root.join("ARM").exists());
    }

    #[test]
    fn test_license_ignored_when_not_checked() {
        let (temp, installation) = fake_installation(FakeDownloader::new());
        let files = cmsis_files(Some("LICENSE.txt"));
        let path = write_pack(&temp.path().join("ARM.CMSIS.5.9.0.pack"), &as_refs(&files));

        let mut pack = prepare_pack(&installation, path.to_str().unwrap()).unwrap();
        pack.fetch(&installation).unwrap();

        assert!(matches!(
            pack.install(&installation, false, false).unwrap(),
            InstallOutcome::Installed(_)
        ));
    }

    #[test]
    fn test_uninstall_prunes_empty_parents() {
        let (_temp, installation) = fake_installation(FakeDownloader::new());
        let dir = installation.pack_root.join("ARM/CMSIS/5.9.0");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("ARM.CMSIS.pdsc"), "").unwrap();

        let pack = prepare_pack(&installation, "ARM.CMSIS.5.9.0").unwrap();
        pack.uninstall(&installation).unwrap();

        assert!(!installation.pack_root.join("ARM").exists());
        assert!(installation.pack_root.is_dir());
    }

    #[test]
    fn test_uninstall_keeps_other_versions() {
        let (_temp, installation) = fake_installation(FakeDownloader::new());
        fs::create_dir_all(installation.pack_root.join("ARM/CMSIS/5.9.0")).unwrap();
        fs::create_dir_all(installation.pack_root.join("ARM/CMSIS/5.8.0")).unwrap();

        let pack = prepare_pack(&installation, "ARM.CMSIS.5.9.0").unwrap();
        pack.uninstall(&installation).unwrap();

        assert!(installation.pack_root.join("ARM/CMSIS/5.8.0").is_dir());
    }

    #[test]
    fn test_purge_specific_version() {
        let (_temp, installation) = fake_installation(FakeDownloader::new());
        let download = &installation.download_dir;
        fs::write(download.join("ARM.CMSIS.5.9.0.pack"), "").unwrap();
        fs::write(download.join("ARM.CMSIS.5.9.0.license"), "").unwrap();
        fs::write(download.join("ARM.CMSIS.5.8.0.pack"), "").unwrap();

        let pack = prepare_pack(&installation, "ARM.CMSIS.5.9.0").unwrap();
        pack.purge(&installation).unwrap();

        assert!(!download.join("ARM.CMSIS.5.9.0.pack").exists());
        assert!(!download.join("ARM.CMSIS.5.9.0.license").exists());
        assert!(download.join("ARM.CMSIS.5.8.0.pack").exists());
    }

    #[test]
    fn test_purge_all_versions() {
        let (_temp, installation) = fake_installation(FakeDownloader::new());
        let download = &installation.download_dir;
        fs::write(download.join("ARM.CMSIS.5.9.0.pack"), "").unwrap();
        fs::write(download.join("ARM.CMSIS.5.8.0.pack"), "").unwrap();
        fs::write(download.join("ARM.CMSIS_Driver.1.0.0.pack"), "").unwrap();

        let pack = prepare_pack(&installation, "ARM.CMSIS").unwrap();
        pack.purge(&installation).unwrap();

        assert!(!download.join("ARM.CMSIS.5.9.0.pack").exists());
        assert!(!download.join("ARM.CMSIS.5.8.0.pack").exists());
        assert!(download.join("ARM.CMSIS_Driver.1.0.0.pack").exists());
    }

    #[test]
    fn test_purge_nothing_cached() {
        let (_temp, installation) = fake_installation(FakeDownloader::new());
        let pack = prepare_pack(&installation, "ARM.CMSIS.5.9.0").unwrap();

        assert!(matches!(
            pack.purge(&installation),
            Err(Error::PackNotPurgeable { .. })
        ));
    }
}
