//! The pack root and everything derived from it
//!
//! Layout under the root:
//!
//! ```text
//! <root>/
//! ├── .Download/               cached archives (Vendor.Name.Version.pack)
//! ├── .Local/
//! │   └── local_repository.pidx  manifests registered from local files
//! ├── .Web/
//! │   ├── index.pidx            public index
//! │   └── Vendor.Name.pdsc      cached public manifests
//! ├── Vendor/Name/Version/     installed packs
//! └── pack.idx                 change signal (only its mtime matters)
//! ```

use crate::error::{Error, Result};
use crate::utils::download::{download_file, Downloader};
use crate::utils::fs::{dir_exists, ensure_dir, file_exists, list_dir, touch_file};
use crate::xml::{PdscTag, PidxXml};
use regex::Regex;
use reqwest::Url;
use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

pub const DOWNLOAD_DIR: &str = ".Download";
pub const LOCAL_DIR: &str = ".Local";
pub const WEB_DIR: &str = ".Web";
pub const PUBLIC_INDEX_FILE: &str = "index.pidx";
pub const LOCAL_INDEX_FILE: &str = "local_repository.pidx";
pub const PACK_IDX_FILE: &str = "pack.idx";

lazy_static::lazy_static! {
    static ref PDSC_FILE_PATTERN: Regex = Regex::new(r"^.*\.pdsc$").unwrap();
}

/// File names of the manifests present in `.Web/`.
///
/// Populated from disk on first use; `invalidate` forces a rescan.
#[derive(Debug, Default)]
pub struct PublicManifestCache {
    names: Option<HashSet<String>>,
}

impl PublicManifestCache {
    pub fn contains(&mut self, web_dir: &Path, file_name: &str) -> Result<bool> {
        if self.names.is_none() {
            let files = list_dir(web_dir, &PDSC_FILE_PATTERN)?;
            let names = files
                .iter()
                .filter_map(|f| f.file_name())
                .map(|n| n.to_string_lossy().to_string())
                .collect::<HashSet<_>>();
            tracing::debug!("Found {} manifest(s) in {}", names.len(), web_dir.display());
            self.names = Some(names);
        }

        Ok(self
            .names
            .as_ref()
            .is_some_and(|names| names.contains(file_name)))
    }

    pub fn insert(&mut self, file_name: String) {
        if let Some(names) = self.names.as_mut() {
            names.insert(file_name);
        }
    }

    pub fn invalidate(&mut self) {
        self.names = None;
    }

    pub fn is_populated(&self) -> bool {
        self.names.is_some()
    }
}

/// An open pack root.
///
/// Holds the derived locations, the public and local indexes and the
/// transport used to fetch anything remote.
pub struct Installation {
    pub pack_root: PathBuf,
    pub download_dir: PathBuf,
    pub local_dir: PathBuf,
    pub web_dir: PathBuf,
    pub public_index: PathBuf,
    pub pack_idx: PathBuf,
    pub public_index_xml: PidxXml,
    local_pidx: PidxXml,
    local_is_loaded: bool,
    public_manifests: PublicManifestCache,
    downloader: Box<dyn Downloader>,
}

impl std::fmt::Debug for Installation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Installation")
            .field("pack_root", &self.pack_root)
            .field("local_is_loaded", &self.local_is_loaded)
            .finish_non_exhaustive()
    }
}

impl Installation {
    /// Open the pack root at `pack_root`, creating missing directories when
    /// `create` is set, and load the public index.
    pub fn initialize(
        pack_root: &str,
        create: bool,
        downloader: Box<dyn Downloader>,
    ) -> Result<Self> {
        if pack_root.trim().is_empty() {
            return Err(Error::EmptyRoot);
        }

        let pack_root = clean_path(pack_root.trim());
        tracing::info!("Using pack root: \"{}\"", pack_root.display());

        if !dir_exists(&pack_root) && !create {
            return Err(Error::RootNotFound { path: pack_root });
        }

        let download_dir = pack_root.join(DOWNLOAD_DIR);
        let local_dir = pack_root.join(LOCAL_DIR);
        let web_dir = pack_root.join(WEB_DIR);

        for dir in [&pack_root, &download_dir, &local_dir, &web_dir] {
            tracing::debug!("Making sure \"{}\" exists", dir.display());
            if dir_exists(dir) {
                continue;
            }
            if !create {
                return Err(Error::DirectoryMissing { path: dir.clone() });
            }
            ensure_dir(dir)?;
        }

        let public_index = web_dir.join(PUBLIC_INDEX_FILE);
        let mut public_index_xml = PidxXml::new(&public_index);
        public_index_xml.read()?;

        Ok(Self {
            pack_idx: pack_root.join(PACK_IDX_FILE),
            local_pidx: PidxXml::new(local_dir.join(LOCAL_INDEX_FILE)),
            local_is_loaded: false,
            public_manifests: PublicManifestCache::default(),
            public_index_xml,
            public_index,
            pack_root,
            download_dir,
            local_dir,
            web_dir,
            downloader,
        })
    }

    pub fn downloader(&self) -> &dyn Downloader {
        self.downloader.as_ref()
    }

    /// Bump the change signal so other tools notice the pack root changed.
    pub fn touch_pack_idx(&self) -> Result<()> {
        tracing::debug!("Touching {}", self.pack_idx.display());
        touch_file(&self.pack_idx)
    }

    /// `<root>/Vendor/Name/Version`
    pub fn installed_dir(&self, tag: &PdscTag) -> PathBuf {
        self.pack_root
            .join(&tag.vendor)
            .join(&tag.name)
            .join(&tag.version)
    }

    /// `<root>/.Download/Vendor.Name.Version.pack`
    pub fn cached_pack_path(&self, tag: &PdscTag) -> PathBuf {
        self.download_dir.join(tag.pack_file_name())
    }

    /// Whether the pack is installed.
    ///
    /// With an empty version any installed version counts.
    pub fn pack_is_installed(&self, tag: &PdscTag) -> bool {
        let installation_dir = self.installed_dir(tag);
        let dir_exists = dir_exists(&installation_dir);
        if tag.version.is_empty() {
            return dir_exists;
        }

        dir_exists && file_exists(&installation_dir.join(tag.pdsc_file_name()))
    }

    /// Whether the pack is publicly indexed.
    ///
    /// A manifest already cached in `.Web/` answers immediately. Otherwise
    /// the public index is consulted and, when it lists the pack, the
    /// manifest is downloaded into `.Web/` so later lookups find it.
    pub fn pack_is_public(&mut self, tag: &PdscTag) -> Result<bool> {
        let file_name = tag.pdsc_file_name();

        if self.public_manifests.contains(&self.web_dir, &file_name)? {
            tracing::debug!("Found \"{}\" in \"{}\"", file_name, self.web_dir.display());
            return Ok(true);
        }

        tracing::debug!("Not found \"{}\" in \"{}\"", file_name, self.web_dir.display());

        let base_url = match self.public_index_xml.find_pdsc_tag(&tag.vendor, &tag.name) {
            Some(entry) => entry.url.clone(),
            None => {
                tracing::debug!(
                    "Not found \"{}\" tag in \"{}\"",
                    file_name,
                    self.public_index.display()
                );
                return Ok(false);
            }
        };

        let url = manifest_url(&base_url, &file_name)?;
        let download = download_file(self.downloader.as_ref(), &url, &self.download_dir)
            .map_err(|e| {
                tracing::error!("Could not download \"{}\": {}", url, e);
                Error::ManifestFetchFailed {
                    url: url.clone(),
                    reason: e.to_string(),
                }
            })?;

        let destination = self.web_dir.join(&file_name);
        download.persist(&destination).map_err(|e| {
            tracing::error!("Could not move manifest to \"{}\": {}", destination.display(), e);
            Error::ManifestFetchFailed {
                url: url.clone(),
                reason: e.to_string(),
            }
        })?;

        self.public_manifests.insert(file_name);
        Ok(true)
    }

    /// The local index, loaded from disk on first access.
    pub fn local_pidx(&mut self) -> Result<&mut PidxXml> {
        if !self.local_is_loaded {
            self.local_pidx.read()?;
            self.local_is_loaded = true;
        }
        Ok(&mut self.local_pidx)
    }

    /// Re-read the public index after it was replaced on disk.
    pub fn reload_public_index(&mut self) -> Result<()> {
        self.public_index_xml.read()?;
        self.public_manifests.invalidate();
        Ok(())
    }

    pub fn public_manifests(&self) -> &PublicManifestCache {
        &self.public_manifests
    }
}

/// Lexically normalize a path: drop `.` segments and trailing separators.
fn clean_path(path: &str) -> PathBuf {
    let cleaned = Path::new(path)
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect::<PathBuf>();

    if cleaned.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        cleaned
    }
}

/// `base` with `file_name` appended as a new path segment.
fn manifest_url(base: &str, file_name: &str) -> Result<String> {
    let invalid = |reason: String| Error::ManifestFetchFailed {
        url: base.to_string(),
        reason,
    };

    let mut url = Url::parse(base).map_err(|e| invalid(format!("invalid URL: {}", e)))?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    url.join(file_name)
        .map(|u| u.to_string())
        .map_err(|e| invalid(format!("invalid URL: {}", e)))
}
