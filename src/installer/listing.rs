//! Listing installed, cached or public packs

use super::installation::Installation;
use super::pack_info::PackInfo;
use crate::error::{Error, Result};
use crate::utils::fs::{file_exists, list_dir};
use crate::xml::PdscTag;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use walkdir::WalkDir;

lazy_static! {
    static ref PACK_FILE_PATTERN: Regex = Regex::new(r"(?i)^.*\.pack$").unwrap();
}

/// Which set of packs to list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ListMode {
    Installed,
    Cached,
    Public,
}

impl ListMode {
    pub fn from_flags(list_cached: bool, list_public: bool) -> Self {
        if list_public {
            ListMode::Public
        } else if list_cached {
            ListMode::Cached
        } else {
            ListMode::Installed
        }
    }

    fn title(self) -> &'static str {
        match self {
            ListMode::Installed => "Listing installed packs",
            ListMode::Cached => "Listing cached packs",
            ListMode::Public => "Listing packs from the public index",
        }
    }

    fn empty_message(self) -> &'static str {
        match self {
            ListMode::Installed => "(no packs installed)",
            ListMode::Cached => "(no packs cached)",
            ListMode::Public => "(no packs in public index)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PackStatus {
    Installed,
    Cached,
}

impl PackStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            PackStatus::Installed => "installed",
            PackStatus::Cached => "cached",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListedPack {
    pub key: String,
    pub vendor: String,
    pub name: String,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PackStatus>,
}

impl ListedPack {
    fn new(tag: &PdscTag, status: Option<PackStatus>) -> Self {
        Self {
            key: tag.key(),
            vendor: tag.vendor.clone(),
            name: tag.name.clone(),
            version: tag.version.clone(),
            status,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PackListing {
    pub mode: ListMode,
    pub packs: Vec<ListedPack>,
}

impl PackListing {
    pub fn is_empty(&self) -> bool {
        self.packs.is_empty()
    }

    pub fn empty_message(&self) -> &'static str {
        self.mode.empty_message()
    }

    /// Plain text lines, one per pack, or the single "nothing here" line.
    pub fn lines(&self) -> Vec<String> {
        if self.packs.is_empty() {
            return vec![self.empty_message().to_string()];
        }

        self.packs
            .iter()
            .map(|p| match p.status {
                Some(status) => format!("{} ({})", p.key, status.as_str()),
                None => p.key.clone(),
            })
            .collect()
    }
}

/// List packs according to the flags; `list_public` wins over `list_cached`.
///
/// Results are ordered case-insensitively by key.
pub fn list_installed_packs(
    installation: &Installation,
    list_cached: bool,
    list_public: bool,
) -> Result<PackListing> {
    let mode = ListMode::from_flags(list_cached, list_public);
    tracing::info!("{}", mode.title());

    let packs = match mode {
        ListMode::Public => list_public_packs(installation),
        ListMode::Cached => list_cached_packs(installation)?,
        ListMode::Installed => list_installed(installation)?,
    };

    Ok(PackListing { mode, packs })
}

fn sorted(packs: impl IntoIterator<Item = ListedPack>) -> Vec<ListedPack> {
    let by_key: BTreeMap<(String, String), ListedPack> = packs
        .into_iter()
        .map(|p| ((p.key.to_lowercase(), p.key.clone()), p))
        .collect();
    by_key.into_values().collect()
}

fn list_public_packs(installation: &Installation) -> Vec<ListedPack> {
    let packs = installation
        .public_index_xml
        .list_pdscs()
        .into_values()
        .map(|tag| {
            let status = if installation.pack_is_installed(tag) {
                Some(PackStatus::Installed)
            } else if file_exists(&installation.cached_pack_path(tag)) {
                Some(PackStatus::Cached)
            } else {
                None
            };
            ListedPack::new(tag, status)
        })
        .collect::<Vec<_>>();
    sorted(packs)
}

fn list_cached_packs(installation: &Installation) -> Result<Vec<ListedPack>> {
    let mut packs = Vec::new();
    for path in list_dir(&installation.download_dir, &PACK_FILE_PATTERN)? {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let info = PackInfo::from_file_name(&file_name)
            .ok_or(Error::UnknownPackNameFormat { name: file_name })?;
        let tag = info.to_tag();
        let status = installation
            .pack_is_installed(&tag)
            .then_some(PackStatus::Installed);
        packs.push(ListedPack::new(&tag, status));
    }
    Ok(sorted(packs))
}

fn list_installed(installation: &Installation) -> Result<Vec<ListedPack>> {
    let root = &installation.pack_root;
    let walker = WalkDir::new(root)
        .max_depth(4)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !e.file_name().to_string_lossy().starts_with('.'));

    let mut packs = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|e| {
            Error::Io(std::io::Error::other(format!(
                "Failed to scan {}: {}",
                root.display(),
                e
            )))
        })?;

        if entry.depth() != 4
            || !entry.file_type().is_file()
            || !entry.file_name().to_string_lossy().ends_with(".pdsc")
        {
            continue;
        }

        let info = PackInfo::from_install_path(root, entry.path()).ok_or_else(|| {
            Error::UnknownPackNameFormat {
                name: entry.path().display().to_string(),
            }
        })?;
        packs.push(ListedPack::new(&info.to_tag(), None));
    }
    Ok(sorted(packs))
}
