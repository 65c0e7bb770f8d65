//! Pack manifest files (`Vendor.Name.pdsc`)
//!
//! Only the parts the installer needs are modelled: identity, base URL,
//! license path and the release history (newest first).

use super::{attribute, child_elements, child_text, element_text, parse_document, root_element};
use super::pidx::PdscTag;
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// One version's entry in a manifest's release history.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReleaseTag {
    pub version: String,
    /// Explicit download URL; wins over the synthesized default
    pub url: String,
    pub date: String,
    pub description: String,
}

#[derive(Debug, Clone, Default)]
pub struct PdscXml {
    path: PathBuf,
    pub vendor: String,
    pub name: String,
    pub description: String,
    /// Base URL the pack archives are served from
    pub url: String,
    /// Path of the license file inside the pack, if any
    pub license: Option<String>,
    pub releases: Vec<ReleaseTag>,
}

impl PdscXml {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the manifest from its file.
    pub fn read(&mut self) -> Result<()> {
        tracing::debug!("Reading pdsc file {}", self.path.display());

        if !self.path.is_file() {
            return Err(Error::ManifestNotFound {
                path: self.path.clone(),
            });
        }

        let text = std::fs::read_to_string(&self.path).map_err(|e| {
            Error::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read {}: {}", self.path.display(), e),
            ))
        })?;

        let parsed = Self::read_str(&self.path, &text)?;
        *self = parsed;
        Ok(())
    }

    /// Parse manifest text that did not come from a plain file (e.g. an archive).
    pub fn read_str(path: &Path, text: &str) -> Result<Self> {
        let package = parse_document(path, text)?;
        let root = root_element(&package, path, "package")?;

        let vendor = child_text(root, "vendor");
        let name = child_text(root, "name");
        if vendor.is_empty() || name.is_empty() {
            return Err(Error::Parse {
                path: path.to_path_buf(),
                detail: "manifest is missing <vendor> or <name>".to_string(),
            });
        }

        let license = Some(child_text(root, "license")).filter(|l| !l.is_empty());

        let releases = child_elements(root, "releases")
            .into_iter()
            .flat_map(|releases| child_elements(releases, "release"))
            .map(|release| ReleaseTag {
                version: attribute(release, "version"),
                url: attribute(release, "url"),
                date: attribute(release, "date"),
                description: element_text(release),
            })
            .collect();

        Ok(Self {
            path: path.to_path_buf(),
            vendor,
            name,
            description: child_text(root, "description"),
            url: child_text(root, "url"),
            license,
            releases,
        })
    }

    /// `Vendor.Name`
    pub fn key(&self) -> String {
        format!("{}.{}", self.vendor, self.name)
    }

    /// Release entry for `version`; an empty version selects the latest.
    pub fn find_release_by_version(&self, version: &str) -> Option<&ReleaseTag> {
        if version.is_empty() {
            return self.releases.first();
        }
        self.releases.iter().find(|r| r.version == version)
    }

    pub fn latest_version(&self) -> Option<&str> {
        self.releases.first().map(|r| r.version.as_str())
    }

    /// Default archive URL: base URL followed by `Vendor.Name.Version.pack`
    pub fn pack_url(&self, version: &str) -> String {
        format!("{}{}.{}.{}.pack", self.url, self.vendor, self.name, version)
    }

    /// Index entry describing the latest release of this manifest.
    pub fn to_tag(&self) -> PdscTag {
        PdscTag {
            url: self.url.clone(),
            ..PdscTag::new(
                &self.vendor,
                &self.name,
                self.latest_version().unwrap_or_default(),
            )
        }
    }
}
