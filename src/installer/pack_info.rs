//! Pack identity parsing
//!
//! Every place that turns text into a pack identity goes through here:
//! archive file names (`Vendor.Name.1.2.3.pack`), pack ids
//! (`Vendor.Name` or `Vendor.Name.1.2.3`) and installed manifest paths
//! (`<root>/Vendor/Name/1.2.3/Vendor.Name.pdsc`).

use crate::xml::PdscTag;
use lazy_static::lazy_static;
use regex::Regex;
use std::path::{Component, Path};

lazy_static! {
    static ref SEGMENT_RE: Regex = Regex::new(r"^[A-Za-z0-9_-]+$").unwrap();
    static ref VERSION_RE: Regex =
        Regex::new(r"^\d+\.\d+\.\d+(?:-[0-9A-Za-z.-]+)?(?:\+[0-9A-Za-z.-]+)?$").unwrap();
    static ref PACK_FILE_RE: Regex = Regex::new(
        r"^([A-Za-z0-9_-]+)\.([A-Za-z0-9_-]+)\.(\d+\.\d+\.\d+(?:-[0-9A-Za-z.-]+)?(?:\+[0-9A-Za-z.-]+)?)\.(?i:pack|zip)$"
    )
    .unwrap();
    static ref PDSC_FILE_RE: Regex =
        Regex::new(r"^([A-Za-z0-9_-]+)\.([A-Za-z0-9_-]+)\.(?i:pdsc)$").unwrap();
    static ref PACK_ID_RE: Regex = Regex::new(
        r"^([A-Za-z0-9_-]+)\.([A-Za-z0-9_-]+)(?:\.(\d+\.\d+\.\d+(?:-[0-9A-Za-z.-]+)?(?:\+[0-9A-Za-z.-]+)?))?$"
    )
    .unwrap();
}

/// Vendor, name and (possibly empty) version of a pack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackInfo {
    pub vendor: String,
    pub name: String,
    pub version: String,
}

impl PackInfo {
    /// Validate the three segments of an identity.
    ///
    /// An empty version is accepted and means "unspecified".
    pub fn from_segments(vendor: &str, name: &str, version: &str) -> Option<Self> {
        if !SEGMENT_RE.is_match(vendor) || !SEGMENT_RE.is_match(name) {
            return None;
        }
        if !version.is_empty() && !VERSION_RE.is_match(version) {
            return None;
        }

        Some(Self {
            vendor: vendor.to_string(),
            name: name.to_string(),
            version: version.to_string(),
        })
    }

    /// Parse an archive file name: `Vendor.Name.Version.pack` (or `.zip`).
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let caps = PACK_FILE_RE.captures(file_name)?;
        Self::from_segments(&caps[1], &caps[2], &caps[3])
    }

    /// Parse a manifest file name: `Vendor.Name.pdsc`. The version is empty.
    pub fn from_pdsc_file_name(file_name: &str) -> Option<Self> {
        let caps = PDSC_FILE_RE.captures(file_name)?;
        Self::from_segments(&caps[1], &caps[2], "")
    }

    /// Parse a pack id: `Vendor.Name` or `Vendor.Name.Version`.
    pub fn parse_id(id: &str) -> Option<Self> {
        let caps = PACK_ID_RE.captures(id)?;
        let version = caps.get(3).map(|m| m.as_str()).unwrap_or_default();
        Self::from_segments(&caps[1], &caps[2], version)
    }

    /// Derive the identity of an installed pack from the path of its
    /// manifest, which must sit exactly at `Vendor/Name/Version/*.pdsc`
    /// below `root`.
    pub fn from_install_path(root: &Path, manifest: &Path) -> Option<Self> {
        let relative = manifest.strip_prefix(root).ok()?;
        let segments: Vec<&str> = relative
            .components()
            .map(|c| match c {
                Component::Normal(s) => s.to_str(),
                _ => None,
            })
            .collect::<Option<_>>()?;

        match segments.as_slice() {
            [vendor, name, version, file] if file.ends_with(".pdsc") => {
                Self::from_segments(vendor, name, version)
            }
            _ => None,
        }
    }

    pub fn to_tag(&self) -> PdscTag {
        PdscTag::new(&self.vendor, &self.name, &self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_file_name_plain() {
        let info = PackInfo::from_file_name("ARM.CMSIS.5.9.0.pack").unwrap();
        assert_eq!(info.vendor, "ARM");
        assert_eq!(info.name, "CMSIS");
        assert_eq!(info.version, "5.9.0");
    }

    #[test]
    fn test_file_name_prerelease_and_build() {
        let info = PackInfo::from_file_name("Keil.STM32F4xx_DFP.2.17.1-rc.2+build.7.zip").unwrap();
        assert_eq!(info.name, "STM32F4xx_DFP");
        assert_eq!(info.version, "2.17.1-rc.2+build.7");
    }

    #[test]
    fn test_pdsc_file_name() {
        let info = PackInfo::from_pdsc_file_name("Acme.Widgets.PDSC").unwrap();
        assert_eq!(info.vendor, "Acme");
        assert_eq!(info.name, "Widgets");
        assert_eq!(info.version, "");

        assert!(PackInfo::from_pdsc_file_name("Widgets.pdsc").is_none());
        assert!(PackInfo::from_pdsc_file_name("Acme.Widgets.1.0.0.pdsc").is_none());
    }

    #[test]
    fn test_file_name_extension_case() {
        assert!(PackInfo::from_file_name("ARM.CMSIS.5.9.0.PACK").is_some());
    }

    #[test]
    fn test_file_name_rejects_malformed() {
        assert!(PackInfo::from_file_name("ARM.CMSIS.pack").is_none());
        assert!(PackInfo::from_file_name("ARM.CMSIS.5.9.pack").is_none());
        assert!(PackInfo::from_file_name("ARM CMSIS.5.9.0.pack").is_none());
        assert!(PackInfo::from_file_name("ARM.CMSIS.5.9.0.tar").is_none());
    }

    #[test]
    fn test_pack_id_with_and_without_version() {
        let bare = PackInfo::parse_id("ARM.CMSIS").unwrap();
        assert_eq!(bare.version, "");
        assert_eq!(bare.to_tag().key(), "ARM.CMSIS");

        let versioned = PackInfo::parse_id("ARM.CMSIS.5.9.0").unwrap();
        assert_eq!(versioned.to_tag().key(), "ARM.CMSIS.5.9.0");
    }

    #[test]
    fn test_pack_id_rejects_garbage() {
        assert!(PackInfo::parse_id("CMSIS").is_none());
        assert!(PackInfo::parse_id("ARM.CMSIS.latest").is_none());
        assert!(PackInfo::parse_id("ARM.CMSIS.5").is_none());
        assert!(PackInfo::parse_id("").is_none());
    }

    #[test]
    fn test_from_install_path() {
        let root = PathBuf::from("/packs");
        let manifest = root.join("ARM").join("CMSIS").join("5.9.0").join("ARM.CMSIS.pdsc");

        let info = PackInfo::from_install_path(&root, &manifest).unwrap();
        assert_eq!(info.to_tag().key(), "ARM.CMSIS.5.9.0");
    }

    #[test]
    fn test_from_install_path_wrong_depth() {
        let root = PathBuf::from("/packs");
        assert!(PackInfo::from_install_path(&root, &root.join("ARM/CMSIS/ARM.CMSIS.pdsc")).is_none());
        assert!(
            PackInfo::from_install_path(&root, &root.join("ARM/CMSIS/5.9.0/sub/ARM.CMSIS.pdsc"))
                .is_none()
        );
        assert!(PackInfo::from_install_path(&root, &root.join("ARM/CMSIS/v5/ARM.CMSIS.pdsc")).is_none());
        assert!(
            PackInfo::from_install_path(&PathBuf::from("/other"), &root.join("ARM/CMSIS/5.9.0/x.pdsc"))
                .is_none()
        );
    }
}
