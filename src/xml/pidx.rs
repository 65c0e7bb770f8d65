//! Pack index files (`index.pidx`, `local_repository.pidx`)
//!
//! An index is an ordered list of `<pdsc>` entries, each naming one pack
//! release and the base URL its manifest is served from.

use super::{attribute, child_elements, child_text, escape, parse_document, root_element};
use crate::error::{Error, Result};
use serde::Serialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

const SCHEMA_VERSION: &str = "1.1.0";

/// One pack release record inside an index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PdscTag {
    pub vendor: String,
    pub name: String,
    pub version: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub url: String,
}

impl PdscTag {
    pub fn new(vendor: &str, name: &str, version: &str) -> Self {
        Self {
            vendor: vendor.to_string(),
            name: name.to_string(),
            version: version.to_string(),
            url: String::new(),
        }
    }

    /// `Vendor.Name.Version`, or `Vendor.Name` when the version is empty.
    pub fn key(&self) -> String {
        if self.version.is_empty() {
            format!("{}.{}", self.vendor, self.name)
        } else {
            format!("{}.{}.{}", self.vendor, self.name, self.version)
        }
    }

    /// File name of the manifest describing this pack: `Vendor.Name.pdsc`
    pub fn pdsc_file_name(&self) -> String {
        format!("{}.{}.pdsc", self.vendor, self.name)
    }

    /// File name of the cached archive: `Vendor.Name.Version.pack`
    pub fn pack_file_name(&self) -> String {
        format!("{}.{}.{}.pack", self.vendor, self.name, self.version)
    }
}

/// In-memory view of an index file.
#[derive(Debug, Clone)]
pub struct PidxXml {
    path: PathBuf,
    vendor: String,
    url: String,
    timestamp: String,
    entries: Vec<PdscTag>,
}

impl PidxXml {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            vendor: String::new(),
            url: String::new(),
            timestamp: String::new(),
            entries: Vec::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the index from disk, replacing the in-memory state.
    ///
    /// A missing file is an empty index.
    pub fn read(&mut self) -> Result<()> {
        tracing::debug!("Reading pidx file {}", self.path.display());

        self.vendor.clear();
        self.url.clear();
        self.timestamp.clear();
        self.entries.clear();

        if !self.path.exists() {
            return Ok(());
        }

        let text = std::fs::read_to_string(&self.path).map_err(|e| {
            Error::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read {}: {}", self.path.display(), e),
            ))
        })?;

        self.parse(&text)
    }

    fn parse(&mut self, text: &str) -> Result<()> {
        let package = parse_document(&self.path, text)?;
        let root = root_element(&package, &self.path, "index")?;

        self.vendor = child_text(root, "vendor");
        self.url = child_text(root, "url");
        self.timestamp = child_text(root, "timestamp");

        for pindex in child_elements(root, "pindex") {
            for pdsc in child_elements(pindex, "pdsc") {
                let tag = PdscTag {
                    vendor: attribute(pdsc, "vendor"),
                    name: attribute(pdsc, "name"),
                    version: attribute(pdsc, "version"),
                    url: attribute(pdsc, "url"),
                };
                if tag.vendor.is_empty() || tag.name.is_empty() {
                    return Err(Error::Parse {
                        path: self.path.clone(),
                        detail: "<pdsc> entry without vendor or name".to_string(),
                    });
                }
                if self.find_entry(&tag.key()).is_some() {
                    tracing::warn!(
                        "Duplicate entry \"{}\" in {}, keeping the first one",
                        tag.key(),
                        self.path.display()
                    );
                    continue;
                }
                self.entries.push(tag);
            }
        }

        Ok(())
    }

    /// Persist the in-memory index to its file.
    pub fn write(&self) -> Result<()> {
        tracing::debug!("Writing pidx file {}", self.path.display());
        super::write_atomic(&self.path, &self.to_xml())
    }

    /// Serialized form of the index.
    pub fn to_xml(&self) -> String {
        let mut out = String::from(super::XML_DECLARATION);
        out.push_str(&format!("<index schemaVersion=\"{}\">\n", SCHEMA_VERSION));

        for (name, value) in [
            ("vendor", &self.vendor),
            ("url", &self.url),
            ("timestamp", &self.timestamp),
        ] {
            if !value.is_empty() {
                out.push_str(&format!("  <{0}>{1}</{0}>\n", name, escape(value)));
            }
        }

        out.push_str("  <pindex>\n");
        for tag in &self.entries {
            out.push_str(&format!(
                "    <pdsc vendor=\"{}\" name=\"{}\" version=\"{}\" url=\"{}\"/>\n",
                escape(&tag.vendor),
                escape(&tag.name),
                escape(&tag.version),
                escape(&tag.url)
            ));
        }
        out.push_str("  </pindex>\n");
        out.push_str("</index>\n");
        out
    }

    /// Append an entry; its key must not already be present.
    pub fn add_pdsc(&mut self, tag: PdscTag) -> Result<()> {
        let key = tag.key();
        if self.find_entry(&key).is_some() {
            return Err(Error::PdscEntryExists { key });
        }

        tracing::debug!("Adding \"{}\" to {}", key, self.path.display());
        self.entries.push(tag);
        Ok(())
    }

    /// Remove the entry with `key`, returning it.
    pub fn remove_pdsc(&mut self, key: &str) -> Result<PdscTag> {
        let position = self
            .entries
            .iter()
            .position(|tag| tag.key() == key)
            .ok_or_else(|| Error::PdscEntryNotFound {
                key: key.to_string(),
            })?;

        tracing::debug!("Removing \"{}\" from {}", key, self.path.display());
        Ok(self.entries.remove(position))
    }

    pub fn find_entry(&self, key: &str) -> Option<&PdscTag> {
        self.entries.iter().find(|tag| tag.key() == key)
    }

    /// Entry for a pack regardless of its version.
    pub fn find_pdsc_tag(&self, vendor: &str, name: &str) -> Option<&PdscTag> {
        self.entries
            .iter()
            .find(|tag| tag.vendor == vendor && tag.name == name)
    }

    /// All entries keyed by `Vendor.Name.Version`.
    pub fn list_pdscs(&self) -> HashMap<String, &PdscTag> {
        self.entries.iter().map(|tag| (tag.key(), tag)).collect()
    }

    pub fn entries(&self) -> &[PdscTag] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
