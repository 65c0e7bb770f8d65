//! Fixtures shared by the installer tests

use super::Installation;
use crate::utils::download::testing::FakeDownloader;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

pub(crate) const PDSC_CMSIS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<package schemaVersion="1.7.7">
  <vendor>ARM</vendor>
  <name>CMSIS</name>
  <description>CMSIS</description>
  <url>https://packs.example/cmsis/</url>
  <releases>
    <release version="5.9.0">Latest</release>
    <release version="5.8.0">Previous</release>
  </releases>
</package>
"#;

/// Manifest text for `vendor.name` with the given releases, newest first.
pub(crate) fn pdsc_text(
    vendor: &str,
    name: &str,
    url: &str,
    versions: &[&str],
    license: Option<&str>,
) -> String {
    let mut out = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<package>\n");
    out.push_str(&format!("  <vendor>{}</vendor>\n  <name>{}</name>\n", vendor, name));
    out.push_str(&format!("  <url>{}</url>\n", url));
    if let Some(license) = license {
        out.push_str(&format!("  <license>{}</license>\n", license));
    }
    out.push_str("  <releases>\n");
    for version in versions {
        out.push_str(&format!("    <release version=\"{}\"/>\n", version));
    }
    out.push_str("  </releases>\n</package>\n");
    out
}

/// A freshly created pack root backed by `downloader`.
pub(crate) fn fake_installation(downloader: FakeDownloader) -> (TempDir, Installation) {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("packs");
    let installation =
        Installation::initialize(root.to_str().unwrap(), true, Box::new(downloader)).unwrap();
    (temp, installation)
}

pub(crate) fn write_manifest(dir: &Path, file_name: &str, content: &str) -> PathBuf {
    fs::create_dir_all(dir).unwrap();
    let path = dir.join(file_name);
    fs::write(&path, content).unwrap();
    path
}

/// Zip archive bytes holding `files` (directories end with `/`).
pub(crate) fn pack_bytes(files: &[(&str, &str)]) -> Vec<u8> {
    let mut writer = ZipWriter::new(std::io::Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();
    for (name, content) in files {
        if name.ends_with('/') {
            writer.add_directory(*name, options).unwrap();
        } else {
            writer.start_file(*name, options).unwrap();
            writer.write_all(content.as_bytes()).unwrap();
        }
    }
    writer.finish().unwrap().into_inner()
}

pub(crate) fn write_pack(path: &Path, files: &[(&str, &str)]) -> PathBuf {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    let mut file = File::create(path).unwrap();
    file.write_all(&pack_bytes(files)).unwrap();
    path.to_path_buf()
}
