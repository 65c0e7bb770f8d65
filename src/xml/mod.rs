//! Index (`.pidx`) and manifest (`.pdsc`) files
//!
//! Parsing goes through `sxd-document`; the result is immediately copied
//! into owned structs so no DOM lifetimes leak out of this module.
//!
//! Writing does not go through `sxd_document::writer`. That writer emits
//! the whole document on one line with single-quoted attributes, while
//! index files are diffed, read by other pack tools and compared byte for
//! byte after an add/remove round trip. [`pidx::PidxXml::to_xml`] prints
//! one entry per line in insertion order with double-quoted attributes,
//! so identical content always yields identical bytes. [`escape`] covers
//! the five predefined entities, which is all the index text needs.

pub mod pdsc;
pub mod pidx;

pub use pdsc::{PdscXml, ReleaseTag};
pub use pidx::{PdscTag, PidxXml};

use crate::error::{Error, Result};
use std::io::Write;
use std::path::Path;
use sxd_document::dom::{ChildOfElement, ChildOfRoot, Element};
use sxd_document::{parser, Package};
use tempfile::NamedTempFile;

pub(crate) const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";

/// Parse `text` into an XML package, reporting errors against `path`.
pub(crate) fn parse_document(path: &Path, text: &str) -> Result<Package> {
    let text = text.trim_start_matches('\u{feff}');
    parser::parse(text).map_err(|e| Error::Parse {
        path: path.to_path_buf(),
        detail: format!("{:?}", e),
    })
}

/// The document element, checked against the expected name.
pub(crate) fn root_element<'d>(
    package: &'d Package,
    path: &Path,
    expected: &str,
) -> Result<Element<'d>> {
    let doc = package.as_document();
    let root = doc
        .root()
        .children()
        .into_iter()
        .find_map(|child| match child {
            ChildOfRoot::Element(e) => Some(e),
            _ => None,
        })
        .ok_or_else(|| Error::Parse {
            path: path.to_path_buf(),
            detail: "document has no root element".to_string(),
        })?;

    let name = root.name().local_part();
    if name != expected {
        return Err(Error::Parse {
            path: path.to_path_buf(),
            detail: format!("expected <{}> root element, found <{}>", expected, name),
        });
    }

    Ok(root)
}

pub(crate) fn child_elements<'d>(element: Element<'d>, name: &str) -> Vec<Element<'d>> {
    element
        .children()
        .into_iter()
        .filter_map(|child| match child {
            ChildOfElement::Element(e) if e.name().local_part() == name => Some(e),
            _ => None,
        })
        .collect()
}

pub(crate) fn element_text(element: Element<'_>) -> String {
    let mut text = String::new();
    for child in element.children() {
        if let ChildOfElement::Text(t) = child {
            text.push_str(t.text());
        }
    }
    text.trim().to_string()
}

/// Trimmed text of the first `<name>` child, empty if absent.
pub(crate) fn child_text(element: Element<'_>, name: &str) -> String {
    child_elements(element, name)
        .into_iter()
        .next()
        .map(element_text)
        .unwrap_or_default()
}

pub(crate) fn attribute(element: Element<'_>, name: &str) -> String {
    element
        .attribute_value(name)
        .map(|v| v.trim().to_string())
        .unwrap_or_default()
}

/// Escape text for use in element content and attribute values.
pub(crate) fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Write `content` to `path` through a temporary sibling file.
///
/// Readers never observe a partially written file; concurrent writers
/// resolve as last-writer-wins.
pub(crate) fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    crate::utils::fs::ensure_dir(parent)?;

    let wrap = |e: std::io::Error| {
        Error::Io(std::io::Error::new(
            e.kind(),
            format!("Failed to write {}: {}", path.display(), e),
        ))
    };

    let mut temp = NamedTempFile::new_in(parent).map_err(wrap)?;
    temp.write_all(content.as_bytes()).map_err(wrap)?;
    temp.persist(path).map_err(|e| wrap(e.error))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_escape() {
        assert_eq!(escape("a&b<c>\"d'"), "a&amp;b&lt;c&gt;&quot;d&apos;");
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn test_root_element_mismatch() {
        let path = Path::new("test.pidx");
        let package = parse_document(path, "<package/>").unwrap();
        let err = root_element(&package, path, "index").unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
    }

    #[test]
    fn test_parse_error_names_file() {
        let path = Path::new("broken.pdsc");
        let err = parse_document(path, "<package>").unwrap_err();
        assert!(err.to_string().contains("broken.pdsc"));
    }

    #[test]
    fn test_child_text_trims_whitespace() {
        let path = Path::new("x");
        let package = parse_document(path, "<a>\n  <b>  hello </b>\n</a>").unwrap();
        let root = root_element(&package, path, "a").unwrap();
        assert_eq!(child_text(root, "b"), "hello");
        assert_eq!(child_text(root, "missing"), "");
    }

    #[test]
    fn test_write_atomic_creates_parent() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".Local").join("local_repository.pidx");

        write_atomic(&path, "<index/>").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<index/>");
        // Only the target remains in the directory
        assert_eq!(std::fs::read_dir(path.parent().unwrap()).unwrap().count(), 1);
    }
}
