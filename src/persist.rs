//! Disk I/O helpers: load a document from file and write one back atomically.
//!
//! Writes go to `<path>.tmp` first and then rename over the target, so a
//! crash mid-write never leaves a half-written document behind. Rename-over
//! is reliable on most platforms; on FAT32 or network shares there are no
//! hard guarantees.

use crate::error::{Error, Result};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// The on-disk document: a JSON object mapping string keys to arbitrary
/// values. Backed by an order-preserving map, so keys serialize in insertion
/// order.
pub type Document = Map<String, Value>;

/// Reads the raw UTF-8 content of the file at `path`.
///
/// A missing file is [`Error::NotFound`]; any other read failure is
/// [`Error::Io`].
pub fn read_text(path: &Path) -> Result<String> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(text),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(Error::NotFound {
            path: path.to_path_buf(),
        }),
        Err(e) => Err(Error::Io {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

/// Parses `text` as a top-level JSON object.
///
/// Anything else — malformed JSON, an empty file, a valid JSON array or
/// scalar — is [`Error::Parse`].
pub fn parse_document(path: &Path, text: &str) -> Result<Document> {
    serde_json::from_str(text).map_err(|e| Error::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Reads and parses the document at `path` in one step.
pub fn load_document(path: &Path) -> Result<Document> {
    let text = read_text(path)?;
    parse_document(path, &text)
}

/// Serializes `doc` as pretty-printed JSON (2-space indentation), writes it to
/// `<path>.tmp`, and renames over `path`.
pub fn write_document(path: &Path, doc: &Document) -> Result<()> {
    let bytes = serde_json::to_vec_pretty(doc).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: std::io::Error::new(std::io::ErrorKind::InvalidData, e),
    })?;
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("json");
    let tmp = path.with_extension(format!("{ext}.tmp"));
    fs::write(&tmp, bytes).map_err(|e| Error::Io {
        path: tmp.clone(),
        source: e,
    })?;
    fs::rename(&tmp, path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(())
}
