//! The [`JsonFile`] handle and the file-scoped operations.

use crate::error::{Error, Result};
use crate::persist::{self, Document};
use log::{debug, error, info};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// One entry of the document: a key and its JSON value.
pub type Pair = (String, Value);

/// Handle to a JSON file treated as a flat string-keyed map.
///
/// Carries nothing but the path — constructing one does no I/O, and no state
/// survives between calls. Every operation re-reads the file, mutates the
/// parsed object, and rewrites the whole file.
///
/// Reads come in two flavors: the plain methods ([`read_all`](Self::read_all)
/// and friends) never fail — they return an empty result and report the
/// problem on the [`log`] channel — while the `try_*` methods surface the
/// typed [`Error`].
#[derive(Debug, Clone)]
pub struct JsonFile {
    path: PathBuf,
}

impl JsonFile {
    /// Wrap a path. The file is not touched until an operation runs.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path to the backing JSON file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    // ---- reads ----

    /// Every key-value pair in the document, in document order.
    ///
    /// Fails soft: a missing, unreadable, or corrupt file yields an empty vec
    /// and an error-level log line.
    #[must_use]
    pub fn read_all(&self) -> Vec<Pair> {
        match self.try_read_all() {
            Ok(pairs) => pairs,
            Err(e) => {
                error!("read_all: {e}");
                Vec::new()
            }
        }
    }

    /// Like [`read_all`](Self::read_all) but surfaces the error.
    pub fn try_read_all(&self) -> Result<Vec<Pair>> {
        let doc = persist::load_document(&self.path)?;
        Ok(doc.into_iter().collect())
    }

    /// The pair for `key`, or `None` if the key is absent.
    ///
    /// Fails soft: an absent key logs an info line, a read or parse failure
    /// logs an error line; both yield `None`.
    #[must_use]
    pub fn read_by_key(&self, key: &str) -> Option<Pair> {
        match self.try_read_by_key(key) {
            Ok(Some(pair)) => Some(pair),
            Ok(None) => {
                info!("key {key:?} does not exist in {}", self.path.display());
                None
            }
            Err(e) => {
                error!("read_by_key: {e}");
                None
            }
        }
    }

    /// Like [`read_by_key`](Self::read_by_key) but surfaces the error.
    /// `Ok(None)` means the file parsed fine and the key is not in it.
    pub fn try_read_by_key(&self, key: &str) -> Result<Option<Pair>> {
        let doc = persist::load_document(&self.path)?;
        Ok(doc.get(key).map(|v| (key.to_string(), v.clone())))
    }

    /// Every pair whose value strictly equals `value`, in document order.
    ///
    /// "Strictly" means scalar comparison only: null, booleans, numbers, and
    /// strings match by value, while an array or object query matches nothing
    /// at all. Numbers compare by JSON representation, so `1` and `1.0` are
    /// distinct.
    ///
    /// Fails soft: no match logs an info line, a read or parse failure logs
    /// an error line; both yield an empty vec.
    #[must_use]
    pub fn read_keys_by_value(&self, value: &Value) -> Vec<Pair> {
        match self.try_read_keys_by_value(value) {
            Ok(pairs) if pairs.is_empty() => {
                info!("no key matches value {value} in {}", self.path.display());
                pairs
            }
            Ok(pairs) => pairs,
            Err(e) => {
                error!("read_keys_by_value: {e}");
                Vec::new()
            }
        }
    }

    /// Like [`read_keys_by_value`](Self::read_keys_by_value) but surfaces the
    /// error.
    pub fn try_read_keys_by_value(&self, value: &Value) -> Result<Vec<Pair>> {
        let doc = persist::load_document(&self.path)?;
        Ok(doc
            .into_iter()
            .filter(|(_, v)| scalar_match(v, value))
            .collect())
    }

    // ---- writes ----

    /// Set each `(key, value)` in the document, inserting new keys in input
    /// order and overwriting existing ones, then rewrite the file.
    ///
    /// The file must already exist and hold a valid JSON object; use
    /// [`create`](Self::create) first for a fresh path.
    pub fn upsert<I>(&self, pairs: I) -> Result<()>
    where
        I: IntoIterator<Item = Pair>,
    {
        let mut doc = persist::load_document(&self.path)?;
        for (key, value) in pairs {
            doc.insert(key, value);
        }
        persist::write_document(&self.path, &doc)?;
        debug!("updated {}", self.path.display());
        Ok(())
    }

    /// Write a fresh empty document (`{}`), creating or truncating the file.
    ///
    /// The parent directory must already exist; a missing parent is
    /// [`Error::NotFound`] and nothing is created. A bare file name resolves
    /// against the current directory and passes the check.
    pub fn create(&self) -> Result<()> {
        self.check_parent_dir()?;
        persist::write_document(&self.path, &Document::new())?;
        debug!("created {}", self.path.display());
        Ok(())
    }

    /// [`create`](Self::create), then seed the new document with `pairs`.
    pub fn create_with<I>(&self, pairs: I) -> Result<()>
    where
        I: IntoIterator<Item = Pair>,
    {
        self.create()?;
        self.upsert(pairs)
    }

    /// Delete the listed keys from the document, returning the keys that were
    /// actually present and removed.
    ///
    /// A missing or blank file is a no-op reported on the log channel, not an
    /// error. Keys that are not in the document are logged and skipped. The
    /// file is rewritten once after all deletions.
    pub fn remove_keys<I, S>(&self, keys: I) -> Result<Vec<String>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let Some(mut doc) = self.load_for_removal()? else {
            return Ok(Vec::new());
        };
        let mut removed = Vec::new();
        for key in keys {
            let key = key.as_ref();
            if doc.remove(key).is_some() {
                debug!("removed key {key:?} from {}", self.path.display());
                removed.push(key.to_string());
            } else {
                info!("key {key:?} does not exist in {}", self.path.display());
            }
        }
        persist::write_document(&self.path, &doc)?;
        Ok(removed)
    }

    /// Delete every key, resetting the document to `{}`. Returns the keys
    /// that were cleared.
    ///
    /// Same missing/blank-file handling as [`remove_keys`](Self::remove_keys).
    pub fn remove_all_keys(&self) -> Result<Vec<String>> {
        let Some(mut doc) = self.load_for_removal()? else {
            return Ok(Vec::new());
        };
        let removed: Vec<String> = doc.keys().cloned().collect();
        doc.clear();
        for key in &removed {
            debug!("removed key {key:?} from {}", self.path.display());
        }
        persist::write_document(&self.path, &doc)?;
        Ok(removed)
    }

    // ---- file lifecycle ----

    /// Delete the file itself. `Ok(true)` if it was removed, `Ok(false)` if
    /// it did not exist (reported on the log channel, not an error).
    pub fn remove(&self) -> Result<bool> {
        if !self.path.exists() {
            info!("{} does not exist, nothing to remove", self.path.display());
            return Ok(false);
        }
        fs::remove_file(&self.path).map_err(|e| Error::Io {
            path: self.path.clone(),
            source: e,
        })?;
        debug!("removed {}", self.path.display());
        Ok(true)
    }

    // ---- internal ----

    /// Shared front half of the key-removal operations: `Ok(None)` means the
    /// file is missing or blank and the operation should no-op.
    fn load_for_removal(&self) -> Result<Option<Document>> {
        let text = match persist::read_text(&self.path) {
            Ok(text) => text,
            Err(Error::NotFound { path }) => {
                info!("{} does not exist, nothing to remove", path.display());
                return Ok(None);
            }
            Err(e) => return Err(e),
        };
        if text.trim().is_empty() {
            info!("{} is empty, nothing to remove", self.path.display());
            return Ok(None);
        }
        persist::parse_document(&self.path, &text).map(Some)
    }

    fn check_parent_dir(&self) -> Result<()> {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => {
                if dir.is_dir() {
                    Ok(())
                } else {
                    Err(Error::NotFound {
                        path: dir.to_path_buf(),
                    })
                }
            }
            // bare file name, resolves against the current directory
            _ => Ok(()),
        }
    }
}

/// Strict equality as the value search uses it: scalars compare by value,
/// arrays and objects never match.
fn scalar_match(candidate: &Value, query: &Value) -> bool {
    !query.is_array() && !query.is_object() && candidate == query
}

#[cfg(test)]
mod tests {
    use super::scalar_match;
    use serde_json::json;

    #[test]
    fn scalars_match_by_value() {
        assert!(scalar_match(&json!(1), &json!(1)));
        assert!(scalar_match(&json!("a"), &json!("a")));
        assert!(scalar_match(&json!(true), &json!(true)));
        assert!(scalar_match(&json!(null), &json!(null)));
    }

    #[test]
    fn distinct_scalars_do_not_match() {
        assert!(!scalar_match(&json!(1), &json!(2)));
        assert!(!scalar_match(&json!("a"), &json!("b")));
        assert!(!scalar_match(&json!(1), &json!("1")));
        assert!(!scalar_match(&json!(0), &json!(false)));
    }

    #[test]
    fn integer_and_float_representations_are_distinct() {
        assert!(!scalar_match(&json!(1), &json!(1.0)));
    }

    #[test]
    fn compound_queries_never_match() {
        assert!(!scalar_match(&json!([1, 2]), &json!([1, 2])));
        assert!(!scalar_match(&json!({"a": 1}), &json!({"a": 1})));
        assert!(!scalar_match(&json!(1), &json!([1])));
    }
}
