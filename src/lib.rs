//! File-level CRUD for JSON documents treated as flat key-value maps.
//!
//! Point a [`JsonFile`] at a path and go: every operation re-reads the file,
//! mutates the parsed object in memory, and rewrites the whole file. No
//! daemon, no cache, no schema — just a JSON object on disk.
//!
//! ```rust,no_run
//! use json_filestore::JsonFile;
//! use serde_json::json;
//!
//! let store = JsonFile::new("config.json");
//! store.create().unwrap();
//! store.upsert([("theme".to_string(), json!("dark"))]).unwrap();
//! for (key, value) in store.read_all() {
//!     println!("{key} = {value}");
//! }
//! ```
//!
//! **No concurrency control.** Two callers writing the same file race
//! last-write-wins; there is no locking and no detection. Use advisory file
//! locking or a real database if multiple writers matter.
//!
//! The read operations never fail loudly: on a missing key, unreadable file,
//! or corrupt document you get an empty result and a line on the [`log`]
//! channel. The `try_*` variants expose the typed [`Error`] when you need to
//! tell a missing key from a corrupt file.

#![deny(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod persist;
pub mod store;

pub use error::{Error, Result};
pub use store::{JsonFile, Pair};
