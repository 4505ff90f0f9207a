//! # Storage Layer
//!
//! Persistence is split in two, the way the rest of the crate expects to
//! consume it:
//!
//! - [`KeyValueStore`]: the raw string-to-string store primitive. It handles
//!   the "how" of storage (filesystem vs memory) and knows nothing about
//!   client records.
//! - [`ClientStore`]: the record adapter layered on top. It owns the record
//!   serialization, the storage-key scheme, and the last-line invariant
//!   checks, and works against any `KeyValueStore`.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production backend; one JSON document per key under
//!   a data directory, written atomically (temp file + rename). A missing
//!   directory reads as an empty store.
//! - [`memory::MemoryStore`]: in-memory backend for tests, with a switch to
//!   simulate write failures.
//!
//! All calls are plain blocking calls on the caller's thread. Every operation
//! here is issued sequentially by a single logical task, so there is nothing
//! to overlap; a completed write is visible to the next read by construction.

pub mod clients;
pub mod fs;
pub mod memory;

pub use clients::ClientStore;

use crate::error::Result;

/// Abstract interface for the raw key-value store.
///
/// Keys and values are opaque strings. `get` on an absent key is `Ok(None)`,
/// and `remove` on an absent key succeeds; only real storage failures
/// surface as errors.
pub trait KeyValueStore {
    /// Read the value under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Delete `key`. Deleting an absent key is not an error.
    fn remove(&mut self, key: &str) -> Result<()>;

    /// Every key currently present, in no particular order.
    fn all_keys(&self) -> Result<Vec<String>>;

    /// Bulk read. Each requested key is paired with its value, or `None` if
    /// the key is gone by the time it is read.
    fn multi_get(&self, keys: &[String]) -> Result<Vec<(String, Option<String>)>>;

    /// Bulk delete. Best-effort: stops at the first failing key.
    fn multi_remove(&mut self, keys: &[String]) -> Result<()>;
}
