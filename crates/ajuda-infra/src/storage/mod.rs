//! Key-value store implementations - file-backed and in-memory fallback.

mod memory;

#[cfg(feature = "file")]
mod file;

pub use memory::InMemoryKeyValueStore;

#[cfg(feature = "file")]
pub use file::{FileKeyValueStore, encode_key};
