//! # Ajuda Infrastructure
//!
//! Concrete implementations of the ports defined in `ajuda-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - In-memory store only
//! - `file` - File-backed device store under a data directory

pub mod clock;
pub mod storage;

pub use clock::SystemClock;
pub use storage::InMemoryKeyValueStore;

#[cfg(feature = "file")]
pub use storage::FileKeyValueStore;
