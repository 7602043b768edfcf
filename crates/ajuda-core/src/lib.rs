//! # Ajuda Core
//!
//! The domain layer of the neighborhood help board.
//! This crate contains the post model, the persistence and controller
//! services, and the ports that infrastructure must implement.
//! It has zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use error::{KeyValueError, StoreError};
pub use service::{
    CreateOutcome, PersistMode, PostListController, PostStore, STORAGE_KEY, SubmitOutcome,
};
