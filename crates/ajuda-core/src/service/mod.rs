//! Services - the post store and the list controller built on the ports.

mod controller;
mod post_store;

#[cfg(test)]
pub(crate) mod testing;

pub use controller::{CreateOutcome, PersistMode, PostListController, SubmitOutcome};
pub use post_store::{PostStore, STORAGE_KEY};
