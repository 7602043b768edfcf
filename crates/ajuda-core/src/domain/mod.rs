//! Domain entities - the core business objects.

mod compose;
mod post;

pub use compose::{ComposeForm, Draft};
pub use post::{Post, PostCollection, PostKind, TIMESTAMP_FORMAT};
