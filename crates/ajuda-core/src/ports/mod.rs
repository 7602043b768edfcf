//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod clock;
mod key_value;

pub use clock::Clock;
pub use key_value::KeyValueStore;
