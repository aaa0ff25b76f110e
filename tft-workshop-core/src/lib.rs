//! TFT Workshop Core
//!
//! Platform-agnostic logic for the TFT Workshop learning site. This crate
//! provides the key-value persistence abstraction, identity handling, poll
//! tallying, and discussion threads without any UI or browser dependencies.

pub mod content;
pub mod discussion;
pub mod identity;
pub mod poll;
pub mod store;

// Re-export commonly used types
pub use content::{PageId, TeamComp, Tier, meta_comps};
pub use discussion::{Post, Thread};
pub use poll::PollRecord;
pub use store::{KeyValueStore, MemoryStore, StoreError, StoreHandle};
