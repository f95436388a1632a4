//! Standard vocabulary tables.
//!
//! These are deployed configuration, not code: the builder in
//! [`crate::store`] validates and indexes them at start-up.

pub mod heads;
pub mod lexicon;
pub mod tags;
pub mod topics;
pub mod unknown;

pub use tags::{TAG_ALIASES, TAGS};
pub use topics::{TOPIC_GENERALIZATIONS, TOPICS};
pub use unknown::{ALLOWED_UNKNOWN_STARTS, IGNORED_UNKNOWN_STARTS, IGNORED_UNKNOWN_TAGS};
