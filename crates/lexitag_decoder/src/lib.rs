//! Phrase decoding for lexitag.
//!
//! This crate provides:
//! - [`SequenceIndex`] - Word-level trie over every vocabulary phrase
//! - [`split_segments`], [`expand_slashes`] - Segmentation helpers
//! - [`Path`], [`select_best`] - Decoding paths and their cost
//! - [`TagDecoder`] - The memoized decoder
//! - [`BoundedCache`] - The least-recently-used memo cache

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cache;
pub mod decoder;
pub mod index;
pub mod path;
pub mod segment;


pub use cache::{BoundedCache, CacheStats};
pub use decoder::{DEFAULT_DECODE_CACHE_CAPACITY, TagDecoder};
pub use index::{NodeId, SequenceIndex};
pub use path::{Best, Path, Step, UNKNOWN_PENALTY, select_best};
pub use segment::{expand_slashes, split_segments};
