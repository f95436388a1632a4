//! Lexitag - Tag and topic decoding for dictionary text
//!
//! This crate re-exports all layers of the lexitag system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: lexitag_runtime     — Engine facade, configuration
//! Layer 3: lexitag_analysis    — Description classifier, head-final stripper
//! Layer 2: lexitag_decoder     — Sequence index, segmenter, path decoder
//! Layer 1: lexitag_vocabulary  — Vocabulary tables and store
//! Layer 0: lexitag_foundation  — Core types (Tag, TagSet, Error, Diagnostic)
//! ```

pub use lexitag_analysis as analysis;
pub use lexitag_decoder as decoder;
pub use lexitag_foundation as foundation;
pub use lexitag_runtime as runtime;
pub use lexitag_vocabulary as vocabulary;

pub use lexitag_analysis::DescriptionKind;
pub use lexitag_foundation::{DecodedTags, Tag, TagSet, Topic};
pub use lexitag_runtime::{Engine, EngineConfig};
