//! Vocabulary tables and the validated store built from them.
//!
//! This crate provides:
//! - [`tables`] - The standard tag, topic, head-final, and word-list tables
//! - [`VocabularyBuilder`] - Collects and validates table entries
//! - [`VocabularyStore`] - The immutable store shared by every later layer

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod store;
pub mod tables;

pub use store::{
    Alias, Generalization, HeadFamily, HeadSuffix, HeadSuffixTable, VocabularyBuilder,
    VocabularyStore,
};
