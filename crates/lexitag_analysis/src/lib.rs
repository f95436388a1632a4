//! Description classification and head-final tag stripping for lexitag.
//!
//! This crate provides:
//! - [`DescriptionClassifier`] - Tags, English, romanization, taxonomic, or other
//! - [`HeadFinalStripper`] - Removes gender, number, and class markers from heads
//! - [`english`], [`script`], [`taxonomy`] - The individual checks

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod classify;
pub mod english;
pub mod head_final;
pub mod script;
pub mod taxonomy;

pub use classify::{DEFAULT_CLASSIFY_CACHE_CAPACITY, DescriptionClassifier, DescriptionKind};
pub use head_final::HeadFinalStripper;
