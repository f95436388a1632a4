//! Core types, errors, and diagnostics for lexitag.
//!
//! This crate provides:
//! - [`Tag`], [`Topic`] - Canonical vocabulary identifiers
//! - [`TagSet`], [`TopicSet`] - Sets built from them
//! - [`Reading`] - What one vocabulary phrase denotes
//! - [`DecodedTags`], [`DecodeFlags`] - Decoder output and input flags
//! - [`Error`] - Start-up configuration errors with context
//! - [`Diagnostic`], [`DiagnosticSink`] - Advisory messages and their sinks

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod decoded;
pub mod diagnostic;
pub mod error;
pub mod tag;

pub use decoded::{DecodeFlags, DecodedTags};
pub use diagnostic::{
    Diagnostic, DiagnosticBuffer, DiagnosticKind, DiagnosticSink, NullSink, Severity, TracingSink,
};
pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use tag::{Reading, Tag, TagCategory, TagSet, Topic, TopicSet};
