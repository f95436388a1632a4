//! Integration tests for Layer 1: Vocabulary
//!
//! Tests for the standard tables, the builder's validation, and store queries.

mod builder;
mod standard;
