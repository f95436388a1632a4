//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: Tag, TagSet, TopicSet, Reading, DecodedTags, Error,
//! and diagnostics.

mod tags;
