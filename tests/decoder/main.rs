//! Integration tests for Layer 2: Decoder
//!
//! Tests for the sequence index, segmentation, path selection, and the
//! decoder over the standard vocabulary.

mod index;
mod paths;
