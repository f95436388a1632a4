//! Integration tests for Layer 4: Runtime
//!
//! Tests for the engine facade and its configuration.

mod config;
