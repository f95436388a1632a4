//! Engine facade and configuration for lexitag.
//!
//! This crate provides:
//! - [`Engine`] - One vocabulary with its decoder, classifier and stripper
//! - [`EngineConfig`] - Cache sizes and the diagnostic sink
//!
//! # Example
//!
//! ```
//! use lexitag_runtime::{Engine, EngineConfig};
//!
//! let engine = Engine::new(EngineConfig::default()).unwrap();
//! let decoded = engine.decode_tags("m or f", false, false);
//! assert_eq!(decoded.as_tuples().len(), 2);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod engine;

pub use config::EngineConfig;
pub use engine::{Engine, EngineStats};
