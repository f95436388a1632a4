//! Configuration for the engine.

use std::fmt;
use std::sync::Arc;

use lexitag_analysis::DEFAULT_CLASSIFY_CACHE_CAPACITY;
use lexitag_decoder::DEFAULT_DECODE_CACHE_CAPACITY;
use lexitag_foundation::{DiagnosticSink, NullSink, TracingSink};

/// Configuration for an [`Engine`](crate::Engine).
///
/// Controls memo cache sizes and where diagnostics go.
#[derive(Clone)]
pub struct EngineConfig {
    /// Maximum number of memoized decodes (0 disables the cache).
    pub decode_cache_capacity: usize,

    /// Maximum number of memoized classifications (0 disables the cache).
    pub classify_cache_capacity: usize,

    /// Diagnostic sink; `None` reports through `tracing`.
    pub diagnostics: Option<Arc<dyn DiagnosticSink>>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            decode_cache_capacity: DEFAULT_DECODE_CACHE_CAPACITY,
            classify_cache_capacity: DEFAULT_CLASSIFY_CACHE_CAPACITY,
            diagnostics: None,
        }
    }
}

impl EngineConfig {
    /// Creates a configuration with no memoization.
    ///
    /// Every call recomputes its result; useful when measuring the decoder.
    #[must_use]
    pub fn uncached() -> Self {
        Self {
            decode_cache_capacity: 0,
            classify_cache_capacity: 0,
            diagnostics: None,
        }
    }

    /// Creates a configuration that drops all diagnostics.
    #[must_use]
    pub fn quiet() -> Self {
        Self {
            diagnostics: Some(Arc::new(NullSink)),
            ..Self::default()
        }
    }

    /// Creates a configuration with small caches for short-lived engines.
    #[must_use]
    pub fn compact() -> Self {
        Self {
            decode_cache_capacity: 1024,
            classify_cache_capacity: 256,
            diagnostics: None,
        }
    }

    /// Builder method to set the decode cache capacity.
    #[must_use]
    pub fn with_decode_cache_capacity(mut self, capacity: usize) -> Self {
        self.decode_cache_capacity = capacity;
        self
    }

    /// Builder method to set the classify cache capacity.
    #[must_use]
    pub fn with_classify_cache_capacity(mut self, capacity: usize) -> Self {
        self.classify_cache_capacity = capacity;
        self
    }

    /// Builder method to set the diagnostic sink.
    #[must_use]
    pub fn with_diagnostics(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.diagnostics = Some(sink);
        self
    }

    /// Returns the configured sink, or a [`TracingSink`].
    #[must_use]
    pub fn diagnostic_sink(&self) -> Arc<dyn DiagnosticSink> {
        self.diagnostics
            .clone()
            .unwrap_or_else(|| Arc::new(TracingSink))
    }
}

impl fmt::Debug for EngineConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EngineConfig")
            .field("decode_cache_capacity", &self.decode_cache_capacity)
            .field("classify_cache_capacity", &self.classify_cache_capacity)
            .field("custom_diagnostics", &self.diagnostics.is_some())
            .finish()
    }
}
