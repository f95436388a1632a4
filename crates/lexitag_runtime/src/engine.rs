//! The engine facade.
//!
//! An [`Engine`] owns one vocabulary and the decoder, classifier and
//! stripper built over it. Clones are cheap and share everything,
//! including the memo caches.

use std::fmt;
use std::sync::Arc;

use lexitag_analysis::{DescriptionClassifier, DescriptionKind, HeadFinalStripper};
use lexitag_decoder::{CacheStats, SequenceIndex, TagDecoder};
use lexitag_foundation::{DecodeFlags, DecodedTags, Result, Tag};
use lexitag_vocabulary::VocabularyStore;

use crate::config::EngineConfig;

/// Memo cache counters for both caches of an engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EngineStats {
    /// Decode cache counters
    pub decode: CacheStats,
    /// Classify cache counters
    pub classify: CacheStats,
}

impl EngineStats {
    /// Returns the counters of both caches added together.
    #[must_use]
    pub fn total(&self) -> CacheStats {
        self.decode.combine(self.classify)
    }
}

/// Decodes tag phrases, classifies descriptions and strips head-final tags.
#[derive(Clone)]
pub struct Engine {
    store: Arc<VocabularyStore>,
    decoder: Arc<TagDecoder>,
    classifier: Arc<DescriptionClassifier>,
    stripper: Arc<HeadFinalStripper>,
    config: EngineConfig,
}

impl Engine {
    /// Builds an engine over the standard vocabulary.
    ///
    /// # Errors
    ///
    /// Returns an error if the standard tables fail validation.
    pub fn new(config: EngineConfig) -> Result<Self> {
        let store = VocabularyStore::standard()?;
        Ok(Self::with_vocabulary(Arc::new(store), config))
    }

    /// Builds an engine over a caller-built vocabulary.
    #[must_use]
    pub fn with_vocabulary(store: Arc<VocabularyStore>, config: EngineConfig) -> Self {
        let sink = config.diagnostic_sink();
        let index = Arc::new(SequenceIndex::build(&store));
        let decoder = Arc::new(
            TagDecoder::with_index(store.clone(), index)
                .with_cache_capacity(config.decode_cache_capacity)
                .with_diagnostics(sink.clone()),
        );
        let classifier = Arc::new(
            DescriptionClassifier::new(decoder.clone())
                .with_cache_capacity(config.classify_cache_capacity),
        );
        let stripper = Arc::new(HeadFinalStripper::new(store.clone()).with_diagnostics(sink));

        tracing::debug!(
            nodes = decoder.index().node_count(),
            decode_cache = config.decode_cache_capacity,
            classify_cache = config.classify_cache_capacity,
            "engine ready"
        );

        Self {
            store,
            decoder,
            classifier,
            stripper,
            config,
        }
    }

    /// Decodes `text` into alternative tag sets and topics.
    #[must_use]
    pub fn decode_tags(
        &self,
        text: &str,
        allow_any: bool,
        no_unknown_starts: bool,
    ) -> Arc<DecodedTags> {
        self.decoder
            .decode_tags(text, DecodeFlags::new(allow_any, no_unknown_starts))
    }

    /// Classifies a description.
    #[must_use]
    pub fn classify_desc(
        &self,
        text: &str,
        allow_unknown_tags: bool,
        no_unknown_starts: bool,
    ) -> DescriptionKind {
        self.classifier
            .classify_desc(text, allow_unknown_tags, no_unknown_starts)
    }

    /// Strips head-final markers from a word-head form.
    #[must_use]
    pub fn parse_head_final_tags(
        &self,
        language: &str,
        title: &str,
        form: &str,
    ) -> (String, Vec<Tag>) {
        self.stripper.parse_head_final_tags(language, title, form)
    }

    /// Returns the vocabulary.
    #[must_use]
    pub fn vocabulary(&self) -> &Arc<VocabularyStore> {
        &self.store
    }

    /// Returns the decoder.
    #[must_use]
    pub fn decoder(&self) -> &Arc<TagDecoder> {
        &self.decoder
    }

    /// Returns the configuration the engine was built with.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the memo cache counters.
    #[must_use]
    pub fn cache_stats(&self) -> EngineStats {
        EngineStats {
            decode: self.decoder.cache_stats(),
            classify: self.classifier.cache_stats(),
        }
    }

    /// Empties both memo caches.
    pub fn clear_caches(&self) {
        self.decoder.clear_cache();
        self.classifier.clear_cache();
    }
}

impl fmt::Debug for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("config", &self.config)
            .field("stats", &self.cache_stats())
            .finish_non_exhaustive()
    }
}
