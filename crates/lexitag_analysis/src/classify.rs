//! Description classification.
//!
//! Decides whether a short description is a tag list, English text, a
//! romanization, a taxonomic name, or something else. The checks run in a
//! fixed order and the first that matches wins.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use lexitag_decoder::{BoundedCache, CacheStats, TagDecoder};
use lexitag_foundation::DecodeFlags;

use crate::english::is_english;
use crate::script::looks_like_romanization;
use crate::taxonomy::is_taxonomic;

/// Default number of memoized classifications.
pub const DEFAULT_CLASSIFY_CACHE_CAPACITY: usize = 16_384;

/// What a description turned out to be.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DescriptionKind {
    /// Decodes cleanly into tags or topics
    Tags,
    /// Reads as English
    English,
    /// A transcription in Latin letters
    Romanization,
    /// A scientific name
    Taxonomic,
    /// None of the above
    Other,
}

impl DescriptionKind {
    /// Returns the stable label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tags => "tags",
            Self::English => "english",
            Self::Romanization => "romanization",
            Self::Taxonomic => "taxonomic",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for DescriptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

type ClassifyCache = BoundedCache<(String, bool, bool), DescriptionKind>;

/// Classifies descriptions, memoizing the results.
pub struct DescriptionClassifier {
    decoder: Arc<TagDecoder>,
    cache: Mutex<ClassifyCache>,
}

impl DescriptionClassifier {
    /// Creates a classifier sharing `decoder`.
    #[must_use]
    pub fn new(decoder: Arc<TagDecoder>) -> Self {
        Self {
            decoder,
            cache: Mutex::new(BoundedCache::new(DEFAULT_CLASSIFY_CACHE_CAPACITY)),
        }
    }

    /// Replaces the memo cache with one of the given capacity.
    #[must_use]
    pub fn with_cache_capacity(mut self, capacity: usize) -> Self {
        self.cache = Mutex::new(BoundedCache::new(capacity));
        self
    }

    /// Returns the decoder used for the tag check.
    #[must_use]
    pub fn decoder(&self) -> &Arc<TagDecoder> {
        &self.decoder
    }

    /// Classifies `text`, serving repeated calls from the memo cache.
    ///
    /// `allow_unknown_tags` accepts tag sets made only of raw multi-word
    /// spans; `no_unknown_starts` is passed on to the decoder.
    pub fn classify_desc(
        &self,
        text: &str,
        allow_unknown_tags: bool,
        no_unknown_starts: bool,
    ) -> DescriptionKind {
        let key = (text.to_string(), allow_unknown_tags, no_unknown_starts);
        if let Some(kind) = self.lock_cache().get(&key) {
            return kind;
        }
        let kind = self.classify_uncached(text, allow_unknown_tags, no_unknown_starts);
        self.lock_cache().insert(key, kind);
        kind
    }

    /// Classifies `text` without consulting the cache.
    #[must_use]
    pub fn classify_uncached(
        &self,
        text: &str,
        allow_unknown_tags: bool,
        no_unknown_starts: bool,
    ) -> DescriptionKind {
        let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
        if text.is_empty() {
            return DescriptionKind::Other;
        }
        let store = self.decoder.store();

        let flags = DecodeFlags::new(false, no_unknown_starts);
        let decoded = self.decoder.decode_quiet(&text, flags);
        let tagged = decoded.tagsets.iter().any(|set| {
            !set.has_errors()
                && (!decoded.topics.is_empty()
                    || allow_unknown_tags
                    || set.iter().any(|tag| !tag.has_space()))
        });
        if tagged {
            return DescriptionKind::Tags;
        }

        if is_taxonomic(store, &text) {
            return DescriptionKind::Taxonomic;
        }
        if is_english(store, &text) {
            return DescriptionKind::English;
        }
        if text.len() > 2 && text.starts_with('/') && text.ends_with('/') {
            return DescriptionKind::Romanization;
        }
        if looks_like_romanization(&text) {
            return DescriptionKind::Romanization;
        }
        DescriptionKind::Other
    }

    /// Returns the memo cache counters.
    pub fn cache_stats(&self) -> CacheStats {
        self.lock_cache().stats()
    }

    /// Empties the memo cache.
    pub fn clear_cache(&self) {
        self.lock_cache().clear();
    }

    fn lock_cache(&self) -> MutexGuard<'_, ClassifyCache> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for DescriptionClassifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DescriptionClassifier")
            .field("cache", &self.cache_stats())
            .finish_non_exhaustive()
    }
}
