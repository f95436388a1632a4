//! The path decoder.
//!
//! Each segment is scanned left to right with a frontier of partial trie
//! matches. Whenever a match reaches a terminal node, it proposes a path to
//! the position after the current word: the best path at the position the
//! match chained from, any uncovered words as one unknown step, then the
//! matched phrase. Only the cheapest path is kept per position, and the next
//! segment continues from the best path at the end of this one.
//!
//! A match opened at the root chains from the last position that has a best
//! path. When the previous word closed a phrase that position is the current
//! one, so a fresh match after a terminal needs no separate rule. On equal
//! cost the first candidate wins: matches carried on the frontier come before
//! the one opened at the current word.

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use lexitag_foundation::{
    DecodeFlags, DecodedTags, Diagnostic, DiagnosticKind, DiagnosticSink, Tag, TracingSink,
};
use lexitag_vocabulary::VocabularyStore;

use crate::cache::{BoundedCache, CacheStats};
use crate::index::{NodeId, SequenceIndex};
use crate::path::{Best, Path, Step, select_best};
use crate::segment::{expand_slashes, split_segments};

/// Default number of memoized decode results.
pub const DEFAULT_DECODE_CACHE_CAPACITY: usize = 65_536;

/// A partial match in flight.
#[derive(Clone, Copy, Debug)]
struct Match {
    /// Trie node reached so far
    node: NodeId,
    /// Word position where the match began
    start: usize,
    /// Position the match chains from
    last: usize,
}

/// A memoized result with the diagnostics produced while computing it.
#[derive(Clone, Debug)]
struct CachedDecode {
    tags: Arc<DecodedTags>,
    diagnostics: Arc<[Diagnostic]>,
}

type DecodeCache = BoundedCache<(String, DecodeFlags), CachedDecode>;

/// Decodes descriptions into tag sets and topics.
///
/// Decoding is total and deterministic. Results are memoized per
/// `(text, flags)` together with their diagnostics, so a cache hit reports
/// the same diagnostics as the call that computed it.
pub struct TagDecoder {
    store: Arc<VocabularyStore>,
    index: Arc<SequenceIndex>,
    cache: Mutex<DecodeCache>,
    diagnostics: Arc<dyn DiagnosticSink>,
}

impl TagDecoder {
    /// Creates a decoder, building the index from `store`.
    #[must_use]
    pub fn new(store: Arc<VocabularyStore>) -> Self {
        let index = Arc::new(SequenceIndex::build(&store));
        Self::with_index(store, index)
    }

    /// Creates a decoder around an index already built from `store`.
    #[must_use]
    pub fn with_index(store: Arc<VocabularyStore>, index: Arc<SequenceIndex>) -> Self {
        Self {
            store,
            index,
            cache: Mutex::new(BoundedCache::new(DEFAULT_DECODE_CACHE_CAPACITY)),
            diagnostics: Arc::new(TracingSink),
        }
    }

    /// Replaces the memo cache with one of the given capacity.
    #[must_use]
    pub fn with_cache_capacity(mut self, capacity: usize) -> Self {
        self.cache = Mutex::new(BoundedCache::new(capacity));
        self
    }

    /// Sends diagnostics to `sink` instead of `tracing`.
    #[must_use]
    pub fn with_diagnostics(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.diagnostics = sink;
        self
    }

    /// Returns the vocabulary store.
    #[must_use]
    pub fn store(&self) -> &Arc<VocabularyStore> {
        &self.store
    }

    /// Returns the sequence index.
    #[must_use]
    pub fn index(&self) -> &Arc<SequenceIndex> {
        &self.index
    }

    /// Decodes `text`, serving repeated calls from the memo cache.
    pub fn decode_tags(&self, text: &str, flags: DecodeFlags) -> Arc<DecodedTags> {
        let cached = self.decode_cached(text, flags);
        for diagnostic in cached.diagnostics.iter() {
            self.diagnostics.report(diagnostic.clone());
        }
        cached.tags
    }

    /// Like [`decode_tags`](Self::decode_tags), but reports nothing.
    pub fn decode_quiet(&self, text: &str, flags: DecodeFlags) -> Arc<DecodedTags> {
        self.decode_cached(text, flags).tags
    }

    /// Decodes `text` without consulting the cache.
    pub fn decode_uncached(&self, text: &str, flags: DecodeFlags) -> DecodedTags {
        let (decoded, diagnostics) = self.analyze(text, flags);
        for diagnostic in diagnostics {
            self.diagnostics.report(diagnostic);
        }
        decoded
    }

    fn decode_cached(&self, text: &str, flags: DecodeFlags) -> CachedDecode {
        let key = (text.to_string(), flags);
        if let Some(hit) = self.lock_cache().get(&key) {
            return hit;
        }

        let (decoded, diagnostics) = self.analyze(text, flags);
        let cached = CachedDecode {
            tags: Arc::new(decoded),
            diagnostics: diagnostics.into(),
        };
        self.lock_cache().insert(key, cached.clone());
        cached
    }

    /// Decodes `text`, retrying with slashes expanded if that helps.
    fn analyze(&self, text: &str, flags: DecodeFlags) -> (DecodedTags, Vec<Diagnostic>) {
        let mut chosen = self.decode_path(text, flags);
        let mut decoded = chosen.path.expand();

        if decoded.has_errors() && text.contains('/') {
            if let Some(expanded) = expand_slashes(text, &self.index) {
                let retry = self.decode_path(&expanded, flags);
                let retried = retry.path.expand();
                if retried.error_count() <= decoded.error_count() {
                    chosen = retry;
                    decoded = retried;
                }
            }
        }

        (decoded, Self::diagnose(text, &chosen))
    }

    /// Returns the memo cache counters.
    pub fn cache_stats(&self) -> CacheStats {
        self.lock_cache().stats()
    }

    /// Empties the memo cache.
    pub fn clear_cache(&self) {
        self.lock_cache().clear();
    }

    fn lock_cache(&self) -> std::sync::MutexGuard<'_, DecodeCache> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn diagnose(text: &str, chosen: &Best<'_>) -> Vec<Diagnostic> {
        let mut diagnostics: Vec<Diagnostic> = chosen
            .path
            .error_spans()
            .map(|span| {
                Diagnostic::warning(
                    DiagnosticKind::UnknownTag,
                    text,
                    format!("unrecognized tag span {span:?}"),
                )
            })
            .collect();
        if chosen.ties > 0 {
            diagnostics.push(Diagnostic::debug(
                DiagnosticKind::AmbiguousPath,
                text,
                format!("{} paths share the lowest cost", chosen.ties + 1),
            ));
        }
        diagnostics
    }

    /// Decodes every segment, chaining each on the previous one's best path.
    fn decode_path(&self, text: &str, flags: DecodeFlags) -> Best<'_> {
        let mut carry = Best {
            path: Path::empty(),
            ties: 0,
        };
        for segment in split_segments(text) {
            let words: Vec<&str> = segment.split_whitespace().collect();
            if words.is_empty() {
                continue;
            }
            carry = self.decode_segment(&words, carry.path, flags);
        }
        carry
    }

    fn decode_segment<'a>(
        &'a self,
        words: &[&str],
        start: Path<'a>,
        flags: DecodeFlags,
    ) -> Best<'a> {
        let index: &'a SequenceIndex = &self.index;
        let mut best: Vec<Option<Best<'a>>> = vec![None; words.len() + 1];
        best[0] = Some(Best {
            path: start,
            ties: 0,
        });
        let mut frontier: Vec<Match> = Vec::new();
        let mut max_last = 0;

        for (i, &word) in words.iter().enumerate() {
            let mut next: Vec<Match> = frontier
                .iter()
                .filter_map(|m| index.child(m.node, word).map(|node| Match { node, ..*m }))
                .collect();
            if let Some(node) = index.child(SequenceIndex::ROOT, word) {
                next.push(Match {
                    node,
                    start: i,
                    last: max_last,
                });
            }

            let candidates: Vec<Path<'a>> = next
                .iter()
                .filter_map(|m| {
                    let readings = index.readings(m.node)?;
                    let base = &best[m.last].as_ref()?.path;
                    let path = match self.check_unknown(&words[m.last..m.start], flags) {
                        Some(step) => base.extended(step),
                        None => base.clone(),
                    };
                    Some(path.extended(Step::Known {
                        words: i + 1 - m.start,
                        readings,
                    }))
                })
                .collect();

            if let Some(winner) = select_best(candidates) {
                best[i + 1] = Some(winner);
                max_last = i + 1;
            }
            frontier = next;
        }

        let end = words.len();
        if let Some(reached) = best[end].take() {
            return reached;
        }
        let base = best[max_last].take().map(|b| b.path).unwrap_or_default();
        let path = match self.check_unknown(&words[max_last..end], flags) {
            Some(step) => base.extended(step),
            None => base,
        };
        Best { path, ties: 0 }
    }

    /// Decides what an uncovered span of words becomes.
    fn check_unknown(&self, words: &[&str], flags: DecodeFlags) -> Option<Step<'static>> {
        let first = *words.first()?;
        let span = words.join(" ");

        if self.store.is_ignored_unknown_start(&span) {
            return Some(Step::Unknown { span, tag: None });
        }
        if self.store.is_ignored_unknown_tag(&span) {
            return None;
        }

        let accepted = flags.allow_any
            || first.starts_with('~')
            || (!flags.no_unknown_starts
                && words.len() > 1
                && self.store.is_allowed_unknown_start(first));
        let tag = if accepted {
            Tag::new(&span)
        } else {
            Tag::unknown_error()
        };
        Some(Step::Unknown {
            span,
            tag: Some(tag),
        })
    }
}

impl fmt::Debug for TagDecoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TagDecoder")
            .field("phrases", &self.index.phrase_count())
            .field("cache", &self.cache_stats())
            .finish_non_exhaustive()
    }
}
