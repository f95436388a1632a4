//! Decoder inputs and outputs.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::tag::{Tag, TagSet, Topic};

/// Flags controlling how the decoder treats unrecognized spans.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DecodeFlags {
    /// Accept every unknown span verbatim instead of flagging it.
    pub allow_any: bool,
    /// Disable the allow-list of accepted unknown span starts.
    pub no_unknown_starts: bool,
}

impl DecodeFlags {
    /// Default behaviour: allow-listed starts accepted, others flagged.
    pub const STANDARD: Self = Self {
        allow_any: false,
        no_unknown_starts: false,
    };

    /// Creates flags from their two components.
    #[must_use]
    pub const fn new(allow_any: bool, no_unknown_starts: bool) -> Self {
        Self {
            allow_any,
            no_unknown_starts,
        }
    }

    /// Builder method to set `allow_any`.
    #[must_use]
    pub const fn with_allow_any(mut self, allow_any: bool) -> Self {
        self.allow_any = allow_any;
        self
    }

    /// Builder method to set `no_unknown_starts`.
    #[must_use]
    pub const fn with_no_unknown_starts(mut self, no_unknown_starts: bool) -> Self {
        self.no_unknown_starts = no_unknown_starts;
        self
    }
}

/// The result of decoding one description.
///
/// `tagsets` holds the alternative interpretations (disjunctive readings such
/// as "m or f" give more than one). It is never empty: input with no tags
/// decodes to a single empty set.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DecodedTags {
    /// Alternative tag sets, duplicates removed, in first-seen order.
    pub tagsets: Vec<TagSet>,
    /// Topics from every reading on the chosen path.
    pub topics: Vec<Topic>,
}

impl DecodedTags {
    /// The result for input without any tags: one empty set, no topics.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            tagsets: vec![TagSet::new()],
            topics: Vec::new(),
        }
    }

    /// Returns true if any tag set contains an error sentinel.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.tagsets.iter().any(TagSet::has_errors)
    }

    /// Counts error sentinels across all tag sets.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.tagsets
            .iter()
            .map(|set| set.iter().filter(|tag| tag.is_error()).count())
            .sum()
    }

    /// Returns the tag sets as sorted lists of names.
    #[must_use]
    pub fn as_tuples(&self) -> Vec<Vec<&str>> {
        self.tagsets.iter().map(TagSet::as_strs).collect()
    }

    /// Returns the topic names in order.
    #[must_use]
    pub fn topic_names(&self) -> Vec<&str> {
        self.topics.iter().map(Topic::as_str).collect()
    }

    /// Returns every distinct tag across all alternatives, in first-seen order.
    #[must_use]
    pub fn all_tags(&self) -> Vec<&Tag> {
        let mut seen: Vec<&Tag> = Vec::new();
        for tag in self.tagsets.iter().flat_map(TagSet::iter) {
            if !seen.contains(&tag) {
                seen.push(tag);
            }
        }
        seen
    }
}

impl Default for DecodedTags {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Debug for DecodedTags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecodedTags")
            .field("tagsets", &self.tagsets)
            .field("topics", &self.topic_names())
            .finish()
    }
}
