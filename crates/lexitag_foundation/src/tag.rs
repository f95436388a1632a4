//! Tags, topics, and the sets built from them.
//!
//! Tags and topics are shared strings: cloning one is a reference-count bump,
//! which matters because the decoder copies them into every combination it
//! produces.

use std::borrow::Borrow;
use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// =============================================================================
// Tag
// =============================================================================

/// A grammatical, dialectal, or register annotation such as `plural`.
///
/// Canonical tags come from the vocabulary. Raw tags (unknown spans accepted
/// verbatim) and the error sentinel are also represented as `Tag`s.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tag(Arc<str>);

impl Tag {
    /// Name of the sentinel emitted for spans that matched nothing.
    pub const UNKNOWN_ERROR: &'static str = "error-unknown-tag";

    /// Creates a tag from its name.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self(Arc::from(name))
    }

    /// Returns the sentinel tag for unrecognized input.
    #[must_use]
    pub fn unknown_error() -> Self {
        Self::new(Self::UNKNOWN_ERROR)
    }

    /// Returns the tag name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true for error sentinels (any tag starting with `error-`).
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.0.starts_with("error-")
    }

    /// Returns true if the tag contains a space.
    ///
    /// Canonical tags never do, so this marks raw text accepted verbatim.
    #[must_use]
    pub fn has_space(&self) -> bool {
        self.0.contains(' ')
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tag({:?})", &*self.0)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for Tag {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Tag {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

// =============================================================================
// Tag Category
// =============================================================================

/// The category every canonical tag belongs to.
///
/// Precedence only orders tags for display; it never affects matching.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TagCategory {
    /// Parts of speech and word classes (`noun`, `particle`)
    PartOfSpeech,
    /// Noun classes (`class-1`, `class-2a`)
    Class,
    /// Grammatical gender and animacy
    Gender,
    /// Grammatical number
    Number,
    /// Grammatical case
    Case,
    /// Grammatical person
    Person,
    /// Tense
    Tense,
    /// Mood and non-finite forms
    Mood,
    /// Voice
    Voice,
    /// Aspect
    Aspect,
    /// Comparison degree
    Degree,
    /// Stress and accent patterns
    Stress,
    /// Syntactic behaviour (`transitive`, `predicative`)
    Syntax,
    /// Register and style (`formal`, `slang`)
    Register,
    /// Currency in time (`archaic`, `obsolete`)
    Temporal,
    /// Regional and dialectal usage
    Dialect,
    /// Anything else
    Misc,
}

impl TagCategory {
    /// Returns the display precedence (lower sorts first).
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::PartOfSpeech => 0,
            Self::Class => 10,
            Self::Gender => 20,
            Self::Number => 30,
            Self::Case => 40,
            Self::Person => 50,
            Self::Tense => 60,
            Self::Mood => 70,
            Self::Voice => 80,
            Self::Aspect => 90,
            Self::Degree => 100,
            Self::Stress => 110,
            Self::Syntax => 120,
            Self::Register => 130,
            Self::Temporal => 140,
            Self::Dialect => 150,
            Self::Misc => 200,
        }
    }

    /// Returns the category name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::PartOfSpeech => "pos",
            Self::Class => "class",
            Self::Gender => "gender",
            Self::Number => "number",
            Self::Case => "case",
            Self::Person => "person",
            Self::Tense => "tense",
            Self::Mood => "mood",
            Self::Voice => "voice",
            Self::Aspect => "aspect",
            Self::Degree => "degree",
            Self::Stress => "stress",
            Self::Syntax => "syntax",
            Self::Register => "register",
            Self::Temporal => "temporal",
            Self::Dialect => "dialect",
            Self::Misc => "misc",
        }
    }
}

impl fmt::Display for TagCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Topic
// =============================================================================

/// A semantic-domain label such as `nautical`.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Topic(Arc<str>);

impl Topic {
    /// Creates a topic from its name.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self(Arc::from(name))
    }

    /// Returns the topic name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Topic({:?})", &*self.0)
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for Topic {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Topic {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

// =============================================================================
// TagSet
// =============================================================================

/// One interpretation: a duplicate-free set of tags.
///
/// Equality ignores insertion order. Iteration is sorted by name.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TagSet(BTreeSet<Tag>);

impl TagSet {
    /// Creates an empty tag set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of tags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the set has no tags.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Adds a tag. Returns false if it was already present.
    pub fn insert(&mut self, tag: Tag) -> bool {
        self.0.insert(tag)
    }

    /// Returns true if the set contains a tag with this name.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    /// Returns the union of two sets.
    #[must_use]
    pub fn union(&self, other: &TagSet) -> TagSet {
        Self(self.0.union(&other.0).cloned().collect())
    }

    /// Returns true if any tag is an error sentinel.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.0.iter().any(Tag::is_error)
    }

    /// Iterates over the tags in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Tag> {
        self.0.iter()
    }

    /// Returns the tag names in name order.
    #[must_use]
    pub fn as_strs(&self) -> Vec<&str> {
        self.0.iter().map(Tag::as_str).collect()
    }
}

impl FromIterator<Tag> for TagSet {
    fn from_iter<I: IntoIterator<Item = Tag>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a TagSet {
    type Item = &'a Tag;
    type IntoIter = std::collections::btree_set::Iter<'a, Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Debug for TagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.0.iter().map(Tag::as_str)).finish()
    }
}

impl fmt::Display for TagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, tag) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(tag.as_str())?;
        }
        f.write_str(")")
    }
}

// =============================================================================
// TopicSet
// =============================================================================

/// An order-preserving, duplicate-free list of topics.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TopicSet(Vec<Topic>);

impl TopicSet {
    /// Creates an empty topic set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of topics.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the set has no topics.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Appends a topic unless already present. Returns false on duplicates.
    pub fn insert(&mut self, topic: Topic) -> bool {
        if self.0.contains(&topic) {
            return false;
        }
        self.0.push(topic);
        true
    }

    /// Returns true if the set contains a topic with this name.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|t| t.as_str() == name)
    }

    /// Iterates over the topics in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Topic> {
        self.0.iter()
    }
}

impl FromIterator<Topic> for TopicSet {
    fn from_iter<I: IntoIterator<Item = Topic>>(iter: I) -> Self {
        let mut set = Self::new();
        for topic in iter {
            set.insert(topic);
        }
        set
    }
}

impl fmt::Debug for TopicSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter().map(Topic::as_str)).finish()
    }
}

// =============================================================================
// Reading
// =============================================================================

/// What one vocabulary phrase denotes.
///
/// A phrase may denote tags, topics, or both (`nautical slang`). Several
/// readings can hang off the same phrase; each is one alternative.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Reading {
    /// Only tags
    Tags(TagSet),
    /// Only topics
    Topics(TopicSet),
    /// Tags and topics together
    Mixed {
        /// The tags
        tags: TagSet,
        /// The topics
        topics: TopicSet,
    },
}

impl Reading {
    /// Builds a reading from its parts, or `None` if both are empty.
    #[must_use]
    pub fn from_parts(tags: TagSet, topics: TopicSet) -> Option<Self> {
        match (tags.is_empty(), topics.is_empty()) {
            (true, true) => None,
            (false, true) => Some(Self::Tags(tags)),
            (true, false) => Some(Self::Topics(topics)),
            (false, false) => Some(Self::Mixed { tags, topics }),
        }
    }

    /// Returns the tags, if this reading has any.
    #[must_use]
    pub fn tags(&self) -> Option<&TagSet> {
        match self {
            Self::Tags(tags) | Self::Mixed { tags, .. } => Some(tags),
            Self::Topics(_) => None,
        }
    }

    /// Returns the topics, if this reading has any.
    #[must_use]
    pub fn topics(&self) -> Option<&TopicSet> {
        match self {
            Self::Topics(topics) | Self::Mixed { topics, .. } => Some(topics),
            Self::Tags(_) => None,
        }
    }
}
