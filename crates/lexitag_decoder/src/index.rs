//! Sequence index: a word-level trie over vocabulary phrases.
//!
//! Nodes live in an arena and refer to each other by [`NodeId`]. Each node
//! maps the next word to a child and may carry a terminal list of readings.
//! Inserting a phrase twice appends a second alternative rather than
//! replacing the first.

use std::collections::HashMap;

use lexitag_foundation::{Reading, Tag, TagSet, Topic, TopicSet};
use lexitag_vocabulary::VocabularyStore;

/// Index of a node in the sequence index arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Clone, Debug, Default)]
struct IndexNode {
    children: HashMap<Box<str>, NodeId>,
    readings: Option<Vec<Reading>>,
}

/// Word-level trie mapping phrases to their readings.
#[derive(Clone, Debug)]
pub struct SequenceIndex {
    nodes: Vec<IndexNode>,
    phrases: usize,
}

impl Default for SequenceIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl SequenceIndex {
    /// The root node; every phrase starts here.
    pub const ROOT: NodeId = NodeId(0);

    /// Creates an index containing only the root.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![IndexNode::default()],
            phrases: 0,
        }
    }

    /// Builds the index from a vocabulary store.
    ///
    /// Insertion order: canonical tags, tag aliases, canonical topics, then
    /// topic generalizations. Readings at a node keep that order.
    #[must_use]
    pub fn build(store: &VocabularyStore) -> Self {
        let mut index = Self::new();

        for (tag, _) in store.tags() {
            let set: TagSet = [tag.clone()].into_iter().collect();
            index.insert(tag.as_str(), Reading::Tags(set));
        }

        for alias in store.aliases() {
            for reading in &alias.readings {
                index.insert(&alias.phrase, reading.clone());
            }
        }

        for topic in store.topics() {
            let set: TopicSet = [topic.clone()].into_iter().collect();
            index.insert(topic.as_str(), Reading::Topics(set));
        }

        for generalization in store.generalizations() {
            if let Some(reading) =
                Reading::from_parts(TagSet::new(), generalization.topics.clone())
            {
                index.insert(&generalization.phrase, reading);
            }
        }

        tracing::debug!(
            nodes = index.node_count(),
            phrases = index.phrase_count(),
            "built sequence index"
        );
        index
    }

    /// Appends a reading for a space-separated phrase.
    ///
    /// Phrases without any words are ignored.
    pub fn insert(&mut self, phrase: &str, reading: Reading) {
        let mut words = phrase.split_whitespace().peekable();
        if words.peek().is_none() {
            return;
        }

        let mut node = Self::ROOT;
        for word in words {
            node = match self.nodes[node.0].children.get(word) {
                Some(&child) => child,
                None => {
                    let child = NodeId(self.nodes.len());
                    self.nodes.push(IndexNode::default());
                    self.nodes[node.0].children.insert(word.into(), child);
                    child
                }
            };
        }

        let terminal = &mut self.nodes[node.0].readings;
        match terminal {
            Some(readings) => readings.push(reading),
            None => {
                *terminal = Some(vec![reading]);
                self.phrases += 1;
            }
        }
    }

    /// Follows one word from `node`.
    #[must_use]
    pub fn child(&self, node: NodeId, word: &str) -> Option<NodeId> {
        self.nodes.get(node.0)?.children.get(word).copied()
    }

    /// Returns the readings of a terminal node.
    #[must_use]
    pub fn readings(&self, node: NodeId) -> Option<&[Reading]> {
        self.nodes.get(node.0)?.readings.as_deref()
    }

    /// Returns true if a phrase ends at `node`.
    #[must_use]
    pub fn is_terminal(&self, node: NodeId) -> bool {
        self.readings(node).is_some()
    }

    /// Looks up the readings of a whole phrase.
    #[must_use]
    pub fn lookup(&self, phrase: &str) -> Option<&[Reading]> {
        let mut node = Self::ROOT;
        let mut any = false;
        for word in phrase.split_whitespace() {
            node = self.child(node, word)?;
            any = true;
        }
        if any { self.readings(node) } else { None }
    }

    /// Returns true if the phrase is a complete entry.
    #[must_use]
    pub fn contains_phrase(&self, phrase: &str) -> bool {
        self.lookup(phrase).is_some()
    }

    /// Returns the number of nodes, root included.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of distinct phrases.
    #[must_use]
    pub fn phrase_count(&self) -> usize {
        self.phrases
    }

    /// Collects the tag and topic names a phrase can denote.
    ///
    /// Returns an empty pair if the phrase is absent.
    #[must_use]
    pub fn denotations(&self, phrase: &str) -> (Vec<&Tag>, Vec<&Topic>) {
        let mut tags = Vec::new();
        let mut topics = Vec::new();
        for reading in self.lookup(phrase).unwrap_or_default() {
            for tag in reading.tags().into_iter().flat_map(TagSet::iter) {
                if !tags.contains(&tag) {
                    tags.push(tag);
                }
            }
            for topic in reading.topics().into_iter().flat_map(TopicSet::iter) {
                if !topics.contains(&topic) {
                    topics.push(topic);
                }
            }
        }
        (tags, topics)
    }
}
