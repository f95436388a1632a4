//! Integration tests for SequenceIndex

use lexitag_decoder::SequenceIndex;
use lexitag_foundation::{Reading, Tag, TagSet};
use lexitag_vocabulary::VocabularyStore;

fn tags(names: &[&str]) -> Reading {
    Reading::Tags(names.iter().map(|name| Tag::new(name)).collect::<TagSet>())
}

#[test]
fn walks_word_by_word() {
    let mut index = SequenceIndex::new();
    index.insert("stress pattern 1", tags(&["stress-pattern-1"]));

    let stress = index.child(SequenceIndex::ROOT, "stress").unwrap();
    let pattern = index.child(stress, "pattern").unwrap();
    assert!(!index.is_terminal(pattern));
    let one = index.child(pattern, "1").unwrap();
    assert!(index.is_terminal(one));
    assert_eq!(index.readings(one).unwrap().len(), 1);
    assert!(index.child(SequenceIndex::ROOT, "pattern").is_none());
}

#[test]
fn readings_accumulate_per_phrase() {
    let mut index = SequenceIndex::new();
    index.insert("m or f", tags(&["masculine"]));
    index.insert("m  or  f", tags(&["feminine"]));

    assert_eq!(index.lookup("m or f").unwrap().len(), 2);
    assert_eq!(index.phrase_count(), 1);
}

#[test]
fn empty_phrases_are_ignored() {
    let mut index = SequenceIndex::new();
    index.insert("   ", tags(&["plural"]));
    assert_eq!(index.phrase_count(), 0);
    assert_eq!(index.node_count(), 1);
}

#[test]
fn standard_index_denotations() {
    let store = VocabularyStore::standard().unwrap();
    let index = SequenceIndex::build(&store);

    let (tags, topics) = index.denotations("pl");
    assert_eq!(tags.iter().map(|t| t.as_str()).collect::<Vec<_>>(), vec!["plural"]);
    assert!(topics.is_empty());

    let (tags, topics) = index.denotations("nautical");
    assert!(tags.is_empty());
    assert_eq!(topics.iter().map(|t| t.as_str()).collect::<Vec<_>>(), vec!["nautical"]);

    assert!(index.lookup("zzyzx").is_none());
}
