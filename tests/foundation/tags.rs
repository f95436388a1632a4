//! Integration tests for tags, topics and readings
//!
//! Tests set semantics, ordering, and decoder output helpers.

use lexitag_foundation::{DecodeFlags, DecodedTags, Reading, Tag, TagSet, Topic, TopicSet};

fn set(names: &[&str]) -> TagSet {
    names.iter().map(|name| Tag::new(name)).collect()
}

// =============================================================================
// Tag
// =============================================================================

#[test]
fn error_sentinel() {
    let tag = Tag::unknown_error();
    assert_eq!(tag.as_str(), "error-unknown-tag");
    assert!(tag.is_error());
    assert!(!Tag::new("plural").is_error());
}

#[test]
fn raw_tags_have_spaces() {
    assert!(Tag::new("with a preposition").has_space());
    assert!(!Tag::new("stress-pattern-1").has_space());
}

#[test]
fn tag_display() {
    assert_eq!(Tag::new("plural").to_string(), "plural");
    assert_eq!(Topic::new("nautical").to_string(), "nautical");
}

// =============================================================================
// TagSet
// =============================================================================

#[test]
fn tagset_ignores_duplicates_and_order() {
    let mut a = TagSet::new();
    assert!(a.insert(Tag::new("plural")));
    assert!(a.insert(Tag::new("feminine")));
    assert!(!a.insert(Tag::new("plural")));

    assert_eq!(a, set(&["feminine", "plural"]));
    assert_eq!(a.as_strs(), vec!["feminine", "plural"]);
}

#[test]
fn tagset_union() {
    let union = set(&["plural"]).union(&set(&["feminine", "plural"]));
    assert_eq!(union.len(), 2);
    assert!(union.contains("feminine"));
}

#[test]
fn tagset_display() {
    assert_eq!(set(&["plural", "feminine"]).to_string(), "(feminine, plural)");
    assert_eq!(TagSet::new().to_string(), "()");
}

// =============================================================================
// TopicSet and Reading
// =============================================================================

#[test]
fn topicset_keeps_first_seen_order() {
    let topics: TopicSet = ["nautical", "zoology", "nautical"]
        .into_iter()
        .map(Topic::new)
        .collect();
    let names: Vec<_> = topics.iter().map(Topic::as_str).collect();
    assert_eq!(names, vec!["nautical", "zoology"]);
}

#[test]
fn reading_from_parts() {
    let topics: TopicSet = [Topic::new("nautical")].into_iter().collect();

    assert_eq!(Reading::from_parts(TagSet::new(), TopicSet::new()), None);
    assert!(matches!(
        Reading::from_parts(set(&["plural"]), TopicSet::new()),
        Some(Reading::Tags(_))
    ));
    assert!(matches!(
        Reading::from_parts(TagSet::new(), topics.clone()),
        Some(Reading::Topics(_))
    ));

    let mixed = Reading::from_parts(set(&["slang"]), topics).unwrap();
    assert!(mixed.tags().unwrap().contains("slang"));
    assert!(mixed.topics().unwrap().contains("nautical"));
}

// =============================================================================
// DecodedTags and DecodeFlags
// =============================================================================

#[test]
fn empty_result_is_one_empty_set() {
    let empty = DecodedTags::empty();
    assert_eq!(empty.as_tuples(), vec![Vec::<&str>::new()]);
    assert!(empty.topic_names().is_empty());
    assert!(!empty.has_errors());
}

#[test]
fn error_counting() {
    let decoded = DecodedTags {
        tagsets: vec![
            set(&["plural", Tag::UNKNOWN_ERROR]),
            set(&[Tag::UNKNOWN_ERROR]),
            set(&["singular"]),
        ],
        topics: Vec::new(),
    };
    assert!(decoded.has_errors());
    assert_eq!(decoded.error_count(), 2);
    assert_eq!(decoded.all_tags().len(), 3);
}

#[test]
fn flags_builders() {
    assert_eq!(DecodeFlags::STANDARD, DecodeFlags::default());
    let flags = DecodeFlags::STANDARD
        .with_allow_any(true)
        .with_no_unknown_starts(true);
    assert_eq!(flags, DecodeFlags::new(true, true));
}
