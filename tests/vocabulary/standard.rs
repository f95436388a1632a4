//! Integration tests for the standard vocabulary
//!
//! Tests that the shipped tables validate and answer the queries the
//! decoder and analysis layers rely on.

use lexitag_foundation::{Tag, TagCategory, TagSet};
use lexitag_vocabulary::tables::{TAG_ALIASES, TAGS, TOPICS};
use lexitag_vocabulary::{HeadFamily, VocabularyStore};

fn store() -> VocabularyStore {
    VocabularyStore::standard().unwrap()
}

// =============================================================================
// Tags and Topics
// =============================================================================

#[test]
fn every_table_tag_is_declared() {
    let store = store();
    assert_eq!(store.tags().count(), TAGS.len());
    for (name, category) in TAGS {
        assert_eq!(store.category(name), Some(*category), "{name}");
    }
}

#[test]
fn tags_keep_declaration_order() {
    let store = store();
    let first: Vec<_> = store.tags().take(3).map(|(tag, _)| tag.as_str()).collect();
    let expected: Vec<_> = TAGS.iter().take(3).map(|(name, _)| *name).collect();
    assert_eq!(first, expected);
}

#[test]
fn topics_are_declared() {
    let store = store();
    assert!(store.topics().count() <= TOPICS.len());
    assert!(store.is_topic("nautical"));
    assert!(!store.is_topic("plural"));
    assert!(!store.is_tag("nautical"));
}

#[test]
fn aliases_cover_the_table() {
    let store = store();
    assert!(store.aliases().len() >= TAG_ALIASES.len());
    let or = store
        .aliases()
        .iter()
        .find(|alias| alias.phrase == "m or f")
        .unwrap();
    assert_eq!(or.readings.len(), 2);
}

#[test]
fn generalizations_reach_broad_topics() {
    let store = store();
    let ornithology = store
        .generalizations()
        .iter()
        .find(|g| g.phrase == "ornithology")
        .unwrap();
    for topic in ["zoology", "biology", "natural-sciences", "sciences"] {
        assert!(ornithology.topics.contains(topic), "{topic}");
    }
}

// =============================================================================
// Unknown-span Policy
// =============================================================================

#[test]
fn unknown_span_policy() {
    let store = store();
    assert!(store.is_allowed_unknown_start("with"));
    assert!(!store.is_allowed_unknown_start("zzyzx"));
    assert!(store.is_ignored_unknown_start("see the entry"));
    assert!(store.is_ignored_unknown_tag("and/or"));
    assert!(!store.is_ignored_unknown_tag("plural"));
}

// =============================================================================
// Head-final Tables
// =============================================================================

#[test]
fn head_languages() {
    let store = store();
    assert!(store.is_head_language(HeadFamily::Bantu, "Swahili"));
    assert!(store.is_head_language(HeadFamily::Semitic, "Arabic"));
    assert!(store.is_head_language(HeadFamily::Other, "Russian"));
    assert!(!store.is_head_language(HeadFamily::Bantu, "English"));
    assert!(store.is_head_language(HeadFamily::General, "English"));
    assert!(store.has_numeric_heads("Zulu"));
    assert!(!store.has_numeric_heads("German"));
}

#[test]
fn bantu_table() {
    let store = store();
    let table = store.head_suffixes(HeadFamily::Bantu);
    assert!(!table.is_empty());

    let entry = table.get("9/6").unwrap();
    assert!(entry.suspicious);
    assert_eq!(entry.tags, vec![Tag::new("class-9"), Tag::new("class-6")]);

    assert_eq!(table.longest_match("kitabu 7/8").unwrap().suffix, "7/8");
}

#[test]
fn suspicious_form_allow_list() {
    let store = store();
    assert!(store.is_ok_suspicious_form("either or"));
    assert!(!store.is_ok_suspicious_form("Haus or"));
}

// =============================================================================
// Lexicon
// =============================================================================

#[test]
fn lexicon_queries() {
    let store = store();
    assert!(store.is_english_word("winter"));
    assert!(store.is_not_english("iii"));
    assert!(store.is_known_species("Homo sapiens"));
    assert!(store.is_known_taxon("Quercus"));
    assert!(!store.is_known_taxon("quercus"));
}

#[test]
fn display_order_puts_part_of_speech_first() {
    let store = store();
    let set: TagSet = ["plural", "noun", "feminine"]
        .into_iter()
        .map(Tag::new)
        .collect();
    let ordered: Vec<_> = store
        .display_order(&set)
        .into_iter()
        .map(Tag::as_str)
        .collect();
    assert_eq!(ordered, vec!["noun", "feminine", "plural"]);
    assert_eq!(store.category("noun"), Some(TagCategory::PartOfSpeech));
}
