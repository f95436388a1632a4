//! Integration tests for VocabularyBuilder
//!
//! Tests validation errors and extension of the standard tables.

use lexitag_foundation::{ErrorKind, Reading, TagCategory};
use lexitag_vocabulary::{HeadFamily, VocabularyBuilder};

fn minimal() -> VocabularyBuilder {
    let mut builder = VocabularyBuilder::new();
    builder
        .add_tag("plural", TagCategory::Number)
        .add_tag("class-1", TagCategory::Class)
        .add_tag("class-2", TagCategory::Class)
        .add_topic("nautical");
    builder
}

// =============================================================================
// Validation
// =============================================================================

#[test]
fn empty_builder_is_valid() {
    let store = VocabularyBuilder::new().build().unwrap();
    assert_eq!(store.tags().count(), 0);
    assert!(store.aliases().is_empty());
}

#[test]
fn tag_with_space_is_invalid() {
    let mut builder = minimal();
    builder.add_tag("two words", TagCategory::Misc);
    let err = builder.build().unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidPhrase(_)));
}

#[test]
fn duplicate_tag_reports_context() {
    let mut builder = minimal();
    builder.add_tag("plural", TagCategory::Number);
    let err = builder.build().unwrap_err();
    assert!(matches!(err.kind, ErrorKind::DuplicateTag(_)));
    let context = err.context.unwrap();
    assert_eq!(context.table.as_deref(), Some("tags"));
    assert_eq!(context.entry.as_deref(), Some("plural"));
}

#[test]
fn alias_target_must_exist() {
    let mut builder = minimal();
    builder.add_alias("pl", &["plurall"]);
    let err = builder.build().unwrap_err();
    match err.kind {
        ErrorKind::UnknownAliasTarget { alias, target } => {
            assert_eq!(alias, "pl");
            assert_eq!(target, "plurall");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn generalization_target_must_exist() {
    let mut builder = minimal();
    builder.add_generalization("sailing", &["seafaring"]);
    let err = builder.build().unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnknownGeneralizationTarget { .. }));
}

#[test]
fn head_suffix_tags_must_exist() {
    let mut builder = minimal();
    builder.add_head_suffix(HeadFamily::Bantu, "3/4", "class-3 class-4");
    assert!(builder.build().is_err());
}

#[test]
fn generalization_cycles_terminate() {
    let mut builder = minimal();
    builder
        .add_topic("sailing")
        .add_generalization("sailing", &["nautical"])
        .add_generalization("nautical", &["sailing"]);
    let store = builder.build().unwrap();

    let sailing = store
        .generalizations()
        .iter()
        .find(|g| g.phrase == "sailing")
        .unwrap();
    assert_eq!(sailing.topics.len(), 2);
}

// =============================================================================
// Construction
// =============================================================================

#[test]
fn alias_can_mix_tags_and_topics() {
    let mut builder = minimal();
    builder.add_alias("nautical plural", &["plural nautical"]);
    let store = builder.build().unwrap();
    let alias = store
        .aliases()
        .iter()
        .find(|a| a.phrase == "nautical plural")
        .unwrap();
    assert!(matches!(alias.readings[0], Reading::Mixed { .. }));
}

#[test]
fn alias_phrases_are_normalized() {
    let mut builder = minimal();
    builder.add_alias("  in   the plural ", &["plural"]);
    let store = builder.build().unwrap();
    assert!(store.aliases().iter().any(|a| a.phrase == "in the plural"));
}

#[test]
fn hyphenated_tags_gain_spaced_spelling() {
    let store = minimal().build().unwrap();
    assert!(store.aliases().iter().any(|a| a.phrase == "class 1"));
}

#[test]
fn head_suffixes_and_languages() {
    let mut builder = minimal();
    builder
        .add_head_suffix(HeadFamily::Bantu, "1/2", "class-1 class-2")
        .add_head_suffix(HeadFamily::General, "pl", "?plural")
        .add_head_language(HeadFamily::Bantu, "Swahili")
        .add_numeric_language("Swahili")
        .ok_suspicious_form("either or");
    let store = builder.build().unwrap();

    assert_eq!(store.head_suffixes(HeadFamily::Bantu).len(), 1);
    assert!(store.head_suffixes(HeadFamily::General).get("pl").unwrap().suspicious);
    assert!(store.is_head_language(HeadFamily::Bantu, "Swahili"));
    assert!(store.has_numeric_heads("Swahili"));
    assert!(store.is_ok_suspicious_form("either or"));
}

#[test]
fn lexicon_entries() {
    let mut builder = VocabularyBuilder::new();
    builder
        .add_english_words(["dog", "cat"])
        .add_not_english_word("iv")
        .add_species("Felis catus")
        .add_taxon("Felis")
        .allow_unknown_start("with")
        .ignore_unknown_start("see")
        .ignore_unknown_tag("and");
    let store = builder.build().unwrap();

    assert!(store.is_english_word("cat"));
    assert!(store.is_not_english("iv"));
    assert!(store.is_known_species("Felis catus"));
    assert!(store.is_known_taxon("Felis"));
    assert!(store.is_allowed_unknown_start("with"));
    assert!(store.is_ignored_unknown_start("see also"));
    assert!(store.is_ignored_unknown_tag("and"));
}

#[test]
fn standard_builder_extends() {
    let mut builder = VocabularyBuilder::standard();
    builder
        .add_tag("evidential", TagCategory::Mood)
        .add_alias("evid", &["evidential"]);
    let store = builder.build().unwrap();
    assert!(store.is_tag("evidential"));
    assert!(store.is_tag("plural"));
}
