//! Integration tests for DescriptionClassifier

use std::sync::Arc;

use lexitag_analysis::english::{is_english, tokenize};
use lexitag_analysis::script::{Script, looks_like_romanization, script_of};
use lexitag_analysis::taxonomy::is_taxonomic;
use lexitag_analysis::{DescriptionClassifier, DescriptionKind};
use lexitag_decoder::TagDecoder;
use lexitag_foundation::NullSink;
use lexitag_vocabulary::VocabularyStore;

fn classifier() -> DescriptionClassifier {
    let store = Arc::new(VocabularyStore::standard().unwrap());
    let decoder = TagDecoder::new(store).with_diagnostics(Arc::new(NullSink));
    DescriptionClassifier::new(Arc::new(decoder))
}

fn classify(text: &str) -> DescriptionKind {
    classifier().classify_desc(text, false, false)
}

// =============================================================================
// Classification Order
// =============================================================================

#[test]
fn documented_examples() {
    assert_eq!(classify(""), DescriptionKind::Other);
    assert_eq!(classify("predicative particle"), DescriptionKind::Tags);
    assert_eq!(classify("winter"), DescriptionKind::English);
    assert_eq!(classify("猫"), DescriptionKind::Other);
}

#[test]
fn topics_alone_are_tags() {
    assert_eq!(classify("nautical"), DescriptionKind::Tags);
    assert_eq!(classify("ornithology"), DescriptionKind::Tags);
}

#[test]
fn tags_win_over_english() {
    // "plural" is both a tag and an English word
    assert_eq!(classify("plural"), DescriptionKind::Tags);
}

#[test]
fn tightening_moves_to_english() {
    let classifier = classifier();
    let text = "plural with a preposition";
    assert_eq!(classifier.classify_desc(text, false, false), DescriptionKind::Tags);
    assert_eq!(classifier.classify_desc(text, false, true), DescriptionKind::English);
}

#[test]
fn unknown_words_are_not_tags() {
    assert_ne!(classify("zzyzx"), DescriptionKind::Tags);
}

#[test]
fn scientific_names() {
    assert_eq!(classify("Homo sapiens"), DescriptionKind::Taxonomic);
    assert_eq!(classify("Quercus alba"), DescriptionKind::Taxonomic);
}

#[test]
fn genus_with_english_word_is_not_taxonomic() {
    assert_ne!(classify("Rosa garden"), DescriptionKind::Taxonomic);
    assert_ne!(classify("Quercus garden"), DescriptionKind::Taxonomic);
}

#[test]
fn years_are_english() {
    assert_eq!(classify("1990"), DescriptionKind::English);
    assert_eq!(classify("1990s"), DescriptionKind::English);
}

#[test]
fn romanizations() {
    assert_eq!(classify("kōhī"), DescriptionKind::Romanization);
    assert_eq!(classify("/ˈkɔfi/"), DescriptionKind::Romanization);
}

#[test]
fn non_latin_is_never_romanization() {
    for text in ["猫", "コーヒー", "кофе", "القهوة", "12 34", "!!"] {
        assert_ne!(classify(text), DescriptionKind::Romanization, "{text}");
    }
}

#[test]
fn whitespace_is_collapsed_before_classifying() {
    assert_eq!(classify("  winter \n"), DescriptionKind::English);
}

#[test]
fn labels_are_stable() {
    let labels: Vec<_> = [
        DescriptionKind::Tags,
        DescriptionKind::English,
        DescriptionKind::Romanization,
        DescriptionKind::Taxonomic,
        DescriptionKind::Other,
    ]
    .iter()
    .map(|kind| kind.as_str())
    .collect();
    assert_eq!(
        labels,
        vec!["tags", "english", "romanization", "taxonomic", "other"]
    );
}

// =============================================================================
// Building Blocks
// =============================================================================

#[test]
fn script_detection() {
    assert_eq!(script_of('a'), Script::Latin);
    assert_eq!(script_of('α'), Script::Greek);
    assert_eq!(script_of('猫'), Script::Forbidden);
    assert!(looks_like_romanization("Pinyin māo"));
    assert!(!looks_like_romanization("māo 猫"));
}

#[test]
fn english_detection() {
    let store = VocabularyStore::standard().unwrap();
    assert_eq!(tokenize("a dog."), vec!["a", "dog"]);
    assert!(is_english(&store, "a dog in the garden"));
    assert!(!is_english(&store, "kōhī"));
}

#[test]
fn taxonomy_detection() {
    let store = VocabularyStore::standard().unwrap();
    assert!(is_taxonomic(&store, "Canis lupus"));
    assert!(!is_taxonomic(&store, "Canis"));
}

// =============================================================================
// Caching
// =============================================================================

#[test]
fn classifications_are_cached_per_flags() {
    let classifier = classifier().with_cache_capacity(8);
    let _ = classifier.classify_desc("winter", false, false);
    let _ = classifier.classify_desc("winter", true, false);
    let _ = classifier.classify_desc("winter", false, false);

    let stats = classifier.cache_stats();
    assert_eq!(stats.len, 2);
    assert_eq!(stats.hits, 1);

    classifier.clear_cache();
    assert_eq!(classifier.cache_stats().len, 0);
    assert_eq!(
        classifier.classify_uncached("winter", false, false),
        DescriptionKind::English
    );
}
