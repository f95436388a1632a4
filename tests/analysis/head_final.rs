//! Integration tests for HeadFinalStripper
//!
//! Tests family ordering, title guards, and leftover reporting.

use std::sync::Arc;

use lexitag_analysis::HeadFinalStripper;
use lexitag_foundation::{DiagnosticBuffer, DiagnosticKind, Severity, Tag, TagCategory};
use lexitag_vocabulary::{HeadFamily, VocabularyBuilder, VocabularyStore};

fn stripper() -> (HeadFinalStripper, Arc<DiagnosticBuffer>) {
    let buffer = Arc::new(DiagnosticBuffer::new(32));
    let store = Arc::new(VocabularyStore::standard().unwrap());
    (
        HeadFinalStripper::new(store).with_diagnostics(buffer.clone()),
        buffer,
    )
}

fn names(tags: &[Tag]) -> Vec<&str> {
    tags.iter().map(Tag::as_str).collect()
}

// =============================================================================
// Families
// =============================================================================

#[test]
fn semitic_markers() {
    let (stripper, buffer) = stripper();
    let (form, tags) = stripper.parse_head_final_tags("Arabic", "كتاب", "كتاب m du");
    assert_eq!(form, "كتاب");
    assert_eq!(names(&tags), vec!["masculine", "dual"]);
    assert!(buffer.is_empty());
}

#[test]
fn other_family_markers() {
    let (stripper, _) = stripper();
    let (form, tags) = stripper.parse_head_final_tags("Slovene", "okno", "okno n du");
    assert_eq!(form, "okno");
    assert_eq!(names(&tags), vec!["neuter", "dual"]);
}

#[test]
fn family_tables_only_apply_to_their_languages() {
    let (stripper, buffer) = stripper();
    let (form, tags) = stripper.parse_head_final_tags("German", "Haus", "Haus du");
    assert_eq!(form, "Haus du");
    assert!(tags.is_empty());
    assert_eq!(buffer.by_kind(DiagnosticKind::UnhandledSuffix).len(), 1);
}

#[test]
fn numeric_class_needs_numeric_language() {
    let (stripper, _) = stripper();
    let (_, tags) = stripper.parse_head_final_tags("Zulu", "umuntu", "umuntu 1");
    assert_eq!(names(&tags), vec!["class-1"]);

    let (form, tags) = stripper.parse_head_final_tags("French", "Louis", "Louis 14");
    assert_eq!(form, "Louis 14");
    assert!(tags.is_empty());
}

// =============================================================================
// Guards and Diagnostics
// =============================================================================

#[test]
fn title_ending_in_marker_is_unchanged() {
    let (stripper, _) = stripper();
    let (form, tags) = stripper.parse_head_final_tags("Swahili", "kitabu 7/8", "kitabu 7/8");
    assert_eq!(form, "kitabu 7/8");
    assert!(tags.is_empty());
}

#[test]
fn general_guard_needs_a_whole_word() {
    let (stripper, _) = stripper();
    // the title ends in "f" but not in the word "f"
    let (form, tags) = stripper.parse_head_final_tags("Danish", "elf", "elf f");
    assert_eq!(form, "elf");
    assert_eq!(names(&tags), vec!["feminine"]);
}

#[test]
fn suspicious_markers_warn() {
    let (stripper, buffer) = stripper();
    let (form, tags) = stripper.parse_head_final_tags("Arabic", "x", "كلب d");
    assert_eq!(form, "كلب");
    assert_eq!(names(&tags), vec!["dual"]);

    let warnings = buffer.by_kind(DiagnosticKind::SuspiciousSuffix);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].severity, Severity::Warning);
    assert_eq!(warnings[0].input, "كلب d");
}

#[test]
fn leftover_class_numeral_is_reported() {
    let (stripper, buffer) = stripper();
    let (form, tags) = stripper.parse_head_final_tags("German", "Buch", "Buch 7/8 pl");
    assert_eq!(form, "Buch 7/8");
    assert_eq!(names(&tags), vec!["plural"]);
    assert_eq!(buffer.by_kind(DiagnosticKind::UnhandledSuffix).len(), 1);
}

#[test]
fn allow_listed_forms_are_quiet() {
    let (stripper, buffer) = stripper();
    let (form, tags) = stripper.parse_head_final_tags("English", "whether", "whether or");
    assert_eq!(form, "whether or");
    assert!(tags.is_empty());
    assert!(buffer.is_empty());
}

#[test]
fn plain_forms_pass_through() {
    let (stripper, buffer) = stripper();
    let (form, tags) = stripper.parse_head_final_tags("English", "dog", "  dog ");
    assert_eq!(form, "dog");
    assert!(tags.is_empty());
    assert!(buffer.is_empty());
}

// =============================================================================
// Custom Tables
// =============================================================================

#[test]
fn custom_family_table() {
    let mut builder = VocabularyBuilder::new();
    builder
        .add_tag("class-1", TagCategory::Class)
        .add_tag("class-2", TagCategory::Class)
        .add_tag("plural", TagCategory::Number)
        .add_head_suffix(HeadFamily::Bantu, "1/2", "class-1 class-2")
        .add_head_suffix(HeadFamily::General, "pl", "plural")
        .add_head_language(HeadFamily::Bantu, "Lingala");
    let stripper = HeadFinalStripper::new(Arc::new(builder.build().unwrap()))
        .with_diagnostics(Arc::new(DiagnosticBuffer::new(4)));

    let (form, tags) = stripper.parse_head_final_tags("Lingala", "moto", "moto 1/2");
    assert_eq!(form, "moto");
    assert_eq!(names(&tags), vec!["class-1", "class-2"]);

    let (form, _) = stripper.parse_head_final_tags("Swahili", "mtu", "mtu 1/2");
    assert_eq!(form, "mtu 1/2");
}
