//! Property tests for classification and head-final stripping

use std::sync::{Arc, OnceLock};

use lexitag_analysis::{DescriptionClassifier, DescriptionKind, HeadFinalStripper};
use lexitag_decoder::TagDecoder;
use lexitag_foundation::NullSink;
use lexitag_vocabulary::VocabularyStore;
use proptest::prelude::*;

fn store() -> Arc<VocabularyStore> {
    static STORE: OnceLock<Arc<VocabularyStore>> = OnceLock::new();
    STORE
        .get_or_init(|| Arc::new(VocabularyStore::standard().unwrap()))
        .clone()
}

fn classifier() -> &'static DescriptionClassifier {
    static CLASSIFIER: OnceLock<DescriptionClassifier> = OnceLock::new();
    CLASSIFIER.get_or_init(|| {
        let decoder = TagDecoder::new(store()).with_diagnostics(Arc::new(NullSink));
        DescriptionClassifier::new(Arc::new(decoder)).with_cache_capacity(0)
    })
}

fn stripper() -> &'static HeadFinalStripper {
    static STRIPPER: OnceLock<HeadFinalStripper> = OnceLock::new();
    STRIPPER.get_or_init(|| HeadFinalStripper::new(store()).with_diagnostics(Arc::new(NullSink)))
}

fn head_form() -> impl Strategy<Value = String> {
    let word = prop::sample::select(vec![
        "kitabu", "casa", "m", "f", "pl", "du", "7/8", "9/6", "1", "14", "stress", "pattern",
        "or", "?", "d",
    ]);
    prop::collection::vec(word, 0..6).prop_map(|words| words.join(" "))
}

proptest! {
    #[test]
    fn classification_is_total_and_deterministic(text in "\\PC{0,40}") {
        let first = classifier().classify_desc(&text, false, false);
        let second = classifier().classify_desc(&text, false, false);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn cjk_is_never_romanization(text in "[\\u{4E00}-\\u{9FFF}\\u{3040}-\\u{30FF} ]{1,20}") {
        let kind = classifier().classify_desc(&text, false, false);
        prop_assert_ne!(kind, DescriptionKind::Romanization);
    }

    #[test]
    fn stripping_only_removes_a_suffix(
        language in prop::sample::select(vec!["Swahili", "Arabic", "Russian", "German"]),
        form in head_form(),
    ) {
        let collapsed = form.split_whitespace().collect::<Vec<_>>().join(" ");
        let (stripped, tags) = stripper().parse_head_final_tags(language, "", &form);
        prop_assert!(collapsed.starts_with(&stripped));
        if tags.is_empty() {
            prop_assert_eq!(&stripped, &collapsed);
        } else {
            prop_assert!(stripped.len() < collapsed.len());
        }
    }

    #[test]
    fn matching_title_blocks_stripping(form in head_form()) {
        let collapsed = form.split_whitespace().collect::<Vec<_>>().join(" ");
        let (stripped, tags) = stripper().parse_head_final_tags("German", &collapsed, &form);
        prop_assert_eq!(stripped, collapsed);
        prop_assert!(tags.is_empty());
    }
}
