//! Stripping of head-final tag markers from word-head forms.
//!
//! Dictionary heads often end in gender, number, or noun-class markers
//! ("kitabu 7/8", "casa f", "дом m stress pattern 1"). The stripper removes
//! them, family tables first and the general table last, and returns the
//! tags they stand for.

use std::sync::{Arc, LazyLock};

use lexitag_foundation::{Diagnostic, DiagnosticKind, DiagnosticSink, Tag, TracingSink};
use lexitag_vocabulary::{HeadFamily, VocabularyStore};
use regex::Regex;

/// Bare class numerals, gender-numbered classes, and `?` left behind after
/// stripping.
static UNHANDLED_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r" (1|2|3|4|5|6|7|8|9|10|11|12|13|14|15|16|17|18|19|20|1a|2a|9a|10a|m1|f1|f2|m2|f3|m3|f4|m4|f5|m5|\?)($|/| (f|m|sg|pl|anim|inan))",
    )
    .expect("unhandled marker pattern is valid")
});

/// Strips head-final markers and reports leftovers.
pub struct HeadFinalStripper {
    store: Arc<VocabularyStore>,
    diagnostics: Arc<dyn DiagnosticSink>,
}

impl HeadFinalStripper {
    /// Creates a stripper reporting through `tracing`.
    #[must_use]
    pub fn new(store: Arc<VocabularyStore>) -> Self {
        Self {
            store,
            diagnostics: Arc::new(TracingSink),
        }
    }

    /// Sends diagnostics to `sink` instead of `tracing`.
    #[must_use]
    pub fn with_diagnostics(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.diagnostics = sink;
        self
    }

    /// Strips head-final markers from `form`.
    ///
    /// `title` is the entry's own title; a marker the title itself ends with
    /// is part of the word and stays. Returns the remaining form and the
    /// tags of every stripped marker, in stripping order.
    pub fn parse_head_final_tags(
        &self,
        language: &str,
        title: &str,
        form: &str,
    ) -> (String, Vec<Tag>) {
        let original = collapse_whitespace(form);
        if original.is_empty() {
            return (String::new(), Vec::new());
        }

        let mut form = original.clone();
        let mut tags = Vec::new();
        let numeric = self.store.has_numeric_heads(language);

        for family in HeadFamily::ORDER {
            if !self.store.is_head_language(family, language) {
                continue;
            }
            let table = self.store.head_suffixes(family);
            let Some(entry) = table
                .matches(&form)
                .find(|entry| family != HeadFamily::General || numeric || !entry.has_digit())
            else {
                continue;
            };

            let key = entry.suffix.as_str();
            let part_of_title = if family == HeadFamily::General {
                title == key || title.ends_with(&format!(" {key}"))
            } else {
                title.ends_with(key)
            };
            if part_of_title {
                continue;
            }

            if entry.suspicious {
                self.diagnostics.report(Diagnostic::warning(
                    DiagnosticKind::SuspiciousSuffix,
                    &original,
                    format!("suspicious head-final marker {key:?} in {language}"),
                ));
            }
            tags.extend(entry.tags.iter().cloned());
            form = form[..form.len() - key.len()].trim_end().to_string();
        }

        if self.looks_unhandled(&original, &form) {
            self.diagnostics.report(Diagnostic::warning(
                DiagnosticKind::UnhandledSuffix,
                &original,
                format!("possibly unhandled head-final marker in {language} form {form:?}"),
            ));
        }

        (form, tags)
    }

    fn looks_unhandled(&self, original: &str, form: &str) -> bool {
        if self.store.is_ok_suspicious_form(form) {
            return false;
        }
        (form.ends_with(" or") && !original.ends_with(" or"))
            || UNHANDLED_MARKER.is_match(form)
            || form.ends_with(" du")
    }
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
