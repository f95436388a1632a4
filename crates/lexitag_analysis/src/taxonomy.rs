//! Recognition of taxonomic names.

use lexitag_vocabulary::VocabularyStore;

/// Non-lowercase words allowed after the genus (varieties, sections).
const ALLOWED_CAPITALIZED: &[&str] = &["A", "B", "C", "D", "E", "F", "I", "II", "III", "IV", "V"];

const HYBRID_SIGN: char = '×';

/// Returns true if `text` looks like a taxonomic name.
///
/// Either an exact known species, or a known genus or higher taxon followed
/// by one to four mostly non-English words. The genus itself does not count
/// toward the English check.
#[must_use]
pub fn is_taxonomic(store: &VocabularyStore, text: &str) -> bool {
    if store.is_known_species(text) {
        return true;
    }

    let text = text
        .strip_prefix(HYBRID_SIGN)
        .map_or(text, str::trim_start);
    let text = match text.find(HYBRID_SIGN) {
        Some(i) => text[..i].trim_end(),
        None => text,
    };

    let words: Vec<&str> = text.split_whitespace().collect();
    if !(2..=5).contains(&words.len()) {
        return false;
    }
    let first = words[0];
    if !first.starts_with(char::is_uppercase) || !store.is_known_taxon(first) {
        return false;
    }
    let rest = &words[1..];
    if !rest
        .iter()
        .all(|w| w.starts_with(char::is_lowercase) || ALLOWED_CAPITALIZED.contains(w))
    {
        return false;
    }

    let non_english = rest.iter().filter(|w| !store.is_english_word(w)).count();
    non_english > 0 && non_english + 1 >= rest.len()
}
