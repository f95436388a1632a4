//! English detection by word-list scoring.

use lexitag_vocabulary::VocabularyStore;

/// Non-ASCII characters allowed in English text.
const TYPOGRAPHIC: &[char] = &['―', '—', '“', '”', '…', '\'', '‘', '’', 'ʹ', '€'];

fn is_english_char(c: char) -> bool {
    (' '..='~').contains(&c) || TYPOGRAPHIC.contains(&c)
}

/// Splits text into tokens for scoring.
///
/// Leading and trailing punctuation is detached and dropped; a chunk made
/// only of punctuation is kept whole so callers can reject it.
#[must_use]
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace()
        .map(|chunk| {
            let trimmed = chunk.trim_matches(|c: char| !c.is_alphanumeric());
            if trimmed.is_empty() { chunk } else { trimmed }
        })
        .collect()
}

fn is_punctuation(token: &str) -> bool {
    !token.chars().any(char::is_alphanumeric)
}

/// Returns true if a single token counts as English.
#[must_use]
pub fn is_english_token(store: &VocabularyStore, token: &str) -> bool {
    if token.is_empty() || store.is_not_english(token) {
        return false;
    }
    if store.is_english_word(token) {
        return true;
    }
    let lower = token.to_lowercase();
    if store.is_not_english(&lower) {
        return false;
    }
    if store.is_english_word(&lower) || token.starts_with(|c: char| c.is_ascii_digit()) {
        return true;
    }
    let known = |w: &str| store.is_english_word(w);
    let known_or_e = |stem: &str| known(stem) || known(&format!("{stem}e"));
    let w = lower.as_str();

    if w.len() >= 4 && w.strip_suffix('s').is_some_and(known) {
        return true;
    }
    if w.strip_suffix("'s").is_some_and(known) {
        return true;
    }
    if w.len() >= 5
        && (w.strip_suffix("ing").is_some_and(known_or_e)
            || w.strip_suffix("ed").is_some_and(known_or_e))
    {
        return true;
    }
    if w
        .strip_suffix("ies")
        .is_some_and(|stem| !stem.is_empty() && known(&format!("{stem}y")))
    {
        return true;
    }
    let respelled = [
        ("isation", "ization"),
        ("ization", "isation"),
        ("ise", "ize"),
        ("ize", "ise"),
    ]
    .iter()
    .any(|(from, to)| {
        w.strip_suffix(from)
            .is_some_and(|stem| known(&format!("{stem}{to}")))
    });
    if respelled {
        return true;
    }
    if w.contains(['-', '/']) {
        let parts: Vec<&str> = w.split(['-', '/']).filter(|p| !p.is_empty()).collect();
        return !parts.is_empty() && parts.iter().all(|part| is_english_token(store, part));
    }
    false
}

/// Returns true if `text` reads as English.
///
/// `text` should already have its whitespace collapsed.
#[must_use]
pub fn is_english(store: &VocabularyStore, text: &str) -> bool {
    if text.chars().count() <= 1 || !text.chars().all(is_english_char) {
        return false;
    }
    if store.is_english_word(text) && text.starts_with(char::is_alphabetic) {
        return true;
    }
    if text.starts_with('-') || text.ends_with('-') {
        return false;
    }

    let tokens = tokenize(text);
    if tokens.is_empty() || tokens.iter().any(|t| is_punctuation(t)) {
        return false;
    }
    let scoring: Vec<&str> = tokens
        .iter()
        .copied()
        .filter(|t| is_english_token(store, t))
        .collect();
    let (count, score) = (tokens.len(), scoring.len());
    score == count
        || (score + 1 >= count && scoring.iter().any(|t| t.len() > 3))
        || score * 5 >= count * 4
}
