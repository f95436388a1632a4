//! Segmentation of descriptions before decoding.

use crate::index::SequenceIndex;

/// Splits text at top-level `,`, `;`, and `:`.
///
/// Separators inside `()`, `[]`, or `{}` do not split. Unbalanced closing
/// brackets are ignored. Segments are returned untrimmed and may be empty.
#[must_use]
pub fn split_segments(text: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, ch) in text.char_indices() {
        match ch {
            '(' | '[' | '{' => depth += 1,
            ')' | ']' | '}' => depth = depth.saturating_sub(1),
            ',' | ';' | ':' if depth == 0 => {
                segments.push(&text[start..i]);
                start = i + ch.len_utf8();
            }
            _ => {}
        }
    }
    segments.push(&text[start..]);
    segments
}

/// Rewrites slash-joined tokens into space-separated alternates.
///
/// `first/third-person` becomes `first-person third-person`: when the last
/// part is hyphenated, its suffix from the first hyphen is copied onto parts
/// that have no hyphen. Otherwise each slash becomes a space. Tokens the
/// index already knows as whole phrases are left alone.
///
/// Returns `None` if nothing was rewritten.
#[must_use]
pub fn expand_slashes(text: &str, index: &SequenceIndex) -> Option<String> {
    let mut changed = false;
    let tokens: Vec<String> = text
        .split_whitespace()
        .map(|token| {
            if !token.contains('/') || index.contains_phrase(token) {
                return token.to_string();
            }
            changed = true;
            expand_token(token)
        })
        .collect();

    changed.then(|| tokens.join(" "))
}

fn expand_token(token: &str) -> String {
    let parts: Vec<&str> = token.split('/').filter(|p| !p.is_empty()).collect();
    let suffix = parts
        .last()
        .filter(|_| parts.len() > 1)
        .and_then(|last| last.find('-').map(|i| &last[i..]))
        .filter(|suffix| suffix.len() > 1);

    match suffix {
        Some(suffix) => parts
            .iter()
            .map(|part| {
                if part.contains('-') {
                    (*part).to_string()
                } else {
                    format!("{part}{suffix}")
                }
            })
            .collect::<Vec<_>>()
            .join(" "),
        None => parts.join(" "),
    }
}
