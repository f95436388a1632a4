//! Script detection for the romanization check.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Coarse script of a character.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Script {
    /// Latin letters, IPA, and phonetic extensions
    Latin,
    /// Greek and Coptic letters
    Greek,
    /// Spacing modifier letters such as `ʻ` and `ˈ`
    Modifier,
    /// A script that never appears in a romanization
    Forbidden,
    /// Anything else
    Other,
}

const LATIN: &[(u32, u32)] = &[
    (0x0041, 0x005A),
    (0x0061, 0x007A),
    (0x00AA, 0x00AA),
    (0x00BA, 0x00BA),
    (0x00C0, 0x00D6),
    (0x00D8, 0x00F6),
    (0x00F8, 0x024F),
    (0x0250, 0x02AF),
    (0x1D00, 0x1DBF),
    (0x1E00, 0x1EFF),
    (0x2C60, 0x2C7F),
    (0xA720, 0xA7FF),
    (0xAB30, 0xAB6F),
];

const GREEK: &[(u32, u32)] = &[(0x0370, 0x03FF), (0x1F00, 0x1FFF)];

const MODIFIER: &[(u32, u32)] = &[(0x02B0, 0x02FF), (0xA700, 0xA71F)];

const FORBIDDEN: &[(u32, u32)] = &[
    (0x0400, 0x052F),   // Cyrillic
    (0x0530, 0x058F),   // Armenian
    (0x0590, 0x05FF),   // Hebrew
    (0x0600, 0x06FF),   // Arabic
    (0x0700, 0x074F),   // Syriac
    (0x0750, 0x077F),   // Arabic supplement
    (0x0780, 0x07BF),   // Thaana
    (0x08A0, 0x08FF),   // Arabic extended
    (0x0900, 0x0DFF),   // Indic scripts
    (0x0E00, 0x0E7F),   // Thai
    (0x0E80, 0x0EFF),   // Lao
    (0x0F00, 0x0FFF),   // Tibetan
    (0x1000, 0x109F),   // Myanmar
    (0x10A0, 0x10FF),   // Georgian
    (0x1100, 0x11FF),   // Hangul jamo
    (0x1200, 0x139F),   // Ethiopic
    (0x13A0, 0x13FF),   // Cherokee
    (0x1400, 0x167F),   // Canadian syllabics
    (0x1680, 0x169F),   // Ogham
    (0x16A0, 0x16FF),   // Runic
    (0x1780, 0x17FF),   // Khmer
    (0x1800, 0x18AF),   // Mongolian
    (0x1C80, 0x1C8F),   // Cyrillic extended
    (0x2800, 0x28FF),   // Braille
    (0x2C00, 0x2C5F),   // Glagolitic
    (0x2C80, 0x2CFF),   // Coptic
    (0x2D00, 0x2D2F),   // Georgian supplement
    (0x2DE0, 0x2DFF),   // Cyrillic extended
    (0x2E80, 0x2FDF),   // CJK radicals
    (0x3000, 0x303F),   // CJK punctuation
    (0x3040, 0x309F),   // Hiragana
    (0x30A0, 0x30FF),   // Katakana
    (0x3100, 0x312F),   // Bopomofo
    (0x3130, 0x318F),   // Hangul compatibility jamo
    (0x31F0, 0x31FF),   // Katakana extensions
    (0x3400, 0x4DBF),   // CJK extension A
    (0x4E00, 0x9FFF),   // CJK unified ideographs
    (0xA000, 0xA4CF),   // Yi
    (0xA640, 0xA69F),   // Cyrillic extended
    (0xAC00, 0xD7AF),   // Hangul syllables
    (0xF900, 0xFAFF),   // CJK compatibility
    (0xFB50, 0xFDFF),   // Arabic presentation forms
    (0xFE70, 0xFEFF),   // Arabic presentation forms
    (0xFF66, 0xFF9F),   // Halfwidth katakana
    (0x10330, 0x1034F), // Gothic
    (0x20000, 0x2FFFF), // CJK extensions
];

fn in_ranges(c: char, ranges: &[(u32, u32)]) -> bool {
    let cp = u32::from(c);
    ranges.iter().any(|&(lo, hi)| (lo..=hi).contains(&cp))
}

/// Returns the coarse script of `c`.
#[must_use]
pub fn script_of(c: char) -> Script {
    if in_ranges(c, MODIFIER) {
        Script::Modifier
    } else if in_ranges(c, LATIN) {
        Script::Latin
    } else if in_ranges(c, GREEK) {
        Script::Greek
    } else if in_ranges(c, FORBIDDEN) {
        Script::Forbidden
    } else {
        Script::Other
    }
}

/// Punctuation that neither helps nor hurts a romanization.
const NEUTRAL: &[char] = &[
    '-', ',', ':', '/', '"', '\'', '‘', '’', '“', '”', '«', '»', '(', ')', '[', ']', '.', '?',
    '!',
];

#[derive(Debug, Default)]
struct Counts {
    total: usize,
    latin: usize,
    greek: usize,
    neutral: usize,
    digits: usize,
}

/// Returns true if `text` looks like a romanization.
///
/// The text is NFKD-decomposed so accented letters count as their base
/// letter plus combining marks. Whitespace is skipped.
#[must_use]
pub fn looks_like_romanization(text: &str) -> bool {
    let mut counts = Counts::default();

    for c in text.nfkd() {
        if c.is_whitespace() {
            continue;
        }
        counts.total += 1;
        if NEUTRAL.contains(&c) {
            counts.neutral += 1;
            continue;
        }
        if is_combining_mark(c) {
            continue;
        }
        if c.is_ascii_digit() {
            counts.digits += 1;
            continue;
        }
        match script_of(c) {
            Script::Latin if c.is_alphabetic() => counts.latin += 1,
            Script::Greek if c.is_alphabetic() => counts.greek += 1,
            Script::Modifier => {}
            Script::Latin | Script::Greek | Script::Forbidden | Script::Other => return false,
        }
    }

    counts.latin + counts.greek > 0
        && (counts.greek == 0 || counts.latin >= counts.greek + 2)
        && counts.neutral < counts.total
        && counts.digits < counts.total
}
