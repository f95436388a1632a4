//! Policy lists for spans the vocabulary does not cover.

/// Words that may start a multi-word unknown span kept verbatim as a raw tag
/// ("with a preposition", "used in the plural").
pub const ALLOWED_UNKNOWN_STARTS: &[&str] = &[
    "Relating",
    "accompanied",
    "added",
    "after",
    "answering",
    "as",
    "based",
    "before",
    "chiefly",
    "conjugated",
    "construed",
    "especially",
    "expression",
    "figurative",
    "followed",
    "for",
    "forms",
    "from",
    "governs",
    "in",
    "indicating",
    "mainly",
    "modifying",
    "mostly",
    "normally",
    "not",
    "of",
    "often",
    "preceding",
    "prefixed",
    "referring",
    "relating",
    "revived",
    "said",
    "since",
    "sometimes",
    "takes",
    "typically",
    "used",
    "usually",
    "when",
    "where",
    "with",
    "With",
    "without",
];

/// Prefixes marking spans that are dropped without an error.
pub const IGNORED_UNKNOWN_STARTS: &[&str] = &[
    "originally",
    "e.g.",
    "c.f.",
    "cf.",
    "see",
    "supplanted by",
    "supplied by",
];

/// Whole spans that produce no step at all.
pub const IGNORED_UNKNOWN_TAGS: &[&str] = &[
    "and",
    "or",
    "and/or",
    "also",
    "etc.",
    "i.e.",
    "usually",
    "often",
    "sometimes",
    "chiefly",
    "mostly",
    "mainly",
];
