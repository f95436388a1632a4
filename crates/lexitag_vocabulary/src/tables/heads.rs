//! Head-final suffix tables.
//!
//! Values are space-separated canonical tags. A leading `?` marks a mapping
//! that is applied but reported as suspicious.

/// Languages whose heads end in Bantu noun-class pairs.
pub const BANTU_LANGUAGES: &[&str] = &[
    "Chichewa",
    "Comorian",
    "Kikuyu",
    "Kinyarwanda",
    "Kirundi",
    "Lingala",
    "Luganda",
    "Makhuwa",
    "Ndebele",
    "Northern Sotho",
    "Shona",
    "Sotho",
    "Swahili",
    "Tsonga",
    "Tswana",
    "Venda",
    "Xhosa",
    "Zulu",
];

/// Bantu noun-class markers.
pub const BANTU_SUFFIXES: &[(&str, &str)] = &[
    ("1/2", "class-1 class-2"),
    ("1a/2a", "class-1a class-2a"),
    ("3/4", "class-3 class-4"),
    ("5/6", "class-5 class-6"),
    ("7/8", "class-7 class-8"),
    ("9/10", "class-9 class-10"),
    ("9a/10a", "class-9a class-10a"),
    ("9/6", "?class-9 class-6"),
    ("11/10", "class-11 class-10"),
    ("11/6", "class-11 class-6"),
    ("12/13", "class-12 class-13"),
    ("14", "class-14"),
    ("15", "class-15"),
    ("16", "class-16"),
    ("17", "class-17"),
    ("18", "class-18"),
];

/// Semitic languages with their own head-final markers.
pub const SEMITIC_LANGUAGES: &[&str] = &[
    "Akkadian",
    "Amharic",
    "Arabic",
    "Aramaic",
    "Egyptian Arabic",
    "Ge'ez",
    "Gulf Arabic",
    "Hebrew",
    "Maltese",
    "Moroccan Arabic",
    "South Levantine Arabic",
    "Syriac",
    "Tigrinya",
];

/// Semitic gender, number, and state markers.
pub const SEMITIC_SUFFIXES: &[(&str, &str)] = &[
    ("du", "dual"),
    ("m du", "masculine dual"),
    ("f du", "feminine dual"),
    ("coll", "collective"),
    ("m coll", "masculine collective"),
    ("f coll", "feminine collective"),
    ("sing", "singulative"),
    ("f sing", "feminine singulative"),
    ("pauc", "paucal"),
    ("pl of pauc", "plural paucal"),
    ("constr", "construct"),
    ("d", "?dual"),
];

/// Languages using the catch-all table (stress patterns, dual number).
pub const OTHER_LANGUAGES: &[&str] = &[
    "Ancient Greek",
    "Latvian",
    "Lithuanian",
    "Lower Sorbian",
    "Old Church Slavonic",
    "Proto-Slavic",
    "Russian",
    "Sanskrit",
    "Serbo-Croatian",
    "Slovene",
    "Upper Sorbian",
];

/// Stress pattern, accent paradigm, and dual markers.
pub const OTHER_SUFFIXES: &[(&str, &str)] = &[
    ("stress pattern 1", "stress-pattern-1"),
    ("stress pattern 2", "stress-pattern-2"),
    ("stress pattern 3", "stress-pattern-3"),
    ("stress pattern 4", "stress-pattern-4"),
    ("AP a", "accent-paradigm-a"),
    ("AP b", "accent-paradigm-b"),
    ("AP c", "accent-paradigm-c"),
    ("du", "dual"),
    ("m du", "masculine dual"),
    ("f du", "feminine dual"),
    ("n du", "neuter dual"),
];

/// Languages whose numeric suffixes in the general table are class markers.
pub const NUMERIC_LANGUAGES: &[&str] = BANTU_LANGUAGES;

/// General head-final markers for every language.
pub const GENERAL_SUFFIXES: &[(&str, &str)] = &[
    ("m", "masculine"),
    ("f", "feminine"),
    ("n", "neuter"),
    ("c", "common"),
    ("sg", "singular"),
    ("pl", "plural"),
    ("m sg", "masculine singular"),
    ("f sg", "feminine singular"),
    ("n sg", "neuter singular"),
    ("m pl", "masculine plural"),
    ("f pl", "feminine plural"),
    ("n pl", "neuter plural"),
    ("c pl", "common plural"),
    ("m or f", "masculine feminine"),
    ("f or m", "feminine masculine"),
    ("m or n", "masculine neuter"),
    ("mf", "masculine feminine"),
    ("m f", "?masculine feminine"),
    ("anim", "animate"),
    ("inan", "inanimate"),
    ("m anim", "masculine animate"),
    ("m inan", "masculine inanimate"),
    ("m pers", "masculine personal"),
    ("impf", "imperfective"),
    ("pf", "perfective"),
    ("biasp", "imperfective perfective"),
    ("1", "class-1"),
    ("2", "class-2"),
    ("1a", "class-1a"),
    ("2a", "class-2a"),
    ("3", "class-3"),
    ("4", "class-4"),
    ("5", "class-5"),
    ("6", "class-6"),
    ("7", "class-7"),
    ("8", "class-8"),
    ("9", "class-9"),
    ("9a", "class-9a"),
    ("10", "class-10"),
    ("10a", "class-10a"),
    ("11", "class-11"),
    ("12", "class-12"),
    ("13", "class-13"),
];

/// Forms that legitimately end in a suspicious-looking token.
pub const OK_SUSPICIOUS_FORMS: &[&str] = &["either or", "whether or", "honour or"];
