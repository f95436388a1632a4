//! Canonical topics and their generalizations.

/// Canonical topic names.
pub const TOPICS: &[&str] = &[
    "agriculture",
    "anatomy",
    "architecture",
    "art",
    "astronomy",
    "aviation",
    "baseball",
    "biology",
    "botany",
    "business",
    "card-games",
    "chemistry",
    "chess",
    "christianity",
    "computing",
    "cooking",
    "cricket",
    "ecology",
    "economics",
    "education",
    "electronics",
    "engineering",
    "entomology",
    "fashion",
    "finance",
    "firearms",
    "fishing",
    "football",
    "games",
    "genetics",
    "geography",
    "geology",
    "geometry",
    "grammar",
    "heraldry",
    "history",
    "hunting",
    "islam",
    "judaism",
    "law",
    "linguistics",
    "literature",
    "mathematics",
    "media",
    "medicine",
    "meteorology",
    "military",
    "music",
    "mythology",
    "natural-sciences",
    "nautical",
    "ornithology",
    "pharmacology",
    "philosophy",
    "phonetics",
    "photography",
    "physics",
    "politics",
    "printing",
    "programming",
    "psychology",
    "rail-transport",
    "religion",
    "sciences",
    "sociology",
    "sports",
    "telecommunications",
    "textiles",
    "transport",
    "typography",
    "weaponry",
    "zoology",
];

/// Topic generalizations: a phrase maps to broader topics.
///
/// Generalization is transitive (`ornithology` reaches `zoology`, `biology`,
/// `natural-sciences` and `sciences`). Keys need not be canonical topics.
pub const TOPIC_GENERALIZATIONS: &[(&str, &[&str])] = &[
    ("sailing", &["nautical"]),
    ("seafaring", &["nautical"]),
    ("navigation", &["nautical"]),
    ("ornithology", &["zoology"]),
    ("entomology", &["zoology"]),
    ("zoology", &["biology"]),
    ("botany", &["biology"]),
    ("genetics", &["biology"]),
    ("ecology", &["biology"]),
    ("biology", &["natural-sciences"]),
    ("physics", &["natural-sciences"]),
    ("chemistry", &["natural-sciences"]),
    ("astronomy", &["natural-sciences"]),
    ("geology", &["natural-sciences"]),
    ("natural-sciences", &["sciences"]),
    ("natural sciences", &["natural-sciences"]),
    ("anatomy", &["medicine"]),
    ("pharmacology", &["medicine"]),
    ("christianity", &["religion"]),
    ("islam", &["religion"]),
    ("judaism", &["religion"]),
    ("programming", &["computing"]),
    ("football", &["sports"]),
    ("baseball", &["sports"]),
    ("cricket", &["sports"]),
    ("soccer", &["football"]),
    ("association football", &["football"]),
    ("ball games", &["sports"]),
    ("aviation", &["transport"]),
    ("rail-transport", &["transport"]),
    ("rail transport", &["rail-transport"]),
    ("railways", &["rail-transport"]),
    ("cookery", &["cooking"]),
    ("culinary", &["cooking"]),
    ("legal", &["law"]),
    ("grammar", &["linguistics"]),
    ("phonetics", &["linguistics"]),
    ("geometry", &["mathematics"]),
    ("maths", &["mathematics"]),
    ("math", &["mathematics"]),
    ("chess", &["games"]),
    ("card-games", &["games"]),
    ("card games", &["card-games"]),
    ("firearms", &["weaponry"]),
    ("economics", &["sciences"]),
    ("finance", &["business"]),
];
