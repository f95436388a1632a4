//! Canonical tags and their surface aliases.

use lexitag_foundation::TagCategory::{
    self, Aspect, Case, Class, Degree, Dialect, Gender, Misc, Mood, Number, PartOfSpeech, Person,
    Register, Stress, Syntax, Temporal, Tense, Voice,
};

/// Canonical tags with their categories.
///
/// Every hyphenated tag is also reachable through its spaced spelling
/// (`stress pattern 1`, `first person`); see `VocabularyBuilder::build`.
pub const TAGS: &[(&str, TagCategory)] = &[
    // Parts of speech
    ("noun", PartOfSpeech),
    ("verb", PartOfSpeech),
    ("adjective", PartOfSpeech),
    ("adverb", PartOfSpeech),
    ("pronoun", PartOfSpeech),
    ("particle", PartOfSpeech),
    ("preposition", PartOfSpeech),
    ("postposition", PartOfSpeech),
    ("conjunction", PartOfSpeech),
    ("interjection", PartOfSpeech),
    ("numeral", PartOfSpeech),
    ("determiner", PartOfSpeech),
    ("article", PartOfSpeech),
    ("prefix", PartOfSpeech),
    ("suffix", PartOfSpeech),
    ("phrase", PartOfSpeech),
    ("proverb", PartOfSpeech),
    ("abbreviation", PartOfSpeech),
    ("acronym", PartOfSpeech),
    ("initialism", PartOfSpeech),
    ("clipping", PartOfSpeech),
    ("contraction", PartOfSpeech),
    // Noun classes
    ("class-1", Class),
    ("class-1a", Class),
    ("class-2", Class),
    ("class-2a", Class),
    ("class-3", Class),
    ("class-4", Class),
    ("class-5", Class),
    ("class-6", Class),
    ("class-7", Class),
    ("class-8", Class),
    ("class-9", Class),
    ("class-9a", Class),
    ("class-10", Class),
    ("class-10a", Class),
    ("class-11", Class),
    ("class-12", Class),
    ("class-13", Class),
    ("class-14", Class),
    ("class-15", Class),
    ("class-16", Class),
    ("class-17", Class),
    ("class-18", Class),
    // Gender and animacy
    ("masculine", Gender),
    ("feminine", Gender),
    ("neuter", Gender),
    ("common", Gender),
    ("animate", Gender),
    ("inanimate", Gender),
    ("personal", Gender),
    ("virile", Gender),
    ("nonvirile", Gender),
    // Number
    ("singular", Number),
    ("plural", Number),
    ("dual", Number),
    ("paucal", Number),
    ("collective", Number),
    ("singulative", Number),
    ("plural-only", Number),
    ("singular-only", Number),
    ("countable", Number),
    ("uncountable", Number),
    ("no-plural", Number),
    ("in-plural", Number),
    // Case
    ("nominative", Case),
    ("accusative", Case),
    ("genitive", Case),
    ("dative", Case),
    ("ablative", Case),
    ("locative", Case),
    ("instrumental", Case),
    ("vocative", Case),
    ("partitive", Case),
    ("essive", Case),
    ("translative", Case),
    ("inessive", Case),
    ("elative", Case),
    ("illative", Case),
    ("adessive", Case),
    ("allative", Case),
    ("comitative", Case),
    ("oblique", Case),
    ("construct", Case),
    // Person
    ("first-person", Person),
    ("second-person", Person),
    ("third-person", Person),
    ("impersonal", Person),
    // Tense
    ("present", Tense),
    ("past", Tense),
    ("future", Tense),
    ("imperfect", Tense),
    ("perfect", Tense),
    ("pluperfect", Tense),
    ("aorist", Tense),
    ("preterite", Tense),
    // Mood and non-finite forms
    ("indicative", Mood),
    ("subjunctive", Mood),
    ("imperative", Mood),
    ("conditional", Mood),
    ("optative", Mood),
    ("jussive", Mood),
    ("infinitive", Mood),
    ("participle", Mood),
    ("gerund", Mood),
    ("supine", Mood),
    // Voice
    ("active", Voice),
    ("passive", Voice),
    ("middle", Voice),
    ("reflexive", Voice),
    ("reciprocal", Voice),
    ("causative", Voice),
    // Aspect
    ("perfective", Aspect),
    ("imperfective", Aspect),
    ("habitual", Aspect),
    ("progressive", Aspect),
    ("iterative", Aspect),
    ("frequentative", Aspect),
    // Degree
    ("positive", Degree),
    ("comparative", Degree),
    ("superlative", Degree),
    ("not-comparable", Degree),
    ("diminutive", Degree),
    ("augmentative", Degree),
    ("endearing", Degree),
    ("intensive", Degree),
    // Stress
    ("stress-pattern-1", Stress),
    ("stress-pattern-2", Stress),
    ("stress-pattern-3", Stress),
    ("stress-pattern-4", Stress),
    ("accent-paradigm-a", Stress),
    ("accent-paradigm-b", Stress),
    ("accent-paradigm-c", Stress),
    // Syntax
    ("transitive", Syntax),
    ("intransitive", Syntax),
    ("ambitransitive", Syntax),
    ("ditransitive", Syntax),
    ("predicative", Syntax),
    ("attributive", Syntax),
    ("substantive", Syntax),
    ("auxiliary", Syntax),
    ("modal", Syntax),
    ("copulative", Syntax),
    ("with-genitive", Syntax),
    ("with-dative", Syntax),
    ("with-accusative", Syntax),
    ("with-instrumental", Syntax),
    ("with-infinitive", Syntax),
    ("with-subjunctive", Syntax),
    ("enclitic", Syntax),
    ("proclitic", Syntax),
    ("definite", Syntax),
    ("indefinite", Syntax),
    ("possessive", Syntax),
    ("demonstrative", Syntax),
    ("interrogative", Syntax),
    ("relative", Syntax),
    ("negative", Syntax),
    ("emphatic", Syntax),
    ("idiomatic", Syntax),
    ("in-compounds", Syntax),
    // Register
    ("formal", Register),
    ("informal", Register),
    ("colloquial", Register),
    ("slang", Register),
    ("vulgar", Register),
    ("derogatory", Register),
    ("offensive", Register),
    ("humorous", Register),
    ("literary", Register),
    ("poetic", Register),
    ("euphemistic", Register),
    ("figuratively", Register),
    ("literally", Register),
    ("rare", Register),
    ("nonstandard", Register),
    ("proscribed", Register),
    ("childish", Register),
    ("familiar", Register),
    ("honorific", Register),
    ("polite", Register),
    ("jargon", Register),
    ("Internet", Register),
    ("uncommon", Register),
    ("by-extension", Register),
    // Currency in time
    ("archaic", Temporal),
    ("obsolete", Temporal),
    ("dated", Temporal),
    ("historical", Temporal),
    ("neologism", Temporal),
    // Regional usage
    ("British", Dialect),
    ("US", Dialect),
    ("UK", Dialect),
    ("Canada", Dialect),
    ("Australia", Dialect),
    ("New-Zealand", Dialect),
    ("Ireland", Dialect),
    ("Scotland", Dialect),
    ("Wales", Dialect),
    ("Northern-England", Dialect),
    ("Southern-US", Dialect),
    ("India", Dialect),
    ("South-Africa", Dialect),
    ("Cockney", Dialect),
    ("Brazil", Dialect),
    ("Portugal", Dialect),
    ("Mexico", Dialect),
    ("Spain", Dialect),
    ("Latin-America", Dialect),
    ("Quebec", Dialect),
    ("France", Dialect),
    ("Austria", Dialect),
    ("Switzerland", Dialect),
    ("dialectal", Dialect),
    ("regional", Dialect),
    // Everything else
    ("alternative", Misc),
    ("form-of", Misc),
    ("romanization", Misc),
    ("broadly", Misc),
    ("narrowly", Misc),
    ("especially", Misc),
];

/// Surface phrases mapping to one or more alternative readings.
///
/// Each alternative is a space-separated list of canonical tag and topic
/// names. More than one alternative is a disjunction ("m or f").
pub const TAG_ALIASES: &[(&str, &[&str])] = &[
    // Number
    ("sg", &["singular"]),
    ("sing", &["singular"]),
    ("pl", &["plural"]),
    ("plur", &["plural"]),
    ("du", &["dual"]),
    ("coll", &["collective"]),
    ("plurale tantum", &["plural-only"]),
    ("pluralia tantum", &["plural-only"]),
    ("singulare tantum", &["singular-only"]),
    ("countable and uncountable", &["countable uncountable"]),
    ("uncountable and countable", &["countable uncountable"]),
    ("usually uncountable", &["uncountable"]),
    ("in the plural", &["in-plural"]),
    ("usually in the plural", &["in-plural"]),
    // Gender
    ("m", &["masculine"]),
    ("f", &["feminine"]),
    ("n", &["neuter"]),
    ("c", &["common"]),
    ("anim", &["animate"]),
    ("inan", &["inanimate"]),
    ("m pl", &["masculine plural"]),
    ("f pl", &["feminine plural"]),
    ("n pl", &["neuter plural"]),
    ("m or f", &["masculine", "feminine"]),
    ("f or m", &["feminine", "masculine"]),
    ("m or n", &["masculine", "neuter"]),
    ("masculine or feminine", &["masculine", "feminine"]),
    ("m and f", &["masculine feminine"]),
    ("masculine and feminine", &["masculine feminine"]),
    // Case
    ("nom", &["nominative"]),
    ("acc", &["accusative"]),
    ("gen", &["genitive"]),
    ("dat", &["dative"]),
    ("abl", &["ablative"]),
    ("loc", &["locative"]),
    ("ins", &["instrumental"]),
    ("instr", &["instrumental"]),
    ("voc", &["vocative"]),
    ("+ genitive", &["with-genitive"]),
    ("+ gen", &["with-genitive"]),
    ("+ dative", &["with-dative"]),
    ("+ dat", &["with-dative"]),
    ("+ accusative", &["with-accusative"]),
    ("+ acc", &["with-accusative"]),
    ("+ infinitive", &["with-infinitive"]),
    ("takes the genitive", &["with-genitive"]),
    ("takes the dative", &["with-dative"]),
    // Person
    ("1st person", &["first-person"]),
    ("2nd person", &["second-person"]),
    ("3rd person", &["third-person"]),
    ("1sg", &["first-person singular"]),
    ("2sg", &["second-person singular"]),
    ("3sg", &["third-person singular"]),
    ("1pl", &["first-person plural"]),
    ("2pl", &["second-person plural"]),
    ("3pl", &["third-person plural"]),
    // Aspect
    ("impf", &["imperfective"]),
    ("pf", &["perfective"]),
    ("perf", &["perfective"]),
    ("imperfective aspect", &["imperfective"]),
    ("perfective aspect", &["perfective"]),
    // Degree
    ("dim", &["diminutive"]),
    ("aug", &["augmentative"]),
    ("not comparable", &["not-comparable"]),
    ("uncomparable", &["not-comparable"]),
    // Parts of speech
    ("abbr", &["abbreviation"]),
    ("adj", &["adjective"]),
    ("adv", &["adverb"]),
    ("intransitive verb", &["intransitive verb"]),
    ("transitive verb", &["transitive verb"]),
    // Register
    ("figurative", &["figuratively"]),
    ("figuratively speaking", &["figuratively"]),
    ("vulgar slang", &["vulgar slang"]),
    ("nautical slang", &["slang nautical"]),
    ("military slang", &["slang military"]),
    ("internet slang", &["slang Internet"]),
    ("informal or slang", &["informal", "slang"]),
    // Currency in time
    ("archaic or obsolete", &["archaic", "obsolete"]),
    ("obsolete or archaic", &["obsolete", "archaic"]),
    ("now rare", &["rare"]),
    ("now archaic", &["archaic"]),
    ("now historical", &["historical"]),
    // Regional usage
    ("chiefly British", &["British"]),
    ("chiefly US", &["US"]),
    ("American", &["US"]),
    ("Britain", &["British"]),
    ("Commonwealth", &["British"]),
    ("New Zealand", &["New-Zealand"]),
    ("Southern US", &["Southern-US"]),
    ("Latin America", &["Latin-America"]),
    ("Brazilian", &["Brazil"]),
    ("European Portuguese", &["Portugal"]),
    ("Scottish", &["Scotland"]),
    ("Irish", &["Ireland"]),
    ("Australian", &["Australia"]),
    ("dialect", &["dialectal"]),
];
