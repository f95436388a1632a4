//! The vocabulary store and its builder.
//!
//! [`VocabularyBuilder`] collects raw table entries; [`VocabularyBuilder::build`]
//! validates them against the canonical tag and topic lists and produces an
//! immutable [`VocabularyStore`]. A store is never modified after it is built.

use std::collections::{HashMap, HashSet, VecDeque};

use lexitag_foundation::{
    Error, ErrorContext, Reading, Result, Tag, TagCategory, TagSet, Topic, TopicSet,
};

use crate::tables;

// =============================================================================
// Resolved Entries
// =============================================================================

/// A surface phrase and the readings it denotes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alias {
    /// Space-separated surface phrase
    pub phrase: String,
    /// Alternative readings, in declaration order
    pub readings: Vec<Reading>,
}

/// A topic phrase with its transitively generalized topics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Generalization {
    /// Space-separated surface phrase
    pub phrase: String,
    /// Every topic reachable from the phrase's targets
    pub topics: TopicSet,
}

/// Language families with their own head-final tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HeadFamily {
    /// Bantu noun-class pairs
    Bantu,
    /// Semitic gender, number, and state markers
    Semitic,
    /// Stress patterns, accent paradigms, dual number
    Other,
    /// Markers valid for every language
    General,
}

impl HeadFamily {
    /// The order in which the stripper applies the tables.
    pub const ORDER: [HeadFamily; 4] = [Self::Bantu, Self::Semitic, Self::Other, Self::General];

    const fn index(self) -> usize {
        match self {
            Self::Bantu => 0,
            Self::Semitic => 1,
            Self::Other => 2,
            Self::General => 3,
        }
    }

    const fn table_name(self) -> &'static str {
        match self {
            Self::Bantu => "bantu head suffixes",
            Self::Semitic => "semitic head suffixes",
            Self::Other => "other head suffixes",
            Self::General => "general head suffixes",
        }
    }
}

/// One head-final suffix and the tags it stands for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeadSuffix {
    /// The suffix text, without the separating space
    pub suffix: String,
    /// Tags appended when the suffix is stripped
    pub tags: Vec<Tag>,
    /// Whether stripping it should be reported
    pub suspicious: bool,
}

impl HeadSuffix {
    /// Returns true if the suffix contains a digit.
    #[must_use]
    pub fn has_digit(&self) -> bool {
        self.suffix.chars().any(|c| c.is_ascii_digit())
    }
}

/// The suffixes of one family, kept longest first.
#[derive(Clone, Debug, Default)]
pub struct HeadSuffixTable {
    entries: Vec<HeadSuffix>,
}

impl HeadSuffixTable {
    fn insert(&mut self, entry: HeadSuffix) {
        let pos = self
            .entries
            .iter()
            .position(|e| e.suffix.len() < entry.suffix.len())
            .unwrap_or(self.entries.len());
        self.entries.insert(pos, entry);
    }

    /// Finds the longest suffix that ends `form` and follows a space.
    #[must_use]
    pub fn longest_match<'a>(&'a self, form: &str) -> Option<&'a HeadSuffix> {
        self.matches(form).next()
    }

    /// Iterates over every suffix that ends `form` after a space, longest first.
    pub fn matches<'a, 'f>(
        &'a self,
        form: &'f str,
    ) -> impl Iterator<Item = &'a HeadSuffix> + use<'a, 'f> {
        self.entries.iter().filter(move |entry| {
            form.len() > entry.suffix.len()
                && form.ends_with(entry.suffix.as_str())
                && form[..form.len() - entry.suffix.len()].ends_with(' ')
        })
    }

    /// Looks up an exact suffix.
    #[must_use]
    pub fn get(&self, suffix: &str) -> Option<&HeadSuffix> {
        self.entries.iter().find(|e| e.suffix == suffix)
    }

    /// Returns the number of suffixes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the suffixes, longest first.
    pub fn iter(&self) -> impl Iterator<Item = &HeadSuffix> {
        self.entries.iter()
    }
}

// =============================================================================
// Vocabulary Store
// =============================================================================

/// Immutable vocabulary configuration.
///
/// Built once at start-up and shared by reference between the index builder,
/// the decoder, the classifier, and the head-final stripper.
#[derive(Clone, Debug)]
pub struct VocabularyStore {
    tags: HashMap<Tag, TagCategory>,
    tag_order: Vec<Tag>,
    topics: HashSet<Topic>,
    topic_order: Vec<Topic>,
    aliases: Vec<Alias>,
    generalizations: Vec<Generalization>,
    allowed_unknown_starts: HashSet<String>,
    ignored_unknown_starts: Vec<String>,
    ignored_unknown_tags: HashSet<String>,
    head_suffixes: [HeadSuffixTable; 4],
    head_languages: [HashSet<String>; 4],
    numeric_languages: HashSet<String>,
    ok_suspicious_forms: HashSet<String>,
    english_words: HashSet<String>,
    not_english_words: HashSet<String>,
    known_species: HashSet<String>,
    known_firsts: HashSet<String>,
}

impl VocabularyStore {
    /// Builds the store from the standard tables.
    ///
    /// # Errors
    /// Returns an error if the standard tables are inconsistent.
    pub fn standard() -> Result<Self> {
        VocabularyBuilder::standard().build()
    }

    /// Returns the category of a canonical tag.
    #[must_use]
    pub fn category(&self, name: &str) -> Option<TagCategory> {
        self.tags.get(name).copied()
    }

    /// Returns true if `name` is a canonical tag.
    #[must_use]
    pub fn is_tag(&self, name: &str) -> bool {
        self.tags.contains_key(name)
    }

    /// Returns true if `name` is a canonical topic.
    #[must_use]
    pub fn is_topic(&self, name: &str) -> bool {
        self.topics.contains(name)
    }

    /// Iterates over canonical tags in declaration order.
    pub fn tags(&self) -> impl Iterator<Item = (&Tag, TagCategory)> {
        self.tag_order.iter().map(|tag| (tag, self.tags[tag]))
    }

    /// Iterates over canonical topics in declaration order.
    pub fn topics(&self) -> impl Iterator<Item = &Topic> {
        self.topic_order.iter()
    }

    /// Returns the resolved tag aliases.
    #[must_use]
    pub fn aliases(&self) -> &[Alias] {
        &self.aliases
    }

    /// Returns the resolved topic generalizations.
    #[must_use]
    pub fn generalizations(&self) -> &[Generalization] {
        &self.generalizations
    }

    /// Returns true if an unknown span starting with `word` may be kept raw.
    #[must_use]
    pub fn is_allowed_unknown_start(&self, word: &str) -> bool {
        self.allowed_unknown_starts.contains(word)
    }

    /// Returns true if an unknown span starts with an ignored prefix.
    #[must_use]
    pub fn is_ignored_unknown_start(&self, span: &str) -> bool {
        self.ignored_unknown_starts.iter().any(|prefix| {
            span == prefix
                || span
                    .strip_prefix(prefix.as_str())
                    .is_some_and(|rest| rest.starts_with(' '))
        })
    }

    /// Returns true if an unknown span is ignored entirely.
    #[must_use]
    pub fn is_ignored_unknown_tag(&self, span: &str) -> bool {
        self.ignored_unknown_tags.contains(span)
    }

    /// Returns the head-final suffix table of a family.
    #[must_use]
    pub fn head_suffixes(&self, family: HeadFamily) -> &HeadSuffixTable {
        &self.head_suffixes[family.index()]
    }

    /// Returns true if a family's table applies to `language`.
    ///
    /// The general table applies to every language.
    #[must_use]
    pub fn is_head_language(&self, family: HeadFamily, language: &str) -> bool {
        family == HeadFamily::General || self.head_languages[family.index()].contains(language)
    }

    /// Returns true if numeric head-final suffixes are class markers in `language`.
    #[must_use]
    pub fn has_numeric_heads(&self, language: &str) -> bool {
        self.numeric_languages.contains(language)
    }

    /// Returns true if `form` may end in a suspicious-looking token.
    #[must_use]
    pub fn is_ok_suspicious_form(&self, form: &str) -> bool {
        self.ok_suspicious_forms.contains(form)
    }

    /// Returns true if `word` is in the English word list.
    #[must_use]
    pub fn is_english_word(&self, word: &str) -> bool {
        self.english_words.contains(word)
    }

    /// Returns true if `word` must never count as English.
    #[must_use]
    pub fn is_not_english(&self, word: &str) -> bool {
        self.not_english_words.contains(word)
    }

    /// Returns true if `name` is a known binomial name.
    #[must_use]
    pub fn is_known_species(&self, name: &str) -> bool {
        self.known_species.contains(name)
    }

    /// Returns true if `word` is a known genus or higher taxon.
    #[must_use]
    pub fn is_known_taxon(&self, word: &str) -> bool {
        self.known_firsts.contains(word)
    }

    /// Orders the tags of a set for display: by category precedence, then name.
    ///
    /// Raw tags and error sentinels sort last.
    #[must_use]
    pub fn display_order<'a>(&self, tags: &'a TagSet) -> Vec<&'a Tag> {
        let mut ordered: Vec<&Tag> = tags.iter().collect();
        ordered.sort_by_key(|tag| {
            let precedence = self
                .category(tag.as_str())
                .map_or(u8::MAX, TagCategory::precedence);
            (precedence, tag.as_str())
        });
        ordered
    }
}

// =============================================================================
// Vocabulary Builder
// =============================================================================

/// Collects table entries and validates them into a [`VocabularyStore`].
#[derive(Clone, Debug, Default)]
pub struct VocabularyBuilder {
    tags: Vec<(String, TagCategory)>,
    aliases: Vec<(String, Vec<String>)>,
    topics: Vec<String>,
    generalizations: Vec<(String, Vec<String>)>,
    allowed_unknown_starts: Vec<String>,
    ignored_unknown_starts: Vec<String>,
    ignored_unknown_tags: Vec<String>,
    head_suffixes: Vec<(HeadFamily, String, String)>,
    head_languages: Vec<(HeadFamily, String)>,
    numeric_languages: Vec<String>,
    ok_suspicious_forms: Vec<String>,
    english_words: Vec<String>,
    not_english_words: Vec<String>,
    known_species: Vec<String>,
    known_firsts: Vec<String>,
}

impl VocabularyBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder pre-loaded with the standard tables.
    #[must_use]
    pub fn standard() -> Self {
        use tables::{heads, lexicon};

        let mut builder = Self::new();
        for &(name, category) in tables::TAGS {
            builder.add_tag(name, category);
        }
        for &(phrase, alternatives) in tables::TAG_ALIASES {
            builder.add_alias(phrase, alternatives);
        }
        for &topic in tables::TOPICS {
            builder.add_topic(topic);
        }
        for &(phrase, targets) in tables::TOPIC_GENERALIZATIONS {
            builder.add_generalization(phrase, targets);
        }
        for &word in tables::ALLOWED_UNKNOWN_STARTS {
            builder.allow_unknown_start(word);
        }
        for &prefix in tables::IGNORED_UNKNOWN_STARTS {
            builder.ignore_unknown_start(prefix);
        }
        for &span in tables::IGNORED_UNKNOWN_TAGS {
            builder.ignore_unknown_tag(span);
        }

        let families = [
            (HeadFamily::Bantu, heads::BANTU_SUFFIXES, heads::BANTU_LANGUAGES),
            (HeadFamily::Semitic, heads::SEMITIC_SUFFIXES, heads::SEMITIC_LANGUAGES),
            (HeadFamily::Other, heads::OTHER_SUFFIXES, heads::OTHER_LANGUAGES),
            (HeadFamily::General, heads::GENERAL_SUFFIXES, &[][..]),
        ];
        for (family, suffixes, languages) in families {
            for &(suffix, value) in suffixes {
                builder.add_head_suffix(family, suffix, value);
            }
            for &language in languages {
                builder.add_head_language(family, language);
            }
        }
        for &language in heads::NUMERIC_LANGUAGES {
            builder.add_numeric_language(language);
        }
        for &form in heads::OK_SUSPICIOUS_FORMS {
            builder.ok_suspicious_form(form);
        }

        builder.add_english_words(lexicon::ENGLISH_WORDS.split_whitespace());
        for &word in lexicon::NOT_ENGLISH_WORDS {
            builder.add_not_english_word(word);
        }
        for &species in lexicon::KNOWN_SPECIES {
            builder.add_species(species);
        }
        for &taxon in lexicon::KNOWN_FIRSTS {
            builder.add_taxon(taxon);
        }
        builder
    }

    /// Declares a canonical tag.
    pub fn add_tag(&mut self, name: &str, category: TagCategory) -> &mut Self {
        self.tags.push((name.to_string(), category));
        self
    }

    /// Declares a surface phrase with one or more alternative readings.
    ///
    /// Each alternative is a space-separated list of canonical tags and topics.
    pub fn add_alias(&mut self, phrase: &str, alternatives: &[&str]) -> &mut Self {
        self.aliases.push((
            phrase.to_string(),
            alternatives.iter().map(ToString::to_string).collect(),
        ));
        self
    }

    /// Declares a canonical topic.
    pub fn add_topic(&mut self, name: &str) -> &mut Self {
        self.topics.push(name.to_string());
        self
    }

    /// Declares a topic phrase that generalizes to broader topics.
    pub fn add_generalization(&mut self, phrase: &str, targets: &[&str]) -> &mut Self {
        self.generalizations.push((
            phrase.to_string(),
            targets.iter().map(ToString::to_string).collect(),
        ));
        self
    }

    /// Allows unknown spans starting with `word` to be kept raw.
    pub fn allow_unknown_start(&mut self, word: &str) -> &mut Self {
        self.allowed_unknown_starts.push(word.to_string());
        self
    }

    /// Drops unknown spans starting with `prefix` without an error.
    pub fn ignore_unknown_start(&mut self, prefix: &str) -> &mut Self {
        self.ignored_unknown_starts.push(prefix.to_string());
        self
    }

    /// Drops unknown spans equal to `span` entirely.
    pub fn ignore_unknown_tag(&mut self, span: &str) -> &mut Self {
        self.ignored_unknown_tags.push(span.to_string());
        self
    }

    /// Adds a head-final suffix; a leading `?` on `value` marks it suspicious.
    pub fn add_head_suffix(&mut self, family: HeadFamily, suffix: &str, value: &str) -> &mut Self {
        self.head_suffixes
            .push((family, suffix.to_string(), value.to_string()));
        self
    }

    /// Adds a language to a head-final family.
    pub fn add_head_language(&mut self, family: HeadFamily, language: &str) -> &mut Self {
        self.head_languages.push((family, language.to_string()));
        self
    }

    /// Flags a language as using numeric head-final class markers.
    pub fn add_numeric_language(&mut self, language: &str) -> &mut Self {
        self.numeric_languages.push(language.to_string());
        self
    }

    /// Exempts a form from the unhandled-suffix diagnostic.
    pub fn ok_suspicious_form(&mut self, form: &str) -> &mut Self {
        self.ok_suspicious_forms.push(form.to_string());
        self
    }

    /// Adds words to the English word list.
    pub fn add_english_words<'a>(&mut self, words: impl IntoIterator<Item = &'a str>) -> &mut Self {
        self.english_words
            .extend(words.into_iter().map(ToString::to_string));
        self
    }

    /// Adds a token that never counts as English.
    pub fn add_not_english_word(&mut self, word: &str) -> &mut Self {
        self.not_english_words.push(word.to_string());
        self
    }

    /// Adds a known binomial name.
    pub fn add_species(&mut self, name: &str) -> &mut Self {
        self.known_species.push(name.to_string());
        self
    }

    /// Adds a genus or higher taxon.
    pub fn add_taxon(&mut self, name: &str) -> &mut Self {
        self.known_firsts.push(name.to_string());
        self
    }

    /// Validates the collected entries and builds the store.
    ///
    /// Every hyphenated canonical tag also gets an alias for its spaced
    /// spelling unless one is declared explicitly.
    ///
    /// # Errors
    /// Returns an error if a tag is declared twice, a phrase is empty, or an
    /// alias, generalization, or head-final suffix names something that is
    /// not in the canonical vocabulary.
    pub fn build(&self) -> Result<VocabularyStore> {
        let (tags, tag_order) = self.build_tags()?;

        let mut topics = HashSet::new();
        let mut topic_order = Vec::new();
        for name in &self.topics {
            let topic = Topic::new(name);
            if topics.insert(topic.clone()) {
                topic_order.push(topic);
            }
        }

        let aliases = self.build_aliases(&tags, &topics)?;
        let generalizations = self.build_generalizations(&topics)?;
        let head_suffixes = self.build_head_suffixes(&tags)?;

        let mut head_languages: [HashSet<String>; 4] = Default::default();
        for (family, language) in &self.head_languages {
            head_languages[family.index()].insert(language.clone());
        }

        Ok(VocabularyStore {
            tags,
            tag_order,
            topics,
            topic_order,
            aliases,
            generalizations,
            allowed_unknown_starts: self.allowed_unknown_starts.iter().cloned().collect(),
            ignored_unknown_starts: self.ignored_unknown_starts.clone(),
            ignored_unknown_tags: self.ignored_unknown_tags.iter().cloned().collect(),
            head_suffixes,
            head_languages,
            numeric_languages: self.numeric_languages.iter().cloned().collect(),
            ok_suspicious_forms: self.ok_suspicious_forms.iter().cloned().collect(),
            english_words: self.english_words.iter().cloned().collect(),
            not_english_words: self.not_english_words.iter().cloned().collect(),
            known_species: self.known_species.iter().cloned().collect(),
            known_firsts: self.known_firsts.iter().cloned().collect(),
        })
    }

    fn build_tags(&self) -> Result<(HashMap<Tag, TagCategory>, Vec<Tag>)> {
        let mut tags = HashMap::new();
        let mut order = Vec::new();
        for (name, category) in &self.tags {
            if name.is_empty() || name.contains(char::is_whitespace) {
                return Err(Error::invalid_phrase(name.as_str())
                    .with_context(ErrorContext::new().with_table("tags")));
            }
            let tag = Tag::new(name);
            if tags.insert(tag.clone(), *category).is_some() {
                return Err(Error::duplicate_tag(name.as_str())
                    .with_context(ErrorContext::new().with_table("tags").with_entry(name)));
            }
            order.push(tag);
        }
        Ok((tags, order))
    }

    fn build_aliases(
        &self,
        tags: &HashMap<Tag, TagCategory>,
        topics: &HashSet<Topic>,
    ) -> Result<Vec<Alias>> {
        let context = |phrase: &str| {
            ErrorContext::new()
                .with_table("tag aliases")
                .with_entry(phrase)
        };

        let mut aliases = Vec::with_capacity(self.aliases.len());
        for (phrase, alternatives) in &self.aliases {
            if phrase.split_whitespace().next().is_none() {
                return Err(Error::invalid_phrase(phrase.as_str()).with_context(context(phrase)));
            }
            let mut readings = Vec::with_capacity(alternatives.len());
            for alternative in alternatives {
                let mut tag_set = TagSet::new();
                let mut topic_set = TopicSet::new();
                for name in alternative.split_whitespace() {
                    if let Some((tag, _)) = tags.get_key_value(name) {
                        tag_set.insert(tag.clone());
                    } else if let Some(topic) = topics.get(name) {
                        topic_set.insert(topic.clone());
                    } else {
                        return Err(Error::unknown_alias_target(phrase.as_str(), name)
                            .with_context(context(phrase)));
                    }
                }
                let reading = Reading::from_parts(tag_set, topic_set).ok_or_else(|| {
                    Error::invalid_phrase(alternative.as_str()).with_context(context(phrase))
                })?;
                readings.push(reading);
            }
            aliases.push(Alias {
                phrase: normalize_phrase(phrase),
                readings,
            });
        }

        let declared: HashSet<String> = aliases.iter().map(|a| a.phrase.clone()).collect();
        for (name, _) in &self.tags {
            if !name.contains('-') {
                continue;
            }
            let spaced = name.replace('-', " ");
            let spaced = normalize_phrase(&spaced);
            if spaced.is_empty() || declared.contains(&spaced) || tags.contains_key(spaced.as_str())
            {
                continue;
            }
            let tag_set: TagSet = [Tag::new(name)].into_iter().collect();
            aliases.push(Alias {
                phrase: spaced,
                readings: vec![Reading::Tags(tag_set)],
            });
        }
        Ok(aliases)
    }

    fn build_generalizations(&self, topics: &HashSet<Topic>) -> Result<Vec<Generalization>> {
        let mut targets_of: HashMap<&str, &[String]> = HashMap::new();
        for (phrase, targets) in &self.generalizations {
            if phrase.split_whitespace().next().is_none() {
                return Err(Error::invalid_phrase(phrase.as_str())
                    .with_context(ErrorContext::new().with_table("topic generalizations")));
            }
            for target in targets {
                if !topics.contains(target.as_str()) {
                    return Err(Error::unknown_generalization_target(
                        phrase.as_str(),
                        target.as_str(),
                    )
                    .with_context(
                        ErrorContext::new()
                            .with_table("topic generalizations")
                            .with_entry(phrase),
                    ));
                }
            }
            targets_of.insert(phrase.as_str(), targets.as_slice());
        }

        let mut generalizations = Vec::with_capacity(self.generalizations.len());
        for (phrase, targets) in &self.generalizations {
            let mut closure = TopicSet::new();
            let mut visited: HashSet<&str> = HashSet::new();
            let mut queue: VecDeque<&str> = targets.iter().map(String::as_str).collect();
            while let Some(name) = queue.pop_front() {
                if !visited.insert(name) {
                    continue;
                }
                closure.insert(Topic::new(name));
                if let Some(next) = targets_of.get(name) {
                    queue.extend(next.iter().map(String::as_str));
                }
            }
            generalizations.push(Generalization {
                phrase: normalize_phrase(phrase),
                topics: closure,
            });
        }
        Ok(generalizations)
    }

    fn build_head_suffixes(
        &self,
        tags: &HashMap<Tag, TagCategory>,
    ) -> Result<[HeadSuffixTable; 4]> {
        let mut tables: [HeadSuffixTable; 4] = Default::default();
        for (family, suffix, value) in &self.head_suffixes {
            let context = || {
                ErrorContext::new()
                    .with_table(family.table_name())
                    .with_entry(suffix)
            };
            let suffix = normalize_phrase(suffix);
            if suffix.is_empty() {
                return Err(Error::invalid_phrase(suffix).with_context(context()));
            }
            let (suspicious, value) = match value.strip_prefix('?') {
                Some(rest) => (true, rest),
                None => (false, value.as_str()),
            };
            let mut resolved = Vec::new();
            for name in value.split_whitespace() {
                let Some((tag, _)) = tags.get_key_value(name) else {
                    return Err(
                        Error::unknown_alias_target(suffix.as_str(), name).with_context(context())
                    );
                };
                resolved.push(tag.clone());
            }
            tables[family.index()].insert(HeadSuffix {
                suffix,
                tags: resolved,
                suspicious,
            });
        }
        Ok(tables)
    }
}

/// Collapses runs of whitespace to single spaces and trims the ends.
fn normalize_phrase(phrase: &str) -> String {
    phrase.split_whitespace().collect::<Vec<_>>().join(" ")
}
