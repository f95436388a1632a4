//! Error types for lexitag.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//! Errors only arise while building the vocabulary: decoding and
//! classification are total and never fail.

use std::fmt;

use thiserror::Error;

/// Result alias for fallible lexitag operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for lexitag operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an unknown alias target error.
    #[must_use]
    pub fn unknown_alias_target(alias: impl Into<String>, target: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownAliasTarget {
            alias: alias.into(),
            target: target.into(),
        })
    }

    /// Creates an unknown generalization target error.
    #[must_use]
    pub fn unknown_generalization_target(
        topic: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self::new(ErrorKind::UnknownGeneralizationTarget {
            topic: topic.into(),
            target: target.into(),
        })
    }

    /// Creates a duplicate tag error.
    #[must_use]
    pub fn duplicate_tag(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::DuplicateTag(name.into()))
    }

    /// Creates an invalid phrase error.
    #[must_use]
    pub fn invalid_phrase(phrase: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidPhrase(phrase.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// An alias maps to a name that is neither a canonical tag nor topic.
    #[error("alias {alias:?} maps to unknown tag or topic {target:?}")]
    UnknownAliasTarget {
        /// The surface phrase.
        alias: String,
        /// The name that could not be resolved.
        target: String,
    },

    /// A topic generalization names a topic that does not exist.
    #[error("topic {topic:?} generalizes to unknown topic {target:?}")]
    UnknownGeneralizationTarget {
        /// The topic being generalized.
        topic: String,
        /// The missing target.
        target: String,
    },

    /// A canonical tag was declared twice.
    #[error("duplicate canonical tag: {0}")]
    DuplicateTag(String),

    /// A phrase is empty or malformed.
    #[error("invalid phrase: {0:?}")]
    InvalidPhrase(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Name of the table being loaded.
    pub table: Option<String>,
    /// Entry within the table.
    pub entry: Option<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the table name.
    #[must_use]
    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = Some(table.into());
        self
    }

    /// Sets the entry within the table.
    #[must_use]
    pub fn with_entry(mut self, entry: impl Into<String>) -> Self {
        self.entry = Some(entry.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(table) = &self.table {
            write!(f, "in table {table}")?;
            if let Some(entry) = &self.entry {
                write!(f, " at entry {entry:?}")?;
            }
        }
        Ok(())
    }
}
