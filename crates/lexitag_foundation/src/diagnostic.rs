//! Advisory diagnostics.
//!
//! Decoding and head-final stripping report suspicious input through a
//! caller-supplied [`DiagnosticSink`]. Diagnostics never change results and
//! never fail the caller.

use std::collections::VecDeque;
use std::fmt;
use std::sync::{Mutex, PoisonError};

// =============================================================================
// Diagnostic
// =============================================================================

/// How loud a diagnostic is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Of interest when tuning vocabulary tables.
    Debug,
    /// Likely a data problem in the source entry.
    Warning,
}

/// What a diagnostic is about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// A span matched nothing in the vocabulary.
    UnknownTag,
    /// Several lowest-cost segmentations existed; the first was taken.
    AmbiguousPath,
    /// A head-final suffix with a suspicious mapping was stripped.
    SuspiciousSuffix,
    /// A form still ends in something that looks like a stray tag.
    UnhandledSuffix,
}

impl DiagnosticKind {
    /// Returns a stable name for structured output.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::UnknownTag => "unknown-tag",
            Self::AmbiguousPath => "ambiguous-path",
            Self::SuspiciousSuffix => "suspicious-suffix",
            Self::UnhandledSuffix => "unhandled-suffix",
        }
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One advisory message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Severity level.
    pub severity: Severity,
    /// What the message is about.
    pub kind: DiagnosticKind,
    /// The input that triggered it.
    pub input: String,
    /// Human-readable explanation.
    pub message: String,
}

impl Diagnostic {
    /// Creates a warning.
    #[must_use]
    pub fn warning(kind: DiagnosticKind, input: &str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            kind,
            input: input.to_string(),
            message: message.into(),
        }
    }

    /// Creates a debug-level diagnostic.
    #[must_use]
    pub fn debug(kind: DiagnosticKind, input: &str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Debug,
            kind,
            input: input.to_string(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {:?}", self.kind, self.message, self.input)
    }
}

// =============================================================================
// Sinks
// =============================================================================

/// Receives diagnostics.
///
/// Sinks are shared between threads, so `report` takes `&self`.
pub trait DiagnosticSink: Send + Sync {
    /// Records one diagnostic.
    fn report(&self, diagnostic: Diagnostic);
}

/// Discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn report(&self, _diagnostic: Diagnostic) {}
}

/// Forwards diagnostics to `tracing` with structured fields.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, diagnostic: Diagnostic) {
        let kind = diagnostic.kind.name();
        match diagnostic.severity {
            Severity::Debug => tracing::debug!(
                kind,
                input = %diagnostic.input,
                "{}",
                diagnostic.message
            ),
            Severity::Warning => tracing::warn!(
                kind,
                input = %diagnostic.input,
                "{}",
                diagnostic.message
            ),
        }
    }
}

/// A bounded buffer that keeps the most recent diagnostics.
///
/// Oldest entries are discarded once `max_size` is reached.
#[derive(Debug)]
pub struct DiagnosticBuffer {
    records: Mutex<VecDeque<Diagnostic>>,
    max_size: usize,
}

impl DiagnosticBuffer {
    /// Creates a buffer with the given maximum size.
    #[must_use]
    pub fn new(max_size: usize) -> Self {
        Self {
            records: Mutex::new(VecDeque::with_capacity(max_size.min(1024))),
            max_size,
        }
    }

    /// Creates a buffer with default size (1000 records).
    #[must_use]
    pub fn default_size() -> Self {
        Self::new(1000)
    }

    /// Returns the number of buffered diagnostics.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns true if nothing is buffered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Clears the buffer.
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Returns a copy of every buffered diagnostic, oldest first.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Diagnostic> {
        self.lock().iter().cloned().collect()
    }

    /// Returns buffered diagnostics of one kind.
    #[must_use]
    pub fn by_kind(&self, kind: DiagnosticKind) -> Vec<Diagnostic> {
        self.lock()
            .iter()
            .filter(|d| d.kind == kind)
            .cloned()
            .collect()
    }

    /// Removes and returns every buffered diagnostic.
    pub fn drain(&self) -> Vec<Diagnostic> {
        self.lock().drain(..).collect()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, VecDeque<Diagnostic>> {
        // The buffer stays consistent even if a holder panicked.
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for DiagnosticBuffer {
    fn default() -> Self {
        Self::default_size()
    }
}

impl DiagnosticSink for DiagnosticBuffer {
    fn report(&self, diagnostic: Diagnostic) {
        if self.max_size == 0 {
            return;
        }
        let mut records = self.lock();
        while records.len() >= self.max_size {
            records.pop_front();
        }
        records.push_back(diagnostic);
    }
}
