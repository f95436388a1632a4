//! Decoding paths and best-path selection.
//!
//! A [`Path`] is the sequence of steps covering a prefix of the input. Paths
//! share structure through `im::Vector`, so extending one is cheap and leaves
//! the original intact.

use im::Vector;
use lexitag_foundation::{DecodedTags, Reading, Tag, TagSet, TopicSet};

/// Extra cost charged for each unknown step.
pub const UNKNOWN_PENALTY: usize = 100;

/// One step of a path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step<'a> {
    /// A phrase found in the index
    Known {
        /// Words covered by the step
        words: usize,
        /// Alternative readings of the phrase
        readings: &'a [Reading],
    },
    /// A span the index does not cover
    Unknown {
        /// The span text, words joined by single spaces
        span: String,
        /// Raw or error tag carried by the step; `None` drops the span
        tag: Option<Tag>,
    },
}

impl Step<'_> {
    /// Returns true for unknown steps.
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown { .. })
    }

    /// Returns the span if this step carries the error sentinel.
    #[must_use]
    pub fn error_span(&self) -> Option<&str> {
        match self {
            Self::Unknown {
                span,
                tag: Some(tag),
            } if tag.is_error() => Some(span.as_str()),
            _ => None,
        }
    }
}

/// A sequence of steps with its cost.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Path<'a> {
    steps: Vector<Step<'a>>,
    unknowns: usize,
}

impl<'a> Path<'a> {
    /// The empty path at the start of the input.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns a new path with `step` appended.
    #[must_use]
    pub fn extended(&self, step: Step<'a>) -> Self {
        let mut path = self.clone();
        if step.is_unknown() {
            path.unknowns += 1;
        }
        path.steps.push_back(step);
        path
    }

    /// Step count plus a penalty per unknown step.
    #[must_use]
    pub fn cost(&self) -> usize {
        self.steps.len() + UNKNOWN_PENALTY * self.unknowns
    }

    /// Returns the number of unknown steps.
    #[must_use]
    pub fn unknown_count(&self) -> usize {
        self.unknowns
    }

    /// Returns the number of steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns true if the path has no steps.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Iterates over the steps in order.
    pub fn steps(&self) -> impl Iterator<Item = &Step<'a>> {
        self.steps.iter()
    }

    /// Spans of the steps carrying the error sentinel.
    pub fn error_spans(&self) -> impl Iterator<Item = &str> {
        self.steps.iter().filter_map(Step::error_span)
    }

    /// Expands the path into its alternative tag sets and topics.
    ///
    /// Tag sets are the cartesian product of each step's alternatives,
    /// union-merged per combination, duplicates dropped in first-seen order.
    /// Topics of every reading on the path are collected once each.
    #[must_use]
    pub fn expand(&self) -> DecodedTags {
        let mut combinations = vec![TagSet::new()];
        let mut topics = TopicSet::new();

        for step in &self.steps {
            match step {
                Step::Known { readings, .. } => {
                    let mut alternatives: Vec<TagSet> = Vec::with_capacity(readings.len());
                    for reading in *readings {
                        let tags = reading.tags().cloned().unwrap_or_default();
                        if !alternatives.contains(&tags) {
                            alternatives.push(tags);
                        }
                        for topic in reading.topics().into_iter().flat_map(TopicSet::iter) {
                            topics.insert(topic.clone());
                        }
                    }
                    combinations = combinations
                        .iter()
                        .flat_map(|base| alternatives.iter().map(move |alt| base.union(alt)))
                        .collect();
                    dedup_in_order(&mut combinations);
                }
                Step::Unknown { tag: Some(tag), .. } => {
                    for set in &mut combinations {
                        set.insert(tag.clone());
                    }
                    dedup_in_order(&mut combinations);
                }
                Step::Unknown { tag: None, .. } => {}
            }
        }

        DecodedTags {
            tagsets: combinations,
            topics: topics.iter().cloned().collect(),
        }
    }
}

fn dedup_in_order(sets: &mut Vec<TagSet>) {
    let mut kept: Vec<TagSet> = Vec::with_capacity(sets.len());
    for set in sets.drain(..) {
        if !kept.contains(&set) {
            kept.push(set);
        }
    }
    *sets = kept;
}

/// The winner of a best-path reduction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Best<'a> {
    /// The minimum-cost path, first encountered on ties
    pub path: Path<'a>,
    /// How many other candidates had the same cost
    pub ties: usize,
}

/// Picks the minimum-cost candidate; the earliest wins ties.
///
/// Returns `None` if there are no candidates.
#[must_use]
pub fn select_best<'a>(candidates: impl IntoIterator<Item = Path<'a>>) -> Option<Best<'a>> {
    candidates.into_iter().fold(None, |best, candidate| match best {
        None => Some(Best {
            path: candidate,
            ties: 0,
        }),
        Some(best) => {
            let (cost, current) = (candidate.cost(), best.path.cost());
            if cost < current {
                Some(Best {
                    path: candidate,
                    ties: 0,
                })
            } else if cost == current {
                Some(Best {
                    ties: best.ties + 1,
                    ..best
                })
            } else {
                Some(best)
            }
        }
    })
}
