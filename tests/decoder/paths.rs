//! Integration tests for paths and best-path selection

use lexitag_decoder::{Path, Step, UNKNOWN_PENALTY, select_best};
use lexitag_foundation::{Reading, Tag, TagSet, Topic, TopicSet};

fn tags(names: &[&str]) -> Reading {
    Reading::Tags(names.iter().map(|name| Tag::new(name)).collect::<TagSet>())
}

fn unknown(span: &str) -> Step<'static> {
    Step::Unknown {
        span: span.to_string(),
        tag: Some(Tag::unknown_error()),
    }
}

#[test]
fn cost_charges_unknown_steps() {
    let readings = [tags(&["plural"])];
    let path = Path::empty()
        .extended(Step::Known {
            words: 1,
            readings: &readings,
        })
        .extended(unknown("zzyzx"));

    assert_eq!(path.len(), 2);
    assert_eq!(path.unknown_count(), 1);
    assert_eq!(path.cost(), 2 + UNKNOWN_PENALTY);
    assert_eq!(path.error_spans().collect::<Vec<_>>(), vec!["zzyzx"]);
}

#[test]
fn extending_leaves_original_intact() {
    let base = Path::empty().extended(unknown("a"));
    let longer = base.extended(unknown("b"));
    assert_eq!(base.len(), 1);
    assert_eq!(longer.len(), 2);
}

#[test]
fn fewer_unknowns_beat_fewer_steps() {
    let readings = [tags(&["plural"])];
    let known = Step::Known {
        words: 1,
        readings: &readings,
    };
    let three_known = Path::empty()
        .extended(known.clone())
        .extended(known.clone())
        .extended(known);
    let one_unknown = Path::empty().extended(unknown("x"));

    let best = select_best([one_unknown, three_known.clone()]).unwrap();
    assert_eq!(best.path, three_known);
    assert_eq!(best.ties, 0);
}

#[test]
fn earliest_candidate_wins_ties() {
    let first = Path::empty().extended(unknown("first"));
    let second = Path::empty().extended(unknown("second"));
    let best = select_best([first.clone(), second]).unwrap();
    assert_eq!(best.path, first);
    assert_eq!(best.ties, 1);

    assert!(select_best(Vec::<Path>::new()).is_none());
}

#[test]
fn expansion_takes_cartesian_product() {
    let number = [tags(&["singular"]), tags(&["plural"])];
    let gender = [tags(&["masculine"]), tags(&["feminine"])];
    let topics: TopicSet = [Topic::new("nautical")].into_iter().collect();
    let topic = [Reading::Topics(topics)];

    let path = Path::empty()
        .extended(Step::Known {
            words: 1,
            readings: &number,
        })
        .extended(Step::Known {
            words: 1,
            readings: &gender,
        })
        .extended(Step::Known {
            words: 1,
            readings: &topic,
        });
    let decoded = path.expand();

    assert_eq!(decoded.tagsets.len(), 4);
    assert_eq!(decoded.topic_names(), vec!["nautical"]);
}

#[test]
fn dropped_spans_add_nothing() {
    let path = Path::empty().extended(Step::Unknown {
        span: "see below".to_string(),
        tag: None,
    });
    let decoded = path.expand();
    assert_eq!(decoded.as_tuples(), vec![Vec::<&str>::new()]);
    assert!(path.error_spans().next().is_none());
}
