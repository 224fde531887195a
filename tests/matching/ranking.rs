//! Ranking behavior on small hand-built dictionaries.

use super::common::{produce_store, store_of};
use cami::{rank, Matcher, MatcherConfig, QueryResult, Suggestion};

fn suggestions(matcher: &Matcher, raw: &str) -> Vec<String> {
    match matcher.query(raw) {
        QueryResult::NotFound(names) => names,
        QueryResult::Found(_) => panic!("{:?} unexpectedly matched", raw),
    }
}

#[test]
fn test_equal_distances_keep_load_order() {
    let store = store_of(&["tack", "back", "rack", "sack"]);
    let matcher = Matcher::new(&store);
    assert_eq!(suggestions(&matcher, "jack"), vec!["tack", "back", "rack"]);

    let reversed = store_of(&["sack", "rack", "back", "tack"]);
    let matcher = Matcher::new(&reversed);
    assert_eq!(suggestions(&matcher, "jack"), vec!["sack", "rack", "back"]);
}

#[test]
fn test_closer_names_outrank_earlier_ones() {
    let store = store_of(&["peach", "pear", "pea"]);
    let matcher = Matcher::new(&store);
    // pear and pea are one edit away, peach is two
    assert_eq!(suggestions(&matcher, "peas"), vec!["pear", "pea", "peach"]);
}

#[test]
fn test_threshold_is_inclusive() {
    let store = store_of(&["abcdef"]);
    let matcher = Matcher::new(&store);
    assert_eq!(suggestions(&matcher, "abc"), vec!["abcdef"]);
    assert!(suggestions(&matcher, "ab").is_empty());
}

#[test]
fn test_produce_typos() {
    let store = produce_store();
    let matcher = Matcher::new(&store);
    assert_eq!(suggestions(&matcher, "aple")[0], "apple");
    assert_eq!(suggestions(&matcher, "lemonn")[0], "lemon");
    assert!(suggestions(&matcher, "zzzzzzzzzz").is_empty());
}

#[test]
fn test_custom_config() {
    let store = produce_store();
    let tight = MatcherConfig::default().with_max_distance(1).with_max_suggestions(1);
    let matcher = Matcher::with_config(&store, tight);
    // plum(2) and lemon(3) fall outside the tighter threshold
    assert_eq!(suggestions(&matcher, "lim"), vec!["lime"]);

    let loose = MatcherConfig::default().with_max_suggestions(10);
    let matcher = Matcher::with_config(&store, loose);
    assert_eq!(
        suggestions(&matcher, "pe"),
        vec!["pear", "apple", "grape", "kale", "lime", "peach", "plum"]
    );
}

#[test]
fn test_suggest_reports_distances() {
    let store = produce_store();
    let matcher = Matcher::new(&store);
    let ranked = matcher.suggest("pech");
    assert_eq!(
        ranked[0],
        Suggestion {
            name: "peach".to_string(),
            distance: 1
        }
    );
    assert!(ranked.windows(2).all(|w| w[0].distance <= w[1].distance));
}

#[test]
fn test_rank_drops_repeats_before_truncating() {
    let candidates = vec![
        Suggestion { name: "kiwi".into(), distance: 2 },
        Suggestion { name: "kiwi".into(), distance: 1 },
        Suggestion { name: "kiln".into(), distance: 2 },
        Suggestion { name: "kilt".into(), distance: 3 },
    ];
    let names: Vec<String> = rank(candidates, 3).into_iter().map(|s| s.name).collect();
    assert_eq!(names, vec!["kiwi", "kiln", "kilt"]);
}
