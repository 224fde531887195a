//! What a user sees: fallback message, suggestion line, and JSON reports.

use super::common::EMBEDDED;
use cami::report::{fallback_message, headline, suggestion_line, Report};
use cami::Matcher;

#[test]
fn test_miss_renders_fallback_and_suggestions() {
    let matcher = Matcher::new(&EMBEDDED);
    let result = matcher.query("papayya");

    assert_eq!(
        fallback_message("papayya"),
        "🤷‍♀️ Hmm, no info on \"papayya\" yet. Check the label and trust your gut!"
    );
    assert_eq!(
        suggestion_line(result.suggestions()).as_deref(),
        Some("Did you mean: papaya?")
    );
}

#[test]
fn test_gibberish_renders_no_suggestion_line() {
    let matcher = Matcher::new(&EMBEDDED);
    let result = matcher.query("xyzzyplugh123");
    assert_eq!(suggestion_line(result.suggestions()), None);
}

#[test]
fn test_hit_headline_carries_emoji() {
    let matcher = Matcher::new(&EMBEDDED);
    let result = matcher.query("Papaya");
    assert_eq!(
        headline(result.verdict().unwrap()),
        "🥭 Great! Full of enzymes and sunshine."
    );
}

#[test]
fn test_report_serializes_for_both_outcomes() {
    let matcher = Matcher::new(&EMBEDDED);

    let hit = serde_json::to_value(Report::new("Papaya", &matcher.query("Papaya"))).unwrap();
    assert_eq!(hit["input"], "Papaya");
    assert_eq!(hit["found"], true);
    assert_eq!(hit["comment"], "Great! Full of enzymes and sunshine.");
    assert_eq!(hit["emoji"], "🥭");
    assert_eq!(hit["health"], "good");
    assert_eq!(hit["sustainability"], "low impact");

    let miss = serde_json::to_value(Report::new(" papayya", &matcher.query(" papayya"))).unwrap();
    assert_eq!(miss["found"], false);
    assert!(miss.get("comment").is_none());
    assert_eq!(miss["input"], " papayya");
    assert_eq!(miss["suggestions"], serde_json::json!(["papaya"]));
    assert!(miss["message"].as_str().unwrap().contains("\" papayya\""));
}
