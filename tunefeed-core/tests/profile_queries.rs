//! Behaviour tests verifying profile score lookups from JSON-shaped input.

use std::collections::HashMap;
use std::str::FromStr;

use rstest::rstest;
use tunefeed_core::{Topic, UserProfile};

#[rstest]
#[case(r#"{"sports":0.8}"#, "sports", 0.8)]
#[case(r#"{"SpOrTs":0.8}"#, "SPORTS", 0.8)]
#[case(r#"{"sports":0.0}"#, "sports", 0.0)]
#[case(r#"{"sports":1.0}"#, "sports", 1.0)]
// Topics the payload never mentions resolve to the neutral default.
#[case(r#"{"sports":0.8}"#, "business", 0.5)]
#[case(r#"{}"#, "sports", 0.5)]
#[case(r#"{"sports":0.8,"live_music":0.3}"#, "live_music", 0.3)]
fn query_scores(#[case] payload: &str, #[case] topic: &str, #[case] expected: f32) {
    let map: HashMap<String, f32> = serde_json::from_str(payload).expect("valid payload");
    let mut profile = UserProfile::new();
    for (key, score) in map {
        profile.set_score(Topic::from_str(&key).expect("valid topic key"), score);
    }
    let topic = Topic::from_str(topic).expect("valid topic under test");
    assert_eq!(profile.score_for(&topic), expected);
}

#[test]
fn invalid_topic_name() {
    assert!(Topic::from_str("crypto").is_err());
}
