//! Property-based tests for the ranking engine.
//!
//! These tests use `proptest` to assert invariants that must hold for all
//! valid engine inputs, complementing the worked-example tests and the BDD
//! behavioural tests.
//!
//! # Invariants tested
//!
//! - **Permutation:** ranking neither drops nor duplicates channels.
//! - **Determinism:** identical inputs produce identical rankings.
//! - **Order:** relevance never increases along the output sequence.
//! - **Stability:** equal scores preserve catalogue order.
//! - **Monotonicity:** raising a preference never hurts a matching channel.
//! - **Neutral default:** a missing profile entry behaves as an explicit 0.5.

use std::collections::HashMap;

use proptest::collection::{hash_map, vec};
use proptest::prelude::*;
use proptest::sample;
use tunefeed_core::test_support::ConstScorer;
use tunefeed_core::{
    Channel, NEUTRAL_SCORE, Scorer, Topic, TopicScorer, UserProfile, rank, rank_with,
};

fn topic_strategy() -> impl Strategy<Value = Topic> {
    sample::select(Topic::ALL.to_vec())
}

fn topics_strategy() -> impl Strategy<Value = HashMap<Topic, f32>> {
    // Confidences stay comfortably above zero so "positive confidence"
    // assertions are not defeated by float underflow.
    hash_map(topic_strategy(), 0.05_f32..=1.0_f32, 0..=4)
}

prop_compose! {
    fn channel_strategy()(id in "[a-z_]{1,12}", topics in topics_strategy()) -> Channel {
        Channel::new(id.clone(), id, topics)
    }
}

fn catalogue_strategy() -> impl Strategy<Value = Vec<Channel>> {
    vec(channel_strategy(), 0..=12)
}

prop_compose! {
    fn profile_strategy()(
        scores in hash_map(topic_strategy(), 0.0_f32..=1.0_f32, 0..=10),
    ) -> UserProfile {
        let mut profile = UserProfile::new();
        profile.set_all(scores);
        profile
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property: the output is a permutation of the input.
    ///
    /// Ranking must never drop or duplicate a channel, whatever the profile
    /// looks like.
    #[test]
    fn ranking_is_a_permutation(
        channels in catalogue_strategy(),
        profile in profile_strategy(),
    ) {
        let ranked = rank(&profile, &channels);

        prop_assert_eq!(ranked.len(), channels.len());
        let mut expected: Vec<&str> = channels.iter().map(|c| c.id.as_str()).collect();
        let mut actual: Vec<&str> = ranked.iter().map(|r| r.channel.id.as_str()).collect();
        expected.sort_unstable();
        actual.sort_unstable();
        prop_assert_eq!(actual, expected);
    }

    /// Property: ranking is deterministic.
    ///
    /// `rank` is a pure function of its inputs; two calls over the same
    /// profile and catalogue must agree on order and on every score.
    #[test]
    fn ranking_is_deterministic(
        channels in catalogue_strategy(),
        profile in profile_strategy(),
    ) {
        let first = rank(&profile, &channels);
        let second = rank(&profile, &channels);
        prop_assert_eq!(first, second);
    }

    /// Property: relevance never increases along the output.
    #[test]
    fn ranking_is_sorted_descending(
        channels in catalogue_strategy(),
        profile in profile_strategy(),
    ) {
        let ranked = rank(&profile, &channels);
        for pair in ranked.windows(2) {
            prop_assert!(
                pair[0].relevance >= pair[1].relevance,
                "relevance {} precedes {}",
                pair[0].relevance,
                pair[1].relevance
            );
        }
    }

    /// Property: equal scores preserve catalogue order.
    ///
    /// With a constant scorer every channel ties, so the stable sort must
    /// reproduce the input sequence exactly.
    #[test]
    fn constant_scorer_is_an_identity_on_order(
        channels in catalogue_strategy(),
        profile in profile_strategy(),
        value in 0.0_f32..=1.0_f32,
    ) {
        let ranked = rank_with(&ConstScorer { value }, &profile, &channels);
        let expected: Vec<&str> = channels.iter().map(|c| c.id.as_str()).collect();
        let actual: Vec<&str> = ranked.iter().map(|r| r.channel.id.as_str()).collect();
        prop_assert_eq!(actual, expected);
    }

    /// Property: raising one preference never lowers any relevance, and
    /// strictly raises it for channels with positive confidence in the
    /// raised topic.
    #[test]
    fn raising_a_preference_never_hurts(
        channels in catalogue_strategy(),
        profile in profile_strategy(),
        topic in topic_strategy(),
        delta in 0.05_f32..=1.0_f32,
    ) {
        let mut raised = profile.clone();
        raised.set_score(topic, profile.score_for(&topic) + delta);

        for channel in &channels {
            let old = TopicScorer.score(channel, &profile);
            let new = TopicScorer.score(channel, &raised);
            match channel.topics.get(&topic) {
                Some(&confidence) if confidence > 0.0 => prop_assert!(
                    new > old,
                    "channel {} should score strictly higher ({new} vs {old})",
                    channel.id
                ),
                _ => prop_assert_eq!(
                    new,
                    old,
                    "channel {} does not cover the raised topic",
                    &channel.id
                ),
            }
        }
    }

    /// Property: a missing profile entry scores exactly like an explicit
    /// neutral entry.
    #[test]
    fn missing_entry_equals_explicit_neutral(
        channels in catalogue_strategy(),
        profile in profile_strategy(),
        topic in topic_strategy(),
    ) {
        let mut explicit = profile.clone();
        explicit.set_score(topic, NEUTRAL_SCORE);

        let mut sparse = UserProfile::new();
        let scores: HashMap<Topic, f32> = Topic::ALL
            .iter()
            .filter(|candidate| **candidate != topic)
            .map(|candidate| (*candidate, explicit.score_for(candidate)))
            .collect();
        sparse.set_all(scores);

        let with_entry = rank(&explicit, &channels);
        let without_entry = rank(&sparse, &channels);
        prop_assert_eq!(with_entry, without_entry);
    }
}
