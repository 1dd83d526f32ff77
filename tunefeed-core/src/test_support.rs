//! Test-only helpers shared by unit, behaviour, and property tests.

use std::collections::HashMap;

use crate::{Channel, Scorer, Topic, UserProfile};

/// Build a channel from a slice of topic confidences.
pub fn channel(id: &str, name: &str, topics: &[(Topic, f32)]) -> Channel {
    Channel::new(id, name, topics.iter().copied().collect::<HashMap<_, _>>())
}

/// Build a profile from a slice of topic scores.
pub fn profile(scores: &[(Topic, f32)]) -> UserProfile {
    let mut profile = UserProfile::new();
    for (topic, score) in scores.iter().copied() {
        profile.set_score(topic, score);
    }
    profile
}

/// Scorer returning the same value for every channel.
///
/// Useful for exercising the stable tie-break in ranking: with every score
/// equal, output order must match input order exactly.
#[derive(Debug, Copy, Clone, Default)]
pub struct ConstScorer {
    /// Score returned for every channel.
    pub value: f32,
}

impl Scorer for ConstScorer {
    fn score(&self, _channel: &Channel, _profile: &UserProfile) -> f32 {
        self.value
    }
}
