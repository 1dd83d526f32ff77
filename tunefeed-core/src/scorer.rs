//! Score and rank channels for a user profile.
//!
//! The [`Scorer`] trait assigns a relevance score to a [`Channel`] given a
//! caller's [`UserProfile`]; [`rank`] orders a whole catalogue by
//! descending relevance.

use crate::{Channel, UserProfile};

/// Calculate a relevance score for a channel.
///
/// Higher scores indicate a better match between the channel and the
/// caller's preferences. Implementations must be thread-safe
/// (`Send` + `Sync`) so scorers can serve concurrent rankings.
///
/// The method is infallible: scoring never fails because a profile lacks a
/// topic entry — absent entries resolve to the neutral default. Scores are
/// deliberately not clamped or validated; out-of-range confidences or
/// preference scores propagate arithmetically, so the ordering of
/// permissive fixtures stays as documented.
///
/// # Examples
///
/// ```rust
/// use tunefeed_core::{Channel, Scorer, UserProfile};
///
/// struct UnitScorer;
///
/// impl Scorer for UnitScorer {
///     fn score(&self, _channel: &Channel, _profile: &UserProfile) -> f32 {
///         1.0
///     }
/// }
///
/// let channel = Channel::with_empty_topics("static", "Static");
/// let profile = UserProfile::new();
/// assert_eq!(UnitScorer.score(&channel, &profile), 1.0);
/// ```
pub trait Scorer: Send + Sync {
    /// Return a score for `channel` according to `profile`.
    fn score(&self, channel: &Channel, profile: &UserProfile) -> f32;
}

/// Weighted dot-product scorer over a channel's topic confidences.
///
/// Relevance is the sum over the channel's sparse topic map of
/// `profile.score_for(topic) × confidence`. A channel with no topics
/// scores `0.0`.
///
/// # Examples
/// ```
/// use std::collections::HashMap;
/// use tunefeed_core::{Channel, Scorer, Topic, TopicScorer, UserProfile};
///
/// let channel = Channel::new(
///     "tech_daily",
///     "Tech Daily News",
///     HashMap::from([(Topic::ScienceTechnology, 0.95)]),
/// );
/// let profile = UserProfile::new().with_score(Topic::ScienceTechnology, 1.0);
/// assert_eq!(TopicScorer.score(&channel, &profile), 0.95);
/// ```
#[derive(Debug, Copy, Clone, Default)]
pub struct TopicScorer;

impl Scorer for TopicScorer {
    #[expect(
        clippy::float_arithmetic,
        reason = "relevance is a weighted sum of topic confidences"
    )]
    fn score(&self, channel: &Channel, profile: &UserProfile) -> f32 {
        channel
            .topics
            .iter()
            .map(|(topic, confidence)| profile.score_for(topic) * confidence)
            .sum()
    }
}

/// A channel paired with the relevance computed for a ranking call.
///
/// Results are produced fresh on every call: the source channel is copied
/// with all its fields intact and is never mutated.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankedChannel {
    /// The ranked channel, carrying all its original fields.
    pub channel: Channel,
    /// Weighted relevance of the channel for the ranking profile.
    pub relevance: f32,
}

/// Rank `channels` by descending relevance for `profile`.
///
/// Uses [`TopicScorer`]. The sort is stable: channels with exactly equal
/// relevance keep their order from the input sequence, so repeated runs
/// over the same inputs render identically. An empty input yields an empty
/// ranking.
///
/// # Examples
/// ```
/// use std::collections::HashMap;
/// use tunefeed_core::{Channel, Topic, UserProfile, rank};
///
/// let channels = vec![
///     Channel::new("startup_hustle", "Startup Hustle", HashMap::from([(Topic::Business, 0.9)])),
///     Channel::new("game_on", "Game On Sports", HashMap::from([(Topic::Sports, 0.88)])),
/// ];
/// let profile = UserProfile::new().with_score(Topic::Sports, 1.0);
///
/// let ranked = rank(&profile, &channels);
/// assert_eq!(ranked[0].channel.id, "game_on");
/// ```
#[must_use]
pub fn rank(profile: &UserProfile, channels: &[Channel]) -> Vec<RankedChannel> {
    rank_with(&TopicScorer, profile, channels)
}

/// Rank `channels` with a caller-supplied scorer.
///
/// The contract matches [`rank`]: pure function of its inputs, stable
/// descending order, no state retained between calls.
#[must_use]
pub fn rank_with<S>(scorer: &S, profile: &UserProfile, channels: &[Channel]) -> Vec<RankedChannel>
where
    S: Scorer + ?Sized,
{
    let mut ranked: Vec<RankedChannel> = channels
        .iter()
        .map(|channel| RankedChannel {
            channel: channel.clone(),
            relevance: scorer.score(channel, profile),
        })
        .collect();
    // `sort_by` is stable and `total_cmp` gives NaN a fixed position, so
    // ties and degenerate inputs order reproducibly.
    ranked.sort_by(|a, b| b.relevance.total_cmp(&a.relevance));
    ranked
}
