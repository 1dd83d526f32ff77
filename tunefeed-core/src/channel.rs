//! Channels: content sources annotated with per-topic confidence weights.

use std::collections::HashMap;

use crate::Topic;

/// A content channel worth ranking.
///
/// The topic map is sparse: a topic the channel does not cover is absent,
/// not present with weight zero. Confidence weights sit in `[0.0, 1.0]` by
/// convention; the core does not enforce the range.
///
/// # Examples
/// ```
/// use std::collections::HashMap;
/// use tunefeed_core::{Channel, Topic};
///
/// let channel = Channel::new(
///     "tech_daily",
///     "Tech Daily News",
///     HashMap::from([(Topic::ScienceTechnology, 0.95)]),
/// );
///
/// assert_eq!(channel.id, "tech_daily");
/// assert_eq!(channel.topics.get(&Topic::ScienceTechnology), Some(&0.95));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Channel {
    /// Unique identifier within a catalogue.
    pub id: String,
    /// Human-readable display name.
    pub name: String,
    /// Sparse mapping from topic to confidence weight.
    pub topics: HashMap<Topic, f32>,
}

impl Channel {
    /// Construct a `Channel` with the provided topic confidences.
    ///
    /// # Examples
    /// ```
    /// use std::collections::HashMap;
    /// use tunefeed_core::Channel;
    ///
    /// let channel = Channel::new("variety_hour", "The Variety Hour", HashMap::new());
    /// assert_eq!(channel.name, "The Variety Hour");
    /// ```
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        topics: HashMap<Topic, f32>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            topics,
        }
    }

    /// Construct a `Channel` that declares no topics.
    ///
    /// # Examples
    /// ```
    /// use tunefeed_core::Channel;
    ///
    /// let channel = Channel::with_empty_topics("static", "Static");
    /// assert!(channel.topics.is_empty());
    /// ```
    #[must_use]
    pub fn with_empty_topics(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(id, name, HashMap::new())
    }
}
