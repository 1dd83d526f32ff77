//! Topics describing broad categories of channel content.
//!
//! The enum is the topic registry: a fixed identifier namespace shared by
//! channels and user profiles, with display metadata for rendering surfaces.
//!
//! # Examples
//! ```
//! use tunefeed_core::Topic;
//!
//! assert_eq!(Topic::Sports.as_str(), "sports");
//! assert_eq!(Topic::Sports.display_label(), "⚽️ Sports");
//! ```

use thiserror::Error;

/// A fixed content category with a unique identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Topic {
    /// Science and technology coverage.
    ScienceTechnology,
    /// Business and markets.
    Business,
    /// United States politics.
    UsPolitics,
    /// Faith and spirituality.
    FaithSpirituality,
    /// Dating and relationships.
    DatingRelationships,
    /// Sports coverage.
    Sports,
    /// Live music and concerts.
    LiveMusic,
    /// Film, television, and pop culture.
    Entertainment,
    /// Personal development and growth.
    PersonalDevelopment,
    /// Health and wellness.
    HealthWellness,
}

/// Error returned when a topic identifier is absent from the registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown topic '{id}'")]
pub struct UnknownTopicError {
    /// The identifier that failed to resolve.
    pub id: String,
}

impl Topic {
    /// Every registered topic, in registry order.
    ///
    /// The order matches the original catalogue definition and is the order
    /// rendering surfaces list topics in.
    pub const ALL: [Self; 10] = [
        Self::ScienceTechnology,
        Self::Business,
        Self::UsPolitics,
        Self::FaithSpirituality,
        Self::DatingRelationships,
        Self::Sports,
        Self::LiveMusic,
        Self::Entertainment,
        Self::PersonalDevelopment,
        Self::HealthWellness,
    ];

    /// Return the topic's identifier as a lowercase `&str`.
    ///
    /// # Examples
    /// ```
    /// use tunefeed_core::Topic;
    ///
    /// assert_eq!(Topic::LiveMusic.as_str(), "live_music");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ScienceTechnology => "science_technology",
            Self::Business => "business",
            Self::UsPolitics => "us_politics",
            Self::FaithSpirituality => "faith_spirituality",
            Self::DatingRelationships => "dating_relationships",
            Self::Sports => "sports",
            Self::LiveMusic => "live_music",
            Self::Entertainment => "entertainment",
            Self::PersonalDevelopment => "personal_development",
            Self::HealthWellness => "health_wellness",
        }
    }

    /// Return the topic's human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ScienceTechnology => "Science & Technology",
            Self::Business => "Business",
            Self::UsPolitics => "U.S. Politics",
            Self::FaithSpirituality => "Faith & Spirituality",
            Self::DatingRelationships => "Dating & Relationships",
            Self::Sports => "Sports",
            Self::LiveMusic => "Live Music",
            Self::Entertainment => "Entertainment",
            Self::PersonalDevelopment => "Personal Development",
            Self::HealthWellness => "Health & Wellness",
        }
    }

    /// Return the topic's display glyph.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::ScienceTechnology => "🤖",
            Self::Business => "🧳",
            Self::UsPolitics => "🇺🇸",
            Self::FaithSpirituality => "🔮",
            Self::DatingRelationships => "💕",
            Self::Sports => "⚽️",
            Self::LiveMusic => "🎶",
            Self::Entertainment => "📺",
            Self::PersonalDevelopment => "📚",
            Self::HealthWellness => "💪",
        }
    }

    /// Return the glyph-prefixed label used by rendering surfaces.
    ///
    /// # Examples
    /// ```
    /// use tunefeed_core::Topic;
    ///
    /// assert_eq!(Topic::Business.display_label(), "🧳 Business");
    /// ```
    #[must_use]
    pub fn display_label(self) -> String {
        format!("{} {}", self.glyph(), self.label())
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Topic {
    type Err = UnknownTopicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "science_technology" => Ok(Self::ScienceTechnology),
            "business" => Ok(Self::Business),
            "us_politics" => Ok(Self::UsPolitics),
            "faith_spirituality" => Ok(Self::FaithSpirituality),
            "dating_relationships" => Ok(Self::DatingRelationships),
            "sports" => Ok(Self::Sports),
            "live_music" => Ok(Self::LiveMusic),
            "entertainment" => Ok(Self::Entertainment),
            "personal_development" => Ok(Self::PersonalDevelopment),
            "health_wellness" => Ok(Self::HealthWellness),
            _ => Err(UnknownTopicError { id: s.to_owned() }),
        }
    }
}
