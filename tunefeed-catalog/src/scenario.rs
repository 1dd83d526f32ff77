//! Preset user scenarios: named profiles for demos and tests.
//!
//! Each scenario carries display metadata and builds a complete
//! [`UserProfile`] covering every registered topic.

use thiserror::Error;
use tunefeed_core::{Topic, UserProfile};

/// A named preset profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scenario {
    /// No preferences yet: every topic at 0.5.
    Neutral,
    /// Tech and business focused.
    TechBro,
    /// Health, personal growth, and spirituality.
    WellnessEnthusiast,
    /// Loves sports, hates politics.
    SportsFan,
    /// Interested in everything moderately.
    Generalist,
    /// Only cares about business.
    FocusedSpecialist,
}

/// Error returned when a scenario key is not a preset.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown scenario '{key}'")]
pub struct UnknownScenarioError {
    /// The key that failed to resolve.
    pub key: String,
}

impl Scenario {
    /// Every preset scenario, in presentation order.
    pub const ALL: [Self; 6] = [
        Self::Neutral,
        Self::TechBro,
        Self::WellnessEnthusiast,
        Self::SportsFan,
        Self::Generalist,
        Self::FocusedSpecialist,
    ];

    /// Return the scenario's selection key as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Neutral => "neutral",
            Self::TechBro => "tech_bro",
            Self::WellnessEnthusiast => "wellness_enthusiast",
            Self::SportsFan => "sports_fan",
            Self::Generalist => "generalist",
            Self::FocusedSpecialist => "focused_specialist",
        }
    }

    /// Return the scenario's human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Neutral => "Neutral User",
            Self::TechBro => "Tech Bro",
            Self::WellnessEnthusiast => "Wellness Enthusiast",
            Self::SportsFan => "Sports Fan (No Politics)",
            Self::Generalist => "Generalist",
            Self::FocusedSpecialist => "Focused Specialist",
        }
    }

    /// Return a one-line description of the scenario.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Neutral => "No preferences yet (all 0.5)",
            Self::TechBro => "Tech & Business focused",
            Self::WellnessEnthusiast => "Health, personal growth & spirituality",
            Self::SportsFan => "Loves sports, hates politics",
            Self::Generalist => "Interested in everything moderately",
            Self::FocusedSpecialist => "Only cares about business",
        }
    }

    /// Build the preset's profile.
    ///
    /// Every preset scores all ten registered topics, so rankings never
    /// fall back to the neutral default while a preset is active.
    #[must_use]
    pub fn profile(self) -> UserProfile {
        match self {
            Self::Neutral => UserProfile::neutral(Topic::ALL),
            Self::TechBro => UserProfile::new()
                .with_score(Topic::ScienceTechnology, 1.0)
                .with_score(Topic::Business, 0.8)
                .with_score(Topic::PersonalDevelopment, 0.4)
                .with_score(Topic::HealthWellness, 0.3)
                .with_score(Topic::Sports, 0.3)
                .with_score(Topic::Entertainment, 0.2)
                .with_score(Topic::UsPolitics, 0.2)
                .with_score(Topic::FaithSpirituality, 0.1)
                .with_score(Topic::DatingRelationships, 0.2)
                .with_score(Topic::LiveMusic, 0.2),
            Self::WellnessEnthusiast => UserProfile::new()
                .with_score(Topic::HealthWellness, 1.0)
                .with_score(Topic::PersonalDevelopment, 0.8)
                .with_score(Topic::FaithSpirituality, 0.6)
                .with_score(Topic::DatingRelationships, 0.5)
                .with_score(Topic::ScienceTechnology, 0.3)
                .with_score(Topic::Entertainment, 0.3)
                .with_score(Topic::LiveMusic, 0.4)
                .with_score(Topic::Business, 0.2)
                .with_score(Topic::Sports, 0.2)
                .with_score(Topic::UsPolitics, 0.1),
            Self::SportsFan => UserProfile::new()
                .with_score(Topic::Sports, 1.0)
                .with_score(Topic::Entertainment, 0.6)
                .with_score(Topic::LiveMusic, 0.4)
                .with_score(Topic::HealthWellness, 0.5)
                .with_score(Topic::Business, 0.3)
                .with_score(Topic::ScienceTechnology, 0.3)
                .with_score(Topic::PersonalDevelopment, 0.3)
                .with_score(Topic::DatingRelationships, 0.3)
                .with_score(Topic::FaithSpirituality, 0.2)
                .with_score(Topic::UsPolitics, 0.0),
            Self::Generalist => Topic::ALL
                .into_iter()
                .fold(UserProfile::new(), |profile, topic| {
                    profile.with_score(topic, 0.7)
                }),
            Self::FocusedSpecialist => Topic::ALL
                .into_iter()
                .fold(UserProfile::new(), |profile, topic| {
                    profile.with_score(topic, 0.2)
                })
                .with_score(Topic::Business, 1.0),
        }
    }
}

impl std::fmt::Display for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Scenario {
    type Err = UnknownScenarioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "neutral" => Ok(Self::Neutral),
            "tech_bro" => Ok(Self::TechBro),
            "wellness_enthusiast" => Ok(Self::WellnessEnthusiast),
            "sports_fan" => Ok(Self::SportsFan),
            "generalist" => Ok(Self::Generalist),
            "focused_specialist" => Ok(Self::FocusedSpecialist),
            _ => Err(UnknownScenarioError { key: s.to_owned() }),
        }
    }
}
