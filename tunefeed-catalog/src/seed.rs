//! The built-in seed catalogue.
//!
//! Forty-one channels spanning narrowly focused single-topic feeds,
//! two- and three-topic blends, broad-appeal shows, niche audiences, and
//! deliberate edge cases, so rankings exercise the whole scoring range.

use std::collections::HashMap;

use tunefeed_core::{Channel, Topic};

fn channel(id: &str, name: &str, topics: &[(Topic, f32)]) -> Channel {
    Channel::new(id, name, topics.iter().copied().collect::<HashMap<_, _>>())
}

/// Build the in-memory seed catalogue used by the demo surfaces.
///
/// The returned order is the catalogue order, which feeds the stable
/// tie-break in ranking.
#[must_use]
pub fn seed_channels() -> Vec<Channel> {
    vec![
        // Single-topic channels
        channel(
            "tech_daily",
            "Tech Daily News",
            &[(Topic::ScienceTechnology, 0.95)],
        ),
        channel("startup_hustle", "Startup Hustle", &[(Topic::Business, 0.9)]),
        channel("capitol_watch", "Capitol Watch", &[(Topic::UsPolitics, 0.92)]),
        channel("game_on", "Game On Sports", &[(Topic::Sports, 0.88)]),
        channel(
            "wellness_journey",
            "The Wellness Journey",
            &[(Topic::HealthWellness, 0.85)],
        ),
        channel(
            "ai_frontier",
            "AI Frontier",
            &[(Topic::ScienceTechnology, 0.98)],
        ),
        channel(
            "concert_live",
            "Concert Nights Live",
            &[(Topic::LiveMusic, 0.93)],
        ),
        channel(
            "spiritual_path",
            "The Spiritual Path",
            &[(Topic::FaithSpirituality, 0.89)],
        ),
        channel(
            "dating_decoded",
            "Dating Decoded",
            &[(Topic::DatingRelationships, 0.87)],
        ),
        channel(
            "hollywood_insider",
            "Hollywood Insider",
            &[(Topic::Entertainment, 0.91)],
        ),
        // Two-topic blends
        channel(
            "tech_business",
            "Tech & Business Today",
            &[(Topic::ScienceTechnology, 0.7), (Topic::Business, 0.6)],
        ),
        channel(
            "sports_entertainment",
            "Sports & Pop Culture",
            &[(Topic::Sports, 0.6), (Topic::Entertainment, 0.5)],
        ),
        channel(
            "love_life_coach",
            "Love & Life Coaching",
            &[
                (Topic::DatingRelationships, 0.7),
                (Topic::PersonalDevelopment, 0.5),
            ],
        ),
        channel(
            "faith_wellness",
            "Spiritual Wellness",
            &[
                (Topic::FaithSpirituality, 0.6),
                (Topic::HealthWellness, 0.5),
            ],
        ),
        channel(
            "political_business",
            "Policy & Markets",
            &[(Topic::UsPolitics, 0.6), (Topic::Business, 0.5)],
        ),
        channel(
            "indie_music_scene",
            "Indie Music Scene",
            &[(Topic::LiveMusic, 0.8), (Topic::Entertainment, 0.3)],
        ),
        channel(
            "fitness_tech",
            "FitTech Weekly",
            &[
                (Topic::HealthWellness, 0.65),
                (Topic::ScienceTechnology, 0.45),
            ],
        ),
        channel(
            "growth_mindset",
            "Growth Mindset Daily",
            &[(Topic::PersonalDevelopment, 0.75), (Topic::Business, 0.4)],
        ),
        channel(
            "political_comedy",
            "Political Comedy Hour",
            &[(Topic::UsPolitics, 0.55), (Topic::Entertainment, 0.6)],
        ),
        channel(
            "faith_relationships",
            "Faith & Family",
            &[
                (Topic::FaithSpirituality, 0.65),
                (Topic::DatingRelationships, 0.45),
            ],
        ),
        // Three-topic lifestyle blends
        channel(
            "mindful_entrepreneur",
            "The Mindful Entrepreneur",
            &[
                (Topic::Business, 0.5),
                (Topic::PersonalDevelopment, 0.6),
                (Topic::HealthWellness, 0.4),
            ],
        ),
        channel(
            "athlete_mindset",
            "Athlete's Mindset",
            &[
                (Topic::Sports, 0.55),
                (Topic::PersonalDevelopment, 0.5),
                (Topic::HealthWellness, 0.45),
            ],
        ),
        channel(
            "tech_politics_society",
            "Tech, Policy & Society",
            &[
                (Topic::ScienceTechnology, 0.5),
                (Topic::UsPolitics, 0.5),
                (Topic::Business, 0.3),
            ],
        ),
        channel(
            "creative_entrepreneur",
            "The Creative Entrepreneur",
            &[
                (Topic::Business, 0.45),
                (Topic::Entertainment, 0.4),
                (Topic::PersonalDevelopment, 0.4),
            ],
        ),
        channel(
            "wellness_spirituality_life",
            "Holistic Living",
            &[
                (Topic::HealthWellness, 0.5),
                (Topic::FaithSpirituality, 0.45),
                (Topic::PersonalDevelopment, 0.4),
            ],
        ),
        // Broad appeal: many topics, lower confidence
        channel(
            "morning_show",
            "The Morning Show",
            &[
                (Topic::Entertainment, 0.4),
                (Topic::UsPolitics, 0.3),
                (Topic::Business, 0.25),
                (Topic::Sports, 0.3),
                (Topic::HealthWellness, 0.25),
            ],
        ),
        channel(
            "modern_life",
            "Modern Life Podcast",
            &[
                (Topic::ScienceTechnology, 0.35),
                (Topic::DatingRelationships, 0.35),
                (Topic::PersonalDevelopment, 0.35),
                (Topic::HealthWellness, 0.3),
            ],
        ),
        channel(
            "culture_watch",
            "Culture Watch",
            &[
                (Topic::Entertainment, 0.45),
                (Topic::LiveMusic, 0.35),
                (Topic::UsPolitics, 0.25),
                (Topic::DatingRelationships, 0.25),
            ],
        ),
        // Niche audiences
        channel(
            "crypto_investor",
            "Crypto Investor Daily",
            &[(Topic::ScienceTechnology, 0.6), (Topic::Business, 0.7)],
        ),
        channel(
            "female_founders",
            "Female Founders",
            &[
                (Topic::Business, 0.65),
                (Topic::PersonalDevelopment, 0.45),
                (Topic::DatingRelationships, 0.25),
            ],
        ),
        channel(
            "sports_betting",
            "Sports Betting Edge",
            &[(Topic::Sports, 0.75), (Topic::Business, 0.35)],
        ),
        channel(
            "meditation_science",
            "The Science of Meditation",
            &[
                (Topic::FaithSpirituality, 0.55),
                (Topic::HealthWellness, 0.55),
                (Topic::ScienceTechnology, 0.3),
            ],
        ),
        channel(
            "election_2026",
            "Election 2026 Countdown",
            &[(Topic::UsPolitics, 0.85), (Topic::Business, 0.25)],
        ),
        channel(
            "festival_season",
            "Festival Season",
            &[
                (Topic::LiveMusic, 0.7),
                (Topic::Entertainment, 0.45),
                (Topic::DatingRelationships, 0.2),
            ],
        ),
        channel(
            "therapy_talks",
            "Therapy Talks",
            &[
                (Topic::DatingRelationships, 0.5),
                (Topic::PersonalDevelopment, 0.55),
                (Topic::HealthWellness, 0.35),
            ],
        ),
        channel(
            "startup_funding",
            "Startup Funding Insider",
            &[(Topic::Business, 0.8), (Topic::ScienceTechnology, 0.4)],
        ),
        channel(
            "documentary_review",
            "Documentary Deep Dive",
            &[
                (Topic::Entertainment, 0.6),
                (Topic::ScienceTechnology, 0.3),
                (Topic::UsPolitics, 0.25),
            ],
        ),
        channel(
            "quarterback_mindset",
            "Quarterback's Playbook",
            &[
                (Topic::Sports, 0.7),
                (Topic::PersonalDevelopment, 0.4),
                (Topic::Business, 0.2),
            ],
        ),
        // Edge cases: low confidence or unusual combinations
        channel(
            "variety_hour",
            "The Variety Hour",
            &[
                (Topic::Entertainment, 0.25),
                (Topic::LiveMusic, 0.2),
                (Topic::Sports, 0.2),
                (Topic::Business, 0.15),
                (Topic::PersonalDevelopment, 0.2),
            ],
        ),
        channel(
            "tech_spirituality",
            "Digital Zen",
            &[
                (Topic::ScienceTechnology, 0.45),
                (Topic::FaithSpirituality, 0.5),
                (Topic::PersonalDevelopment, 0.3),
            ],
        ),
        channel(
            "political_faith",
            "Faith & Politics Forum",
            &[
                (Topic::UsPolitics, 0.6),
                (Topic::FaithSpirituality, 0.55),
            ],
        ),
    ]
}
