//! Facade crate for the Tunefeed channel ranking engine.
//!
//! This crate re-exports the core domain types and exposes the catalogue
//! fixtures and loader behind a feature flag.

#![forbid(unsafe_code)]

pub use tunefeed_core::{
    Channel, NEUTRAL_SCORE, RankedChannel, Scorer, Topic, TopicScorer, UnknownTopicError,
    UserProfile, rank, rank_with,
};

#[cfg(feature = "catalog")]
pub use tunefeed_catalog::{
    CatalogError, Scenario, UnknownScenarioError, load_channels, seed_channels,
};
