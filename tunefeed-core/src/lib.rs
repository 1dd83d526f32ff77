//! Core domain types for the Tunefeed ranking engine.
//!
//! Tunefeed ranks content channels against a user's topic-preference
//! profile. This crate holds the data model — the [`Topic`] registry,
//! [`Channel`], [`UserProfile`], and [`RankedChannel`] — plus the
//! [`Scorer`] seam and the [`rank`] entry point. It performs no I/O and
//! retains no state between calls.
//!
//! # Examples
//!
//! ```
//! use std::collections::HashMap;
//! use tunefeed_core::{Channel, Topic, UserProfile, rank};
//!
//! let channels = vec![
//!     Channel::new(
//!         "tech_daily",
//!         "Tech Daily News",
//!         HashMap::from([(Topic::ScienceTechnology, 0.95)]),
//!     ),
//!     Channel::new(
//!         "election_2026",
//!         "Election 2026 Countdown",
//!         HashMap::from([(Topic::UsPolitics, 0.85), (Topic::Business, 0.25)]),
//!     ),
//! ];
//! let profile = UserProfile::neutral(Topic::ALL)
//!     .with_score(Topic::ScienceTechnology, 1.0)
//!     .with_score(Topic::Business, 0.8);
//!
//! let ranked = rank(&profile, &channels);
//! assert_eq!(ranked[0].channel.id, "tech_daily");
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod channel;
pub mod profile;
pub mod scorer;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
pub mod topic;

pub use channel::Channel;
pub use profile::{NEUTRAL_SCORE, UserProfile};
pub use scorer::{RankedChannel, Scorer, TopicScorer, rank, rank_with};
pub use topic::{Topic, UnknownTopicError};
