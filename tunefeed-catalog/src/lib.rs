//! Catalogue and profile fixtures for the Tunefeed ranking engine.
//!
//! The crate provides the data the engine is exercised with, kept apart
//! from the ranking logic so either can change alone:
//! - the in-memory **seed catalogue** of channels ([`seed_channels`]),
//! - the preset **scenario profiles** ([`Scenario`]),
//! - a **JSON loader** ([`load_channels`]) so a catalogue can come from a
//!   file instead of the built-in fixture without touching the engine.

#![forbid(unsafe_code)]

mod load;
mod scenario;
mod seed;

pub use load::{CatalogError, load_channels};
pub use scenario::{Scenario, UnknownScenarioError};
pub use seed::seed_channels;
