//! Load channel catalogues from JSON files.
//!
//! A catalogue file holds an array of `{id, name, topics}` records with
//! topics keyed by registry identifier:
//!
//! ```json
//! [{"id": "tech_daily", "name": "Tech Daily News",
//!   "topics": {"science_technology": 0.95}}]
//! ```

use std::collections::{HashMap, HashSet};
use std::str::FromStr;

use camino::{Utf8Path, Utf8PathBuf};
use serde::Deserialize;
use thiserror::Error;
use tunefeed_core::{Channel, Topic, UnknownTopicError};

/// On-disk shape of a catalogue entry.
#[derive(Debug, Deserialize)]
struct ChannelRecord {
    id: String,
    name: String,
    #[serde(default)]
    topics: HashMap<String, f32>,
}

/// Errors raised while loading a channel catalogue from disk.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Reading the catalogue file failed.
    #[error("failed to read catalogue file at {path}")]
    Read {
        /// Requested catalogue path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// The catalogue payload was not valid JSON.
    #[error("failed to decode catalogue file at {path}")]
    Decode {
        /// Requested catalogue path.
        path: Utf8PathBuf,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// A record referenced a topic id absent from the registry.
    #[error("channel '{channel}' references an unregistered topic")]
    UnknownTopic {
        /// Identifier of the offending channel.
        channel: String,
        /// Lookup failure carrying the topic id.
        #[source]
        source: UnknownTopicError,
    },
    /// Two records shared the same channel identifier.
    #[error("duplicate channel id '{id}' in catalogue")]
    DuplicateId {
        /// The repeated identifier.
        id: String,
    },
}

/// Load an ordered channel catalogue from a JSON file.
///
/// File order is preserved: it is the catalogue order that feeds the
/// stable tie-break in ranking.
///
/// # Errors
/// Returns [`CatalogError`] when the file cannot be read or decoded, when
/// a record references an unregistered topic, or when two records share an
/// identifier.
pub fn load_channels(path: &Utf8Path) -> Result<Vec<Channel>, CatalogError> {
    let bytes = std::fs::read(path.as_std_path()).map_err(|source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let records: Vec<ChannelRecord> =
        serde_json::from_slice(&bytes).map_err(|source| CatalogError::Decode {
            path: path.to_path_buf(),
            source,
        })?;

    let mut seen = HashSet::new();
    let mut channels = Vec::with_capacity(records.len());
    for record in records {
        if !seen.insert(record.id.clone()) {
            return Err(CatalogError::DuplicateId { id: record.id });
        }
        let mut topics = HashMap::with_capacity(record.topics.len());
        for (key, confidence) in record.topics {
            let topic = Topic::from_str(&key).map_err(|source| CatalogError::UnknownTopic {
                channel: record.id.clone(),
                source,
            })?;
            topics.insert(topic, confidence);
        }
        channels.push(Channel::new(record.id, record.name, topics));
    }

    log::info!("loaded {} channels from {path}", channels.len());
    Ok(channels)
}
