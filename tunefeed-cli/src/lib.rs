//! Command-line interface for ranking channel catalogues.
//!
//! The CLI plays the "profile supplier" role around the ranking engine: it
//! builds a [`UserProfile`] from a preset scenario plus per-topic
//! overrides, feeds it to [`rank`] with either the seed catalogue or a
//! JSON catalogue file, and renders the result as a table.
#![forbid(unsafe_code)]

use std::str::FromStr;
use std::sync::Arc;

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tunefeed_catalog::{
    CatalogError, Scenario, UnknownScenarioError, load_channels, seed_channels,
};
use tunefeed_core::{Channel, RankedChannel, Topic, UnknownTopicError, UserProfile, rank};

/// Run the Tunefeed CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when argument parsing, configuration merging, or
/// catalogue loading fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Rank(args) => run_rank(args),
        Command::Scenarios => {
            emit(&render_scenarios());
            Ok(())
        }
        Command::Topics => {
            emit(&render_topics());
            Ok(())
        }
    }
}

fn run_rank(args: RankArgs) -> Result<(), CliError> {
    let config = args.into_config()?;
    let channels = config.channels()?;
    let profile = config.profile();
    let ranked = rank(&profile, &channels);
    emit(&render_table(&ranked, config.limit));
    Ok(())
}

#[expect(
    clippy::print_stdout,
    reason = "rendered tables and listings are the command's output"
)]
fn emit(rendered: &str) {
    print!("{rendered}");
}

#[derive(Debug, Parser)]
#[command(
    name = "tunefeed",
    about = "Rank content channels against a topic-preference profile",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank a channel catalogue against a preference profile.
    Rank(RankArgs),
    /// List the preset scenarios.
    Scenarios,
    /// List the topic registry.
    Topics,
}

/// CLI arguments for the `rank` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Rank a channel catalogue against a preference profile. The \
                 profile starts from a preset scenario and individual topics \
                 can be overridden. Options can come from CLI flags, \
                 configuration files, or environment variables.",
    about = "Rank a channel catalogue against a preference profile"
)]
#[ortho_config(prefix = "TUNEFEED")]
struct RankArgs {
    /// Path to a JSON catalogue file; the built-in seed catalogue is used
    /// when omitted.
    #[arg(long = "catalog", value_name = "path")]
    #[serde(default)]
    catalog: Option<Utf8PathBuf>,
    /// Preset scenario key used as the base profile (default: neutral).
    #[arg(long = "scenario", value_name = "key")]
    #[serde(default)]
    scenario: Option<String>,
    /// Per-topic override in the form `topic=score`; repeatable.
    #[arg(long = "set", value_name = "topic=score")]
    #[serde(default)]
    set: Vec<String>,
    /// Maximum number of rows to print.
    #[arg(long = "limit", value_name = "n")]
    #[serde(default)]
    limit: Option<usize>,
}

impl RankArgs {
    fn into_config(self) -> Result<RankConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RankConfig::try_from(merged)
    }
}

/// Validated configuration for a ranking run.
#[derive(Debug, Clone, PartialEq)]
struct RankConfig {
    catalog: Option<Utf8PathBuf>,
    scenario: Scenario,
    overrides: Vec<(Topic, f32)>,
    limit: Option<usize>,
}

impl RankConfig {
    fn channels(&self) -> Result<Vec<Channel>, CliError> {
        self.catalog.as_deref().map_or_else(
            || Ok(seed_channels()),
            |path| load_channels(path).map_err(CliError::Catalog),
        )
    }

    fn profile(&self) -> UserProfile {
        let mut profile = self.scenario.profile();
        for (topic, score) in &self.overrides {
            profile.set_score(*topic, *score);
        }
        profile
    }
}

impl TryFrom<RankArgs> for RankConfig {
    type Error = CliError;

    fn try_from(args: RankArgs) -> Result<Self, Self::Error> {
        let scenario = args
            .scenario
            .as_deref()
            .map_or(Ok(Scenario::Neutral), Scenario::from_str)?;
        let overrides = args
            .set
            .iter()
            .map(|raw| parse_override(raw))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            catalog: args.catalog,
            scenario,
            overrides,
            limit: args.limit,
        })
    }
}

fn parse_override(raw: &str) -> Result<(Topic, f32), CliError> {
    let Some((topic_raw, score_raw)) = raw.split_once('=') else {
        return Err(CliError::MalformedOverride {
            value: raw.to_owned(),
        });
    };
    let topic = Topic::from_str(topic_raw.trim())?;
    let score = score_raw
        .trim()
        .parse::<f32>()
        .map_err(|source| CliError::InvalidScore {
            value: score_raw.trim().to_owned(),
            source,
        })?;
    Ok((topic, score))
}

fn render_table(ranked: &[RankedChannel], limit: Option<usize>) -> String {
    let rows = limit.unwrap_or(ranked.len()).min(ranked.len());
    let name_width = ranked
        .iter()
        .take(rows)
        .map(|r| r.channel.name.len())
        .chain(std::iter::once("Channel".len()))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    out.push_str(&format!(
        "{:>4}  {:<name_width$}  {:>9}  Topics\n",
        "Rank", "Channel", "Relevance"
    ));
    for (index, result) in ranked.iter().take(rows).enumerate() {
        out.push_str(&format!(
            "{:>4}  {:<name_width$}  {:>9.3}  {}\n",
            index + 1,
            result.channel.name,
            result.relevance,
            render_topics_summary(&result.channel),
        ));
    }
    out
}

fn render_topics_summary(channel: &Channel) -> String {
    let mut topics: Vec<(Topic, f32)> = channel
        .topics
        .iter()
        .map(|(topic, confidence)| (*topic, *confidence))
        .collect();
    // Strongest association first; identifier order settles exact ties.
    topics.sort_by(|a, b| {
        b.1.total_cmp(&a.1)
            .then_with(|| a.0.as_str().cmp(b.0.as_str()))
    });
    topics
        .iter()
        .map(|(topic, confidence)| format!("{} ({confidence:.2})", topic.display_label()))
        .collect::<Vec<_>>()
        .join(", ")
}

fn render_scenarios() -> String {
    let mut out = String::new();
    for scenario in Scenario::ALL {
        out.push_str(&format!(
            "{:<20}  {} — {}\n",
            scenario.as_str(),
            scenario.name(),
            scenario.description(),
        ));
    }
    out
}

fn render_topics() -> String {
    let mut out = String::new();
    for topic in Topic::ALL {
        out.push_str(&format!("{:<22}  {}\n", topic.as_str(), topic.display_label()));
    }
    out
}

/// Errors emitted by the Tunefeed CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// The catalogue file could not be loaded.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    /// The requested scenario key is not a preset.
    #[error(transparent)]
    UnknownScenario(#[from] UnknownScenarioError),
    /// A `--set` override named an unregistered topic.
    #[error(transparent)]
    UnknownTopic(#[from] UnknownTopicError),
    /// A `--set` override was not of the form `topic=score`.
    #[error("malformed override '{value}' (expected topic=score)")]
    MalformedOverride {
        /// The raw argument value.
        value: String,
    },
    /// A `--set` override score was not a number.
    #[error("invalid score '{value}' in override")]
    InvalidScore {
        /// The raw score text.
        value: String,
        /// Source error from float parsing.
        #[source]
        source: std::num::ParseFloatError,
    },
}

#[cfg(test)]
mod tests;
