//! End-to-end fixture tests: presets and the seed catalogue driving the
//! ranking engine, plus a loader round trip over the seed data.

use camino::Utf8PathBuf;
use tempfile::TempDir;
use tunefeed_catalog::{Scenario, load_channels, seed_channels};
use tunefeed_core::{Topic, UserProfile, rank};

const TOLERANCE: f32 = 1e-6;

fn position(ids: &[String], id: &str) -> usize {
    ids.iter()
        .position(|candidate| candidate == id)
        .unwrap_or_else(|| panic!("channel {id} missing from ranking"))
}

#[test]
fn tech_focus_ranks_the_spec_example_pair() {
    let channels: Vec<_> = seed_channels()
        .into_iter()
        .filter(|c| c.id == "tech_daily" || c.id == "election_2026")
        .collect();
    let profile = UserProfile::neutral(Topic::ALL)
        .with_score(Topic::ScienceTechnology, 1.0)
        .with_score(Topic::Business, 0.8);

    let ranked = rank(&profile, &channels);

    assert_eq!(ranked[0].channel.id, "tech_daily");
    assert!((ranked[0].relevance - 0.95).abs() <= TOLERANCE);
    assert_eq!(ranked[1].channel.id, "election_2026");
    assert!((ranked[1].relevance - 0.625).abs() <= TOLERANCE);
}

#[test]
fn tech_bro_preset_puts_tech_blends_on_top() {
    let channels = seed_channels();
    let ranked = rank(&Scenario::TechBro.profile(), &channels);
    let ids: Vec<_> = ranked.into_iter().map(|r| r.channel.id).collect();

    assert_eq!(ids[0], "tech_business");
    assert!(position(&ids, "tech_daily") < position(&ids, "election_2026"));
    assert!(position(&ids, "crypto_investor") < position(&ids, "spiritual_path"));
}

#[test]
fn sports_fan_preset_buries_politics() {
    let channels = seed_channels();
    let ranked = rank(&Scenario::SportsFan.profile(), &channels);
    let ids: Vec<_> = ranked.into_iter().map(|r| r.channel.id).collect();

    assert!(position(&ids, "game_on") < position(&ids, "capitol_watch"));
    assert!(position(&ids, "sports_betting") < position(&ids, "election_2026"));
}

#[test]
fn neutral_preset_ranks_by_total_confidence() {
    let channels = seed_channels();
    let ranked = rank(&Scenario::Neutral.profile(), &channels);

    for result in &ranked {
        let total: f32 = result.channel.topics.values().sum();
        assert!((result.relevance - total * 0.5).abs() <= TOLERANCE);
    }

    let ids: Vec<_> = ranked.into_iter().map(|r| r.channel.id).collect();
    assert!(position(&ids, "morning_show") < position(&ids, "variety_hour"));
}

#[test]
fn seed_catalogue_round_trips_through_the_loader() {
    let dir = TempDir::new().expect("create temp dir");
    let path =
        Utf8PathBuf::from_path_buf(dir.path().join("channels.json")).expect("utf8 catalogue path");
    let seed = seed_channels();
    let payload = serde_json::to_string_pretty(&seed).expect("serialise seed catalogue");
    std::fs::write(path.as_std_path(), payload).expect("write catalogue fixture");

    let loaded = load_channels(&path).expect("load catalogue");

    assert_eq!(loaded, seed);
}
