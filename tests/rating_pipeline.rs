//! End-to-end tests over the example paste from the README.

use std::collections::HashMap;

use survev_spi_rating::config::settings::AppConfig;
use survev_spi_rating::domain::{Mode, PartialModeStats};
use survev_spi_rating::rating::Tier;
use survev_spi_rating::services::processing::ProcessingService;

const README_PASTE: &str = "\
SOLO
280 Games
Wins
58
Win %
20.7%
Kills
1,062
Avg. Survived
2:37
Avg. Damage
432
DUO
79 Games
Wins
10
Win %
12.7%
Kills
233
Avg. Survived
2:20
Avg. Damage
441
SQUAD
232 Games
Wins
73
Win %
31.5%
Kills
681
Avg. Survived
2:37
Avg. Damage
568
";

fn service() -> ProcessingService {
    ProcessingService::new(AppConfig::new()).unwrap()
}

fn expected(
    games: u32,
    wins: u32,
    win_pct: f64,
    kills: u32,
    survived: f64,
    damage: f64,
) -> PartialModeStats {
    PartialModeStats {
        games: Some(games),
        wins: Some(wins),
        win_pct: Some(win_pct),
        kills: Some(kills),
        avg_survived_secs: Some(survived),
        avg_damage: Some(damage),
    }
}

#[test]
fn test_extraction_recovers_all_three_modes() {
    let extracted = service().extract(README_PASTE);

    assert_eq!(extracted.len(), 3);
    assert_eq!(
        extracted[&Mode::Solo],
        expected(280, 58, 20.7, 1062, 157.0, 432.0)
    );
    assert_eq!(
        extracted[&Mode::Duo],
        expected(79, 10, 12.7, 233, 140.0, 441.0)
    );
    assert_eq!(
        extracted[&Mode::Squad],
        expected(232, 73, 31.5, 681, 157.0, 568.0)
    );
}

#[test]
fn test_solo_rates_platinum_with_default_confidence() {
    let report = service().rate_paste(README_PASTE, &HashMap::new());
    let solo = &report.ratings.per_mode[&Mode::Solo];

    assert!((solo.spi - 498.86).abs() < 0.01);
    assert!((solo.adjusted_spi - 468.73).abs() < 0.01);
    assert_eq!(solo.tier, Tier::Platinum);
}

#[test]
fn test_overall_is_the_games_weighted_mean() {
    let report = service().rate_paste(README_PASTE, &HashMap::new());
    let overall = report.ratings.overall.as_ref().unwrap();

    assert!((overall.adjusted_spi - 434.69).abs() < 0.05);
    assert_eq!(overall.tier, Tier::Gold);

    let values: Vec<f64> = report
        .ratings
        .per_mode
        .values()
        .map(|r| r.adjusted_spi)
        .collect();
    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    assert!(overall.adjusted_spi >= min && overall.adjusted_spi <= max);
}

#[test]
fn test_pipeline_is_deterministic() {
    let service = service();

    let first = service.rate_paste(README_PASTE, &HashMap::new());
    let second = service.rate_paste(README_PASTE, &HashMap::new());

    assert_eq!(
        serde_json::to_value(&first).unwrap(),
        serde_json::to_value(&second).unwrap()
    );
}

#[test]
fn test_mode_missing_from_paste_is_missing_from_output() {
    let solo_only: String = README_PASTE
        .lines()
        .take(12)
        .collect::<Vec<_>>()
        .join("\n");

    let report = service().rate_paste(&solo_only, &HashMap::new());

    assert!(report.extracted.contains_key(&Mode::Solo));
    assert!(!report.extracted.contains_key(&Mode::Duo));
    assert!(!report.extracted.contains_key(&Mode::Squad));
    assert!(!report.ratings.per_mode.contains_key(&Mode::Duo));
}

#[test]
fn test_manual_override_beats_the_paste() {
    let mut overrides = HashMap::new();
    overrides.insert(
        Mode::Solo,
        PartialModeStats {
            games: Some(330),
            ..Default::default()
        },
    );

    let report = service().rate_paste(README_PASTE, &overrides);

    assert_eq!(report.merged[&Mode::Solo].games, 330);
    // The extractor's own view is untouched by the override.
    assert_eq!(report.extracted[&Mode::Solo].games, Some(280));
}
