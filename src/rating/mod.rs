pub mod overall;
pub mod spi;
pub mod types;

pub use types::{ModeRatings, OverallResult, RatingResult, SpiBreakdown, Tier};

use std::collections::HashMap;

use log::debug;

use crate::config::settings::AppConfig;
use crate::domain::{Mode, ModeStats};

/// Rate every merged mode record and aggregate the games-weighted overall
/// score. Total over its inputs; modes are visited in canonical order so the
/// accumulation is deterministic.
pub fn rate_all(stats: &HashMap<Mode, ModeStats>, config: &AppConfig) -> ModeRatings {
    let mut per_mode = HashMap::new();
    let mut weighted = Vec::new();

    for mode in Mode::ALL {
        let Some(mode_stats) = stats.get(&mode) else {
            continue;
        };

        let result = rate_mode(mode_stats, config);
        debug!(
            "{}: spi={:.1} adjusted={:.1} tier={}",
            mode.as_str(),
            result.spi,
            result.adjusted_spi,
            result.tier.as_str()
        );

        weighted.push((mode_stats.games, result.adjusted_spi));
        per_mode.insert(mode, result);
    }

    let overall = overall::games_weighted_mean(&weighted).map(|adjusted| OverallResult {
        adjusted_spi: adjusted,
        tier: Tier::from_score(adjusted, &config.tiers),
    });

    ModeRatings { per_mode, overall }
}

/// Rate a single fully-merged mode record.
pub fn rate_mode(stats: &ModeStats, config: &AppConfig) -> RatingResult {
    let breakdown = spi::breakdown(stats, &config.rating);
    let spi_value = breakdown.total();
    let adjusted = spi::adjusted_spi(stats.games, spi_value, &config.rating);

    RatingResult {
        breakdown,
        spi: spi_value,
        adjusted_spi: adjusted,
        tier: Tier::from_score(adjusted, &config.tiers),
    }
}
