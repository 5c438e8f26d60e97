use crate::config::settings::RatingSettings;
use crate::domain::ModeStats;

use super::types::SpiBreakdown;

/// Score components for one mode's merged stats. Only the survived time is
/// clamped (at the cap); every other term is unbounded.
pub fn breakdown(stats: &ModeStats, settings: &RatingSettings) -> SpiBreakdown {
    let base = if stats.games > 0 {
        f64::from(stats.kills) / f64::from(stats.games) * settings.kill_rate_factor
    } else {
        0.0
    };
    let capped_survived = stats.avg_survived_secs.min(settings.survival_cap_secs);

    SpiBreakdown {
        base,
        survival: capped_survived / settings.survival_cap_secs * settings.survival_weight,
        damage: stats.avg_damage / settings.damage_norm * settings.damage_weight,
        win_bonus: stats.win_pct * settings.win_bonus_factor,
    }
}

/// Pull a raw SPI toward the neutral baseline in proportion to sample size.
/// Zero games carries zero confidence, so the result is the baseline itself
/// no matter what the other fields say.
pub fn adjusted_spi(games: u32, spi: f64, settings: &RatingSettings) -> f64 {
    let confidence = if games > 0 {
        f64::from(games) / (f64::from(games) + settings.confidence_constant)
    } else {
        0.0
    };

    settings.neutral_baseline + confidence * (spi - settings.neutral_baseline)
}
