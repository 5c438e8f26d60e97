use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::config::settings::TierSettings;
use crate::domain::Mode;

/// Skill tiers, ordered from floor to ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Tier {
    Bronze,
    Silver,
    Gold,
    Platinum,
    Diamond,
    Master,
    Grandmaster,
}

impl Tier {
    /// Classify an adjusted SPI value. Thresholds are checked highest first;
    /// a value sitting exactly on a boundary belongs to the higher tier.
    pub fn from_score(score: f64, tiers: &TierSettings) -> Self {
        if score >= tiers.grandmaster {
            Tier::Grandmaster
        } else if score >= tiers.master {
            Tier::Master
        } else if score >= tiers.diamond {
            Tier::Diamond
        } else if score >= tiers.platinum {
            Tier::Platinum
        } else if score >= tiers.gold {
            Tier::Gold
        } else if score >= tiers.silver {
            Tier::Silver
        } else {
            Tier::Bronze
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Bronze => "Bronze",
            Tier::Silver => "Silver",
            Tier::Gold => "Gold",
            Tier::Platinum => "Platinum",
            Tier::Diamond => "Diamond",
            Tier::Master => "Master",
            Tier::Grandmaster => "Grandmaster",
        }
    }
}

/// The four additive terms of a mode's SPI.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SpiBreakdown {
    pub base: f64,
    pub survival: f64,
    pub damage: f64,
    pub win_bonus: f64,
}

impl SpiBreakdown {
    pub fn total(&self) -> f64 {
        self.base + self.survival + self.damage + self.win_bonus
    }
}

/// Rating computed for a single mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatingResult {
    pub breakdown: SpiBreakdown,
    pub spi: f64,
    pub adjusted_spi: f64,
    pub tier: Tier,
}

/// Games-weighted rating across all rated modes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverallResult {
    pub adjusted_spi: f64,
    pub tier: Tier,
}

/// Full output of a rating pass. `overall` is absent when no mode has any
/// games on record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModeRatings {
    pub per_mode: HashMap<Mode, RatingResult>,
    pub overall: Option<OverallResult>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries_belong_to_the_higher_tier() {
        let tiers = TierSettings::default();

        assert_eq!(Tier::from_score(750.0, &tiers), Tier::Grandmaster);
        assert_eq!(Tier::from_score(749.999, &tiers), Tier::Master);
        assert_eq!(Tier::from_score(650.0, &tiers), Tier::Master);
        assert_eq!(Tier::from_score(550.0, &tiers), Tier::Diamond);
        assert_eq!(Tier::from_score(450.0, &tiers), Tier::Platinum);
        assert_eq!(Tier::from_score(350.0, &tiers), Tier::Gold);
        assert_eq!(Tier::from_score(250.0, &tiers), Tier::Silver);
        assert_eq!(Tier::from_score(249.999, &tiers), Tier::Bronze);
    }

    #[test]
    fn test_extremes_are_classified() {
        let tiers = TierSettings::default();

        assert_eq!(Tier::from_score(10_000.0, &tiers), Tier::Grandmaster);
        assert_eq!(Tier::from_score(-10_000.0, &tiers), Tier::Bronze);
        assert_eq!(Tier::from_score(0.0, &tiers), Tier::Bronze);
    }

    #[test]
    fn test_breakdown_total_sums_all_terms() {
        let breakdown = SpiBreakdown {
            base: 379.3,
            survival: 43.6,
            damage: 34.6,
            win_bonus: 41.4,
        };

        assert!((breakdown.total() - 498.9).abs() < 1e-9);
    }
}
