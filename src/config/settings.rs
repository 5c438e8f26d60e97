pub struct RatingSettings {
    pub confidence_constant: f64,
    pub neutral_baseline: f64,
    pub kill_rate_factor: f64,
    pub survival_cap_secs: f64,
    pub survival_weight: f64,
    pub damage_norm: f64,
    pub damage_weight: f64,
    pub win_bonus_factor: f64,
}

impl Default for RatingSettings {
    fn default() -> Self {
        Self {
            confidence_constant: 50.0,
            neutral_baseline: 300.0,
            kill_rate_factor: 100.0,
            survival_cap_secs: 180.0, // 3:00
            survival_weight: 50.0,
            damage_norm: 500.0,
            damage_weight: 40.0,
            win_bonus_factor: 2.0,
        }
    }
}

/// Lower bound of each tier above Bronze. Bronze is the floor.
pub struct TierSettings {
    pub grandmaster: f64,
    pub master: f64,
    pub diamond: f64,
    pub platinum: f64,
    pub gold: f64,
    pub silver: f64,
}

impl Default for TierSettings {
    fn default() -> Self {
        Self {
            grandmaster: 750.0,
            master: 650.0,
            diamond: 550.0,
            platinum: 450.0,
            gold: 350.0,
            silver: 250.0,
        }
    }
}

pub struct AppConfig {
    pub rating: RatingSettings,
    pub tiers: TierSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            rating: RatingSettings::default(),
            tiers: TierSettings::default(),
        }
    }
}

// Tunables are passed explicitly (Dependency Injection) rather than read
// from module-level state, so the rating engine stays a pure function.
