use serde::{Deserialize, Serialize};

/// Game modes recognized in a stats paste
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Mode {
    Solo,
    Duo,
    Squad,
}

impl Mode {
    /// Canonical ordering, used for aggregation and display
    pub const ALL: [Mode; 3] = [Mode::Solo, Mode::Duo, Mode::Squad];

    pub fn from_keyword(word: &str) -> Option<Mode> {
        match word.to_ascii_uppercase().as_str() {
            "SOLO" => Some(Mode::Solo),
            "DUO" => Some(Mode::Duo),
            "SQUAD" => Some(Mode::Squad),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Solo => "SOLO",
            Mode::Duo => "DUO",
            Mode::Squad => "SQUAD",
        }
    }
}

/// Stats recovered for one mode. A field the extractor could not find stays
/// `None`, so callers can tell "parsed" apart from "missing" and ask for
/// manual entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PartialModeStats {
    pub games: Option<u32>,
    pub wins: Option<u32>,
    pub win_pct: Option<f64>,
    pub kills: Option<u32>,
    pub avg_survived_secs: Option<f64>,
    pub avg_damage: Option<f64>,
}

impl PartialModeStats {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Take any field `other` has that `self` is still missing
    pub fn fill_missing(&mut self, other: &PartialModeStats) {
        self.games = self.games.or(other.games);
        self.wins = self.wins.or(other.wins);
        self.win_pct = self.win_pct.or(other.win_pct);
        self.kills = self.kills.or(other.kills);
        self.avg_survived_secs = self.avg_survived_secs.or(other.avg_survived_secs);
        self.avg_damage = self.avg_damage.or(other.avg_damage);
    }

    /// Overlay `over` on `self`; a field present in `over` wins
    pub fn overridden_by(&self, over: &PartialModeStats) -> PartialModeStats {
        PartialModeStats {
            games: over.games.or(self.games),
            wins: over.wins.or(self.wins),
            win_pct: over.win_pct.or(self.win_pct),
            kills: over.kills.or(self.kills),
            avg_survived_secs: over.avg_survived_secs.or(self.avg_survived_secs),
            avg_damage: over.avg_damage.or(self.avg_damage),
        }
    }

    /// Concrete record for the rating engine. Missing fields become zero,
    /// and win % falls back to wins/games when it was not supplied directly.
    pub fn resolve(&self) -> ModeStats {
        let games = self.games.unwrap_or(0);
        let wins = self.wins.unwrap_or(0);
        let win_pct = match self.win_pct {
            Some(pct) => pct,
            None if games > 0 => f64::from(wins) / f64::from(games) * 100.0,
            None => 0.0,
        };

        ModeStats {
            games,
            wins,
            win_pct,
            kills: self.kills.unwrap_or(0),
            avg_survived_secs: self.avg_survived_secs.unwrap_or(0.0),
            avg_damage: self.avg_damage.unwrap_or(0.0),
        }
    }
}

/// Fully resolved per-mode stats consumed by the rating engine
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModeStats {
    pub games: u32,
    pub wins: u32,
    pub win_pct: f64,
    pub kills: u32,
    pub avg_survived_secs: f64,
    pub avg_damage: f64,
}
