pub mod numeric;
pub mod patterns;

use std::collections::HashMap;

use anyhow::Result;
use log::debug;
use regex::Regex;

use crate::domain::{Mode, PartialModeStats};
use patterns::FieldPatterns;

/// Tolerant parser for profile-screen pastes.
pub struct Extractor {
    patterns: FieldPatterns,
}

impl Extractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            patterns: FieldPatterns::new()?,
        })
    }

    /// Scan a paste for per-mode stats. Modes without a keyword in the text
    /// are absent from the result; fields that cannot be recovered stay
    /// unset. Total over any input string.
    pub fn extract(&self, raw: &str) -> HashMap<Mode, PartialModeStats> {
        let mut modes: HashMap<Mode, PartialModeStats> = HashMap::new();

        for (mode, window) in self.mode_windows(raw) {
            let stats = self.scan_window(window);
            if stats.is_empty() {
                debug!("No recognizable fields near {} keyword", mode.as_str());
                continue;
            }
            modes
                .entry(mode)
                .and_modify(|existing| existing.fill_missing(&stats))
                .or_insert(stats);
        }

        modes
    }

    /// Split the paste into (mode, window) pairs. A window runs from its
    /// keyword to the next one, so stray lines attach to the nearest
    /// preceding mode.
    fn mode_windows<'a>(&self, raw: &'a str) -> Vec<(Mode, &'a str)> {
        let marks: Vec<(Mode, usize, usize)> = self
            .patterns
            .mode_keyword
            .find_iter(raw)
            .filter_map(|m| Mode::from_keyword(m.as_str()).map(|mode| (mode, m.start(), m.end())))
            .collect();

        marks
            .iter()
            .enumerate()
            .map(|(idx, &(mode, _, end))| {
                let window_end = marks.get(idx + 1).map_or(raw.len(), |&(_, start, _)| start);
                (mode, &raw[end..window_end])
            })
            .collect()
    }

    fn scan_window(&self, window: &str) -> PartialModeStats {
        let patterns = &self.patterns;

        let kills = capture(&patterns.kills, window).and_then(numeric::parse_count);
        let games = capture(&patterns.games_before_label, window)
            .or_else(|| capture(&patterns.games_after_label, window))
            .and_then(numeric::parse_count)
            .or_else(|| self.derive_games_from_kill_rate(window, kills));

        PartialModeStats {
            games,
            wins: capture(&patterns.wins, window).and_then(numeric::parse_count),
            win_pct: capture(&patterns.win_pct, window).and_then(numeric::parse_number),
            kills,
            avg_survived_secs: capture(&patterns.avg_survived, window)
                .and_then(numeric::parse_duration_secs),
            avg_damage: capture(&patterns.avg_damage, window).and_then(numeric::parse_number),
        }
    }

    /// Some profile screens omit the games count but show kills per game;
    /// the count can be recovered from the two.
    fn derive_games_from_kill_rate(&self, window: &str, kills: Option<u32>) -> Option<u32> {
        let kills = kills?;
        let rate =
            capture(&self.patterns.kills_per_game, window).and_then(numeric::parse_number)?;
        if rate <= 0.0 {
            return None;
        }

        let games = (f64::from(kills) / rate).round();
        if games < 1.0 || games > f64::from(u32::MAX) {
            return None;
        }
        Some(games as u32)
    }
}

fn capture<'a>(re: &Regex, window: &'a str) -> Option<&'a str> {
    re.captures(window)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> Extractor {
        Extractor::new().unwrap()
    }

    #[test]
    fn test_empty_input_yields_no_modes() {
        assert!(extractor().extract("").is_empty());
    }

    #[test]
    fn test_text_without_mode_keywords_yields_no_modes() {
        let map = extractor().extract("GAMES 280 KILLS 1062 WIN % 20.7");
        assert!(map.is_empty());
    }

    #[test]
    fn test_single_mode_one_line() {
        let map = extractor()
            .extract("SOLO 280 GAMES WINS 58 WIN % 20.7 KILLS 1062 AVG SURVIVED 2:37 AVG DAMAGE 432");

        assert_eq!(map.len(), 1);
        let solo = &map[&Mode::Solo];
        assert_eq!(solo.games, Some(280));
        assert_eq!(solo.wins, Some(58));
        assert_eq!(solo.win_pct, Some(20.7));
        assert_eq!(solo.kills, Some(1062));
        assert_eq!(solo.avg_survived_secs, Some(157.0));
        assert_eq!(solo.avg_damage, Some(432.0));
    }

    #[test]
    fn test_multi_line_profile_paste() {
        let map = extractor().extract(
            "SOLO\n280 Games\nWins\n58\nWin %\n20.7%\nKills\n1,062\nAvg. Survived\n2:37\nAvg. Damage\n432\nDUO\n79 Games\nWins\n10",
        );

        assert_eq!(map.len(), 2);
        assert_eq!(map[&Mode::Solo].kills, Some(1062));
        assert_eq!(map[&Mode::Solo].avg_survived_secs, Some(157.0));
        assert_eq!(map[&Mode::Duo].games, Some(79));
        assert_eq!(map[&Mode::Duo].wins, Some(10));
        // Fields the Duo section never mentioned stay unset.
        assert_eq!(map[&Mode::Duo].kills, None);
    }

    #[test]
    fn test_missing_fields_stay_unset_not_zero() {
        let map = extractor().extract("SQUAD 232 GAMES KILLS 681");
        let squad = &map[&Mode::Squad];

        assert_eq!(squad.games, Some(232));
        assert_eq!(squad.kills, Some(681));
        assert_eq!(squad.wins, None);
        assert_eq!(squad.win_pct, None);
        assert_eq!(squad.avg_survived_secs, None);
        assert_eq!(squad.avg_damage, None);
    }

    #[test]
    fn test_ambiguous_lines_attach_to_nearest_preceding_mode() {
        let map = extractor().extract("DUO\nsome chatter here\nKills 233\nSQUAD\nKills 681");

        assert_eq!(map[&Mode::Duo].kills, Some(233));
        assert_eq!(map[&Mode::Squad].kills, Some(681));
    }

    #[test]
    fn test_repeated_mode_keyword_fills_missing_fields() {
        let map = extractor().extract("SOLO GAMES 280\nSOLO GAMES 999 KILLS 1062");
        let solo = &map[&Mode::Solo];

        // First occurrence keeps its value; the repeat only adds what was missing.
        assert_eq!(solo.games, Some(280));
        assert_eq!(solo.kills, Some(1062));
    }

    #[test]
    fn test_keyword_without_any_fields_is_omitted() {
        let map = extractor().extract("I mostly queue squad with friends");
        assert!(map.is_empty());
    }

    #[test]
    fn test_games_derived_from_kills_per_game() {
        let map = extractor().extract("SOLO KILLS 1062 K/G 3.79");

        // 1062 / 3.79 rounds to 280.
        assert_eq!(map[&Mode::Solo].games, Some(280));
    }

    #[test]
    fn test_bare_seconds_survived() {
        let map = extractor().extract("DUO GAMES 79 AVG SURVIVED 140");
        assert_eq!(map[&Mode::Duo].avg_survived_secs, Some(140.0));
    }

    #[test]
    fn test_garbage_heavy_input_never_fails() {
        let map = extractor().extract("@@@@ SOLO ???? 12:99:77 GAMES GAMES KILLS ---- %%% \u{0} DUO");
        // Whatever was recovered, the call itself must not panic; Solo may
        // be present with partial fields or absent entirely.
        for stats in map.values() {
            assert!(!stats.is_empty());
        }
    }
}
