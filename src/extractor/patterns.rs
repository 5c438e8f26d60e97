use anyhow::{Context, Result};
use regex::Regex;

/// Numeric literal: optional thousands separators, optional decimals.
const NUM: &str = r"\d[\d,]*(?:\.\d+)?";

/// Survived-time literal, `M:SS` form.
const TIME: &str = r"\d{1,3}:\d{2}";

/// Gap between a label and its value: punctuation and spacing on the same
/// line, or a single line break followed by indentation. Anything longer
/// means the number belongs to some other label.
const GAP: &str = r"[^\d\r\n]{0,40}\r?\n?[ \t]{0,10}";

/// The enumerable rule set of the paste parser: one compiled pattern per
/// recognized label, all case-insensitive.
pub struct FieldPatterns {
    pub mode_keyword: Regex,
    pub games_before_label: Regex,
    pub games_after_label: Regex,
    pub wins: Regex,
    pub win_pct: Regex,
    pub kills: Regex,
    pub avg_survived: Regex,
    pub avg_damage: Regex,
    pub kills_per_game: Regex,
}

impl FieldPatterns {
    pub fn new() -> Result<Self> {
        Ok(Self {
            mode_keyword: compile(r"(?i)\b(?:SOLO|DUO|SQUAD)\b")?,
            // Profile screens write the games count on either side of the
            // label: "280 GAMES" or "GAMES: 280".
            games_before_label: compile(&format!(
                r"(?i)({NUM})[ \t]{{0,10}}\r?\n?[ \t]{{0,10}}GAMES\b"
            ))?,
            games_after_label: compile(&format!(r"(?i)\bGAMES\b{GAP}({NUM})"))?,
            wins: compile(&format!(r"(?i)\bWINS\b{GAP}({NUM})"))?,
            // The % is required so WINS and WIN % stay disjoint.
            win_pct: compile(&format!(r"(?i)\bWIN[ \t]*%{GAP}({NUM})"))?,
            kills: compile(&format!(r"(?i)\bKILLS\b{GAP}({NUM})"))?,
            avg_survived: compile(&format!(
                r"(?i)\b(?:AVG|AVERAGE)\.?[ \t]*SURVIVED\b{GAP}({TIME}|{NUM})"
            ))?,
            avg_damage: compile(&format!(
                r"(?i)\b(?:AVG|AVERAGE)\.?[ \t]*DAMAGE\b{GAP}({NUM})"
            ))?,
            kills_per_game: compile(&format!(r"(?i)\bK/?G\b{GAP}({NUM})"))?,
        })
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).with_context(|| format!("Failed to compile field pattern: {pattern}"))
}
