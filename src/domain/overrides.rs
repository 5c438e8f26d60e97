use std::collections::HashMap;

use anyhow::{Context, Result, bail};

use super::models::{Mode, PartialModeStats};
use crate::extractor::numeric;

/// Parse `MODE.FIELD=VALUE` assignments (e.g. `solo.games=280`,
/// `duo.avg_survived=2:20`) into per-mode override records.
pub fn parse_assignments(args: &[String]) -> Result<HashMap<Mode, PartialModeStats>> {
    let mut overrides: HashMap<Mode, PartialModeStats> = HashMap::new();

    for arg in args {
        let (mode, field, value) =
            split_assignment(arg).with_context(|| format!("Invalid override '{arg}'"))?;
        apply_field(overrides.entry(mode).or_default(), &field, &value)
            .with_context(|| format!("Invalid override '{arg}'"))?;
    }

    Ok(overrides)
}

fn split_assignment(arg: &str) -> Result<(Mode, String, String)> {
    let Some((target, value)) = arg.split_once('=') else {
        bail!("expected MODE.FIELD=VALUE");
    };
    let Some((mode_word, field)) = target.split_once('.') else {
        bail!("expected MODE.FIELD=VALUE");
    };
    let Some(mode) = Mode::from_keyword(mode_word.trim()) else {
        bail!("unknown mode '{}'", mode_word.trim());
    };

    Ok((mode, field.trim().to_string(), value.trim().to_string()))
}

fn apply_field(stats: &mut PartialModeStats, field: &str, value: &str) -> Result<()> {
    match normalize_field(field).as_str() {
        "games" => stats.games = Some(parse_count(value)?),
        "wins" => stats.wins = Some(parse_count(value)?),
        "win_pct" => stats.win_pct = Some(parse_float(value)?),
        "kills" => stats.kills = Some(parse_count(value)?),
        "avg_survived" => stats.avg_survived_secs = Some(parse_duration(value)?),
        "avg_damage" => stats.avg_damage = Some(parse_float(value)?),
        other => bail!("unknown field '{other}'"),
    }
    Ok(())
}

fn normalize_field(field: &str) -> String {
    let lower = field.to_ascii_lowercase();
    match lower.as_str() {
        "winpct" | "win%" | "win_percent" => "win_pct".to_string(),
        "survived" | "avg_survived_secs" => "avg_survived".to_string(),
        "damage" => "avg_damage".to_string(),
        _ => lower,
    }
}

fn parse_count(value: &str) -> Result<u32> {
    numeric::parse_count(value).with_context(|| format!("'{value}' is not a count"))
}

fn parse_float(value: &str) -> Result<f64> {
    numeric::parse_number(value).with_context(|| format!("'{value}' is not a number"))
}

fn parse_duration(value: &str) -> Result<f64> {
    numeric::parse_duration_secs(value)
        .with_context(|| format!("'{value}' is not a duration (M:SS or seconds)"))
}
