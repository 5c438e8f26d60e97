use std::collections::HashMap;

use anyhow::{Context, Result};
use colored::{ColoredString, Colorize};

use crate::domain::{Mode, PartialModeStats};
use crate::rating::Tier;

use super::processing::PasteReport;

/// Render the per-mode table and overall line for the terminal. Values are
/// rounded to one decimal for display; the JSON output keeps full precision.
pub fn render_table(report: &PasteReport) -> String {
    let mut out = String::new();

    if report.ratings.per_mode.is_empty() {
        out.push_str("No modes recognized in the paste. Use --set to enter stats manually.\n");
        return out;
    }

    out.push_str(&format!(
        "{:<7} {:>6} {:>6} {:>6} {:>6} {:>7} {:>7} {:>6} {:>6} {:>6} {:>6} {:>7} {:>7}  {}\n",
        "MODE", "GAMES", "WINS", "WIN%", "KILLS", "SURV", "DMG", "BASE", "SURV", "DMG", "WINB",
        "SPI", "ADJ", "TIER"
    ));

    for mode in Mode::ALL {
        let (Some(stats), Some(result)) = (
            report.merged.get(&mode),
            report.ratings.per_mode.get(&mode),
        ) else {
            continue;
        };

        out.push_str(&format!(
            "{:<7} {:>6} {:>6} {:>6.1} {:>6} {:>7.0} {:>7.1} {:>6.1} {:>6.1} {:>6.1} {:>6.1} {:>7.1} {:>7.1}  {}\n",
            mode.as_str(),
            stats.games,
            stats.wins,
            stats.win_pct,
            stats.kills,
            stats.avg_survived_secs,
            stats.avg_damage,
            result.breakdown.base,
            result.breakdown.survival,
            result.breakdown.damage,
            result.breakdown.win_bonus,
            result.spi,
            result.adjusted_spi,
            tier_label(result.tier)
        ));

        if stats.wins > stats.games {
            out.push_str(&format!(
                "{}\n",
                format!(
                    "  warning: {} wins ({}) exceed games ({})",
                    mode.as_str(),
                    stats.wins,
                    stats.games
                )
                .yellow()
            ));
        }
    }

    if let Some(overall) = &report.ratings.overall {
        let total_games: u64 = report
            .merged
            .values()
            .map(|stats| u64::from(stats.games))
            .sum();
        out.push_str(&format!(
            "\nOVERALL ({total_games} games): {:.1}  {}\n",
            overall.adjusted_spi,
            tier_label(overall.tier)
        ));
    }

    out
}

pub fn render_json(report: &PasteReport) -> Result<String> {
    serde_json::to_string_pretty(report).context("Failed to serialize report")
}

/// Field-by-field listing of what the parser recovered, so the user knows
/// which values need manual entry.
pub fn render_extracted(extracted: &HashMap<Mode, PartialModeStats>) -> String {
    let mut out = String::new();

    if extracted.is_empty() {
        out.push_str("No modes recognized in the paste.\n");
        return out;
    }

    for mode in Mode::ALL {
        let Some(stats) = extracted.get(&mode) else {
            continue;
        };

        out.push_str(&format!("{}\n", mode.as_str()));
        push_field(&mut out, "games", stats.games.map(|v| v.to_string()));
        push_field(&mut out, "wins", stats.wins.map(|v| v.to_string()));
        push_field(&mut out, "win %", stats.win_pct.map(|v| format!("{v:.1}")));
        push_field(&mut out, "kills", stats.kills.map(|v| v.to_string()));
        push_field(
            &mut out,
            "avg survived",
            stats.avg_survived_secs.map(|v| format!("{v:.0} s")),
        );
        push_field(
            &mut out,
            "avg damage",
            stats.avg_damage.map(|v| format!("{v:.1}")),
        );
    }

    out
}

pub fn render_extracted_json(extracted: &HashMap<Mode, PartialModeStats>) -> Result<String> {
    serde_json::to_string_pretty(extracted).context("Failed to serialize extracted stats")
}

fn push_field(out: &mut String, label: &str, value: Option<String>) {
    match value {
        Some(value) => out.push_str(&format!("  {label:<14} {value}\n")),
        None => out.push_str(&format!("  {label:<14} {}\n", "(not found)".dimmed())),
    }
}

fn tier_label(tier: Tier) -> ColoredString {
    let padded = format!("{:<11}", tier.as_str());
    match tier {
        Tier::Grandmaster => padded.bright_red().bold(),
        Tier::Master => padded.bright_magenta(),
        Tier::Diamond => padded.bright_cyan(),
        Tier::Platinum => padded.cyan(),
        Tier::Gold => padded.yellow(),
        Tier::Silver => padded.white(),
        Tier::Bronze => padded.red(),
    }
}
