/// Games-weighted mean of adjusted SPI values. Modes with no games carry no
/// weight; with nothing weighted at all there is no overall rating, rather
/// than a divide-by-zero artifact.
pub fn games_weighted_mean(entries: &[(u32, f64)]) -> Option<f64> {
    let total_games: u64 = entries.iter().map(|&(games, _)| u64::from(games)).sum();
    if total_games == 0 {
        return None;
    }

    let weighted_sum: f64 = entries
        .iter()
        .map(|&(games, adjusted)| adjusted * f64::from(games))
        .sum();

    Some(weighted_sum / total_games as f64)
}
