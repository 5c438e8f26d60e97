use std::collections::HashMap;

use super::models::{Mode, PartialModeStats};

/// Overlay manual overrides on extracted stats. An override field wins
/// whenever it is present; modes that only appear in `overrides` are added.
pub fn merge_overrides(
    extracted: &HashMap<Mode, PartialModeStats>,
    overrides: &HashMap<Mode, PartialModeStats>,
) -> HashMap<Mode, PartialModeStats> {
    let mut merged = extracted.clone();

    for (mode, over) in overrides {
        let entry = merged.entry(*mode).or_default();
        *entry = entry.overridden_by(over);
    }

    merged
}
