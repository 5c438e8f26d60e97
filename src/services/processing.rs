use std::collections::HashMap;

use anyhow::Result;
use log::{debug, info};
use serde::Serialize;

use crate::config::settings::AppConfig;
use crate::domain::{self, Mode, ModeStats, PartialModeStats};
use crate::extractor::Extractor;
use crate::rating::{self, ModeRatings};

/// One rating pass over a paste: what the extractor recovered, the merged
/// records the engine consumed, and the resulting ratings.
#[derive(Debug, Serialize)]
pub struct PasteReport {
    pub extracted: HashMap<Mode, PartialModeStats>,
    pub merged: HashMap<Mode, ModeStats>,
    pub ratings: ModeRatings,
}

pub struct ProcessingService {
    config: AppConfig,
    extractor: Extractor,
}

impl ProcessingService {
    pub fn new(config: AppConfig) -> Result<Self> {
        Ok(Self {
            config,
            extractor: Extractor::new()?,
        })
    }

    /// Extract, apply manual overrides, rate.
    pub fn rate_paste(
        &self,
        raw: &str,
        overrides: &HashMap<Mode, PartialModeStats>,
    ) -> PasteReport {
        let extracted = self.extract(raw);
        let partials = domain::merge_overrides(&extracted, overrides);
        let merged = resolve_all(&partials);
        let ratings = rating::rate_all(&merged, &self.config);

        PasteReport {
            extracted,
            merged,
            ratings,
        }
    }

    pub fn extract(&self, raw: &str) -> HashMap<Mode, PartialModeStats> {
        let extracted = self.extractor.extract(raw);
        info!("Extracted stats for {} mode(s)", extracted.len());

        for mode in Mode::ALL {
            if let Some(stats) = extracted.get(&mode) {
                debug!("{}: {:?}", mode.as_str(), stats);
            }
        }

        extracted
    }
}

fn resolve_all(partials: &HashMap<Mode, PartialModeStats>) -> HashMap<Mode, ModeStats> {
    partials
        .iter()
        .map(|(mode, partial)| (*mode, partial.resolve()))
        .collect()
}
