use serde::{Deserialize, Serialize};
use ts_rs::TS;

use haizea_core::models::milestone::Percentiles;

use crate::error::AnalysisError;

/// Where a patient age falls relative to a milestone's percentile ages.
///
/// Bands are half-open on the lower edge: `[p25, p50)`, `[p50, p75)` and so
/// on. An age exactly at p25 is `P25ToP50`; exactly at p90 is `AboveP90`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Band {
    BelowP25,
    P25ToP50,
    P50ToP75,
    P75ToP90,
    AboveP90,
}

impl Band {
    pub fn label(&self) -> &'static str {
        match self {
            Band::BelowP25 => "below P25",
            Band::P25ToP50 => "between P25 and P50",
            Band::P50ToP75 => "between P50 and P75",
            Band::P75ToP90 => "between P75 and P90",
            Band::AboveP90 => "above P90",
        }
    }
}

/// Classify a patient age against a milestone's percentile quadruple.
///
/// The first boundary the age is strictly below wins, so the five bands
/// partition the age axis with no gaps or overlaps. A quadruple that is not
/// strictly increasing is an authoring defect and fails rather than
/// producing a nonsense band.
pub fn classify_age(percentiles: &Percentiles, age_months: f64) -> Result<Band, AnalysisError> {
    if !percentiles.is_well_formed() {
        return Err(AnalysisError::MalformedPercentiles {
            percentiles: *percentiles,
        });
    }
    let band = if age_months < percentiles.p25 {
        Band::BelowP25
    } else if age_months < percentiles.p50 {
        Band::P25ToP50
    } else if age_months < percentiles.p75 {
        Band::P50ToP75
    } else if age_months < percentiles.p90 {
        Band::P75ToP90
    } else {
        Band::AboveP90
    };
    Ok(band)
}
