use serde::{Deserialize, Serialize};
use ts_rs::TS;

use haizea_core::models::milestone::Milestone;
use haizea_core::models::session::Outcome;

use crate::classifier::{Band, classify_age};
use crate::error::AnalysisError;

/// Consolidated clinical status combining percentile band and outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Status {
    Advanced,
    Normal,
    DelayedMild,
    DelayedSignificant,
    DelayedSevere,
}

impl Status {
    pub fn label(&self) -> &'static str {
        match self {
            Status::Advanced => "advanced development",
            Status::Normal => "development within the normal range",
            Status::DelayedMild => "mild delay",
            Status::DelayedSignificant => "significant delay",
            Status::DelayedSevere => "severe delay",
        }
    }

    /// Statuses serious enough to surface as a session-level alert.
    pub fn is_delay_alert(&self) -> bool {
        matches!(self, Status::DelayedSignificant | Status::DelayedSevere)
    }
}

/// The clinical reading of one milestone for one patient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Interpretation {
    pub milestone_id: String,
    pub band: Band,
    pub status: Status,
    pub description: String,
    pub recommendation: Option<String>,
}

/// Band x outcome decision table. The single source of truth for status —
/// call sites must not re-derive this with their own branching.
fn status_for(band: Band, outcome: Outcome) -> Status {
    match (band, outcome) {
        (Band::BelowP25, Outcome::Pass) => Status::Advanced,
        (Band::BelowP25, Outcome::Partial) => Status::Normal,
        (Band::BelowP25, Outcome::Fail) => Status::DelayedSevere,
        (Band::P25ToP50 | Band::P50ToP75, Outcome::Fail) => Status::DelayedMild,
        (Band::P75ToP90, Outcome::Fail) => Status::DelayedSignificant,
        (Band::AboveP90, Outcome::Fail) => Status::DelayedSevere,
        (_, Outcome::Pass | Outcome::Partial) => Status::Normal,
    }
}

fn recommendation_for(status: Status, milestone: &Milestone) -> Option<String> {
    match status {
        Status::DelayedSignificant => Some(format!(
            "Re-screen '{}' within four to six weeks",
            milestone.label
        )),
        Status::DelayedSevere => Some(format!(
            "Refer '{}' for specialist developmental evaluation",
            milestone.label
        )),
        _ => None,
    }
}

/// Interpret one recorded outcome for one milestone at the session's fixed
/// patient age.
pub fn interpret(
    milestone: &Milestone,
    patient_age_months: u32,
    outcome: Outcome,
) -> Result<Interpretation, AnalysisError> {
    let band = classify_age(&milestone.percentiles, f64::from(patient_age_months))?;
    let status = status_for(band, outcome);
    let description = format!(
        "{}: age {} months is {} for this milestone; outcome '{}' indicates {}",
        milestone.label,
        patient_age_months,
        band.label(),
        outcome.label(),
        status.label(),
    );
    Ok(Interpretation {
        milestone_id: milestone.id.clone(),
        band,
        status,
        description,
        recommendation: recommendation_for(status, milestone),
    })
}
