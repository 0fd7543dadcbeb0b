use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;
use crate::models::milestone::Milestone;

/// Upper bound of the instrument's age range.
pub const MAX_AGE_MONTHS: u32 = 72;

/// Evaluator's recorded judgment for a single milestone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Outcome {
    Pass,
    Partial,
    Fail,
}

impl Outcome {
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Pass => "pass",
            Outcome::Partial => "partial",
            Outcome::Fail => "fail",
        }
    }
}

/// One recorded judgment. Results are append-only; there is no edit or
/// removal path once an outcome has been recorded.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EvaluationResult {
    pub milestone_id: String,
    pub outcome: Outcome,
    pub recorded_at: Timestamp,
}

/// One evaluator's single-patient assessment run.
///
/// `patient_age_months` is fixed at session start and used for every
/// percentile comparison — it is never recalculated as time passes.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Session {
    pub id: Uuid,
    pub patient_name: String,
    pub patient_age_months: u32,
    pub evaluator_name: String,
    pub started_at: Timestamp,
    pub results: Vec<EvaluationResult>,
}

impl Session {
    /// Start a session. This is the validation boundary: downstream analysis
    /// assumes the age range and identifiers were checked here.
    pub fn new(
        patient_name: impl Into<String>,
        patient_age_months: u32,
        evaluator_name: impl Into<String>,
    ) -> Result<Self, CoreError> {
        let patient_name = patient_name.into();
        let evaluator_name = evaluator_name.into();
        if patient_name.trim().is_empty() {
            return Err(CoreError::MissingField("patient_name"));
        }
        if evaluator_name.trim().is_empty() {
            return Err(CoreError::MissingField("evaluator_name"));
        }
        if patient_age_months > MAX_AGE_MONTHS {
            return Err(CoreError::AgeOutOfRange(patient_age_months));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            patient_name,
            patient_age_months,
            evaluator_name,
            started_at: Timestamp::now(),
            results: Vec::new(),
        })
    }

    /// Append an outcome for a milestone. A session holds at most one
    /// outcome per milestone id.
    pub fn record(
        &mut self,
        milestone_id: impl Into<String>,
        outcome: Outcome,
    ) -> Result<(), CoreError> {
        let milestone_id = milestone_id.into();
        if self.has_result(&milestone_id) {
            return Err(CoreError::DuplicateResult(milestone_id));
        }
        self.results.push(EvaluationResult {
            milestone_id,
            outcome,
            recorded_at: Timestamp::now(),
        });
        Ok(())
    }

    pub fn has_result(&self, milestone_id: &str) -> bool {
        self.results.iter().any(|r| r.milestone_id == milestone_id)
    }

    /// Next milestone to present: the first one in table order without a
    /// recorded outcome. `None` once the run is complete.
    pub fn next_milestone<'a>(&self, dataset: &'a [Milestone]) -> Option<&'a Milestone> {
        dataset.iter().find(|m| !self.has_result(&m.id))
    }

    pub fn is_complete(&self, dataset: &[Milestone]) -> bool {
        dataset.iter().all(|m| self.has_result(&m.id))
    }

    /// `(recorded, total)` over the given reference table, for progress
    /// display.
    pub fn progress(&self, dataset: &[Milestone]) -> (usize, usize) {
        let recorded = dataset.iter().filter(|m| self.has_result(&m.id)).count();
        (recorded, dataset.len())
    }
}
