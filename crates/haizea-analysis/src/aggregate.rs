use serde::{Deserialize, Serialize};
use tracing::warn;
use ts_rs::TS;

use haizea_core::models::milestone::{Area, Milestone, Percentiles};
use haizea_core::models::session::{Outcome, Session};

use crate::classifier::Band;
use crate::interpreter::{Interpretation, Status, interpret};

/// Pass ratio below which an area raises an alert.
const AREA_ALERT_THRESHOLD: f64 = 0.60;

/// Significant + severe delays at or above this count trigger the
/// early-stimulation recommendation alongside the referral.
const SERIOUS_DELAY_PROGRAM_COUNT: u32 = 3;

/// More advanced milestones than this attaches enrichment guidance to each
/// advanced interpretation.
const ADVANCED_ESCALATION_COUNT: u32 = 2;

/// More advanced milestones than this adds the global enrichment
/// recommendation.
const ADVANCED_ENRICHMENT_COUNT: u32 = 3;

const ENRICHMENT_NOTE: &str = "Sustain progress with age-appropriate enrichment activities";

/// Outcome tallies across the evaluated milestones.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OutcomeCounts {
    pub pass: u32,
    pub partial: u32,
    pub fail: u32,
}

impl OutcomeCounts {
    fn bump(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Pass => self.pass += 1,
            Outcome::Partial => self.partial += 1,
            Outcome::Fail => self.fail += 1,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BandCounts {
    pub below_p25: u32,
    pub p25_to_p50: u32,
    pub p50_to_p75: u32,
    pub p75_to_p90: u32,
    pub above_p90: u32,
}

impl BandCounts {
    fn bump(&mut self, band: Band) {
        match band {
            Band::BelowP25 => self.below_p25 += 1,
            Band::P25ToP50 => self.p25_to_p50 += 1,
            Band::P50ToP75 => self.p50_to_p75 += 1,
            Band::P75ToP90 => self.p75_to_p90 += 1,
            Band::AboveP90 => self.above_p90 += 1,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StatusCounts {
    pub advanced: u32,
    pub normal: u32,
    pub delayed_mild: u32,
    pub delayed_significant: u32,
    pub delayed_severe: u32,
}

impl StatusCounts {
    fn bump(&mut self, status: Status) {
        match status {
            Status::Advanced => self.advanced += 1,
            Status::Normal => self.normal += 1,
            Status::DelayedMild => self.delayed_mild += 1,
            Status::DelayedSignificant => self.delayed_significant += 1,
            Status::DelayedSevere => self.delayed_severe += 1,
        }
    }

    fn serious_delays(&self) -> u32 {
        self.delayed_significant + self.delayed_severe
    }
}

/// Pass-ratio tier for a developmental area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AreaTier {
    Excellent,
    VeryGood,
    Good,
    Fair,
    Concerning,
}

impl AreaTier {
    /// `>=0.90` excellent, `>=0.80` very good, `>=0.70` good, `>=0.60` fair,
    /// anything lower concerning.
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio >= 0.90 {
            AreaTier::Excellent
        } else if ratio >= 0.80 {
            AreaTier::VeryGood
        } else if ratio >= 0.70 {
            AreaTier::Good
        } else if ratio >= 0.60 {
            AreaTier::Fair
        } else {
            AreaTier::Concerning
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AreaSummary {
    pub area: Area,
    pub evaluated: u32,
    pub passed: u32,
    pub pass_ratio: f64,
    pub tier: AreaTier,
}

/// A finding serious enough to surface at the top of the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum Alert {
    MilestoneDelay {
        milestone_id: String,
        status: Status,
        message: String,
    },
    AreaBelowThreshold {
        area: Area,
        pass_ratio: f64,
        message: String,
    },
}

/// Session-level guidance derived from the tier distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Recommendation {
    SpecializedFollowUp,
    EarlyStimulation,
    Enrichment,
    DetailedEvaluation,
}

impl Recommendation {
    pub fn message(&self) -> &'static str {
        match self {
            Recommendation::SpecializedFollowUp => {
                "Refer for specialized developmental follow-up"
            }
            Recommendation::EarlyStimulation => "Begin an early stimulation program",
            Recommendation::Enrichment => {
                "Offer enrichment activities to sustain advanced development"
            }
            Recommendation::DetailedEvaluation => {
                "Schedule a detailed developmental evaluation"
            }
        }
    }
}

/// A per-record data problem the aggregation tolerated and skipped. One bad
/// record never blocks reporting on the rest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum IntegrityWarning {
    OrphanedResult {
        milestone_id: String,
    },
    MalformedPercentiles {
        milestone_id: String,
        percentiles: Percentiles,
    },
}

/// Derived view over a session. Recomputable from `(session, dataset)` at
/// any time; never authoritative state. Contains no timestamps so identical
/// inputs serialize to identical bytes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AggregateAnalysis {
    pub evaluated: u32,
    pub outcome_counts: OutcomeCounts,
    pub band_counts: BandCounts,
    pub status_counts: StatusCounts,
    pub overall_pass_ratio: f64,
    pub milestones: Vec<Interpretation>,
    pub areas: Vec<AreaSummary>,
    pub alerts: Vec<Alert>,
    pub recommendations: Vec<Recommendation>,
    pub warnings: Vec<IntegrityWarning>,
}

fn ratio(part: u32, whole: u32) -> f64 {
    if whole == 0 {
        0.0
    } else {
        f64::from(part) / f64::from(whole)
    }
}

/// Fold a session's recorded outcomes into per-area and global statistics.
///
/// Walks the dataset in canonical order; a milestone without a matching
/// result is "not yet evaluated" and excluded from counts. Orphaned results
/// and malformed milestones are skipped with an integrity warning instead of
/// aborting the aggregation.
pub fn aggregate(session: &Session, dataset: &[Milestone]) -> AggregateAnalysis {
    let mut outcome_counts = OutcomeCounts::default();
    let mut band_counts = BandCounts::default();
    let mut status_counts = StatusCounts::default();
    let mut interpretations: Vec<Interpretation> = Vec::new();
    let mut alerts: Vec<Alert> = Vec::new();
    let mut warnings: Vec<IntegrityWarning> = Vec::new();

    for milestone in dataset {
        let Some(result) = session
            .results
            .iter()
            .find(|r| r.milestone_id == milestone.id)
        else {
            continue;
        };
        match interpret(milestone, session.patient_age_months, result.outcome) {
            Ok(interpretation) => {
                outcome_counts.bump(result.outcome);
                band_counts.bump(interpretation.band);
                status_counts.bump(interpretation.status);
                if interpretation.status.is_delay_alert() {
                    alerts.push(Alert::MilestoneDelay {
                        milestone_id: milestone.id.clone(),
                        status: interpretation.status,
                        message: format!(
                            "{}: {}",
                            milestone.label,
                            interpretation.status.label()
                        ),
                    });
                }
                interpretations.push(interpretation);
            }
            Err(err) => {
                warn!(
                    milestone_id = %milestone.id,
                    error = %err,
                    "skipping milestone with malformed percentiles"
                );
                warnings.push(IntegrityWarning::MalformedPercentiles {
                    milestone_id: milestone.id.clone(),
                    percentiles: milestone.percentiles,
                });
            }
        }
    }

    // Results pointing at no known milestone: skip, warn, keep going.
    for result in &session.results {
        if !dataset.iter().any(|m| m.id == result.milestone_id) {
            warn!(
                milestone_id = %result.milestone_id,
                "result references a milestone absent from the reference table"
            );
            warnings.push(IntegrityWarning::OrphanedResult {
                milestone_id: result.milestone_id.clone(),
            });
        }
    }

    // Session-level escalation: a run of advanced findings earns enrichment
    // guidance on each of them.
    if status_counts.advanced > ADVANCED_ESCALATION_COUNT {
        for interpretation in interpretations
            .iter_mut()
            .filter(|i| i.status == Status::Advanced)
        {
            if interpretation.recommendation.is_none() {
                interpretation.recommendation = Some(ENRICHMENT_NOTE.to_string());
            }
        }
    }

    let evaluated = interpretations.len() as u32;
    let overall_pass_ratio = ratio(outcome_counts.pass, evaluated);

    let areas: Vec<AreaSummary> = Area::ALL
        .iter()
        .map(|&area| {
            let mut area_evaluated = 0u32;
            let mut area_passed = 0u32;
            for milestone in dataset.iter().filter(|m| m.area == area) {
                if !milestone.percentiles.is_well_formed() {
                    continue;
                }
                if let Some(result) = session
                    .results
                    .iter()
                    .find(|r| r.milestone_id == milestone.id)
                {
                    area_evaluated += 1;
                    if result.outcome == Outcome::Pass {
                        area_passed += 1;
                    }
                }
            }
            let pass_ratio = ratio(area_passed, area_evaluated);
            AreaSummary {
                area,
                evaluated: area_evaluated,
                passed: area_passed,
                pass_ratio,
                tier: AreaTier::from_ratio(pass_ratio),
            }
        })
        .collect();

    for summary in &areas {
        if summary.evaluated > 0 && summary.pass_ratio < AREA_ALERT_THRESHOLD {
            alerts.push(Alert::AreaBelowThreshold {
                area: summary.area,
                pass_ratio: summary.pass_ratio,
                message: format!(
                    "{}: pass ratio below {:.0}%",
                    summary.area.label(),
                    AREA_ALERT_THRESHOLD * 100.0
                ),
            });
        }
    }

    let mut recommendations = Vec::new();
    if status_counts.delayed_severe >= 1
        || status_counts.serious_delays() >= SERIOUS_DELAY_PROGRAM_COUNT
    {
        recommendations.push(Recommendation::SpecializedFollowUp);
    }
    if status_counts.serious_delays() >= SERIOUS_DELAY_PROGRAM_COUNT {
        recommendations.push(Recommendation::EarlyStimulation);
    }
    if status_counts.advanced > ADVANCED_ENRICHMENT_COUNT {
        recommendations.push(Recommendation::Enrichment);
    }
    if evaluated > 0 && overall_pass_ratio < AREA_ALERT_THRESHOLD {
        recommendations.push(Recommendation::DetailedEvaluation);
    }

    AggregateAnalysis {
        evaluated,
        outcome_counts,
        band_counts,
        status_counts,
        overall_pass_ratio,
        milestones: interpretations,
        areas,
        alerts,
        recommendations,
        warnings,
    }
}
