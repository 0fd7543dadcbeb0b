use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Developmental area of the Haizea-Llevant table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Area {
    Socialization,
    Language,
    GrossMotor,
    FineMotor,
    ProblemSolving,
}

impl Area {
    /// Canonical presentation order, matching the printed table.
    pub const ALL: [Area; 5] = [
        Area::Socialization,
        Area::Language,
        Area::GrossMotor,
        Area::FineMotor,
        Area::ProblemSolving,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Area::Socialization => "Socialization",
            Area::Language => "Language and Communication",
            Area::GrossMotor => "Gross Motor",
            Area::FineMotor => "Fine Motor",
            Area::ProblemSolving => "Problem Solving",
        }
    }
}

/// Ages (in months) at which 25/50/75/90 percent of the reference
/// population have acquired a milestone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Percentiles {
    pub p25: f64,
    pub p50: f64,
    pub p75: f64,
    pub p90: f64,
}

impl Percentiles {
    /// A well-formed quadruple satisfies `0 <= p25 < p50 < p75 < p90`.
    pub fn is_well_formed(&self) -> bool {
        self.p25 >= 0.0 && self.p25 < self.p50 && self.p50 < self.p75 && self.p75 < self.p90
    }
}

/// A single developmental skill with known population percentile ages.
/// Loaded once from the reference table and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Milestone {
    pub id: String,
    pub label: String,
    pub description: String,
    pub area: Area,
    pub percentiles: Percentiles,
}
