//! haizea-norms
//!
//! The Haizea-Llevant reference table: developmental milestones grouped by
//! area, each with P25/P50/P75/P90 acquisition ages in months. Pure data —
//! loaded once at startup and never mutated, safe for unlimited concurrent
//! readers.

pub mod areas;
pub mod error;

use std::collections::HashSet;
use std::sync::LazyLock;

use haizea_core::models::milestone::{Area, Milestone};

use crate::error::DatasetError;

static DATASET: LazyLock<Vec<Milestone>> = LazyLock::new(|| {
    let mut all = Vec::new();
    all.extend(areas::socialization::milestones());
    all.extend(areas::language::milestones());
    all.extend(areas::gross_motor::milestones());
    all.extend(areas::fine_motor::milestones());
    all.extend(areas::problem_solving::milestones());
    all
});

/// All milestones in canonical order: areas in `Area::ALL` order, table
/// order within each area. Ordering is significant for sequential
/// presentation and must never be re-sorted.
pub fn dataset() -> &'static [Milestone] {
    &DATASET
}

/// Milestones belonging to one area, in table order.
pub fn area_milestones(area: Area) -> impl Iterator<Item = &'static Milestone> {
    dataset().iter().filter(move |m| m.area == area)
}

/// Look up a milestone by id.
pub fn find(id: &str) -> Option<&'static Milestone> {
    dataset().iter().find(|m| m.id == id)
}

/// Startup check for a reference table. A table that fails here is an
/// authoring defect; callers should abort rather than screen against it.
pub fn validate(dataset: &[Milestone]) -> Result<(), Vec<DatasetError>> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();
    for milestone in dataset {
        if !seen.insert(milestone.id.as_str()) {
            errors.push(DatasetError::DuplicateId(milestone.id.clone()));
        }
        if milestone.label.trim().is_empty() {
            errors.push(DatasetError::EmptyLabel(milestone.id.clone()));
        }
        if !milestone.percentiles.is_well_formed() {
            errors.push(DatasetError::MalformedPercentiles {
                id: milestone.id.clone(),
                percentiles: milestone.percentiles,
            });
        }
    }
    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
