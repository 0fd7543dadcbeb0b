pub mod fine_motor;
pub mod gross_motor;
pub mod language;
pub mod problem_solving;
pub mod socialization;

use haizea_core::models::milestone::{Area, Milestone, Percentiles};

/// `(id, label, description, [p25, p50, p75, p90])` in months.
pub(crate) type Row = (&'static str, &'static str, &'static str, [f64; 4]);

pub(crate) fn build(area: Area, rows: &[Row]) -> Vec<Milestone> {
    rows.iter()
        .map(|&(id, label, description, [p25, p50, p75, p90])| Milestone {
            id: id.to_string(),
            label: label.to_string(),
            description: description.to_string(),
            area,
            percentiles: Percentiles { p25, p50, p75, p90 },
        })
        .collect()
}
