//! haizea-charts
//!
//! Projects the reference table and a patient age into plotting-ready
//! series: four percentile curves plus a constant patient-age marker, all
//! over the same milestone index axis. Pure projection — the charting
//! library on the other side of the wire does the drawing.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use haizea_core::models::milestone::{Area, Milestone};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SeriesPoint {
    pub index: usize,
    pub months: f64,
}

/// Line-chart datasets over the milestone axis. Index order is the table's
/// canonical order (area order, then insertion order within the area) and is
/// never re-sorted by value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub p25: Vec<SeriesPoint>,
    pub p50: Vec<SeriesPoint>,
    pub p75: Vec<SeriesPoint>,
    pub p90: Vec<SeriesPoint>,
    pub patient: Vec<SeriesPoint>,
}

/// Build the percentile curves and patient marker for a dataset.
///
/// `area` restricts the milestone set to one area; `None` means the whole
/// table.
pub fn build_series(
    dataset: &[Milestone],
    patient_age_months: u32,
    area: Option<Area>,
) -> ChartSeries {
    let mut series = ChartSeries::default();
    let selected = dataset
        .iter()
        .filter(|m| area.is_none_or(|a| m.area == a));
    for (index, milestone) in selected.enumerate() {
        series.labels.push(milestone.label.clone());
        series.p25.push(SeriesPoint {
            index,
            months: milestone.percentiles.p25,
        });
        series.p50.push(SeriesPoint {
            index,
            months: milestone.percentiles.p50,
        });
        series.p75.push(SeriesPoint {
            index,
            months: milestone.percentiles.p75,
        });
        series.p90.push(SeriesPoint {
            index,
            months: milestone.percentiles.p90,
        });
        series.patient.push(SeriesPoint {
            index,
            months: f64::from(patient_age_months),
        });
    }
    series
}
