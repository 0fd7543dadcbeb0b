use haizea_core::models::milestone::{Area, Milestone};

use super::{Row, build};

/// Gross motor area of the Haizea-Llevant table.
const ROWS: &[Row] = &[
    (
        "gm_001",
        "Holds head upright",
        "Holds the head up while in a prone position",
        [1.0, 2.0, 3.0, 4.0],
    ),
    (
        "gm_002",
        "Sits with support",
        "Stays seated with hand or cushion support",
        [4.0, 5.0, 6.0, 7.0],
    ),
    (
        "gm_003",
        "Sits without support",
        "Holds a seated position without any support",
        [5.5, 7.0, 8.5, 10.0],
    ),
    (
        "gm_004",
        "Crawls",
        "Moves around on hands and knees",
        [7.0, 9.0, 11.0, 13.0],
    ),
    (
        "gm_005",
        "Pulls to standing",
        "Pulls up to a standing position holding on",
        [8.0, 10.0, 12.0, 14.0],
    ),
    (
        "gm_006",
        "Walks with support",
        "Takes steps holding hands or furniture",
        [10.0, 12.0, 14.0, 16.0],
    ),
    (
        "gm_007",
        "Walks alone",
        "Walks independently without support",
        [11.0, 13.0, 15.0, 18.0],
    ),
    (
        "gm_008",
        "Climbs stairs",
        "Goes up steps crawling or with support",
        [15.0, 18.0, 21.0, 24.0],
    ),
];

pub fn milestones() -> Vec<Milestone> {
    build(Area::GrossMotor, ROWS)
}
