use haizea_core::models::milestone::{Area, Milestone};

use super::{Row, build};

/// Problem solving area of the Haizea-Llevant table.
const ROWS: &[Row] = &[
    (
        "ps_001",
        "Looks for dropped object",
        "Looks down when an object is dropped",
        [3.0, 5.0, 7.0, 9.0],
    ),
    (
        "ps_002",
        "Finds hidden object",
        "Searches for and finds a partially covered object",
        [6.0, 8.0, 10.0, 12.0],
    ),
    (
        "ps_003",
        "Imitates gestures",
        "Copies simple gestures such as clapping or waving goodbye",
        [8.0, 10.0, 12.0, 14.0],
    ),
    (
        "ps_004",
        "Uses objects functionally",
        "Uses objects for their purpose, such as a spoon for eating",
        [11.0, 14.0, 17.0, 20.0],
    ),
    (
        "ps_005",
        "Solves simple problems",
        "Works out solutions to basic problems such as reaching a toy",
        [15.0, 18.0, 21.0, 24.0],
    ),
];

pub fn milestones() -> Vec<Milestone> {
    build(Area::ProblemSolving, ROWS)
}
