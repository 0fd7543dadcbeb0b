use haizea_core::models::milestone::{Area, Milestone};

use super::{Row, build};

/// Fine motor area of the Haizea-Llevant table.
const ROWS: &[Row] = &[
    (
        "fm_001",
        "Tracks objects visually",
        "Follows moving objects with the eyes",
        [0.5, 1.0, 1.5, 2.0],
    ),
    (
        "fm_002",
        "Keeps hands open",
        "Relaxes the hands rather than keeping fists closed",
        [2.0, 3.0, 4.0, 5.0],
    ),
    (
        "fm_003",
        "Reaches for objects",
        "Extends arms and hands toward objects of interest",
        [3.0, 4.0, 5.0, 6.0],
    ),
    (
        "fm_004",
        "Transfers objects",
        "Passes objects from one hand to the other",
        [5.0, 7.0, 9.0, 11.0],
    ),
    (
        "fm_005",
        "Pincer grasp",
        "Picks up small objects with thumb and index finger",
        [8.0, 10.0, 12.0, 14.0],
    ),
    (
        "fm_006",
        "Scribbles",
        "Makes lines or marks with a crayon or pencil",
        [12.0, 15.0, 18.0, 21.0],
    ),
];

pub fn milestones() -> Vec<Milestone> {
    build(Area::FineMotor, ROWS)
}
