use haizea_core::models::milestone::{Area, Milestone};

use super::{Row, build};

/// Socialization area of the Haizea-Llevant table.
const ROWS: &[Row] = &[
    (
        "soc_001",
        "Smiles spontaneously",
        "Smiles without external stimulation, of their own accord",
        [1.5, 2.0, 2.5, 3.0],
    ),
    (
        "soc_002",
        "Smiles in response",
        "Smiles back at an adult's smile",
        [1.0, 1.5, 2.0, 2.5],
    ),
    (
        "soc_003",
        "Recognizes primary caregiver",
        "Shows clear preference for the mother or primary caregiver",
        [2.0, 3.0, 4.0, 5.0],
    ),
    (
        "soc_004",
        "Responds to own name",
        "Turns or responds when called by name",
        [7.0, 9.0, 11.0, 13.0],
    ),
    (
        "soc_005",
        "Wary of strangers",
        "Shows caution or anxiety around unfamiliar people",
        [6.0, 8.0, 10.0, 12.0],
    ),
    (
        "soc_006",
        "Plays with other children",
        "Interacts and plays cooperatively with other children",
        [15.0, 18.0, 21.0, 24.0],
    ),
];

pub fn milestones() -> Vec<Milestone> {
    build(Area::Socialization, ROWS)
}
