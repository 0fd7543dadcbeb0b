use haizea_core::models::milestone::{Area, Milestone};

use super::{Row, build};

/// Language and communication area of the Haizea-Llevant table.
const ROWS: &[Row] = &[
    (
        "lang_001",
        "Makes guttural sounds",
        "Produces throaty sounds and coos",
        [1.0, 2.0, 3.0, 4.0],
    ),
    (
        "lang_002",
        "Laughs out loud",
        "Produces audible, expressive laughter",
        [2.5, 4.0, 5.5, 7.0],
    ),
    (
        "lang_003",
        "Babbles",
        "Produces repeated consonant-vowel sounds (ba-ba, ma-ma)",
        [4.0, 6.0, 8.0, 10.0],
    ),
    (
        "lang_004",
        "Says mama or papa",
        "Says mama or papa with specific intent",
        [8.0, 11.0, 14.0, 17.0],
    ),
    (
        "lang_005",
        "Understands simple commands",
        "Understands and follows simple instructions such as \"come here\"",
        [9.0, 12.0, 15.0, 18.0],
    ),
    (
        "lang_006",
        "Says two to three words",
        "Uses a vocabulary of two to three meaningful words",
        [12.0, 15.0, 18.0, 21.0],
    ),
    (
        "lang_007",
        "Combines two words",
        "Joins two words into simple phrases",
        [18.0, 21.0, 24.0, 30.0],
    ),
];

pub fn milestones() -> Vec<Milestone> {
    build(Area::Language, ROWS)
}
