use haizea_analysis::{Band, Status, interpret};
use haizea_core::models::milestone::{Area, Milestone, Percentiles};
use haizea_core::models::session::Outcome;

fn sits_without_support() -> Milestone {
    Milestone {
        id: "gm_003".to_string(),
        label: "Sits without support".to_string(),
        description: "Holds a seated position without any support".to_string(),
        area: Area::GrossMotor,
        percentiles: Percentiles {
            p25: 5.0,
            p50: 7.0,
            p75: 8.5,
            p90: 10.0,
        },
    }
}

#[test]
fn fail_between_p25_and_p50_is_mild_delay() {
    let interp = interpret(&sits_without_support(), 6, Outcome::Fail).unwrap();
    assert_eq!(interp.band, Band::P25ToP50);
    assert_eq!(interp.status, Status::DelayedMild);
    assert_ne!(interp.status, Status::Advanced);
}

#[test]
fn pass_below_p25_is_advanced() {
    let interp = interpret(&sits_without_support(), 4, Outcome::Pass).unwrap();
    assert_eq!(interp.band, Band::BelowP25);
    assert_eq!(interp.status, Status::Advanced);
}

#[test]
fn full_decision_table() {
    // One representative age per band: 4 below, 6 P25-P50, 7 P50-P75,
    // 9 P75-P90, 12 above.
    let cases: [(u32, Outcome, Status); 15] = [
        (4, Outcome::Pass, Status::Advanced),
        (4, Outcome::Partial, Status::Normal),
        (4, Outcome::Fail, Status::DelayedSevere),
        (6, Outcome::Pass, Status::Normal),
        (6, Outcome::Partial, Status::Normal),
        (6, Outcome::Fail, Status::DelayedMild),
        (7, Outcome::Pass, Status::Normal),
        (7, Outcome::Partial, Status::Normal),
        (7, Outcome::Fail, Status::DelayedMild),
        (9, Outcome::Pass, Status::Normal),
        (9, Outcome::Partial, Status::Normal),
        (9, Outcome::Fail, Status::DelayedSignificant),
        (12, Outcome::Pass, Status::Normal),
        (12, Outcome::Partial, Status::Normal),
        (12, Outcome::Fail, Status::DelayedSevere),
    ];
    let milestone = sits_without_support();
    for (age, outcome, expected) in cases {
        let interp = interpret(&milestone, age, outcome).unwrap();
        assert_eq!(
            interp.status, expected,
            "age {age}, outcome {outcome:?} should be {expected:?}"
        );
    }
}

#[test]
fn recommendation_only_for_serious_delay() {
    let milestone = sits_without_support();
    assert!(interpret(&milestone, 9, Outcome::Fail).unwrap().recommendation.is_some());
    assert!(interpret(&milestone, 12, Outcome::Fail).unwrap().recommendation.is_some());
    assert!(interpret(&milestone, 6, Outcome::Fail).unwrap().recommendation.is_none());
    assert!(interpret(&milestone, 4, Outcome::Pass).unwrap().recommendation.is_none());
    assert!(interpret(&milestone, 7, Outcome::Partial).unwrap().recommendation.is_none());
}

#[test]
fn description_names_the_milestone() {
    let interp = interpret(&sits_without_support(), 6, Outcome::Fail).unwrap();
    assert!(interp.description.contains("Sits without support"));
    assert!(interp.description.contains("mild delay"));
}
