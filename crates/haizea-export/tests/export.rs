use haizea_core::models::session::{Outcome, Session};
use haizea_export::{FORMAT_VERSION, export_session, from_json, to_json, verify};
use haizea_norms::dataset;

fn sample_session() -> Session {
    let mut session = Session::new("Ana", 9, "Dr. Ibarra").unwrap();
    session.record("soc_001", Outcome::Pass).unwrap();
    session.record("soc_004", Outcome::Fail).unwrap();
    session.record("gm_003", Outcome::Partial).unwrap();
    session
}

#[test]
fn export_carries_current_format_version() {
    let record = export_session(&sample_session(), dataset());
    assert_eq!(record.format_version, FORMAT_VERSION);
    assert_eq!(record.analysis.evaluated, 3);
}

#[test]
fn json_round_trip_preserves_the_analysis() {
    let record = export_session(&sample_session(), dataset());
    let json = to_json(&record).unwrap();
    let restored = from_json(&json).unwrap();
    assert_eq!(restored.analysis, record.analysis);
    assert_eq!(restored.session.id, record.session.id);
    assert_eq!(restored.format_version, record.format_version);
}

#[test]
fn fresh_export_verifies() {
    let record = export_session(&sample_session(), dataset());
    assert!(verify(&record, dataset()));
}

#[test]
fn tampered_analysis_fails_verification() {
    let mut record = export_session(&sample_session(), dataset());
    record.analysis.outcome_counts.pass += 1;
    assert!(!verify(&record, dataset()));
}
