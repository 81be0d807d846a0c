use stai_core::models::profile::{AgeGroup, Gender, Profile};
use stai_core::models::response::AnswerSheet;
use stai_core::models::result::NormResult;
use stai_instruments::assessment::{evaluate, evaluate_with};
use stai_instruments::error::InstrumentError;
use stai_instruments::instruments::stai::Stai;
use stai_instruments::norms::NormTable;
use stai_instruments::session::Session;

fn completed_session(profile: Profile, value: u8) -> Session {
    let mut session = Session::new(profile);
    for index in 1..=40 {
        session.set_answer(index, Some(value)).unwrap();
    }
    session
}

#[test]
fn evaluate_assembles_both_scales() {
    let mut sheet = AnswerSheet::new();
    for index in 1..=40 {
        sheet.set(index, Some(0)).unwrap();
    }
    let result = evaluate(&sheet, Profile::default()).unwrap();
    assert_eq!(result.raw_score_state, 30);
    assert_eq!(result.raw_score_trait, 21);
    assert_eq!(result.state_norms, NormResult { percentile: 80, decatype: 7 });
    assert_eq!(result.trait_norms, NormResult { percentile: 55, decatype: 6 });
}

#[test]
fn evaluate_does_not_consult_table_when_items_missing() {
    // An empty table would fail every lookup; missing items must win.
    let empty = NormTable::unchecked(vec![]);
    let err = evaluate_with(&Stai, &empty, &AnswerSheet::new(), Profile::default()).unwrap_err();
    assert!(matches!(err, InstrumentError::MissingItems { .. }));
}

#[test]
fn evaluate_surfaces_table_defects() {
    let empty = NormTable::unchecked(vec![]);
    let mut sheet = AnswerSheet::new();
    for index in 1..=40 {
        sheet.set(index, Some(2)).unwrap();
    }
    let err = evaluate_with(&Stai, &empty, &sheet, Profile::default()).unwrap_err();
    assert!(matches!(err, InstrumentError::NoMatchingBand { .. }));
}

#[test]
fn calculate_caches_result() {
    let mut session = completed_session(Profile::default(), 0);
    let result = *session.calculate().unwrap();
    assert_eq!(session.result(), Some(&result));
    assert_eq!(session.progress(), (40, 40));
}

#[test]
fn changing_gender_discards_result() {
    let mut session = completed_session(Profile::default(), 0);
    session.calculate().unwrap();

    session.set_gender(Gender::Female);
    assert!(session.result().is_none());

    let female = *session.calculate().unwrap();
    assert_eq!(female.state_norms, NormResult { percentile: 75, decatype: 7 });
}

#[test]
fn changing_age_group_discards_result() {
    let mut session = completed_session(Profile::default(), 1);
    session.calculate().unwrap();
    session.set_age_group(AgeGroup::Adolescent);
    assert!(session.result().is_none());
    assert_eq!(session.profile().age_group, AgeGroup::Adolescent);
}

#[test]
fn reselecting_same_profile_still_discards_result() {
    let mut session = completed_session(Profile::default(), 1);
    session.calculate().unwrap();
    session.set_profile(Profile::default());
    assert!(session.result().is_none());
}

#[test]
fn changing_an_answer_discards_result() {
    let mut session = completed_session(Profile::default(), 2);
    let before = *session.calculate().unwrap();

    session.set_answer(5, Some(0)).unwrap();
    assert!(session.result().is_none());

    let after = *session.calculate().unwrap();
    assert_ne!(before.raw_score_state, after.raw_score_state);
}

#[test]
fn invalid_answer_is_rejected_without_touching_result() {
    let mut session = completed_session(Profile::default(), 2);
    session.calculate().unwrap();

    assert!(matches!(
        session.set_answer(41, Some(1)),
        Err(InstrumentError::Core(_))
    ));
    assert!(session.result().is_some());
}

#[test]
fn missing_items_leave_no_result() {
    let mut session = completed_session(Profile::default(), 2);
    session.calculate().unwrap();
    session.set_answer(20, None).unwrap();

    match session.calculate() {
        Err(InstrumentError::MissingItems { missing }) => assert_eq!(missing, vec![20]),
        other => panic!("expected MissingItems, got {other:?}"),
    }
    assert!(session.result().is_none());
    assert_eq!(session.progress(), (39, 40));
}

#[test]
fn reset_clears_answers_and_result_but_keeps_profile() {
    let profile = Profile::new(AgeGroup::Adolescent, Gender::Female);
    let mut session = completed_session(profile, 3);
    session.calculate().unwrap();

    session.reset();
    assert!(session.result().is_none());
    assert_eq!(session.progress(), (0, 40));
    assert_eq!(session.profile(), profile);
}
