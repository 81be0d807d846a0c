use proptest::prelude::*;

use stai_core::models::response::AnswerSheet;
use stai_core::models::profile::{AgeGroup, Gender};
use stai_core::models::scale::ScaleType;
use stai_instruments::instruments::stai::Stai;
use stai_instruments::norms::lookup_norm;
use stai_instruments::Instrument;

fn sheet_from(values: &[u8]) -> AnswerSheet {
    let mut sheet = AnswerSheet::new();
    for (i, v) in values.iter().enumerate() {
        sheet.set(i + 1, Some(*v)).unwrap();
    }
    sheet
}

fn age_group() -> impl Strategy<Value = AgeGroup> {
    prop_oneof![Just(AgeGroup::Adolescent), Just(AgeGroup::Adult)]
}

fn gender() -> impl Strategy<Value = Gender> {
    prop_oneof![Just(Gender::Male), Just(Gender::Female)]
}

fn scale() -> impl Strategy<Value = ScaleType> {
    prop_oneof![Just(ScaleType::State), Just(ScaleType::Trait)]
}

proptest! {
    #[test]
    fn complete_sheets_score_within_bounds(values in proptest::collection::vec(0u8..=3, 40)) {
        let raw = Stai.score(&sheet_from(&values)).unwrap();
        prop_assert!(Stai.subscale(ScaleType::State).unwrap().range.contains(raw.state));
        prop_assert!(Stai.subscale(ScaleType::Trait).unwrap().range.contains(raw.trait_));
    }

    #[test]
    fn raw_score_matches_manual_sum(values in proptest::collection::vec(0u8..=3, 40)) {
        let raw = Stai.score(&sheet_from(&values)).unwrap();
        let contribution = |i: usize| {
            let v = values[i - 1];
            if Stai.is_reversed(i) { 3 - v } else { v }
        };
        prop_assert_eq!(raw.state, (1..=20).map(contribution).sum::<u8>());
        prop_assert_eq!(raw.trait_, (21..=40).map(contribution).sum::<u8>());
    }

    #[test]
    fn any_dropped_item_is_reported(
        values in proptest::collection::vec(0u8..=3, 40),
        dropped in proptest::collection::btree_set(1usize..=40, 1..6),
    ) {
        let mut sheet = sheet_from(&values);
        for index in &dropped {
            sheet.set(*index, None).unwrap();
        }
        match Stai.score(&sheet) {
            Err(stai_instruments::error::InstrumentError::MissingItems { missing }) => {
                prop_assert_eq!(missing, dropped.into_iter().collect::<Vec<_>>());
            }
            other => prop_assert!(false, "expected MissingItems, got {:?}", other),
        }
    }

    #[test]
    fn every_valid_raw_score_resolves(
        raw in 0u8..=60,
        age_group in age_group(),
        gender in gender(),
        scale in scale(),
    ) {
        let first = lookup_norm(raw, age_group, gender, scale).unwrap();
        let second = lookup_norm(raw, age_group, gender, scale).unwrap();
        prop_assert_eq!(first, second);
        prop_assert!((1..=10).contains(&first.decatype));
        prop_assert!(first.percentile <= 100);
    }
}
