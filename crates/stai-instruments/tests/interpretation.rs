use stai_instruments::interpretation::{self, bands, interpret, Interpretation, Tone};

#[test]
fn builtin_bands_are_contiguous() {
    assert!(interpretation::validate(bands()).is_ok());
}

#[test]
fn every_decatype_has_a_label() {
    for decatype in 1..=10 {
        assert!(interpret(decatype).is_ok(), "decatype {decatype}");
    }
    assert!(interpret(0).is_err());
    assert!(interpret(11).is_err());
}

#[test]
fn extremes_map_to_extreme_tones() {
    assert_eq!(interpret(1).unwrap().tone, Tone::VeryLow);
    assert_eq!(interpret(5).unwrap().label, "Average");
    assert_eq!(interpret(7).unwrap().tone, Tone::High);
    assert_eq!(interpret(10).unwrap().tone, Tone::VeryHigh);
}

fn custom(min: u8, max: u8) -> Interpretation {
    Interpretation {
        min,
        max,
        label: format!("{min}-{max}"),
        tone: Tone::Average,
        description: String::new(),
    }
}

#[test]
fn gaps_and_short_coverage_are_rejected() {
    assert!(interpretation::validate(&[custom(1, 4), custom(6, 10)]).is_err());
    assert!(interpretation::validate(&[custom(1, 4), custom(5, 9)]).is_err());
    assert!(interpretation::validate(&[custom(1, 10)]).is_ok());
    assert!(interpretation::validate(&[custom(1, 5), custom(4, 10)]).is_err());
}
