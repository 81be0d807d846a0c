use clap::Parser;
use clap::error::ErrorKind;

use stai_cli::cli::{Cli, Command};
use stai_core::models::profile::Gender;
use stai_core::models::scale::ScaleType;

#[test]
fn lookup_accepts_the_full_raw_range() {
    for raw in ["0", "60"] {
        let cli = Cli::try_parse_from(["stai", "lookup", "--scale", "state", "--raw", raw]).unwrap();
        match cli.command {
            Command::Lookup { scale, raw: parsed, .. } => {
                assert_eq!(scale, ScaleType::State);
                assert_eq!(parsed.to_string(), raw);
            }
            other => panic!("expected lookup, got {other:?}"),
        }
    }
}

#[test]
fn lookup_rejects_raw_above_sixty() {
    let err = Cli::try_parse_from(["stai", "lookup", "--scale", "state", "--raw", "61"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ValueValidation);

    let err = Cli::try_parse_from(["stai", "lookup", "--scale", "trait", "--raw", "255"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ValueValidation);
}

#[test]
fn lookup_rejects_negative_raw() {
    let err = Cli::try_parse_from(["stai", "lookup", "--scale", "state", "--raw=-1"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ValueValidation);
}

#[test]
fn profile_flags_parse_case_insensitively() {
    let cli = Cli::try_parse_from([
        "stai", "lookup", "--scale", "TRAIT", "--raw", "30", "--gender", "female",
    ])
    .unwrap();
    match cli.command {
        Command::Lookup { scale, profile, .. } => {
            assert_eq!(scale, ScaleType::Trait);
            assert_eq!(profile.gender, Some(Gender::Female));
            assert_eq!(profile.age_group, None);
        }
        other => panic!("expected lookup, got {other:?}"),
    }
}
