use stai_core::models::profile::Profile;
use stai_core::models::response::AnswerSheet;
use stai_core::models::result::StaiResult;
use stai_core::models::scale::ScaleType;

use crate::error::InstrumentError;
use crate::instruments::stai::Stai;
use crate::norms::{self, NormTable};
use crate::Instrument;

/// Score `answers` and resolve both subscales against the built-in norms.
pub fn evaluate(answers: &AnswerSheet, profile: Profile) -> Result<StaiResult, InstrumentError> {
    evaluate_with(&Stai, norms::builtin()?, answers, profile)
}

/// Score `answers` with `instrument` and resolve them against `table`.
///
/// Lookups only run once scoring has succeeded; missing items short-circuit
/// before the table is consulted.
pub fn evaluate_with(
    instrument: &dyn Instrument,
    table: &NormTable,
    answers: &AnswerSheet,
    profile: Profile,
) -> Result<StaiResult, InstrumentError> {
    let raw = instrument.score(answers)?;

    let state_norms = table.lookup(raw.state, profile.age_group, profile.gender, ScaleType::State)?;
    let trait_norms = table.lookup(raw.trait_, profile.age_group, profile.gender, ScaleType::Trait)?;

    Ok(StaiResult {
        raw_score_state: raw.state,
        raw_score_trait: raw.trait_,
        state_norms,
        trait_norms,
    })
}
