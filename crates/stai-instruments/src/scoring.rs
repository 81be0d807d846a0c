use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use stai_core::models::response::AnswerSheet;
use stai_core::models::result::RawScores;
use stai_core::models::scale::ScaleType;

use crate::error::InstrumentError;

/// Inclusive integer bounds for a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreRange {
    pub min: u8,
    pub max: u8,
}

impl ScoreRange {
    pub fn contains(&self, value: u8) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// A subscale definition: which items it sums and which of them are
/// reverse-scored.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Subscale {
    pub name: String,
    pub scale: ScaleType,
    /// First item index (1-based, inclusive).
    pub first_item: usize,
    /// Last item index (inclusive).
    pub last_item: usize,
    pub reversed: Vec<usize>,
    /// Bounds of the raw total.
    pub range: ScoreRange,
    pub description: String,
}

impl Subscale {
    pub fn items(&self) -> RangeInclusive<usize> {
        self.first_item..=self.last_item
    }

    pub fn contains(&self, index: usize) -> bool {
        self.items().contains(&index)
    }
}

/// Sum one subscale, collecting unanswered indices into `missing`.
fn subscale_total(subscale: &Subscale, answers: &AnswerSheet, missing: &mut Vec<usize>) -> u8 {
    let mut total = 0u8;
    for index in subscale.items() {
        match answers.get(index) {
            Ok(Some(response)) if subscale.reversed.contains(&index) => {
                total += response.reversed();
            }
            Ok(Some(response)) => total += response.value(),
            Ok(None) | Err(_) => missing.push(index),
        }
    }
    total
}

/// Score both subscales. Fails with every unanswered index across both
/// ranges; a partial total is never returned.
pub fn score(
    state: &Subscale,
    trait_: &Subscale,
    answers: &AnswerSheet,
) -> Result<RawScores, InstrumentError> {
    let mut missing = Vec::new();
    let state_raw = subscale_total(state, answers, &mut missing);
    let trait_raw = subscale_total(trait_, answers, &mut missing);

    if !missing.is_empty() {
        missing.sort_unstable();
        missing.dedup();
        return Err(InstrumentError::MissingItems { missing });
    }

    tracing::debug!(state_raw, trait_raw, "scored answer sheet");
    Ok(RawScores {
        state: state_raw,
        trait_: trait_raw,
    })
}
