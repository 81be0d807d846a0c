use thiserror::Error;

use stai_core::error::CoreError;
use stai_core::models::profile::{AgeGroup, Gender};
use stai_core::models::scale::ScaleType;

use crate::norms::NormKey;

#[derive(Debug, Error)]
pub enum InstrumentError {
    /// Scoring was attempted with unanswered items. Recoverable by the
    /// caller collecting the listed indices and retrying.
    #[error("missing responses for items: {}", join_indices(.missing))]
    MissingItems { missing: Vec<usize> },

    /// The normative table has no band for this score. Always a data
    /// defect, never a user error.
    #[error("no normative band covers raw score {raw_score} ({scale}, {age_group}, {gender})")]
    NoMatchingBand {
        raw_score: u8,
        age_group: AgeGroup,
        gender: Gender,
        scale: ScaleType,
    },

    #[error("invalid normative table: {0}")]
    InvalidNormTable(#[from] NormTableError),

    #[error("invalid interpretation bands: {0}")]
    InvalidInterpretation(String),

    #[error("instrument '{instrument_id}' has no {scale} subscale")]
    UnknownSubscale {
        instrument_id: String,
        scale: ScaleType,
    },

    #[error(transparent)]
    Core(#[from] CoreError),
}

impl InstrumentError {
    /// Whether the subject (or operator) can fix this by changing input.
    pub fn is_user_correctable(&self) -> bool {
        matches!(self, InstrumentError::MissingItems { .. } | InstrumentError::Core(_))
    }
}

/// Structural defects found while validating a normative table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormTableError {
    #[error("no bands for partition {0}")]
    MissingPartition(NormKey),

    #[error("{key}: band {min}..={max} is inverted")]
    InvertedBand { key: NormKey, min: u8, max: u8 },

    #[error("{key}: band {min}..={max} extends past the raw score domain 0..={limit}")]
    OutOfDomain {
        key: NormKey,
        min: u8,
        max: u8,
        limit: u8,
    },

    #[error("{key}: raw scores {from}..={to} are not covered")]
    Gap { key: NormKey, from: u8, to: u8 },

    #[error("{key}: raw score {at} is covered by more than one band")]
    Overlap { key: NormKey, at: u8 },

    #[error("{key}: percentile {percentile} is outside 0..=100")]
    PercentileOutOfRange { key: NormKey, percentile: u8 },

    #[error("{key}: decatype {decatype} is outside 1..=10")]
    DecatypeOutOfRange { key: NormKey, decatype: u8 },

    #[error("{key}: percentile decreases at raw score {at}")]
    NonMonotonic { key: NormKey, at: u8 },

    #[error("{key}: decatype decreases at raw score {at}")]
    NonMonotonicDecatype { key: NormKey, at: u8 },
}

fn join_indices(indices: &[usize]) -> String {
    indices
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
