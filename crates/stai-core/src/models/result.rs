use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Raw subscale totals after reverse scoring. Each lies in 0..=60.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RawScores {
    pub state: u8,
    #[serde(rename = "trait")]
    pub trait_: u8,
}

/// Normative position of a raw score within the subject's profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NormResult {
    pub percentile: u8,
    /// Standardized band, 1–10.
    pub decatype: u8,
}

/// The full outcome of one administration.
///
/// Never mutated after construction; a changed profile or answer set
/// produces a fresh value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct StaiResult {
    pub raw_score_state: u8,
    pub raw_score_trait: u8,
    pub state_norms: NormResult,
    pub trait_norms: NormResult,
}
