//! stai-instruments
//!
//! The STAI instrument definition and everything computed from it:
//! reverse-scored raw totals, the normative table and its lookup, result
//! assembly, decatype interpretation, and the questionnaire session that
//! keeps a result from outliving the inputs it was computed under.

pub mod assessment;
pub mod error;
pub mod instruments;
pub mod interpretation;
pub mod norms;
pub mod scoring;
pub mod session;

use stai_core::models::response::AnswerSheet;
use stai_core::models::result::RawScores;
use stai_core::models::scale::ScaleType;

use error::InstrumentError;
use scoring::Subscale;

/// Trait implemented by a scored self-report instrument.
pub trait Instrument: Send + Sync {
    /// Unique identifier for this instrument (e.g., "stai").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "STAI").
    fn name(&self) -> &str;

    /// The subscales this instrument measures, in item order.
    fn subscales(&self) -> &[Subscale];

    fn subscale(&self, scale: ScaleType) -> Result<&Subscale, InstrumentError> {
        self.subscales()
            .iter()
            .find(|s| s.scale == scale)
            .ok_or_else(|| InstrumentError::UnknownSubscale {
                instrument_id: self.id().to_string(),
                scale,
            })
    }

    /// Whether item `index` is reverse-scored on its subscale.
    fn is_reversed(&self, index: usize) -> bool {
        self.subscales()
            .iter()
            .any(|s| s.contains(index) && s.reversed.contains(&index))
    }

    /// Reduce a complete answer sheet to its two raw subscale totals.
    fn score(&self, answers: &AnswerSheet) -> Result<RawScores, InstrumentError> {
        let state = self.subscale(ScaleType::State)?;
        let trait_ = self.subscale(ScaleType::Trait)?;
        scoring::score(state, trait_, answers)
    }
}

