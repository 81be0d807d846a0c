use stai_core::ITEM_COUNT;
use stai_core::models::profile::{AgeGroup, Gender, Profile};
use stai_core::models::response::AnswerSheet;
use stai_core::models::result::StaiResult;

use crate::assessment;
use crate::error::InstrumentError;

/// One in-progress administration: the answers collected so far, the
/// selected profile, and the last computed result.
///
/// Any change to answers or profile discards the result, so a result is
/// never shown against a context it was not computed under.
#[derive(Debug, Clone, Default)]
pub struct Session {
    answers: AnswerSheet,
    profile: Profile,
    result: Option<StaiResult>,
}

impl Session {
    pub fn new(profile: Profile) -> Self {
        Self {
            profile,
            ..Self::default()
        }
    }

    pub fn answers(&self) -> &AnswerSheet {
        &self.answers
    }

    pub fn profile(&self) -> Profile {
        self.profile
    }

    pub fn result(&self) -> Option<&StaiResult> {
        self.result.as_ref()
    }

    /// `(answered, total)` for a progress indicator.
    pub fn progress(&self) -> (usize, usize) {
        (self.answers.filled_count(), ITEM_COUNT)
    }

    /// Record or clear the response for item `index`.
    pub fn set_answer(&mut self, index: usize, value: Option<u8>) -> Result<(), InstrumentError> {
        self.answers.set(index, value)?;
        self.invalidate();
        Ok(())
    }

    pub fn set_age_group(&mut self, age_group: AgeGroup) {
        self.profile.age_group = age_group;
        self.invalidate();
    }

    pub fn set_gender(&mut self, gender: Gender) {
        self.profile.gender = gender;
        self.invalidate();
    }

    pub fn set_profile(&mut self, profile: Profile) {
        self.profile = profile;
        self.invalidate();
    }

    /// Score the current answers under the current profile.
    ///
    /// On failure no result is kept; the caller should surface the error
    /// (for missing items, the listed indices) and retry.
    pub fn calculate(&mut self) -> Result<&StaiResult, InstrumentError> {
        match assessment::evaluate(&self.answers, self.profile) {
            Ok(result) => Ok(&*self.result.insert(result)),
            Err(e) => {
                self.result = None;
                if let InstrumentError::MissingItems { missing } = &e {
                    tracing::warn!(count = missing.len(), "cannot score with unanswered items");
                }
                Err(e)
            }
        }
    }

    /// Clear every answer and the result. The profile is kept.
    pub fn reset(&mut self) {
        self.answers.clear();
        self.result = None;
    }

    fn invalidate(&mut self) {
        if self.result.take().is_some() {
            tracing::debug!("discarded result after input change");
        }
    }
}
