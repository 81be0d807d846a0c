use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::{ITEM_COUNT, MAX_RESPONSE};

/// A single item response on the 0–3 Likert scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Response(u8);

impl Response {
    pub fn new(value: u8) -> Option<Self> {
        (value <= MAX_RESPONSE).then_some(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// The contribution of this response when the item is reverse-scored.
    pub fn reversed(self) -> u8 {
        MAX_RESPONSE - self.0
    }
}

/// The 40 item slots of one administration, 1-indexed.
///
/// Serialized as a JSON object keyed by item index, e.g.
/// `{"1": 2, "2": null}`. Indices that are not listed are unanswered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<usize, Option<u8>>",
    into = "BTreeMap<usize, Option<u8>>"
)]
pub struct AnswerSheet {
    slots: [Option<Response>; ITEM_COUNT],
}

impl Default for AnswerSheet {
    fn default() -> Self {
        Self {
            slots: [None; ITEM_COUNT],
        }
    }
}

impl AnswerSheet {
    pub fn new() -> Self {
        Self::default()
    }

    fn offset(index: usize) -> Result<usize, CoreError> {
        if (1..=ITEM_COUNT).contains(&index) {
            Ok(index - 1)
        } else {
            Err(CoreError::InvalidItemIndex(index))
        }
    }

    /// Record a response for `index`, or clear it with `None`.
    pub fn set(&mut self, index: usize, value: Option<u8>) -> Result<(), CoreError> {
        let offset = Self::offset(index)?;
        self.slots[offset] = match value {
            Some(v) => Some(Response::new(v).ok_or(CoreError::InvalidResponse { index, value: v })?),
            None => None,
        };
        Ok(())
    }

    pub fn get(&self, index: usize) -> Result<Option<Response>, CoreError> {
        Ok(self.slots[Self::offset(index)?])
    }

    /// Iterate `(index, response)` pairs in item order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, Option<Response>)> + '_ {
        self.slots.iter().enumerate().map(|(i, r)| (i + 1, *r))
    }

    pub fn filled_count(&self) -> usize {
        self.slots.iter().filter(|r| r.is_some()).count()
    }

    /// Unanswered indices, ascending.
    pub fn missing(&self) -> Vec<usize> {
        self.iter()
            .filter_map(|(index, r)| r.is_none().then_some(index))
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    pub fn clear(&mut self) {
        self.slots = [None; ITEM_COUNT];
    }
}

impl TryFrom<BTreeMap<usize, Option<u8>>> for AnswerSheet {
    type Error = CoreError;

    fn try_from(map: BTreeMap<usize, Option<u8>>) -> Result<Self, Self::Error> {
        let mut sheet = AnswerSheet::default();
        for (index, value) in map {
            sheet.set(index, value)?;
        }
        Ok(sheet)
    }
}

impl From<AnswerSheet> for BTreeMap<usize, Option<u8>> {
    fn from(sheet: AnswerSheet) -> Self {
        sheet
            .iter()
            .map(|(index, r)| (index, r.map(Response::value)))
            .collect()
    }
}
