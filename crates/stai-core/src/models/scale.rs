use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// The two STAI subscales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum ScaleType {
    /// A/E: how the subject feels right now. Items 1–20.
    State,
    /// A/R: how the subject feels in general. Items 21–40.
    Trait,
}

impl ScaleType {
    pub const ALL: [ScaleType; 2] = [ScaleType::State, ScaleType::Trait];

    pub fn as_str(&self) -> &'static str {
        match self {
            ScaleType::State => "STATE",
            ScaleType::Trait => "TRAIT",
        }
    }

    /// The scale an item index (1–40) belongs to.
    pub fn of_item(index: usize) -> Result<Self, CoreError> {
        match index {
            1..=20 => Ok(ScaleType::State),
            21..=40 => Ok(ScaleType::Trait),
            other => Err(CoreError::InvalidItemIndex(other)),
        }
    }
}

impl fmt::Display for ScaleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScaleType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "STATE" | "A/E" => Ok(ScaleType::State),
            "TRAIT" | "A/R" => Ok(ScaleType::Trait),
            _ => Err(CoreError::UnknownVariant {
                kind: "scale",
                value: s.to_string(),
            }),
        }
    }
}
