use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::InstrumentError;

/// Severity tone of a classification band, for display styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Tone {
    VeryLow,
    Low,
    Average,
    High,
    VeryHigh,
}

/// Classification for an inclusive range of decatypes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Interpretation {
    pub min: u8,
    pub max: u8,
    pub label: String,
    pub tone: Tone,
    pub description: String,
}

impl Interpretation {
    pub fn contains(&self, decatype: u8) -> bool {
        (self.min..=self.max).contains(&decatype)
    }
}

static BANDS: LazyLock<Vec<Interpretation>> = LazyLock::new(|| {
    vec![
        band(1, 2, "Very low", Tone::VeryLow, "Anxiety well below the normative group."),
        band(3, 4, "Low", Tone::Low, "Anxiety below the normative mean."),
        band(
            5,
            6,
            "Average",
            Tone::Average,
            "Anxiety within the usual range for the normative group.",
        ),
        band(
            7,
            8,
            "High",
            Tone::High,
            "Anxiety above the normative mean. Follow-up may be warranted.",
        ),
        band(
            9,
            10,
            "Very high",
            Tone::VeryHigh,
            "Anxiety markedly above the normative group. Clinical attention is advisable.",
        ),
    ]
});

fn band(min: u8, max: u8, label: &str, tone: Tone, description: &str) -> Interpretation {
    Interpretation {
        min,
        max,
        label: label.to_string(),
        tone,
        description: description.to_string(),
    }
}

pub fn bands() -> &'static [Interpretation] {
    &BANDS
}

/// Classify a decatype.
pub fn interpret(decatype: u8) -> Result<&'static Interpretation, InstrumentError> {
    bands()
        .iter()
        .find(|b| b.contains(decatype))
        .ok_or_else(|| {
            InstrumentError::InvalidInterpretation(format!("no band covers decatype {decatype}"))
        })
}

/// Check that `bands` tile decatypes 1..=10 in order.
pub fn validate(bands: &[Interpretation]) -> Result<(), InstrumentError> {
    let mut next = 1u8;
    for b in bands {
        if b.min > b.max {
            return Err(InstrumentError::InvalidInterpretation(format!(
                "band '{}' is inverted ({}..={})",
                b.label, b.min, b.max
            )));
        }
        if b.min != next {
            return Err(InstrumentError::InvalidInterpretation(format!(
                "band '{}' starts at {} but decatype {next} is next",
                b.label, b.min
            )));
        }
        next = b.max.saturating_add(1);
    }
    if next != 11 {
        return Err(InstrumentError::InvalidInterpretation(format!(
            "decatypes {next}..=10 are not covered"
        )));
    }
    Ok(())
}
