use stai_core::models::scale::ScaleType;

use crate::norms::MAX_RAW_SCORE;
use crate::scoring::{ScoreRange, Subscale};
use crate::Instrument;

/// Reverse-scored State (A/E) items: worded in the calm direction.
pub const REVERSED_STATE: [usize; 10] = [1, 2, 5, 8, 10, 11, 15, 16, 19, 20];

/// Reverse-scored Trait (A/R) items.
pub const REVERSED_TRAIT: [usize; 7] = [21, 26, 27, 30, 33, 36, 39];

/// STAI: State-Trait Anxiety Inventory.
/// 40 items rated 0–3, split into two 20-item subscales. Raw totals 0–60.
pub struct Stai;

impl Instrument for Stai {
    fn id(&self) -> &str {
        "stai"
    }

    fn name(&self) -> &str {
        "STAI"
    }

    fn subscales(&self) -> &[Subscale] {
        static SUBSCALES: std::sync::LazyLock<Vec<Subscale>> = std::sync::LazyLock::new(|| {
            vec![
                subscale(
                    ScaleType::State,
                    "State Anxiety (A/E)",
                    1..=20,
                    &REVERSED_STATE,
                    "How the subject feels right now, at this moment",
                ),
                subscale(
                    ScaleType::Trait,
                    "Trait Anxiety (A/R)",
                    21..=40,
                    &REVERSED_TRAIT,
                    "How the subject feels in general, most of the time",
                ),
            ]
        });
        &SUBSCALES
    }
}

fn subscale(
    scale: ScaleType,
    name: &str,
    items: std::ops::RangeInclusive<usize>,
    reversed: &[usize],
    description: &str,
) -> Subscale {
    Subscale {
        name: name.to_string(),
        scale,
        first_item: *items.start(),
        last_item: *items.end(),
        reversed: reversed.to_vec(),
        range: ScoreRange {
            min: 0,
            max: MAX_RAW_SCORE,
        },
        description: description.to_string(),
    }
}
