use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("item index {0} is outside 1..=40")]
    InvalidItemIndex(usize),

    #[error("item {index}: response {value} is outside 0..=3")]
    InvalidResponse { index: usize, value: u8 },

    #[error("unknown {kind}: {value}")]
    UnknownVariant { kind: &'static str, value: String },
}
