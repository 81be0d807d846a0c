//! stai-export
//!
//! Text/Markdown reports for a scored administration, rendered from Tera
//! templates.

pub mod error;
pub mod render;
