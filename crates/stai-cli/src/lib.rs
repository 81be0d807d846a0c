//! stai-cli library root.
//!
//! Re-exports internal modules so that integration tests can exercise
//! argument parsing and the commands directly.

pub mod cli;
pub mod commands;
pub mod config;
