use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use stai_core::models::profile::{AgeGroup, Gender};
use stai_core::models::scale::ScaleType;
use stai_instruments::norms::MAX_RAW_SCORE;

use crate::commands::OutputFormat;

#[derive(Debug, Parser)]
#[command(name = "stai", version, about = "Score the State-Trait Anxiety Inventory")]
pub struct Cli {
    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Directory holding config.json.
    #[arg(long, global = true, env = "STAI_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Args)]
pub struct ProfileArgs {
    #[arg(long)]
    pub age_group: Option<AgeGroup>,

    #[arg(long)]
    pub gender: Option<Gender>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Score an answers file (JSON object keyed by item index 1-40).
    Score {
        #[arg(long)]
        answers: PathBuf,

        #[command(flatten)]
        profile: ProfileArgs,

        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,

        /// Tera template for `--format report`.
        #[arg(long)]
        template: Option<PathBuf>,
    },
    /// Look up the norms for a single raw score.
    Lookup {
        #[arg(long)]
        scale: ScaleType,

        /// Raw subscale total, 0-60.
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=i64::from(MAX_RAW_SCORE)))]
        raw: u8,

        #[command(flatten)]
        profile: ProfileArgs,
    },
    /// Validate the built-in normative table and interpretation bands.
    Validate,
    /// List the items and which of them are reverse-scored.
    Items,
    /// Show or change the saved defaults.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    Show,
    Set {
        #[command(flatten)]
        profile: ProfileArgs,

        #[arg(long)]
        template: Option<PathBuf>,
    },
    Delete,
}
