use clap::Parser;
use eyre::Result;

use stai_cli::cli::{Cli, Command, ConfigAction};
use stai_cli::commands;
use stai_cli::config;

fn init_tracing(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    let dir = config::config_dir(cli.config_dir.as_deref())?;

    match cli.command {
        Command::Score {
            answers,
            profile,
            format,
            template,
        } => {
            let cfg = config::load_or_default(&dir)?;
            let profile = commands::resolve_profile(cfg.default_profile, profile.age_group, profile.gender);
            let template = template.or(cfg.report_template);
            let sheet = commands::load_answers(&answers)?;
            println!("{}", commands::score(&sheet, profile, format, template.as_deref())?);
        }
        Command::Lookup {
            scale,
            raw,
            profile,
        } => {
            let cfg = config::load_or_default(&dir)?;
            let profile = commands::resolve_profile(cfg.default_profile, profile.age_group, profile.gender);
            println!("{}", commands::lookup(raw, profile, scale)?);
        }
        Command::Validate => println!("{}", commands::validate()?),
        Command::Items => print!("{}", commands::items()),
        Command::Config { action } => match action {
            ConfigAction::Show => {
                let cfg = config::load_or_default(&dir)?;
                println!("{}", serde_json::to_string_pretty(&cfg)?);
            }
            ConfigAction::Set { profile, template } => {
                let mut cfg = config::load_or_default(&dir)?;
                cfg.default_profile =
                    commands::resolve_profile(cfg.default_profile, profile.age_group, profile.gender);
                if template.is_some() {
                    cfg.report_template = template;
                }
                config::save_config(&dir, &cfg)?;
            }
            ConfigAction::Delete => config::delete_config(&dir)?,
        },
    }

    Ok(())
}
