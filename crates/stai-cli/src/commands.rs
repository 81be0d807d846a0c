use std::fmt::Write as _;
use std::path::Path;

use eyre::WrapErr;

use stai_core::models::profile::{AgeGroup, Gender, Profile};
use stai_core::models::response::AnswerSheet;
use stai_core::models::scale::ScaleType;
use stai_instruments::error::InstrumentError;
use stai_instruments::instruments::stai::Stai;
use stai_instruments::session::Session;
use stai_instruments::{interpretation, norms, Instrument};

/// How `score` prints its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    Report,
}

/// Apply per-run overrides on top of the configured profile.
pub fn resolve_profile(base: Profile, age_group: Option<AgeGroup>, gender: Option<Gender>) -> Profile {
    Profile {
        age_group: age_group.unwrap_or(base.age_group),
        gender: gender.unwrap_or(base.gender),
    }
}

/// Read an answers file: a JSON object keyed by item index.
pub fn load_answers(path: &Path) -> eyre::Result<AnswerSheet> {
    let contents = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read answers at {}", path.display()))?;
    let sheet: AnswerSheet = serde_json::from_str(&contents)
        .wrap_err_with(|| format!("invalid answers file {}", path.display()))?;
    tracing::debug!(filled = sheet.filled_count(), "loaded answers");
    Ok(sheet)
}

/// Turn an instrument error into a report that says whose problem it is.
fn report(e: InstrumentError) -> eyre::Report {
    if e.is_user_correctable() {
        eyre::Report::new(e).wrap_err("please complete the questionnaire and retry")
    } else {
        eyre::Report::new(e).wrap_err("reference data defect")
    }
}

pub fn score(
    answers: &AnswerSheet,
    profile: Profile,
    format: OutputFormat,
    template: Option<&Path>,
) -> eyre::Result<String> {
    let mut session = Session::new(profile);
    for (index, response) in answers.iter() {
        session
            .set_answer(index, response.map(|r| r.value()))
            .map_err(report)?;
    }

    let result = *session.calculate().map_err(report)?;
    tracing::info!(
        state = result.raw_score_state,
        trait_score = result.raw_score_trait,
        %profile,
        "scored administration"
    );

    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&result)?),
        OutputFormat::Report => {
            let rendered = match template {
                Some(path) => stai_export::render::render_report_file(path, &result, profile)?,
                None => stai_export::render::render_default(&result, profile)?,
            };
            Ok(rendered)
        }
    }
}

pub fn lookup(raw_score: u8, profile: Profile, scale: ScaleType) -> eyre::Result<String> {
    let norms = norms::lookup_norm(raw_score, profile.age_group, profile.gender, scale)
        .map_err(report)?;
    let label = &interpretation::interpret(norms.decatype).map_err(report)?.label;
    Ok(format!(
        "{scale} {profile} raw {raw_score}: percentile {}, decatype {} ({label})",
        norms.percentile, norms.decatype
    ))
}

/// Validate all compiled-in reference data.
pub fn validate() -> eyre::Result<String> {
    let table = norms::builtin().map_err(report)?;
    interpretation::validate(interpretation::bands()).map_err(report)?;
    Ok(format!(
        "normative table ok ({} bands), interpretation bands ok",
        table.bands().count()
    ))
}

/// Each subscale with its raw range, then one line per item with a `*`
/// for reversed items.
pub fn items() -> String {
    let mut out = String::new();
    for subscale in Stai.subscales() {
        let _ = writeln!(
            out,
            "{} (items {}-{}, raw {}-{})",
            subscale.name,
            subscale.first_item,
            subscale.last_item,
            subscale.range.min,
            subscale.range.max
        );
        let _ = writeln!(out, "  {}", subscale.description);
        for index in subscale.items() {
            let marker = if Stai.is_reversed(index) { " *" } else { "" };
            let _ = writeln!(out, "  {index:>2}{marker}");
        }
    }
    out.push_str("* reverse-scored\n");
    out
}
