use std::path::Path;

use serde::Serialize;
use tera::{Context, Tera};

use stai_core::models::profile::Profile;
use stai_core::models::result::{NormResult, StaiResult};
use stai_core::models::scale::ScaleType;
use stai_instruments::instruments::stai::Stai;
use stai_instruments::interpretation::{self, Interpretation};
use stai_instruments::Instrument;

use crate::error::ExportError;

/// Built-in Markdown report template.
pub const DEFAULT_TEMPLATE: &str = include_str!("../templates/report.md.tera");

const DEFAULT_TEMPLATE_NAME: &str = "report.md";

/// Everything a report template can address by name.
#[derive(Debug, Clone, Serialize)]
pub struct ReportContext {
    pub instrument: String,
    pub profile: Profile,
    pub result: StaiResult,
    pub scales: Vec<ScaleSummary>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScaleSummary {
    pub scale: ScaleType,
    pub name: String,
    pub raw: u8,
    pub percentile: u8,
    pub decatype: u8,
    pub interpretation: Interpretation,
}

impl ReportContext {
    pub fn new(result: &StaiResult, profile: Profile) -> Result<Self, ExportError> {
        let scales = [
            (ScaleType::State, result.raw_score_state, result.state_norms),
            (ScaleType::Trait, result.raw_score_trait, result.trait_norms),
        ]
        .into_iter()
        .map(|(scale, raw, norms)| summarize(scale, raw, norms))
        .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            instrument: Stai.name().to_string(),
            profile,
            result: *result,
            scales,
        })
    }
}

fn summarize(scale: ScaleType, raw: u8, norms: NormResult) -> Result<ScaleSummary, ExportError> {
    Ok(ScaleSummary {
        scale,
        name: Stai.subscale(scale)?.name.clone(),
        raw,
        percentile: norms.percentile,
        decatype: norms.decatype,
        interpretation: interpretation::interpret(norms.decatype)?.clone(),
    })
}

/// Render a Tera template against a scored result.
///
/// The `template_content` is the raw template string (Jinja2 syntax).
/// The [`ReportContext`] fields become the template context variables.
pub fn render_report(
    template_name: &str,
    template_content: &str,
    result: &StaiResult,
    profile: Profile,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(ReportContext::new(result, profile)?)?;
    let context = Context::from_value(value)
        .map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(template_name, &context)?;
    tracing::debug!(template = template_name, bytes = rendered.len(), "rendered report");
    Ok(rendered)
}

pub fn render_default(result: &StaiResult, profile: Profile) -> Result<String, ExportError> {
    render_report(DEFAULT_TEMPLATE_NAME, DEFAULT_TEMPLATE, result, profile)
}

/// Render a user-supplied template file.
pub fn render_report_file(
    path: &Path,
    result: &StaiResult,
    profile: Profile,
) -> Result<String, ExportError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ExportError::TemplateNotFound(path.display().to_string()));
        }
        Err(e) => return Err(e.into()),
    };
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_TEMPLATE_NAME.to_string());
    render_report(&name, &content, result, profile)
}
