// plotting/export.rs
// Text export of sampled curves

use serde::Serialize;
use thiserror::Error;

use super::{ExportFormat, POTENTIAL_AXIS_LABEL};
use crate::engine::Evaluation;
use crate::experiment::Curve;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Serialize)]
struct CurveDocument<'a> {
    archetype_id: &'a str,
    y_axis_label: &'static str,
    #[serde(flatten)]
    curve: &'a Curve,
}

/// Render the curve of an evaluation. Returns the document; writing it is up to the caller.
pub fn export_curve(evaluation: &Evaluation, format: ExportFormat) -> Result<String, ExportError> {
    match format {
        ExportFormat::Csv => Ok(export_delimited(evaluation, ',')),
        ExportFormat::Tsv => Ok(export_delimited(evaluation, '\t')),
        ExportFormat::Json => export_json(evaluation),
    }
}

fn export_delimited(evaluation: &Evaluation, separator: char) -> String {
    let curve = &evaluation.curve;
    let mut content = String::new();

    // Header
    content.push_str("# Curve Export\n");
    content.push_str(&format!("# Experiment: {}\n", evaluation.archetype_id));
    content.push_str(&format!("# X: {}\n", curve.axis_label));
    content.push_str(&format!("# Y: {}\n", POTENTIAL_AXIS_LABEL));
    content.push_str(&format!("# Points: {}\n", curve.len()));

    content.push_str(&format!("x{}potential_v\n", separator));
    for point in &curve.points {
        content.push_str(&format!("{}{}{}\n", point.x, separator, point.y));
    }

    content
}

fn export_json(evaluation: &Evaluation) -> Result<String, ExportError> {
    let document = CurveDocument {
        archetype_id: &evaluation.archetype_id,
        y_axis_label: POTENTIAL_AXIS_LABEL,
        curve: &evaluation.curve,
    };
    Ok(serde_json::to_string_pretty(&document)?)
}
