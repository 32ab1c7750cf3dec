// summary.rs
// Side-by-side comparison of archetypes evaluated under one input set

use serde::Serialize;
use std::fmt::Write;

use crate::engine::Engine;
use crate::error::ValidationError;
use crate::experiment::{formula, validate, InputSet, KindTag, ScalarResult};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SummaryRow {
    pub id: String,
    pub name: String,
    pub result: Result<ScalarResult, ValidationError>,
}

/// Scalars for every archetype (optionally of one kind) under the same inputs.
/// Rejected archetypes keep their row with the validation error.
pub fn summarize(engine: &Engine, kind: Option<KindTag>, inputs: &InputSet) -> Vec<SummaryRow> {
    engine
        .catalog()
        .iter()
        .filter(|a| kind.map_or(true, |tag| a.kind.tag() == tag))
        .map(|archetype| SummaryRow {
            id: archetype.id.clone(),
            name: archetype.name.clone(),
            result: validate(archetype, inputs).map(|conditions| formula::evaluate(&conditions)),
        })
        .collect()
}

/// Fixed-width text table: name, standard potential, actual potential.
pub fn render_table(rows: &[SummaryRow]) -> String {
    let name_width = rows
        .iter()
        .map(|r| r.name.chars().count())
        .chain(std::iter::once("Cell".len()))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    let _ = writeln!(out, "{:<name_width$}  {:>10}  {:>10}", "Cell", "Standard", "Actual");
    let _ = writeln!(out, "{}", "-".repeat(name_width + 24));
    for row in rows {
        match &row.result {
            Ok(scalars) => {
                let _ = writeln!(
                    out,
                    "{:<name_width$}  {:>8.2} V  {:>8.2} V",
                    row.name, scalars.standard_potential, scalars.actual_potential
                );
            }
            Err(err) => {
                let _ = writeln!(out, "{:<name_width$}  {}", row.name, err);
            }
        }
    }
    out
}
