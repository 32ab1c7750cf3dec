// experiment/formatter.rs
// Display strings for scalar results

use serde::Serialize;

use super::types::ScalarResult;
use crate::units::{KILOJOULE_SUFFIX, VOLT_SUFFIX};

pub const STANDARD_POTENTIAL_LABEL: &str = "Standard Potential";
pub const ACTUAL_POTENTIAL_LABEL: &str = "Actual Potential";
pub const GIBBS_ENERGY_LABEL: &str = "Gibbs Free Energy";

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FormattedField {
    pub label: &'static str,
    pub value: String,
}

fn rounded(value: f64, suffix: &str) -> String {
    format!("{:.2}{}", value, suffix)
}

/// Rows in display order. The Gibbs row exists only when the kind defines it.
pub fn format_result(result: &ScalarResult) -> Vec<FormattedField> {
    let mut rows = vec![
        FormattedField {
            label: STANDARD_POTENTIAL_LABEL,
            value: rounded(result.standard_potential, VOLT_SUFFIX),
        },
        FormattedField {
            label: ACTUAL_POTENTIAL_LABEL,
            value: rounded(result.actual_potential, VOLT_SUFFIX),
        },
    ];
    if let Some(gibbs) = result.gibbs_free_energy {
        rows.push(FormattedField {
            label: GIBBS_ENERGY_LABEL,
            value: rounded(gibbs, KILOJOULE_SUFFIX),
        });
    }
    rows
}
