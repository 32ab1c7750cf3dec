// experiment/curve.rs
// Samples potential against one independent variable for plotting

use super::formula::{bridge_base_potential, bridge_potential, electrolysis_potential, nernst_potential};
use super::types::{Curve, CurvePoint, ExperimentArchetype, ValidatedConditions};
use crate::config::CONCENTRATION_FLOOR_M;

/// Range of the independent variable, `(lower, upper)`.
pub fn domain(conditions: &ValidatedConditions) -> (f64, f64) {
    match *conditions {
        ValidatedConditions::Galvanic {
            anode_concentration,
            cathode_concentration,
            ..
        } => (CONCENTRATION_FLOOR_M, anode_concentration.max(cathode_concentration)),
        ValidatedConditions::Electrolysis { elapsed_time, .. } => (0.0, elapsed_time),
        ValidatedConditions::IonicBridge { distance, .. } => (0.0, distance),
    }
}

/// Potential at one value of the independent variable, using the same
/// expressions as the scalar evaluation.
pub fn potential_at(conditions: &ValidatedConditions, x: f64) -> f64 {
    match *conditions {
        ValidatedConditions::Galvanic {
            anode_potential,
            cathode_potential,
            electron_count,
            anode_concentration,
            ..
        } => nernst_potential(
            cathode_potential - anode_potential,
            electron_count,
            x / anode_concentration,
        ),
        ValidatedConditions::Electrolysis {
            required_voltage,
            applied_voltage,
            ..
        } => electrolysis_potential(applied_voltage - required_voltage, x),
        ValidatedConditions::IonicBridge {
            resistance_factor,
            ion_concentration,
            conductivity,
            ..
        } => bridge_potential(
            bridge_base_potential(resistance_factor, ion_concentration, conductivity),
            x,
        ),
    }
}

/// Linearly spaced samples over the kind's domain, `step_count + 1` points.
///
/// A `step_count` of zero is treated as one so both endpoints are present.
pub fn sample(archetype: &ExperimentArchetype, conditions: &ValidatedConditions, step_count: usize) -> Curve {
    let steps = step_count.max(1);
    let (lower, upper) = domain(conditions);
    let span = upper - lower;

    let points = (0..=steps)
        .map(|i| {
            let x = lower + (i as f64 / steps as f64) * span;
            CurvePoint {
                x,
                y: potential_at(conditions, x),
            }
        })
        .collect();

    Curve {
        axis_label: archetype.independent_axis_label().to_string(),
        points,
    }
}
