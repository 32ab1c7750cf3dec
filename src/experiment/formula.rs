// experiment/formula.rs
// Closed-form potentials and Gibbs energy for each experiment kind

use super::types::{ScalarResult, ValidatedConditions};
use crate::units::{joules_to_kilojoules, FARADAY, NERNST_COEFFICIENT_298K};

/// Nernst equation at 298 K: E = E° − (0.0591 / n) · log10(ratio).
pub fn nernst_potential(standard_potential: f64, electron_count: u32, concentration_ratio: f64) -> f64 {
    standard_potential - (NERNST_COEFFICIENT_298K / electron_count as f64) * concentration_ratio.log10()
}

/// Potential of a driven cell scaled by elapsed time.
pub fn electrolysis_potential(overvoltage: f64, elapsed_time: f64) -> f64 {
    overvoltage * elapsed_time
}

/// Bridge potential per unit distance.
pub fn bridge_base_potential(resistance_factor: f64, ion_concentration: f64, conductivity: f64) -> f64 {
    resistance_factor * (ion_concentration / conductivity)
}

pub fn bridge_potential(base_potential: f64, distance: f64) -> f64 {
    base_potential * distance
}

/// ΔG = −n·F·E, in kJ.
pub fn galvanic_gibbs_energy(electron_count: u32, actual_potential: f64) -> f64 {
    joules_to_kilojoules(-(electron_count as f64) * FARADAY * actual_potential)
}

/// ΔG = E·F for the excess voltage, in kJ.
pub fn electrolysis_gibbs_energy(overvoltage: f64) -> f64 {
    joules_to_kilojoules(overvoltage * FARADAY)
}

pub fn evaluate(conditions: &ValidatedConditions) -> ScalarResult {
    match *conditions {
        ValidatedConditions::Galvanic {
            anode_potential,
            cathode_potential,
            electron_count,
            anode_concentration,
            cathode_concentration,
        } => {
            let standard_potential = cathode_potential - anode_potential;
            let actual_potential = nernst_potential(
                standard_potential,
                electron_count,
                anode_concentration / cathode_concentration,
            );
            ScalarResult {
                standard_potential,
                actual_potential,
                gibbs_free_energy: Some(galvanic_gibbs_energy(electron_count, actual_potential)),
            }
        }
        ValidatedConditions::Electrolysis {
            required_voltage,
            applied_voltage,
            ..
        } => {
            let actual_potential = applied_voltage - required_voltage;
            ScalarResult {
                standard_potential: required_voltage,
                actual_potential,
                gibbs_free_energy: Some(electrolysis_gibbs_energy(actual_potential)),
            }
        }
        ValidatedConditions::IonicBridge {
            resistance_factor,
            ion_concentration,
            conductivity,
            distance,
        } => {
            let base = bridge_base_potential(resistance_factor, ion_concentration, conductivity);
            ScalarResult {
                standard_potential: base,
                actual_potential: bridge_potential(base, distance),
                gibbs_free_energy: None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nernst_is_standard_potential_at_unit_ratio() {
        assert_eq!(nernst_potential(1.10, 2, 1.0), 1.10);
    }

    #[test]
    fn dilute_anode_raises_cell_potential() {
        let e = nernst_potential(1.10, 2, 0.01);
        assert!((e - 1.1591).abs() < 1e-9);
    }

    #[test]
    fn gibbs_energy_is_negative_for_spontaneous_cell() {
        let dg = galvanic_gibbs_energy(2, 1.10);
        assert!((dg - (-212.267)).abs() < 1e-9);
    }

    #[test]
    fn electrolysis_gibbs_uses_excess_voltage() {
        let dg = electrolysis_gibbs_energy(0.5);
        assert!((dg - 48.2425).abs() < 1e-9);
    }
}
