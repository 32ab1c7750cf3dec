// experiment/validate.rs
// Kind-specific domain checks run before any formula is evaluated

use super::types::{ExperimentArchetype, ExperimentKind, InputField, InputSet, ValidatedConditions};
use crate::error::{ValidationError, ValidationErrorKind};

// NaN and infinities fail both predicates.
fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

fn is_non_negative(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

fn required(inputs: &InputSet, field: InputField) -> Result<f64, ValidationError> {
    inputs.get(field).ok_or_else(|| ValidationError::missing(field))
}

/// Check `inputs` against the archetype's rules and bind them to its constants.
///
/// Only the archetype's required fields are read. The first broken rule is
/// reported; nothing here panics for any `f64`.
pub fn validate(
    archetype: &ExperimentArchetype,
    inputs: &InputSet,
) -> Result<ValidatedConditions, ValidationError> {
    match archetype.kind {
        ExperimentKind::Galvanic {
            anode_potential,
            cathode_potential,
            electron_count,
        } => {
            let anode_concentration = required(inputs, InputField::AnodeConcentration)?;
            let cathode_concentration = required(inputs, InputField::CathodeConcentration)?;
            if !is_positive(anode_concentration) || !is_positive(cathode_concentration) {
                return Err(ValidationError::new(
                    ValidationErrorKind::NonPositiveConcentration,
                    "anode and cathode concentrations must be greater than zero",
                ));
            }
            Ok(ValidatedConditions::Galvanic {
                anode_potential,
                cathode_potential,
                electron_count,
                anode_concentration,
                cathode_concentration,
            })
        }
        ExperimentKind::Electrolysis { required_voltage } => {
            let applied_voltage = required(inputs, InputField::AppliedVoltage)?;
            let elapsed_time = required(inputs, InputField::ElapsedTime)?;
            if !(applied_voltage.is_finite() && applied_voltage >= required_voltage) {
                return Err(ValidationError::new(
                    ValidationErrorKind::InsufficientVoltage,
                    format!(
                        "applied voltage must be at least the {:.2} V needed for electrolysis",
                        required_voltage
                    ),
                ));
            }
            if !is_non_negative(elapsed_time) {
                return Err(ValidationError::new(
                    ValidationErrorKind::NegativeTime,
                    "elapsed time must not be negative",
                ));
            }
            Ok(ValidatedConditions::Electrolysis {
                required_voltage,
                applied_voltage,
                elapsed_time,
            })
        }
        ExperimentKind::IonicBridge { resistance_factor } => {
            let ion_concentration = required(inputs, InputField::IonConcentration)?;
            let conductivity = required(inputs, InputField::Conductivity)?;
            let distance = required(inputs, InputField::Distance)?;
            if !is_positive(ion_concentration) {
                return Err(ValidationError::new(
                    ValidationErrorKind::NonPositiveConcentration,
                    "ion concentration must be greater than zero",
                ));
            }
            if !is_positive(conductivity) {
                return Err(ValidationError::new(
                    ValidationErrorKind::NonPositiveConductivity,
                    "conductivity must be greater than zero",
                ));
            }
            if !is_non_negative(distance) {
                return Err(ValidationError::new(
                    ValidationErrorKind::NegativeDistance,
                    "distance must not be negative",
                ));
            }
            Ok(ValidatedConditions::IonicBridge {
                resistance_factor,
                ion_concentration,
                conductivity,
                distance,
            })
        }
    }
}
