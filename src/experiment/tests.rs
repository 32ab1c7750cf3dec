// experiment/tests.rs
// Validation and sampling tests against the built-in archetypes

use super::curve::{domain, sample};
use super::formula;
use super::*;
use crate::config::{CONCENTRATION_FLOOR_M, DEFAULT_STEP_COUNT};
use crate::error::ValidationErrorKind;

fn archetype(id: &str) -> &'static ExperimentArchetype {
    BUILTIN_CATALOG.find_by_id(id).unwrap()
}

fn galvanic_inputs(anode: f64, cathode: f64) -> InputSet {
    InputSet::new()
        .with(InputField::AnodeConcentration, anode)
        .with(InputField::CathodeConcentration, cathode)
}

fn electrolysis_inputs(voltage: f64, time: f64) -> InputSet {
    InputSet::new()
        .with(InputField::AppliedVoltage, voltage)
        .with(InputField::ElapsedTime, time)
}

fn bridge_inputs(concentration: f64, conductivity: f64, distance: f64) -> InputSet {
    InputSet::new()
        .with(InputField::IonConcentration, concentration)
        .with(InputField::Conductivity, conductivity)
        .with(InputField::Distance, distance)
}

fn rejection(id: &str, inputs: &InputSet) -> ValidationErrorKind {
    validate(archetype(id), inputs).unwrap_err().kind
}

mod validation {
    use super::*;

    #[test]
    fn galvanic_rejects_zero_and_negative_concentrations() {
        assert_eq!(
            rejection("zn-cu", &galvanic_inputs(0.0, 1.0)),
            ValidationErrorKind::NonPositiveConcentration
        );
        assert_eq!(
            rejection("zn-cu", &galvanic_inputs(1.0, -0.5)),
            ValidationErrorKind::NonPositiveConcentration
        );
    }

    #[test]
    fn electrolysis_requires_decomposition_voltage() {
        let err = validate(archetype("water-electrolysis"), &electrolysis_inputs(1.0, 10.0)).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::InsufficientVoltage);
        assert!(err.message.contains("1.23 V"));
    }

    #[test]
    fn electrolysis_accepts_exact_decomposition_voltage() {
        assert!(validate(archetype("water-electrolysis"), &electrolysis_inputs(1.23, 0.0)).is_ok());
    }

    #[test]
    fn electrolysis_rejects_negative_time() {
        assert_eq!(
            rejection("water-electrolysis", &electrolysis_inputs(2.0, -1.0)),
            ValidationErrorKind::NegativeTime
        );
    }

    #[test]
    fn voltage_is_checked_before_time() {
        assert_eq!(
            rejection("nacl-electrolysis", &electrolysis_inputs(1.0, -1.0)),
            ValidationErrorKind::InsufficientVoltage
        );
    }

    #[test]
    fn bridge_rules_map_to_distinct_kinds() {
        assert_eq!(
            rejection("kcl-bridge", &bridge_inputs(0.0, 1.0, 5.0)),
            ValidationErrorKind::NonPositiveConcentration
        );
        assert_eq!(
            rejection("kcl-bridge", &bridge_inputs(1.0, 0.0, 5.0)),
            ValidationErrorKind::NonPositiveConductivity
        );
        assert_eq!(
            rejection("kcl-bridge", &bridge_inputs(1.0, 1.0, -0.1)),
            ValidationErrorKind::NegativeDistance
        );
        assert!(validate(archetype("kcl-bridge"), &bridge_inputs(1.0, 1.0, 0.0)).is_ok());
    }

    #[test]
    fn nan_and_infinity_fail_instead_of_panicking() {
        assert_eq!(
            rejection("zn-cu", &galvanic_inputs(f64::NAN, 1.0)),
            ValidationErrorKind::NonPositiveConcentration
        );
        assert_eq!(
            rejection("zn-cu", &galvanic_inputs(1.0, f64::INFINITY)),
            ValidationErrorKind::NonPositiveConcentration
        );
        assert_eq!(
            rejection("water-electrolysis", &electrolysis_inputs(f64::NAN, 1.0)),
            ValidationErrorKind::InsufficientVoltage
        );
        assert_eq!(
            rejection("water-electrolysis", &electrolysis_inputs(f64::INFINITY, 1.0)),
            ValidationErrorKind::InsufficientVoltage
        );
        assert_eq!(
            rejection("water-electrolysis", &electrolysis_inputs(2.0, f64::NAN)),
            ValidationErrorKind::NegativeTime
        );
        assert_eq!(
            rejection("kcl-bridge", &bridge_inputs(1.0, f64::NEG_INFINITY, 1.0)),
            ValidationErrorKind::NonPositiveConductivity
        );
        assert_eq!(
            rejection("kcl-bridge", &bridge_inputs(1.0, 1.0, f64::INFINITY)),
            ValidationErrorKind::NegativeDistance
        );
    }

    #[test]
    fn missing_required_field_is_reported() {
        let inputs = InputSet::new().with(InputField::AnodeConcentration, 1.0);
        let err = validate(archetype("zn-cu"), &inputs).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::MissingField);
        assert!(err.message.contains("cathodeConcentration"));
    }

    #[test]
    fn fields_of_other_kinds_are_ignored() {
        let inputs = galvanic_inputs(0.5, 0.5)
            .with(InputField::Distance, -100.0)
            .with(InputField::ElapsedTime, f64::NAN);
        assert!(validate(archetype("fe-ag"), &inputs).is_ok());
    }

    #[test]
    fn unknown_string_keys_are_dropped() {
        let inputs = InputSet::from_pairs([
            ("anodeConcentration", 0.01),
            ("cathodeConcentration", 1.0),
            ("temperature", 298.0),
        ]);
        assert_eq!(inputs.len(), 2);
        assert!(validate(archetype("zn-cu"), &inputs).is_ok());
    }
}

mod sampling {
    use super::*;

    #[test]
    fn galvanic_curve_spans_floor_to_max_concentration() {
        let a = archetype("zn-cu");
        let conditions = validate(a, &galvanic_inputs(0.01, 1.0)).unwrap();
        let curve = sample(a, &conditions, DEFAULT_STEP_COUNT);
        assert_eq!(curve.len(), DEFAULT_STEP_COUNT + 1);
        assert_eq!(curve.first().unwrap().x, CONCENTRATION_FLOOR_M);
        assert!((curve.last().unwrap().x - 1.0).abs() < 1e-12);
        assert_eq!(curve.axis_label, "Concentration (M)");
    }

    #[test]
    fn galvanic_curve_is_linear_in_x_and_finite() {
        let a = archetype("mg-cu");
        let conditions = validate(a, &galvanic_inputs(2.0, 0.5)).unwrap();
        let curve = sample(a, &conditions, 10);
        let step = (2.0 - CONCENTRATION_FLOOR_M) / 10.0;
        for (i, p) in curve.points.iter().enumerate() {
            assert!((p.x - (CONCENTRATION_FLOOR_M + step * i as f64)).abs() < 1e-12);
            assert!(p.y.is_finite());
        }
    }

    #[test]
    fn galvanic_curve_equals_standard_potential_at_anode_concentration() {
        let a = archetype("zn-cu");
        let conditions = validate(a, &galvanic_inputs(1.0, 1.0)).unwrap();
        let curve = sample(a, &conditions, 4);
        let last = curve.last().unwrap();
        assert!((last.y - 1.10).abs() < 1e-9);
    }

    #[test]
    fn electrolysis_curve_runs_from_zero_to_elapsed_time() {
        let a = archetype("water-electrolysis");
        let conditions = validate(a, &electrolysis_inputs(2.0, 10.0)).unwrap();
        let curve = sample(a, &conditions, DEFAULT_STEP_COUNT);
        assert_eq!(curve.first().unwrap().x, 0.0);
        assert_eq!(curve.first().unwrap().y, 0.0);
        let last = curve.last().unwrap();
        assert_eq!(last.x, 10.0);
        assert!((last.y - 7.7).abs() < 1e-9);
    }

    #[test]
    fn bridge_curve_scales_with_distance() {
        let a = archetype("kcl-bridge");
        let conditions = validate(a, &bridge_inputs(1.0, 1.0, 5.0)).unwrap();
        assert_eq!(domain(&conditions), (0.0, 5.0));
        let curve = sample(a, &conditions, DEFAULT_STEP_COUNT);
        let last = curve.last().unwrap();
        assert_eq!(last.x, 5.0);
        assert!((last.y - 0.1).abs() < 1e-12);
        assert_eq!(curve.axis_label, "Distance (cm)");
    }

    #[test]
    fn zero_length_domain_still_yields_every_point() {
        let a = archetype("kcl-bridge");
        let conditions = validate(a, &bridge_inputs(1.0, 1.0, 0.0)).unwrap();
        let curve = sample(a, &conditions, 20);
        assert_eq!(curve.len(), 21);
        assert!(curve.points.iter().all(|p| p.x == 0.0 && p.y == 0.0));
    }

    #[test]
    fn zero_step_count_keeps_both_endpoints() {
        let a = archetype("water-electrolysis");
        let conditions = validate(a, &electrolysis_inputs(2.0, 4.0)).unwrap();
        let curve = sample(a, &conditions, 0);
        assert_eq!(curve.len(), 2);
        assert_eq!(curve.last().unwrap().x, 4.0);
    }

    #[test]
    fn curve_endpoint_matches_scalar_actual_potential() {
        let a = archetype("kcl-bridge");
        let conditions = validate(a, &bridge_inputs(2.0, 0.5, 3.0)).unwrap();
        let scalars = formula::evaluate(&conditions);
        let curve = sample(a, &conditions, 50);
        assert!((curve.last().unwrap().y - scalars.actual_potential).abs() < 1e-12);
    }
}
