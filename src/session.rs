// session.rs
// Single state record for an interactive calculator front end

use crate::engine::{Engine, Evaluation};
use crate::error::EngineError;
use crate::experiment::{format_result, ExperimentArchetype, FormattedField, InputField, InputSet};

/// Selection, inputs, and the outcome of the last evaluation, kept together so
/// every transition updates them consistently.
#[derive(Debug)]
pub struct Session<'a> {
    engine: &'a Engine,
    selected: &'a ExperimentArchetype,
    inputs: InputSet,
    outcome: Option<Evaluation>,
    error: Option<EngineError>,
    curve_visible: bool,
}

impl<'a> Session<'a> {
    /// Starts on the first catalog entry with every field at its form default.
    pub fn new(engine: &'a Engine) -> Self {
        // Catalog construction guarantees at least one entry.
        let selected = &engine.catalog().list()[0];
        Self {
            engine,
            selected,
            inputs: InputSet::defaults(),
            outcome: None,
            error: None,
            curve_visible: false,
        }
    }

    pub fn selected(&self) -> &ExperimentArchetype {
        self.selected
    }

    pub fn inputs(&self) -> &InputSet {
        &self.inputs
    }

    pub fn outcome(&self) -> Option<&Evaluation> {
        self.outcome.as_ref()
    }

    pub fn error(&self) -> Option<&EngineError> {
        self.error.as_ref()
    }

    pub fn curve_visible(&self) -> bool {
        self.curve_visible && self.outcome.is_some()
    }

    /// Switch archetype. Clears the outcome, error, and curve, and puts the new
    /// archetype's own fields back to their defaults.
    pub fn select(&mut self, archetype_id: &str) -> Result<(), EngineError> {
        let archetype = self.engine.catalog().find_by_id(archetype_id)?;
        self.selected = archetype;
        self.outcome = None;
        self.error = None;
        self.curve_visible = false;
        for &field in archetype.required_input_fields() {
            self.inputs.set(field, field.default_value());
        }
        Ok(())
    }

    /// Edits one field. A previous outcome stays until the next `evaluate`.
    pub fn set_input(&mut self, field: InputField, value: f64) {
        self.inputs.set(field, value);
    }

    pub fn evaluate(&mut self) -> Result<&Evaluation, &EngineError> {
        match self.engine.evaluate_archetype(self.selected, &self.inputs) {
            Ok(evaluation) => {
                self.error = None;
                self.curve_visible = false;
                Ok(&*self.outcome.insert(evaluation))
            }
            Err(err) => {
                self.outcome = None;
                self.curve_visible = false;
                Err(&*self.error.insert(err))
            }
        }
    }

    pub fn toggle_curve(&mut self) {
        self.curve_visible = !self.curve_visible;
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    pub fn formatted_results(&self) -> Option<Vec<FormattedField>> {
        self.outcome.as_ref().map(|o| format_result(&o.scalars))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationErrorKind;

    #[test]
    fn starts_on_first_archetype_with_defaults() {
        let engine = Engine::default();
        let session = Session::new(&engine);
        assert_eq!(session.selected().id, "zn-cu");
        assert_eq!(session.inputs().get(InputField::Distance), Some(5.0));
        assert!(session.outcome().is_none());
        assert!(!session.curve_visible());
    }

    #[test]
    fn evaluate_stores_outcome_and_formats_it() {
        let engine = Engine::default();
        let mut session = Session::new(&engine);
        assert!(session.evaluate().is_ok());
        let rows = session.formatted_results().unwrap();
        assert_eq!(rows[1].value, "1.16 V");
        session.toggle_curve();
        assert!(session.curve_visible());
    }

    #[test]
    fn selecting_clears_outcome_and_resets_own_fields() {
        let engine = Engine::default();
        let mut session = Session::new(&engine);
        session.set_input(InputField::AppliedVoltage, 9.0);
        session.set_input(InputField::Distance, 42.0);
        session.evaluate().unwrap();
        session.toggle_curve();

        session.select("water-electrolysis").unwrap();
        assert!(session.outcome().is_none());
        assert!(session.error().is_none());
        assert!(!session.curve_visible());
        assert_eq!(session.inputs().get(InputField::AppliedVoltage), Some(2.0));
        // Fields the electrolysis form does not show are untouched.
        assert_eq!(session.inputs().get(InputField::Distance), Some(42.0));
    }

    #[test]
    fn failed_evaluation_leaves_no_partial_result() {
        let engine = Engine::default();
        let mut session = Session::new(&engine);
        session.evaluate().unwrap();

        session.set_input(InputField::AnodeConcentration, 0.0);
        let err = session.evaluate().unwrap_err();
        assert_eq!(err.validation_kind(), Some(ValidationErrorKind::NonPositiveConcentration));
        assert!(session.outcome().is_none());
        assert!(session.formatted_results().is_none());

        session.dismiss_error();
        assert!(session.error().is_none());
    }

    #[test]
    fn unknown_selection_keeps_current_state() {
        let engine = Engine::default();
        let mut session = Session::new(&engine);
        session.evaluate().unwrap();
        assert!(session.select("unobtainium").is_err());
        assert_eq!(session.selected().id, "zn-cu");
        assert!(session.outcome().is_some());
    }
}
