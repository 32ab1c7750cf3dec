// engine.rs
// Boundary operations: list archetypes and evaluate one against an input set

use once_cell::sync::Lazy;
use serde::Serialize;
use tracing::debug;

use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::experiment::{
    curve, formula, validate, Catalog, Curve, ExperimentArchetype, InputField, InputSet, KindTag,
    ScalarResult, BUILTIN_CATALOG,
};

/// What a selection control needs to know about an archetype.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ArchetypeSummary {
    pub id: String,
    pub name: String,
    pub kind: KindTag,
    pub required_input_fields: Vec<InputField>,
    pub independent_axis_label: String,
}

impl From<&ExperimentArchetype> for ArchetypeSummary {
    fn from(archetype: &ExperimentArchetype) -> Self {
        Self {
            id: archetype.id.clone(),
            name: archetype.name.clone(),
            kind: archetype.kind.tag(),
            required_input_fields: archetype.required_input_fields().to_vec(),
            independent_axis_label: archetype.independent_axis_label().to_string(),
        }
    }
}

/// Successful evaluation. Scalars and curve always come from the same inputs.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Evaluation {
    pub archetype_id: String,
    pub scalars: ScalarResult,
    pub curve: Curve,
}

/// Stateless evaluator over a fixed catalog.
#[derive(Clone, Debug)]
pub struct Engine {
    catalog: Catalog,
    config: EngineConfig,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(BUILTIN_CATALOG.clone(), EngineConfig::default())
    }
}

impl Engine {
    pub fn new(catalog: Catalog, config: EngineConfig) -> Self {
        Self { catalog, config }
    }

    /// Built-in catalog with a custom sampling density.
    pub fn with_step_count(step_count: usize) -> Self {
        Self::new(BUILTIN_CATALOG.clone(), EngineConfig { step_count })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn list_archetypes(&self) -> Vec<ArchetypeSummary> {
        self.catalog.iter().map(ArchetypeSummary::from).collect()
    }

    pub fn evaluate(&self, archetype_id: &str, inputs: &InputSet) -> Result<Evaluation, EngineError> {
        let archetype = self.catalog.find_by_id(archetype_id)?;
        self.evaluate_archetype(archetype, inputs)
    }

    /// Validate, then compute scalars and curve. Nothing is computed on rejection.
    pub fn evaluate_archetype(
        &self,
        archetype: &ExperimentArchetype,
        inputs: &InputSet,
    ) -> Result<Evaluation, EngineError> {
        let conditions = validate(archetype, inputs).map_err(|err| {
            debug!(archetype = %archetype.id, kind = %err.kind, "rejected inputs");
            err
        })?;

        let scalars = formula::evaluate(&conditions);
        let curve = curve::sample(archetype, &conditions, self.config.step_count);
        debug!(
            archetype = %archetype.id,
            actual_potential = scalars.actual_potential,
            points = curve.len(),
            "evaluated experiment"
        );

        Ok(Evaluation {
            archetype_id: archetype.id.clone(),
            scalars,
            curve,
        })
    }
}

pub static DEFAULT_ENGINE: Lazy<Engine> = Lazy::new(Engine::default);

/// `Engine::list_archetypes` over the built-in catalog.
pub fn list_archetypes() -> Vec<ArchetypeSummary> {
    DEFAULT_ENGINE.list_archetypes()
}

/// `Engine::evaluate` over the built-in catalog with the default step count.
pub fn evaluate(archetype_id: &str, inputs: &InputSet) -> Result<Evaluation, EngineError> {
    DEFAULT_ENGINE.evaluate(archetype_id, inputs)
}
