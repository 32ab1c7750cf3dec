pub mod config;
pub mod engine;
pub mod error;
pub mod experiment;
pub mod logging;
pub mod plotting;
pub mod session;
pub mod summary;
pub mod units;

pub use engine::{evaluate, list_archetypes, ArchetypeSummary, Engine, Evaluation};
pub use error::{EngineError, ValidationError, ValidationErrorKind};
pub use experiment::{Curve, CurvePoint, ExperimentArchetype, ExperimentKind, InputField, InputSet, ScalarResult};
