// error.rs
// Error taxonomy for catalog lookup and input validation

use serde::Serialize;
use std::fmt;
use thiserror::Error;

use crate::experiment::InputField;

/// Which domain rule an input set broke.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum ValidationErrorKind {
    NonPositiveConcentration,
    NonPositiveConductivity,
    InsufficientVoltage,
    NegativeTime,
    NegativeDistance,
    /// A field the archetype reads was not supplied.
    MissingField,
}

impl fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValidationErrorKind::NonPositiveConcentration => "NonPositiveConcentration",
            ValidationErrorKind::NonPositiveConductivity => "NonPositiveConductivity",
            ValidationErrorKind::InsufficientVoltage => "InsufficientVoltage",
            ValidationErrorKind::NegativeTime => "NegativeTime",
            ValidationErrorKind::NegativeDistance => "NegativeDistance",
            ValidationErrorKind::MissingField => "MissingField",
        };
        f.write_str(name)
    }
}

/// A rejected input set. The message is for display only; match on `kind`.
#[derive(Clone, Debug, PartialEq, Error, Serialize)]
#[error("{message}")]
pub struct ValidationError {
    pub kind: ValidationErrorKind,
    pub message: String,
}

impl ValidationError {
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn missing(field: InputField) -> Self {
        Self::new(
            ValidationErrorKind::MissingField,
            format!("missing required input '{}'", field.name()),
        )
    }
}

/// Failure of a boundary operation. Both variants are recoverable by the caller.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum EngineError {
    #[error("no experiment with id '{0}'")]
    NotFound(String),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl EngineError {
    /// Validation kind, if this is a validation failure.
    pub fn validation_kind(&self) -> Option<ValidationErrorKind> {
        match self {
            EngineError::Validation(err) => Some(err.kind),
            EngineError::NotFound(_) => None,
        }
    }
}
