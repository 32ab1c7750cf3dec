// experiment/mod.rs
// Experiment calculation core: catalog, validation, formulas, sampling, formatting
//
// Data flows one way:
// - `validate` binds an archetype's constants to a checked input set
// - `formula::evaluate` and `curve::sample` only accept the validated record
// - `formatter` turns the scalars into display rows

pub mod catalog;
pub mod curve;
pub mod formatter;
pub mod formula;
mod types;
mod validate;

pub use catalog::{Catalog, CatalogError, BUILTIN_CATALOG};
pub use formatter::{format_result, FormattedField};
pub use types::*;
pub use validate::validate;

#[cfg(test)]
mod tests;
