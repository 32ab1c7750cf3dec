// experiment/catalog.rs
// Registry of experiment archetypes: the built-in set and TOML-loaded catalogs

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::info;

use super::types::{ExperimentArchetype, ExperimentKind, KindTag};
use crate::error::EngineError;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog contains no experiments")]
    Empty,
    #[error("experiment id must not be blank")]
    InvalidId,
    #[error("duplicate experiment id '{0}'")]
    DuplicateId(String),
    #[error("experiment '{id}' has a non-finite {constant}")]
    InvalidConstant { id: String, constant: &'static str },
    #[error("galvanic experiment '{0}' must exchange at least one electron")]
    ZeroElectronCount(String),
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] toml::de::Error),
}

/// On-disk layout: a list of `[[experiments]]` tables.
#[derive(Debug, Deserialize, Serialize)]
struct CatalogFile {
    experiments: Vec<ExperimentArchetype>,
}

/// Read-only set of archetypes. Construction checks every invariant up front.
#[derive(Clone, Debug, PartialEq)]
pub struct Catalog {
    archetypes: Vec<ExperimentArchetype>,
}

pub static BUILTIN_CATALOG: Lazy<Catalog> = Lazy::new(Catalog::builtin);

fn galvanic(id: &str, name: &str, anode: f64, cathode: f64, electrons: u32) -> ExperimentArchetype {
    ExperimentArchetype::new(
        id,
        name,
        ExperimentKind::Galvanic {
            anode_potential: anode,
            cathode_potential: cathode,
            electron_count: electrons,
        },
    )
}

impl Catalog {
    /// Standard reduction potentials (V vs SHE) and decomposition voltages from
    /// the usual textbook tables.
    pub fn builtin() -> Self {
        let archetypes = vec![
            galvanic("zn-cu", "Daniell Cell (Zn-Cu)", -0.76, 0.34, 2),
            galvanic("mg-cu", "Magnesium-Copper Cell (Mg-Cu)", -2.37, 0.34, 2),
            galvanic("fe-ag", "Iron-Silver Cell (Fe-Ag)", -0.44, 0.80, 2),
            galvanic("al-cu", "Aluminium-Copper Cell (Al-Cu)", -1.66, 0.34, 6),
            galvanic("ni-cu", "Nickel-Copper Cell (Ni-Cu)", -0.25, 0.34, 2),
            galvanic("pb-cu", "Lead-Copper Cell (Pb-Cu)", -0.13, 0.34, 2),
            ExperimentArchetype::new(
                "water-electrolysis",
                "Electrolysis of Water",
                ExperimentKind::Electrolysis {
                    required_voltage: 1.23,
                },
            ),
            ExperimentArchetype::new(
                "nacl-electrolysis",
                "Electrolysis of NaCl Solution",
                ExperimentKind::Electrolysis {
                    required_voltage: 2.2,
                },
            ),
            ExperimentArchetype::new(
                "kcl-bridge",
                "KCl Salt Bridge",
                ExperimentKind::IonicBridge {
                    resistance_factor: 0.02,
                },
            ),
        ];
        Self { archetypes }
    }

    pub fn new(archetypes: Vec<ExperimentArchetype>) -> Result<Self, CatalogError> {
        if archetypes.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut seen = HashSet::new();
        for archetype in &archetypes {
            if archetype.id.trim().is_empty() {
                return Err(CatalogError::InvalidId);
            }
            if !seen.insert(archetype.id.as_str()) {
                return Err(CatalogError::DuplicateId(archetype.id.clone()));
            }
            check_constants(archetype)?;
        }
        Ok(Self { archetypes })
    }

    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(content)?;
        let catalog = Self::new(file.experiments)?;
        info!(count = catalog.len(), "loaded experiment catalog");
        Ok(catalog)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn list(&self) -> &[ExperimentArchetype] {
        &self.archetypes
    }

    pub fn iter(&self) -> impl Iterator<Item = &ExperimentArchetype> {
        self.archetypes.iter()
    }

    pub fn of_kind(&self, tag: KindTag) -> impl Iterator<Item = &ExperimentArchetype> {
        self.archetypes.iter().filter(move |a| a.kind.tag() == tag)
    }

    pub fn find_by_id(&self, id: &str) -> Result<&ExperimentArchetype, EngineError> {
        self.archetypes
            .iter()
            .find(|a| a.id == id)
            .ok_or_else(|| EngineError::NotFound(id.to_string()))
    }

    pub fn len(&self) -> usize {
        self.archetypes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.archetypes.is_empty()
    }
}

fn check_constants(archetype: &ExperimentArchetype) -> Result<(), CatalogError> {
    let invalid = |constant| CatalogError::InvalidConstant {
        id: archetype.id.clone(),
        constant,
    };
    match archetype.kind {
        ExperimentKind::Galvanic {
            anode_potential,
            cathode_potential,
            electron_count,
        } => {
            if !anode_potential.is_finite() {
                return Err(invalid("anode_potential"));
            }
            if !cathode_potential.is_finite() {
                return Err(invalid("cathode_potential"));
            }
            if electron_count == 0 {
                return Err(CatalogError::ZeroElectronCount(archetype.id.clone()));
            }
        }
        ExperimentKind::Electrolysis { required_voltage } => {
            if !required_voltage.is_finite() {
                return Err(invalid("required_voltage"));
            }
        }
        ExperimentKind::IonicBridge { resistance_factor } => {
            if !resistance_factor.is_finite() {
                return Err(invalid("resistance_factor"));
            }
        }
    }
    Ok(())
}
