// experiment/types.rs
// Archetype kinds, input fields, and the records produced per evaluation

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Payload-free discriminant of `ExperimentKind`, used for listing and filtering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KindTag {
    Galvanic,
    Electrolysis,
    IonicBridge,
}

impl KindTag {
    pub const ALL: [KindTag; 3] = [KindTag::Galvanic, KindTag::Electrolysis, KindTag::IonicBridge];

    pub fn as_str(&self) -> &'static str {
        match self {
            KindTag::Galvanic => "galvanic",
            KindTag::Electrolysis => "electrolysis",
            KindTag::IonicBridge => "ionic_bridge",
        }
    }
}

impl fmt::Display for KindTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for KindTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "galvanic" => Ok(KindTag::Galvanic),
            "electrolysis" => Ok(KindTag::Electrolysis),
            "ionic_bridge" | "bridge" => Ok(KindTag::IonicBridge),
            _ => Err(format!("Unknown experiment kind: {}", s)),
        }
    }
}

/// Experiment archetype with its kind-specific constants.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExperimentKind {
    /// Two half-cells; potentials in V vs SHE.
    Galvanic {
        anode_potential: f64,
        cathode_potential: f64,
        electron_count: u32,
    },
    /// Driven cell; minimum decomposition voltage in V.
    Electrolysis { required_voltage: f64 },
    /// Salt bridge with a dimensionless resistance scaling.
    IonicBridge { resistance_factor: f64 },
}

impl ExperimentKind {
    pub fn tag(&self) -> KindTag {
        match self {
            ExperimentKind::Galvanic { .. } => KindTag::Galvanic,
            ExperimentKind::Electrolysis { .. } => KindTag::Electrolysis,
            ExperimentKind::IonicBridge { .. } => KindTag::IonicBridge,
        }
    }

    /// Exactly the fields the kind's formula reads, in input-form order.
    pub fn required_input_fields(&self) -> &'static [InputField] {
        use InputField::*;
        match self {
            ExperimentKind::Galvanic { .. } => &[AnodeConcentration, CathodeConcentration],
            ExperimentKind::Electrolysis { .. } => &[AppliedVoltage, ElapsedTime],
            ExperimentKind::IonicBridge { .. } => &[IonConcentration, Conductivity, Distance],
        }
    }

    pub fn default_axis_label(&self) -> &'static str {
        match self {
            ExperimentKind::Galvanic { .. } => "Concentration (M)",
            ExperimentKind::Electrolysis { .. } => "Time (s)",
            ExperimentKind::IonicBridge { .. } => "Distance (cm)",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExperimentArchetype {
    pub id: String,
    pub name: String,
    #[serde(flatten)]
    pub kind: ExperimentKind,
    /// Overrides the kind's default x-axis label when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub axis_label: Option<String>,
}

impl ExperimentArchetype {
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: ExperimentKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            axis_label: None,
        }
    }

    pub fn required_input_fields(&self) -> &'static [InputField] {
        self.kind.required_input_fields()
    }

    pub fn independent_axis_label(&self) -> &str {
        self.axis_label
            .as_deref()
            .unwrap_or_else(|| self.kind.default_axis_label())
    }
}

/// Every numeric field any archetype can read.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InputField {
    AnodeConcentration,
    CathodeConcentration,
    AppliedVoltage,
    ElapsedTime,
    IonConcentration,
    Conductivity,
    Distance,
}

impl InputField {
    pub const ALL: [InputField; 7] = [
        InputField::AnodeConcentration,
        InputField::CathodeConcentration,
        InputField::AppliedVoltage,
        InputField::ElapsedTime,
        InputField::IonConcentration,
        InputField::Conductivity,
        InputField::Distance,
    ];

    /// Wire name used by string-keyed input maps.
    pub fn name(&self) -> &'static str {
        match self {
            InputField::AnodeConcentration => "anodeConcentration",
            InputField::CathodeConcentration => "cathodeConcentration",
            InputField::AppliedVoltage => "appliedVoltage",
            InputField::ElapsedTime => "elapsedTime",
            InputField::IonConcentration => "ionConcentration",
            InputField::Conductivity => "conductivity",
            InputField::Distance => "distance",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            InputField::AnodeConcentration => "Anode concentration",
            InputField::CathodeConcentration => "Cathode concentration",
            InputField::AppliedVoltage => "Applied voltage",
            InputField::ElapsedTime => "Time",
            InputField::IonConcentration => "Ion concentration",
            InputField::Conductivity => "Conductivity",
            InputField::Distance => "Distance",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            InputField::AnodeConcentration
            | InputField::CathodeConcentration
            | InputField::IonConcentration => "M",
            InputField::AppliedVoltage => "V",
            InputField::ElapsedTime => "s",
            InputField::Conductivity => "S/m",
            InputField::Distance => "cm",
        }
    }

    /// Starting value shown in an input form.
    pub fn default_value(&self) -> f64 {
        match self {
            InputField::AnodeConcentration => 0.01,
            InputField::CathodeConcentration => 1.0,
            InputField::AppliedVoltage => 2.0,
            InputField::ElapsedTime => 10.0,
            InputField::IonConcentration => 1.0,
            InputField::Conductivity => 1.0,
            InputField::Distance => 5.0,
        }
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label(), self.unit())
    }
}

impl FromStr for InputField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InputField::ALL
            .iter()
            .copied()
            .find(|field| field.name() == s)
            .ok_or_else(|| format!("Unknown input field: {}", s))
    }
}

/// Numeric operating conditions keyed by field. Supplied fresh per evaluation.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InputSet {
    values: HashMap<InputField, f64>,
}

impl InputSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every field at its form default.
    pub fn defaults() -> Self {
        InputField::ALL
            .iter()
            .fold(Self::new(), |set, &field| set.with(field, field.default_value()))
    }

    /// Build from string-keyed pairs. Names that are not input fields are ignored.
    pub fn from_pairs<I, K>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, f64)>,
        K: AsRef<str>,
    {
        let mut set = Self::new();
        for (key, value) in pairs {
            if let Ok(field) = key.as_ref().parse::<InputField>() {
                set.set(field, value);
            }
        }
        set
    }

    pub fn with(mut self, field: InputField, value: f64) -> Self {
        self.set(field, value);
        self
    }

    pub fn set(&mut self, field: InputField, value: f64) {
        self.values.insert(field, value);
    }

    pub fn get(&self, field: InputField) -> Option<f64> {
        self.values.get(&field).copied()
    }

    pub fn contains(&self, field: InputField) -> bool {
        self.values.contains_key(&field)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Kind-specific constants joined with the inputs that passed validation.
/// Produced by `validate`; the formula and the sampler only accept this.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ValidatedConditions {
    Galvanic {
        anode_potential: f64,
        cathode_potential: f64,
        electron_count: u32,
        anode_concentration: f64,
        cathode_concentration: f64,
    },
    Electrolysis {
        required_voltage: f64,
        applied_voltage: f64,
        elapsed_time: f64,
    },
    IonicBridge {
        resistance_factor: f64,
        ion_concentration: f64,
        conductivity: f64,
        distance: f64,
    },
}

/// Derived scalars of one evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScalarResult {
    /// V
    pub standard_potential: f64,
    /// V
    pub actual_potential: f64,
    /// kJ; absent for kinds without a defined electron exchange.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gibbs_free_energy: Option<f64>,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub x: f64,
    pub y: f64,
}

/// Potential sampled against one independent variable.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Curve {
    pub axis_label: String,
    pub points: Vec<CurvePoint>,
}

impl Curve {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&CurvePoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&CurvePoint> {
        self.points.last()
    }
}
