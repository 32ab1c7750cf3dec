//! Physical constants and fixed unit conventions.
//!
//! Base units:
//! - Concentration: mol/L (M)
//! - Potential: volt (V)
//! - Time: second (s)
//! - Distance: centimetre (cm)
//! - Conductivity: siemens per metre (S/m)
//! - Energy: reported in kilojoules (kJ)

/// Faraday's constant in coulombs per mole of electrons.
pub const FARADAY: f64 = 96485.0;
/// Decimal-log Nernst coefficient 2.303·RT/F at 298 K, in volts.
/// Fixed; no temperature correction is applied.
pub const NERNST_COEFFICIENT_298K: f64 = 0.0591;
/// Joules per kilojoule.
pub const JOULES_PER_KILOJOULE: f64 = 1000.0;

/// Display suffix for potentials.
pub const VOLT_SUFFIX: &str = " V";
/// Display suffix for energies.
pub const KILOJOULE_SUFFIX: &str = " kJ";

/// Convert joules to kilojoules.
pub fn joules_to_kilojoules(joules: f64) -> f64 {
    joules / JOULES_PER_KILOJOULE
}
