//! Physical constants for electrostatics.
//!
//! Everything is plain SI:
//! - Length: meter (m)
//! - Charge: coulomb (C)
//! - Field: newton per coulomb (N/C, equivalently V/m)
//! - Force: newton (N)

/// Vacuum permittivity ε0 in F/m (CODATA 2018).
pub const VACUUM_PERMITTIVITY: f64 = 8.854_187_812_8e-12;

/// Coulomb's constant k = 1/(4πε0) in N·m²/C² (≈ 8.9876e9).
///
/// Derived from ε0 rather than written out so the physics stays auditable.
/// Note this is the exact CODATA-derived value, not the rounded 8.99e9 common
/// in textbooks; results differ from textbook worked examples by ~0.03%.
pub const COULOMB_CONSTANT: f64 = 1.0 / (4.0 * std::f64::consts::PI * VACUUM_PERMITTIVITY);
