use ultraviolet::DVec2;

use crate::error::FieldError;
use crate::particle::Particle;
use crate::units::COULOMB_CONSTANT;

/// Result of sampling a charge distribution at a single point.
#[derive(Clone, Copy, Debug, Default)]
pub struct FieldSample {
    /// Electric potential in volts (V → 0 as r → ∞).
    pub potential: f64,
    /// Electric field in N/C.
    pub field: DVec2,
}

/// Evaluate the electric potential and field at `pos`, skipping the particles
/// whose sequence indices are listed in `excluded`.
///
/// This is the single superposition pass everything else wraps: one Coulomb
/// term per particle, gathering both the scalar potential and the vector
/// field. Exclusion is by index, not by label, so a force query on one of two
/// same-labeled particles still sees the other. Out-of-range indices in
/// `excluded` are ignored.
///
/// Fails with [`FieldError::SingularPoint`] if `pos` lands exactly on a
/// non-excluded particle; no infinite or NaN component is ever returned.
pub fn sample_at_point_excluding(
    particles: &[Particle],
    pos: DVec2,
    excluded: &[usize],
) -> Result<FieldSample, FieldError> {
    let mut potential = 0.0;
    let mut field = DVec2::zero();

    for (idx, particle) in particles.iter().enumerate() {
        if excluded.contains(&idx) {
            continue;
        }

        let d = pos - particle.pos();
        let r_sq = d.mag_sq();
        if r_sq == 0.0 {
            return Err(FieldError::SingularPoint { x: pos.x, y: pos.y });
        }

        let r = r_sq.sqrt();
        potential += COULOMB_CONSTANT * particle.charge() / r;
        // k·q/r³ · d has magnitude k·q/r² along the unit vector d/r.
        field += d * (COULOMB_CONSTANT * particle.charge() / (r_sq * r));
    }

    Ok(FieldSample { potential, field })
}

/// Convenience wrapper that returns only the field component.
#[inline]
pub fn field_at_point_excluding(
    particles: &[Particle],
    pos: DVec2,
    excluded: &[usize],
) -> Result<DVec2, FieldError> {
    sample_at_point_excluding(particles, pos, excluded).map(|sample| sample.field)
}

/// Convenience wrapper that returns only the potential component.
#[inline]
pub fn potential_at_point_excluding(
    particles: &[Particle],
    pos: DVec2,
    excluded: &[usize],
) -> Result<f64, FieldError> {
    sample_at_point_excluding(particles, pos, excluded).map(|sample| sample.potential)
}
