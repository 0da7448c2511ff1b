// distribution/mod.rs
// An ordered collection of point charges and its field/force queries.

mod field;

pub use field::{
    field_at_point_excluding, potential_at_point_excluding, sample_at_point_excluding,
    FieldSample,
};

use std::fmt;

use serde::{Deserialize, Serialize};
use ultraviolet::DVec2;

use crate::error::FieldError;
use crate::particle::Particle;

/// An ordered sequence of [`Particle`]s treated as one charge configuration.
///
/// Order matters only for display and iteration; superposition is commutative
/// up to floating-point rounding. Construction performs no validation: labels
/// are not checked for uniqueness and duplicate positions are allowed. When
/// two particles share a label, queries deterministically pick the first in
/// sequence order.
///
/// The collection is effectively immutable once built (appending is the only
/// mutation, equivalent to constructing an extended distribution), so shared
/// read access from multiple threads is safe.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Distribution {
    particles: Vec<Particle>,
}

impl Distribution {
    /// Create an empty distribution. Field and potential queries on it return
    /// zero; force queries fail with [`FieldError::LabelNotFound`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a distribution holding `particles` in the given order.
    pub fn from_particles(particles: Vec<Particle>) -> Self {
        Self { particles }
    }

    /// Append a particle, preserving insertion order.
    pub fn push(&mut self, particle: Particle) {
        self.particles.push(particle);
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Particle> {
        self.particles.iter()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Labels currently in use, in sequence order; unlabeled particles are
    /// skipped. Duplicates appear as often as they occur.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.particles.iter().filter_map(|p| p.label())
    }

    /// First particle in sequence order carrying `label`, if any.
    pub fn get(&self, label: &str) -> Option<&Particle> {
        self.position_of(label).map(|idx| &self.particles[idx])
    }

    /// Net electric field at `pos` in N/C, by Coulomb superposition over every
    /// particle. `(0, 0)` for an empty distribution. Fails with
    /// [`FieldError::SingularPoint`] if `pos` coincides with a particle.
    pub fn field_at(&self, pos: DVec2) -> Result<DVec2, FieldError> {
        field_at_point_excluding(&self.particles, pos, &[])
    }

    /// Net electric potential at `pos` in volts, with V → 0 at infinity.
    pub fn potential_at(&self, pos: DVec2) -> Result<f64, FieldError> {
        potential_at_point_excluding(&self.particles, pos, &[])
    }

    /// Potential and field at `pos` gathered in a single pass.
    pub fn sample_at(&self, pos: DVec2) -> Result<FieldSample, FieldError> {
        sample_at_point_excluding(&self.particles, pos, &[])
    }

    /// Potential and field at `pos`, skipping the particles at the given
    /// sequence indices. Out-of-range indices are ignored.
    pub fn sample_at_excluding(
        &self,
        pos: DVec2,
        excluded: &[usize],
    ) -> Result<FieldSample, FieldError> {
        sample_at_point_excluding(&self.particles, pos, excluded)
    }

    /// Total electrostatic potential energy of the configuration in joules,
    /// with U → 0 for infinitely separated charges.
    ///
    /// Computed as ½ Σᵢ qᵢ·V(pᵢ), where each particle's own contribution is
    /// excluded from the potential at its position, so every pair is counted
    /// exactly once. Zero for empty and single-particle distributions. Fails
    /// with [`FieldError::SingularPoint`] when two particles occupy the same
    /// position.
    pub fn potential_energy(&self) -> Result<f64, FieldError> {
        let mut total = 0.0;
        for (idx, particle) in self.particles.iter().enumerate() {
            let v = potential_at_point_excluding(&self.particles, particle.pos(), &[idx])?;
            total += particle.charge() * v;
        }
        Ok(total / 2.0)
    }

    /// Net electrostatic force in newtons on the particle carrying `label`,
    /// due to every other particle (self-interaction excluded).
    ///
    /// The target is the first particle in sequence order whose label matches;
    /// exclusion is by sequence position, so a second particle sharing the
    /// label still contributes to the force. A label no particle carries fails
    /// with [`FieldError::LabelNotFound`] rather than returning a zero vector.
    /// A distribution holding only the target yields `(0, 0)`.
    pub fn force_on(&self, label: &str) -> Result<DVec2, FieldError> {
        let target_idx = self
            .position_of(label)
            .ok_or_else(|| FieldError::LabelNotFound {
                label: label.to_owned(),
            })?;

        if self.labels().filter(|&l| l == label).count() > 1 {
            log::debug!(
                "label {:?} is shared; force_on resolves to the particle at index {}",
                label,
                target_idx
            );
        }

        let target = &self.particles[target_idx];
        let field = field_at_point_excluding(&self.particles, target.pos(), &[target_idx])?;
        Ok(field * target.charge())
    }

    fn position_of(&self, label: &str) -> Option<usize> {
        self.particles.iter().position(|p| p.label() == Some(label))
    }
}

impl FromIterator<Particle> for Distribution {
    fn from_iter<I: IntoIterator<Item = Particle>>(iter: I) -> Self {
        Self {
            particles: iter.into_iter().collect(),
        }
    }
}

impl Extend<Particle> for Distribution {
    fn extend<I: IntoIterator<Item = Particle>>(&mut self, iter: I) {
        self.particles.extend(iter);
    }
}

impl<'a> IntoIterator for &'a Distribution {
    type Item = &'a Particle;
    type IntoIter = std::slice::Iter<'a, Particle>;

    fn into_iter(self) -> Self::IntoIter {
        self.particles.iter()
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Distribution([")?;
        for (idx, particle) in self.particles.iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{particle}")?;
        }
        write!(f, "])")
    }
}
