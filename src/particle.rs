// particle.rs
// The Particle value type: a point charge with position, charge, and optional label.

use std::fmt;

use serde::{Deserialize, Serialize};
use ultraviolet::DVec2;

use crate::error::FieldError;
use crate::units::COULOMB_CONSTANT;

/// A point charge at a fixed 2D position.
///
/// Plain immutable data with structural equality: two particles are equal iff
/// position, charge, and label all match. Positions are in meters, charge in
/// coulombs (signed, zero permitted). The label is only needed for particles
/// that will be targeted by force queries and is not validated for uniqueness
/// here; see [`Distribution::force_on`](crate::Distribution::force_on).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pos: DVec2,
    charge: f64,
    label: Option<String>,
}

impl Particle {
    /// Create an unlabeled point charge `charge` at `(x, y)`.
    pub fn new(x: f64, y: f64, charge: f64) -> Self {
        Self {
            pos: DVec2::new(x, y),
            charge,
            label: None,
        }
    }

    /// Create a labeled point charge `charge` at `(x, y)`.
    pub fn labeled(x: f64, y: f64, charge: f64, label: impl Into<String>) -> Self {
        Self {
            pos: DVec2::new(x, y),
            charge,
            label: Some(label.into()),
        }
    }

    pub fn pos(&self) -> DVec2 {
        self.pos
    }

    pub fn x(&self) -> f64 {
        self.pos.x
    }

    pub fn y(&self) -> f64 {
        self.pos.y
    }

    /// Signed charge in coulombs.
    pub fn charge(&self) -> f64 {
        self.charge
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Distance of the particle from the origin.
    pub fn distance_from_origin(&self) -> f64 {
        self.pos.mag()
    }

    /// Electric field contributed by this particle alone at `pos`, in N/C.
    ///
    /// The contribution is `k·q/r³ · (dx, dy)`: magnitude `k·q/r²` along the
    /// unit vector from the particle to the query point. Fails with
    /// [`FieldError::SingularPoint`] when `pos` sits exactly on the particle.
    pub fn field_at(&self, pos: DVec2) -> Result<DVec2, FieldError> {
        let d = pos - self.pos;
        let r_sq = d.mag_sq();
        if r_sq == 0.0 {
            return Err(FieldError::SingularPoint { x: pos.x, y: pos.y });
        }
        let r = r_sq.sqrt();
        Ok(d * (COULOMB_CONSTANT * self.charge / (r_sq * r)))
    }

    /// Electric potential contributed by this particle alone at `pos`, in
    /// volts, with the usual V → 0 as r → ∞ reference.
    pub fn potential_at(&self, pos: DVec2) -> Result<f64, FieldError> {
        let r = (pos - self.pos).mag();
        if r == 0.0 {
            return Err(FieldError::SingularPoint { x: pos.x, y: pos.y });
        }
        Ok(COULOMB_CONSTANT * self.charge / r)
    }
}

impl fmt::Display for Particle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Particle(x={}, y={}, q={}, label=", self.pos.x, self.pos.y, self.charge)?;
        match &self.label {
            Some(label) => write!(f, "{label})"),
            None => write!(f, "None)"),
        }
    }
}
