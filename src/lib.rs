//! 2D electrostatic point-charge distributions.
//!
//! A [`Distribution`] holds an ordered set of [`Particle`]s (point charges)
//! and answers field, potential, and force queries by direct Coulomb
//! superposition. All quantities are SI: meters, coulombs, N/C, newtons.
//!
//! ```
//! use point_charges::{Distribution, Particle};
//! use ultraviolet::DVec2;
//!
//! let dist = Distribution::from_particles(vec![
//!     Particle::labeled(-0.2, 0.2, 512e-6, "1"),
//!     Particle::labeled(0.2, 0.2, -427e-6, "2"),
//! ]);
//! let e = dist.field_at(DVec2::zero())?;
//! let f = dist.force_on("1")?;
//! # let _ = (e, f);
//! # Ok::<(), point_charges::FieldError>(())
//! ```

pub mod distribution;
pub mod error;
pub mod particle;
pub mod units;

pub use distribution::{Distribution, FieldSample};
pub use error::FieldError;
pub use particle::Particle;
