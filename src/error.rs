// error.rs
// Failure modes for field and force queries.

use thiserror::Error;

/// Errors that can occur when querying a charge distribution.
///
/// Every query either returns a complete result or fails with one of these;
/// there is no partial-failure mode and no global error state.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FieldError {
    /// A force query named a label that no particle in the distribution carries.
    ///
    /// Deliberately an explicit failure rather than a silent zero vector.
    #[error("no particle labeled {label:?} in the distribution")]
    LabelNotFound { label: String },

    /// The query point coincides exactly with a particle's position, where the
    /// Coulomb field is singular (r = 0).
    ///
    /// Queries fail here instead of returning an infinite or NaN vector.
    #[error("field is singular at ({x}, {y}): query point coincides with a particle")]
    SingularPoint { x: f64, y: f64 },
}
