//! Error kinds for constraint, functional, and region construction.

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum GeomError {
    /// Zero-length (or non-finite) direction; `unit` would be undefined.
    #[error("degenerate direction vector ({x}, {y}): length must be positive and finite")]
    DegenerateVector { x: f64, y: f64 },

    /// Bounds that cannot describe a square with positive area around the origin.
    #[error("degenerate region [{min}, {max}]: need finite bounds with min < 0 < max")]
    DegenerateRegion { min: f64, max: f64 },

    #[error("region needs at least one constraint")]
    EmptyRegion,

    /// Level line and constraint boundary are parallel (|det| below tolerance).
    #[error("level line is parallel to the constraint boundary")]
    ParallelNoIntersection,
}

pub type Result<T> = std::result::Result<T, GeomError>;
