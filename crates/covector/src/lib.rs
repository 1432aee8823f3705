//! Level-line geometry for dual-basis visualization.
//!
//! - `geom2`: one-forms, half-plane regions, and the level-line enumerator.
//! - `affine`: rotation + translation of a fixed polygon.
//! - `dual`: two one-forms as a linear map, applied to a probe vector.
//!
//! Everything here is synchronous and pure; types are plain values that the
//! presentation layer rebuilds whenever its inputs change.

pub mod affine;
pub mod api;
pub mod dual;
pub mod geom2;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom2::GeomCfg;
pub use nalgebra::{Matrix2 as Mat2, Vector2 as Vec2};

/// Common geometry exports for quick imports in callers.
pub mod prelude {
    pub use crate::affine::{ShapeParams, ShapeTransform};
    pub use crate::dual::{DualBasis, Segment};
    pub use crate::geom2::{
        level_line_intersection, Chord, Constraint, GeomCfg, GeomError, GridEnumerator, OneForm,
        Region,
    };
    pub use nalgebra::{Matrix2 as Mat2, Vector2 as Vec2};
}
