//! 2D level-line geometry: one-forms clipped to half-plane regions.
//!
//! Purpose
//! - Enumerate the integer level lines of a linear functional that meet a
//!   bounded convex region and return each line's chord inside it.
//! - Keep the arithmetic in unit-vector space and numerically explicit: strict
//!   boundary tests, an explicit parallel tolerance, no NaN past the solver.
//!
//! Layout
//! - `types`: `Constraint`, `OneForm`, `GeomCfg`.
//! - `region`: `Region` (ordered constraints, membership).
//! - `solvers`: level line ∩ boundary line.
//! - `grid`: `GridEnumerator`, `Chord`.
//! - `rand`: reproducible random one-forms.

mod error;
mod grid;
pub mod rand;
mod region;
mod solvers;
mod types;
mod util;

pub use error::{GeomError, Result};
pub use grid::{level_range, Chord, GridEnumerator};
pub use region::{Region, DEFAULT_MAX, DEFAULT_MIN};
pub use solvers::level_line_intersection;
pub use types::{Constraint, GeomCfg, OneForm};
