//! Level line ∩ constraint boundary, solved in unit-vector space.
//!
//! Both lines are written against unit normals:
//! - level line `L_k`:      `f.unit · p = k`
//! - constraint boundary:   `c.unit · p = c.length`
//!
//! The 2×2 system `[[f.ux, f.uy], [c.ux, c.uy]] p = (k, c.length)` is solved by
//! Cramer's rule. A near-zero determinant means the two lines are parallel and
//! is reported as `ParallelNoIntersection`; a non-finite point never escapes.
use nalgebra::{matrix, Vector2};

use super::error::{GeomError, Result};
use super::types::{Constraint, OneForm};
use super::util::is_finite2;

/// Intersection of level `k` of `f` with the boundary line of `c`.
pub fn level_line_intersection(
    f: &OneForm,
    k: i64,
    c: &Constraint,
    eps_det: f64,
) -> Result<Vector2<f64>> {
    let fu = f.unit();
    let cu = c.unit();
    let a = matrix![fu.x, fu.y; cu.x, cu.y];
    let det = a.determinant();
    if !(det.abs() >= eps_det) {
        return Err(GeomError::ParallelNoIntersection);
    }
    let k = k as f64;
    let len = c.length();
    let p = Vector2::new(
        (k * cu.y - fu.y * len) / det,
        (fu.x * len - cu.x * k) / det,
    );
    if !is_finite2(p) {
        return Err(GeomError::ParallelNoIntersection);
    }
    Ok(p)
}
