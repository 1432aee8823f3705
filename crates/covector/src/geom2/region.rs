//! Clipping region as an ordered set of half-plane constraints.
//!
//! `Region::new(min, max)` builds the axis-aligned square `[min, max]²` from the
//! four constraints `(min,0), (max,0), (0,min), (0,max)`. Membership is defined
//! over however many constraints the region holds, so hand-assembled convex
//! regions (`from_constraints`) go through the same code paths.

use nalgebra::Vector2;

use super::error::{GeomError, Result};
use super::types::Constraint;
use super::util::is_finite2;

/// Default viewport bounds used by the presentation layer.
pub const DEFAULT_MIN: f64 = -5.0;
pub const DEFAULT_MAX: f64 = 5.0;

#[derive(Clone, Debug, PartialEq)]
pub struct Region {
    constraints: Vec<Constraint>,
    bounds: Option<(f64, f64)>,
}

impl Region {
    /// Square `[min, max]²`. Requires finite `min < 0 < max`; a zero bound would
    /// collapse its constraint vector to the origin.
    pub fn new(min: f64, max: f64) -> Result<Self> {
        let degenerate = GeomError::DegenerateRegion { min, max };
        if !(min.is_finite() && max.is_finite()) || min >= max || min >= 0.0 || max <= 0.0 {
            return Err(degenerate);
        }
        let constraints = [(min, 0.0), (max, 0.0), (0.0, min), (0.0, max)]
            .into_iter()
            .map(|(x, y)| Constraint::new(x, y).map_err(|_| degenerate))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            constraints,
            bounds: Some((min, max)),
        })
    }

    /// Arbitrary (caller-convex) region; must hold at least one constraint.
    pub fn from_constraints(constraints: Vec<Constraint>) -> Result<Self> {
        if constraints.is_empty() {
            return Err(GeomError::EmptyRegion);
        }
        Ok(Self {
            constraints,
            bounds: None,
        })
    }

    /// True iff no constraint is violated. Non-finite points are never inside.
    #[inline]
    pub fn is_inside(&self, p: Vector2<f64>) -> bool {
        is_finite2(p) && !self.constraints.iter().any(|c| c.violates(p))
    }

    /// `is_inside` ignoring constraint `skip`, for points solved onto that
    /// constraint's boundary (rounding may leave them a few ulps outside it).
    pub fn is_inside_except(&self, p: Vector2<f64>, skip: usize) -> bool {
        is_finite2(p)
            && !self
                .constraints
                .iter()
                .enumerate()
                .any(|(i, c)| i != skip && c.violates(p))
    }

    #[inline]
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// `(min, max)` when built from bounds.
    #[inline]
    pub fn bounds(&self) -> Option<(f64, f64)> {
        self.bounds
    }
}
