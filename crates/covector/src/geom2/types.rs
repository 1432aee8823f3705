//! Basic 2D types and tolerances used by the level-line engine.
//!
//! - `GeomCfg`: centralizes the parallel-detection epsilon, point dedup, and
//!   the per-direction level cap.
//! - `Constraint`: half-plane `unit · p <= length` built from a raw direction.
//! - `OneForm`: linear functional whose integer level sets are enumerated.
//!
//! Code cross-refs: `region::Region`, `solvers::level_line_intersection`,
//! `grid::GridEnumerator`

use nalgebra::Vector2;

use super::error::Result;
use super::util::Direction;

/// Geometry configuration (tolerances and caps).
#[derive(Clone, Copy, Debug)]
pub struct GeomCfg {
    /// Below this `|det|` a level line counts as parallel to a boundary.
    pub eps_det: f64,
    /// Chord points closer than this are merged (region corners).
    pub eps_dedup: f64,
    /// Hard cap on levels visited per direction (+k and -k separately).
    pub max_levels: usize,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps_det: 1e-12,
            eps_dedup: 1e-9,
            max_levels: 10_000,
        }
    }
}

/// Closed half-plane `unit · p <= length`, with `(x, y) = unit * length`.
///
/// Invariants:
/// - `length > 0` and finite (checked at construction).
/// - Immutable once built.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Constraint {
    dir: Direction,
}

impl Constraint {
    pub fn new(x: f64, y: f64) -> Result<Self> {
        Ok(Self {
            dir: Direction::new(x, y)?,
        })
    }

    /// Strictly outside: `p · unit > length`. Boundary points do not violate.
    #[inline]
    pub fn violates(&self, p: Vector2<f64>) -> bool {
        p.dot(&self.dir.unit) > self.dir.length
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.dir.v.x
    }
    #[inline]
    pub fn y(&self) -> f64 {
        self.dir.v.y
    }
    #[inline]
    pub fn vector(&self) -> Vector2<f64> {
        self.dir.v
    }
    #[inline]
    pub fn unit(&self) -> Vector2<f64> {
        self.dir.unit
    }
    #[inline]
    pub fn length(&self) -> f64 {
        self.dir.length
    }
}

/// Linear functional (one-form) `p ↦ vector · p`.
///
/// Its level lines `{ p : unit · p = k }`, `k ∈ ℤ`, are the grid lines drawn for
/// this covector. A changed functional is a new `OneForm`; there is no setter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OneForm {
    dir: Direction,
}

impl OneForm {
    pub fn new(x: f64, y: f64) -> Result<Self> {
        Ok(Self {
            dir: Direction::new(x, y)?,
        })
    }

    /// Raw value `vector · p`.
    #[inline]
    pub fn eval(&self, p: Vector2<f64>) -> f64 {
        self.dir.v.dot(&p)
    }

    /// Normalized level `unit · p`; integer values are the enumerated lines.
    #[inline]
    pub fn level_of(&self, p: Vector2<f64>) -> f64 {
        self.dir.unit.dot(&p)
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.dir.v.x
    }
    #[inline]
    pub fn y(&self) -> f64 {
        self.dir.v.y
    }
    #[inline]
    pub fn vector(&self) -> Vector2<f64> {
        self.dir.v
    }
    #[inline]
    pub fn unit(&self) -> Vector2<f64> {
        self.dir.unit
    }
    #[inline]
    pub fn length(&self) -> f64 {
        self.dir.length
    }
}

impl std::ops::Neg for OneForm {
    type Output = OneForm;
    #[inline]
    fn neg(self) -> Self::Output {
        OneForm {
            dir: Direction {
                v: -self.dir.v,
                unit: -self.dir.unit,
                length: self.dir.length,
            },
        }
    }
}
