use nalgebra::Vector2;

use super::error::{GeomError, Result};

/// Raw direction together with its length and unit vector.
///
/// Shared by `Constraint` and `OneForm`: both normalize the same way and only
/// differ in the role they play.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Direction {
    pub v: Vector2<f64>,
    pub unit: Vector2<f64>,
    pub length: f64,
}

impl Direction {
    pub fn new(x: f64, y: f64) -> Result<Self> {
        let v = Vector2::new(x, y);
        let length = v.norm();
        if !(length.is_finite()) || length <= 0.0 {
            return Err(GeomError::DegenerateVector { x, y });
        }
        Ok(Self {
            v,
            unit: v / length,
            length,
        })
    }
}

#[inline]
pub(crate) fn is_finite2(p: Vector2<f64>) -> bool {
    p.x.is_finite() && p.y.is_finite()
}
