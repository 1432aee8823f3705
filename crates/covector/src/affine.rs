//! Rotation + translation of a fixed polygon in homogeneous coordinates.
//!
//! The map is the 3×3 matrix
//! ```text
//! [  cos θ   sin θ   dx ]
//! [ -sin θ   cos θ   dy ]
//! [  0       0       1  ]
//! ```
//! applied to every original vertex `(x, y, 1)`. Parameters are plain values;
//! the cached image only changes when `recompute()` is called.

use nalgebra::{matrix, Matrix3, Vector2, Vector3};

/// Closed rectangle `[-1, 1] × [-2, 2]`, first vertex repeated.
pub const DEFAULT_SHAPE: [(f64, f64); 5] = [
    (-1.0, -2.0),
    (-1.0, 2.0),
    (1.0, 2.0),
    (1.0, -2.0),
    (-1.0, -2.0),
];

/// Rotation angle and translation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ShapeParams {
    pub theta: f64,
    pub dx: f64,
    pub dy: f64,
}

impl ShapeParams {
    pub fn matrix(&self) -> Matrix3<f64> {
        let (s, c) = self.theta.sin_cos();
        matrix![
            c, s, self.dx;
            -s, c, self.dy;
            0.0, 0.0, 1.0
        ]
    }
}

#[derive(Clone, Debug)]
pub struct ShapeTransform {
    original: Vec<Vector3<f64>>,
    params: ShapeParams,
    matrix: Matrix3<f64>,
    transformed: Vec<Vector3<f64>>,
}

impl ShapeTransform {
    /// Identity parameters; the image equals the original until parameters change.
    pub fn new(vertices: &[Vector2<f64>]) -> Self {
        let original: Vec<Vector3<f64>> = vertices
            .iter()
            .map(|v| Vector3::new(v.x, v.y, 1.0))
            .collect();
        let mut out = Self {
            transformed: original.clone(),
            original,
            params: ShapeParams::default(),
            matrix: Matrix3::identity(),
        };
        out.recompute();
        out
    }

    /// Plain parameter update; call `recompute()` to refresh the image.
    #[inline]
    pub fn set_params(&mut self, theta: f64, dx: f64, dy: f64) {
        self.params = ShapeParams { theta, dx, dy };
    }

    /// Drag gesture from `start` to `end`: translate to `start`, rotate by the
    /// screen-space angle of the drag (y axis pointing down).
    pub fn set_from_drag(&mut self, start: Vector2<f64>, end: Vector2<f64>) {
        let d = end - start;
        self.set_params((-d.y).atan2(d.x), start.x, start.y);
    }

    /// Rebuild the matrix and map every original vertex through it.
    pub fn recompute(&mut self) {
        self.matrix = self.params.matrix();
        let m = self.matrix;
        self.transformed.clear();
        self.transformed.extend(self.original.iter().map(|v| m * v));
    }

    #[inline]
    pub fn params(&self) -> ShapeParams {
        self.params
    }

    /// Matrix used by the last `recompute()`.
    #[inline]
    pub fn matrix(&self) -> &Matrix3<f64> {
        &self.matrix
    }

    pub fn original_vertices(&self) -> Vec<Vector2<f64>> {
        self.original.iter().map(|v| v.xy()).collect()
    }

    pub fn transformed_vertices(&self) -> Vec<Vector2<f64>> {
        self.transformed.iter().map(|v| v.xy()).collect()
    }

    #[inline]
    pub fn transformed_homogeneous(&self) -> &[Vector3<f64>] {
        &self.transformed
    }
}

impl Default for ShapeTransform {
    fn default() -> Self {
        let verts: Vec<Vector2<f64>> = DEFAULT_SHAPE
            .iter()
            .map(|&(x, y)| Vector2::new(x, y))
            .collect();
        Self::new(&verts)
    }
}
