//! Dual basis: two one-forms as the rows of a linear map.
//!
//! With forms `α, β` the map is `T = [α; β]`, so `T v = (α·v, β·v)` gives the
//! coordinates of a probe vector `v` in the basis dual to `(α, β)`. The probe
//! vector also splits as `v = p₁ + p₂` with `p₁ ∈ ker β`, `p₂ ∈ ker α`.
//!
//! Like `ShapeTransform`, cached results only change on `recompute()`.

use nalgebra::{Matrix2, Vector2};

use crate::geom2::{Chord, GridEnumerator, OneForm};

pub const DEFAULT_X_FORM: (f64, f64) = (2.0, 1.0);
pub const DEFAULT_Y_FORM: (f64, f64) = (1.0, 2.0);
pub const DEFAULT_VECTOR: (f64, f64) = (1.0, 1.0);

/// Straight segment for axis-component overlays.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub from: Vector2<f64>,
    pub to: Vector2<f64>,
}

#[derive(Clone, Debug)]
pub struct DualBasis {
    x_form: OneForm,
    y_form: OneForm,
    v: Vector2<f64>,
    transform: Matrix2<f64>,
    image: Vector2<f64>,
}

impl DualBasis {
    pub fn new(x_form: OneForm, y_form: OneForm, v: Vector2<f64>) -> Self {
        let mut out = Self {
            x_form,
            y_form,
            v,
            transform: Matrix2::zeros(),
            image: Vector2::zeros(),
        };
        out.recompute();
        out
    }

    #[inline]
    pub fn set_forms(&mut self, x_form: OneForm, y_form: OneForm) {
        self.x_form = x_form;
        self.y_form = y_form;
    }

    #[inline]
    pub fn set_vector(&mut self, v: Vector2<f64>) {
        self.v = v;
    }

    /// Rebuild `T` from the current forms and re-apply it to `v`.
    pub fn recompute(&mut self) {
        self.transform = Matrix2::from_rows(&[
            self.x_form.vector().transpose(),
            self.y_form.vector().transpose(),
        ]);
        self.image = self.transform * self.v;
    }

    #[inline]
    pub fn x_form(&self) -> &OneForm {
        &self.x_form
    }
    #[inline]
    pub fn y_form(&self) -> &OneForm {
        &self.y_form
    }
    #[inline]
    pub fn vector(&self) -> Vector2<f64> {
        self.v
    }
    #[inline]
    pub fn transform(&self) -> &Matrix2<f64> {
        &self.transform
    }
    /// `T v`, the dual coordinates of `v`.
    #[inline]
    pub fn image(&self) -> Vector2<f64> {
        self.image
    }

    /// Axis-aligned legs of the image: `0 → (ix, 0)` and `0 → (0, iy)`.
    pub fn image_components(&self) -> [Segment; 2] {
        let o = Vector2::zeros();
        [
            Segment {
                from: o,
                to: Vector2::new(self.image.x, 0.0),
            },
            Segment {
                from: o,
                to: Vector2::new(0.0, self.image.y),
            },
        ]
    }

    /// `[p₁, p₂]` with `α·p₁ = α·v, β·p₁ = 0` and `β·p₂ = β·v, α·p₂ = 0`.
    ///
    /// None if the forms are (nearly) parallel.
    pub fn decomposition(&self, eps_det: f64) -> Option<[Vector2<f64>; 2]> {
        if self.transform.determinant().abs() < eps_det {
            return None;
        }
        let inv = self.transform.try_inverse()?;
        Some([
            inv * Vector2::new(self.image.x, 0.0),
            inv * Vector2::new(0.0, self.image.y),
        ])
    }

    /// Level-line grids of both forms.
    pub fn grids(&self, grid: &GridEnumerator<'_>) -> (Vec<Chord>, Vec<Chord>) {
        (grid.lines(&self.x_form), grid.lines(&self.y_form))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom2::Region;
    use nalgebra::vector;

    fn form((x, y): (f64, f64)) -> OneForm {
        OneForm::new(x, y).unwrap()
    }

    fn default_basis() -> DualBasis {
        DualBasis::new(
            form(DEFAULT_X_FORM),
            form(DEFAULT_Y_FORM),
            Vector2::new(DEFAULT_VECTOR.0, DEFAULT_VECTOR.1),
        )
    }

    #[test]
    fn image_is_pair_of_evaluations() {
        let d = default_basis();
        assert_eq!(d.image(), vector![3.0, 3.0]);
        assert_eq!(d.transform()[(0, 1)], 1.0);
        assert_eq!(d.transform()[(1, 0)], 1.0);
        let [a, b] = d.image_components();
        assert_eq!(a.to, vector![3.0, 0.0]);
        assert_eq!(b.to, vector![0.0, 3.0]);
        assert_eq!(a.from, Vector2::zeros());
    }

    #[test]
    fn decomposition_splits_probe_vector() {
        let d = default_basis();
        let [p1, p2] = d.decomposition(1e-12).expect("independent forms");
        assert!((p1 - vector![2.0, -1.0]).norm() < 1e-12);
        assert!((p2 - vector![-1.0, 2.0]).norm() < 1e-12);
        assert!((p1 + p2 - d.vector()).norm() < 1e-12);
        assert!(d.y_form().eval(p1).abs() < 1e-12);
        assert!(d.x_form().eval(p2).abs() < 1e-12);
    }

    #[test]
    fn parallel_forms_have_no_decomposition() {
        let d = DualBasis::new(form((1.0, 1.0)), form((2.0, 2.0)), vector![1.0, 0.0]);
        assert!(d.decomposition(1e-12).is_none());
    }

    #[test]
    fn updates_wait_for_recompute() {
        let mut d = default_basis();
        d.set_vector(vector![1.0, 0.0]);
        d.set_forms(form((1.0, 0.0)), form((0.0, 1.0)));
        assert_eq!(d.image(), vector![3.0, 3.0]);
        d.recompute();
        assert_eq!(d.image(), vector![1.0, 0.0]);
        assert_eq!(*d.transform(), Matrix2::identity());
    }

    #[test]
    fn grids_for_both_forms() {
        let r = Region::new(-5.0, 5.0).unwrap();
        let g = GridEnumerator::new(&r);
        let d = DualBasis::new(form((1.0, 0.0)), form((0.0, 1.0)), vector![1.0, 1.0]);
        let (gx, gy) = d.grids(&g);
        assert_eq!(gx.len(), 11);
        assert_eq!(gy.len(), 11);
        assert!(gx[0].primary && gy[0].primary);
    }
}
