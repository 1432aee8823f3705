//! Curated surface for the presentation layer and the CLI.
//!
//! Startup builds one `Region`; every edit of a basis direction builds a new
//! `OneForm` and asks a `GridEnumerator` for its chords.

pub use crate::affine::{ShapeParams, ShapeTransform, DEFAULT_SHAPE};
pub use crate::dual::{DualBasis, Segment, DEFAULT_VECTOR, DEFAULT_X_FORM, DEFAULT_Y_FORM};
pub use crate::geom2::rand::{draw_one_form, FormCfg, ReplayToken};
pub use crate::geom2::{
    level_line_intersection, level_range, Chord, Constraint, GeomCfg, GeomError, GridEnumerator,
    OneForm, Region, DEFAULT_MAX, DEFAULT_MIN,
};

use nalgebra::Vector2;

/// Chords of `f` clipped to `[min, max]²` with default tolerances.
pub fn grid_lines(min: f64, max: f64, f: Vector2<f64>) -> Result<Vec<Chord>, GeomError> {
    let region = Region::new(min, max)?;
    let f = OneForm::new(f.x, f.y)?;
    Ok(GridEnumerator::new(&region).lines(&f))
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn grid_lines_default_viewport() {
        let lines = grid_lines(DEFAULT_MIN, DEFAULT_MAX, vector![0.0, 2.0]).unwrap();
        assert_eq!(lines.len(), 11);
        assert!(lines[0].primary);
    }

    #[test]
    fn grid_lines_propagates_construction_errors() {
        assert!(matches!(
            grid_lines(-5.0, 5.0, vector![0.0, 0.0]),
            Err(GeomError::DegenerateVector { .. })
        ));
        assert!(matches!(
            grid_lines(5.0, -5.0, vector![1.0, 0.0]),
            Err(GeomError::DegenerateRegion { .. })
        ));
    }
}
