//! Outward enumeration of integer level lines clipped to a region.
//!
//! Purpose
//! - For a one-form `f`, produce the chords of `L_k = { unit · p = k }` inside a
//!   `Region`, for level 0 and then every `k = ±1, ±2, …` that still meets it.
//!
//! Search order
//! - Level 0 is always emitted (possibly empty) and tagged `primary`.
//! - `k = 1, 2, …` until the first empty chord, then `k = -1, -2, …` likewise.
//! - For a bounded convex region the levels that meet it form one contiguous
//!   run per direction, so stopping at the first gap is exact. `max_levels`
//!   bounds each direction for regions that are not bounded.
//!
//! Code cross-refs: `solvers::level_line_intersection`, `region::Region`

use std::ops::RangeInclusive;

use nalgebra::Vector2;

use super::region::Region;
use super::solvers::level_line_intersection;
use super::types::{GeomCfg, OneForm};

/// Portion of one level line inside the region, points in discovery order.
#[derive(Clone, Debug, PartialEq)]
pub struct Chord {
    pub level: i64,
    /// `level == 0`: the functional's own zero line.
    pub primary: bool,
    pub points: Vec<Vector2<f64>>,
}

impl Chord {
    fn empty(level: i64) -> Self {
        Self {
            level,
            primary: level == 0,
            points: Vec::new(),
        }
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }
    /// Endpoints when the chord is a proper segment.
    pub fn segment(&self) -> Option<(Vector2<f64>, Vector2<f64>)> {
        match self.points.as_slice() {
            [a, .., b] => Some((*a, *b)),
            _ => None,
        }
    }
}

/// Lowest and highest level among `chords`, as returned by `lines` (always contains 0).
pub fn level_range(chords: &[Chord]) -> RangeInclusive<i64> {
    let lo = chords.iter().map(|c| c.level).min().unwrap_or(0).min(0);
    let hi = chords.iter().map(|c| c.level).max().unwrap_or(0).max(0);
    lo..=hi
}

/// Level-line enumerator over a fixed region.
#[derive(Clone, Copy, Debug)]
pub struct GridEnumerator<'a> {
    region: &'a Region,
    cfg: GeomCfg,
}

impl<'a> GridEnumerator<'a> {
    pub fn new(region: &'a Region) -> Self {
        Self::with_cfg(region, GeomCfg::default())
    }

    pub fn with_cfg(region: &'a Region, cfg: GeomCfg) -> Self {
        Self { region, cfg }
    }

    #[inline]
    pub fn region(&self) -> &Region {
        self.region
    }

    #[inline]
    pub fn cfg(&self) -> GeomCfg {
        self.cfg
    }

    /// Clip level `k` of `f` to the region.
    ///
    /// Every constraint boundary is intersected with the level line; parallel
    /// boundaries are skipped, points outside the region dropped, and points
    /// within `eps_dedup` of an earlier one merged. A solved point lies on its
    /// own boundary, so only the other constraints are tested against it.
    pub fn chord(&self, f: &OneForm, k: i64) -> Chord {
        let mut chord = Chord::empty(k);
        for (i, c) in self.region.constraints().iter().enumerate() {
            let Ok(p) = level_line_intersection(f, k, c, self.cfg.eps_det) else {
                continue;
            };
            if !self.region.is_inside_except(p, i) {
                continue;
            }
            if chord
                .points
                .iter()
                .any(|q| (q - p).norm() < self.cfg.eps_dedup)
            {
                continue;
            }
            chord.points.push(p);
        }
        chord
    }

    /// Does level `k` of `f` meet the region at all?
    #[inline]
    pub fn enters_window(&self, f: &OneForm, k: i64) -> bool {
        !self.chord(f, k).is_empty()
    }

    /// All chords of `f`: level 0, then `1, 2, …`, then `-1, -2, …`.
    pub fn lines(&self, f: &OneForm) -> Vec<Chord> {
        let _span = tracing::debug_span!("lines", fx = f.x(), fy = f.y()).entered();
        let mut out = vec![self.chord(f, 0)];
        self.sweep(f, 1, &mut out);
        self.sweep(f, -1, &mut out);
        tracing::debug!(chords = out.len(), "level lines enumerated");
        out
    }

    fn sweep(&self, f: &OneForm, step: i64, out: &mut Vec<Chord>) {
        let mut k = step;
        for _ in 0..self.cfg.max_levels {
            let chord = self.chord(f, k);
            if chord.is_empty() {
                return;
            }
            out.push(chord);
            k += step;
        }
        tracing::warn!(
            step,
            max_levels = self.cfg.max_levels,
            "level cap reached; region may be unbounded along the functional"
        );
    }
}
