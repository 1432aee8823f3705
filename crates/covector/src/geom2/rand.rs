//! Random one-forms (uniform angle, bounded length) with replay tokens.
//!
//! Purpose
//! - Deterministic, indexable draws of non-degenerate functionals for
//!   property tests and benchmarks of the level-line enumerator.
//!
//! Model
//! - Angle uniform on [0, 2π), length uniform on `[len_min, len_max]`.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use super::error::Result;
use super::types::OneForm;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Sampler configuration for `draw_one_form`.
#[derive(Clone, Copy, Debug)]
pub struct FormCfg {
    /// Lower length bound; clamped to at least 1e-6.
    pub len_min: f64,
    pub len_max: f64,
}
impl Default for FormCfg {
    fn default() -> Self {
        Self {
            len_min: 0.25,
            len_max: 4.0,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}
impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }

    /// Next token in the same stream.
    #[inline]
    pub fn next_index(self) -> Self {
        Self {
            seed: self.seed,
            index: self.index.wrapping_add(1),
        }
    }
}

/// Draw one functional; fails only for a non-finite configuration.
pub fn draw_one_form(cfg: FormCfg, tok: ReplayToken) -> Result<OneForm> {
    let mut rng = tok.to_std_rng();
    let lo = cfg.len_min.max(1e-6);
    let hi = cfg.len_max.max(lo);
    let theta = rng.gen::<f64>() * std::f64::consts::TAU;
    let len = lo + rng.gen::<f64>() * (hi - lo);
    OneForm::new(theta.cos() * len, theta.sin() * len)
}
