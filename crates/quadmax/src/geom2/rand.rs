//! Reproducible random point sets on a coarse grid.
//!
//! Model
//! - Draw integer cells `(gx, gy)` uniformly from a `cols × rows` grid and map
//!   them linearly onto the world rectangle (grid corners land on the
//!   rectangle corners). The coarse grid deliberately produces coincident and
//!   collinear cells. After mapping, collinearity is decided on the rounded
//!   `f64` positions: lattice points stay exactly collinear only when the
//!   mapping is exact (e.g. a span that is a multiple of `n - 1`), otherwise
//!   `orient` decides the side, and the search uses that one predicate for
//!   both rejection and containment.
//! - Determinism uses a replay token `(seed, index)` mixed into one RNG; there
//!   is no process-wide randomness.
//!
//! References
//! - Code cross-refs: `Bounds2`, `solver::GeometryCore::extend`

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{Bounds2, PointError};

/// Grid sampler configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RandomCfg {
    pub cols: u32,
    pub rows: u32,
    pub bounds: Bounds2,
}

impl Default for RandomCfg {
    fn default() -> Self {
        Self {
            cols: 30,
            rows: 30,
            bounds: Bounds2::default(),
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
    pub fn new(seed: u64) -> Self {
        Self { seed, index: 0 }
    }

    /// Token for the next draw in the same stream.
    #[inline]
    pub fn next(self) -> Self {
        Self {
            seed: self.seed,
            index: self.index.wrapping_add(1),
        }
    }

    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer
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
}

/// World position of grid cell `(gx, gy)`.
pub fn grid_to_world(cfg: &RandomCfg, gx: u32, gy: u32) -> Vector2<f64> {
    let frac = |g: u32, n: u32| {
        if n > 1 {
            f64::from(g) / f64::from(n - 1)
        } else {
            0.5
        }
    };
    cfg.bounds.lerp(Vector2::new(frac(gx, cfg.cols), frac(gy, cfg.rows)))
}

fn sample_cell<R: Rng>(cfg: &RandomCfg, rng: &mut R) -> Vector2<f64> {
    let gx = rng.gen_range(0..cfg.cols);
    let gy = rng.gen_range(0..cfg.rows);
    grid_to_world(cfg, gx, gy)
}

/// Draw `count` grid points. Same `(cfg, count, tok)` gives the same points.
pub fn random_points(
    cfg: RandomCfg,
    count: usize,
    tok: ReplayToken,
) -> Result<Vec<Vector2<f64>>, PointError> {
    if cfg.cols == 0 || cfg.rows == 0 {
        return Err(PointError::config(format!(
            "grid must be non-empty, got {}x{}",
            cfg.cols, cfg.rows
        )));
    }
    let bounds = Bounds2::new(cfg.bounds.min, cfg.bounds.max)?;
    let cfg = RandomCfg { bounds, ..cfg };
    let mut rng = tok.to_std_rng();
    Ok((0..count).map(|_| sample_cell(&cfg, &mut rng)).collect())
}
