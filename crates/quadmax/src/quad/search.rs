//! Exhaustive C(n,4) search with a strict-improvement update.

use nalgebra::Vector2;

use super::Quad;

/// Winning quadrilateral and the indices it encloses (ascending).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Candidate {
    pub quad: Quad,
    pub enclosed: Vec<usize>,
}

impl Candidate {
    #[inline]
    pub fn enclosed_count(&self) -> usize {
        self.enclosed.len()
    }
}

/// Counters reported alongside a search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub combinations: u64,
    pub accepted: u64,
}

/// Best quadrilateral over all 4-combinations, or `None` if no combination is
/// accepted (fewer than 4 points, or every combination degenerate/dart).
///
/// Ties keep the first combination in lexicographic order of `i<j<k<l`.
pub fn best_quad(points: &[Vector2<f64>]) -> Option<Candidate> {
    best_quad_with_stats(points).0
}

pub fn best_quad_with_stats(points: &[Vector2<f64>]) -> (Option<Candidate>, SearchStats) {
    let n = points.len();
    let mut stats = SearchStats::default();
    let mut best: Option<(Quad, usize)> = None;
    for i in 0..n {
        for j in i + 1..n {
            for k in j + 1..n {
                for l in k + 1..n {
                    stats.combinations += 1;
                    let Some(quad) = Quad::from_combination(points, [i, j, k, l]) else {
                        continue;
                    };
                    stats.accepted += 1;
                    let count = quad.count_enclosed(points);
                    if best.as_ref().is_none_or(|&(_, c)| count > c) {
                        best = Some((quad, count));
                    }
                }
            }
        }
    }
    let best = best.map(|(quad, _)| Candidate {
        enclosed: quad.enclosed(points).collect(),
        quad,
    });
    (best, stats)
}
