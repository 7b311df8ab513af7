//! Curated internal API (UNSTABLE).
//!
//! Important
//! - This is not a public API. It is a convenience surface for the CLI,
//!   benches and integration tests. Breaking changes are allowed.

// Exact predicates and bounds
pub use crate::geom2::{
    collinear, orient, segments_cross_properly, strictly_inside_convex, Bounds2, PointError,
};
// Random grid points
pub use crate::geom2::rand::{grid_to_world, random_points, RandomCfg, ReplayToken};
// Search
pub use crate::quad::{
    best_quad, best_quad_with_stats, classify, hull_order, Candidate, Quad, SearchStats, Shape,
};
// Stateful core
pub use crate::solver::{GeometryCore, Point, PointId, SolveResult, Tag};

use nalgebra::Vector2;

/// Solve a plain coordinate list in one call.
///
/// Returns the winner (indices into `points`) or `None`; same tie-break as
/// `GeometryCore::solve`.
pub fn solve_points(points: &[(f64, f64)]) -> Option<Candidate> {
    let pts: Vec<Vector2<f64>> = points.iter().map(|&(x, y)| Vector2::new(x, y)).collect();
    best_quad(&pts)
}
