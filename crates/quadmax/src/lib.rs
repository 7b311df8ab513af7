//! Maximum-enclosing simple quadrilateral over a planar point set.
//!
//! Given points in the plane, find four of them forming a simple,
//! non-degenerate quadrilateral that strictly encloses as many of the other
//! points as possible. The search is exhaustive over all 4-combinations.
//!
//! Layout
//! - `geom2`: exact predicates, world bounds, random grid points.
//! - `quad`: candidate ordering, classification, and the pure search.
//! - `solver`: `GeometryCore`, the stateful owner used by front ends.
//!
//! API Policy
//! - This crate is project-internal. There is no stable public API; `api`
//!   is the curated surface for the CLI and benches.

pub mod api;
pub mod geom2;
pub mod quad;
pub mod solver;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Problem statement shown by front ends.
pub const TASK_TEXT: &str = "\
Problem statement:
A set of points is given on the plane. Find four of them such that the
quadrilateral built on them is not self-intersecting and contains the
maximum number of points of the set.";

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::rand::{random_points, RandomCfg, ReplayToken};
    pub use crate::geom2::{Bounds2, PointError};
    pub use crate::quad::{best_quad, Candidate, Quad};
    pub use crate::solver::{GeometryCore, Point, PointId, SolveResult, Tag};
    pub use nalgebra::Vector2 as Vec2;
}
