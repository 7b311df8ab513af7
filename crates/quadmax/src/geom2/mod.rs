//! Exact 2D predicates for small point configurations.
//!
//! Purpose
//! - Provide the orientation-based building blocks used by the quadrilateral
//!   search: signed area, collinearity, proper segment crossing, and a strict
//!   (boundary-exclusive) half-plane containment test for convex rings.
//! - `rand`: reproducible random point sets on a world grid.
//! - Keep predicates exact on the input `f64` values: a triple is collinear iff
//!   its cross product is exactly zero. No epsilons here.
//!
//! References
//! - Code cross-refs: `quad::{Quad, Shape}`, `solver::GeometryCore`

pub mod rand;
mod types;
mod util;

pub(crate) use types::check_finite;
pub use types::{Bounds2, PointError};
pub use util::{collinear, orient, segments_cross_properly, strictly_inside_convex};
