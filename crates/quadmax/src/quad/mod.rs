//! Quadrilateral candidates and the exhaustive search.
//!
//! Purpose
//! - Turn an unordered 4-combination of points into a cyclic vertex order
//!   (polar angle around the centroid), classify the resulting polygon, and
//!   count the points strictly inside it.
//! - `best_quad` runs the full C(n,4) enumeration as a pure function over a
//!   coordinate slice, so callers may run it on a snapshot off-thread.
//!
//! Acceptance
//! - Only `Shape::Convex` candidates are accepted: no three vertices collinear
//!   and the diagonals `v0v2`, `v1v3` cross at one interior point. A combination
//!   with one point strictly inside the triangle of the other three is a dart
//!   and is skipped.
//!
//! References
//! - Code cross-refs: `geom2::{orient, segments_cross_properly, strictly_inside_convex}`,
//!   `solver::GeometryCore::solve`

mod search;

pub use search::{best_quad, best_quad_with_stats, Candidate, SearchStats};

use nalgebra::Vector2;

use crate::geom2::{collinear, segments_cross_properly, strictly_inside_convex};

/// Shape of a 4-vertex polygon taken in a given cyclic order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    /// Some three vertices are collinear (coincident points included).
    Degenerate,
    /// Simple but not convex: one vertex lies inside the triangle of the others.
    Dart,
    /// Two opposite edges cross (bow-tie).
    Crossed,
    /// Simple and convex: the diagonals cross at one interior point.
    Convex,
}

/// Classify the polygon `v0 v1 v2 v3`.
pub fn classify(v: &[Vector2<f64>; 4]) -> Shape {
    let triples = [(0, 1, 2), (0, 1, 3), (0, 2, 3), (1, 2, 3)];
    if triples
        .iter()
        .any(|&(a, b, c)| collinear(v[a], v[b], v[c]))
    {
        return Shape::Degenerate;
    }
    if segments_cross_properly(v[0], v[2], v[1], v[3]) {
        Shape::Convex
    } else if segments_cross_properly(v[0], v[1], v[2], v[3])
        || segments_cross_properly(v[1], v[2], v[3], v[0])
    {
        Shape::Crossed
    } else {
        Shape::Dart
    }
}

/// Cyclic order of four points by polar angle around their centroid
/// (counter-clockwise from the negative x-axis). Ties go to the point nearer
/// the centroid, then to the smaller index.
pub fn hull_order(points: &[Vector2<f64>], combo: [usize; 4]) -> [usize; 4] {
    let centroid = combo
        .iter()
        .fold(Vector2::zeros(), |acc: Vector2<f64>, &i| acc + points[i])
        / 4.0;
    let mut keyed = combo.map(|i| {
        let d = points[i] - centroid;
        (d.y.atan2(d.x), d.norm_squared(), i)
    });
    keyed.sort_by(|a, b| {
        a.0.total_cmp(&b.0)
            .then(a.1.total_cmp(&b.1))
            .then(a.2.cmp(&b.2))
    });
    keyed.map(|(_, _, i)| i)
}

/// Four indices into a point slice, in counter-clockwise cyclic order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Quad {
    pub order: [usize; 4],
}

impl Quad {
    /// Accepted quadrilateral for a combination, or `None` if the hull order
    /// is not a convex, non-degenerate polygon.
    pub fn from_combination(points: &[Vector2<f64>], combo: [usize; 4]) -> Option<Self> {
        let quad = Quad {
            order: hull_order(points, combo),
        };
        match classify(&quad.vertices(points)) {
            Shape::Convex => Some(quad),
            _ => None,
        }
    }

    #[inline]
    pub fn vertices(&self, points: &[Vector2<f64>]) -> [Vector2<f64>; 4] {
        self.order.map(|i| points[i])
    }

    #[inline]
    pub fn has_vertex(&self, i: usize) -> bool {
        self.order.contains(&i)
    }

    /// `p` lies strictly inside the quadrilateral (edges excluded).
    ///
    /// Accepted quads are convex and counter-clockwise, so this is the
    /// half-plane test against each edge.
    #[inline]
    pub fn contains_strict(&self, points: &[Vector2<f64>], p: Vector2<f64>) -> bool {
        strictly_inside_convex(&self.vertices(points), p)
    }

    /// Indices of the non-vertex points strictly inside, ascending.
    pub fn enclosed<'a>(&self, points: &'a [Vector2<f64>]) -> impl Iterator<Item = usize> + 'a {
        let verts = self.vertices(points);
        let quad = *self;
        points
            .iter()
            .enumerate()
            .filter(move |&(h, p)| !quad.has_vertex(h) && strictly_inside_convex(&verts, *p))
            .map(|(h, _)| h)
    }

    #[inline]
    pub fn count_enclosed(&self, points: &[Vector2<f64>]) -> usize {
        self.enclosed(points).count()
    }
}
