//! Property tests for the quadrilateral search.
//!
//! Inputs are drawn from a small integer grid so that coincident points,
//! collinear triples and on-edge points show up often.

use std::collections::HashSet;

use nalgebra::Vector2;
use proptest::prelude::*;
use quadmax::api::{
    best_quad, classify, orient, segments_cross_properly, GeometryCore, PointId, Quad, Shape, Tag,
};

fn to_points(raw: &[(i32, i32)]) -> Vec<Vector2<f64>> {
    raw.iter()
        .map(|&(x, y)| Vector2::new(f64::from(x), f64::from(y)))
        .collect()
}

fn grid_points(max_len: usize) -> impl Strategy<Value = Vec<Vector2<f64>>> {
    prop::collection::vec((0i32..6, 0i32..6), 0..max_len).prop_map(|raw| to_points(&raw))
}

/// Naive search: try every cyclic order of each combination, accept strictly
/// counter-clockwise convex ones, count with half-plane tests.
fn reference(points: &[Vector2<f64>]) -> Option<([usize; 4], Vec<usize>)> {
    const ORDERS: [[usize; 4]; 6] = [
        [0, 1, 2, 3],
        [0, 1, 3, 2],
        [0, 2, 1, 3],
        [0, 2, 3, 1],
        [0, 3, 1, 2],
        [0, 3, 2, 1],
    ];
    let n = points.len();
    let mut best: Option<([usize; 4], Vec<usize>)> = None;
    for i in 0..n {
        for j in i + 1..n {
            for k in j + 1..n {
                for l in k + 1..n {
                    let combo = [i, j, k, l];
                    let ccw = ORDERS.iter().map(|o| o.map(|t| points[combo[t]])).find(|v| {
                        (0..4).all(|t| orient(v[t], v[(t + 1) % 4], v[(t + 2) % 4]) > 0.0)
                    });
                    let Some(v) = ccw else { continue };
                    let enclosed: Vec<usize> = (0..n)
                        .filter(|h| !combo.contains(h))
                        .filter(|&h| (0..4).all(|t| orient(v[t], v[(t + 1) % 4], points[h]) > 0.0))
                        .collect();
                    if best.as_ref().is_none_or(|(_, e)| enclosed.len() > e.len()) {
                        best = Some((combo, enclosed));
                    }
                }
            }
        }
    }
    best
}

fn sorted(order: [usize; 4]) -> [usize; 4] {
    let mut s = order;
    s.sort_unstable();
    s
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(96))]

    #[test]
    fn agrees_with_naive_reference(points in grid_points(10)) {
        let got = best_quad(&points);
        let want = reference(&points);
        match (got, want) {
            (None, None) => {}
            (Some(c), Some((combo, enclosed))) => {
                prop_assert_eq!(sorted(c.quad.order), combo);
                prop_assert_eq!(c.enclosed, enclosed);
            }
            (got, want) => prop_assert!(false, "got {:?}, want {:?}", got, want),
        }
    }

    #[test]
    fn winner_is_simple_and_non_degenerate(points in grid_points(10)) {
        if let Some(c) = best_quad(&points) {
            let order = c.quad.order;
            let distinct: HashSet<usize> = order.iter().copied().collect();
            prop_assert_eq!(distinct.len(), 4);
            let v = c.quad.vertices(&points);
            prop_assert_eq!(classify(&v), Shape::Convex);
            for (a, b, d) in [(0, 1, 2), (0, 1, 3), (0, 2, 3), (1, 2, 3)] {
                prop_assert!(orient(v[a], v[b], v[d]) != 0.0);
            }
            prop_assert!(segments_cross_properly(v[0], v[2], v[1], v[3]));
            prop_assert!(!segments_cross_properly(v[0], v[1], v[2], v[3]));
            prop_assert!(!segments_cross_properly(v[1], v[2], v[3], v[0]));
            prop_assert!(c.enclosed.iter().all(|h| !order.contains(h)));
        }
    }

    #[test]
    fn solve_partitions_points(points in grid_points(10)) {
        let mut core = GeometryCore::new();
        core.extend(points.iter().copied());
        let all: Vec<PointId> = core.points().iter().map(|p| p.id).collect();
        let res = core.solve().clone();
        prop_assert!(core.is_solved());

        let verts: Vec<PointId> = res.vertices.map(|v| v.to_vec()).unwrap_or_default();
        let mut seen: HashSet<PointId> = HashSet::new();
        for id in verts.iter().chain(&res.enclosed).chain(&res.outside) {
            prop_assert!(seen.insert(*id), "point {:?} classified twice", id);
        }
        prop_assert_eq!(seen.len(), all.len());
        for id in &all {
            let expected = if verts.contains(id) {
                Tag::Vertex
            } else if res.enclosed.contains(id) {
                Tag::Enclosed
            } else {
                Tag::Outside
            };
            prop_assert_eq!(core.tag(*id), expected);
        }
        if all.len() < 4 {
            prop_assert!(!res.has_winner());
            prop_assert_eq!(&res.outside, &all);
        }
    }

    #[test]
    fn solve_is_idempotent(points in grid_points(10)) {
        let mut core = GeometryCore::new();
        core.extend(points);
        let first = core.solve().clone();
        let second = core.solve().clone();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn adding_an_enclosed_point_never_lowers_the_best(points in grid_points(10)) {
        let Some(c) = best_quad(&points) else { return Ok(()); };
        let v = c.quad.vertices(&points);
        let inner = (v[0] + v[1] + v[2] + v[3]) / 4.0;
        let mut grown = points.clone();
        grown.push(inner);
        let after = best_quad(&grown).expect("previous winner is still accepted");
        prop_assert!(after.enclosed_count() > c.enclosed_count());
    }

    #[test]
    fn edge_points_are_not_enclosed(points in grid_points(10)) {
        let Some(c) = best_quad(&points) else { return Ok(()); };
        let v = c.quad.vertices(&points);
        let mut grown = points.clone();
        for t in 0..4 {
            grown.push((v[t] + v[(t + 1) % 4]) / 2.0);
        }
        let q = Quad::from_combination(&grown, sorted(c.quad.order)).expect("same combination");
        let enclosed: Vec<usize> = q.enclosed(&grown).collect();
        prop_assert!(enclosed.iter().all(|&h| h < points.len()));
        prop_assert_eq!(enclosed, c.enclosed);
    }
}
