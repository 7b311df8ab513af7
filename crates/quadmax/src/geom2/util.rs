use nalgebra::Vector2;

/// Twice the signed area of triangle `abc`.
/// Positive for a counter-clockwise turn a→b→c, zero iff collinear.
#[inline]
pub fn orient(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> f64 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}

/// `a`, `b`, `c` lie on one line (exact zero cross product).
#[inline]
pub fn collinear(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> bool {
    orient(a, b, c) == 0.0
}

/// Segments `ab` and `cd` cross at a single point interior to both.
///
/// Touching at an endpoint or overlapping collinearly is not a proper crossing.
pub fn segments_cross_properly(
    a: Vector2<f64>,
    b: Vector2<f64>,
    c: Vector2<f64>,
    d: Vector2<f64>,
) -> bool {
    let d1 = orient(a, b, c);
    let d2 = orient(a, b, d);
    let d3 = orient(c, d, a);
    let d4 = orient(c, d, b);
    opposite_signs(d1, d2) && opposite_signs(d3, d4)
}

#[inline]
fn opposite_signs(u: f64, v: f64) -> bool {
    (u > 0.0 && v < 0.0) || (u < 0.0 && v > 0.0)
}

/// `p` lies strictly inside the convex counter-clockwise ring `ring`.
///
/// Each edge is a half-plane `orient(a, b, p) > 0`, so a point on an edge or
/// at a vertex is outside, by the same exact predicate that decides
/// collinearity. Rings that are not convex and counter-clockwise contain
/// nothing useful; callers classify first.
pub fn strictly_inside_convex(ring: &[Vector2<f64>], p: Vector2<f64>) -> bool {
    let n = ring.len();
    n >= 3 && (0..n).all(|k| orient(ring[k], ring[(k + 1) % n], p) > 0.0)
}
