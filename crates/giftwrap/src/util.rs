//! Geometric predicates and polygon helpers.
//!
//! The orientation predicate is the only arithmetic the walk depends on;
//! everything else here is caller-side post-processing (winding, membership).

use nalgebra::Vector2;

/// Orientation of `c` relative to the directed segment `a -> b`:
/// `det([a - c, b - c])`. Negative: `c` is to the right of the segment.
/// Positive: to the left. Near zero: colinear (up to the caller's eps).
#[inline]
pub fn point_edge_relation(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> f64 {
    let u = a - c;
    let v = b - c;
    u.x * v.y - u.y * v.x
}

/// Approximate scalar equality with absolute tolerance.
#[inline]
pub fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps
}

/// Squared distance between two points (colinear-group ordering key).
#[inline]
pub fn dist2(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    (a - b).norm_squared()
}

/// Signed polygon area (shoelace). Positive for counter-clockwise winding.
pub fn signed_area(poly: &[Vector2<f64>]) -> f64 {
    if poly.len() < 3 {
        return 0.0;
    }
    let mut acc = 0.0;
    for i in 0..poly.len() {
        let p = poly[i];
        let q = poly[(i + 1) % poly.len()];
        acc += p.x * q.y - q.x * p.y;
    }
    0.5 * acc
}

/// Normalize winding to counter-clockwise by reversing the tail, which keeps
/// the start vertex in place. The hull walk itself leaves winding unspecified.
pub fn ensure_ccw(hull: &mut [Vector2<f64>]) {
    if signed_area(hull) < 0.0 {
        hull[1..].reverse();
    }
}

/// Membership test for a convex polygon, winding-agnostic: `p` is inside or
/// on the boundary iff the edge relations never take both strict signs.
pub fn contains_point_eps(hull: &[Vector2<f64>], p: Vector2<f64>, eps: f64) -> bool {
    if hull.len() < 3 {
        return false;
    }
    let mut pos = false;
    let mut neg = false;
    for i in 0..hull.len() {
        let a = hull[i];
        let b = hull[(i + 1) % hull.len()];
        let rel = point_edge_relation(a, b, p);
        if rel > eps {
            pos = true;
        } else if rel < -eps {
            neg = true;
        }
        if pos && neg {
            return false;
        }
    }
    true
}
