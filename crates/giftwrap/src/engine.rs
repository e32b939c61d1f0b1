//! Gift-wrapping (Jarvis march) hull walk with colinearity grouping.
//!
//! Purpose
//! - Compute the ordered convex boundary of an unordered point set, keeping
//!   points that fall on a hull edge as explicit vertices (distance-ordered).
//!
//! Why this shape
//! - The walk operates on an internal arena (owned point copy + active flags)
//!   so removal is an O(1) flag flip and the caller's slice stays untouched.
//! - The provisional candidate is the first active point, not a random pick,
//!   so runs are reproducible.
//! - A sweep cap turns the classic non-termination risk of gift wrapping on
//!   pathological input into `HullError::DegenerateInput`.

use nalgebra::Vector2;

use crate::types::{HullCfg, HullError};
use crate::util::{approx_eq, dist2, point_edge_relation};

/// Ordered hull boundary: first vertex is the min-x start vertex, winding is
/// not normalized (see `util::ensure_ccw`), no closing repeat, no duplicates.
pub type Hull = Vec<Vector2<f64>>;

/// Shorthand for `compute_hull` with `HullCfg::default()`.
#[inline]
pub fn compute_hull_with_defaults(points: &[Vector2<f64>]) -> Result<Option<Hull>, HullError> {
    compute_hull(points, HullCfg::default())
}

/// Convex hull of `points` via gift wrapping.
///
/// - Fewer than 3 points: `Ok(None)`, no boundary can be formed.
/// - Exactly 3 points: returned unchanged in input order. The triple is not
///   checked for colinearity or winding; callers needing either must
///   post-process.
/// - Otherwise: the walk below. Input may contain duplicates and is consumed
///   only through an internal copy.
pub fn compute_hull(points: &[Vector2<f64>], cfg: HullCfg) -> Result<Option<Hull>, HullError> {
    if points.len() < 3 {
        return Ok(None);
    }
    if points.len() == 3 {
        return Ok(Some(points.to_vec()));
    }

    let pts: Vec<Vector2<f64>> = points.to_vec();
    let n = pts.len();
    let mut active = vec![true; n];
    let mut live = n;

    let start = find_start(&pts, cfg.eps);
    let start_pos = pts[start];
    active[start] = false;
    live -= 1;

    let mut hull: Hull = Vec::with_capacity(n);
    hull.push(start_pos);

    let mut current = start_pos;
    let mut colinear: Vec<usize> = Vec::new();
    let mut start_restored = false;
    let mut counter = 0usize;
    let cap = cfg.max_sweep_factor.max(1) * n + 4;

    for sweep in 0..cap {
        // Re-admit the start vertex exactly once, two committed edges into the
        // walk, so the closing edge can select it again. Re-admit early if the
        // working set empties first (all-colinear input reaches the far end of
        // the line before the counter does).
        if !start_restored && (counter == 2 || live == 0) {
            active[start] = true;
            live += 1;
            start_restored = true;
        }

        // Deterministic provisional candidate: first active point distinct
        // from the current vertex. Exact duplicates of the current vertex span
        // no edge and are retired here.
        let mut provisional = None;
        for (i, p) in pts.iter().enumerate() {
            if !active[i] {
                continue;
            }
            if *p == current {
                active[i] = false;
                live -= 1;
                continue;
            }
            provisional = Some(i);
            break;
        }
        let Some(mut next) = provisional else {
            if start_restored {
                return Err(HullError::DegenerateInput { sweeps: sweep + 1 });
            }
            // Working set exhausted before wrap-around; the top of the next
            // sweep re-admits the start vertex.
            continue;
        };

        // Test every other remaining point against the segment
        // current -> next. Right of the segment wins the candidacy and voids
        // the colinear group accumulated so far; on the segment joins it.
        colinear.clear();
        for i in 0..n {
            if !active[i] || i == next {
                continue;
            }
            let rel = point_edge_relation(current, pts[next], pts[i]);
            if rel < -cfg.eps {
                next = i;
                colinear.clear();
            } else if rel.abs() <= cfg.eps {
                colinear.push(i);
            }
        }

        if colinear.is_empty() {
            commit(&mut hull, pts[next]);
            active[next] = false;
            live -= 1;
            current = pts[next];
        } else {
            // The chosen candidate joins its own colinear group; the whole
            // edge is committed near-to-far and the walk resumes at the far
            // end.
            colinear.push(next);
            colinear.sort_by(|&a, &b| {
                let da = dist2(pts[a], current);
                let db = dist2(pts[b], current);
                da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
            });
            for &i in &colinear {
                commit(&mut hull, pts[i]);
                active[i] = false;
                live -= 1;
            }
            current = pts[colinear[colinear.len() - 1]];
            colinear.clear();
        }

        // Closed the loop? The closing vertex was already suppressed by
        // `commit`, so the hull carries no repeat of its first vertex.
        if start_restored && current == start_pos {
            return Ok(Some(hull));
        }
        counter += 1;
    }

    Err(HullError::DegenerateInput { sweeps: cap })
}

/// Append `p` unless it repeats the hull's first or last vertex. Suppresses
/// the closing start vertex and exact input duplicates of committed vertices.
#[inline]
fn commit(hull: &mut Hull, p: Vector2<f64>) {
    if hull.first() == Some(&p) || hull.last() == Some(&p) {
        return;
    }
    hull.push(p);
}

/// Start vertex: minimum x, ties broken toward minimum y. Both comparisons
/// use the same approximate-equality tolerance.
fn find_start(pts: &[Vector2<f64>], eps: f64) -> usize {
    let mut best = 0usize;
    for i in 1..pts.len() {
        let p = pts[i];
        let b = pts[best];
        if approx_eq(p.x, b.x, eps) {
            if !approx_eq(p.y, b.y, eps) && p.y < b.y {
                best = i;
            }
        } else if p.x < b.x {
            best = i;
        }
    }
    best
}
