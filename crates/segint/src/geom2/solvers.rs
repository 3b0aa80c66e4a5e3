//! Intersection point solver and the composed query.
//!
//! - `find_intersection`: Cramer's rule on the two implicit line equations
//!   `a·x + b·y = c`; a zero determinant means parallel or coincident lines.
//! - `query`: all-origin guard, then decider, then solver.
//!
//! Code cross-refs: `predicates::do_intersect`, `types::{Intersection,Outcome,QueryCfg}`

use nalgebra::Vector2;

use super::predicates::do_intersect;
use super::types::{Intersection, Outcome, QueryCfg, Segment, SegmentPair};
use super::util::round_to;

/// Implicit line through a segment: `(a, b, c)` with `a·x + b·y = c`.
#[inline]
fn implicit_line(s: &Segment) -> (f64, f64, f64) {
    let a = s.q.y - s.p.y;
    let b = s.p.x - s.q.x;
    let c = a * s.p.x + b * s.p.y;
    (a, b, c)
}

/// Intersection of two segments with coordinates rounded to one decimal.
///
/// Returns `None` if the segments do not intersect; the decider is re-run here.
pub fn find_intersection(s1: &Segment, s2: &Segment) -> Option<Intersection> {
    find_intersection_with(s1, s2, QueryCfg::default().decimals)
}

/// As `find_intersection`, rounding to `decimals` places.
pub fn find_intersection_with(s1: &Segment, s2: &Segment, decimals: u32) -> Option<Intersection> {
    if !do_intersect(s1, s2) {
        return None;
    }
    let (a1, b1, c1) = implicit_line(s1);
    let (a2, b2, c2) = implicit_line(s2);

    let det = a1 * b2 - a2 * b1;
    if det == 0.0 {
        return Some(Intersection::Collinear);
    }
    let x = (b2 * c1 - b1 * c2) / det;
    let y = (a1 * c2 - a2 * c1) / det;
    Some(Intersection::Point(Vector2::new(
        round_to(x, decimals),
        round_to(y, decimals),
    )))
}

/// Classify a segment pair under the default policy.
pub fn query(pair: &SegmentPair) -> Outcome {
    query_with(pair, QueryCfg::default())
}

/// Classify a segment pair.
///
/// Pre: all coordinates finite (see `SegmentPair::validate`).
pub fn query_with(pair: &SegmentPair, cfg: QueryCfg) -> Outcome {
    debug_assert!(pair.validate().is_ok(), "non-finite segment coordinates");
    if cfg.reject_all_origin && pair.is_all_origin() {
        return Outcome::DegenerateAllOrigin;
    }
    match find_intersection_with(&pair.s1, &pair.s2, cfg.decimals) {
        None => Outcome::NoIntersection,
        Some(Intersection::Point(p)) => Outcome::UniquePoint(p),
        Some(Intersection::Collinear) => Outcome::CollinearOverlap,
    }
}
