//! Exact-sign predicates on plain `f64` (no tolerances).
//!
//! - `orientation`: sign of the cross product of `(q−p)` and `(r−q)`.
//! - `on_segment`: bounding-box containment, only meaningful for collinear triples.
//! - `do_intersect`: inclusive closed-segment intersection test.
//!
//! Inputs must be finite; NaN makes every comparison false and the
//! classification meaningless (`SegmentPair::validate` screens this).

use nalgebra::Vector2;

use super::types::{Orientation, Segment};

/// `(q.y−p.y)(r.x−q.x) − (q.x−p.x)(r.y−q.y)`
#[inline]
pub fn turn_value(p: Vector2<f64>, q: Vector2<f64>, r: Vector2<f64>) -> f64 {
    (q.y - p.y) * (r.x - q.x) - (q.x - p.x) * (r.y - q.y)
}

/// Positive turn value maps to `Clockwise`, negative to `CounterClockwise`.
#[inline]
pub fn orientation(p: Vector2<f64>, q: Vector2<f64>, r: Vector2<f64>) -> Orientation {
    let val = turn_value(p, q, r);
    if val == 0.0 {
        Orientation::Collinear
    } else if val > 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::CounterClockwise
    }
}

/// Does `q` lie in the axis-aligned box spanned by `p` and `r`?
#[inline]
pub fn on_segment(p: Vector2<f64>, q: Vector2<f64>, r: Vector2<f64>) -> bool {
    q.x <= p.x.max(r.x) && q.x >= p.x.min(r.x) && q.y <= p.y.max(r.y) && q.y >= p.y.min(r.y)
}

/// Closed-segment intersection test. Touching endpoints count as intersecting.
pub fn do_intersect(s1: &Segment, s2: &Segment) -> bool {
    let (p1, q1, p2, q2) = (s1.p, s1.q, s2.p, s2.q);

    let o1 = orientation(p1, q1, p2);
    let o2 = orientation(p1, q1, q2);
    let o3 = orientation(p2, q2, p1);
    let o4 = orientation(p2, q2, q1);

    // endpoints of each segment straddle the other's line
    if o1 != o2 && o3 != o4 {
        return true;
    }

    // each collinear endpoint checked on its own
    (o1 == Orientation::Collinear && on_segment(p1, p2, q1))
        || (o2 == Orientation::Collinear && on_segment(p1, q2, q1))
        || (o3 == Orientation::Collinear && on_segment(p2, p1, q2))
        || (o4 == Orientation::Collinear && on_segment(p2, q1, q2))
}
