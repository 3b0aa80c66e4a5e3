//! Basic 2D value types for the segment intersection engine.
//!
//! - `Segment`, `SegmentPair`: closed segments and the pair under test.
//! - `Orientation`: turn direction of an ordered point triple.
//! - `Intersection`, `Outcome`: solver and top-level query results.
//! - `QueryCfg`: numeric output policy (rounding, all-origin guard).
//!
//! Points are plain `Vector2<f64>`; equality is exact coordinate equality.
//!
//! Code cross-refs: `predicates::{orientation,on_segment,do_intersect}`,
//! `solvers::{find_intersection,query}`

use std::fmt;

use nalgebra::Vector2;

/// Output policy for queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QueryCfg {
    /// Decimal places kept in reported intersection coordinates.
    pub decimals: u32,
    /// Report `Outcome::DegenerateAllOrigin` when all four endpoints are `(0,0)`.
    pub reject_all_origin: bool,
}

impl QueryCfg {
    /// Largest `decimals` the CLI accepts.
    pub const MAX_DECIMALS: u32 = 15;
}

impl Default for QueryCfg {
    fn default() -> Self {
        Self {
            decimals: 1,
            reject_all_origin: true,
        }
    }
}

/// Closed segment between `p` and `q`. `p == q` is allowed and acts as a point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub p: Vector2<f64>,
    pub q: Vector2<f64>,
}

impl Segment {
    #[inline]
    pub fn new(p: Vector2<f64>, q: Vector2<f64>) -> Self {
        Self { p, q }
    }
    #[inline]
    pub fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::new(Vector2::new(x1, y1), Vector2::new(x2, y2))
    }
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.p == self.q
    }
    /// `[p.x, p.y, q.x, q.y]`
    #[inline]
    pub fn to_array(&self) -> [f64; 4] {
        [self.p.x, self.p.y, self.q.x, self.q.y]
    }
    /// Same segment with endpoints swapped.
    #[inline]
    pub fn reversed(&self) -> Self {
        Self::new(self.q, self.p)
    }
}

/// Names the four endpoints of a `SegmentPair`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
    P1,
    Q1,
    P2,
    Q2,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Endpoint::P1 => "p1",
            Endpoint::Q1 => "q1",
            Endpoint::P2 => "p2",
            Endpoint::Q2 => "q2",
        };
        f.write_str(name)
    }
}

/// Input rejected before it reaches the engine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputError {
    /// A coordinate is NaN or infinite.
    NonFinite { which: Endpoint },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::NonFinite { which } => {
                write!(f, "endpoint {which} has a non-finite coordinate")
            }
        }
    }
}

impl std::error::Error for InputError {}

/// The two segments under test, `(p1,q1)` and `(p2,q2)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SegmentPair {
    pub s1: Segment,
    pub s2: Segment,
}

impl SegmentPair {
    #[inline]
    pub fn new(s1: Segment, s2: Segment) -> Self {
        Self { s1, s2 }
    }

    /// Endpoints in `p1, q1, p2, q2` order.
    #[inline]
    pub fn endpoints(&self) -> [(Endpoint, Vector2<f64>); 4] {
        [
            (Endpoint::P1, self.s1.p),
            (Endpoint::Q1, self.s1.q),
            (Endpoint::P2, self.s2.p),
            (Endpoint::Q2, self.s2.q),
        ]
    }

    /// Same pair with `s1` and `s2` exchanged.
    #[inline]
    pub fn swapped(&self) -> Self {
        Self::new(self.s2, self.s1)
    }

    /// True iff every endpoint is exactly the origin (`-0.0` counts as `0.0`).
    pub fn is_all_origin(&self) -> bool {
        self.endpoints()
            .iter()
            .all(|(_, v)| v.x == 0.0 && v.y == 0.0)
    }

    /// Reject NaN/∞ coordinates; the first offending endpoint is reported.
    pub fn validate(&self) -> Result<(), InputError> {
        for (which, v) in self.endpoints() {
            if !(v.x.is_finite() && v.y.is_finite()) {
                return Err(InputError::NonFinite { which });
            }
        }
        Ok(())
    }
}

/// Turn direction of an ordered triple `(p, q, r)`.
///
/// The label for each sign is a convention; only consistent use matters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    Collinear,
    Clockwise,
    CounterClockwise,
}

/// Result of the point solver for intersecting segments.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Intersection {
    /// Unique crossing point, rounded per `QueryCfg::decimals`.
    Point(Vector2<f64>),
    /// Lines coincide (determinant zero); infinitely many common points.
    Collinear,
}

/// Result of a full query.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Outcome {
    NoIntersection,
    UniquePoint(Vector2<f64>),
    CollinearOverlap,
    /// All four endpoints were `(0,0)`; the predicate was not evaluated.
    DegenerateAllOrigin,
}

impl Outcome {
    #[inline]
    pub fn intersects(&self) -> bool {
        matches!(self, Outcome::UniquePoint(_) | Outcome::CollinearOverlap)
    }
    #[inline]
    pub fn point(&self) -> Option<Vector2<f64>> {
        match self {
            Outcome::UniquePoint(p) => Some(*p),
            _ => None,
        }
    }
    /// Stable snake_case tag for serialization and logs.
    pub fn tag(&self) -> &'static str {
        match self {
            Outcome::NoIntersection => "no_intersection",
            Outcome::UniquePoint(_) => "point",
            Outcome::CollinearOverlap => "collinear_overlap",
            Outcome::DegenerateAllOrigin => "degenerate_all_origin",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::NoIntersection => write!(f, "NO, the segments do not intersect"),
            Outcome::UniquePoint(p) => write!(f, "YES, intersection point: ({}, {})", p.x, p.y),
            Outcome::CollinearOverlap => write!(
                f,
                "YES, the segments are collinear and share infinitely many points"
            ),
            Outcome::DegenerateAllOrigin => write!(
                f,
                "All points are at (0, 0); they do not form real segments"
            ),
        }
    }
}
