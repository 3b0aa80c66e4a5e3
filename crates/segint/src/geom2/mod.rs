//! Planar segment intersection (exact-sign predicates on `f64`).
//!
//! Purpose
//! - Decide whether two closed segments meet and, if so, report the unique
//!   crossing point or that they overlap along a common line.
//! - Keep everything pure and `Copy`: no I/O, no logging, no shared state,
//!   so callers can evaluate pairs concurrently without coordination.
//!
//! Conventions
//! - Orientation uses the exact sign of a cross product; there is no
//!   tolerance, near-misses are misses.
//! - Reported points are rounded half away from zero to `QueryCfg::decimals`
//!   (default one decimal place).
//! - Inclusive: touching at an endpoint is an intersection.
//! - A zero solver determinant is reported as a collinear overlap; the extent
//!   of the overlap is not computed.
//!
//! Code cross-refs: `Segment`, `SegmentPair`, `Outcome`, `QueryCfg`

mod predicates;
pub mod rand;
mod solvers;
mod types;
mod util;

pub use predicates::{do_intersect, on_segment, orientation, turn_value};
pub use solvers::{find_intersection, find_intersection_with, query, query_with};
pub use types::{
    Endpoint, InputError, Intersection, Orientation, Outcome, QueryCfg, Segment, SegmentPair,
};
pub use util::{parse_point, round_to, ParseError};
