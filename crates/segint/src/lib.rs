//! Core geometry for the segment intersection engine.
//!
//! The crate is pure computation: callers hand in two segments and get back a
//! tagged `Outcome`. Parsing helpers and a reproducible sampler are included
//! for the CLI, tests and benches.

pub mod api;
pub mod geom2;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom2::{Outcome, QueryCfg, Segment, SegmentPair};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::rand::{draw_pair, draw_pairs, PairCfg, ReplayToken};
    pub use crate::geom2::{
        do_intersect, find_intersection, on_segment, orientation, query, query_with,
        Intersection, Orientation, Outcome, QueryCfg, Segment, SegmentPair,
    };
    pub use nalgebra::Vector2 as Vec2;
}
