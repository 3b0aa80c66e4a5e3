//! Curated entry points for callers outside the crate (CLI, benches).
//!
//! Keep this list short; everything here is also reachable via `geom2`.

pub use crate::geom2::rand::{draw_pair, draw_pairs, PairCfg, ReplayToken};
pub use crate::geom2::{
    parse_point, query, query_with, InputError, Outcome, ParseError, QueryCfg, Segment,
    SegmentPair,
};

/// Validate, then query. Non-finite coordinates become an error instead of a
/// meaningless classification.
pub fn checked_query(pair: &SegmentPair, cfg: QueryCfg) -> Result<Outcome, InputError> {
    pair.validate()?;
    Ok(query_with(pair, cfg))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checked_query_rejects_nan() {
        let pair = SegmentPair::new(
            Segment::from_coords(0.0, 0.0, 1.0, 1.0),
            Segment::from_coords(f64::NAN, 0.0, 1.0, 0.0),
        );
        let err = checked_query(&pair, QueryCfg::default()).unwrap_err();
        assert_eq!(
            err,
            InputError::NonFinite {
                which: crate::geom2::Endpoint::P2
            }
        );
        assert_eq!(err.to_string(), "endpoint p2 has a non-finite coordinate");
    }

    #[test]
    fn checked_query_passes_finite_input() {
        let pair = SegmentPair::new(
            Segment::from_coords(0.0, 0.0, 4.0, 4.0),
            Segment::from_coords(0.0, 4.0, 4.0, 0.0),
        );
        let out = checked_query(&pair, QueryCfg::default()).unwrap();
        assert_eq!(out.point(), Some(crate::Vec2::new(2.0, 2.0)));
    }
}
