//! Serializable views of query results (JSON records and plot scenes).

use segint::api::{checked_query, Outcome, QueryCfg, SegmentPair};
use serde::{Deserialize, Serialize};

/// Input coordinates as echoed in a record; missing or non-finite values are `None`.
pub type Coords = [Option<f64>; 4];

/// `[p.x, p.y, q.x, q.y]` with non-finite values dropped (JSON has no NaN/∞).
pub fn echo(c: [f64; 4]) -> Coords {
    c.map(|v| v.is_finite().then_some(v))
}

/// One evaluated pair as written by `check --json` and `batch`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub s1: Coords,
    pub s2: Coords,
    /// `Outcome::tag()`, or `"invalid"` when the input was rejected.
    pub outcome: String,
    pub point: Option<[f64; 2]>,
    pub message: String,
    pub error: Option<String>,
}

impl Record {
    pub fn from_outcome(pair: &SegmentPair, outcome: Outcome) -> Self {
        Self {
            s1: echo(pair.s1.to_array()),
            s2: echo(pair.s2.to_array()),
            outcome: outcome.tag().to_string(),
            point: outcome.point().map(|p| [p.x, p.y]),
            message: outcome.to_string(),
            error: None,
        }
    }

    pub fn invalid(s1: Coords, s2: Coords, error: impl Into<String>) -> Self {
        let error = error.into();
        Self {
            s1,
            s2,
            outcome: "invalid".to_string(),
            point: None,
            message: format!("input rejected: {error}"),
            error: Some(error),
        }
    }

    /// Validate then query; rejected input becomes an `"invalid"` record.
    pub fn evaluate(pair: &SegmentPair, cfg: QueryCfg) -> Self {
        match checked_query(pair, cfg) {
            Ok(outcome) => Self::from_outcome(pair, outcome),
            Err(e) => Self::invalid(
                echo(pair.s1.to_array()),
                echo(pair.s2.to_array()),
                e.to_string(),
            ),
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct SceneSegment {
    pub from: [f64; 2],
    pub to: [f64; 2],
    pub color: &'static str,
}

#[derive(Clone, Debug, Serialize)]
pub struct ScenePoint {
    pub at: [f64; 2],
    pub label: &'static str,
    pub color: &'static str,
}

/// Plot-ready description of a query; drawing is left to external tools.
#[derive(Clone, Debug, Serialize)]
pub struct Scene {
    /// `[x_min, y_max, x_max, y_min]`
    pub bounding_box: [f64; 4],
    pub segments: Vec<SceneSegment>,
    pub point: Option<ScenePoint>,
    pub outcome: String,
    pub message: String,
}

impl Scene {
    pub const DEFAULT_BOX: [f64; 4] = [-20.0, 20.0, 20.0, -20.0];

    pub fn new(pair: &SegmentPair, outcome: Outcome) -> Self {
        let seg = |s: &segint::Segment, color| SceneSegment {
            from: [s.p.x, s.p.y],
            to: [s.q.x, s.q.y],
            color,
        };
        Self {
            bounding_box: Self::DEFAULT_BOX,
            segments: vec![seg(&pair.s1, "blue"), seg(&pair.s2, "red")],
            point: outcome.point().map(|p| ScenePoint {
                at: [p.x, p.y],
                label: "intersection point",
                color: "green",
            }),
            outcome: outcome.tag().to_string(),
            message: outcome.to_string(),
        }
    }
}
