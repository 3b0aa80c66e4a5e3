use std::fmt;
use std::str::FromStr;

use nalgebra::Vector2;

use super::types::Segment;

/// `a*b` and its exact rounding error (`a*b == p + err` in real arithmetic).
#[inline]
fn two_prod(a: f64, b: f64) -> (f64, f64) {
    let p = a * b;
    let err = f64::mul_add(a, b, -p);
    (p, err)
}

/// Round the exact value of `v` half away from zero to `decimals` places;
/// `-0.0` is folded into `0.0`.
///
/// If `v * 10^decimals` overflows, `v` is returned unchanged.
pub fn round_to(v: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(i32::try_from(decimals).unwrap_or(i32::MAX));
    let (s, err) = two_prod(v, scale);
    if !scale.is_finite() || !s.is_finite() {
        return v;
    }
    // `s` may land exactly on a .5 tie that the exact product falls short of
    let r = if (s - s.trunc()).abs() == 0.5 && err != 0.0 && (err < 0.0) != (s < 0.0) {
        s.trunc()
    } else {
        s.round()
    };
    r / scale + 0.0
}

/// Text that could not be read as coordinates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    BadArity { expected: usize, found: usize },
    BadNumber { token: String },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::BadArity { expected, found } => {
                write!(f, "expected {expected} comma-separated numbers, found {found}")
            }
            ParseError::BadNumber { token } => write!(f, "not a number: {token:?}"),
        }
    }
}

impl std::error::Error for ParseError {}

fn parse_numbers<const N: usize>(s: &str) -> Result<[f64; N], ParseError> {
    let tokens: Vec<&str> = s.split(',').map(str::trim).collect();
    if tokens.len() != N {
        return Err(ParseError::BadArity {
            expected: N,
            found: tokens.len(),
        });
    }
    let mut out = [0.0; N];
    for (slot, tok) in out.iter_mut().zip(tokens) {
        *slot = tok.parse().map_err(|_| ParseError::BadNumber {
            token: tok.to_string(),
        })?;
    }
    Ok(out)
}

/// Parse `"x,y"`.
pub fn parse_point(s: &str) -> Result<Vector2<f64>, ParseError> {
    let [x, y] = parse_numbers::<2>(s)?;
    Ok(Vector2::new(x, y))
}

/// Parses `"x1,y1,x2,y2"`.
impl FromStr for Segment {
    type Err = ParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [x1, y1, x2, y2] = parse_numbers::<4>(s)?;
        Ok(Segment::from_coords(x1, y1, x2, y2))
    }
}
