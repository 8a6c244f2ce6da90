//! Inclusive integer range validation.

use serde::{Deserialize, Serialize};

use crate::error::DrawError;

/// A validated inclusive range with `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawRange")]
pub struct DrawRange {
    min: i64,
    max: i64,
}

#[derive(Deserialize)]
struct RawRange {
    min: i64,
    max: i64,
}

impl TryFrom<RawRange> for DrawRange {
    type Error = DrawError;

    fn try_from(raw: RawRange) -> Result<Self, Self::Error> {
        Self::new(raw.min, raw.max)
    }
}

/// Validate `min..=max`, failing with [`DrawError::InvalidRange`] when inverted.
pub fn validate_range(min: i64, max: i64) -> Result<DrawRange, DrawError> {
    DrawRange::new(min, max)
}

impl DrawRange {
    pub fn new(min: i64, max: i64) -> Result<Self, DrawError> {
        if max < min {
            return Err(DrawError::InvalidRange);
        }
        Ok(Self { min, max })
    }

    /// Build a range from untyped numeric input. Non-finite or fractional
    /// bounds are rejected rather than rounded.
    pub fn from_f64(min: f64, max: f64) -> Result<Self, DrawError> {
        Self::new(integral(min)?, integral(max)?)
    }

    /// Parse both bounds from text, as typed by a user or read from settings.
    pub fn parse(min: &str, max: &str) -> Result<Self, DrawError> {
        Self::new(parse_bound(min)?, parse_bound(max)?)
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    pub fn max(&self) -> i64 {
        self.max
    }

    pub fn contains(&self, value: i64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Number of integers in the range. Wide enough for `i64::MIN..=i64::MAX`.
    pub fn size(&self) -> u128 {
        (i128::from(self.max) - i128::from(self.min) + 1) as u128
    }
}

fn integral(v: f64) -> Result<i64, DrawError> {
    // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive.
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    if !v.is_finite() || v.fract() != 0.0 || v < -LIMIT || v >= LIMIT {
        return Err(DrawError::InvalidRange);
    }
    Ok(v as i64)
}

fn parse_bound(s: &str) -> Result<i64, DrawError> {
    let s = s.trim();
    if let Ok(v) = s.parse::<i64>() {
        return Ok(v);
    }
    // "3.0" is still an integer; "3.5" and "abc" are not.
    s.parse::<f64>()
        .map_err(|_| DrawError::InvalidRange)
        .and_then(integral)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordered_and_single_value_ranges() {
        assert!(validate_range(1, 3).is_ok());
        assert!(validate_range(5, 5).is_ok());
        assert!(validate_range(-10, -2).is_ok());
    }

    #[test]
    fn rejects_inverted_range() {
        assert_eq!(validate_range(10, 9), Err(DrawError::InvalidRange));
    }

    #[test]
    fn rejects_non_integer_and_non_finite_bounds() {
        let cases = [
            (1.2, 3.0),
            (1.0, 2.5),
            (f64::NAN, 3.0),
            (1.0, f64::INFINITY),
            (f64::NEG_INFINITY, 1.0),
            (1e20, 1e21),
        ];
        for (min, max) in cases {
            assert_eq!(
                DrawRange::from_f64(min, max),
                Err(DrawError::InvalidRange),
                "{min}..{max}"
            );
        }
        assert_eq!(DrawRange::from_f64(1.0, 3.0).unwrap(), validate_range(1, 3).unwrap());
    }

    #[test]
    fn parses_text_bounds() {
        let range = DrawRange::parse(" 1 ", "3.0").unwrap();
        assert_eq!((range.min(), range.max()), (1, 3));
        assert_eq!(DrawRange::parse("1.5", "3"), Err(DrawError::InvalidRange));
        assert_eq!(DrawRange::parse("one", "3"), Err(DrawError::InvalidRange));
        assert_eq!(DrawRange::parse("4", "3"), Err(DrawError::InvalidRange));
    }

    #[test]
    fn size_covers_full_i64_span() {
        assert_eq!(validate_range(1, 3).unwrap().size(), 3);
        assert_eq!(
            validate_range(i64::MIN, i64::MAX).unwrap().size(),
            u128::from(u64::MAX) + 1
        );
    }

    #[test]
    fn deserialize_validates_order() {
        let ok: DrawRange = serde_json::from_str(r#"{"min":1,"max":2}"#).unwrap();
        assert_eq!(ok.max(), 2);
        assert!(serde_json::from_str::<DrawRange>(r#"{"min":3,"max":2}"#).is_err());
    }
}
