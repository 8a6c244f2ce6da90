//! Eligible-number computation.

use serde::{Deserialize, Serialize};

use crate::error::DrawError;
use crate::history::HistoryLog;
use crate::range::DrawRange;

/// Optional ceiling on both the drawable values and the total number of draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GlobalLimit(i64);

impl GlobalLimit {
    pub fn new(limit: i64) -> Self {
        Self(limit)
    }

    /// Floors `limit`; fails with [`DrawError::InvalidGlobalLimit`] when it is
    /// NaN or infinite. Out-of-range magnitudes saturate.
    pub fn from_f64(limit: f64) -> Result<Self, DrawError> {
        if !limit.is_finite() {
            return Err(DrawError::InvalidGlobalLimit);
        }
        Ok(Self(limit.floor() as i64))
    }

    /// Interpret user text the way the settings form does: blank means no
    /// limit, anything else is floored and negative values become zero.
    pub fn parse_applied(text: &str) -> Result<Option<Self>, DrawError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        let n: f64 = trimmed.parse().map_err(|_| DrawError::InvalidGlobalLimit)?;
        let limit = Self::from_f64(n)?;
        Ok(Some(Self(limit.0.max(0))))
    }

    pub fn get(&self) -> i64 {
        self.0
    }

    /// Draws still allowed once `drawn` records exist.
    pub fn remaining(&self, drawn: usize) -> u64 {
        let drawn = i128::try_from(drawn).unwrap_or(i128::MAX);
        (i128::from(self.0) - drawn).max(0) as u64
    }
}

/// Every integer of `range` not yet present in `history`, ascending, with
/// values above `global_limit` cut off.
///
/// An empty result is a valid exhausted state, not an error.
pub fn build_candidates(
    range: DrawRange,
    history: &HistoryLog,
    global_limit: Option<GlobalLimit>,
) -> Vec<i64> {
    let effective_max = match global_limit {
        Some(limit) if limit.get() < range.min() => return Vec::new(),
        Some(limit) => range.max().min(limit.get()),
        None => range.max(),
    };

    let used = history.values();
    (range.min()..=effective_max)
        .filter(|n| !used.contains(n))
        .collect()
}

/// [`build_candidates`] over untyped input: validates the range, then the limit.
pub fn candidates_from_raw(
    min: f64,
    max: f64,
    history: &HistoryLog,
    global_limit: Option<f64>,
) -> Result<Vec<i64>, DrawError> {
    let range = DrawRange::from_f64(min, max)?;
    let global_limit = global_limit.map(GlobalLimit::from_f64).transpose()?;
    Ok(build_candidates(range, history, global_limit))
}
