//! Draw eligibility: prize capacity, global limit and candidate exhaustion.
//!
//! Nothing here is cached. Callers pass the current history and candidates
//! and get an answer for exactly that snapshot.

use serde::{Deserialize, Serialize};

use crate::candidates::GlobalLimit;
use crate::error::BlockReason;
use crate::history::HistoryLog;
use crate::prize::Prize;

/// How much of a prize has been handed out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrizeStanding {
    pub capacity: u32,
    pub consumed: usize,
    pub remaining: u64,
}

impl PrizeStanding {
    pub fn of(prize: &Prize, history: &HistoryLog) -> Self {
        let consumed = history.consumed_count(&prize.name);
        let remaining = u64::from(prize.capacity).saturating_sub(consumed as u64);
        Self {
            capacity: prize.capacity,
            consumed,
            remaining,
        }
    }
}

/// Session-wide draw count against the optional global limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalStanding {
    pub limit: Option<i64>,
    pub drawn: usize,
    /// `None` when unlimited.
    pub remaining: Option<u64>,
}

impl GlobalStanding {
    pub fn of(global_limit: Option<GlobalLimit>, history: &HistoryLog) -> Self {
        let drawn = history.len();
        Self {
            limit: global_limit.map(|l| l.get()),
            drawn,
            remaining: global_limit.map(|l| l.remaining(drawn)),
        }
    }

    pub fn exhausted(&self) -> bool {
        self.remaining == Some(0)
    }
}

/// Decide whether a prize draw may proceed, reporting the first blocking
/// cause in priority order: selection, global limit, candidates, capacity.
pub fn check_draw(
    selected: Option<&Prize>,
    history: &HistoryLog,
    candidates: &[i64],
    global_limit: Option<GlobalLimit>,
) -> Result<(), BlockReason> {
    let prize = selected.ok_or(BlockReason::NoPrizeSelected)?;
    check_open_draw(history, candidates, global_limit)?;
    if PrizeStanding::of(prize, history).remaining == 0 {
        return Err(BlockReason::PrizeCapacityReached);
    }
    Ok(())
}

/// Eligibility for a draw not attributed to any prize.
pub fn check_open_draw(
    history: &HistoryLog,
    candidates: &[i64],
    global_limit: Option<GlobalLimit>,
) -> Result<(), BlockReason> {
    if GlobalStanding::of(global_limit, history).exhausted() {
        return Err(BlockReason::GlobalLimitReached);
    }
    if candidates.is_empty() {
        return Err(BlockReason::CandidatesExhausted);
    }
    Ok(())
}

pub fn can_draw(
    selected: Option<&Prize>,
    history: &HistoryLog,
    candidates: &[i64],
    global_limit: Option<GlobalLimit>,
) -> bool {
    check_draw(selected, history, candidates, global_limit).is_ok()
}
