//! Session snapshot: range, limits, prizes, selection and history.
//!
//! A [`Session`] is never mutated in place. Every operation returns the next
//! snapshot, so one draw always computes candidates, checks eligibility,
//! selects and appends against the same history.

use serde::{Deserialize, Serialize};

use crate::candidates::{GlobalLimit, build_candidates};
use crate::capabilities::{Capabilities, IdGenerator};
use crate::error::{BlockReason, DrawError};
use crate::history::{DrawRecord, HistoryLog};
use crate::policy::{self, GlobalStanding, PrizeStanding};
use crate::prize::{Prize, PrizeList};
use crate::range::DrawRange;
use crate::selector::select_one;

/// Fixed for the lifetime of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionConfig {
    pub range: DrawRange,
    /// Positive values bound the history; `None`, zero or negative keep all.
    pub history_limit: Option<i64>,
}

impl SessionConfig {
    pub fn new(min: i64, max: i64) -> Result<Self, DrawError> {
        Ok(Self {
            range: DrawRange::new(min, max)?,
            history_limit: None,
        })
    }

    pub fn with_history_limit(mut self, limit: Option<i64>) -> Self {
        self.history_limit = limit;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    config: SessionConfig,
    global_limit: Option<GlobalLimit>,
    prizes: PrizeList,
    selected_prize_id: Option<String>,
    history: HistoryLog,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            global_limit: None,
            prizes: PrizeList::new(),
            selected_prize_id: None,
            history: HistoryLog::new(),
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn range(&self) -> DrawRange {
        self.config.range
    }

    pub fn global_limit(&self) -> Option<GlobalLimit> {
        self.global_limit
    }

    pub fn prizes(&self) -> &PrizeList {
        &self.prizes
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    pub fn selected_prize(&self) -> Option<&Prize> {
        self.selected_prize_id
            .as_deref()
            .and_then(|id| self.prizes.find(id))
    }

    /// Numbers still drawable under the global limit.
    pub fn candidates(&self) -> Vec<i64> {
        build_candidates(self.config.range, &self.history, self.global_limit)
    }

    pub fn prize_standing(&self, prize: &Prize) -> PrizeStanding {
        PrizeStanding::of(prize, &self.history)
    }

    pub fn global_standing(&self) -> GlobalStanding {
        GlobalStanding::of(self.global_limit, &self.history)
    }

    pub fn check_draw(&self) -> Result<(), BlockReason> {
        policy::check_draw(
            self.selected_prize(),
            &self.history,
            &self.candidates(),
            self.global_limit,
        )
    }

    pub fn can_draw(&self) -> bool {
        self.check_draw().is_ok()
    }

    pub fn add_prize(
        &self,
        name: &str,
        capacity: u32,
        ids: &mut dyn IdGenerator,
    ) -> Result<(Self, Prize), DrawError> {
        let prize = Prize::new(ids.next_id(), name, capacity)?;
        tracing::debug!(id = %prize.id, name = %prize.name, capacity, "Added prize");
        let next = Self {
            prizes: self.prizes.with_added(prize.clone()),
            ..self.clone()
        };
        Ok((next, prize))
    }

    /// Renaming does not touch history, so records drawn under the old name
    /// stop counting toward this prize.
    pub fn rename_prize(&self, id: &str, name: &str) -> Result<Self, DrawError> {
        Ok(Self {
            prizes: self.prizes.with_renamed(id, name)?,
            ..self.clone()
        })
    }

    pub fn set_prize_capacity(&self, id: &str, capacity: u32) -> Result<Self, DrawError> {
        Ok(Self {
            prizes: self.prizes.with_capacity(id, capacity)?,
            ..self.clone()
        })
    }

    /// Removing the selected prize also clears the selection.
    pub fn remove_prize(&self, id: &str) -> Result<Self, DrawError> {
        let prizes = self.prizes.without(id)?;
        let selected_prize_id = self
            .selected_prize_id
            .clone()
            .filter(|selected| selected != id);
        Ok(Self {
            prizes,
            selected_prize_id,
            ..self.clone()
        })
    }

    /// Select by id, or by exact name when no id matches.
    pub fn select_prize(&self, id_or_name: &str) -> Result<Self, DrawError> {
        let prize = self
            .prizes
            .resolve(id_or_name)
            .ok_or_else(|| DrawError::PrizeNotFound(id_or_name.to_string()))?;
        Ok(Self {
            selected_prize_id: Some(prize.id.clone()),
            ..self.clone()
        })
    }

    pub fn deselect_prize(&self) -> Self {
        Self {
            selected_prize_id: None,
            ..self.clone()
        }
    }

    pub fn apply_global_limit(&self, global_limit: Option<GlobalLimit>) -> Self {
        tracing::debug!(limit = ?global_limit.map(|l| l.get()), "Applied global limit");
        Self {
            global_limit,
            ..self.clone()
        }
    }

    /// Draw one number for the selected prize.
    pub fn draw_for_prize(&self, caps: &mut Capabilities) -> Result<(Self, DrawRecord), DrawError> {
        let candidates = self.candidates();
        policy::check_draw(
            self.selected_prize(),
            &self.history,
            &candidates,
            self.global_limit,
        )?;
        let prize_name = self
            .selected_prize()
            .map(|p| p.name.clone())
            .ok_or(BlockReason::NoPrizeSelected)?;

        let value = select_one(&candidates, caps.random.as_mut())?;
        let record = DrawRecord::for_prize(value, caps.clock.now_millis(), prize_name);
        Ok(self.with_record(record, candidates.len()))
    }

    /// Draw one number from the shared pool without attributing it to a prize.
    pub fn draw_open(&self, caps: &mut Capabilities) -> Result<(Self, DrawRecord), DrawError> {
        let candidates = self.candidates();
        policy::check_open_draw(&self.history, &candidates, self.global_limit)?;

        let value = select_one(&candidates, caps.random.as_mut())?;
        let record = DrawRecord::new(value, caps.clock.now_millis());
        Ok(self.with_record(record, candidates.len()))
    }

    /// Empty history. Every consumption count derived from it returns to zero.
    pub fn clear_history(&self) -> Self {
        Self {
            history: self.history.clear(),
            ..self.clone()
        }
    }

    fn with_record(&self, record: DrawRecord, pool: usize) -> (Self, DrawRecord) {
        tracing::info!(
            value = record.value,
            prize = record.prize_name.as_deref().unwrap_or("-"),
            pool,
            "Drew number"
        );
        let next = Self {
            history: self
                .history
                .append(record.clone(), self.config.history_limit),
            ..self.clone()
        };
        (next, record)
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
