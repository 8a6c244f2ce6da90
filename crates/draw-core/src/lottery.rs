//! Stateful owner of one session, as driven by an interactive front end.

use crate::candidates::GlobalLimit;
use crate::capabilities::Capabilities;
use crate::error::DrawError;
use crate::history::DrawRecord;
use crate::prize::Prize;
use crate::selector::draw_random_int;
use crate::session::Session;

/// Holds the current [`Session`] snapshot plus the last shown result and
/// message. A snapshot is replaced only when an operation succeeds.
#[derive(Debug)]
pub struct Lottery {
    session: Session,
    caps: Capabilities,
    last_result: Option<i64>,
    last_message: Option<String>,
}

impl Lottery {
    pub fn new(session: Session, caps: Capabilities) -> Self {
        Self {
            session,
            caps,
            last_result: None,
            last_message: None,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn last_result(&self) -> Option<i64> {
        self.last_result
    }

    /// User-facing text for the most recent blocked draw, if any.
    pub fn last_message(&self) -> Option<&str> {
        self.last_message.as_deref()
    }

    /// Draw for the selected prize.
    ///
    /// Eligibility is checked again against the current snapshot even when
    /// the caller already disabled the action.
    pub fn draw(&mut self) -> Result<DrawRecord, DrawError> {
        let outcome = self.session.draw_for_prize(&mut self.caps);
        self.settle(outcome)
    }

    /// Draw from the shared pool without a prize tag.
    pub fn draw_open(&mut self) -> Result<DrawRecord, DrawError> {
        let outcome = self.session.draw_open(&mut self.caps);
        self.settle(outcome)
    }

    /// One-off number from the configured range. Not recorded in history.
    pub fn roll(&mut self) -> Result<i64, DrawError> {
        let range = self.session.range();
        draw_random_int(range.min(), range.max(), self.caps.random.as_mut())
    }

    pub fn add_prize(&mut self, name: &str, capacity: u32) -> Result<Prize, DrawError> {
        let (next, prize) = self
            .session
            .add_prize(name, capacity, self.caps.ids.as_mut())?;
        self.session = next;
        Ok(prize)
    }

    pub fn rename_prize(&mut self, id: &str, name: &str) -> Result<(), DrawError> {
        self.session = self.session.rename_prize(id, name)?;
        Ok(())
    }

    pub fn set_prize_capacity(&mut self, id: &str, capacity: u32) -> Result<(), DrawError> {
        self.session = self.session.set_prize_capacity(id, capacity)?;
        Ok(())
    }

    pub fn remove_prize(&mut self, id: &str) -> Result<(), DrawError> {
        self.session = self.session.remove_prize(id)?;
        Ok(())
    }

    pub fn select_prize(&mut self, id_or_name: &str) -> Result<&Prize, DrawError> {
        self.session = self.session.select_prize(id_or_name)?;
        self.session
            .selected_prize()
            .ok_or_else(|| DrawError::PrizeNotFound(id_or_name.to_string()))
    }

    pub fn apply_global_limit(&mut self, limit: Option<GlobalLimit>) {
        self.session = self.session.apply_global_limit(limit);
    }

    /// Reset history, the shown result and any message. Never fails.
    pub fn clear(&mut self) {
        tracing::info!(cleared = self.session.history().len(), "Cleared draw history");
        self.session = self.session.clear_history();
        self.last_result = None;
        self.last_message = None;
    }

    fn settle(
        &mut self,
        outcome: Result<(Session, DrawRecord), DrawError>,
    ) -> Result<DrawRecord, DrawError> {
        self.last_message = None;
        match outcome {
            Ok((next, record)) => {
                self.session = next;
                self.last_result = Some(record.value);
                Ok(record)
            }
            Err(DrawError::Blocked(reason)) => {
                tracing::warn!(%reason, "Draw blocked");
                self.last_message = Some(reason.to_string());
                Err(DrawError::Blocked(reason))
            }
            Err(e) => Err(e),
        }
    }
}
