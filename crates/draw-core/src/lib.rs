//! Non-repeating number draws over a bounded range, shared across prizes.
//!
//! Every drawn number is excluded from later draws of the same history. Prizes
//! carve per-bucket capacities out of the shared pool and an optional global
//! limit caps both the drawable values and the total number of draws.

pub mod capabilities;
pub mod candidates;
pub mod error;
pub mod history;
pub mod lottery;
pub mod policy;
pub mod prize;
pub mod range;
pub mod selector;
pub mod session;

pub use capabilities::{
    Capabilities, Clock, FixedClock, IdGenerator, RandomSource, RngSource, SequenceSource,
    SequentialIds, SystemClock, UuidGenerator,
};
pub use candidates::{GlobalLimit, build_candidates, candidates_from_raw};
pub use error::{BlockReason, DrawError};
pub use history::{DrawRecord, HistoryLog};
pub use lottery::Lottery;
pub use policy::{GlobalStanding, PrizeStanding, can_draw, check_draw, check_open_draw};
pub use prize::{Prize, PrizeList, normalize_capacity};
pub use range::{DrawRange, validate_range};
pub use selector::{draw_random_int, select_one};
pub use session::{Session, SessionConfig};

#[cfg(test)]
mod tests;
