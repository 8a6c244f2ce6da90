//! Error types shared by every draw operation.

/// Why a draw attempt was refused.
///
/// Variants are declared in the order they are checked; only the first
/// matching cause is ever reported for one attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BlockReason {
    #[error("no prize selected")]
    NoPrizeSelected,
    #[error("global draw limit reached")]
    GlobalLimitReached,
    #[error("no numbers left to draw")]
    CandidatesExhausted,
    #[error("this prize has reached its capacity")]
    PrizeCapacityReached,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DrawError {
    #[error("invalid range: min and max must be integers with min <= max")]
    InvalidRange,

    #[error("invalid global limit: must be a finite number")]
    InvalidGlobalLimit,

    #[error("no candidates left")]
    NoCandidates,

    #[error("draw blocked: {0}")]
    Blocked(#[from] BlockReason),

    #[error("prize name must not be empty")]
    EmptyPrizeName,

    #[error("prize not found: {0}")]
    PrizeNotFound(String),
}

impl DrawError {
    /// Blocked draws are expected conditions the caller reports and moves on
    /// from; everything else is a hard failure of the call.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Blocked(_))
    }

    pub fn block_reason(&self) -> Option<BlockReason> {
        match self {
            Self::Blocked(reason) => Some(*reason),
            _ => None,
        }
    }
}
