//! Betting engine error types.

use thiserror::Error;

use super::models::{Chips, RaiseKind};

/// Errors raised when a betting action violates the round's rules.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum EngineError {
    /// Betting level outside 0..=5
    #[error("betting level {0} is out of range")]
    InvalidLevel(u8),

    /// Check attempted against an outstanding bet
    #[error("can't check against an outstanding bet of {0}")]
    IllegalCheck(Chips),

    /// Named raise attempted at the level cap
    #[error("no further raise is offered at this betting level")]
    RaiseUnavailable,

    /// Raise name does not match the one offered at this level
    #[error("{kind} is not the raise offered at level {level}")]
    WrongRaise { kind: RaiseKind, level: u8 },

    /// Raise amount below the current bet plus the minimum raise
    #[error("raise of {amount} is below the minimum of {minimum}")]
    RaiseBelowMinimum { amount: Chips, minimum: Chips },

    /// Stake larger than the player's remaining stack
    #[error("stake of {required} exceeds the remaining stack of {stack}")]
    StakeExceedsStack { required: Chips, stack: Chips },

    /// Stake arithmetic exceeded the chip type's range
    #[error("stake arithmetic overflow")]
    Overflow,
}

/// Result type for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
