//! Betting-round state and action models.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::errors::{EngineError, EngineResult};

/// Stake unit type. Unsigned, so negative pots and stacks are
/// unrepresentable.
pub type Chips = u64;

/// Raise count at which no further named raise is offered; only call,
/// fold, and all-in remain.
pub const MAX_LEVEL: u8 = 5;

/// Snapshot of the wager state at a single decision point.
///
/// Constructed fresh by the caller per decision; the engine keeps no
/// history between calls. Auditable action history, if required, is the
/// caller's responsibility.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct BettingState {
    /// Raises already made this round, 0..=5.
    pub level: u8,
    pub current_bet: Chips,
    pub pot: Chips,
    pub player_stack: Chips,
    pub min_raise: Chips,
}

impl BettingState {
    /// Build a betting state, rejecting a level beyond the raise cap.
    pub fn new(
        level: u8,
        current_bet: Chips,
        pot: Chips,
        player_stack: Chips,
        min_raise: Chips,
    ) -> EngineResult<Self> {
        if level > MAX_LEVEL {
            return Err(EngineError::InvalidLevel(level));
        }
        Ok(Self {
            level,
            current_bet,
            pot,
            player_stack,
            min_raise,
        })
    }
}

/// The raise-type action offered at each betting level.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum RaiseKind {
    #[serde(rename = "bet")]
    Bet,
    #[serde(rename = "raise")]
    Raise,
    #[serde(rename = "3-bet")]
    ThreeBet,
    #[serde(rename = "4-bet")]
    FourBet,
    #[serde(rename = "5-bet")]
    FiveBet,
}

impl RaiseKind {
    /// The raise offered at `level`, if any. Level 5 offers none.
    pub const fn at_level(level: u8) -> Option<Self> {
        match level {
            0 => Some(Self::Bet),
            1 => Some(Self::Raise),
            2 => Some(Self::ThreeBet),
            3 => Some(Self::FourBet),
            4 => Some(Self::FiveBet),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bet => "bet",
            Self::Raise => "raise",
            Self::ThreeBet => "3-bet",
            Self::FourBet => "4-bet",
            Self::FiveBet => "5-bet",
        }
    }
}

impl fmt::Display for RaiseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An action a player takes at a decision point.
///
/// A raise may omit its amount; the engine then derives the table
/// minimum (current bet plus minimum raise).
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum BetAction {
    Fold,
    Check,
    Call,
    Raise {
        kind: RaiseKind,
        amount: Option<Chips>,
    },
    AllIn,
}

impl fmt::Display for BetAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::Fold => "folds".to_string(),
            Self::Check => "checks".to_string(),
            Self::Call => "calls".to_string(),
            Self::Raise {
                kind,
                amount: Some(amount),
            } => format!("{kind}s {amount}"),
            Self::Raise { kind, amount: None } => format!("{kind}s"),
            Self::AllIn => "all-ins".to_string(),
        };
        write!(f, "{repr}")
    }
}

/// An action offered to a player at a decision point.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum BetOption {
    Fold,
    Check,
    Call,
    Raise(RaiseKind),
    AllIn,
}

impl fmt::Display for BetOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::Fold => "fold",
            Self::Check => "check",
            Self::Call => "call",
            Self::Raise(kind) => kind.as_str(),
            Self::AllIn => "all-in",
        };
        write!(f, "{repr}")
    }
}
