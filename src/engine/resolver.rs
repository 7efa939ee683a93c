//! Action eligibility and stake resolution.
//!
//! The betting round is a small state machine over `level`, the number
//! of raises already made. Each named raise bumps the level, capped at
//! [`MAX_LEVEL`]; call, fold, check, and all-in leave it unchanged.

use super::errors::{EngineError, EngineResult};
use super::models::{BetAction, BetOption, BettingState, Chips, MAX_LEVEL, RaiseKind};

/// Ordered action eligibility for a betting level: always fold and
/// call, the level's raise when one is offered, and all-in last.
///
/// This list depends on the level alone. [`BettingState::available_actions`]
/// additionally offers check when no bet is outstanding.
pub fn available_actions(level: u8) -> EngineResult<Vec<BetOption>> {
    if level > MAX_LEVEL {
        return Err(EngineError::InvalidLevel(level));
    }
    let mut options = vec![BetOption::Fold, BetOption::Call];
    if let Some(kind) = RaiseKind::at_level(level) {
        options.push(BetOption::Raise(kind));
    }
    options.push(BetOption::AllIn);
    Ok(options)
}

impl BettingState {
    /// Ordered action eligibility for this decision point, with check
    /// offered exactly when there is no outstanding bet.
    pub fn available_actions(&self) -> EngineResult<Vec<BetOption>> {
        let mut options = available_actions(self.level)?;
        if self.current_bet == 0 {
            options.insert(1, BetOption::Check);
        }
        Ok(options)
    }

    /// Apply an action to this state, returning the resulting stakes.
    ///
    /// Stake arithmetic never produces a negative pot or stack: a call
    /// or raise larger than the remaining stack is an error rather than
    /// a clamp, and check is legal only when no bet is outstanding. A
    /// fold leaves the stakes untouched; ending the round is the
    /// caller's job.
    pub fn resolve(&self, action: &BetAction) -> EngineResult<Self> {
        if self.level > MAX_LEVEL {
            return Err(EngineError::InvalidLevel(self.level));
        }
        match action {
            BetAction::Fold => Ok(*self),
            BetAction::Check => {
                if self.current_bet != 0 {
                    return Err(EngineError::IllegalCheck(self.current_bet));
                }
                Ok(*self)
            }
            BetAction::Call => {
                if self.current_bet > self.player_stack {
                    return Err(EngineError::StakeExceedsStack {
                        required: self.current_bet,
                        stack: self.player_stack,
                    });
                }
                Ok(Self {
                    pot: checked_pot(self.pot, self.current_bet)?,
                    player_stack: self.player_stack - self.current_bet,
                    ..*self
                })
            }
            BetAction::AllIn => Ok(Self {
                pot: checked_pot(self.pot, self.player_stack)?,
                player_stack: 0,
                ..*self
            }),
            BetAction::Raise { kind, amount } => {
                let Some(offered) = RaiseKind::at_level(self.level) else {
                    return Err(EngineError::RaiseUnavailable);
                };
                if *kind != offered {
                    return Err(EngineError::WrongRaise {
                        kind: *kind,
                        level: self.level,
                    });
                }
                let minimum = self
                    .current_bet
                    .checked_add(self.min_raise)
                    .ok_or(EngineError::Overflow)?;
                let amount = amount.unwrap_or(minimum);
                if amount < minimum {
                    return Err(EngineError::RaiseBelowMinimum { amount, minimum });
                }
                if amount > self.player_stack {
                    return Err(EngineError::StakeExceedsStack {
                        required: amount,
                        stack: self.player_stack,
                    });
                }
                Ok(Self {
                    pot: checked_pot(self.pot, amount)?,
                    player_stack: self.player_stack - amount,
                    current_bet: amount,
                    level: (self.level + 1).min(MAX_LEVEL),
                    min_raise: self.min_raise,
                })
            }
        }
    }
}

fn checked_pot(pot: Chips, stake: Chips) -> EngineResult<Chips> {
    pot.checked_add(stake).ok_or(EngineError::Overflow)
}
