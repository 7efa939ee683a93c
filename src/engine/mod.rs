//! Betting-action engine.
//!
//! A pure, stateless calculator for hand review: given the wager state
//! at one decision point, it lists which actions are legal and what
//! stake each implies. The betting level counts raises already made
//! this round and gates which raise name is offered next (bet, raise,
//! 3-bet, 4-bet, 5-bet); at level 5 only call, fold, and all-in remain.
//!
//! The engine is independent of the range repository and holds no
//! shared mutable state, so it is safe to call concurrently from any
//! number of callers.
//!
//! ## Example
//!
//! ```
//! use range_keeper::engine::{BetAction, BettingState, RaiseKind};
//!
//! let state = BettingState::new(0, 0, 15, 1000, 10)?;
//! let next = state.resolve(&BetAction::Raise {
//!     kind: RaiseKind::Bet,
//!     amount: Some(20),
//! })?;
//! assert_eq!((next.pot, next.player_stack, next.level), (35, 980, 1));
//! # Ok::<(), range_keeper::engine::EngineError>(())
//! ```

pub mod errors;
pub mod models;
pub mod resolver;

pub use errors::{EngineError, EngineResult};
pub use models::{BetAction, BetOption, BettingState, Chips, MAX_LEVEL, RaiseKind};
pub use resolver::available_actions;
