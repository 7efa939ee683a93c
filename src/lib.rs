//! # Range Keeper
//!
//! Storage and review tooling for personalized preflop range charts.
//!
//! A range set is one user's complete table of recommended preflop
//! actions, indexed by tournament stage, seat position, opponent
//! profile, play style, and stack-depth bucket. This library owns the
//! chart schema and its structural validation, the ownership-scoped
//! persistence of range sets in PostgreSQL, and a pure betting-action
//! engine that computes which actions are legal at a decision point
//! during hand review.
//!
//! ## Core Modules
//!
//! - [`schema`]: chart axes, the canonical empty skeleton, and the
//!   structural validator
//! - [`ranges`]: the `RangeSet` model and the ownership-scoped
//!   repository (PostgreSQL and in-memory)
//! - [`engine`]: the betting-level state machine for action
//!   eligibility and stake resolution
//! - [`db`]: connection pooling, configuration, and schema bootstrap
//!
//! The schema and engine are pure and synchronous; only the repository
//! touches the database, and every repository call takes the
//! authenticated user id explicitly.
//!
//! ## Example
//!
//! ```
//! use range_keeper::engine::{BettingState, BetOption};
//! use range_keeper::schema::{self, SchemaKind};
//!
//! // a freshly seeded chart validates by construction
//! assert!(schema::validate(&schema::skeleton(SchemaKind::Opponent)));
//!
//! // opening decision: nothing wagered yet, the named raise is "bet"
//! let state = BettingState::new(0, 0, 15, 1000, 10).unwrap();
//! let options = state.available_actions().unwrap();
//! assert_eq!(options.first(), Some(&BetOption::Fold));
//! assert_eq!(options.last(), Some(&BetOption::AllIn));
//! ```

/// Connection pooling, configuration, and schema bootstrap.
pub mod db;
pub use db::{Database, DatabaseConfig};

/// Betting-level state machine for hand review.
pub mod engine;
pub use engine::{BetAction, BetOption, BettingState, Chips, EngineError, EngineResult, RaiseKind};

/// Range set models and the ownership-scoped repository.
pub mod ranges;
pub use ranges::{
    MemoryRangeSetRepository, PgRangeSetRepository, RangeError, RangeResult, RangeSet,
    RangeSetFilter, RangeSetInput, RangeSetRepository, RangeSetUpdate, TableType, UserId,
};

/// Chart schema: axes, skeleton generation, and validation.
pub mod schema;
pub use schema::{SchemaKind, skeleton, validate};
