//! Range set persistence: models, validation, and the ownership-scoped
//! repository.
//!
//! A range set is one user's complete preflop chart for a table format,
//! tournament stage bucket, and stack depth. This module owns:
//! - The `RangeSet` model and its create/update/filter inputs
//! - Input validation (names, stacks, and chart-schema conformance)
//! - The `RangeSetRepository` trait with PostgreSQL and in-memory
//!   implementations
//!
//! Every operation is scoped to the authenticated user; a row owned by
//! someone else is indistinguishable from a missing row.
//!
//! ## Example
//!
//! ```
//! use range_keeper::ranges::{
//!     MemoryRangeSetRepository, RangeSetFilter, RangeSetInput, RangeSetRepository, TableType,
//! };
//! use range_keeper::schema::{self, SchemaKind};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let repo = MemoryRangeSetRepository::new();
//!     let set = repo
//!         .create(
//!             7,
//!             RangeSetInput {
//!                 name: "default 6-max".to_string(),
//!                 table_type: TableType::SixMax,
//!                 category: "mtt".to_string(),
//!                 starting_stack: 100,
//!                 bounty: false,
//!                 range_data: schema::skeleton(SchemaKind::Hero),
//!             },
//!         )
//!         .await?;
//!     assert_eq!(set.user_id, 7);
//!     assert_eq!(repo.list(7, RangeSetFilter::default()).await?.len(), 1);
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod memory;
pub mod models;
pub mod repository;

pub use errors::{RangeError, RangeResult};
pub use memory::MemoryRangeSetRepository;
pub use models::{
    MAX_NAME_LEN, RangeSet, RangeSetFilter, RangeSetId, RangeSetInput, RangeSetUpdate, TableType,
    UserId,
};
pub use repository::{PgRangeSetRepository, RangeSetRepository};
