//! Range chart schema: axes, canonical skeleton, and structural validation.
//!
//! A chart is a fixed-depth nested mapping,
//! `stage → position → [strength →] playStyle → stackSize-bucket → action`,
//! with opaque range-notation strings at the leaves. This module owns the
//! axis definitions, generates the canonical empty skeleton, and validates
//! arbitrary candidate documents against that shape.
//!
//! ## Example
//!
//! ```
//! use range_keeper::schema::{self, SchemaKind};
//!
//! let chart = schema::skeleton(SchemaKind::Hero);
//! assert!(schema::validate(&chart));
//! ```

pub mod axes;
pub mod skeleton;
pub mod validator;

pub use axes::{PlayStyle, Position, RangeAction, SchemaKind, StackBucket, Stage, Strength};
pub use skeleton::skeleton;
pub use validator::{validate, validate_as};
