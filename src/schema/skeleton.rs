//! Canonical skeleton generation.
//!
//! The skeleton is the complete, empty chart for a schema kind: every
//! axis combination present, every leaf an empty range string. New
//! accounts are seeded with it, and the validator accepts exactly the
//! documents that share its shape.

use serde_json::{Map, Value};

use super::axes::{PlayStyle, Position, SchemaKind, Stage, StackBucket, Strength};

/// Build the canonical empty chart for `kind`.
///
/// The table/stake configuration of the owning range set does not alter
/// the chart shape; the kind is the only shape discriminant.
pub fn skeleton(kind: SchemaKind) -> Value {
    let mut stages = Map::new();
    for stage in Stage::ALL {
        stages.insert(stage.as_str().to_string(), positions(kind));
    }
    Value::Object(stages)
}

fn positions(kind: SchemaKind) -> Value {
    let mut map = Map::new();
    for position in Position::ALL {
        let below = match kind {
            SchemaKind::Hero => styles(),
            SchemaKind::Opponent => strengths(),
        };
        map.insert(position.as_str().to_string(), below);
    }
    Value::Object(map)
}

fn strengths() -> Value {
    let mut map = Map::new();
    for strength in Strength::ALL {
        map.insert(strength.as_str().to_string(), styles());
    }
    Value::Object(map)
}

fn styles() -> Value {
    let mut map = Map::new();
    for style in PlayStyle::ALL {
        map.insert(style.as_str().to_string(), buckets());
    }
    Value::Object(map)
}

fn buckets() -> Value {
    let mut map = Map::new();
    for bucket in StackBucket::ALL {
        let mut actions = Map::new();
        for action in bucket.actions() {
            actions.insert(action.as_str().to_string(), Value::String(String::new()));
        }
        map.insert(bucket.as_str().to_string(), Value::Object(actions));
    }
    Value::Object(map)
}
