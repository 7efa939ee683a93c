//! Structural validation of range documents.
//!
//! The validator is a predicate: it answers whether a candidate document
//! has exactly the canonical chart shape, and never errors or panics.
//! Callers decide how to report a rejection.

use log::debug;
use serde_json::{Map, Value};

use super::axes::{PlayStyle, Position, SchemaKind, Stage, StackBucket, Strength};

/// Check an arbitrary nested structure against the canonical chart
/// schema, inferring the schema kind from the document itself.
///
/// Returns `false` on any structural deviation: missing or unknown keys
/// at any level, non-string leaves, or a shape that matches neither
/// chart kind. Leaf strings may be empty ("not yet defined").
pub fn validate(candidate: &Value) -> bool {
    match SchemaKind::detect(candidate) {
        Some(kind) => validate_as(kind, candidate),
        None => {
            debug!("range data rejected: unrecognized document shape");
            false
        }
    }
}

/// Check a candidate document against the schema for a known kind.
pub fn validate_as(kind: SchemaKind, candidate: &Value) -> bool {
    let Some(stages) = object_with_keys(candidate, &Stage::ALL.map(Stage::as_str)) else {
        return false;
    };
    stages.values().all(|positions| {
        let Some(positions) = object_with_keys(positions, &Position::ALL.map(Position::as_str))
        else {
            return false;
        };
        positions.values().all(|below| match kind {
            SchemaKind::Hero => valid_styles(below),
            SchemaKind::Opponent => valid_strengths(below),
        })
    })
}

fn valid_strengths(value: &Value) -> bool {
    let Some(strengths) = object_with_keys(value, &Strength::ALL.map(Strength::as_str)) else {
        return false;
    };
    strengths.values().all(valid_styles)
}

fn valid_styles(value: &Value) -> bool {
    let Some(styles) = object_with_keys(value, &PlayStyle::ALL.map(PlayStyle::as_str)) else {
        return false;
    };
    styles.values().all(valid_buckets)
}

fn valid_buckets(value: &Value) -> bool {
    let Some(buckets) = object_with_keys(value, &StackBucket::ALL.map(StackBucket::as_str)) else {
        return false;
    };
    StackBucket::ALL.iter().all(|bucket| {
        // presence is guaranteed by the exact-key check above
        valid_actions(*bucket, &buckets[bucket.as_str()])
    })
}

fn valid_actions(bucket: StackBucket, value: &Value) -> bool {
    let expected: Vec<&str> = bucket.actions().iter().map(|a| a.as_str()).collect();
    let Some(actions) = object_with_keys(value, &expected) else {
        return false;
    };
    actions.values().all(Value::is_string)
}

/// Borrow `value` as an object whose key set is exactly `expected`.
fn object_with_keys<'a>(value: &'a Value, expected: &[&str]) -> Option<&'a Map<String, Value>> {
    let map = value.as_object()?;
    if map.len() != expected.len() {
        return None;
    }
    if expected.iter().any(|key| !map.contains_key(*key)) {
        return None;
    }
    Some(map)
}

#[cfg(test)]
mod tests {
    use super::super::skeleton::skeleton;
    use super::*;
    use serde_json::json;

    #[test]
    fn test_skeletons_validate() {
        for kind in SchemaKind::ALL {
            let doc = skeleton(kind);
            assert!(validate(&doc), "{kind} skeleton should validate");
            assert!(validate_as(kind, &doc));
        }
    }

    #[test]
    fn test_empty_object_fails() {
        assert!(!validate(&json!({})));
        assert!(!validate_as(SchemaKind::Hero, &json!({})));
        assert!(!validate_as(SchemaKind::Opponent, &json!({})));
    }

    #[test]
    fn test_non_object_fails() {
        assert!(!validate(&json!(null)));
        assert!(!validate(&json!("early")));
        assert!(!validate(&json!(["early"])));
    }

    #[test]
    fn test_extra_top_level_key_fails() {
        let mut doc = skeleton(SchemaKind::Hero);
        doc.as_object_mut()
            .unwrap()
            .insert("overtime".to_string(), json!({}));
        assert!(!validate(&doc));
    }

    #[test]
    fn test_missing_stage_fails() {
        let mut doc = skeleton(SchemaKind::Hero);
        doc.as_object_mut().unwrap().remove("final");
        assert!(!validate(&doc));
    }

    #[test]
    fn test_non_string_leaf_fails() {
        let mut doc = skeleton(SchemaKind::Hero);
        doc["early"]["UTG"]["tight"]["big"]["open_raise"] = json!(42);
        assert!(!validate(&doc));
    }

    #[test]
    fn test_missing_action_key_fails() {
        let mut doc = skeleton(SchemaKind::Opponent);
        doc["late"]["BTN"]["fish"]["balanced"]["medium"]
            .as_object_mut()
            .unwrap()
            .remove("5bet");
        assert!(!validate(&doc));
    }

    #[test]
    fn test_action_from_deeper_bucket_fails() {
        // defense_vs_5bet belongs to the big bucket only
        let mut doc = skeleton(SchemaKind::Hero);
        doc["early"]["SB"]["aggressor"]["very_short"]
            .as_object_mut()
            .unwrap()
            .insert("defense_vs_5bet".to_string(), json!(""));
        assert!(!validate(&doc));
    }

    #[test]
    fn test_kind_mismatch_fails() {
        let hero = skeleton(SchemaKind::Hero);
        let opponent = skeleton(SchemaKind::Opponent);
        assert!(!validate_as(SchemaKind::Opponent, &hero));
        assert!(!validate_as(SchemaKind::Hero, &opponent));
    }

    #[test]
    fn test_filled_leaves_validate() {
        let mut doc = skeleton(SchemaKind::Hero);
        doc["early"]["UTG"]["tight"]["big"]["open_raise"] = json!("JTo+,22+");
        doc["final"]["BB"]["aggressor"]["very_short"]["push_range"] = json!("A2s+");
        assert!(validate(&doc));
    }
}
