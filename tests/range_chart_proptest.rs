//! Property-based tests for the chart schema using proptest
//!
//! These verify that the skeleton generator and validator agree, that
//! accepted documents survive serialization losslessly, and that any
//! single structural corruption is rejected.

use proptest::prelude::*;
use range_keeper::schema::{
    self, PlayStyle, Position, SchemaKind, StackBucket, Stage, Strength,
};
use serde_json::{Value, json};

fn kind_strategy() -> impl Strategy<Value = SchemaKind> {
    prop_oneof![Just(SchemaKind::Hero), Just(SchemaKind::Opponent)]
}

// Strategy for plausible (but opaque to the crate) range-notation text
fn range_string_strategy() -> impl Strategy<Value = String> {
    "[AKQJT98765432os+,]{0,12}"
}

// Overwrite leaves in document order with the provided strings
fn fill_leaves(value: &mut Value, strings: &mut impl Iterator<Item = String>) {
    match value {
        Value::Object(map) => {
            for child in map.values_mut() {
                fill_leaves(child, strings);
            }
        }
        Value::String(s) => {
            if let Some(next) = strings.next() {
                *s = next;
            }
        }
        _ => {}
    }
}

// Path to one leaf, picked by wrapping indices into each axis table
fn leaf_path(kind: SchemaKind, picks: [usize; 5]) -> Vec<String> {
    let stage = Stage::ALL[picks[0] % Stage::ALL.len()];
    let position = Position::ALL[picks[1] % Position::ALL.len()];
    let style = PlayStyle::ALL[picks[2] % PlayStyle::ALL.len()];
    let bucket = StackBucket::ALL[picks[3] % StackBucket::ALL.len()];
    let action = bucket.actions()[picks[4] % bucket.actions().len()];

    let mut path = vec![stage.as_str().to_string(), position.as_str().to_string()];
    if kind == SchemaKind::Opponent {
        let strength = Strength::ALL[picks[2] % Strength::ALL.len()];
        path.push(strength.as_str().to_string());
    }
    path.push(style.as_str().to_string());
    path.push(bucket.as_str().to_string());
    path.push(action.as_str().to_string());
    path
}

fn node_at<'a>(doc: &'a mut Value, path: &[String]) -> &'a mut Value {
    let mut node = doc;
    for key in path {
        node = &mut node[key.as_str()];
    }
    node
}

proptest! {
    #[test]
    fn test_filled_skeletons_always_validate(
        kind in kind_strategy(),
        strings in prop::collection::vec(range_string_strategy(), 0..64),
    ) {
        let mut doc = schema::skeleton(kind);
        fill_leaves(&mut doc, &mut strings.into_iter());
        prop_assert!(schema::validate(&doc));
        prop_assert!(schema::validate_as(kind, &doc));
    }

    #[test]
    fn test_accepted_documents_round_trip_losslessly(
        kind in kind_strategy(),
        strings in prop::collection::vec(range_string_strategy(), 0..64),
    ) {
        let mut doc = schema::skeleton(kind);
        fill_leaves(&mut doc, &mut strings.into_iter());

        let serialized = serde_json::to_string(&doc).unwrap();
        let deserialized: Value = serde_json::from_str(&serialized).unwrap();
        prop_assert_eq!(&deserialized, &doc);
        prop_assert!(schema::validate(&deserialized));
    }

    #[test]
    fn test_any_single_corruption_is_rejected(
        kind in kind_strategy(),
        op in 0usize..4,
        picks in prop::array::uniform5(0usize..64),
    ) {
        let mut doc = schema::skeleton(kind);
        let path = leaf_path(kind, picks);

        match op {
            // drop a whole stage
            0 => {
                doc.as_object_mut().unwrap().remove(&path[0]);
            }
            // unknown top-level axis key
            1 => {
                doc.as_object_mut()
                    .unwrap()
                    .insert("overtime".to_string(), json!({}));
            }
            // non-string leaf
            2 => {
                *node_at(&mut doc, &path) = json!(42);
            }
            // drop one action key from its bucket
            _ => {
                let (leaf, bucket_path) = path.split_last().unwrap();
                node_at(&mut doc, bucket_path)
                    .as_object_mut()
                    .unwrap()
                    .remove(leaf);
            }
        }

        prop_assert!(!schema::validate_as(kind, &doc));
    }

    #[test]
    fn test_detect_is_stable_under_leaf_content(
        kind in kind_strategy(),
        strings in prop::collection::vec(range_string_strategy(), 0..32),
    ) {
        let mut doc = schema::skeleton(kind);
        fill_leaves(&mut doc, &mut strings.into_iter());
        prop_assert_eq!(SchemaKind::detect(&doc), Some(kind));
    }
}
