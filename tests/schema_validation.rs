//! Integration tests for the chart schema: skeleton generation,
//! structural validation, and lossless serialization of accepted
//! documents.

use range_keeper::schema::{self, SchemaKind, StackBucket};
use serde_json::json;

#[test]
fn test_skeleton_and_validator_agree_for_every_kind() {
    for kind in SchemaKind::ALL {
        let doc = schema::skeleton(kind);
        assert!(
            schema::validate(&doc),
            "freshly generated {kind} skeleton should validate"
        );
        assert!(schema::validate_as(kind, &doc));
    }
}

#[test]
fn test_action_counts_monotone_in_depth() {
    let counts: Vec<usize> = StackBucket::ALL
        .iter()
        .map(|bucket| bucket.actions().len())
        .collect();
    for pair in counts.windows(2) {
        assert!(
            pair[0] <= pair[1],
            "action count should not shrink as stacks deepen: {counts:?}"
        );
    }
}

#[test]
fn test_round_trip_is_lossless_for_accepted_documents() {
    for kind in SchemaKind::ALL {
        let mut doc = schema::skeleton(kind);
        // fill a few leaves so the round trip carries real content
        match kind {
            SchemaKind::Hero => {
                doc["middle"]["CO"]["balanced"]["medium"]["3bet"] = json!("TT+,AQs+");
            }
            SchemaKind::Opponent => {
                doc["middle"]["CO"]["regular"]["balanced"]["medium"]["3bet"] = json!("TT+,AQs+");
            }
        }
        assert!(schema::validate(&doc));

        let serialized = serde_json::to_string(&doc).expect("chart should serialize");
        let deserialized: serde_json::Value =
            serde_json::from_str(&serialized).expect("chart should deserialize");
        assert_eq!(deserialized, doc, "round trip should be lossless");
        assert!(schema::validate(&deserialized));
    }
}

#[test]
fn test_validator_is_a_predicate_over_garbage() {
    // none of these should panic, and all should be rejected
    let garbage = [
        json!(null),
        json!(17),
        json!("early"),
        json!([]),
        json!({}),
        json!({"early": null}),
        json!({"early": {"UTG": {"tight": "not an object"}}}),
    ];
    for doc in &garbage {
        assert!(!schema::validate(doc), "should reject {doc}");
    }
}

#[test]
fn test_unknown_axis_key_rejected_at_every_level() {
    let mut doc = schema::skeleton(SchemaKind::Hero);
    doc["early"]["UTG"]
        .as_object_mut()
        .unwrap()
        .insert("loose".to_string(), json!({}));
    assert!(!schema::validate(&doc), "extra play-style key should fail");

    let mut doc = schema::skeleton(SchemaKind::Opponent);
    doc["final"]["BB"]
        .as_object_mut()
        .unwrap()
        .insert("whale".to_string(), json!({}));
    assert!(!schema::validate(&doc), "extra strength key should fail");

    let mut doc = schema::skeleton(SchemaKind::Hero);
    doc["early"]["UTG"]["tight"]
        .as_object_mut()
        .unwrap()
        .insert("ultra_deep".to_string(), json!({}));
    assert!(!schema::validate(&doc), "extra bucket key should fail");
}

#[test]
fn test_correct_keys_with_non_string_leaf_rejected() {
    let mut doc = schema::skeleton(SchemaKind::Opponent);
    doc["pre-bubble"]["HJ"]["amateur"]["tight"]["short"]["4bet"] = json!(["AA", "KK"]);
    assert!(!schema::validate(&doc));

    let mut doc = schema::skeleton(SchemaKind::Hero);
    doc["pre-final"]["MP"]["aggressor"]["big"]["defense_vs_5bet"] = json!(null);
    assert!(!schema::validate(&doc));
}

#[test]
fn test_detect_distinguishes_chart_kinds() {
    assert_eq!(
        SchemaKind::detect(&schema::skeleton(SchemaKind::Hero)),
        Some(SchemaKind::Hero)
    );
    assert_eq!(
        SchemaKind::detect(&schema::skeleton(SchemaKind::Opponent)),
        Some(SchemaKind::Opponent)
    );
    assert_eq!(SchemaKind::detect(&json!({})), None);
}
