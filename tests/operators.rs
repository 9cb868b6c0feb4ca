//! End-to-end tests for namepath traversal and operator semantics:
//! plain descent, `map` broadcast, container synthesis, and the no-op
//! fallbacks that keep every operation total.

use namepath::{get_at, get_at_by, map_at, namepath, path, set_at, Assign, Namepath, Value};
use serde_json::json;

// ============================================================================
// Reads
// ============================================================================

#[test]
fn get_returns_default_only_when_missing() {
    let root = Value::from(json!({"a": {"b": null}, "items": [10]}));
    let fallback = Value::from("fallback");

    assert_eq!(get_at(&root, &path!("a", "b"), &fallback), &Value::Null);
    assert_eq!(get_at(&root, &path!("items", 0), &fallback).as_i64(), Some(10));
    assert_eq!(
        get_at(&root, &path!("a", "missing"), &fallback).as_str(),
        Some("fallback"),
    );
    assert_eq!(
        get_at(&root, &path!("items", 5), &fallback).as_str(),
        Some("fallback"),
    );
}

#[test]
fn get_with_custom_missing_predicate() {
    let root = Value::from(json!({"a": null}));
    let fallback = Value::from(1);

    // Default predicate: null is present.
    assert_eq!(get_at(&root, &path!("a"), &fallback), &Value::Null);
    // Custom predicate: null counts as missing.
    let got = get_at_by(&root, &path!("a"), &fallback, |v| {
        v.is_absent() || v.is_null()
    });
    assert_eq!(got.as_i64(), Some(1));
}

#[test]
fn get_through_scalar_is_missing() {
    let root = Value::from(json!({"n": 5}));
    let fallback = Value::from("fb");
    assert_eq!(
        get_at(&root, &path!("n", "deeper"), &fallback).as_str(),
        Some("fb"),
    );
}

// ============================================================================
// Writes and container synthesis
// ============================================================================

#[test]
fn set_synthesizes_records_and_sequences() {
    let empty = Value::from(json!({}));

    let with_record = set_at(&empty, &path!("a", "b", "c"), 1);
    assert_eq!(with_record, Value::from(json!({"a": {"b": {"c": 1}}})));

    let with_seq = set_at(&empty, &path!("rows", 1, "id"), 7);
    assert!(with_seq.at(&path!("rows")).is_seq());
    assert!(with_seq.at(&path!("rows", 0)).is_absent());
    assert_eq!(with_seq.at(&path!("rows", 1, "id")).as_i64(), Some(7));
}

#[test]
fn set_replaces_null_links_with_containers() {
    let root = Value::from(json!({"a": null}));
    let updated = set_at(&root, &path!("a", "b"), 2);
    assert_eq!(updated, Value::from(json!({"a": {"b": 2}})));
}

#[test]
fn set_pads_sequences_past_the_end() {
    let root = Value::from(json!({"items": [1]}));
    let updated = set_at(&root, &path!("items", 3), 4);
    let items = updated.at(&path!("items"));
    assert_eq!(items.as_seq().map(|s| s.len()), Some(4));
    assert!(updated.at(&path!("items", 1)).is_absent());
    assert_eq!(updated.at(&path!("items", 3)).as_i64(), Some(4));
}

#[test]
fn set_through_scalar_is_noop() {
    let root = Value::from(json!({"n": 5}));
    assert_eq!(set_at(&root, &path!("n", "deeper"), 1), root);
}

#[test]
fn set_factory_sees_the_enclosing_node() {
    let root = Value::from(json!({"count": 2, "limit": 10}));
    let updated = set_at(
        &root,
        &path!("count"),
        Assign::with(|node| {
            // The factory is handed the record holding the leaf, so it can
            // derive the new leaf from sibling fields.
            let count = node.at(&path!("count")).as_i64().unwrap_or(0);
            let limit = node.at(&path!("limit")).as_i64().unwrap_or(0);
            Value::from((count + 1).min(limit))
        }),
    );
    assert_eq!(updated.at(&path!("count")).as_i64(), Some(3));
}

// ============================================================================
// Operator semantics
// ============================================================================

#[test]
fn map_factory_sees_the_leaf() {
    let root = Value::from(json!({"n": 3}));
    let updated = map_at(
        &root,
        &namepath!("n"),
        Assign::with(|leaf| Value::from(leaf.as_i64().unwrap_or(0) * 7)),
    );
    assert_eq!(updated.at(&path!("n")).as_i64(), Some(21));
}

#[test]
fn broadcast_rewrites_each_element() {
    let root = Value::from(json!({
        "users": [
            {"name": "ada", "age": 36},
            {"name": "grace", "age": 45}
        ]
    }));
    let updated = map_at(
        &root,
        &namepath!("map:users", "age"),
        Assign::with(|v| Value::from(v.as_i64().unwrap_or(0) + 1)),
    );
    assert_eq!(updated.at(&path!("users", 0, "age")).as_i64(), Some(37));
    assert_eq!(updated.at(&path!("users", 1, "age")).as_i64(), Some(46));
    assert_eq!(updated.at(&path!("users", 0, "name")).as_str(), Some("ada"));
}

#[test]
fn nested_broadcasts_compose() {
    let root = Value::from(json!({
        "groups": [
            {"members": [1, 2]},
            {"members": [3]}
        ]
    }));
    let updated = map_at(
        &root,
        &namepath!("map:groups", "map:members"),
        Assign::with(|v| Value::from(v.as_i64().unwrap_or(0) * 10)),
    );
    assert_eq!(
        updated,
        Value::from(json!({
            "groups": [
                {"members": [10, 20]},
                {"members": [30]}
            ]
        })),
    );
}

#[test]
fn broadcast_factory_receives_element_indices() {
    let root = Value::from(json!({"items": ["x", "y", "z"]}));
    let updated = map_at(
        &root,
        &namepath!("map:items"),
        Assign::with_index(|item, index| {
            let label = item.as_str().unwrap_or("");
            Value::from(format!("{}-{}", index.unwrap_or(0), label))
        }),
    );
    assert_eq!(
        updated.at(&path!("items")),
        &Value::from(json!(["0-x", "1-y", "2-z"])),
    );
}

#[test]
fn unknown_operators_leave_the_value_alone() {
    let root = Value::from(json!({"items": [1, 2]}));
    for raw in ["filter:items", "each:items", ":items"] {
        let updated = map_at(&root, &Namepath::dotted(raw), 0);
        assert_eq!(updated, root, "operator token {raw:?}");
    }
}

#[test]
fn map_over_missing_or_scalar_targets_is_noop() {
    let root = Value::from(json!({"n": 1}));
    assert_eq!(map_at(&root, &namepath!("map:missing"), 0), root);
    assert_eq!(map_at(&root, &namepath!("map:n"), 0), root);
    assert_eq!(map_at(&root, &namepath!("map:missing", "deep"), 0), root);
}

#[test]
fn dotted_namepaths_match_structured_ones() {
    let root = Value::from(json!({"rows": [{"n": 1}, {"n": 2}]}));
    let bump = || Assign::with(|v: &Value| Value::from(v.as_i64().unwrap_or(0) + 1));

    let via_string = map_at(&root, &Namepath::dotted("map:rows.n"), bump());
    let via_macro = map_at(&root, &namepath!("map:rows", "n"), bump());
    assert_eq!(via_string, via_macro);
    assert_eq!(
        via_string,
        Value::from(json!({"rows": [{"n": 2}, {"n": 3}]})),
    );
}

#[test]
fn numeric_tokens_address_sequence_positions() {
    let root = Value::from(json!({"rows": [[1], [2, 3]]}));
    let updated = map_at(&root, &Namepath::dotted("rows.1.0"), 9);
    assert_eq!(updated, Value::from(json!({"rows": [[1], [9, 3]]})));
}
