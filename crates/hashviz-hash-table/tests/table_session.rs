use std::fs;

use hashviz_core::{CollisionStrategy, HashMethod, HashVizError, Key, KeyType, TableParams};
use hashviz_hash_table::{HashTable, HashTableError, InsertStatus};
use tempfile::tempdir;

#[test]
fn test_session_from_json_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("table.json");
    fs::write(
        &path,
        r#"{"size": 10, "keyType": "number", "hashMethod": "division", "collisionMethod": "quadratic"}"#,
    )
    .unwrap();

    let params = TableParams::from_json_file(&path).unwrap();
    assert_eq!(params.capacity(), 10);
    assert_eq!(params.collision_strategy(), CollisionStrategy::Quadratic);

    let mut table = HashTable::new(params).unwrap();
    for key in [3, 13, 23] {
        table.insert(Key::Int(key)).unwrap();
    }
    let found = table.search(&Key::Int(23)).unwrap();
    assert_eq!(found.index, Some(7));
    assert_eq!(found.probe_path, vec![3, 4, 7]);
}

#[test]
fn test_session_parses_user_input() {
    let params = TableParams::builder()
        .capacity(7)
        .key_type(KeyType::String)
        .hash_method(HashMethod::Division)
        .collision_strategy(CollisionStrategy::InternalChain)
        .build()
        .unwrap();
    let mut table = HashTable::new(params).unwrap();

    // "abc" -> 96354 -> slot 6 under the division method
    let key = Key::parse("abc", table.params().key_type()).unwrap();
    assert_eq!(table.compute_index(&key).unwrap(), 6);
    let outcome = table.insert(key).unwrap();
    assert_eq!(
        outcome.status,
        InsertStatus::Placed {
            index: 6,
            collisions: 0
        }
    );

    // "Charlie" wraps to a negative integer and a negative remainder
    let charlie = Key::parse("Charlie", KeyType::String).unwrap();
    assert_eq!(table.compute_index(&charlie).unwrap(), -2);
    let err = table.insert(charlie).unwrap_err();
    assert!(matches!(err, HashTableError::IndexOutOfRange { index: -2, .. }));
    assert_eq!(table.len(), 1);
}

#[test]
fn test_entries_serialize_for_presentation() {
    let params = TableParams::builder()
        .capacity(7)
        .collision_strategy(CollisionStrategy::Linear)
        .build()
        .unwrap();
    let mut table = HashTable::new(params).unwrap();
    table.insert(Key::Int(0)).unwrap();
    let outcome = table.insert(Key::Int(7)).unwrap();

    let entries = serde_json::to_value(table.entries().unwrap()).unwrap();
    assert_eq!(
        entries[1],
        serde_json::json!({
            "index": 1,
            "key": 7,
            "hashValue": 0,
            "collisions": 1,
            "link": null
        })
    );
    assert_eq!(entries[2]["key"], serde_json::Value::Null);

    let outcome = serde_json::to_value(&outcome).unwrap();
    assert_eq!(outcome["status"]["kind"], "placed");
    assert_eq!(outcome["probePath"], serde_json::json!([0, 1]));
}

#[test]
fn test_invalid_config_is_rejected() {
    let err = TableParams::from_json_str(r#"{"capacity": 30}"#).unwrap_err();
    assert!(matches!(err, HashVizError::InvalidCapacity { capacity: 30, .. }));

    let dir = tempdir().unwrap();
    let err = TableParams::from_json_file(&dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, HashVizError::Io { .. }));
}

#[test]
fn test_rebuild_from_clamped_capacity() {
    let mut table = HashTable::new(TableParams::default()).unwrap();
    table.insert(Key::Int(1)).unwrap();

    let capacity = TableParams::clamp_capacity(42);
    table.rebuild(TableParams::new(capacity)).unwrap();
    assert_eq!(table.params().capacity(), 20);
    assert!(table.is_empty());
    assert!(table.chain_entries(None).is_empty());
}
