//! Storage Engine Registry Tests
//!
//! - Every engine round-trips through its canonical name
//! - Aliases resolve to their canonical engine
//! - Unknown identifiers are rejected, never guessed

use keyspace::engine::{name_of_code, EngineError, StorageEngineKind, UNKNOWN_ENGINE_NAME};
use keyspace::{KeyspaceConfig, StorageEngineRegistry};

#[test]
fn test_canonical_names_round_trip() {
    let registry = StorageEngineRegistry::global();
    for kind in StorageEngineKind::ALL {
        let name = registry.name_of(kind);
        assert_eq!(registry.kind_of(name).unwrap(), kind, "round trip of {}", name);
    }
}

#[test]
fn test_aliases_resolve() {
    let registry = StorageEngineRegistry::global();
    assert_eq!(registry.kind_of("ssd").unwrap(), StorageEngineKind::SsdBtreeV2);
    assert_eq!(registry.kind_of("redwood").unwrap(), StorageEngineKind::SsdRedwoodV1);
    assert_eq!(
        registry.kind_of("ssd-redwood-1-experimental").unwrap(),
        StorageEngineKind::SsdRedwoodV1
    );
    assert_eq!(registry.name_of(StorageEngineKind::SsdRedwoodV1), "ssd-redwood-1");
}

#[test]
fn test_unknown_identifier_rejected() {
    let err = StorageEngineRegistry::global().kind_of("SSD-2").unwrap_err();
    assert!(matches!(err, EngineError::UnrecognizedIdentifier(ref id) if id == "SSD-2"));
    assert!(err.to_string().contains("SSD-2"));
}

#[test]
fn test_codes_are_stable() {
    assert_eq!(StorageEngineKind::SsdBtreeV1.code(), 0);
    assert_eq!(StorageEngineKind::Memory.code(), 1);
    assert_eq!(StorageEngineKind::SsdShardedRocksDb.code(), 6);
    assert_eq!(name_of_code(5), "ssd-rocksdb-v1");
    assert_eq!(name_of_code(42), UNKNOWN_ENGINE_NAME);
}

#[test]
fn test_from_str_and_serde_use_names() {
    let kind: StorageEngineKind = "memory-radixtree-beta".parse().unwrap();
    assert_eq!(kind, StorageEngineKind::MemoryRadixTree);

    let config = KeyspaceConfig::from_json_str(r#"{"storage_engine": "redwood"}"#).unwrap();
    assert_eq!(config.storage_engine, StorageEngineKind::SsdRedwoodV1);
    assert_eq!(
        serde_json::to_string(&config.storage_engine).unwrap(),
        "\"ssd-redwood-1\""
    );
}

#[test]
fn test_config_rejects_unknown_engine() {
    assert!(KeyspaceConfig::from_json_str(r#"{"storage_engine": "lsm"}"#).is_err());
}
