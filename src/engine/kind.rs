//! Storage engine kinds
//!
//! The numeric codes are persisted at cluster creation and must never be
//! reassigned.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use super::errors::EngineError;
use super::registry::StorageEngineRegistry;

/// Name reported for codes outside the enumeration.
pub const UNKNOWN_ENGINE_NAME: &str = "unknown";

/// Physical storage backend kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum StorageEngineKind {
    /// B-tree, first on-disk format
    SsdBtreeV1 = 0,
    /// In-memory engine with a disk-backed log
    Memory = 1,
    /// B-tree, second on-disk format
    SsdBtreeV2 = 2,
    /// Redwood versioned B+tree
    SsdRedwoodV1 = 3,
    /// In-memory radix tree
    MemoryRadixTree = 4,
    /// RocksDB LSM
    SsdRocksDbV1 = 5,
    /// RocksDB with per-shard column families
    SsdShardedRocksDb = 6,
    /// van Emde Boas indexed engine
    Veb = 7,
}

impl StorageEngineKind {
    /// Every kind, in code order
    pub const ALL: [StorageEngineKind; 8] = [
        StorageEngineKind::SsdBtreeV1,
        StorageEngineKind::Memory,
        StorageEngineKind::SsdBtreeV2,
        StorageEngineKind::SsdRedwoodV1,
        StorageEngineKind::MemoryRadixTree,
        StorageEngineKind::SsdRocksDbV1,
        StorageEngineKind::SsdShardedRocksDb,
        StorageEngineKind::Veb,
    ];

    /// Persisted numeric code
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.get(usize::from(code)).copied()
    }

    /// Canonical name
    pub fn name(self) -> &'static str {
        match self {
            StorageEngineKind::SsdBtreeV1 => "ssd-1",
            StorageEngineKind::SsdBtreeV2 => "ssd-2",
            StorageEngineKind::SsdRedwoodV1 => "ssd-redwood-1",
            StorageEngineKind::SsdRocksDbV1 => "ssd-rocksdb-v1",
            StorageEngineKind::SsdShardedRocksDb => "ssd-sharded-rocksdb",
            StorageEngineKind::Memory => "memory",
            StorageEngineKind::MemoryRadixTree => "memory-radixtree-beta",
            StorageEngineKind::Veb => "veb",
        }
    }
}

/// Canonical name for a persisted code; `"unknown"` for codes this build
/// does not know.
pub fn name_of_code(code: u8) -> &'static str {
    StorageEngineKind::from_code(code)
        .map(StorageEngineKind::name)
        .unwrap_or(UNKNOWN_ENGINE_NAME)
}

impl fmt::Display for StorageEngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StorageEngineKind {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StorageEngineRegistry::global().kind_of(s)
    }
}

impl Serialize for StorageEngineKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for StorageEngineKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_stable() {
        assert_eq!(StorageEngineKind::SsdBtreeV1.code(), 0);
        assert_eq!(StorageEngineKind::Memory.code(), 1);
        assert_eq!(StorageEngineKind::SsdBtreeV2.code(), 2);
        assert_eq!(StorageEngineKind::SsdRedwoodV1.code(), 3);
        assert_eq!(StorageEngineKind::MemoryRadixTree.code(), 4);
        assert_eq!(StorageEngineKind::SsdRocksDbV1.code(), 5);
        assert_eq!(StorageEngineKind::SsdShardedRocksDb.code(), 6);
        assert_eq!(StorageEngineKind::Veb.code(), 7);
    }

    #[test]
    fn test_from_code_round_trip() {
        for kind in StorageEngineKind::ALL {
            assert_eq!(StorageEngineKind::from_code(kind.code()), Some(kind));
        }
        assert_eq!(StorageEngineKind::from_code(8), None);
    }

    #[test]
    fn test_unknown_code_name() {
        assert_eq!(name_of_code(2), "ssd-2");
        assert_eq!(name_of_code(42), "unknown");
        assert_eq!(name_of_code(u8::MAX), "unknown");
    }

    #[test]
    fn test_serde_by_name() {
        let json = serde_json::to_string(&StorageEngineKind::SsdRedwoodV1).unwrap();
        assert_eq!(json, "\"ssd-redwood-1\"");

        let kind: StorageEngineKind = serde_json::from_str("\"redwood\"").unwrap();
        assert_eq!(kind, StorageEngineKind::SsdRedwoodV1);

        assert!(serde_json::from_str::<StorageEngineKind>("\"btree\"").is_err());
    }
}
