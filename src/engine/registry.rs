//! Name table for storage engine kinds
//!
//! Built once per process from a static table and read-only afterwards.
//! Lookups are exact and case-sensitive. A miss is an error, never a
//! default: the engine kind selects the on-disk format at cluster creation.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use crate::observability::{log_event_with_fields, Event};

use super::errors::{EngineError, EngineResult};
use super::kind::StorageEngineKind;

/// One row of the name table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineEntry {
    pub kind: StorageEngineKind,
    pub canonical: &'static str,
    /// Older or experimental names accepted on input
    pub aliases: &'static [&'static str],
}

/// Canonical names and aliases. Part of the on-disk compatibility contract.
pub const ENGINE_TABLE: &[EngineEntry] = &[
    EngineEntry {
        kind: StorageEngineKind::SsdBtreeV1,
        canonical: "ssd-1",
        aliases: &[],
    },
    EngineEntry {
        kind: StorageEngineKind::SsdBtreeV2,
        canonical: "ssd-2",
        aliases: &["ssd"],
    },
    EngineEntry {
        kind: StorageEngineKind::SsdRedwoodV1,
        canonical: "ssd-redwood-1",
        aliases: &["redwood", "ssd-redwood-1-experimental"],
    },
    EngineEntry {
        kind: StorageEngineKind::SsdRocksDbV1,
        canonical: "ssd-rocksdb-v1",
        aliases: &[],
    },
    EngineEntry {
        kind: StorageEngineKind::SsdShardedRocksDb,
        canonical: "ssd-sharded-rocksdb",
        aliases: &[],
    },
    EngineEntry {
        kind: StorageEngineKind::Memory,
        canonical: "memory",
        aliases: &[],
    },
    EngineEntry {
        kind: StorageEngineKind::MemoryRadixTree,
        canonical: "memory-radixtree-beta",
        aliases: &[],
    },
    EngineEntry {
        kind: StorageEngineKind::Veb,
        canonical: "veb",
        aliases: &[],
    },
];

static GLOBAL: OnceLock<StorageEngineRegistry> = OnceLock::new();

/// Bidirectional map between engine kinds and names.
#[derive(Debug)]
pub struct StorageEngineRegistry {
    by_name: BTreeMap<&'static str, StorageEngineKind>,
    entries: BTreeMap<StorageEngineKind, EngineEntry>,
}

impl StorageEngineRegistry {
    /// Process-wide registry, built from [`ENGINE_TABLE`] on first use.
    pub fn global() -> &'static Self {
        GLOBAL.get_or_init(|| {
            let registry = Self::from_table(ENGINE_TABLE);
            let names = registry.by_name.len().to_string();
            log_event_with_fields(Event::EngineRegistryInit, &[("names", &names)]);
            registry
        })
    }

    /// Builds a registry from a table.
    ///
    /// # Panics
    ///
    /// Panics if a name appears twice, a kind has more than one row, a
    /// canonical name disagrees with [`StorageEngineKind::name`], or a kind
    /// is missing. The table is static data, so any of these is a build
    /// defect.
    pub fn from_table(table: &[EngineEntry]) -> Self {
        let mut by_name = BTreeMap::new();
        let mut entries = BTreeMap::new();

        for entry in table {
            assert_eq!(
                entry.canonical,
                entry.kind.name(),
                "canonical name mismatch for {:?}",
                entry.kind
            );
            assert!(
                entries.insert(entry.kind, *entry).is_none(),
                "storage engine {:?} listed twice",
                entry.kind
            );
            for name in std::iter::once(&entry.canonical).chain(entry.aliases) {
                assert!(
                    by_name.insert(*name, entry.kind).is_none(),
                    "storage engine name '{}' listed twice",
                    name
                );
            }
        }

        for kind in StorageEngineKind::ALL {
            assert!(entries.contains_key(&kind), "storage engine {:?} has no name", kind);
        }

        Self { by_name, entries }
    }

    /// Canonical name of `kind`.
    pub fn name_of(&self, kind: StorageEngineKind) -> &'static str {
        kind.name()
    }

    /// Resolves a canonical name or alias.
    pub fn kind_of(&self, name: &str) -> EngineResult<StorageEngineKind> {
        match self.by_name.get(name) {
            Some(kind) => Ok(*kind),
            None => {
                log_event_with_fields(Event::EngineLookupFailed, &[("name", name)]);
                Err(EngineError::UnrecognizedIdentifier(name.to_string()))
            }
        }
    }

    /// Accepted aliases of `kind`, excluding its canonical name.
    pub fn aliases_of(&self, kind: StorageEngineKind) -> &'static [&'static str] {
        self.entries
            .get(&kind)
            .map(|entry| entry.aliases)
            .unwrap_or(&[])
    }

    /// All rows, in code order.
    pub fn entries(&self) -> impl Iterator<Item = &EngineEntry> {
        self.entries.values()
    }

    /// Every accepted name with its kind, sorted by name.
    pub fn names(&self) -> impl Iterator<Item = (&'static str, StorageEngineKind)> + '_ {
        self.by_name.iter().map(|(name, kind)| (*name, *kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_round_trip() {
        let registry = StorageEngineRegistry::global();
        for kind in StorageEngineKind::ALL {
            assert_eq!(registry.kind_of(registry.name_of(kind)).unwrap(), kind);
        }
    }

    #[test]
    fn test_aliases() {
        let registry = StorageEngineRegistry::global();
        assert_eq!(registry.kind_of("ssd").unwrap(), StorageEngineKind::SsdBtreeV2);
        assert_eq!(registry.kind_of("redwood").unwrap(), StorageEngineKind::SsdRedwoodV1);
        assert_eq!(
            registry.kind_of("ssd-redwood-1-experimental").unwrap(),
            StorageEngineKind::SsdRedwoodV1
        );
        assert_eq!(
            registry.aliases_of(StorageEngineKind::SsdRedwoodV1),
            &["redwood", "ssd-redwood-1-experimental"]
        );
        assert!(registry.aliases_of(StorageEngineKind::Veb).is_empty());
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let registry = StorageEngineRegistry::global();
        let err = registry.kind_of("SSD-2").unwrap_err();
        assert_eq!(err, EngineError::UnrecognizedIdentifier("SSD-2".to_string()));
        assert!(registry.kind_of("").is_err());
        assert!(registry.kind_of(" ssd-2").is_err());
    }

    #[test]
    fn test_name_count() {
        // 8 canonical names + 3 aliases
        assert_eq!(StorageEngineRegistry::global().names().count(), 11);
    }

    #[test]
    fn test_entries_in_code_order() {
        let codes: Vec<u8> = StorageEngineRegistry::global()
            .entries()
            .map(|entry| entry.kind.code())
            .collect();
        assert_eq!(codes, (0..8).collect::<Vec<u8>>());
    }

    #[test]
    #[should_panic(expected = "listed twice")]
    fn test_duplicate_alias_rejected() {
        let mut table = ENGINE_TABLE.to_vec();
        table[0].aliases = &["ssd"];
        StorageEngineRegistry::from_table(&table);
    }

    #[test]
    #[should_panic(expected = "has no name")]
    fn test_missing_kind_rejected() {
        StorageEngineRegistry::from_table(&ENGINE_TABLE[..7]);
    }
}
