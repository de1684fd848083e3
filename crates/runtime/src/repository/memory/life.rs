//! In-memory LifeRepository implementation for tests and local runs.

use std::collections::HashMap;
use std::sync::RwLock;

use life_core::{CharacterId, LifeRecord};

use crate::repository::{LifeRepository, RepositoryError, Result, Versioned};

/// In-memory implementation of LifeRepository.
///
/// Versions start at 1 on the first save and increase by one per write.
pub struct InMemoryLifeRepo {
    records: RwLock<HashMap<CharacterId, Versioned<LifeRecord>>>,
}

impl InMemoryLifeRepo {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.read().map(|records| records.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryLifeRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl LifeRepository for InMemoryLifeRepo {
    fn load(&self, character: CharacterId) -> Result<Option<Versioned<LifeRecord>>> {
        let records = self
            .records
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(records.get(&character).cloned())
    }

    fn save(&self, record: &LifeRecord, expected: Option<u64>) -> Result<u64> {
        let mut records = self
            .records
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        let character = record.character();
        let found = records.get(&character).map(|stored| stored.version);

        match (expected, found) {
            (None, Some(_)) => return Err(RepositoryError::AlreadyExists(character)),
            (expected, found) if expected != found => {
                return Err(RepositoryError::VersionConflict {
                    character,
                    expected,
                    found,
                });
            }
            _ => {}
        }

        let version = found.map_or(1, |v| v + 1);
        records.insert(
            character,
            Versioned {
                value: record.clone(),
                version,
            },
        );
        Ok(version)
    }

    fn exists(&self, character: CharacterId) -> bool {
        self.records
            .read()
            .map(|records| records.contains_key(&character))
            .unwrap_or(false)
    }
}
