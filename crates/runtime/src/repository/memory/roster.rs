//! In-memory CharacterRoster implementation for tests and local runs.

use std::collections::HashMap;
use std::sync::RwLock;

use life_core::CharacterId;

use crate::repository::{CharacterRoster, RepositoryError, Result};

#[derive(Clone, Copy, Debug, PartialEq)]
struct Entry {
    max_health: u32,
    health: f64,
}

/// Characters known to the host game, with their mirrored health.
pub struct InMemoryRoster {
    characters: RwLock<HashMap<CharacterId, Entry>>,
}

impl InMemoryRoster {
    pub fn new() -> Self {
        Self {
            characters: RwLock::new(HashMap::new()),
        }
    }

    /// Registers a character at full health.
    pub fn insert(&self, character: CharacterId, max_health: u32) -> Result<()> {
        let mut characters = self
            .characters
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        characters.insert(
            character,
            Entry {
                max_health,
                health: max_health as f64,
            },
        );
        Ok(())
    }
}

impl Default for InMemoryRoster {
    fn default() -> Self {
        Self::new()
    }
}

impl CharacterRoster for InMemoryRoster {
    fn max_health(&self, character: CharacterId) -> Result<Option<u32>> {
        let characters = self
            .characters
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(characters.get(&character).map(|entry| entry.max_health))
    }

    fn health(&self, character: CharacterId) -> Result<Option<f64>> {
        let characters = self
            .characters
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(characters.get(&character).map(|entry| entry.health))
    }

    fn update_health(&self, character: CharacterId, health: f64) -> Result<()> {
        let mut characters = self
            .characters
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        let entry = characters
            .get_mut(&character)
            .ok_or(RepositoryError::CharacterNotFound(character))?;
        entry.health = health;
        Ok(())
    }
}
