//! Repository contracts for the mutable data the engine touches.
//!
//! Life records are owned by the engine. Inventory and the character roster
//! belong to other subsystems and are only borrowed through these seams.

use life_core::{CharacterId, ItemId, LifeRecord};

use super::Result;

/// A stored value together with its optimistic-concurrency version.
#[derive(Clone, Debug, PartialEq)]
pub struct Versioned<T> {
    pub value: T,
    pub version: u64,
}

/// Keyed store of one [`LifeRecord`] per character.
pub trait LifeRepository: Send + Sync {
    fn load(&self, character: CharacterId) -> Result<Option<Versioned<LifeRecord>>>;

    /// Writes `record` if the stored version still equals `expected`
    /// (`None` meaning "no record yet") and returns the new version.
    ///
    /// Fails with [`super::RepositoryError::VersionConflict`] or
    /// [`super::RepositoryError::AlreadyExists`] without writing otherwise.
    fn save(&self, record: &LifeRecord, expected: Option<u64>) -> Result<u64>;

    fn exists(&self, character: CharacterId) -> bool {
        matches!(self.load(character), Ok(Some(_)))
    }
}

/// Item stacks held by characters.
pub trait InventoryRepository: Send + Sync {
    fn quantity(&self, character: CharacterId, item: ItemId) -> Result<u32>;

    /// Removes `count` items, or fails with
    /// [`super::RepositoryError::InsufficientQuantity`] and changes nothing.
    fn decrement(&self, character: CharacterId, item: ItemId, count: u32) -> Result<()>;

    /// Returns items; used to roll back a decrement whose commit failed.
    fn increment(&self, character: CharacterId, item: ItemId, count: u32) -> Result<()>;
}

/// Character attributes owned outside the engine.
pub trait CharacterRoster: Send + Sync {
    /// `None` when the character does not exist.
    fn max_health(&self, character: CharacterId) -> Result<Option<u32>>;

    /// Current health of the character. Damage or healing done outside
    /// this engine shows up here first.
    fn health(&self, character: CharacterId) -> Result<Option<f64>>;

    /// Mirrors the engine's health value onto the character.
    fn update_health(&self, character: CharacterId, health: f64) -> Result<()>;
}
