//! In-memory InventoryRepository implementation for tests and local runs.

use std::collections::HashMap;
use std::sync::RwLock;

use life_core::{CharacterId, ItemId};

use crate::repository::{InventoryRepository, RepositoryError, Result};

/// Item stacks keyed by `(character, item)`. Empty stacks are dropped.
pub struct InMemoryInventory {
    stacks: RwLock<HashMap<(CharacterId, ItemId), u32>>,
}

impl InMemoryInventory {
    pub fn new() -> Self {
        Self {
            stacks: RwLock::new(HashMap::new()),
        }
    }

    /// Overwrites a stack.
    pub fn set(&self, character: CharacterId, item: ItemId, quantity: u32) -> Result<()> {
        let mut stacks = self
            .stacks
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        if quantity == 0 {
            stacks.remove(&(character, item));
        } else {
            stacks.insert((character, item), quantity);
        }
        Ok(())
    }

    /// Adds items to a stack, creating it if needed.
    pub fn give(&self, character: CharacterId, item: ItemId, quantity: u32) -> Result<()> {
        self.increment(character, item, quantity)
    }
}

impl Default for InMemoryInventory {
    fn default() -> Self {
        Self::new()
    }
}

impl InventoryRepository for InMemoryInventory {
    fn quantity(&self, character: CharacterId, item: ItemId) -> Result<u32> {
        let stacks = self
            .stacks
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(stacks.get(&(character, item)).copied().unwrap_or(0))
    }

    fn decrement(&self, character: CharacterId, item: ItemId, count: u32) -> Result<()> {
        let mut stacks = self
            .stacks
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        let available = stacks.get(&(character, item)).copied().unwrap_or(0);
        if available < count {
            return Err(RepositoryError::InsufficientQuantity {
                character,
                item,
                requested: count,
                available,
            });
        }
        let remaining = available - count;
        if remaining == 0 {
            stacks.remove(&(character, item));
        } else {
            stacks.insert((character, item), remaining);
        }
        Ok(())
    }

    fn increment(&self, character: CharacterId, item: ItemId, count: u32) -> Result<()> {
        if count == 0 {
            return Ok(());
        }
        let mut stacks = self
            .stacks
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        let stack = stacks.entry((character, item)).or_insert(0);
        *stack = stack.saturating_add(count);
        Ok(())
    }
}
