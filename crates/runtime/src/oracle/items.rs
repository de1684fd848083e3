//! Minimal [`life_core::ItemOracle`] backed by an in-memory map.
use life_core::{ItemDefinition, ItemId, ItemOracle};
use std::collections::HashMap;

/// ItemOracle implementation with static item definitions
pub struct ItemOracleImpl {
    definitions: HashMap<ItemId, ItemDefinition>,
}

impl ItemOracleImpl {
    pub fn new() -> Self {
        Self {
            definitions: HashMap::new(),
        }
    }

    /// Add an item definition; a later definition with the same id wins.
    pub fn add_definition(&mut self, def: ItemDefinition) {
        self.definitions.insert(def.id, def);
    }
}

impl Default for ItemOracleImpl {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<ItemDefinition> for ItemOracleImpl {
    fn from_iter<I: IntoIterator<Item = ItemDefinition>>(iter: I) -> Self {
        let mut oracle = Self::new();
        for def in iter {
            oracle.add_definition(def);
        }
        oracle
    }
}

impl ItemOracle for ItemOracleImpl {
    fn definition(&self, id: ItemId) -> Option<ItemDefinition> {
        self.definitions.get(&id).cloned()
    }

    fn all_definitions(&self) -> Vec<ItemDefinition> {
        let mut defs: Vec<_> = self.definitions.values().cloned().collect();
        defs.sort_by_key(|def| def.id);
        defs
    }
}
