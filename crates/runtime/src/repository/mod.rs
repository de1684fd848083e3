//! Repository layer for dynamic runtime data
//!
//! Repositories handle data that CHANGES during gameplay:
//! - Life records (stats + diseases), versioned for compare-and-swap
//! - Inventory stacks consumed by actions
//! - Character health mirrored back to the roster
//!
//! Static reference data (items, diseases) is handled by Oracles, not Repositories.

mod error;
mod memory;
mod traits;

pub use error::{RepositoryError, Result};
pub use memory::{InMemoryInventory, InMemoryLifeRepo, InMemoryRoster};
pub use traits::{CharacterRoster, InventoryRepository, LifeRepository, Versioned};
