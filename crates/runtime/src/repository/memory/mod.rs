//! In-memory repository implementations for testing and development.

mod inventory;
mod life;
mod roster;

pub use inventory::InMemoryInventory;
pub use life::InMemoryLifeRepo;
pub use roster::InMemoryRoster;
