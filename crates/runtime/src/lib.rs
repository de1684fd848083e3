//! Runtime orchestration for the character needs & health rules.
//!
//! This crate wires the pure rules from `life-core` to storage, inventory,
//! the character roster and a game clock, and exposes the operations the
//! page/UI layer calls through [`LifeService`].
//!
//! Modules are organized by responsibility:
//! - [`service`] hosts the facade and its builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`clock`] provides game time sources
//! - [`oracle`] and [`repository`] provide data adapters reused by other crates
pub mod api;
pub mod clock;
pub mod config;
pub mod oracle;
pub mod repository;
pub mod service;

mod locks;

pub use api::{ActionOutcome, LifeSnapshot, Result, RuntimeError};
pub use clock::{GameClock, ManualClock, SystemClock};
pub use config::RuntimeConfig;
pub use oracle::{DiseaseOracleImpl, ItemOracleImpl, OracleManager};
pub use repository::{
    CharacterRoster, InMemoryInventory, InMemoryLifeRepo, InMemoryRoster, InventoryRepository,
    LifeRepository, RepositoryError, Versioned,
};
pub use service::{LifeService, LifeServiceBuilder};
