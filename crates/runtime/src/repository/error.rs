//! Error types raised by repository implementations.

use life_core::{CharacterId, ItemId};
use thiserror::Error;

/// Errors surfaced by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("repository lock was poisoned")]
    LockPoisoned,

    #[error("life record for {character} changed concurrently (expected version {expected:?}, found {found:?})")]
    VersionConflict {
        character: CharacterId,
        expected: Option<u64>,
        found: Option<u64>,
    },

    #[error("life record for {0} already exists")]
    AlreadyExists(CharacterId),

    #[error("{character} holds {available} of {item}, {requested} requested")]
    InsufficientQuantity {
        character: CharacterId,
        item: ItemId,
        requested: u32,
        available: u32,
    },

    #[error("character {0} not found")]
    CharacterNotFound(CharacterId),

    #[error("storage backend failure: {0}")]
    Backend(String),
}

pub type Result<T> = std::result::Result<T, RepositoryError>;
