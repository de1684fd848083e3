//! Unified error types surfaced by the runtime API.
//!
//! Action failures caused by player input are not errors here; they come
//! back inside an [`super::ActionOutcome`]. `RuntimeError` covers what the
//! caller cannot fix by changing its request.
use thiserror::Error;

use life_core::CharacterId;

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("character {0} does not exist")]
    CharacterNotFound(CharacterId),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("character lock was poisoned")]
    LockPoisoned,

    #[error("service requires {0} to be configured before building")]
    MissingCollaborator(&'static str),

    #[error("invalid runtime configuration: {0}")]
    Config(String),
}

impl RuntimeError {
    /// True when the store rejected a write; nothing was persisted.
    pub fn is_persistence(&self) -> bool {
        matches!(self, Self::Repository(_))
    }
}
