//! Public runtime API surface.
//!
//! This module gathers the types exposed to consumers of the runtime crate so
//! the service can stay focused on orchestration.

pub mod errors;
pub mod outcome;

pub use errors::{Result, RuntimeError};
pub use outcome::{ActionOutcome, LifeSnapshot};
