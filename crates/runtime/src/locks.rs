use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use life_core::CharacterId;

use crate::api::{Result, RuntimeError};

/// One mutex per character so read-modify-write cycles never interleave.
///
/// Entries are created on first use and dropped again once no caller holds
/// or waits on them.
#[derive(Default)]
pub(crate) struct CharacterLocks {
    locks: Mutex<HashMap<CharacterId, Arc<Mutex<()>>>>,
}

impl CharacterLocks {
    /// Runs `f` while holding the character's lock.
    pub(crate) fn with<T, F>(&self, character: CharacterId, f: F) -> Result<T>
    where
        F: FnOnce() -> Result<T>,
    {
        let lock = self.handle(character)?;
        let result = {
            let _guard = lock.lock().map_err(|_| RuntimeError::LockPoisoned)?;
            f()
        };
        self.release(character, lock)?;
        result
    }

    fn handle(&self, character: CharacterId) -> Result<Arc<Mutex<()>>> {
        let mut locks = self.locks.lock().map_err(|_| RuntimeError::LockPoisoned)?;
        Ok(Arc::clone(locks.entry(character).or_default()))
    }

    /// Drops the table entry when `lock` was its last outside handle.
    /// New handles are only cloned under the table lock, so the count
    /// cannot grow while it is checked.
    fn release(&self, character: CharacterId, lock: Arc<Mutex<()>>) -> Result<()> {
        let mut locks = self.locks.lock().map_err(|_| RuntimeError::LockPoisoned)?;
        drop(lock);
        if locks
            .get(&character)
            .is_some_and(|entry| Arc::strong_count(entry) == 1)
        {
            locks.remove(&character);
        }
        Ok(())
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.locks.lock().map(|locks| locks.len()).unwrap_or_default()
    }
}
