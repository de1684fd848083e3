//! Game time sources.
//!
//! Decay is pull-based: the service reads [`GameClock::now`] when a record is
//! touched and decays the gap since `last_update`. Only sleep moves the clock
//! explicitly.

use std::sync::atomic::{AtomicI64, Ordering};

use life_core::{Elapsed, Timestamp};

pub trait GameClock: Send + Sync {
    fn now(&self) -> Timestamp;

    /// Moves game time forward by `hours`.
    fn advance(&self, hours: u32);
}

/// Wall-clock time plus whatever has been slept away.
#[derive(Debug, Default)]
pub struct SystemClock {
    offset_secs: AtomicI64,
}

impl SystemClock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl GameClock for SystemClock {
    fn now(&self) -> Timestamp {
        let wall = chrono::Utc::now().timestamp();
        Timestamp(wall.saturating_add(self.offset_secs.load(Ordering::Acquire)))
    }

    fn advance(&self, hours: u32) {
        self.offset_secs
            .fetch_add(Elapsed::from_hours(hours).secs(), Ordering::AcqRel);
    }
}

/// Clock that only moves when told to. Used by tests and the CLI.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: AtomicI64,
}

impl ManualClock {
    pub fn new(start: Timestamp) -> Self {
        Self {
            now: AtomicI64::new(start.0),
        }
    }

    pub fn set(&self, at: Timestamp) {
        self.now.store(at.0, Ordering::Release);
    }

    pub fn advance_secs(&self, secs: i64) {
        self.now.fetch_add(secs, Ordering::AcqRel);
    }

    pub fn advance_minutes(&self, minutes: i64) {
        self.advance_secs(minutes * 60);
    }
}

impl GameClock for ManualClock {
    fn now(&self) -> Timestamp {
        Timestamp(self.now.load(Ordering::Acquire))
    }

    fn advance(&self, hours: u32) {
        self.advance_secs(Elapsed::from_hours(hours).secs());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_advances_in_hours() {
        let clock = ManualClock::new(Timestamp::EPOCH);
        clock.advance(8);
        assert_eq!(clock.now(), Timestamp(8 * 3_600));
        clock.advance_minutes(10);
        assert_eq!(clock.now(), Timestamp(8 * 3_600 + 600));
    }

    #[test]
    fn system_clock_offset_is_added() {
        let clock = SystemClock::new();
        let before = clock.now();
        clock.advance(2);
        assert!(clock.now().since(before).secs() >= 2 * 3_600);
    }
}
