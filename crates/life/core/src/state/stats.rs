//! Bounded need and health values of a single character.

use strum::{Display, EnumIter, IntoEnumIterator};

use super::{CharacterId, Timestamp};
use crate::config::Baseline;

/// Upper bound shared by every need.
pub const NEED_MAX: f64 = 100.0;

/// Direction in which a stat gets worse.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Polarity {
    /// Hunger, thirst, fatigue: 100 is the worst value.
    HigherIsWorse,
    /// Hygiene, happiness, health: 0 is the worst value.
    HigherIsBetter,
}

/// The five needs that drift over time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Need {
    Hunger,
    Thirst,
    Fatigue,
    Hygiene,
    Happiness,
}

impl Need {
    pub const fn polarity(self) -> Polarity {
        match self {
            Need::Hunger | Need::Thirst | Need::Fatigue => Polarity::HigherIsWorse,
            Need::Hygiene | Need::Happiness => Polarity::HigherIsBetter,
        }
    }

    pub fn all() -> impl Iterator<Item = Need> {
        Need::iter()
    }
}

/// Needs and health of one character.
///
/// `max_health` belongs to the character and is refreshed from the roster on
/// every evaluation; it is carried here so clamping stays a pure operation.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LifeStats {
    pub character: CharacterId,
    pub hunger: f64,
    pub thirst: f64,
    pub fatigue: f64,
    pub hygiene: f64,
    pub happiness: f64,
    pub health: f64,
    pub max_health: u32,
    pub last_update: Timestamp,
}

impl LifeStats {
    /// Fresh stats at the configured baseline, full health.
    pub fn baseline(
        character: CharacterId,
        max_health: u32,
        baseline: &Baseline,
        now: Timestamp,
    ) -> Self {
        let mut stats = Self {
            character,
            hunger: baseline.hunger,
            thirst: baseline.thirst,
            fatigue: baseline.fatigue,
            hygiene: baseline.hygiene,
            happiness: baseline.happiness,
            health: max_health as f64,
            max_health,
            last_update: now,
        };
        stats.clamp();
        stats
    }

    pub fn need(&self, need: Need) -> f64 {
        match need {
            Need::Hunger => self.hunger,
            Need::Thirst => self.thirst,
            Need::Fatigue => self.fatigue,
            Need::Hygiene => self.hygiene,
            Need::Happiness => self.happiness,
        }
    }

    pub fn need_mut(&mut self, need: Need) -> &mut f64 {
        match need {
            Need::Hunger => &mut self.hunger,
            Need::Thirst => &mut self.thirst,
            Need::Fatigue => &mut self.fatigue,
            Need::Hygiene => &mut self.hygiene,
            Need::Happiness => &mut self.happiness,
        }
    }

    /// Adds `delta` to a need and clamps it into `[0, 100]`.
    pub fn adjust(&mut self, need: Need, delta: f64) {
        let value = self.need_mut(need);
        *value = clamp_need(*value + delta);
    }

    /// Adds `delta` to health and clamps it into `[0, max_health]`.
    pub fn adjust_health(&mut self, delta: f64) {
        self.health = (self.health + delta).clamp(0.0, self.max_health as f64);
    }

    /// Health as a fraction of the maximum. A zero maximum reads as empty.
    pub fn health_ratio(&self) -> f64 {
        if self.max_health == 0 {
            0.0
        } else {
            (self.health / self.max_health as f64).clamp(0.0, 1.0)
        }
    }

    /// Restores every bound after a mutation.
    pub fn clamp(&mut self) {
        for need in Need::iter() {
            let value = self.need_mut(need);
            *value = clamp_need(*value);
        }
        self.health = self.health.clamp(0.0, self.max_health as f64);
    }
}

fn clamp_need(value: f64) -> f64 {
    value.clamp(0.0, NEED_MAX)
}
