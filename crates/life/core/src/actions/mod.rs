//! Player-triggered effects on a life record.
//!
//! Processors are pure: they validate the request, mutate the record and
//! describe what happened. Inventory bookkeeping and persistence belong to
//! the caller, which must commit both together or neither.
mod consume;
mod hygiene;
mod medicine;
mod sleep;

pub use consume::{drink, eat};
pub use hygiene::{HygieneAction, HygieneRoutine, apply_item as apply_hygiene_item, apply_routine};
pub use medicine::use_medicine;
pub use sleep::{fatigue_recovery, sleep, validate_hours as validate_sleep_hours};

use crate::env::ItemDefinition;
use crate::events::LifeEvent;
use crate::state::{LifeStats, Need};

/// Outcome of a successful action.
#[derive(Clone, Debug, PartialEq)]
pub struct ActionEffect {
    pub message: String,
    pub events: Vec<LifeEvent>,
}

impl ActionEffect {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            events: Vec::new(),
        }
    }
}

/// Health and happiness bonuses shared by every consumable.
fn apply_side_effects(stats: &mut LifeStats, item: &ItemDefinition) {
    if item.effects.health_restore > 0.0 {
        stats.adjust_health(item.effects.health_restore);
    }
    if item.effects.happiness_bonus != 0.0 {
        stats.adjust(Need::Happiness, item.effects.happiness_bonus);
    }
}
