//! Values returned by the service to the page/UI layer.

use serde::Serialize;

use life_core::{
    ActionEffect, ActionError, CharacterId, Disease, ErrorKind, LifeEvent, LifeRecord, LifeStats,
    StatusReport,
};

/// Stats, their classification and active diseases after a call.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LifeSnapshot {
    pub character: CharacterId,
    pub stats: LifeStats,
    pub status: StatusReport,
    pub diseases: Vec<Disease>,
    /// What changed during this call, decay included.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<LifeEvent>,
}

impl LifeSnapshot {
    pub fn new(record: &LifeRecord, events: Vec<LifeEvent>) -> Self {
        Self {
            character: record.character(),
            stats: record.stats.clone(),
            status: StatusReport::of(&record.stats),
            diseases: record.diseases.clone(),
            events,
        }
    }
}

/// Result of a player action.
///
/// `message` is always player-facing. `error_kind` classifies failures for
/// logging and is never serialized.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ActionOutcome {
    pub success: bool,
    pub message: String,
    #[serde(skip)]
    pub error_kind: Option<ErrorKind>,
    pub snapshot: LifeSnapshot,
}

impl ActionOutcome {
    pub fn succeeded(effect: ActionEffect, record: &LifeRecord, mut events: Vec<LifeEvent>) -> Self {
        events.extend(effect.events);
        Self {
            success: true,
            message: effect.message,
            error_kind: None,
            snapshot: LifeSnapshot::new(record, events),
        }
    }

    pub fn failed(error: &ActionError, record: &LifeRecord, events: Vec<LifeEvent>) -> Self {
        Self {
            success: false,
            message: error.to_string(),
            error_kind: Some(error.kind()),
            snapshot: LifeSnapshot::new(record, events),
        }
    }

    pub fn stats(&self) -> &LifeStats {
        &self.snapshot.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use life_core::{Baseline, ItemId, StatusLevel, Timestamp};

    #[test]
    fn failure_message_hides_the_kind() {
        let record =
            LifeRecord::baseline(CharacterId(1), 100, &Baseline::default(), Timestamp::EPOCH);
        let outcome =
            ActionOutcome::failed(&ActionError::InsufficientQuantity(ItemId(1)), &record, Vec::new());
        assert!(!outcome.success);
        assert_eq!(outcome.error_kind, Some(ErrorKind::InsufficientResource));
        assert!(!outcome.message.contains("Insufficient"));
        assert_eq!(outcome.snapshot.status.health.level, StatusLevel::Excellent);
    }
}
