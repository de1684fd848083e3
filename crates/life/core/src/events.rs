//! Notable transitions reported alongside a snapshot.

use crate::state::DiseaseId;

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum LifeEvent {
    DiseaseContracted { id: DiseaseId, name: String },
    DiseaseWorsened { id: DiseaseId, name: String, severity: u8 },
    DiseaseImproved { id: DiseaseId, name: String, severity: u8 },
    DiseaseResolved { id: DiseaseId, name: String },
    /// Progression past max severity cost health.
    DiseaseEscalated { id: DiseaseId, name: String, health_penalty: f64 },
    /// Left at max severity too long. The disease stays active; the caller decides what this means.
    DiseaseTerminal { id: DiseaseId, name: String },
    DiseaseTreated { id: DiseaseId, name: String, severity: u8 },
    DiseaseCured { id: DiseaseId, name: String },
}

impl LifeEvent {
    pub fn disease(&self) -> DiseaseId {
        match self {
            Self::DiseaseContracted { id, .. }
            | Self::DiseaseWorsened { id, .. }
            | Self::DiseaseImproved { id, .. }
            | Self::DiseaseResolved { id, .. }
            | Self::DiseaseEscalated { id, .. }
            | Self::DiseaseTerminal { id, .. }
            | Self::DiseaseTreated { id, .. }
            | Self::DiseaseCured { id, .. } => *id,
        }
    }
}
