//! Active disease state.

use strum::{Display, EnumString};

use super::{CharacterId, DiseaseId, Timestamp};

/// Lowest severity an active disease can have.
pub const SEVERITY_MIN: u8 = 1;
/// Highest severity; further progression costs health instead.
pub const SEVERITY_MAX: u8 = 10;

/// Medicine category that cures a disease.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TreatmentKind {
    Cold,
    Digestive,
    Antiseptic,
    Fever,
    General,
}

/// A disease currently afflicting a character.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Disease {
    pub id: DiseaseId,
    pub character: CharacterId,
    pub name: String,
    pub description: String,
    /// Always within `[SEVERITY_MIN, SEVERITY_MAX]` while the disease is active.
    pub severity: u8,
    pub contracted_at: Timestamp,
    pub treatment: Option<TreatmentKind>,
    /// Hours accumulated towards the next daily progression step.
    pub progress_hours: f64,
    /// Progression steps taken while already at `SEVERITY_MAX`.
    pub days_at_max: u32,
    /// Set once the disease has stayed at max severity past the fatal limit.
    pub terminal: bool,
}

impl Disease {
    pub fn new(
        id: DiseaseId,
        character: CharacterId,
        name: impl Into<String>,
        description: impl Into<String>,
        treatment: Option<TreatmentKind>,
        contracted_at: Timestamp,
    ) -> Self {
        Self {
            id,
            character,
            name: name.into(),
            description: description.into(),
            severity: SEVERITY_MIN,
            contracted_at,
            treatment,
            progress_hours: 0.0,
            days_at_max: 0,
            terminal: false,
        }
    }

    pub fn is_treated_by(&self, kind: TreatmentKind) -> bool {
        self.treatment == Some(kind)
    }
}
