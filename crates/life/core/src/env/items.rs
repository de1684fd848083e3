use crate::state::{ItemId, TreatmentKind};

pub trait ItemOracle: Send + Sync {
    fn definition(&self, id: ItemId) -> Option<ItemDefinition>;

    /// Returns all item definitions available in this oracle.
    fn all_definitions(&self) -> Vec<ItemDefinition>;
}

/// Catalog entry for an item the engine can consume.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemDefinition {
    pub id: ItemId,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub effects: ItemEffects,
}

impl ItemDefinition {
    pub fn new(id: ItemId, name: impl Into<String>, effects: ItemEffects) -> Self {
        Self {
            id,
            name: name.into(),
            effects,
        }
    }
}

/// Consumable effects read by the action processors. Zero means "no effect".
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ItemEffects {
    pub nutrition_value: f64,
    pub hydration_value: f64,
    pub hygiene_value: f64,
    pub treatment_type: Option<TreatmentKind>,
    pub treatment_power: u8,
    pub health_restore: f64,
    pub happiness_bonus: f64,
}

impl ItemEffects {
    pub fn food(nutrition_value: f64) -> Self {
        Self {
            nutrition_value,
            ..Self::default()
        }
    }

    pub fn drink(hydration_value: f64) -> Self {
        Self {
            hydration_value,
            ..Self::default()
        }
    }

    pub fn soap(hygiene_value: f64) -> Self {
        Self {
            hygiene_value,
            ..Self::default()
        }
    }

    pub fn medicine(treatment_type: TreatmentKind, treatment_power: u8) -> Self {
        Self {
            treatment_type: Some(treatment_type),
            treatment_power,
            ..Self::default()
        }
    }

    pub fn with_happiness(mut self, bonus: f64) -> Self {
        self.happiness_bonus = bonus;
        self
    }

    pub fn with_health(mut self, restore: f64) -> Self {
        self.health_restore = restore;
        self
    }
}
