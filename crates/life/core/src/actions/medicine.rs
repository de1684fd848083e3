use super::{ActionEffect, apply_side_effects};
use crate::disease::{DiseaseModel, TreatmentResult};
use crate::env::ItemDefinition;
use crate::error::ActionError;
use crate::events::LifeEvent;
use crate::state::LifeRecord;

/// Treats the earliest contracted disease matching the medicine's treatment type.
///
/// Only one disease is treated per dose even if several match.
pub fn use_medicine(record: &mut LifeRecord, item: &ItemDefinition) -> Result<ActionEffect, ActionError> {
    let kind = match item.effects.treatment_type {
        Some(kind) if item.effects.treatment_power > 0 => kind,
        _ => return Err(ActionError::NotMedicine(item.id)),
    };
    let index = record
        .first_treatable(kind)
        .ok_or(ActionError::NoMatchingCondition(item.id))?;

    let disease = &mut record.diseases[index];
    let (id, name) = (disease.id, disease.name.clone());
    let effect = match DiseaseModel::treat(disease, item.effects.treatment_power) {
        TreatmentResult::Cured => {
            record.diseases.remove(index);
            ActionEffect {
                message: format!("The {} cured your {}.", item.name, name),
                events: vec![LifeEvent::DiseaseCured { id, name }],
            }
        }
        TreatmentResult::Reduced { severity } => ActionEffect {
            message: format!("The {} eased your {}, but it lingers.", item.name, name),
            events: vec![LifeEvent::DiseaseTreated { id, name, severity }],
        },
    };

    apply_side_effects(&mut record.stats, item);
    Ok(effect)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Baseline;
    use crate::env::ItemEffects;
    use crate::state::{CharacterId, Disease, ItemId, Timestamp, TreatmentKind};

    fn record_with(diseases: &[(&str, TreatmentKind, u8, i64)]) -> LifeRecord {
        let mut record =
            LifeRecord::baseline(CharacterId(1), 100, &Baseline::default(), Timestamp::EPOCH);
        for (name, kind, severity, at) in diseases {
            let id = record.allocate_disease_id();
            let mut d = Disease::new(id, CharacterId(1), *name, "", Some(*kind), Timestamp(*at));
            d.severity = *severity;
            record.diseases.push(d);
        }
        record
    }

    fn syrup(power: u8) -> ItemDefinition {
        ItemDefinition::new(ItemId(20), "cough syrup", ItemEffects::medicine(TreatmentKind::Cold, power))
    }

    #[test]
    fn cures_when_power_covers_severity() {
        let mut record = record_with(&[("Common Cold", TreatmentKind::Cold, 3, 0)]);
        let effect = use_medicine(&mut record, &syrup(3)).expect("cold is treatable");
        assert!(record.diseases.is_empty());
        assert!(matches!(effect.events[0], LifeEvent::DiseaseCured { .. }));
    }

    #[test]
    fn weak_dose_only_reduces() {
        let mut record = record_with(&[("Common Cold", TreatmentKind::Cold, 6, 0)]);
        use_medicine(&mut record, &syrup(2)).expect("cold is treatable");
        assert_eq!(record.diseases.len(), 1);
        assert_eq!(record.diseases[0].severity, 4);
    }

    #[test]
    fn no_matching_condition() {
        let mut record = record_with(&[("Stomach Bug", TreatmentKind::Digestive, 2, 0)]);
        assert_eq!(
            use_medicine(&mut record, &syrup(5)),
            Err(ActionError::NoMatchingCondition(ItemId(20)))
        );
        assert_eq!(record.diseases.len(), 1);
    }

    #[test]
    fn treats_only_the_earliest_match() {
        let mut record = record_with(&[
            ("Head Cold", TreatmentKind::Cold, 2, 500),
            ("Common Cold", TreatmentKind::Cold, 2, 100),
        ]);
        use_medicine(&mut record, &syrup(5)).expect("treatable");
        assert_eq!(record.diseases.len(), 1);
        assert_eq!(record.diseases[0].name, "Head Cold");
    }

    #[test]
    fn food_is_not_medicine() {
        let mut record = record_with(&[("Common Cold", TreatmentKind::Cold, 2, 0)]);
        let bread = ItemDefinition::new(ItemId(1), "bread", ItemEffects::food(10.0));
        assert_eq!(
            use_medicine(&mut record, &bread),
            Err(ActionError::NotMedicine(ItemId(1)))
        );
    }
}
