//! Hygiene actions: fixed routines and hygiene items.

use std::str::FromStr;

use strum::{Display, EnumIter, EnumString};

use super::{ActionEffect, apply_side_effects};
use crate::env::ItemDefinition;
use crate::error::ActionError;
use crate::state::{ItemId, LifeStats, Need};

/// Routine that needs no item. Parsed from snake_case names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum HygieneRoutine {
    QuickWash,
    BasicWash,
    Bath,
    LuxuryBath,
    Grooming,
}

impl HygieneRoutine {
    pub const fn hygiene_delta(self) -> f64 {
        match self {
            Self::QuickWash => 15.0,
            Self::BasicWash => 20.0,
            Self::Bath => 40.0,
            Self::LuxuryBath => 80.0,
            Self::Grooming => 30.0,
        }
    }

    pub const fn happiness_delta(self) -> f64 {
        match self {
            Self::LuxuryBath => 5.0,
            _ => 0.0,
        }
    }

    const fn description(self) -> &'static str {
        match self {
            Self::QuickWash => "You give yourself a quick wash.",
            Self::BasicWash => "You wash up.",
            Self::Bath => "You take a long bath.",
            Self::LuxuryBath => "You soak in a luxurious bath and feel wonderful.",
            Self::Grooming => "You groom yourself carefully.",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum HygieneAction {
    Routine(HygieneRoutine),
    /// Consumes one hygiene item for its `hygiene_value`.
    UseItem(ItemId),
}

impl HygieneAction {
    pub const USE_ITEM: &'static str = "use_item";

    /// Validates a player-supplied action name. `use_item` requires `item`.
    pub fn parse(kind: &str, item: Option<ItemId>) -> Result<Self, ActionError> {
        let kind = kind.trim();
        if kind == Self::USE_ITEM {
            return item
                .map(Self::UseItem)
                .ok_or_else(|| ActionError::UnknownHygieneAction(kind.to_string()));
        }
        HygieneRoutine::from_str(kind)
            .map(Self::Routine)
            .map_err(|_| ActionError::UnknownHygieneAction(kind.to_string()))
    }

    pub fn item(&self) -> Option<ItemId> {
        match self {
            Self::UseItem(item) => Some(*item),
            Self::Routine(_) => None,
        }
    }
}

/// Applies a routine. Always succeeds.
pub fn apply_routine(stats: &mut LifeStats, routine: HygieneRoutine) -> ActionEffect {
    stats.adjust(Need::Hygiene, routine.hygiene_delta());
    stats.adjust(Need::Happiness, routine.happiness_delta());
    ActionEffect::message(routine.description())
}

/// Applies a hygiene item. The caller handles inventory.
pub fn apply_item(stats: &mut LifeStats, item: &ItemDefinition) -> Result<ActionEffect, ActionError> {
    let boost = item.effects.hygiene_value;
    if boost <= 0.0 {
        return Err(ActionError::NotHygieneItem(item.id));
    }
    stats.adjust(Need::Hygiene, boost);
    apply_side_effects(stats, item);
    Ok(ActionEffect::message(format!("You freshen up with the {}.", item.name)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Baseline;
    use crate::env::ItemEffects;
    use crate::state::{CharacterId, Timestamp};
    use strum::IntoEnumIterator;

    fn stats(hygiene: f64) -> LifeStats {
        let mut s = LifeStats::baseline(CharacterId(1), 100, &Baseline::default(), Timestamp::EPOCH);
        s.hygiene = hygiene;
        s
    }

    #[test]
    fn parses_known_routines() {
        assert_eq!(
            HygieneAction::parse("luxury_bath", None),
            Ok(HygieneAction::Routine(HygieneRoutine::LuxuryBath))
        );
        assert_eq!(
            HygieneAction::parse("use_item", Some(ItemId(4))),
            Ok(HygieneAction::UseItem(ItemId(4)))
        );
        for routine in HygieneRoutine::iter() {
            let parsed = HygieneAction::parse(&routine.to_string(), None);
            assert_eq!(parsed, Ok(HygieneAction::Routine(routine)));
        }
    }

    #[test]
    fn rejects_unknown_names_and_item_less_use() {
        assert!(matches!(
            HygieneAction::parse("mud_bath", None),
            Err(ActionError::UnknownHygieneAction(_))
        ));
        assert!(HygieneAction::parse("use_item", None).is_err());
    }

    #[test]
    fn luxury_bath_clamps_and_cheers() {
        let mut s = stats(50.0);
        let happiness = s.happiness;
        apply_routine(&mut s, HygieneRoutine::LuxuryBath);
        assert_eq!(s.hygiene, 100.0);
        assert_eq!(s.happiness, happiness + 5.0);
    }

    #[test]
    fn quick_wash_adds_fixed_delta() {
        let mut s = stats(10.0);
        apply_routine(&mut s, HygieneRoutine::QuickWash);
        assert_eq!(s.hygiene, 25.0);
    }

    #[test]
    fn soap_uses_item_value() {
        let mut s = stats(10.0);
        let soap = ItemDefinition::new(ItemId(9), "soap", ItemEffects::soap(35.0));
        apply_item(&mut s, &soap).expect("soap cleans");
        assert_eq!(s.hygiene, 45.0);

        let bread = ItemDefinition::new(ItemId(1), "bread", ItemEffects::food(10.0));
        assert_eq!(apply_item(&mut s, &bread), Err(ActionError::NotHygieneItem(ItemId(1))));
    }
}
