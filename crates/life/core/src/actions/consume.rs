use super::{ActionEffect, apply_side_effects};
use crate::env::ItemDefinition;
use crate::error::ActionError;
use crate::state::{LifeStats, Need};

/// Lowers hunger by the item's nutrition value.
pub fn eat(stats: &mut LifeStats, item: &ItemDefinition) -> Result<ActionEffect, ActionError> {
    let nutrition = item.effects.nutrition_value;
    if nutrition <= 0.0 {
        return Err(ActionError::NotEdible(item.id));
    }
    stats.adjust(Need::Hunger, -nutrition);
    apply_side_effects(stats, item);
    Ok(ActionEffect::message(format!("You ate the {}.", item.name)))
}

/// Lowers thirst by the item's hydration value.
pub fn drink(stats: &mut LifeStats, item: &ItemDefinition) -> Result<ActionEffect, ActionError> {
    let hydration = item.effects.hydration_value;
    if hydration <= 0.0 {
        return Err(ActionError::NotDrinkable(item.id));
    }
    stats.adjust(Need::Thirst, -hydration);
    apply_side_effects(stats, item);
    Ok(ActionEffect::message(format!("You drank the {}.", item.name)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Baseline;
    use crate::env::ItemEffects;
    use crate::state::{CharacterId, ItemId, Timestamp};

    fn stats() -> LifeStats {
        LifeStats::baseline(CharacterId(1), 100, &Baseline::default(), Timestamp::EPOCH)
    }

    #[test]
    fn eating_lowers_hunger_by_nutrition() {
        let mut s = stats();
        s.hunger = 40.0;
        let bread = ItemDefinition::new(ItemId(1), "bread", ItemEffects::food(30.0));
        eat(&mut s, &bread).expect("bread is edible");
        assert_eq!(s.hunger, 10.0);
    }

    #[test]
    fn eating_clamps_at_zero_and_applies_bonus() {
        let mut s = stats();
        s.hunger = 10.0;
        s.happiness = 98.0;
        let cake = ItemDefinition::new(
            ItemId(2),
            "cake",
            ItemEffects::food(50.0).with_happiness(5.0),
        );
        eat(&mut s, &cake).expect("cake is edible");
        assert_eq!(s.hunger, 0.0);
        assert_eq!(s.happiness, 100.0);
    }

    #[test]
    fn water_is_not_food() {
        let mut s = stats();
        let water = ItemDefinition::new(ItemId(3), "water", ItemEffects::drink(25.0));
        assert_eq!(eat(&mut s, &water), Err(ActionError::NotEdible(ItemId(3))));
        let thirst = s.thirst;
        drink(&mut s, &water).expect("water is drinkable");
        assert_eq!(s.thirst, (thirst - 25.0).max(0.0));
    }
}
