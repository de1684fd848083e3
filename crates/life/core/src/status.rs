//! Qualitative status levels derived from numeric stats.
//!
//! Levels are advisory and never stored; they are recomputed from the
//! current value whenever a snapshot is built. Classification is total:
//! every value (including out-of-range ones) lands in exactly one tier.

use crate::state::{LifeStats, Need, Polarity};

/// Ordered from best to worst.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum StatusLevel {
    Excellent,
    Good,
    Fair,
    Poor,
    Critical,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Status {
    pub level: StatusLevel,
    pub description: &'static str,
}

/// One rung of a ladder.
///
/// For [`Polarity::HigherIsWorse`] a value belongs to the first tier whose
/// `bound` is `>=` the value; for [`Polarity::HigherIsBetter`] to the first
/// tier whose `bound` is `<=` the value. The last tier's bound is ignored.
#[derive(Clone, Copy, Debug)]
pub struct Tier {
    pub bound: f64,
    pub level: StatusLevel,
    pub description: &'static str,
}

const fn tier(bound: f64, level: StatusLevel, description: &'static str) -> Tier {
    Tier {
        bound,
        level,
        description,
    }
}

/// Tiers ordered best first.
#[derive(Clone, Copy, Debug)]
pub struct Ladder {
    pub polarity: Polarity,
    pub tiers: &'static [Tier],
}

use StatusLevel::*;

pub const HUNGER: Ladder = Ladder {
    polarity: Polarity::HigherIsWorse,
    tiers: &[
        tier(25.0, Excellent, "Full"),
        tier(50.0, Good, "Peckish"),
        tier(75.0, Poor, "Hungry"),
        tier(100.0, Critical, "Starving"),
    ],
};

pub const THIRST: Ladder = Ladder {
    polarity: Polarity::HigherIsWorse,
    tiers: &[
        tier(25.0, Excellent, "Quenched"),
        tier(50.0, Good, "Slightly thirsty"),
        tier(75.0, Poor, "Thirsty"),
        tier(100.0, Critical, "Dehydrated"),
    ],
};

pub const FATIGUE: Ladder = Ladder {
    polarity: Polarity::HigherIsWorse,
    tiers: &[
        tier(25.0, Excellent, "Well rested"),
        tier(50.0, Good, "Awake"),
        tier(75.0, Poor, "Tired"),
        tier(100.0, Critical, "Exhausted"),
    ],
};

pub const HYGIENE: Ladder = Ladder {
    polarity: Polarity::HigherIsBetter,
    tiers: &[
        tier(80.0, Excellent, "Pristine"),
        tier(60.0, Good, "Clean"),
        tier(40.0, Fair, "Unkempt"),
        tier(20.0, Poor, "Dirty"),
        tier(0.0, Critical, "Filthy"),
    ],
};

pub const HAPPINESS: Ladder = Ladder {
    polarity: Polarity::HigherIsBetter,
    tiers: &[
        tier(80.0, Excellent, "Joyful"),
        tier(60.0, Good, "Content"),
        tier(40.0, Fair, "Indifferent"),
        tier(20.0, Poor, "Unhappy"),
        tier(0.0, Critical, "Miserable"),
    ],
};

/// Applied to `health / max_health * 100`.
pub const HEALTH: Ladder = Ladder {
    polarity: Polarity::HigherIsBetter,
    tiers: &[
        tier(75.0, Excellent, "Healthy"),
        tier(50.0, Fair, "Injured"),
        tier(25.0, Poor, "Wounded"),
        tier(0.0, Critical, "Critical"),
    ],
};

impl Ladder {
    pub const fn for_need(need: Need) -> &'static Ladder {
        match need {
            Need::Hunger => &HUNGER,
            Need::Thirst => &THIRST,
            Need::Fatigue => &FATIGUE,
            Need::Hygiene => &HYGIENE,
            Need::Happiness => &HAPPINESS,
        }
    }

    pub fn classify(&self, value: f64) -> Status {
        let last = self.tiers.len() - 1;
        let index = self.tiers[..last]
            .iter()
            .position(|t| self.within(value, t.bound))
            .unwrap_or(last);
        let tier = &self.tiers[index];
        Status {
            level: tier.level,
            description: tier.description,
        }
    }

    /// Edge of the best tier: values on the good side of it are in the best tier.
    pub fn best_bound(&self) -> f64 {
        self.tiers[0].bound
    }

    /// Edge of the worst tier: values strictly past it are in the worst tier.
    pub fn worst_bound(&self) -> f64 {
        self.tiers[self.tiers.len() - 2].bound
    }

    pub fn is_best(&self, value: f64) -> bool {
        self.within(value, self.best_bound())
    }

    pub fn is_worst(&self, value: f64) -> bool {
        !self.within(value, self.worst_bound())
    }

    fn within(&self, value: f64, bound: f64) -> bool {
        match self.polarity {
            Polarity::HigherIsWorse => value <= bound,
            Polarity::HigherIsBetter => value >= bound,
        }
    }
}

/// Classification of every need plus health.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StatusReport {
    pub hunger: Status,
    pub thirst: Status,
    pub fatigue: Status,
    pub hygiene: Status,
    pub happiness: Status,
    pub health: Status,
}

impl StatusReport {
    pub fn of(stats: &LifeStats) -> Self {
        let need = |n: Need| Ladder::for_need(n).classify(stats.need(n));
        Self {
            hunger: need(Need::Hunger),
            thirst: need(Need::Thirst),
            fatigue: need(Need::Fatigue),
            hygiene: need(Need::Hygiene),
            happiness: need(Need::Happiness),
            health: HEALTH.classify(stats.health_ratio() * 100.0),
        }
    }

    pub fn get(&self, need: Need) -> Status {
        match need {
            Need::Hunger => self.hunger,
            Need::Thirst => self.thirst,
            Need::Fatigue => self.fatigue,
            Need::Hygiene => self.hygiene,
            Need::Happiness => self.happiness,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hunger_ladder_boundaries() {
        assert_eq!(HUNGER.classify(0.0).description, "Full");
        assert_eq!(HUNGER.classify(25.0).description, "Full");
        assert_eq!(HUNGER.classify(25.5).description, "Peckish");
        assert_eq!(HUNGER.classify(75.0).level, StatusLevel::Poor);
        assert_eq!(HUNGER.classify(76.0).level, StatusLevel::Critical);
        assert_eq!(HUNGER.classify(100.0).description, "Starving");
    }

    #[test]
    fn hygiene_ladder_runs_filthy_to_pristine() {
        assert_eq!(HYGIENE.classify(100.0).description, "Pristine");
        assert_eq!(HYGIENE.classify(80.0).description, "Pristine");
        assert_eq!(HYGIENE.classify(79.9).description, "Clean");
        assert_eq!(HYGIENE.classify(20.0).description, "Dirty");
        assert_eq!(HYGIENE.classify(19.9).description, "Filthy");
    }

    #[test]
    fn classification_is_total() {
        for ladder in [HUNGER, THIRST, FATIGUE, HYGIENE, HAPPINESS, HEALTH] {
            for value in [-50.0, 0.0, 50.0, 100.0, 150.0, f64::NAN] {
                let _ = ladder.classify(value);
            }
        }
        assert_eq!(HUNGER.classify(250.0).level, StatusLevel::Critical);
        assert_eq!(HYGIENE.classify(-5.0).level, StatusLevel::Critical);
    }

    #[test]
    fn tier_edges() {
        assert!(HUNGER.is_best(25.0));
        assert!(!HUNGER.is_best(25.1));
        assert!(HUNGER.is_worst(75.1));
        assert!(!HUNGER.is_worst(75.0));
        assert!(HYGIENE.is_best(80.0));
        assert!(HYGIENE.is_worst(19.0));
        assert!(!HYGIENE.is_worst(20.0));
    }

    #[test]
    fn health_uses_ratio() {
        use crate::config::Baseline;
        use crate::state::{CharacterId, Timestamp};

        let mut stats = LifeStats::baseline(CharacterId(1), 200, &Baseline::default(), Timestamp::EPOCH);
        stats.health = 120.0;
        assert_eq!(StatusReport::of(&stats).health.description, "Injured");
        stats.health = 40.0;
        assert_eq!(StatusReport::of(&stats).health.description, "Critical");
    }
}
