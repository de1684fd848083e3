//! Tunable parameters of the needs & health rules.
//!
//! Every number the engine uses lives here so content files can retune the
//! simulation without code changes. Missing fields fall back to the defaults.

/// Root configuration.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LifeConfig {
    pub decay: DecayRates,
    pub health: HealthRules,
    pub disease: DiseaseRules,
    pub sleep: SleepRules,
    pub baseline: Baseline,
}

/// Per-hour drift of each need towards its worst value.
///
/// All rates are magnitudes: hunger/thirst/fatigue rise by their rate,
/// hygiene/happiness fall by theirs.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DecayRates {
    pub hunger_per_hour: f64,
    pub thirst_per_hour: f64,
    pub fatigue_per_hour: f64,
    pub hygiene_per_hour: f64,
    pub happiness_per_hour: f64,
    /// Intervals shorter than this are ignored (rapid reloads).
    pub min_elapsed_hours: f64,
}

impl Default for DecayRates {
    fn default() -> Self {
        Self {
            hunger_per_hour: 5.0,
            thirst_per_hour: 4.0,
            fatigue_per_hour: 3.0,
            hygiene_per_hour: 2.0,
            happiness_per_hour: 1.0,
            min_elapsed_hours: 0.25,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HealthRules {
    /// Health lost per hour while hunger sits in its worst tier.
    pub starvation_per_hour: f64,
    /// Health lost per hour while thirst sits in its worst tier.
    pub dehydration_per_hour: f64,
    /// Health gained per hour while every need is in its best tier and no disease is active.
    pub regeneration_per_hour: f64,
    /// Decay and disease never push health below this value.
    pub decay_floor: f64,
}

impl Default for HealthRules {
    fn default() -> Self {
        Self {
            starvation_per_hour: 2.0,
            dehydration_per_hour: 2.0,
            regeneration_per_hour: 1.0,
            decay_floor: 1.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DiseaseRules {
    /// Multiplier applied to the weighted risk score.
    pub chance_scale: f64,
    /// Weight of `(100 - hygiene) / 100` in the risk score.
    pub hygiene_weight: f64,
    /// Weight of `1 - health / max_health` in the risk score.
    pub health_weight: f64,
    /// Upper bound on the contraction chance per decay application.
    pub max_chance: f64,
    /// Severity gained per neglected day.
    pub severity_per_day: u8,
    /// Health lost per day a disease would progress past max severity.
    pub escalation_health_penalty: f64,
    /// Days at max severity after which the disease turns terminal.
    pub fatal_after_days: u32,
    /// Hygiene at or above which the body fights a disease off.
    pub recovery_hygiene: f64,
    /// Health ratio at or above which the body fights a disease off.
    pub recovery_health_ratio: f64,
}

impl Default for DiseaseRules {
    fn default() -> Self {
        Self {
            chance_scale: 0.3,
            hygiene_weight: 0.6,
            health_weight: 0.4,
            max_chance: 0.5,
            severity_per_day: 1,
            escalation_health_penalty: 5.0,
            fatal_after_days: 3,
            recovery_hygiene: 60.0,
            recovery_health_ratio: 0.5,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SleepRules {
    pub min_hours: u32,
    pub max_hours: u32,
    pub fatigue_recovery_per_hour: f64,
    /// Hours after which recovery continues at `diminished_factor` of the rate.
    pub full_rate_hours: u32,
    pub diminished_factor: f64,
    pub health_per_hour: f64,
}

impl Default for SleepRules {
    fn default() -> Self {
        Self {
            min_hours: 1,
            max_hours: 12,
            fatigue_recovery_per_hour: 12.5,
            full_rate_hours: 8,
            diminished_factor: 0.5,
            health_per_hour: 2.0,
        }
    }
}

/// Starting values for a freshly initialized character.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Baseline {
    pub hunger: f64,
    pub thirst: f64,
    pub fatigue: f64,
    pub hygiene: f64,
    pub happiness: f64,
}

impl Default for Baseline {
    fn default() -> Self {
        Self {
            hunger: 20.0,
            thirst: 20.0,
            fatigue: 10.0,
            hygiene: 80.0,
            happiness: 70.0,
        }
    }
}
