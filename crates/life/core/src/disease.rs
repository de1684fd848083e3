//! Disease contraction, progression and treatment.
//!
//! Lifecycle: `none → active(severity) → cured | resolved | escalated → terminal`.
//! Progression is evaluated in whole days of accumulated game time. Each
//! day is judged against the character's stats at the moment it completes,
//! so the outcome only depends on how much time passed, not on how often it
//! was observed.

use crate::config::DiseaseRules;
use crate::env::{DiseaseTemplate, LifeEnv, compute_seed, roll};
use crate::state::{Disease, LifeRecord, LifeStats, SEVERITY_MAX, SEVERITY_MIN};

pub(crate) const HOURS_PER_DAY: f64 = 24.0;
/// Absorbs rounding when an interval ends exactly on a day boundary.
pub(crate) const DAY_EPSILON: f64 = 1e-9;

/// Result of advancing one disease through elapsed time.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DiseaseProgress {
    /// Severity after progression, if it rose.
    pub worsened_to: Option<u8>,
    /// Severity after progression, if it fell without resolving.
    pub improved_to: Option<u8>,
    pub resolved: bool,
    /// Health to subtract for days spent past max severity.
    pub health_penalty: f64,
    /// True only on the call that first flagged the disease terminal.
    pub became_terminal: bool,
}

/// Result of applying medicine to a disease.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TreatmentResult {
    Cured,
    Reduced { severity: u8 },
}

pub struct DiseaseModel<'a> {
    rules: &'a DiseaseRules,
}

impl<'a> DiseaseModel<'a> {
    pub fn new(rules: &'a DiseaseRules) -> Self {
        Self { rules }
    }

    /// Chance of contracting a disease during one decay application.
    ///
    /// Rises with both `100 - hygiene` and missing health; zero for a clean,
    /// fully healthy character.
    pub fn contraction_chance(&self, stats: &LifeStats) -> f64 {
        let hygiene_risk = ((100.0 - stats.hygiene) / 100.0).clamp(0.0, 1.0);
        let health_risk = 1.0 - stats.health_ratio();
        let score = self.rules.hygiene_weight * hygiene_risk + self.rules.health_weight * health_risk;
        (score * self.rules.chance_scale).clamp(0.0, self.rules.max_chance)
    }

    /// Rolls for a new disease. Never returns one that is already active.
    pub fn maybe_contract(
        &self,
        record: &LifeRecord,
        env: &LifeEnv<'_>,
        base_seed: u64,
        nonce: u64,
    ) -> Option<DiseaseTemplate> {
        let chance = self.contraction_chance(&record.stats);
        if chance <= 0.0 {
            return None;
        }

        let character = record.character().0;
        let roll = env
            .rng
            .roll_unit(compute_seed(base_seed, nonce, character, roll::CONTRACTION));
        if roll >= chance {
            return None;
        }

        let mut candidates: Vec<DiseaseTemplate> = env
            .diseases
            .templates()
            .into_iter()
            .filter(|t| !record.has_disease_named(&t.name))
            .collect();
        if candidates.is_empty() {
            return None;
        }
        let index = env.rng.pick(
            compute_seed(base_seed, nonce, character, roll::DISEASE_PICK),
            candidates.len(),
        );
        Some(candidates.swap_remove(index))
    }

    /// Advances `disease` by `hours`, judged against `stats` for every day
    /// boundary crossed.
    ///
    /// Callers that need per-day judgement pass at most one day at a time;
    /// [`crate::DecayEngine`] splits intervals at day boundaries for that.
    /// Any number of days costs constant work.
    pub fn progress(&self, disease: &mut Disease, hours: f64, stats: &LifeStats) -> DiseaseProgress {
        let mut outcome = DiseaseProgress::default();
        disease.progress_hours += hours.max(0.0);

        let days = ((disease.progress_hours + DAY_EPSILON) / HOURS_PER_DAY).floor();
        if days < 1.0 {
            return outcome;
        }
        disease.progress_hours = (disease.progress_hours - days * HOURS_PER_DAY).max(0.0);

        if self.fighting_off(stats) {
            self.recover(disease, days, &mut outcome);
        } else {
            self.worsen(disease, days, &mut outcome);
        }
        outcome
    }

    /// One severity step down per day; resolves on the day after reaching the minimum.
    fn recover(&self, disease: &mut Disease, days: f64, outcome: &mut DiseaseProgress) {
        let mut remaining = days;
        while remaining >= 1.0 {
            remaining -= 1.0;
            if disease.severity <= SEVERITY_MIN {
                outcome.resolved = true;
                return;
            }
            disease.severity -= 1;
            disease.days_at_max = 0;
            outcome.improved_to = Some(disease.severity);
        }
    }

    /// Climbs toward max severity, then charges the escalation penalty per day at max.
    fn worsen(&self, disease: &mut Disease, days: f64, outcome: &mut DiseaseProgress) {
        let mut days = days;
        let step = self.rules.severity_per_day;
        if disease.severity < SEVERITY_MAX && step > 0 {
            let gap = SEVERITY_MAX - disease.severity;
            let climb = days.min(f64::from(gap.div_ceil(step)));
            let rise = (climb as u32 * u32::from(step)).min(u32::from(gap)) as u8;
            disease.severity += rise;
            outcome.worsened_to = Some(disease.severity);
            days -= climb;
        }
        if disease.severity < SEVERITY_MAX || days < 1.0 {
            return;
        }

        outcome.health_penalty += days * self.rules.escalation_health_penalty;
        disease.days_at_max = disease.days_at_max.saturating_add(days.min(u32::MAX as f64) as u32);
        if !disease.terminal && disease.days_at_max > self.rules.fatal_after_days {
            disease.terminal = true;
            outcome.became_terminal = true;
        }
    }

    /// Cures when `power >= severity`, otherwise lowers severity by `power` (never below 1).
    pub fn treat(disease: &mut Disease, power: u8) -> TreatmentResult {
        if power >= disease.severity {
            return TreatmentResult::Cured;
        }
        disease.severity = disease.severity.saturating_sub(power).max(SEVERITY_MIN);
        TreatmentResult::Reduced {
            severity: disease.severity,
        }
    }

    /// Clean and healthy enough that active diseases ease instead of worsening.
    pub fn fighting_off(&self, stats: &LifeStats) -> bool {
        stats.hygiene >= self.rules.recovery_hygiene
            && stats.health_ratio() >= self.rules.recovery_health_ratio
    }
}
