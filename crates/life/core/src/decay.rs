//! Time-proportional drift of needs and health.
//!
//! Drift is linear per need, so the moments at which a need leaves its best
//! tier or enters its worst tier can be computed exactly. Health regeneration
//! and starvation damage are applied only for those windows. Intervals are
//! cut at every disease day boundary so each day is judged against the
//! stats of that moment. Together this makes `apply(t1); apply(t2)` equal to
//! `apply(t1 + t2)` (contraction rolls aside).

use crate::config::LifeConfig;
use crate::disease::{DAY_EPSILON, DiseaseModel, HOURS_PER_DAY};
use crate::env::LifeEnv;
use crate::events::LifeEvent;
use crate::state::{Disease, Elapsed, LifeRecord, LifeStats, Need, Polarity};
use crate::status::Ladder;

/// Whether the character is awake during the interval.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecayMode {
    Awake,
    /// Fatigue does not drift while asleep.
    Asleep,
}

/// Inputs for the contraction roll of one application.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecaySeed {
    pub base: u64,
    pub nonce: u64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DecayReport {
    /// False when the interval was below the minimum and nothing changed.
    pub applied: bool,
    pub hours: f64,
    pub events: Vec<LifeEvent>,
}

pub struct DecayEngine<'a> {
    env: LifeEnv<'a>,
}

impl<'a> DecayEngine<'a> {
    pub fn new(env: LifeEnv<'a>) -> Self {
        Self { env }
    }

    fn config(&self) -> &LifeConfig {
        self.env.config
    }

    /// Signed change per hour: positive means the raw value rises.
    pub fn drift_per_hour(&self, need: Need, mode: DecayMode) -> f64 {
        let rates = &self.config().decay;
        let magnitude = match need {
            Need::Hunger => rates.hunger_per_hour,
            Need::Thirst => rates.thirst_per_hour,
            Need::Fatigue if mode == DecayMode::Asleep => 0.0,
            Need::Fatigue => rates.fatigue_per_hour,
            Need::Hygiene => rates.hygiene_per_hour,
            Need::Happiness => rates.happiness_per_hour,
        };
        match need.polarity() {
            Polarity::HigherIsWorse => magnitude,
            Polarity::HigherIsBetter => -magnitude,
        }
    }

    /// Applies `elapsed` of drift, disease progression and contraction to `record`.
    ///
    /// `last_update` advances by exactly `elapsed`. Intervals below the
    /// configured minimum leave the record untouched.
    pub fn apply(
        &self,
        record: &mut LifeRecord,
        elapsed: Elapsed,
        mode: DecayMode,
        seed: DecaySeed,
    ) -> DecayReport {
        let hours = elapsed.hours();
        if hours < self.config().decay.min_elapsed_hours {
            return DecayReport {
                applied: false,
                hours,
                events: Vec::new(),
            };
        }

        let mut events = Vec::new();
        let mut consumed = 0.0;
        while let Some(step) = self.next_day_boundary(record, hours - consumed) {
            self.drift(record, step, mode);
            consumed += step;
            self.progress_diseases(record, step, &mut events);
            if self.worsening_settled(record, mode) {
                break;
            }
        }
        let rest = (hours - consumed).max(0.0);
        self.drift(record, rest, mode);
        self.progress_diseases(record, rest, &mut events);

        self.contract(record, elapsed, seed, &mut events);

        record.stats.last_update = record.stats.last_update + elapsed;
        record.stats.clamp();

        DecayReport {
            applied: true,
            hours,
            events,
        }
    }

    fn drift(&self, record: &mut LifeRecord, hours: f64, mode: DecayMode) {
        if hours <= 0.0 {
            return;
        }
        self.drift_health(record, hours, mode);
        for need in Need::all() {
            let delta = self.drift_per_hour(need, mode) * hours;
            record.stats.adjust(need, delta);
        }
    }

    /// Hours until the next active disease completes a day, if that happens
    /// within `remaining`.
    fn next_day_boundary(&self, record: &LifeRecord, remaining: f64) -> Option<f64> {
        let next = record
            .diseases
            .iter()
            .map(|d| (HOURS_PER_DAY - d.progress_hours).max(0.0))
            .fold(f64::INFINITY, f64::min);
        (next <= remaining + DAY_EPSILON).then(|| next.min(remaining.max(0.0)))
    }

    /// True once no active disease can ease again during this interval.
    ///
    /// Without recovery, diseases never resolve, so regeneration stays off,
    /// health only falls and hygiene only falls. Every later day is then
    /// judged the same way and the remaining days can be progressed at once.
    fn worsening_settled(&self, record: &LifeRecord, mode: DecayMode) -> bool {
        let rules = &self.config().disease;
        let stats = &record.stats;
        !record.diseases.is_empty()
            && !DiseaseModel::new(rules).fighting_off(stats)
            && (stats.health_ratio() < rules.recovery_health_ratio
                || self.drift_per_hour(Need::Hygiene, mode) <= 0.0)
    }

    fn drift_health(&self, record: &mut LifeRecord, hours: f64, mode: DecayMode) {
        let rules = &self.config().health;
        let stats = &record.stats;

        let regen_hours = if record.diseases.is_empty() {
            Need::all()
                .map(|need| self.hours_in_best_tier(stats, need, mode))
                .fold(hours, f64::min)
        } else {
            0.0
        };

        let starving = (hours - self.hours_until_worst_tier(stats, Need::Hunger, mode)).max(0.0);
        let parched = (hours - self.hours_until_worst_tier(stats, Need::Thirst, mode)).max(0.0);
        let damage = starving * rules.starvation_per_hour + parched * rules.dehydration_per_hour;

        let stats = &mut record.stats;
        if regen_hours > 0.0 {
            stats.adjust_health(regen_hours * rules.regeneration_per_hour);
        }
        injure_to_floor(stats, damage, rules.decay_floor);
    }

    /// Hours before `need` leaves its best tier; zero when already outside it.
    fn hours_in_best_tier(&self, stats: &LifeStats, need: Need, mode: DecayMode) -> f64 {
        let ladder = Ladder::for_need(need);
        let value = stats.need(need);
        if !ladder.is_best(value) {
            return 0.0;
        }
        hours_to_cross(value, ladder.best_bound(), self.drift_per_hour(need, mode), need)
    }

    /// Hours before `need` enters its worst tier; zero when already inside it.
    fn hours_until_worst_tier(&self, stats: &LifeStats, need: Need, mode: DecayMode) -> f64 {
        let ladder = Ladder::for_need(need);
        let value = stats.need(need);
        if ladder.is_worst(value) {
            return 0.0;
        }
        hours_to_cross(value, ladder.worst_bound(), self.drift_per_hour(need, mode), need)
    }

    fn progress_diseases(&self, record: &mut LifeRecord, hours: f64, events: &mut Vec<LifeEvent>) {
        let model = DiseaseModel::new(&self.config().disease);
        let floor = self.config().health.decay_floor;
        let mut penalty = 0.0;
        let stats = record.stats.clone();

        record.diseases.retain_mut(|disease: &mut Disease| {
            let progress = model.progress(disease, hours, &stats);
            let (id, name) = (disease.id, disease.name.clone());
            if progress.resolved {
                events.push(LifeEvent::DiseaseResolved { id, name });
                return false;
            }
            if let Some(severity) = progress.worsened_to {
                events.push(LifeEvent::DiseaseWorsened {
                    id,
                    name: name.clone(),
                    severity,
                });
            }
            if let Some(severity) = progress.improved_to {
                events.push(LifeEvent::DiseaseImproved {
                    id,
                    name: name.clone(),
                    severity,
                });
            }
            if progress.health_penalty > 0.0 {
                penalty += progress.health_penalty;
                events.push(LifeEvent::DiseaseEscalated {
                    id,
                    name: name.clone(),
                    health_penalty: progress.health_penalty,
                });
            }
            if progress.became_terminal {
                events.push(LifeEvent::DiseaseTerminal { id, name });
            }
            true
        });

        injure_to_floor(&mut record.stats, penalty, floor);
    }

    fn contract(
        &self,
        record: &mut LifeRecord,
        elapsed: Elapsed,
        seed: DecaySeed,
        events: &mut Vec<LifeEvent>,
    ) {
        let model = DiseaseModel::new(&self.config().disease);
        let Some(template) = model.maybe_contract(record, &self.env, seed.base, seed.nonce) else {
            return;
        };

        let id = record.allocate_disease_id();
        let contracted_at = record.stats.last_update + elapsed;
        events.push(LifeEvent::DiseaseContracted {
            id,
            name: template.name.clone(),
        });
        record.diseases.push(Disease::new(
            id,
            record.character(),
            template.name,
            template.description,
            template.treatment,
            contracted_at,
        ));
    }
}

/// Hours for a value drifting at `per_hour` to move past `bound` in the worsening direction.
fn hours_to_cross(value: f64, bound: f64, per_hour: f64, need: Need) -> f64 {
    let (distance, speed) = match need.polarity() {
        Polarity::HigherIsWorse => (bound - value, per_hour),
        Polarity::HigherIsBetter => (value - bound, -per_hour),
    };
    if speed <= 0.0 {
        f64::INFINITY
    } else {
        (distance / speed).max(0.0)
    }
}

/// Lowers health by `amount` without pushing it below `floor`. Health already
/// at or below the floor is left alone.
fn injure_to_floor(stats: &mut LifeStats, amount: f64, floor: f64) {
    if amount <= 0.0 || stats.health <= floor {
        return;
    }
    stats.health = (stats.health - amount).max(floor);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Baseline;
    use crate::env::{DiseaseOracle, DiseaseTemplate, ItemDefinition, ItemOracle, RngOracle};
    use crate::state::{CharacterId, DiseaseId, ItemId, SEVERITY_MAX, Timestamp, TreatmentKind};

    struct FixedRng(u32);

    impl RngOracle for FixedRng {
        fn next_u32(&self, _seed: u64) -> u32 {
            self.0
        }
    }

    struct NoItems;

    impl ItemOracle for NoItems {
        fn definition(&self, _id: ItemId) -> Option<ItemDefinition> {
            None
        }

        fn all_definitions(&self) -> Vec<ItemDefinition> {
            Vec::new()
        }
    }

    struct Catalog;

    impl DiseaseOracle for Catalog {
        fn templates(&self) -> Vec<DiseaseTemplate> {
            vec![DiseaseTemplate::new(
                "Skin Infection",
                "Red, itchy patches",
                Some(TreatmentKind::Antiseptic),
            )]
        }
    }

    const SEED: DecaySeed = DecaySeed { base: 1, nonce: 0 };
    const NEVER: FixedRng = FixedRng(u32::MAX);
    const ALWAYS: FixedRng = FixedRng(0);

    fn record() -> LifeRecord {
        LifeRecord::baseline(CharacterId(7), 100, &Baseline::default(), Timestamp::EPOCH)
    }

    fn hours(h: f64) -> Elapsed {
        Elapsed::from_secs((h * Elapsed::SECS_PER_HOUR as f64) as i64)
    }

    fn with_engine<R>(rng: &FixedRng, f: impl FnOnce(&DecayEngine<'_>) -> R) -> R {
        let config = LifeConfig::default();
        let env = LifeEnv::new(&config, &NoItems, &Catalog, rng);
        f(&DecayEngine::new(env))
    }

    #[test]
    fn hunger_and_thirst_scenario() {
        let mut rec = record();
        rec.stats.hunger = 90.0;
        rec.stats.thirst = 80.0;
        with_engine(&NEVER, |engine| {
            engine.apply(&mut rec, Elapsed::from_hours(2), DecayMode::Awake, SEED)
        });
        assert_eq!(rec.stats.hunger, 100.0);
        assert_eq!(rec.stats.thirst, 88.0);
        assert_eq!(rec.stats.last_update, Timestamp(7_200));
    }

    #[test]
    fn short_intervals_are_a_no_op() {
        let mut rec = record();
        let before = rec.clone();
        let report = with_engine(&ALWAYS, |engine| {
            engine.apply(&mut rec, Elapsed::from_secs(14 * 60), DecayMode::Awake, SEED)
        });
        assert!(!report.applied);
        assert_eq!(rec, before);
    }

    #[test]
    fn splitting_an_interval_matches_one_application() {
        let mut start = record();
        start.stats.hunger = 10.0;
        start.stats.thirst = 60.0;
        start.stats.hygiene = 95.0;
        start.stats.happiness = 90.0;
        start.stats.health = 100.0;

        let mut whole = start.clone();
        let mut split = start.clone();
        with_engine(&NEVER, |engine| {
            engine.apply(&mut whole, hours(30.0), DecayMode::Awake, SEED);
            engine.apply(&mut split, hours(1.5), DecayMode::Awake, SEED);
            engine.apply(&mut split, hours(28.5), DecayMode::Awake, SEED);
        });

        let (a, b) = (&whole.stats, &split.stats);
        for need in Need::all() {
            assert!((a.need(need) - b.need(need)).abs() < 1e-9, "{need} diverged");
        }
        assert!((a.health - b.health).abs() < 1e-9);
        assert!((a.health - 13.5).abs() < 1e-9);
        assert_eq!(a.last_update, b.last_update);
    }

    fn cold(severity: u8, progress_hours: f64) -> Disease {
        let mut d = Disease::new(
            DiseaseId(1),
            CharacterId(7),
            "Common Cold",
            "Sniffles",
            Some(TreatmentKind::Cold),
            Timestamp::EPOCH,
        );
        d.severity = severity;
        d.progress_hours = progress_hours;
        d
    }

    #[test]
    fn disease_days_are_judged_when_they_complete() {
        let mut start = record();
        start.stats.hygiene = 100.0;
        start.diseases.push(cold(5, 10.0));

        let mut whole = start.clone();
        let mut split = start.clone();
        with_engine(&NEVER, |engine| {
            engine.apply(&mut whole, hours(25.0), DecayMode::Awake, SEED);
            engine.apply(&mut split, hours(14.0), DecayMode::Awake, SEED);
            engine.apply(&mut split, hours(11.0), DecayMode::Awake, SEED);
        });

        // The day completes at 14h with hygiene 72, clean enough to recover.
        assert_eq!(whole.diseases[0].severity, 4);
        assert_eq!(split.diseases[0].severity, 4);
        assert!((whole.diseases[0].progress_hours - split.diseases[0].progress_hours).abs() < 1e-9);
        assert!((whole.stats.health - split.stats.health).abs() < 1e-9);
        assert!((whole.stats.hygiene - 50.0).abs() < 1e-9);
    }

    #[test]
    fn escalation_penalty_matches_across_splits() {
        let mut start = record();
        start.stats.hygiene = 10.0;
        start.stats.health = 90.0;
        start.diseases.push(cold(9, 20.0));

        let mut whole = start.clone();
        let mut split = start.clone();
        with_engine(&NEVER, |engine| {
            engine.apply(&mut whole, hours(76.0), DecayMode::Awake, SEED);
            for _ in 0..4 {
                engine.apply(&mut split, hours(19.0), DecayMode::Awake, SEED);
            }
        });

        let (a, b) = (&whole.diseases[0], &split.diseases[0]);
        assert_eq!(a.severity, SEVERITY_MAX);
        assert_eq!((a.severity, a.days_at_max), (b.severity, b.days_at_max));
        assert_eq!(a.days_at_max, 3);
        assert!((whole.stats.health - split.stats.health).abs() < 1e-9);
    }

    #[test]
    fn enormous_intervals_finish_at_the_floor() {
        let mut rec = record();
        rec.stats.hygiene = 100.0;
        rec.diseases.push(cold(1, 0.0));

        let report = with_engine(&NEVER, |engine| {
            engine.apply(&mut rec, Elapsed::from_secs(i64::MAX), DecayMode::Awake, SEED)
        });

        assert!(report.applied);
        let d = &rec.diseases[0];
        assert_eq!(d.severity, SEVERITY_MAX);
        assert!(d.terminal);
        assert_eq!(rec.stats.health, 1.0);
        assert_eq!(rec.stats.hunger, 100.0);
        assert!(
            report
                .events
                .iter()
                .any(|e| matches!(e, LifeEvent::DiseaseTerminal { .. }))
        );
    }

    #[test]
    fn starvation_injures_but_never_below_one() {
        let mut rec = record();
        rec.stats.hunger = 100.0;
        rec.stats.thirst = 100.0;
        rec.stats.health = 10.0;
        with_engine(&NEVER, |engine| {
            engine.apply(&mut rec, Elapsed::from_hours(48), DecayMode::Awake, SEED)
        });
        assert_eq!(rec.stats.health, 1.0);
    }

    #[test]
    fn damage_only_counts_time_in_worst_tier() {
        let mut rec = record();
        rec.stats.hunger = 70.0;
        rec.stats.thirst = 0.0;
        rec.stats.health = 50.0;
        with_engine(&NEVER, |engine| {
            engine.apply(&mut rec, Elapsed::from_hours(3), DecayMode::Awake, SEED)
        });
        // hunger crosses 75 after one hour, then starves for two
        assert!((rec.stats.health - 46.0).abs() < 1e-9);
    }

    #[test]
    fn regeneration_requires_best_tiers_and_no_disease() {
        let mut rec = record();
        rec.stats.hunger = 0.0;
        rec.stats.thirst = 0.0;
        rec.stats.fatigue = 0.0;
        rec.stats.hygiene = 100.0;
        rec.stats.happiness = 100.0;
        rec.stats.health = 50.0;

        let mut sick = rec.clone();
        sick.diseases.push(Disease::new(
            DiseaseId(1),
            CharacterId(7),
            "Fever",
            "Hot",
            None,
            Timestamp::EPOCH,
        ));

        with_engine(&NEVER, |engine| {
            engine.apply(&mut rec, Elapsed::from_hours(2), DecayMode::Awake, SEED);
            engine.apply(&mut sick, Elapsed::from_hours(2), DecayMode::Awake, SEED);
        });
        assert!((rec.stats.health - 52.0).abs() < 1e-9);
        assert_eq!(sick.stats.health, 50.0);
    }

    #[test]
    fn asleep_mode_freezes_fatigue() {
        let mut rec = record();
        let fatigue = rec.stats.fatigue;
        with_engine(&NEVER, |engine| {
            engine.apply(&mut rec, Elapsed::from_hours(4), DecayMode::Asleep, SEED)
        });
        assert_eq!(rec.stats.fatigue, fatigue);
        assert!(rec.stats.hunger > Baseline::default().hunger);
    }

    #[test]
    fn contraction_creates_one_disease_at_severity_one() {
        let mut rec = record();
        rec.stats.hygiene = 20.0;
        rec.stats.health = 50.0;
        let report = with_engine(&ALWAYS, |engine| {
            engine.apply(&mut rec, Elapsed::from_hours(1), DecayMode::Awake, SEED)
        });
        assert_eq!(rec.diseases.len(), 1);
        assert_eq!(rec.diseases[0].severity, 1);
        assert_eq!(rec.diseases[0].contracted_at, Timestamp(3_600));
        assert!(matches!(
            report.events.as_slice(),
            [LifeEvent::DiseaseContracted { .. }]
        ));

        with_engine(&ALWAYS, |engine| {
            engine.apply(&mut rec, Elapsed::from_hours(1), DecayMode::Awake, SEED)
        });
        assert_eq!(rec.diseases.len(), 1, "no duplicate of an active disease");
    }

    #[test]
    fn bounds_hold_after_long_decay() {
        let mut rec = record();
        with_engine(&ALWAYS, |engine| {
            for _ in 0..20 {
                engine.apply(&mut rec, Elapsed::from_hours(24), DecayMode::Awake, SEED);
            }
        });
        for need in Need::all() {
            let v = rec.stats.need(need);
            assert!((0.0..=100.0).contains(&v));
        }
        assert!(rec.stats.health >= 1.0 && rec.stats.health <= 100.0);
    }
}
