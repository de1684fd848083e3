//! The needs & health facade consumed by the page/UI layer.
//!
//! Every public operation runs one evaluation per character:
//! lock → load (or create) → sync health from the roster → lazy decay →
//! action → commit → mirror health.
//! The per-character mutex serializes evaluations inside this process and
//! the versioned save rejects writes that raced with another writer.
use std::sync::Arc;

use life_core::actions::{self, apply_hygiene_item, apply_routine};
use life_core::{
    ActionEffect, ActionError, CharacterId, DecayEngine, DecayMode, DecaySeed, Elapsed,
    HygieneAction, ItemDefinition, ItemId, ItemOracle, LifeConfig, LifeEvent, LifeRecord,
};

use crate::api::{ActionOutcome, LifeSnapshot, Result, RuntimeError};
use crate::clock::{GameClock, SystemClock};
use crate::config::RuntimeConfig;
use crate::locks::CharacterLocks;
use crate::oracle::OracleManager;
use crate::repository::{
    CharacterRoster, InMemoryLifeRepo, InventoryRepository, LifeRepository, RepositoryError,
};

/// Nonce slots so the lazy decay and an action's own decay in one
/// evaluation never roll with the same seed.
const LAZY_SLOT: u64 = 0;
const ACTION_SLOT: u64 = 1;

/// Working copy of one character's record for the duration of a call.
struct Session {
    record: LifeRecord,
    /// Stored version the record was loaded at; `None` if not yet stored.
    version: Option<u64>,
    dirty: bool,
    events: Vec<LifeEvent>,
}

/// Health values the roster owns for a character.
#[derive(Clone, Copy, Debug)]
struct Vitals {
    max_health: u32,
    health: f64,
}

impl Vitals {
    /// Copies the roster's values onto `record`. True when the record
    /// changed or the roster holds a value outside `0..=max_health`.
    fn sync(self, record: &mut LifeRecord) -> bool {
        let before = (record.stats.max_health, record.stats.health);
        record.stats.max_health = self.max_health;
        record.stats.health = self.health;
        record.stats.clamp();
        let after = (record.stats.max_health, record.stats.health);
        before != after || record.stats.health != self.health
    }
}

/// Character needs & health service.
///
/// Design: collaborators are injected through [`LifeServiceBuilder`];
/// the service owns no global state besides its lock table.
pub struct LifeService {
    config: LifeConfig,
    base_seed: u64,
    oracles: OracleManager,
    records: Arc<dyn LifeRepository>,
    inventory: Arc<dyn InventoryRepository>,
    roster: Arc<dyn CharacterRoster>,
    clock: Arc<dyn GameClock>,
    locks: CharacterLocks,
}

impl LifeService {
    pub fn builder() -> LifeServiceBuilder {
        LifeServiceBuilder::new()
    }

    pub fn config(&self) -> &LifeConfig {
        &self.config
    }

    pub fn clock(&self) -> &dyn GameClock {
        self.clock.as_ref()
    }

    /// Seed mixed into every contraction roll of this service.
    pub fn base_seed(&self) -> u64 {
        self.base_seed
    }

    /// Creates the baseline record if absent. Existing records are returned
    /// unchanged, without decay.
    pub fn initialize(&self, character: CharacterId) -> Result<LifeSnapshot> {
        self.locks.with(character, || {
            let vitals = self.vitals(character)?;
            if let Some(stored) = self.records.load(character)? {
                return Ok(LifeSnapshot::new(&stored.value, Vec::new()));
            }

            let mut record = LifeRecord::baseline(
                character,
                vitals.max_health,
                &self.config.baseline,
                self.clock.now(),
            );
            vitals.sync(&mut record);
            self.records.save(&record, None)?;
            tracing::info!("Initialized life stats for character {}", character);
            self.mirror_health(&record);
            Ok(LifeSnapshot::new(&record, Vec::new()))
        })
    }

    /// Current stats after lazy decay. Creates the record on first access.
    pub fn get_stats(&self, character: CharacterId) -> Result<LifeSnapshot> {
        self.evaluate(character, |service, mut session| {
            service.commit_if_dirty(&mut session)?;
            Ok(LifeSnapshot::new(&session.record, session.events))
        })
    }

    /// Applies an explicit interval on top of the lazy decay.
    ///
    /// `last_update` moves past the clock by `elapsed`, so the next lazy
    /// decay picks up only time the clock accrues beyond that point.
    pub fn apply_elapsed_time(
        &self,
        character: CharacterId,
        elapsed: Elapsed,
    ) -> Result<LifeSnapshot> {
        self.evaluate(character, |service, mut session| {
            let seed = service.seed(&session, ACTION_SLOT);
            let env = service.oracles.as_env(&service.config);
            let report =
                DecayEngine::new(env).apply(&mut session.record, elapsed, DecayMode::Awake, seed);
            if report.applied {
                log_events(session.record.character(), &report.events);
                session.events.extend(report.events);
                session.dirty = true;
            }
            service.commit_if_dirty(&mut session)?;
            Ok(LifeSnapshot::new(&session.record, session.events))
        })
    }

    pub fn eat(&self, character: CharacterId, item: ItemId) -> Result<ActionOutcome> {
        self.consume(character, item, |record, def| actions::eat(&mut record.stats, def))
    }

    pub fn drink(&self, character: CharacterId, item: ItemId) -> Result<ActionOutcome> {
        self.consume(character, item, |record, def| actions::drink(&mut record.stats, def))
    }

    pub fn use_medicine(&self, character: CharacterId, item: ItemId) -> Result<ActionOutcome> {
        self.consume(character, item, actions::use_medicine)
    }

    /// Sleeps for `hours` and advances the game clock by the same amount
    /// once the result is stored.
    pub fn sleep(&self, character: CharacterId, hours: u32) -> Result<ActionOutcome> {
        self.evaluate(character, |service, mut session| {
            let seed = service.seed(&session, ACTION_SLOT);
            let env = service.oracles.as_env(&service.config);
            let engine = DecayEngine::new(env);

            let mut next = session.record.clone();
            let effect =
                match actions::sleep(&engine, &service.config.sleep, &mut next, hours, seed) {
                    Ok(effect) => effect,
                    Err(err) => return service.reject(session, err),
                };
            log_events(character, &effect.events);

            session.record = next;
            service.commit(&mut session)?;
            service.clock.advance(hours);
            tracing::info!("Character {} slept for {} hours", character, hours);
            Ok(service.succeed(session, effect))
        })
    }

    pub fn hygiene(&self, character: CharacterId, action: HygieneAction) -> Result<ActionOutcome> {
        match action {
            HygieneAction::UseItem(item) => self.consume(character, item, |record, def| {
                apply_hygiene_item(&mut record.stats, def)
            }),
            HygieneAction::Routine(routine) => self.evaluate(character, |service, mut session| {
                let effect = apply_routine(&mut session.record.stats, routine);
                service.commit(&mut session)?;
                tracing::info!("Character {} performed {}", character, routine);
                Ok(service.succeed(session, effect))
            }),
        }
    }

    /// Hygiene by player-supplied name; unknown names fail as a validation outcome.
    pub fn hygiene_named(
        &self,
        character: CharacterId,
        kind: &str,
        item: Option<ItemId>,
    ) -> Result<ActionOutcome> {
        match HygieneAction::parse(kind, item) {
            Ok(action) => self.hygiene(character, action),
            Err(err) => self.evaluate(character, |service, session| service.reject(session, err)),
        }
    }

    /// Shared path for every action that uses up one inventory item.
    ///
    /// The record is mutated on a copy; the inventory is decremented before
    /// the save and restored if the save fails, so either both change or
    /// neither does.
    fn consume<F>(&self, character: CharacterId, item: ItemId, apply: F) -> Result<ActionOutcome>
    where
        F: FnOnce(&mut LifeRecord, &ItemDefinition) -> std::result::Result<ActionEffect, ActionError>,
    {
        self.evaluate(character, |service, mut session| {
            let Some(def) = service.oracles.items().definition(item) else {
                return service.reject(session, ActionError::ItemNotFound(item));
            };
            if service.inventory.quantity(character, item)? < 1 {
                return service.reject(session, ActionError::InsufficientQuantity(item));
            }

            let mut next = session.record.clone();
            let effect = match apply(&mut next, &def) {
                Ok(effect) => effect,
                Err(err) => return service.reject(session, err),
            };

            match service.inventory.decrement(character, item, 1) {
                Ok(()) => {}
                Err(RepositoryError::InsufficientQuantity { .. }) => {
                    return service.reject(session, ActionError::InsufficientQuantity(item));
                }
                Err(err) => return Err(err.into()),
            }

            session.record = next;
            if let Err(err) = service.commit(&mut session) {
                tracing::warn!(
                    "Save failed for character {}, returning {} to inventory: {}",
                    character,
                    item,
                    err
                );
                if let Err(restore) = service.inventory.increment(character, item, 1) {
                    tracing::error!(
                        "Could not return {} to character {}: {}",
                        item,
                        character,
                        restore
                    );
                }
                return Err(err);
            }

            log_events(character, &effect.events);
            tracing::info!("Character {} used {} ({})", character, def.name, item);
            Ok(service.succeed(session, effect))
        })
    }

    /// Runs `f` on a freshly loaded and decayed session while holding the
    /// character's lock.
    fn evaluate<T, F>(&self, character: CharacterId, f: F) -> Result<T>
    where
        F: FnOnce(&Self, Session) -> Result<T>,
    {
        self.locks.with(character, || {
            let session = self.open(character)?;
            f(self, session)
        })
    }

    fn open(&self, character: CharacterId) -> Result<Session> {
        let vitals = self.vitals(character)?;
        let now = self.clock.now();

        let mut session = match self.records.load(character)? {
            Some(stored) => Session {
                record: stored.value,
                version: Some(stored.version),
                dirty: false,
                events: Vec::new(),
            },
            None => {
                tracing::debug!("No life record for character {}, creating baseline", character);
                Session {
                    record: LifeRecord::baseline(
                        character,
                        vitals.max_health,
                        &self.config.baseline,
                        now,
                    ),
                    version: None,
                    dirty: true,
                    events: Vec::new(),
                }
            }
        };

        if vitals.sync(&mut session.record) {
            tracing::debug!(
                "Synced health {:.2}/{} from roster for character {}",
                session.record.stats.health,
                vitals.max_health,
                character
            );
            session.dirty = true;
        }

        let elapsed = now.since(session.record.stats.last_update);
        let seed = self.seed(&session, LAZY_SLOT);
        let env = self.oracles.as_env(&self.config);
        let report =
            DecayEngine::new(env).apply(&mut session.record, elapsed, DecayMode::Awake, seed);
        if report.applied {
            tracing::debug!(
                "Applied {:.2}h of decay to character {}",
                report.hours,
                character
            );
            log_events(character, &report.events);
            session.events.extend(report.events);
            session.dirty = true;
        } else {
            tracing::debug!(
                "Skipped decay for character {} ({}s elapsed)",
                character,
                elapsed.secs()
            );
        }

        Ok(session)
    }

    fn vitals(&self, character: CharacterId) -> Result<Vitals> {
        let max_health = self.roster.max_health(character)?;
        let health = self.roster.health(character)?;
        match (max_health, health) {
            (Some(max_health), Some(health)) => Ok(Vitals { max_health, health }),
            _ => Err(RuntimeError::CharacterNotFound(character)),
        }
    }

    fn seed(&self, session: &Session, slot: u64) -> DecaySeed {
        let version = session.version.unwrap_or(0);
        DecaySeed {
            base: self.base_seed,
            nonce: version.wrapping_mul(2).wrapping_add(slot),
        }
    }

    fn commit(&self, session: &mut Session) -> Result<()> {
        let version = self.records.save(&session.record, session.version)?;
        session.version = Some(version);
        session.dirty = false;
        self.mirror_health(&session.record);
        Ok(())
    }

    fn commit_if_dirty(&self, session: &mut Session) -> Result<()> {
        if session.dirty {
            self.commit(session)?;
        }
        Ok(())
    }

    /// Persists any decay the evaluation triggered, then reports `error`.
    fn reject(&self, mut session: Session, error: ActionError) -> Result<ActionOutcome> {
        self.commit_if_dirty(&mut session)?;
        tracing::debug!(
            "Action rejected for character {} ({}): {}",
            session.record.character(),
            error.kind().as_str(),
            error
        );
        Ok(ActionOutcome::failed(&error, &session.record, session.events))
    }

    fn succeed(&self, session: Session, effect: ActionEffect) -> ActionOutcome {
        ActionOutcome::succeeded(effect, &session.record, session.events)
    }

    fn mirror_health(&self, record: &LifeRecord) {
        let character = record.character();
        if let Err(err) = self.roster.update_health(character, record.stats.health) {
            tracing::warn!("Failed to mirror health for character {}: {}", character, err);
        }
    }
}

fn log_events(character: CharacterId, events: &[LifeEvent]) {
    for event in events {
        match event {
            LifeEvent::DiseaseTerminal { name, .. } => {
                tracing::warn!("Character {} has a terminal {}", character, name);
            }
            LifeEvent::DiseaseContracted { name, .. }
            | LifeEvent::DiseaseCured { name, .. }
            | LifeEvent::DiseaseResolved { name, .. } => {
                tracing::info!("Character {}: {:?} ({})", character, event, name);
            }
            _ => tracing::debug!("Character {}: {:?}", character, event),
        }
    }
}

/// Builder for [`LifeService`].
///
/// Oracles, inventory and roster are required. Records default to an
/// in-memory store and the clock to [`SystemClock`].
pub struct LifeServiceBuilder {
    config: RuntimeConfig,
    oracles: Option<OracleManager>,
    records: Option<Arc<dyn LifeRepository>>,
    inventory: Option<Arc<dyn InventoryRepository>>,
    roster: Option<Arc<dyn CharacterRoster>>,
    clock: Option<Arc<dyn GameClock>>,
}

impl LifeServiceBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            oracles: None,
            records: None,
            inventory: None,
            roster: None,
            clock: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    pub fn oracles(mut self, oracles: OracleManager) -> Self {
        self.oracles = Some(oracles);
        self
    }

    pub fn records(mut self, records: Arc<dyn LifeRepository>) -> Self {
        self.records = Some(records);
        self
    }

    pub fn inventory(mut self, inventory: Arc<dyn InventoryRepository>) -> Self {
        self.inventory = Some(inventory);
        self
    }

    pub fn roster(mut self, roster: Arc<dyn CharacterRoster>) -> Self {
        self.roster = Some(roster);
        self
    }

    pub fn clock(mut self, clock: Arc<dyn GameClock>) -> Self {
        self.clock = Some(clock);
        self
    }

    pub fn build(self) -> Result<LifeService> {
        let oracles = self
            .oracles
            .ok_or(RuntimeError::MissingCollaborator("oracles"))?;
        let inventory = self
            .inventory
            .ok_or(RuntimeError::MissingCollaborator("inventory"))?;
        let roster = self
            .roster
            .ok_or(RuntimeError::MissingCollaborator("character roster"))?;
        let records = self
            .records
            .unwrap_or_else(|| Arc::new(InMemoryLifeRepo::new()));
        let clock = self.clock.unwrap_or_else(|| Arc::new(SystemClock::new()));
        let base_seed = self.config.rng_seed.unwrap_or_else(rand::random);

        tracing::debug!("Building life service with base seed {}", base_seed);
        Ok(LifeService {
            config: self.config.life,
            base_seed,
            oracles,
            records,
            inventory,
            roster,
            clock,
            locks: CharacterLocks::default(),
        })
    }
}
