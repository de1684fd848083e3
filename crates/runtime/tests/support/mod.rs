//! Shared fixtures for the service integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use life_content::ContentBundle;
use life_core::{CharacterId, ItemId, LifeRecord, RngOracle, Timestamp};
use life_runtime::{
    CharacterRoster, InMemoryInventory, InMemoryLifeRepo, InMemoryRoster, LifeRepository, LifeService,
    ManualClock, OracleManager, RuntimeConfig,
};

pub const HERO: CharacterId = CharacterId(1);

pub const BREAD: ItemId = ItemId(1);
pub const WATER: ItemId = ItemId(10);
pub const COUGH_SYRUP: ItemId = ItemId(20);
pub const SOAP: ItemId = ItemId(30);

/// Random source returning the same value for every seed.
pub struct FixedRng(pub u32);

impl RngOracle for FixedRng {
    fn next_u32(&self, _seed: u64) -> u32 {
        self.0
    }
}

/// Every contraction roll fails.
pub const NEVER: u32 = u32::MAX;
/// Every contraction roll with a non-zero chance succeeds.
pub const ALWAYS: u32 = 0;

pub struct Harness {
    pub service: LifeService,
    pub records: Arc<InMemoryLifeRepo>,
    pub inventory: Arc<InMemoryInventory>,
    pub roster: Arc<InMemoryRoster>,
    pub clock: Arc<ManualClock>,
}

impl Harness {
    pub fn new(roll: u32) -> Self {
        Self::with_records(roll, Arc::new(InMemoryLifeRepo::new()))
    }

    pub fn with_records(roll: u32, records: Arc<InMemoryLifeRepo>) -> Self {
        Self::build(roll, records.clone(), records)
    }

    /// Builds the service over `store` while keeping `records` for inspection.
    pub fn build(
        roll: u32,
        records: Arc<InMemoryLifeRepo>,
        store: Arc<dyn LifeRepository>,
    ) -> Self {
        let bundle = ContentBundle::bundled().expect("bundled content");
        let oracles = OracleManager::from_content(&bundle).with_rng(Arc::new(FixedRng(roll)));
        let inventory = Arc::new(InMemoryInventory::new());
        let roster = Arc::new(InMemoryRoster::new());
        roster.insert(HERO, 100).expect("register hero");
        let clock = Arc::new(ManualClock::new(Timestamp::EPOCH));

        let service = LifeService::builder()
            .config(RuntimeConfig::new(bundle.config).with_seed(42))
            .oracles(oracles)
            .records(store)
            .inventory(inventory.clone())
            .roster(roster.clone())
            .clock(clock.clone())
            .build()
            .expect("service builds");

        Self {
            service,
            records,
            inventory,
            roster,
            clock,
        }
    }

    /// Initializes the hero and rewrites the stored record with `f`.
    /// The roster is kept in step with the seeded health.
    pub fn seed(&self, f: impl FnOnce(&mut LifeRecord)) {
        self.service.initialize(HERO).expect("initialize");
        let stored = self.records.load(HERO).expect("load").expect("record");
        let mut record = stored.value;
        f(&mut record);
        self.records
            .save(&record, Some(stored.version))
            .expect("seed record");
        self.roster
            .update_health(HERO, record.stats.health)
            .expect("seed roster health");
    }

    pub fn stored(&self) -> LifeRecord {
        self.records
            .load(HERO)
            .expect("load")
            .expect("record")
            .value
    }

    pub fn version(&self) -> u64 {
        self.records
            .load(HERO)
            .expect("load")
            .expect("record")
            .version
    }
}
