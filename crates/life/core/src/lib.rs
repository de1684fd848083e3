//! Character needs & health rules.
//!
//! `life-core` defines the canonical model of a character's needs (hunger,
//! thirst, fatigue, hygiene, happiness), health and diseases, and the pure
//! functions that evolve it:
//! - [`status`] classifies numeric values into advisory levels
//! - [`decay`] applies elapsed-time drift, disease progression and contraction
//! - [`disease`] holds contraction odds, progression and treatment
//! - [`actions`] processes eat/drink/sleep/hygiene/medicine requests
//!
//! Nothing here performs I/O. Reference data and randomness arrive through
//! the oracle traits in [`env`]; storage, inventory and clocks live in the
//! runtime crate.
pub mod actions;
pub mod config;
pub mod decay;
pub mod disease;
pub mod env;
pub mod error;
pub mod events;
pub mod state;
pub mod status;

pub use actions::{ActionEffect, HygieneAction, HygieneRoutine};
pub use config::{Baseline, DecayRates, DiseaseRules, HealthRules, LifeConfig, SleepRules};
pub use decay::{DecayEngine, DecayMode, DecayReport, DecaySeed};
pub use disease::{DiseaseModel, DiseaseProgress, TreatmentResult};
pub use env::{
    DiseaseOracle, DiseaseTemplate, ItemDefinition, ItemEffects, ItemOracle, LifeEnv, PcgRng,
    RngOracle, compute_seed,
};
pub use error::{ActionError, ErrorKind};
pub use events::LifeEvent;
pub use state::{
    CharacterId, Disease, DiseaseId, Elapsed, ItemId, LifeRecord, LifeStats, Need, Polarity,
    SEVERITY_MAX, SEVERITY_MIN, Timestamp, TreatmentKind,
};
pub use status::{Ladder, Status, StatusLevel, StatusReport};
