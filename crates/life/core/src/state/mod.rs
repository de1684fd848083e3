//! Canonical per-character state mutated by the engine.
mod disease;
mod ids;
mod record;
mod stats;

pub use disease::{Disease, SEVERITY_MAX, SEVERITY_MIN, TreatmentKind};
pub use ids::{CharacterId, DiseaseId, Elapsed, ItemId, Timestamp};
pub use record::LifeRecord;
pub use stats::{LifeStats, NEED_MAX, Need, Polarity};
