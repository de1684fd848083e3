use super::{CharacterId, Disease, DiseaseId, LifeStats, Timestamp, TreatmentKind};
use crate::config::Baseline;

/// Everything the engine owns for one character: stats plus active diseases.
///
/// Stored and replaced as a single unit so stats and diseases never diverge.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LifeRecord {
    pub stats: LifeStats,
    pub diseases: Vec<Disease>,
    pub next_disease_id: u32,
}

impl LifeRecord {
    pub fn new(stats: LifeStats) -> Self {
        Self {
            stats,
            diseases: Vec::new(),
            next_disease_id: 1,
        }
    }

    pub fn baseline(
        character: CharacterId,
        max_health: u32,
        baseline: &Baseline,
        now: Timestamp,
    ) -> Self {
        Self::new(LifeStats::baseline(character, max_health, baseline, now))
    }

    pub fn character(&self) -> CharacterId {
        self.stats.character
    }

    pub fn allocate_disease_id(&mut self) -> DiseaseId {
        let id = DiseaseId(self.next_disease_id);
        self.next_disease_id = self.next_disease_id.saturating_add(1);
        id
    }

    pub fn has_disease_named(&self, name: &str) -> bool {
        self.diseases.iter().any(|d| d.name == name)
    }

    /// Earliest contracted disease cured by `kind`.
    pub fn first_treatable(&self, kind: TreatmentKind) -> Option<usize> {
        self.diseases
            .iter()
            .enumerate()
            .filter(|(_, d)| d.is_treated_by(kind))
            .min_by_key(|(_, d)| (d.contracted_at, d.id))
            .map(|(index, _)| index)
    }
}
