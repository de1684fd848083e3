//! Read-only collaborators consulted by the rules.
//!
//! The engine never owns reference data; it reads items, disease templates
//! and randomness through these traits, bundled per evaluation in [`LifeEnv`].
mod diseases;
mod items;
mod rng;

pub use diseases::{DiseaseOracle, DiseaseTemplate};
pub use items::{ItemDefinition, ItemEffects, ItemOracle};
pub use rng::{PcgRng, RngOracle, compute_seed, roll};

use crate::config::LifeConfig;

/// Borrowed view over configuration and oracles for one evaluation.
#[derive(Clone, Copy)]
pub struct LifeEnv<'a> {
    pub config: &'a LifeConfig,
    pub items: &'a dyn ItemOracle,
    pub diseases: &'a dyn DiseaseOracle,
    pub rng: &'a dyn RngOracle,
}

impl<'a> LifeEnv<'a> {
    pub fn new(
        config: &'a LifeConfig,
        items: &'a dyn ItemOracle,
        diseases: &'a dyn DiseaseOracle,
        rng: &'a dyn RngOracle,
    ) -> Self {
        Self {
            config,
            items,
            diseases,
            rng,
        }
    }
}
