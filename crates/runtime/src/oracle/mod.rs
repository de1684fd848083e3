//! Runtime wrappers around static content oracles.
//!
//! These implementations expose `life-core` oracle traits and bundle them into
//! an [`OracleManager`] so the service can build [`life_core::LifeEnv`]
//! views on demand. The data is immutable at runtime; dynamic state lives in
//! repositories.
mod diseases;
mod items;

use life_content::ContentBundle;
use life_core::{LifeConfig, LifeEnv, PcgRng, RngOracle};
use std::sync::Arc;

pub use diseases::DiseaseOracleImpl;
pub use items::ItemOracleImpl;

/// Manages all oracle implementations and provides unified access
#[derive(Clone)]
pub struct OracleManager {
    pub(crate) items: Arc<ItemOracleImpl>,
    pub(crate) diseases: Arc<DiseaseOracleImpl>,
    pub(crate) rng: Arc<dyn RngOracle>,
}

impl OracleManager {
    pub fn new(items: Arc<ItemOracleImpl>, diseases: Arc<DiseaseOracleImpl>) -> Self {
        Self {
            items,
            diseases,
            rng: Arc::new(PcgRng),
        }
    }

    /// Builds oracles from loaded content.
    pub fn from_content(bundle: &ContentBundle) -> Self {
        Self::new(
            Arc::new(bundle.items.iter().cloned().collect()),
            Arc::new(DiseaseOracleImpl::new(bundle.diseases.clone())),
        )
    }

    /// Replaces the random source, e.g. with a fixed-outcome one in tests.
    pub fn with_rng(mut self, rng: Arc<dyn RngOracle>) -> Self {
        self.rng = rng;
        self
    }

    /// Borrowed view for one rules evaluation.
    pub fn as_env<'a>(&'a self, config: &'a LifeConfig) -> LifeEnv<'a> {
        LifeEnv::new(
            config,
            self.items.as_ref(),
            self.diseases.as_ref(),
            self.rng.as_ref(),
        )
    }

    pub fn items(&self) -> &ItemOracleImpl {
        &self.items
    }
}
