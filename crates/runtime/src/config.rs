//! Runtime configuration structures and loaders.
use std::env;
use std::path::PathBuf;

use life_content::ConfigLoader;
use life_core::LifeConfig;

use crate::api::{Result, RuntimeError};

/// Configuration required to build a [`crate::LifeService`].
#[derive(Clone, Debug, Default)]
pub struct RuntimeConfig {
    pub life: LifeConfig,
    /// Seed for contraction rolls. Random per service when `None`.
    pub rng_seed: Option<u64>,
}

impl RuntimeConfig {
    pub const fn new(life: LifeConfig) -> Self {
        Self {
            life,
            rng_seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `LIFE_CONFIG` - Path to a TOML tuning file (default: built-in values)
    /// - `LIFE_RNG_SEED` - Fixed seed for contraction rolls (default: random)
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Some(path) = env::var_os("LIFE_CONFIG").map(PathBuf::from) {
            config.life = ConfigLoader::load(&path)
                .map_err(|err| RuntimeError::Config(format!("{err:#}")))?;
        }

        config.rng_seed = read_env::<u64>("LIFE_RNG_SEED");

        Ok(config)
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok().and_then(|value| value.trim().parse().ok())
}
