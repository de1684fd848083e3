//! Tuning configuration loader.

use std::path::Path;

use life_core::LifeConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for [`LifeConfig`] from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file. Missing tables and keys keep their defaults.
    pub fn load(path: &Path) -> LoadResult<LifeConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<LifeConfig> {
        let config: LifeConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        let sleep = &config.sleep;
        if sleep.min_hours == 0 || sleep.min_hours > sleep.max_hours {
            anyhow::bail!(
                "Invalid sleep range {}..={}",
                sleep.min_hours,
                sleep.max_hours
            );
        }
        let decay = &config.decay;
        let rates = [
            decay.hunger_per_hour,
            decay.thirst_per_hour,
            decay.fatigue_per_hour,
            decay.hygiene_per_hour,
            decay.happiness_per_hour,
        ];
        if rates.iter().any(|rate| !rate.is_finite() || *rate < 0.0) {
            anyhow::bail!("decay rates must be finite and not negative");
        }
        if config.decay.min_elapsed_hours < 0.0 {
            anyhow::bail!("min_elapsed_hours must not be negative");
        }
        Ok(config)
    }
}
