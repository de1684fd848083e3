//! Loads every content file from one directory.

use std::path::Path;

use life_core::{DiseaseTemplate, ItemDefinition, LifeConfig};

use crate::loaders::{ConfigLoader, DiseaseLoader, ItemLoader, LoadResult};

pub const ITEMS_FILE: &str = "items.ron";
pub const DISEASES_FILE: &str = "diseases.ron";
pub const CONFIG_FILE: &str = "config.toml";

/// All reference data needed to run the engine.
#[derive(Debug, Clone, Default)]
pub struct ContentBundle {
    pub config: LifeConfig,
    pub items: Vec<ItemDefinition>,
    pub diseases: Vec<DiseaseTemplate>,
}

impl ContentBundle {
    /// Loads `items.ron`, `diseases.ron` and, when present, `config.toml` from `dir`.
    pub fn load_dir(dir: &Path) -> LoadResult<Self> {
        let items = ItemLoader::load(&dir.join(ITEMS_FILE))?;
        let diseases = DiseaseLoader::load(&dir.join(DISEASES_FILE))?;
        let config_path = dir.join(CONFIG_FILE);
        let config = if config_path.exists() {
            ConfigLoader::load(&config_path)?
        } else {
            LifeConfig::default()
        };
        Ok(Self {
            config,
            items,
            diseases,
        })
    }

    /// The content shipped with this crate.
    pub fn bundled() -> LoadResult<Self> {
        Self::load_dir(&crate::default_data_dir())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_content_loads() {
        let bundle = ContentBundle::bundled().expect("bundled content");
        assert!(!bundle.items.is_empty());
        assert!(!bundle.diseases.is_empty());
        assert_eq!(bundle.config.decay.hunger_per_hour, 5.0);
    }

    #[test]
    fn config_file_is_optional() {
        let dir = tempfile::tempdir().expect("temp dir");
        std::fs::write(dir.path().join(ITEMS_FILE), "(items: [])").expect("write items");
        std::fs::write(dir.path().join(DISEASES_FILE), "(diseases: [])").expect("write diseases");
        let bundle = ContentBundle::load_dir(dir.path()).expect("load");
        assert_eq!(bundle.config, LifeConfig::default());
        assert!(bundle.items.is_empty());
    }
}
