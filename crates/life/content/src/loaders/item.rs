//! Item catalog loader.

use std::collections::HashSet;
use std::path::Path;

use life_core::ItemDefinition;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Item catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemCatalog {
    pub items: Vec<ItemDefinition>,
}

/// Loader for item catalog from RON files.
pub struct ItemLoader;

impl ItemLoader {
    /// Load item definitions from a RON file.
    ///
    /// Fails on duplicate item ids or negative effect values.
    pub fn load(path: &Path) -> LoadResult<Vec<ItemDefinition>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<ItemDefinition>> {
        let catalog: ItemCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item catalog RON: {}", e))?;

        let mut seen = HashSet::new();
        for item in &catalog.items {
            if !seen.insert(item.id) {
                anyhow::bail!("Duplicate item id {} ({})", item.id.0, item.name);
            }
            let e = &item.effects;
            let values = [
                e.nutrition_value,
                e.hydration_value,
                e.hygiene_value,
                e.health_restore,
            ];
            if values.iter().any(|v| *v < 0.0) {
                anyhow::bail!("Item {} ({}) has a negative effect value", item.id.0, item.name);
            }
        }

        Ok(catalog.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use life_core::{ItemId, TreatmentKind};

    #[test]
    fn parses_partial_effects() {
        let items = ItemLoader::parse(
            r#"(items: [
                (id: ItemId(1), name: "bread", effects: (nutrition_value: 30.0)),
                (id: ItemId(2), name: "syrup", effects: (treatment_type: Some(cold), treatment_power: 4)),
            ])"#,
        )
        .expect("valid catalog");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].effects.nutrition_value, 30.0);
        assert_eq!(items[0].effects.hydration_value, 0.0);
        assert_eq!(items[1].id, ItemId(2));
        assert_eq!(items[1].effects.treatment_type, Some(TreatmentKind::Cold));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = ItemLoader::parse(
            r#"(items: [
                (id: ItemId(1), name: "bread"),
                (id: ItemId(1), name: "more bread"),
            ])"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Duplicate"));
    }

    #[test]
    fn loads_bundled_catalog() {
        let items = ItemLoader::load(&crate::default_data_dir().join("items.ron"))
            .expect("bundled items parse");
        assert!(items.iter().any(|i| i.effects.nutrition_value > 0.0));
        assert!(items.iter().any(|i| i.effects.treatment_type.is_some()));
    }
}
