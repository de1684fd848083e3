//! Disease catalog loader.

use std::path::Path;

use life_core::DiseaseTemplate;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiseaseCatalog {
    pub diseases: Vec<DiseaseTemplate>,
}

pub struct DiseaseLoader;

impl DiseaseLoader {
    /// Load disease templates from a RON file. Names must be unique.
    pub fn load(path: &Path) -> LoadResult<Vec<DiseaseTemplate>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<DiseaseTemplate>> {
        let catalog: DiseaseCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse disease catalog RON: {}", e))?;

        let mut names: Vec<&str> = catalog.diseases.iter().map(|d| d.name.as_str()).collect();
        names.sort_unstable();
        if let Some(pair) = names.windows(2).find(|w| w[0] == w[1]) {
            anyhow::bail!("Duplicate disease name {}", pair[0]);
        }
        Ok(catalog.diseases)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn treatment_is_optional() {
        let diseases = DiseaseLoader::parse(
            r#"(diseases: [(name: "Gloom", description: "Nothing helps.")])"#,
        )
        .expect("valid catalog");
        assert_eq!(diseases[0].treatment, None);
    }

    #[test]
    fn rejects_duplicate_names() {
        let result = DiseaseLoader::parse(
            r#"(diseases: [
                (name: "Fever", description: "a"),
                (name: "Fever", description: "b"),
            ])"#,
        );
        assert!(result.is_err());
    }
}
