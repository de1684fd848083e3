//! Content loaders for reading reference data from files.

pub mod bundle;
pub mod config;
pub mod disease;
pub mod item;

pub use bundle::ContentBundle;
pub use config::ConfigLoader;
pub use disease::DiseaseLoader;
pub use item::ItemLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
