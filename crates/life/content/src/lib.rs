//! Data-driven reference content for the needs engine.
//!
//! This crate loads static data files consumed by the runtime oracles:
//! - Item catalogs (RON): nutrition, hydration, hygiene and medicine effects
//! - Disease catalogs (RON): contractible diseases and their cures
//! - Tuning configuration (TOML): decay rates, disease and sleep rules
//!
//! Content never appears in per-character state; only references (item ids,
//! disease names) do.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentBundle, DiseaseLoader, ItemLoader};

/// Directory holding the bundled default content files.
pub fn default_data_dir() -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("data")
}
