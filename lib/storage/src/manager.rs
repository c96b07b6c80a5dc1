use crate::loader::CatalogLoader;
use prodsim_core::Result;
use prodsim_similarity::{Engine, EngineConfig, SharedEngine};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

/// Load the dataset at `path` and build an engine over it.
///
/// Slow for large catalogs; call once and share the result.
pub fn construct<P: AsRef<Path>>(path: P, config: EngineConfig) -> Result<Engine> {
    let catalog = CatalogLoader::from_path(path)?;
    Engine::construct(catalog, config)
}

/// Owns the dataset location and the process-wide engine handle
pub struct EngineManager {
    data_path: PathBuf,
    config: EngineConfig,
    shared: SharedEngine,
}

impl EngineManager {
    pub fn new<P: AsRef<Path>>(data_path: P, config: EngineConfig) -> Self {
        Self {
            data_path: data_path.as_ref().to_path_buf(),
            config,
            shared: SharedEngine::new(),
        }
    }

    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Engine for the dataset, built on first use
    pub fn engine(&self) -> Result<Arc<Engine>> {
        self.shared.get_or_init(|| {
            info!("Building engine from {}", self.data_path.display());
            construct(&self.data_path, self.config.clone())
        })
    }

    /// Re-read the dataset and rebuild
    pub fn reload(&self) -> Result<Arc<Engine>> {
        self.shared
            .reload(|| construct(&self.data_path, self.config.clone()))
    }

    pub fn is_loaded(&self) -> bool {
        self.shared.is_initialized()
    }
}
