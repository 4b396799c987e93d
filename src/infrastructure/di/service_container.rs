//! Service container for dependency injection
//!
//! Wires up the word store and the dictionary with their dependencies.

use std::sync::Arc;

use tracing::debug;

use crate::application::services::Dictionary;
use crate::config::Settings;
use crate::infrastructure::store::FileWordStore;
use crate::infrastructure::traits::{FileSystem, RealFileSystem, WordStore};
use crate::infrastructure::InfraResult;

/// Container holding the application's shared dependencies.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Filesystem abstraction
    pub fs: Arc<dyn FileSystem>,

    /// Persistent word store
    pub store: Arc<dyn WordStore>,
}

impl ServiceContainer {
    /// Create a container with real implementations.
    ///
    /// Opens (or creates) the word store; failure here is fatal for startup.
    pub fn new(settings: Settings) -> InfraResult<Self> {
        Self::with_fs(settings, Arc::new(RealFileSystem))
    }

    /// Create a container on a custom filesystem (for testing).
    pub fn with_fs(settings: Settings, fs: Arc<dyn FileSystem>) -> InfraResult<Self> {
        debug!("opening word store at {}", settings.store_path.display());
        let store = FileWordStore::open(fs.clone(), &settings.store_path)?;
        Ok(Self::with_deps(settings, fs, Arc::new(store)))
    }

    /// Create a container with custom dependencies (for testing).
    pub fn with_deps(
        settings: Settings,
        fs: Arc<dyn FileSystem>,
        store: Arc<dyn WordStore>,
    ) -> Self {
        let settings = Arc::new(settings);

        Self {
            settings,
            fs,
            store,
        }
    }

    /// Bulk-load the dictionary from the word store.
    pub fn dictionary(&self) -> InfraResult<Dictionary> {
        Ok(Dictionary::load(self.store.clone())?)
    }
}
