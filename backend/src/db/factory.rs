//! Record store factory.
//!
//! Builds store instances from a seed document or from the dashboard
//! configuration, so screens never hard-code their starting records.

use std::path::Path;
use std::sync::Arc;

use super::repositories::LocalRepository;
use super::repository::{ErrorContext, RecordStore, RepositoryError, RepositoryResult};
use crate::config::DashboardConfig;
use crate::models::{load_seed_file, SeedData};

pub struct RepositoryFactory;

impl RepositoryFactory {
    /// Create an empty in-memory store.
    pub fn create_local() -> Arc<dyn RecordStore> {
        Arc::new(LocalRepository::new())
    }

    /// Create an in-memory store holding `seed`.
    pub fn create_seeded(seed: SeedData) -> RepositoryResult<Arc<dyn RecordStore>> {
        Ok(Arc::new(LocalRepository::with_seed(seed)?))
    }

    /// Create a store from a JSON seed file.
    pub fn from_seed_file<P: AsRef<Path>>(path: P) -> RepositoryResult<Arc<dyn RecordStore>> {
        let path = path.as_ref();
        let seed = load_seed_file(path).map_err(|e| {
            let message = format!("{:#}", e);
            let context = ErrorContext::new("load_seed")
                .with_entity("seed")
                .with_details(path.display().to_string());
            // I/O failures are configuration errors, bad documents are validation errors
            if e.chain().any(|cause| cause.is::<std::io::Error>()) {
                RepositoryError::ConfigurationError { message, context }
            } else {
                RepositoryError::ValidationError { message, context }
            }
        })?;
        Self::create_seeded(seed)
    }

    /// Create a store as the configuration describes: seeded when a seed
    /// path is configured, empty otherwise.
    pub fn from_config(config: &DashboardConfig) -> RepositoryResult<Arc<dyn RecordStore>> {
        match &config.seed.path {
            Some(path) => Self::from_seed_file(path),
            None => Ok(Self::create_local()),
        }
    }

    /// Load `dashboard.toml` from its default location and build the store.
    pub fn from_default_config() -> RepositoryResult<Arc<dyn RecordStore>> {
        let config = DashboardConfig::from_default_location()?;
        Self::from_config(&config)
    }
}
