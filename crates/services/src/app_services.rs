use std::sync::Arc;

use storage::repository::Storage;

use crate::Clock;
use crate::catalog_service::CatalogService;
use crate::code_runner::CodeRunner;
use crate::error::AppServicesError;
use crate::session_store::{AuthConfig, SessionStore};

/// Assembles app-facing services over one `Storage`.
#[derive(Clone)]
pub struct AppServices {
    session: Arc<SessionStore>,
    catalog: Arc<CatalogService>,
    code_runner: Arc<CodeRunner>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails.
    pub async fn new_sqlite(
        db_url: &str,
        clock: Clock,
        config: AuthConfig,
    ) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Ok(Self::from_storage(&storage, clock, config))
    }

    /// Build services over the in-memory store and built-in catalog.
    #[must_use]
    pub fn in_memory(clock: Clock, config: AuthConfig) -> Self {
        Self::from_storage(&Storage::in_memory(), clock, config)
    }

    #[must_use]
    pub fn from_storage(storage: &Storage, clock: Clock, config: AuthConfig) -> Self {
        let session = Arc::new(SessionStore::new(clock, config, Arc::clone(&storage.kv)));
        let catalog = Arc::new(CatalogService::new(clock, Arc::clone(&storage.catalog)));
        let code_runner = Arc::new(CodeRunner::new(config.simulated_latency));
        Self {
            session,
            catalog,
            code_runner,
        }
    }

    #[must_use]
    pub fn session(&self) -> Arc<SessionStore> {
        Arc::clone(&self.session)
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<CatalogService> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn code_runner(&self) -> Arc<CodeRunner> {
        Arc::clone(&self.code_runner)
    }
}
