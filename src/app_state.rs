//! Implements a struct that holds the state of the REST server.

use std::sync::Arc;

use axum::extract::FromRef;

use crate::{
    Error,
    category::{
        CategoryRepository, CategoryService, InMemoryCategoryRepository,
        SQLiteCategoryRepository,
    },
    config::{Config, StorageBackend},
};

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The service that handles category requests.
    pub category_service: CategoryService,
}

impl AppState {
    /// Create a new [AppState] that stores categories in `repository`.
    pub fn new(repository: Arc<dyn CategoryRepository>) -> Self {
        Self {
            category_service: CategoryService::new(repository),
        }
    }

    /// Create a new [AppState] with the repository selected by `config`.
    ///
    /// # Errors
    /// Returns an error if the SQLite database cannot be opened or initialized.
    pub fn from_config(config: &Config) -> Result<Self, Error> {
        let repository: Arc<dyn CategoryRepository> = match config.storage_backend() {
            StorageBackend::InMemory => {
                tracing::info!("No database configured, storing categories in memory");
                Arc::new(InMemoryCategoryRepository::with_default_categories())
            }
            StorageBackend::SQLite(db_conn) => {
                tracing::info!("Opening SQLite database \"{db_conn}\"");
                Arc::new(SQLiteCategoryRepository::open(db_conn)?)
            }
        };

        Ok(Self::new(repository))
    }
}

impl FromRef<AppState> for CategoryService {
    fn from_ref(state: &AppState) -> Self {
        state.category_service.clone()
    }
}
