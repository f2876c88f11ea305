//! A REST API for managing a collection of categories.
//!
//! Requests flow through three layers: the HTTP endpoints in [category]
//! decode and validate the request, [CategoryService] applies the business
//! rules, and a [CategoryRepository] reads and writes the backing store.
//! Two repositories are provided, an in-memory one and a SQLite one, and the
//! server picks one at start up from its [Config].

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use tokio::signal;

mod alert;
mod app_state;
mod category;
mod config;
mod db;
mod endpoints;
mod health;
mod logging;
mod not_found;
mod routing;
#[cfg(test)]
mod test_utils;

pub use alert::Alert;
pub use app_state::AppState;
pub use category::{
    Category, CategoryId, CategoryName, CategoryPayload, CategoryRepository, CategoryService,
    InMemoryCategoryRepository, NewCategory, SQLiteCategoryRepository,
};
pub use config::{Config, DEFAULT_PORT, StorageBackend};
pub use db::initialize as initialize_db;
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use routing::build_router;

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {error}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut terminate) => {
                terminate.recv().await;
            }
            Err(error) => {
                tracing::error!("failed to install terminate signal handler: {error}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// An empty string was used to create a category name.
    #[error("Category name cannot be empty")]
    EmptyCategoryName,

    /// The ID in the request path is not an integer.
    #[error("Invalid category ID \"{0}\", expected an integer")]
    InvalidCategoryId(String),

    /// The request body could not be decoded as a category.
    #[error("Invalid request body: {0}")]
    InvalidRequestBody(String),

    /// The requested category was not found.
    ///
    /// Repositories report a missing category with `None` or `false`; this
    /// error is only created when an endpoint turns that result into a
    /// response.
    #[error("Category not found")]
    NotFound,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// Could not acquire the lock guarding the category store.
    #[error("could not acquire the database lock")]
    DatabaseLockError,
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        tracing::error!("an unhandled SQL error occurred: {}", value);
        Error::SqlError(value)
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::EmptyCategoryName
            | Error::InvalidCategoryId(_)
            | Error::InvalidRequestBody(_) => {
                Alert::Error(self.to_string()).into_response_with_status(StatusCode::BAD_REQUEST)
            }
            Error::NotFound => {
                Alert::Error(self.to_string()).into_response_with_status(StatusCode::NOT_FOUND)
            }
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                Alert::internal_server_error()
            }
        }
    }
}
