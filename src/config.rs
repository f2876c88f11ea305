//! Server configuration from command line arguments and environment variables.

use std::net::SocketAddr;

use clap::Parser;

/// The port the server listens on when none is given.
pub const DEFAULT_PORT: u16 = 8080;

/// The REST API server for categories.
///
/// Every option can also be set with the environment variable named in its
/// help text, including from a `.env` file in the working directory.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(version, about, long_about = None)]
pub struct Config {
    /// The port to serve the API from.
    #[arg(short, long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Connection string for the SQLite database, a file path or ":memory:".
    /// Categories are kept in memory if this is not set.
    #[arg(long, env = "DB_CONN")]
    pub db_conn: Option<String>,

    /// File path to write debug logs to.
    #[arg(long, env = "LOG_PATH")]
    pub log_path: Option<String>,
}

/// Where categories are stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend<'a> {
    /// A collection that lives as long as the process.
    InMemory,
    /// A SQLite database opened from the connection string.
    SQLite(&'a str),
}

impl Config {
    /// The address to listen on, all interfaces on [Config::port].
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }

    /// The storage backend selected by [Config::db_conn].
    ///
    /// A blank connection string counts as not set.
    pub fn storage_backend(&self) -> StorageBackend<'_> {
        match self.db_conn.as_deref().map(str::trim) {
            Some(db_conn) if !db_conn.is_empty() => StorageBackend::SQLite(db_conn),
            _ => StorageBackend::InMemory,
        }
    }
}
