//! Store handle over a SQLite connection pool.
//!
//! The store is constructed explicitly and passed down to handlers; there is
//! no global engine or session factory. Opening a store creates the database
//! file when missing and ensures the schema exists.

use crate::error::AppResult;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

use super::session::Session;

/// SQLite works best with a single writer; the pool serializes callers.
const MAX_CONNECTIONS: u32 = 1;

/// Schema statements, executed idempotently at open.
const SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        username TEXT NOT NULL UNIQUE,
        email TEXT NOT NULL UNIQUE,
        created_at TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS posts (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        content TEXT NOT NULL,
        created_at TEXT NOT NULL,
        user_id INTEGER NOT NULL REFERENCES users(id)
    )",
];

/// Handle to the backing SQLite store.
#[derive(Debug, Clone)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    /// Open (creating if missing) the database file at `path` and ensure the
    /// schema exists.
    pub async fn open(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect_with(options)
            .await?;

        info!(path = %path.display(), "Opened database");

        let store = Self { pool };
        store.ensure_schema().await?;
        Ok(store)
    }

    /// Open an in-memory database (useful for testing).
    ///
    /// The pool is pinned to a single long-lived connection so the in-memory
    /// database survives between calls.
    pub async fn in_memory() -> AppResult<Self> {
        let options = SqliteConnectOptions::new().in_memory(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
            .connect_with(options)
            .await?;

        let store = Self { pool };
        store.ensure_schema().await?;
        Ok(store)
    }

    /// Create the tables if they do not already exist.
    async fn ensure_schema(&self) -> AppResult<()> {
        for statement in SCHEMA {
            sqlx::query(statement).execute(&self.pool).await?;
        }
        debug!("Schema ensured");
        Ok(())
    }

    /// Begin a new transactional session.
    pub async fn begin(&self) -> AppResult<Session> {
        Ok(self.pool.begin().await?)
    }

    /// Close the underlying pool.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
