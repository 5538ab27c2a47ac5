//! Database connection management

use std::{fs, io, path::Path, str::FromStr, time::Duration};

use sqlx::{
    Sqlite, SqlitePool, Transaction,
    migrate::{MigrateError, Migrator},
    sqlite::{SqliteConnectOptions, SqliteJournalMode},
};
use thiserror::Error;
use tracing::{debug, warn};

/// Schema migrations shipped with the workspace.
pub static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("invalid database url")]
    InvalidUrl(#[source] sqlx::Error),

    #[error("failed to create database directory {path}")]
    Directory {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to connect to database")]
    Connect(#[source] sqlx::Error),

    #[error("failed to apply migrations")]
    Migrate(#[from] MigrateError),
}

/// Shared store handle passed to services.
#[derive(Debug, Clone)]
pub struct Db {
    pool: SqlitePool,
}

impl Db {
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Begin a transaction scoped to a single service operation.
    ///
    /// # Errors
    ///
    /// Returns an error when a connection cannot be acquired or `BEGIN` fails.
    pub async fn begin(&self) -> Result<Transaction<'static, Sqlite>, sqlx::Error> {
        self.pool.begin().await
    }

    /// Begin a transaction that takes the write lock up front.
    ///
    /// Operations that read before they write must use this: a deferred
    /// transaction cannot upgrade its snapshot once another writer commits.
    ///
    /// # Errors
    ///
    /// Returns an error when a connection cannot be acquired or the lock is
    /// still held when the busy timeout expires.
    pub async fn begin_write(&self) -> Result<Transaction<'static, Sqlite>, sqlx::Error> {
        self.pool.begin_with("BEGIN IMMEDIATE").await
    }

    /// Commit `tx` when `result` succeeded, otherwise roll it back and hand the
    /// original error back to the caller.
    ///
    /// # Errors
    ///
    /// Returns the operation error, or the commit error when committing fails.
    pub async fn finish<T, E>(
        &self,
        tx: Transaction<'static, Sqlite>,
        result: Result<T, E>,
    ) -> Result<T, E>
    where
        E: From<sqlx::Error>,
    {
        match result {
            Ok(value) => {
                tx.commit().await?;

                Ok(value)
            }
            Err(error) => {
                if let Err(rollback_error) = tx.rollback().await {
                    warn!("failed to roll back transaction: {rollback_error}");
                } else {
                    debug!("rolled back transaction");
                }

                Err(error)
            }
        }
    }
}

/// Connect to the `SQLite` database at `database_url`, creating the file and
/// its parent directory when they do not exist yet.
///
/// # Errors
///
/// Returns an error if the URL is invalid, the directory cannot be created, or
/// the connection cannot be established.
pub async fn connect(database_url: &str) -> Result<SqlitePool, DatabaseError> {
    let options = SqliteConnectOptions::from_str(database_url)
        .map_err(DatabaseError::InvalidUrl)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(BUSY_TIMEOUT);

    ensure_parent_directory(options.get_filename())?;

    SqlitePool::connect_with(options)
        .await
        .map_err(DatabaseError::Connect)
}

/// Apply any pending schema migrations.
///
/// # Errors
///
/// Returns an error if a migration fails to apply.
pub async fn migrate(pool: &SqlitePool) -> Result<(), DatabaseError> {
    MIGRATOR.run(pool).await?;

    Ok(())
}

fn ensure_parent_directory(filename: &Path) -> Result<(), DatabaseError> {
    let Some(parent) = filename.parent() else {
        return Ok(());
    };

    if parent.as_os_str().is_empty() || parent.exists() {
        return Ok(());
    }

    fs::create_dir_all(parent).map_err(|source| DatabaseError::Directory {
        path: parent.display().to_string(),
        source,
    })?;

    debug!("created database directory {}", parent.display());

    Ok(())
}
