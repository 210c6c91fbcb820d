//! Scoped, read-only access to the registrar store.

use std::path::PathBuf;

use rusqlite::{Connection, OpenFlags};

use crate::error::StorageError;

/// Location of a registrar store.
///
/// Holds no open handle; each [`with_connection`](Database::with_connection)
/// call opens its own connection and closes it before returning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Database {
    path: PathBuf,
}

impl Database {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Open the store, run `f` against the connection, then close it.
    ///
    /// The store is opened read-only, so a missing file is an open fault
    /// rather than a freshly created empty database. The connection is
    /// dropped on every exit path, including when `f` fails.
    pub fn with_connection<T, F>(&self, f: F) -> Result<T, StorageError>
    where
        F: FnOnce(&Connection) -> rusqlite::Result<T>,
    {
        log::debug!("Opening registrar store at {}", self.path.display());
        let conn = Connection::open_with_flags(
            &self.path,
            OpenFlags::SQLITE_OPEN_READ_ONLY
                | OpenFlags::SQLITE_OPEN_URI
                | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(|e| {
            log::debug!("Open failed: {}", e);
            StorageError::open(e)
        })?;

        let result = f(&conn).map_err(|e| {
            log::debug!("Query failed: {}", e);
            StorageError::query(e)
        });

        if let Err((_, e)) = conn.close() {
            log::warn!("Failed to close registrar store cleanly: {}", e);
        }
        result
    }
}
