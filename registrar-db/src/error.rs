use thiserror::Error;

/// A fault opening or querying the registrar store.
///
/// Only the underlying message is kept; the driver's own error type never
/// leaves this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// The store could not be opened.
    #[error("{0}")]
    Open(String),

    /// A statement failed to prepare, execute, or decode.
    #[error("{0}")]
    Query(String),
}

impl StorageError {
    pub fn open(err: rusqlite::Error) -> Self {
        Self::Open(err.to_string())
    }

    pub fn query(err: rusqlite::Error) -> Self {
        Self::Query(err.to_string())
    }

    /// The message of the underlying fault.
    pub fn message(&self) -> &str {
        match self {
            Self::Open(msg) | Self::Query(msg) => msg,
        }
    }
}
