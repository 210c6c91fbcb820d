use registrar_db::StorageError;
use thiserror::Error;

/// Errors that end a registrar command with a non-zero exit status.
#[derive(Debug, Error)]
pub enum CliError {
    /// The store could not be opened or queried
    #[error("{0}")]
    Storage(#[from] StorageError),

    /// No class has the requested id
    #[error("no class with classid {class_id} exists")]
    ClassNotFound { class_id: String },

    /// Writing the report failed
    #[error("{0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub fn class_not_found(class_id: impl Into<String>) -> Self {
        Self::ClassNotFound {
            class_id: class_id.into(),
        }
    }
}
