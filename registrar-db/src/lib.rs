//! SQLite access layer for the course registrar.
//!
//! Every query runs inside [`Database::with_connection`], which opens the
//! store read-only, hands the connection to the query, and closes it again
//! on every exit path. Store faults surface as [`StorageError`].

pub mod connection;
pub mod error;
pub mod filter;
pub mod queries;
pub mod schema;

pub use connection::Database;
pub use error::StorageError;
pub use filter::{OverviewFilter, Predicate};
pub use queries::{class_details, search_overviews};
pub use schema::{create_database, create_schema};
