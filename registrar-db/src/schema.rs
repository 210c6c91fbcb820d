//! Registrar store layout.
//!
//! The tool itself never writes to the store. This module exists so test
//! fixtures and local sample stores can be built with the same five tables
//! the queries expect.

use std::path::Path;

use rusqlite::Connection;

use crate::error::StorageError;

/// Create all registrar tables if they don't exist.
///
/// Idempotent; safe to call on an existing store.
pub fn create_schema(conn: &Connection) -> Result<(), StorageError> {
    conn.execute_batch(SCHEMA_SQL).map_err(StorageError::query)
}

/// Create (or open) a writable store at `path` with the full layout.
pub fn create_database(path: &Path) -> Result<Connection, StorageError> {
    let conn = Connection::open(path).map_err(StorageError::open)?;
    create_schema(&conn)?;
    Ok(conn)
}

const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS courses (
    courseid INTEGER PRIMARY KEY,
    area TEXT,
    title TEXT,
    descrip TEXT,
    prereqs TEXT
);

CREATE TABLE IF NOT EXISTS classes (
    classid INTEGER PRIMARY KEY,
    courseid INTEGER NOT NULL REFERENCES courses(courseid),
    days TEXT,
    starttime TEXT,
    endtime TEXT,
    bldg TEXT,
    roomnum TEXT
);

CREATE TABLE IF NOT EXISTS crosslistings (
    courseid INTEGER NOT NULL REFERENCES courses(courseid),
    dept TEXT NOT NULL,
    coursenum TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_crosslistings_course ON crosslistings(courseid);

CREATE TABLE IF NOT EXISTS profs (
    profid INTEGER PRIMARY KEY,
    profname TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS coursesprofs (
    courseid INTEGER NOT NULL REFERENCES courses(courseid),
    profid INTEGER NOT NULL REFERENCES profs(profid)
);
CREATE INDEX IF NOT EXISTS idx_coursesprofs_course ON coursesprofs(courseid);
"#;
