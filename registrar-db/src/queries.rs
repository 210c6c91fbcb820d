//! Read queries for the registrar store.
//!
//! Provides the filtered class overview search and the three-step class
//! detail lookup.

use registrar_catalog::{ClassDetail, ClassLookup, ClassRecord, Crosslisting, OverviewRow};
use rusqlite::types::ValueRef;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension};

use crate::connection::Database;
use crate::error::StorageError;
use crate::filter::OverviewFilter;

// ── Overview Search ─────────────────────────────────────────────────────────

/// Search class overviews, one row per class and cross-listing.
///
/// Rows are distinct and ordered by department, course number, then class
/// id. No matches is an empty vector, not an error.
pub fn search_overviews(
    db: &Database,
    filter: &OverviewFilter,
) -> Result<Vec<OverviewRow>, StorageError> {
    let sql = format!(
        "SELECT DISTINCT cl.classid, cr.dept, cr.coursenum, co.area, co.title
         FROM classes cl
         JOIN courses co ON cl.courseid = co.courseid
         JOIN crosslistings cr ON co.courseid = cr.courseid
         {}
         ORDER BY cr.dept ASC, cr.coursenum ASC, cl.classid ASC",
        filter.where_clause()
    );
    let values = filter.bound_values();
    log::debug!("Overview search with {} filter(s)", values.len());

    db.with_connection(|conn| {
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map(params_from_iter(values.iter()), |row| {
            Ok(OverviewRow {
                class_id: row.get(0)?,
                dept: text_column(row, 1)?.unwrap_or_default(),
                course_num: text_column(row, 2)?.unwrap_or_default(),
                area: text_column(row, 3)?,
                title: text_column(row, 4)?,
            })
        })?;
        rows.collect::<Result<Vec<_>, _>>()
    })
}

// ── Class Detail ────────────────────────────────────────────────────────────

/// Look up a class and everything about its course.
///
/// The id is bound as text and is not validated; an id that matches no
/// class yields [`ClassLookup::NotFound`]. All three statements share one
/// connection, and a fault in any of them fails the whole lookup.
pub fn class_details(db: &Database, class_id: &str) -> Result<ClassLookup, StorageError> {
    log::debug!("Class detail lookup for '{}'", class_id);
    db.with_connection(|conn| {
        let Some(class) = find_class(conn, class_id)? else {
            return Ok(ClassLookup::NotFound);
        };
        let crosslistings = crosslistings_for_course(conn, class.course_id)?;
        let instructors = instructors_for_course(conn, class.course_id)?;
        Ok(ClassLookup::Found(ClassDetail {
            class,
            crosslistings,
            instructors,
        }))
    })
}

fn find_class(conn: &Connection, class_id: &str) -> rusqlite::Result<Option<ClassRecord>> {
    conn.query_row(
        "SELECT cl.classid, cl.courseid, cl.days, cl.starttime, cl.endtime,
                cl.bldg, cl.roomnum, co.area, co.title, co.descrip, co.prereqs
         FROM classes cl
         JOIN courses co ON cl.courseid = co.courseid
         WHERE cl.classid = ?1",
        params![class_id],
        |row| {
            Ok(ClassRecord {
                class_id: row.get(0)?,
                course_id: row.get(1)?,
                days: text_column(row, 2)?,
                start_time: text_column(row, 3)?,
                end_time: text_column(row, 4)?,
                building: text_column(row, 5)?,
                room: text_column(row, 6)?,
                area: text_column(row, 7)?,
                title: text_column(row, 8)?,
                description: text_column(row, 9)?,
                prerequisites: text_column(row, 10)?,
            })
        },
    )
    .optional()
}

fn crosslistings_for_course(conn: &Connection, course_id: i64) -> rusqlite::Result<Vec<Crosslisting>> {
    let mut stmt = conn.prepare(
        "SELECT dept, coursenum
         FROM crosslistings
         WHERE courseid = ?1
         ORDER BY dept ASC, coursenum ASC",
    )?;
    let rows = stmt.query_map(params![course_id], |row| {
        Ok(Crosslisting {
            dept: text_column(row, 0)?.unwrap_or_default(),
            course_num: text_column(row, 1)?.unwrap_or_default(),
        })
    })?;
    rows.collect()
}

fn instructors_for_course(conn: &Connection, course_id: i64) -> rusqlite::Result<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT DISTINCT p.profname
         FROM coursesprofs cp
         JOIN profs p ON cp.profid = p.profid
         WHERE cp.courseid = ?1
         ORDER BY p.profname ASC",
    )?;
    let rows = stmt.query_map(params![course_id], |row| {
        Ok(text_column(row, 0)?.unwrap_or_default())
    })?;
    rows.collect()
}

// ── Row Mapping Helpers ─────────────────────────────────────────────────────

/// Read a column as display text, accepting any stored type.
///
/// Course numbers and room numbers are sometimes stored as numbers. Reals
/// keep their fractional part, so a stored `1.0` reads back as "1.0".
fn text_column(row: &rusqlite::Row<'_>, idx: usize) -> rusqlite::Result<Option<String>> {
    Ok(match row.get_ref(idx)? {
        ValueRef::Null => None,
        ValueRef::Integer(i) => Some(i.to_string()),
        ValueRef::Real(f) => Some(format!("{:?}", f)),
        ValueRef::Text(bytes) | ValueRef::Blob(bytes) => {
            Some(String::from_utf8_lossy(bytes).into_owned())
        }
    })
}
