//! Data model types for the course catalog.
//!
//! The store is read-only from this tool's point of view, so these are plain
//! value types with no persistence logic attached.

// ── Overview ────────────────────────────────────────────────────────────────

/// One row of a class overview search: a class seen through one of its
/// course's cross-listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverviewRow {
    pub class_id: i64,
    pub dept: String,
    pub course_num: String,
    pub area: Option<String>,
    pub title: Option<String>,
}

// ── Detail ──────────────────────────────────────────────────────────────────

/// Base class and course fields for a single class.
///
/// Scheduling fields are nullable in the store; a class with no meeting
/// pattern yet simply has them unset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassRecord {
    pub class_id: i64,
    pub course_id: i64,
    pub days: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub building: Option<String>,
    pub room: Option<String>,
    pub area: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub prerequisites: Option<String>,
}

/// A department/number pair a course is listed under.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Crosslisting {
    pub dept: String,
    pub course_num: String,
}

impl Crosslisting {
    pub fn new(dept: impl Into<String>, course_num: impl Into<String>) -> Self {
        Self {
            dept: dept.into(),
            course_num: course_num.into(),
        }
    }
}

/// Everything known about a class: its base record, every cross-listing of
/// its course, and the distinct instructors of its course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDetail {
    pub class: ClassRecord,
    /// Sorted by department, then course number.
    pub crosslistings: Vec<Crosslisting>,
    /// Distinct names, sorted alphabetically.
    pub instructors: Vec<String>,
}

/// Outcome of looking a class up by id.
///
/// An unknown id is an ordinary outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassLookup {
    Found(ClassDetail),
    NotFound,
}

impl ClassLookup {
    /// The detail record, if the class exists.
    pub fn found(&self) -> Option<&ClassDetail> {
        match self {
            ClassLookup::Found(detail) => Some(detail),
            ClassLookup::NotFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, ClassLookup::Found(_))
    }
}

