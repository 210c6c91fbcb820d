//! Parameterized filter predicates for the overview search.
//!
//! Each supplied filter contributes one fixed SQL fragment with a `?`
//! placeholder plus the value bound to it. User text only ever travels as a
//! bound value, never as part of the statement.

/// Escape character used in every `LIKE` predicate.
const LIKE_ESCAPE: char = '\\';

/// One case-insensitive "contains" predicate over a store column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predicate {
    column: &'static str,
    pattern: String,
}

impl Predicate {
    fn contains(column: &'static str, needle: &str) -> Self {
        Self {
            column,
            pattern: format!("%{}%", escape_like(&needle.to_lowercase())),
        }
    }

    /// The SQL fragment, with a single anonymous placeholder.
    pub fn clause(&self) -> String {
        format!("LOWER({}) LIKE ? ESCAPE '{}'", self.column, LIKE_ESCAPE)
    }

    pub fn column(&self) -> &'static str {
        self.column
    }
}

/// Optional filters for [`search_overviews`](crate::search_overviews).
///
/// Absent or empty filters place no constraint; supplied filters combine
/// with `AND`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverviewFilter {
    dept: Option<String>,
    course_num: Option<String>,
    area: Option<String>,
    title: Option<String>,
}

impl OverviewFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from the four optional search inputs.
    pub fn from_options(
        dept: Option<String>,
        course_num: Option<String>,
        area: Option<String>,
        title: Option<String>,
    ) -> Self {
        Self {
            dept: non_empty(dept),
            course_num: non_empty(course_num),
            area: non_empty(area),
            title: non_empty(title),
        }
    }

    pub fn dept(mut self, dept: impl Into<String>) -> Self {
        self.dept = non_empty(Some(dept.into()));
        self
    }

    pub fn course_num(mut self, num: impl Into<String>) -> Self {
        self.course_num = non_empty(Some(num.into()));
        self
    }

    pub fn area(mut self, area: impl Into<String>) -> Self {
        self.area = non_empty(Some(area.into()));
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = non_empty(Some(title.into()));
        self
    }

    /// Predicates for every supplied filter, in a fixed order.
    pub fn predicates(&self) -> Vec<Predicate> {
        [
            ("cr.dept", &self.dept),
            ("cr.coursenum", &self.course_num),
            ("co.area", &self.area),
            ("co.title", &self.title),
        ]
        .into_iter()
        .filter_map(|(column, value)| value.as_deref().map(|v| Predicate::contains(column, v)))
        .collect()
    }

    /// `WHERE ...` clause joining all predicates, or an empty string.
    pub fn where_clause(&self) -> String {
        let clauses: Vec<String> = self.predicates().iter().map(Predicate::clause).collect();
        if clauses.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", clauses.join(" AND "))
        }
    }

    /// Bound values, in placeholder order.
    pub fn bound_values(&self) -> Vec<String> {
        self.predicates().into_iter().map(|p| p.pattern).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.dept.is_none() && self.course_num.is_none() && self.area.is_none() && self.title.is_none()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Escape `LIKE` wildcards so the needle matches literally.
fn escape_like(needle: &str) -> String {
    let mut out = String::with_capacity(needle.len());
    for c in needle.chars() {
        if c == '%' || c == '_' || c == LIKE_ESCAPE {
            out.push(LIKE_ESCAPE);
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filter_has_no_where_clause() {
        let filter = OverviewFilter::new();
        assert!(filter.is_empty());
        assert_eq!(filter.where_clause(), "");
        assert!(filter.bound_values().is_empty());
    }

    #[test]
    fn empty_strings_are_ignored() {
        let filter = OverviewFilter::new().dept("");
        assert!(filter.is_empty());
        let filter = OverviewFilter::from_options(Some(String::new()), None, None, None);
        assert!(filter.is_empty());
    }

    #[test]
    fn predicates_join_with_and() {
        let filter = OverviewFilter::new()
            .dept("COS")
            .title("Intro");
        assert_eq!(
            filter.where_clause(),
            "WHERE LOWER(cr.dept) LIKE ? ESCAPE '\\' AND LOWER(co.title) LIKE ? ESCAPE '\\'"
        );
        assert_eq!(filter.bound_values(), vec!["%cos%", "%intro%"]);
    }

    #[test]
    fn values_never_enter_the_statement() {
        let filter = OverviewFilter::new().title("x' OR 1=1 --");
        let clause = filter.where_clause();
        assert!(!clause.contains("OR 1=1"));
        assert_eq!(filter.bound_values(), vec!["%x' or 1=1 --%"]);
    }

    #[test]
    fn wildcards_are_escaped() {
        let filter = OverviewFilter::new().course_num("1_%\\");
        assert_eq!(filter.bound_values(), vec!["%1\\_\\%\\\\%"]);
    }

    #[test]
    fn predicate_order_is_fixed() {
        let filter = OverviewFilter::new()
            .title("t")
            .area("a")
            .course_num("n")
            .dept("d");
        let columns: Vec<&str> = filter.predicates().iter().map(Predicate::column).collect();
        assert_eq!(columns, vec!["cr.dept", "cr.coursenum", "co.area", "co.title"]);
    }

    #[test]
    fn non_ascii_filters_are_lowercased() {
        let filter = OverviewFilter::new().title("ÉCOLE Ünter");
        assert_eq!(filter.bound_values(), vec!["%école ünter%"]);
    }
}
