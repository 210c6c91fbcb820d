//! Text reports for class overviews and class details.
//!
//! Both renderers are pure: they build the full report as a `String` and
//! leave writing it out to the caller.

use crate::types::{ClassDetail, ClassLookup, OverviewRow};
use crate::wrap::{wrap, WrapOptions};

/// Maximum line width for wrapped output.
pub const WRAP_WIDTH: usize = 72;

/// Continuation lines of an overview row line up under the title column.
const TITLE_COLUMN: usize = 23;

const OVERVIEW_HEADER: &str = "ClsId Dept CrsNum Area Title";
const OVERVIEW_UNDERLINE: &str = "----- ---- ------ ---- -----";

// ---------------------------------------------------------------------------
// Overview table
// ---------------------------------------------------------------------------

/// Render the overview table, or an empty string when there are no rows.
pub fn render_overviews(rows: &[OverviewRow]) -> String {
    if rows.is_empty() {
        return String::new();
    }

    let options = WrapOptions::new(WRAP_WIDTH).subsequent_indent(" ".repeat(TITLE_COLUMN));

    let mut out = String::new();
    push_line(&mut out, OVERVIEW_HEADER);
    push_line(&mut out, OVERVIEW_UNDERLINE);
    for row in rows {
        for line in wrap(&overview_line(row), &options) {
            push_line(&mut out, &line);
        }
    }
    out
}

/// Format one row with fixed minimum column widths.
pub fn overview_line(row: &OverviewRow) -> String {
    format!(
        "{:>5} {:<4} {:<6} {:<4} {}",
        row.class_id,
        row.dept,
        row.course_num,
        or_empty(&row.area),
        or_empty(&row.title),
    )
}

// ---------------------------------------------------------------------------
// Detail record
// ---------------------------------------------------------------------------

/// Render the detail report, or `None` if the class was not found.
pub fn render_details(lookup: &ClassLookup) -> Option<String> {
    lookup.found().map(detail_report)
}

fn detail_report(detail: &ClassDetail) -> String {
    let class = &detail.class;
    let mut out = String::new();

    push_line(&mut out, "Class Details");
    push_line(&mut out, "-------------");
    push_line(&mut out, &format!("Class Id: {}", class.class_id));
    push_line(&mut out, &format!("Course Id: {}", class.course_id));
    push_line(&mut out, &format!("Days: {}", or_empty(&class.days)));
    push_line(&mut out, &format!("Start time: {}", or_empty(&class.start_time)));
    push_line(&mut out, &format!("End time: {}", or_empty(&class.end_time)));
    push_line(&mut out, &format!("Building: {}", or_empty(&class.building)));
    push_line(&mut out, &format!("Room: {}", or_empty(&class.room)));
    push_line(&mut out, "--------------");

    push_line(&mut out, "Course Details");
    push_line(&mut out, "--------------");
    for listing in &detail.crosslistings {
        push_line(
            &mut out,
            &format!("Dept and Number: {} {}", listing.dept, listing.course_num),
        );
    }
    push_line(&mut out, &format!("Area: {}", or_empty(&class.area)));
    push_line(&mut out, &format!("Title: {}", or_empty(&class.title)));

    if let Some(paragraph) = wrapped_paragraph(&class.description) {
        push_line(&mut out, &format!("Description: {}", paragraph));
    }
    if let Some(paragraph) = wrapped_paragraph(&class.prerequisites) {
        push_line(&mut out, &format!("Prerequisites: {}", paragraph));
    }

    for name in &detail.instructors {
        push_line(&mut out, &format!("Professor: {}", name));
    }

    out
}

/// Wrap a nullable paragraph; continuation lines carry no indent.
fn wrapped_paragraph(text: &Option<String>) -> Option<String> {
    let text = text.as_deref().filter(|t| !t.is_empty())?;
    Some(wrap(text, &WrapOptions::new(WRAP_WIDTH)).join("\n"))
}

fn or_empty(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("")
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}
