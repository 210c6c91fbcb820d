use std::io::Write;

use registrar_catalog::render_details;
use registrar_db::{class_details, Database};

use crate::CliError;

/// Look up one class and write its detail report to `out`.
pub fn run_details(db: &Database, class_id: &str, out: &mut impl Write) -> Result<(), CliError> {
    let lookup = class_details(db, class_id)?;
    let report = render_details(&lookup).ok_or_else(|| CliError::class_not_found(class_id))?;

    out.write_all(report.as_bytes())?;
    out.flush()?;
    Ok(())
}
