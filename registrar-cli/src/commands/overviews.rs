use std::io::Write;

use registrar_catalog::render_overviews;
use registrar_db::{search_overviews, Database, OverviewFilter};

use crate::CliError;

/// Search class overviews and write the table to `out`.
///
/// Writes nothing at all when no class matches.
pub fn run_overviews(
    db: &Database,
    filter: &OverviewFilter,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let rows = search_overviews(db, filter)?;
    log::debug!("{} overview row(s) matched", rows.len());

    out.write_all(render_overviews(&rows).as_bytes())?;
    out.flush()?;
    Ok(())
}
