//! regdetails: show details about a class.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use registrar_cli::commands::run_details;
use registrar_cli::settings::resolve_database_path;
use registrar_cli::{logging, program_name, report_failure};
use registrar_db::Database;

#[derive(Parser)]
#[command(name = "regdetails")]
#[command(about = "Registrar application: show details about a class", long_about = None)]
struct Cli {
    /// the id of the class whose details should be shown
    classid: String,

    /// Registrar store to read (overrides REGISTRAR_DB and settings.toml)
    #[arg(long, value_name = "path")]
    database: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init();

    let (db_path, _) = resolve_database_path(cli.database);
    let db = Database::new(db_path);

    match run_details(&db, &cli.classid, &mut std::io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report_failure(&program_name("regdetails"), &e),
    }
}
