//! regoverviews: show overviews of classes.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use registrar_cli::commands::run_overviews;
use registrar_cli::settings::resolve_database_path;
use registrar_cli::{logging, program_name, report_failure};
use registrar_db::{Database, OverviewFilter};

#[derive(Parser)]
#[command(name = "regoverviews")]
#[command(about = "Registrar application: show overviews of classes.", long_about = None)]
struct Cli {
    /// show only those classes whose department contains dept
    #[arg(short = 'd', value_name = "dept")]
    dept: Option<String>,

    /// show only those classes whose course number contains num
    #[arg(short = 'n', value_name = "num")]
    num: Option<String>,

    /// show only those classes whose distribution area contains area
    #[arg(short = 'a', value_name = "area")]
    area: Option<String>,

    /// show only those classes whose course title contains title
    #[arg(short = 't', value_name = "title")]
    title: Option<String>,

    /// Registrar store to read (overrides REGISTRAR_DB and settings.toml)
    #[arg(long, value_name = "path")]
    database: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init();

    let (db_path, _) = resolve_database_path(cli.database);
    let db = Database::new(db_path);
    let filter = OverviewFilter::from_options(cli.dept, cli.num, cli.area, cli.title);

    match run_overviews(&db, &filter, &mut std::io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report_failure(&program_name("regoverviews"), &e),
    }
}
