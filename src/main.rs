use clap::Parser;
use color_eyre::Result;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

use floor_allocation::engine::{ChartMode, Engine, Reservation, Scope, SelectionState};
use floor_allocation::export::{export_csv, export_json};
use floor_allocation::loader::{load_building, load_roster};
use floor_allocation::ui::App;

#[derive(Parser, Debug)]
#[command(name = "floor-allocation")]
#[command(about = "Floor Allocation Dashboard - building occupancy by floor")]
#[command(version)]
struct Args {
    /// Path to the floor roster JSON
    #[arg(required = true)]
    floors: PathBuf,

    /// Path to the building occupancy JSON
    #[arg(required = true)]
    building: PathBuf,

    /// Start with this floor selected instead of all floors
    #[arg(long, value_name = "NAME")]
    floor: Option<String>,

    /// Initial chart: distributed, bar or doughnut
    #[arg(long, value_name = "MODE", default_value = "distributed")]
    mode: ChartMode,

    /// Organisation holding reserved floors, shown in reserved labels
    #[arg(long, value_name = "ORG")]
    reserved_for: Option<String>,

    /// Export the floor table to CSV and exit
    #[arg(long, value_name = "FILE")]
    csv: Option<PathBuf>,

    /// Export the current aggregate to JSON and exit
    #[arg(long, value_name = "FILE")]
    json: Option<PathBuf>,

    /// Write logs to this file while the dashboard is open
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    let report_only = args.csv.is_some() || args.json.is_some();
    init_logging(args.log_file.as_deref(), !report_only)?;

    let roster = load_roster(&args.floors)?;
    let record = load_building(&args.building)?;

    let scope = args.floor.map_or(Scope::All, Scope::Floor);
    let engine = Engine::new(
        &roster,
        record,
        SelectionState::new(scope, args.mode),
        Reservation::new(args.reserved_for),
    );

    if let Some(csv_path) = &args.csv {
        export_csv(&engine, csv_path)?;
        println!("Exported to CSV: {}", csv_path.display());
    }

    if let Some(json_path) = &args.json {
        export_json(&engine, json_path)?;
        println!("Exported to JSON: {}", json_path.display());
    }

    if report_only {
        return Ok(());
    }

    let terminal = ratatui::init();
    let result = App::new(engine).run(terminal);
    ratatui::restore();
    result
}

/// The dashboard owns the terminal, so interactive runs only log to a file.
fn init_logging(log_file: Option<&Path>, interactive: bool) -> Result<()> {
    let writer = match log_file {
        Some(path) => BoxMakeWriter::new(Mutex::new(File::create(path)?)),
        None if interactive => BoxMakeWriter::new(std::io::sink),
        None => BoxMakeWriter::new(std::io::stderr),
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("floor_allocation=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(log_file.is_none())
        .init();

    Ok(())
}
