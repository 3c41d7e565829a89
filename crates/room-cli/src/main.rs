//! `roomfinder` CLI — query room availability and weekly room schedules.
//!
//! Loads the room catalog (`building.json`) and the occupancy log
//! (`schedule.jsonl`) once, runs a single query against the resulting
//! snapshot, and prints the result.
//!
//! ## Usage
//!
//! ```sh
//! # Which rooms of building B1 are free 09:30-10:30 on 2025-09-15?
//! roomfinder available --building-id B1 --date 2025-09-15 --start 09:30 --end 10:30
//!
//! # Same, overriding the catalog name the building id resolves to
//! roomfinder available --building-id B1 --building-name "Hall A" \
//!     --date 2025-09-15 --start 09:30 --end 10:30
//!
//! # Week containing 2025-09-17 for room 101, as JSON
//! roomfinder --format json week --building-id B1 --room 101 --date 2025-09-17
//!
//! # Building ids and names known from the occupancy log
//! roomfinder buildings
//!
//! # Read data from another directory
//! ROOMFINDER_DATA_DIR=/srv/rooms roomfinder buildings
//! ```

mod render;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use room_engine::time::parse_date;
use room_engine::{BuildingDirectory, OccupancyIndex, Query, RoomCatalog, Snapshot};
use tracing::debug;
use tracing_subscriber::EnvFilter;

const CATALOG_FILE: &str = "building.json";
const SCHEDULE_FILE: &str = "schedule.jsonl";

#[derive(Parser)]
#[command(
    name = "roomfinder",
    version,
    about = "Find free rooms and weekly room schedules"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Directory holding building.json and schedule.jsonl
    #[arg(long, env = "ROOMFINDER_DATA_DIR", default_value = "data", global = true)]
    data_dir: PathBuf,

    /// Room catalog file (overrides <data-dir>/building.json)
    #[arg(long, env = "ROOMFINDER_CATALOG", global = true)]
    catalog: Option<PathBuf>,

    /// Occupancy log file (overrides <data-dir>/schedule.jsonl)
    #[arg(long, env = "ROOMFINDER_SCHEDULE", global = true)]
    schedule: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text, global = true)]
    format: Format,

    /// Log engine activity to stderr (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// List the rooms of a building with their availability for a time window
    Available {
        /// Building id as used in the occupancy log
        #[arg(long)]
        building_id: String,
        /// Catalog name of the building (defaults to the name the log carries)
        #[arg(long)]
        building_name: Option<String>,
        /// Date, YYYY-MM-DD
        #[arg(long)]
        date: String,
        /// Window start, HH:MM
        #[arg(long)]
        start: String,
        /// Window end, HH:MM
        #[arg(long)]
        end: String,
    },
    /// Show one room's bookings for the Monday-to-Sunday week containing a date
    Week {
        /// Building id as used in the occupancy log
        #[arg(long)]
        building_id: String,
        /// Room name
        #[arg(long)]
        room: String,
        /// Any date in the week, YYYY-MM-DD
        #[arg(long)]
        date: String,
    },
    /// List building ids and names known from the occupancy log
    Buildings,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let catalog_path = cli
        .catalog
        .clone()
        .unwrap_or_else(|| cli.data_dir.join(CATALOG_FILE));
    let schedule_path = cli
        .schedule
        .clone()
        .unwrap_or_else(|| cli.data_dir.join(SCHEDULE_FILE));

    let output = match cli.command {
        Commands::Available {
            building_id,
            building_name,
            date,
            start,
            end,
        } => {
            // Validate the query before touching the data files.
            let query =
                Query::parse(&building_id, &date, &start, &end).context("Invalid query")?;

            let catalog = load_catalog(&catalog_path)?;
            let index = load_index(&schedule_path)?;
            let directory = BuildingDirectory::from_records(index.records());
            let snapshot = Snapshot::new(catalog, index, directory);

            let report = match building_name.as_deref() {
                Some(name) => snapshot.resolve_as(name, &query),
                None => snapshot.resolve(&query),
            };

            match cli.format {
                Format::Json => serde_json::to_string_pretty(&report)?,
                Format::Text => render::availability(&report),
            }
        }
        Commands::Week {
            building_id,
            room,
            date,
        } => {
            let anchor = parse_date(&date).context("Invalid date")?;
            let index = load_index(&schedule_path)?;
            let view = room_engine::week_view(&index, &room, &building_id, anchor);

            match cli.format {
                Format::Json => serde_json::to_string_pretty(&view)?,
                Format::Text => render::week(&view),
            }
        }
        Commands::Buildings => {
            let index = load_index(&schedule_path)?;
            let directory = BuildingDirectory::from_records(index.records());

            match cli.format {
                Format::Json => serde_json::to_string_pretty(&directory)?,
                Format::Text => render::buildings(&directory),
            }
        }
    };

    println!("{}", output);
    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_catalog(path: &Path) -> Result<RoomCatalog> {
    let text = read_file(path)?;
    let catalog = RoomCatalog::from_json(&text)
        .with_context(|| format!("Failed to load catalog: {}", path.display()))?;
    debug!(path = %path.display(), buildings = catalog.len(), "catalog loaded");
    Ok(catalog)
}

fn load_index(path: &Path) -> Result<OccupancyIndex> {
    let text = read_file(path)?;
    let index = OccupancyIndex::from_jsonl(&text)
        .with_context(|| format!("Failed to load occupancy log: {}", path.display()))?;
    debug!(path = %path.display(), records = index.len(), "occupancy log loaded");
    Ok(index)
}

fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
}
