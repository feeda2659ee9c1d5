//! Command-line front end for the map coordinate tools.
//!
//! Commands:
//! - `search <query...>` - classify a search-box query and resolve it
//! - `locate <x> <y>` - cursor readout and teleport command for a map-plane position
//! - `cell <cell> <local_x> <local_y>` - teleport address to gameplay and display coordinates
//! - `engine <x> <y>` - engine coordinates to display space
//! - `ship-paths <file>` - display-space curves for a ship path JSON file
mod commands;
mod settings;

use anyhow::Result;
use atlas_grid::CoordinateMapper;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{Level, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "atlas-map")]
#[command(about = "Coordinate and grid-address tools for the tiled world map")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, default_value = settings::DEFAULT_CONFIG_PATH, global = true)]
    config: String,

    /// Verbose logging (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a search-box query and resolve the position it names
    Search {
        /// Query text, e.g. `cheat TP C4 100 -200 30000` or `12.5, -40`
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true, trailing_var_arg = true)]
        query: Vec<String>,
    },
    /// Resolve a map-plane position as reported by a click
    Locate {
        /// Distance from the left map edge, in display units
        #[arg(allow_hyphen_values = true)]
        x: f64,
        /// Distance from the top map edge, in display units
        #[arg(allow_hyphen_values = true)]
        y: f64,
    },
    /// Convert a teleport cell and in-cell offsets to coordinates
    Cell {
        /// Cell name such as `C4`
        cell: String,
        /// Horizontal in-cell offset
        #[arg(allow_hyphen_values = true)]
        local_x: f64,
        /// Vertical in-cell offset
        #[arg(allow_hyphen_values = true)]
        local_y: f64,
    },
    /// Project engine coordinates into display space
    Engine {
        /// Engine x
        #[arg(allow_hyphen_values = true)]
        x: f64,
        /// Engine y
        #[arg(allow_hyphen_values = true)]
        y: f64,
    },
    /// Print display-space curves for a ship path JSON file
    ShipPaths {
        /// Path to a JSON array of ship paths
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .init();

    let settings = settings::load_settings(&cli.config)?;
    let mapper = CoordinateMapper::new(settings.grid)?;
    info!(
        servers_x = mapper.config().servers_x,
        servers_y = mapper.config().servers_y,
        grid_size = mapper.config().grid_size,
        "Grid loaded"
    );

    match cli.command {
        Commands::Search { query } => commands::search(&mapper, &query.join(" ")),
        Commands::Locate { x, y } => commands::locate(&mapper, x, y),
        Commands::Cell {
            cell,
            local_x,
            local_y,
        } => commands::cell(&mapper, &cell, local_x, local_y),
        Commands::Engine { x, y } => commands::engine(&mapper, x, y),
        Commands::ShipPaths { file } => commands::ship_paths(&mapper, &file),
    }
}
