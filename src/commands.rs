use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use atlas_grid::{CoordinateMapper, GpsPoint, PlanePoint, SearchQuery, ShipPath, WorldPoint, ship_path_curve};
use tracing::{debug, info, warn};

const UNAVAILABLE: &str = "Unavailable";

pub fn search(mapper: &CoordinateMapper, text: &str) -> Result<()> {
    let query = SearchQuery::parse(text);
    debug!(?query, "Parsed search");

    match &query {
        SearchQuery::Empty => println!("empty query"),
        SearchQuery::Text(text) => println!("text search: {text}"),
        SearchQuery::Teleport { .. } | SearchQuery::Coordinates(_) => match mapper.locate(&query) {
            Some(point) => print_position(mapper, point),
            None => println!("position: {UNAVAILABLE}"),
        },
    }
    Ok(())
}

pub fn locate(mapper: &CoordinateMapper, x: f64, y: f64) -> Result<()> {
    let plane = PlanePoint::new(x, y);

    match mapper.cursor_position(plane) {
        Some(gps) => println!("gps:      {gps}"),
        None => println!("gps:      {UNAVAILABLE}"),
    }
    match mapper.teleport_command(plane) {
        Some(cmd) => println!("teleport: {cmd}"),
        None => println!("teleport: {UNAVAILABLE}"),
    }
    Ok(())
}

pub fn cell(mapper: &CoordinateMapper, cell: &str, local_x: f64, local_y: f64) -> Result<()> {
    let (column, row) = parse_cell(cell)?;

    match mapper.grid_command_to_world(column, row, local_x, local_y) {
        Some(point) => print_position(mapper, point),
        None => println!("cell {cell} is not on the grid"),
    }
    Ok(())
}

pub fn engine(mapper: &CoordinateMapper, x: f64, y: f64) -> Result<()> {
    let display = mapper.engine_to_display(WorldPoint::new(x, y));
    println!("display:  {display}");
    Ok(())
}

pub fn ship_paths(mapper: &CoordinateMapper, file: &Path) -> Result<()> {
    let raw = fs::read_to_string(file)
        .with_context(|| format!("reading ship paths from {}", file.display()))?;
    let paths: Vec<ShipPath> =
        serde_json::from_str(&raw).with_context(|| format!("parsing {}", file.display()))?;
    info!(count = paths.len(), "Loaded ship paths");

    for (i, path) in paths.iter().enumerate() {
        if path.nodes.is_empty() {
            warn!(index = i, class = %path.auto_spawn_ship_class, "Ship path has no nodes");
        }
        let kind = if path.is_ghost_ship() { "ghost" } else { "ship" };
        let curve: Vec<String> = ship_path_curve(path, mapper.engine())
            .iter()
            .map(ToString::to_string)
            .collect();
        println!("{i} {kind} {}: {}", path.auto_spawn_ship_class, curve.join(" "));
    }
    Ok(())
}

fn print_position(mapper: &CoordinateMapper, gps: GpsPoint) {
    let display = mapper.gps_to_display(gps);
    println!("gps:      {gps}");
    println!("display:  {display}");
    match mapper.teleport_command(display.to_plane()) {
        Some(cmd) => println!("teleport: {cmd}"),
        None => println!("teleport: {UNAVAILABLE}"),
    }
}

/// Splits a cell name such as `C4` into its column letter and row.
fn parse_cell(cell: &str) -> Result<(char, u32)> {
    let mut chars = cell.trim().chars();
    let column = chars
        .next()
        .filter(char::is_ascii_alphabetic)
        .with_context(|| format!("cell {cell:?} must start with a column letter"))?;
    let row = chars
        .as_str()
        .parse()
        .with_context(|| format!("cell {cell:?} must end with a row number"))?;
    Ok((column, row))
}
