use atlas_grid::{CoordinateMapper, GpsPoint, GridConfig, PlanePoint, SearchQuery};

fn main() {
    // A 7x7 grid of 1.4M-unit cells.
    let config = match GridConfig::new(7, 7, 1_400_000.0) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid grid: {}", e);
            return;
        }
    };
    let mapper = match CoordinateMapper::new(config) {
        Ok(mapper) => mapper,
        Err(e) => {
            eprintln!("Failed to build mapper: {}", e);
            return;
        }
    };

    println!("Cell width: {:.3} display units", mapper.precision());

    // Walk a few clicks across the map, including two that fall off the grid.
    for (x, y) in [(0.5, 0.5), (128.0, 128.0), (200.0, 30.0), (-4.0, 10.0), (256.0, 256.0)] {
        let plane = PlanePoint::new(x, y);
        let gps = mapper
            .cursor_position(plane)
            .map_or("Unavailable".to_string(), |p| p.to_string());
        let tp = mapper
            .teleport_command(plane)
            .map_or("Click map for TP command".to_string(), |c| c.to_string());
        println!("({:>6.1}, {:>6.1})  gps: {:<18} {}", x, y, gps, tp);
    }

    // Round-trip a gameplay position through its teleport command.
    let start = GpsPoint::new(-41.37, 22.8);
    let plane = mapper.gps_to_display(start).to_plane();
    if let Some(cmd) = mapper.teleport_command(plane) {
        let query = SearchQuery::parse(&cmd.to_string());
        println!("\n{} -> {} -> {:?}", start, cmd, mapper.locate(&query));
    }
}
