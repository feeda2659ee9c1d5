#![warn(missing_docs)]
//! The coordinate mapper for one server grid.

use atlas_geometry::{rescale, unrescale};
use tracing::trace;

use crate::error::GridError;
use crate::map::{ColumnTable, DisplayPoint, GpsPoint, GridAddress, GridConfig, PlanePoint, WorldPoint};
use crate::projection::{EngineProjection, GpsProjection};
use crate::search::SearchQuery;
use crate::teleport::{GridCommand, LOCAL_MAX, LOCAL_MIN, TeleportCommand};

/// Converts between engine coordinates, gameplay coordinates, the display
/// space and teleport grid addresses for one server grid.
///
/// The mapper is immutable once built and every method is a pure function
/// of its arguments and the grid configuration. Positions outside the grid
/// never produce errors; they come back as `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateMapper {
    config: GridConfig,
    columns: ColumnTable,
    gps: GpsProjection,
    engine: EngineProjection,
}

impl CoordinateMapper {
    /// Creates a mapper for the given grid.
    ///
    /// # Arguments
    /// * `config` - Grid dimensions; validated here since it may come from deserialization
    ///
    /// # Returns
    /// * `Result<Self, GridError>` - The mapper or the configuration error
    pub fn new(config: GridConfig) -> Result<Self, GridError> {
        config.validate()?;
        Ok(CoordinateMapper {
            columns: ColumnTable::new(config.servers_x as usize),
            gps: GpsProjection,
            engine: EngineProjection::new(&config),
            config,
        })
    }

    /// Grid configuration this mapper was built from.
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Column lettering for this grid.
    pub fn columns(&self) -> &ColumnTable {
        &self.columns
    }

    /// The engine-coordinate projection for this grid.
    pub fn engine(&self) -> &EngineProjection {
        &self.engine
    }

    /// Width and height of one grid cell in display units.
    pub fn precision(&self) -> f64 {
        self.config.precision()
    }

    /// Projects gameplay coordinates into display space.
    pub fn gps_to_display(&self, p: GpsPoint) -> DisplayPoint {
        self.gps.to_display(p)
    }

    /// Projects engine coordinates into display space.
    pub fn engine_to_display(&self, p: WorldPoint) -> DisplayPoint {
        self.engine.to_display(p)
    }

    /// Looks up a cell by column letter and row number.
    ///
    /// The letter is matched case-insensitively. Returns `None` for letters
    /// past the grid width and rows outside `[1, servers_y]`.
    pub fn address(&self, column: char, row: u32) -> Option<GridAddress> {
        let index = self.columns.index_of(column)?;
        if row == 0 || row > self.config.servers_y {
            return None;
        }
        let letter = self.columns.letter(index as i64)?;
        Some(GridAddress::new(letter, index, row))
    }

    /// Finds the cell containing a map-plane position.
    ///
    /// Non-finite positions are off-grid.
    pub fn address_at(&self, plane: PlanePoint) -> Option<GridAddress> {
        if !plane.x.is_finite() || !plane.y.is_finite() {
            return None;
        }

        let precision = self.precision();
        let column_index = (plane.x / precision).floor();
        let row = (plane.y / precision).floor() + 1.0;

        let Some(letter) = self.columns.letter(column_index as i64) else {
            trace!(x = plane.x, y = plane.y, column_index, "Column outside grid");
            return None;
        };
        if row < 1.0 || row > self.config.servers_y as f64 {
            trace!(x = plane.x, y = plane.y, row, "Row outside grid");
            return None;
        }

        Some(GridAddress::new(letter, column_index as usize, row as u32))
    }

    /// Returns `true` if the map-plane position lies inside a grid cell.
    pub fn is_on_grid(&self, plane: PlanePoint) -> bool {
        self.address_at(plane).is_some()
    }

    /// Resolves a map-plane position into a cell and in-cell teleport offsets.
    ///
    /// The offsets are the position's remainder within its cell, rescaled
    /// from `[0, precision]` into `[-700000, 700000]` and rounded half away
    /// from zero. They are computed even when the position is off-grid, in
    /// which case `address` is `None`.
    pub fn display_to_grid_command(&self, plane: PlanePoint) -> GridCommand {
        let precision = self.precision();
        let to_local =
            |v: f64| rescale(v % precision, LOCAL_MIN, LOCAL_MAX, 0.0, precision).round() as i64;

        GridCommand {
            address: self.address_at(plane),
            local_x: to_local(plane.x),
            local_y: to_local(plane.y),
        }
    }

    /// Converts a teleport address back into gameplay coordinates.
    ///
    /// # Arguments
    /// * `column` - Column letter, any case
    /// * `row` - One-based row number
    /// * `local_x`, `local_y` - In-cell offsets in the teleport range
    ///
    /// # Returns
    /// * `Option<GpsPoint>` - The gameplay position, or `None` if the cell is not on the grid
    pub fn grid_command_to_world(
        &self,
        column: char,
        row: u32,
        local_x: f64,
        local_y: f64,
    ) -> Option<GpsPoint> {
        let Some(address) = self.address(column, row) else {
            trace!(%column, row, "Teleport cell outside grid");
            return None;
        };
        Some(self.address_to_world(address, local_x, local_y))
    }

    /// Converts an on-grid address and offsets into gameplay coordinates.
    pub fn address_to_world(&self, address: GridAddress, local_x: f64, local_y: f64) -> GpsPoint {
        let precision = self.precision();
        let cell_x = unrescale(local_x, LOCAL_MIN, LOCAL_MAX, 0.0, precision);
        let cell_y = unrescale(local_y, LOCAL_MIN, LOCAL_MAX, 0.0, precision);

        let plane = PlanePoint::new(
            precision * address.column_index() as f64 + cell_x,
            precision * (address.row() - 1) as f64 + cell_y,
        );
        self.gps.plane_to_gps(plane)
    }

    /// Converts a teleport address into the display point to center a view on.
    pub fn grid_command_to_display(
        &self,
        column: char,
        row: u32,
        local_x: f64,
        local_y: f64,
    ) -> Option<DisplayPoint> {
        self.grid_command_to_world(column, row, local_x, local_y)
            .map(|p| self.gps_to_display(p))
    }

    /// Gameplay coordinates under the cursor, or `None` off-grid.
    pub fn cursor_position(&self, plane: PlanePoint) -> Option<GpsPoint> {
        if !self.is_on_grid(plane) {
            return None;
        }
        Some(self.gps.plane_to_gps(plane))
    }

    /// Teleport command for a clicked position, or `None` off-grid.
    pub fn teleport_command(&self, plane: PlanePoint) -> Option<TeleportCommand> {
        self.display_to_grid_command(plane).into_teleport()
    }

    /// Resolves a parsed search query to the gameplay position it names.
    ///
    /// Text and empty queries, teleport commands naming unknown cells, and
    /// results with non-finite coordinates all resolve to `None`.
    pub fn locate(&self, query: &SearchQuery) -> Option<GpsPoint> {
        let point = match query {
            SearchQuery::Teleport {
                column,
                row,
                local_x,
                local_y,
            } => {
                let mut letters = column.chars();
                let (Some(letter), None) = (letters.next(), letters.next()) else {
                    trace!(%column, "Teleport column is not a single letter");
                    return None;
                };
                self.grid_command_to_world(letter, *row, *local_x, *local_y)?
            }
            SearchQuery::Coordinates(point) => *point,
            SearchQuery::Text(_) | SearchQuery::Empty => return None,
        };

        point.is_finite().then_some(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    const EPSILON: f64 = 1e-9;

    fn mapper(servers_x: u32, servers_y: u32) -> CoordinateMapper {
        CoordinateMapper::new(GridConfig::new(servers_x, servers_y, 1_400_000.0).unwrap()).unwrap()
    }

    #[test]
    fn test_mapper_rejects_invalid_config() {
        let config = GridConfig {
            servers_x: 0,
            servers_y: 3,
            grid_size: 1.0,
        };
        assert!(matches!(CoordinateMapper::new(config), Err(GridError::InvalidServerCount(_))));
    }

    #[test]
    fn test_first_cell_on_seven_by_seven() {
        let m = mapper(7, 7);
        assert!((m.precision() - 36.571_428_571_428_57).abs() < 1e-9);

        let cmd = m.display_to_grid_command(PlanePoint::new(0.5, 0.5));
        let address = cmd.address.unwrap();
        assert_eq!(address.column(), 'A');
        assert_eq!(address.row(), 1);
        assert_eq!(cmd.label().as_deref(), Some("A1"));
    }

    #[test]
    fn test_far_corner_is_off_grid() {
        let m = mapper(7, 7);
        let cmd = m.display_to_grid_command(PlanePoint::new(256.0, 256.0));
        assert_eq!(cmd.address, None);
        assert_eq!(cmd.label(), None);
        assert!(!m.is_on_grid(PlanePoint::new(256.0, 256.0)));
    }

    #[test]
    fn test_address_labels_across_grid() {
        let m = mapper(7, 7);
        let p = m.precision();
        let at = |col: f64, row: f64| {
            m.address_at(PlanePoint::new(p * col + 1.0, p * row + 1.0))
                .map(|a| a.to_string())
        };
        assert_eq!(at(2.0, 3.0).as_deref(), Some("C4"));
        assert_eq!(at(6.0, 6.0).as_deref(), Some("G7"));
        assert_eq!(at(0.0, 6.0).as_deref(), Some("A7"));
        assert_eq!(at(6.0, 0.0).as_deref(), Some("G1"));
    }

    #[test]
    fn test_is_on_grid_bounds() {
        let m = mapper(5, 3);
        let p = m.precision();

        assert!(m.is_on_grid(PlanePoint::new(0.0, 0.0)));
        assert!(m.is_on_grid(PlanePoint::new(255.9, p * 3.0 - 0.01)));

        // Negative column index.
        assert!(!m.is_on_grid(PlanePoint::new(-0.01, 10.0)));
        // Column index == servers_x.
        assert!(!m.is_on_grid(PlanePoint::new(256.0, 10.0)));
        // Row <= 0.
        assert!(!m.is_on_grid(PlanePoint::new(10.0, -0.01)));
        // Row > servers_y; rows share the column precision.
        assert!(!m.is_on_grid(PlanePoint::new(10.0, p * 3.0 + 0.01)));
        // Non-finite input.
        assert!(!m.is_on_grid(PlanePoint::new(f64::NAN, 10.0)));
        assert!(!m.is_on_grid(PlanePoint::new(10.0, f64::INFINITY)));
    }

    #[test]
    fn test_local_offsets_span_teleport_range() {
        let m = mapper(7, 7);
        let p = m.precision();

        let centre = m.display_to_grid_command(PlanePoint::new(p * 2.5, p * 3.5));
        assert_eq!(centre.local_x, 0);
        assert_eq!(centre.local_y, 0);

        let near_origin = m.display_to_grid_command(PlanePoint::new(0.0, 0.0));
        assert_eq!(near_origin.local_x, -700_000);
        assert_eq!(near_origin.local_y, -700_000);

        let quarter = m.display_to_grid_command(PlanePoint::new(p * 0.75, p * 0.25));
        assert_eq!(quarter.local_x, 350_000);
        assert_eq!(quarter.local_y, -350_000);
    }

    #[test]
    fn test_off_grid_still_reports_offsets() {
        let m = mapper(7, 7);
        let cmd = m.display_to_grid_command(PlanePoint::new(-m.precision() / 2.0, 10.0));
        assert_eq!(cmd.address, None);
        // Truncated remainder keeps the sign of the dividend.
        assert_eq!(cmd.local_x, -1_400_000);
    }

    #[test]
    fn test_grid_command_round_trip() {
        let m = mapper(7, 7);
        let mut x = -97.3;
        while x < 99.0 {
            let mut y = -98.1;
            while y < 99.0 {
                let plane = m.gps_to_display(GpsPoint::new(x, y)).to_plane();
                let cmd = m.display_to_grid_command(plane);
                let address = cmd.address.expect("point should be on grid");
                let back = m
                    .grid_command_to_world(
                        address.column(),
                        address.row(),
                        cmd.local_x as f64,
                        cmd.local_y as f64,
                    )
                    .unwrap();
                assert!((back.x - x).abs() < 1e-3, "x: {} -> {}", x, back.x);
                assert!((back.y - y).abs() < 1e-3, "y: {} -> {}", y, back.y);
                y += 13.7;
            }
            x += 11.9;
        }
    }

    #[test]
    fn test_grid_command_to_world_known_cell() {
        let m = mapper(7, 7);
        let p = m.precision();
        // Centre of C4.
        let gps = m.grid_command_to_world('c', 4, 0.0, 0.0).unwrap();
        assert!((gps.x - ((p * 2.5) / 1.28 - 100.0)).abs() < EPSILON);
        assert!((gps.y - (100.0 - (p * 3.5) / 1.28)).abs() < EPSILON);

        let display = m.grid_command_to_display('C', 4, 0.0, 0.0).unwrap();
        assert!((display.lat - p * 2.5).abs() < 1e-9);
        assert!((display.long - -(p * 3.5)).abs() < 1e-9);
    }

    #[test]
    fn test_grid_command_to_world_off_grid() {
        let m = mapper(7, 7);
        assert_eq!(m.grid_command_to_world('H', 1, 0.0, 0.0), None);
        assert_eq!(m.grid_command_to_world('A', 0, 0.0, 0.0), None);
        assert_eq!(m.grid_command_to_world('A', 8, 0.0, 0.0), None);
        assert_eq!(m.grid_command_to_world('?', 1, 0.0, 0.0), None);
        assert_eq!(m.grid_command_to_display('Z', 1, 0.0, 0.0), None);
    }

    #[test]
    fn test_cursor_position() {
        let m = mapper(7, 7);
        let gps = m.cursor_position(PlanePoint::new(128.0, 128.0)).unwrap();
        assert!(gps.x.abs() < EPSILON);
        assert!(gps.y.abs() < EPSILON);

        let gps = m.cursor_position(PlanePoint::new(0.0, 0.0)).unwrap();
        assert!((gps.x - -100.0).abs() < EPSILON);
        assert!((gps.y - 100.0).abs() < EPSILON);

        assert_eq!(m.cursor_position(PlanePoint::new(-1.0, 5.0)), None);
    }

    #[test]
    fn test_teleport_command_from_click() {
        let m = mapper(7, 7);
        let p = m.precision();
        let cmd = m.teleport_command(PlanePoint::new(p * 2.5, p * 3.5)).unwrap();
        assert_eq!(cmd.to_string(), "cheat TP C4 0 0 30000");
        assert_eq!(m.teleport_command(PlanePoint::new(300.0, 5.0)), None);
    }

    #[test]
    fn test_locate_queries() {
        let m = mapper(7, 7);

        let point = m.locate(&SearchQuery::Coordinates(GpsPoint::new(12.5, -40.0))).unwrap();
        assert_eq!(point, GpsPoint::new(12.5, -40.0));

        let tp = SearchQuery::Teleport {
            column: "c".to_string(),
            row: 4,
            local_x: 0.0,
            local_y: 0.0,
        };
        assert_eq!(m.locate(&tp), m.grid_command_to_world('C', 4, 0.0, 0.0));

        let multi = SearchQuery::Teleport {
            column: "ab".to_string(),
            row: 1,
            local_x: 0.0,
            local_y: 0.0,
        };
        assert_eq!(m.locate(&multi), None);

        assert_eq!(m.locate(&SearchQuery::Text("stone".to_string())), None);
        assert_eq!(m.locate(&SearchQuery::Empty), None);
        assert_eq!(m.locate(&SearchQuery::Coordinates(GpsPoint::new(f64::NAN, 1.0))), None);
    }

    #[test]
    fn test_engine_family_through_mapper() {
        let m = CoordinateMapper::new(GridConfig::new(4, 2, 100.0).unwrap()).unwrap();
        let d = m.engine_to_display(WorldPoint::new(400.0, 200.0));
        assert!((d.lat - 256.0).abs() < EPSILON);
        assert!((d.long - -128.0).abs() < EPSILON);
    }
}
