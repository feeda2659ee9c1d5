#![warn(missing_docs)]
//! Server grid dimensions.

use crate::error::GridError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::columns::MAX_COLUMNS;

/// Dimensions of the server grid.
///
/// Deserializes from either snake_case keys or the map viewer's original
/// `ServersX` / `ServersY` / `GridSize` keys.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridConfig {
    /// Number of server cells along the horizontal axis (columns).
    #[cfg_attr(feature = "serde", serde(alias = "ServersX"))]
    pub servers_x: u32,
    /// Number of server cells along the vertical axis (rows).
    #[cfg_attr(feature = "serde", serde(alias = "ServersY"))]
    pub servers_y: u32,
    /// Size of one cell in engine units.
    #[cfg_attr(feature = "serde", serde(alias = "GridSize"))]
    pub grid_size: f64,
}

impl GridConfig {
    /// Creates a validated grid configuration.
    ///
    /// # Arguments
    /// * `servers_x` - Number of columns, at most 26 (one letter each)
    /// * `servers_y` - Number of rows
    /// * `grid_size` - Engine-space size of a single cell
    ///
    /// # Returns
    /// * `Result<Self, GridError>` - The configuration or the first violated constraint
    pub fn new(servers_x: u32, servers_y: u32, grid_size: f64) -> Result<Self, GridError> {
        let config = GridConfig {
            servers_x,
            servers_y,
            grid_size,
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks the configuration constraints.
    ///
    /// Needed after deserialization, which bypasses [`GridConfig::new`].
    pub fn validate(&self) -> Result<(), GridError> {
        if self.servers_x == 0 || self.servers_y == 0 {
            return Err(GridError::InvalidServerCount("Server counts must be non-zero"));
        }
        if self.servers_x as usize > MAX_COLUMNS {
            return Err(GridError::InvalidServerCount(
                "At most 26 columns can be lettered",
            ));
        }
        if !self.grid_size.is_finite() || self.grid_size <= 0.0 {
            return Err(GridError::InvalidGridSize("Grid size must be positive and finite"));
        }
        Ok(())
    }

    /// Width of one grid cell in display units.
    ///
    /// Rows are sized with the same value, so non-square grids extend past
    /// the 256-unit display square vertically.
    pub fn precision(&self) -> f64 {
        super::MAP_EXTENT / self.servers_x as f64
    }

    /// Engine-space extent mapped onto the display square.
    pub fn world_span(&self) -> f64 {
        self.grid_size * self.servers_x.max(self.servers_y) as f64
    }
}
