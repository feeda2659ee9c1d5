//! Grid-related building blocks.
//!
//! This module provides the coordinate point types, the server grid
//! configuration and the column lettering table used for grid addresses.

pub mod columns;
pub mod config;
pub mod point_types;

pub use columns::{ColumnTable, GridAddress};
pub use config::GridConfig;
pub use point_types::{DisplayPoint, GpsPoint, PlanePoint, WorldPoint};

/// Side length of the square display space, in display units.
pub const MAP_EXTENT: f64 = 256.0;
