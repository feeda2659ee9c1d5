#![warn(missing_docs)]
//! Coordinate mapping for a tiled game-world map.
//!
//! The map shows a grid of `servers_x × servers_y` server cells in a
//! 256-unit display square. This crate converts between:
//!
//! * raw engine coordinates ([`WorldPoint`]) through [`EngineProjection`],
//! * gameplay coordinates ([`GpsPoint`], ±100 across the grid) through
//!   [`GpsProjection`],
//! * the display space ([`DisplayPoint`]) and pointer positions on it
//!   ([`PlanePoint`]),
//! * teleport addresses: a cell such as `C4` plus in-cell offsets
//!   ([`GridCommand`], [`TeleportCommand`]).
//!
//! [`CoordinateMapper`] ties these together for one grid configuration.
//! Everything is pure and off-grid input yields `None` rather than an error.

pub mod error;
pub mod map;
pub mod mapper;
pub mod placement;
pub mod projection;
pub mod search;
pub mod teleport;

pub use error::{GridError, PlacementError};
pub use map::{ColumnTable, DisplayPoint, GpsPoint, GridAddress, GridConfig, PlanePoint, WorldPoint};
pub use mapper::CoordinateMapper;
pub use placement::{PathCommand, ShipPath, ShipPathNode, ship_path_curve, treasure_spawn_point};
pub use projection::{EngineProjection, GpsProjection};
pub use search::SearchQuery;
pub use teleport::{GridCommand, TeleportCommand};
