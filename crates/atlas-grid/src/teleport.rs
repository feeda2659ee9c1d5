//! Teleport addressing: a grid cell plus an offset inside it.

use core::fmt;

use crate::map::GridAddress;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Lower bound of the in-cell offset range used by the teleport command.
pub const LOCAL_MIN: f64 = -700_000.0;
/// Upper bound of the in-cell offset range used by the teleport command.
pub const LOCAL_MAX: f64 = 700_000.0;
/// Altitude appended to every teleport command.
pub const TELEPORT_ALTITUDE: i64 = 30_000;

/// Result of resolving a map-plane position against the grid.
///
/// The offsets are always computed; `address` is `None` when the position
/// falls outside the grid.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCommand {
    /// The cell, or `None` when off-grid.
    pub address: Option<GridAddress>,
    /// Horizontal offset inside the cell, in `[-700000, 700000]`.
    pub local_x: i64,
    /// Vertical offset inside the cell, in `[-700000, 700000]`.
    pub local_y: i64,
}

impl GridCommand {
    /// The address label such as `"C4"`, or `None` off-grid.
    pub fn label(&self) -> Option<String> {
        self.address.map(|a| a.to_string())
    }

    /// Converts into a teleport command, dropping off-grid results.
    pub fn into_teleport(self) -> Option<TeleportCommand> {
        self.address.map(|address| TeleportCommand {
            address,
            local_x: self.local_x,
            local_y: self.local_y,
        })
    }
}

/// An on-grid teleport target.
///
/// Displays as the in-game console command, e.g.
/// `cheat TP C4 -12345 67890 30000`.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeleportCommand {
    /// Target cell.
    pub address: GridAddress,
    /// Horizontal offset inside the cell.
    pub local_x: i64,
    /// Vertical offset inside the cell.
    pub local_y: i64,
}

impl fmt::Display for TeleportCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cheat TP {} {} {} {}",
            self.address, self.local_x, self.local_y, TELEPORT_ALTITUDE
        )
    }
}
