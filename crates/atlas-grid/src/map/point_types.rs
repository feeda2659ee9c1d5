//! Point types for each coordinate space.

use core::fmt;

use atlas_geometry::Vec2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Represents a point in raw engine coordinates (world distance units).
///
/// The range is unbounded and symmetric about the world origin. Engine `y`
/// grows southward.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct WorldPoint {
    /// The x-coordinate in engine units.
    pub x: f64,
    /// The y-coordinate in engine units.
    pub y: f64,
}

impl WorldPoint {
    /// Creates a new `WorldPoint`.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<Vec2> for WorldPoint {
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<WorldPoint> for Vec2 {
    fn from(p: WorldPoint) -> Self {
        Vec2::new(p.x, p.y)
    }
}

/// Represents a point in gameplay ("GPS") coordinates.
///
/// On-grid points lie within ±100 on both axes; `y` grows northward.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct GpsPoint {
    /// East-west coordinate.
    pub x: f64,
    /// North-south coordinate.
    pub y: f64,
}

impl GpsPoint {
    /// Creates a new `GpsPoint`.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns `true` if both coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Formats as `x / y` with two decimals, the marker popup format.
impl fmt::Display for GpsPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} / {:.2}", self.x, self.y)
    }
}

/// Represents a point in the normalized display space of the tiled map.
///
/// The display square has a side of 256 units. The pair is kept in the tile
/// renderer's array order: `long` fills the first slot, which is the
/// renderer's vertical axis and is non-positive across the map, and `lat`
/// fills the second, horizontal slot.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct DisplayPoint {
    /// First slot: vertical display axis.
    pub long: f64,
    /// Second slot: horizontal display axis.
    pub lat: f64,
}

impl DisplayPoint {
    /// Creates a new `DisplayPoint`.
    #[must_use]
    pub const fn new(long: f64, lat: f64) -> Self {
        Self { long, lat }
    }

    /// Converts to the map-plane position a pointer event would report.
    #[must_use]
    pub fn to_plane(self) -> PlanePoint {
        PlanePoint::new(self.lat, -self.long)
    }
}

impl fmt::Display for DisplayPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4},{:.4}", self.long, self.lat)
    }
}

/// Represents a pointer position on the map plane.
///
/// `x` grows eastward from the left map edge and `y` grows southward from
/// the top edge. Both span `[0, 256)` across the grid when the grid is
/// square.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PlanePoint {
    /// Horizontal distance from the left edge.
    pub x: f64,
    /// Vertical distance from the top edge.
    pub y: f64,
}

impl PlanePoint {
    /// Creates a new `PlanePoint`.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Converts back to renderer order.
    #[must_use]
    pub fn to_display(self) -> DisplayPoint {
        DisplayPoint::new(-self.y, self.x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_plane_conversion() {
        let d = DisplayPoint::new(-40.0, 12.5);
        let p = d.to_plane();
        assert_eq!(p, PlanePoint::new(12.5, 40.0));
        assert_eq!(p.to_display(), d);
    }

    #[test]
    fn test_gps_point_popup_format() {
        assert_eq!(GpsPoint::new(-12.346, 67.0).to_string(), "-12.35 / 67.00");
    }

    #[test]
    fn test_world_point_vec_conversion() {
        let w = WorldPoint::new(1.0, -2.0);
        let v: Vec2 = w.into();
        assert_eq!(WorldPoint::from(v), w);
    }
}
