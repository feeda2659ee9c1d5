//! Placement of island-relative spawn points and ship paths on the map.
//!
//! Both work in engine coordinates and project through
//! [`EngineProjection`].

use core::fmt;

use atlas_geometry::Vec2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::PlacementError;
use crate::map::{DisplayPoint, WorldPoint};
use crate::projection::EngineProjection;

/// Resolves a treasure spawn offset into an engine position.
///
/// # Arguments
/// * `island_origin` - Island centre in engine coordinates
/// * `island_rotation` - Island rotation in degrees
/// * `offset` - Space-separated `"<dx> <dy> [...]"`; components past the second are ignored
///
/// # Returns
/// * `Result<WorldPoint, PlacementError>` - The spawn position, or an error if the offset is malformed
pub fn treasure_spawn_point(
    island_origin: WorldPoint,
    island_rotation: f64,
    offset: &str,
) -> Result<WorldPoint, PlacementError> {
    let invalid = |reason| PlacementError::InvalidOffset {
        offset: offset.to_string(),
        reason,
    };

    let mut parts = offset.split_whitespace();
    let mut component = || -> Result<f64, PlacementError> {
        parts
            .next()
            .ok_or_else(|| invalid("expected two components"))?
            .parse()
            .map_err(|_| invalid("component is not a number"))
    };
    let dx = component()?;
    let dy = component()?;

    let rotated = Vec2::new(dx, dy).rotate(island_rotation);
    Ok(WorldPoint::from(Vec2::from(island_origin) + rotated))
}

/// One node of a ship path.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ShipPathNode {
    /// Node x in engine coordinates.
    #[cfg_attr(feature = "serde", serde(rename = "worldX"))]
    pub world_x: f64,
    /// Node y in engine coordinates.
    #[cfg_attr(feature = "serde", serde(rename = "worldY"))]
    pub world_y: f64,
    /// Distance from the node to each of its Bézier control points.
    #[cfg_attr(feature = "serde", serde(rename = "controlPointsDistance"))]
    pub control_points_distance: f64,
    /// Heading of the path through the node, in degrees.
    pub rotation: f64,
}

impl ShipPathNode {
    /// Node position.
    pub fn center(&self) -> WorldPoint {
        WorldPoint::new(self.world_x, self.world_y)
    }

    /// Control point on the incoming side of the node.
    pub fn previous_control(&self) -> WorldPoint {
        self.control_point(-self.control_points_distance)
    }

    /// Control point on the outgoing side of the node.
    pub fn next_control(&self) -> WorldPoint {
        self.control_point(self.control_points_distance)
    }

    fn control_point(&self, along: f64) -> WorldPoint {
        let center = Vec2::from(self.center());
        Vec2::new(self.world_x + along, self.world_y)
            .rotate_about(center, self.rotation)
            .into()
    }
}

/// A looping ship route.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ShipPath {
    /// Class of ship spawned on this route.
    #[cfg_attr(feature = "serde", serde(rename = "AutoSpawnShipClass", default))]
    pub auto_spawn_ship_class: String,
    /// Route nodes in travel order.
    #[cfg_attr(feature = "serde", serde(rename = "Nodes", default))]
    pub nodes: Vec<ShipPathNode>,
}

impl ShipPath {
    /// Returns `true` for ghost ship routes.
    pub fn is_ghost_ship(&self) -> bool {
        self.auto_spawn_ship_class.contains("GhostShip")
    }
}

/// One segment of a curve in display space, SVG path style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Start a new curve at a point.
    MoveTo(DisplayPoint),
    /// Cubic Bézier with both control points given.
    CurveTo {
        /// First control point.
        control1: DisplayPoint,
        /// Second control point.
        control2: DisplayPoint,
        /// Segment end.
        end: DisplayPoint,
    },
    /// Cubic Bézier whose first control point mirrors the previous segment's second.
    SmoothCurveTo {
        /// Second control point.
        control2: DisplayPoint,
        /// Segment end.
        end: DisplayPoint,
    },
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathCommand::MoveTo(p) => write!(f, "M {}", p),
            PathCommand::CurveTo {
                control1,
                control2,
                end,
            } => write!(f, "C {} {} {}", control1, control2, end),
            PathCommand::SmoothCurveTo { control2, end } => write!(f, "S {} {}", control2, end),
        }
    }
}

/// Builds the closed display-space curve for a ship path.
///
/// The curve starts at the first node with a full cubic segment, then adds
/// one smooth segment for each remaining node and a final one back to the
/// first node. An empty path yields an empty curve.
pub fn ship_path_curve(path: &ShipPath, engine: &EngineProjection) -> Vec<PathCommand> {
    let Some(first) = path.nodes.first() else {
        return Vec::new();
    };

    let mut commands = Vec::with_capacity(path.nodes.len() + 2);
    commands.push(PathCommand::MoveTo(engine.to_display(first.center())));
    commands.push(PathCommand::CurveTo {
        control1: engine.to_display(first.next_control()),
        control2: engine.to_display(first.previous_control()),
        end: engine.to_display(first.center()),
    });

    for node in path.nodes.iter().skip(1).chain(core::iter::once(first)) {
        commands.push(PathCommand::SmoothCurveTo {
            control2: engine.to_display(node.previous_control()),
            end: engine.to_display(node.center()),
        });
    }

    commands
}
