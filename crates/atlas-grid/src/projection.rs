//! The two coordinate families that project onto the display space.
//!
//! [`GpsProjection`] carries gameplay coordinates (±100 across the grid) and
//! [`EngineProjection`] carries raw engine coordinates. Each has its own
//! input point type, so a point from one family cannot be fed to the other.
//! The families are not inverses of each other.
//!
//! Both write `DisplayPoint { long, lat }` with `long` derived from `y` and
//! `lat` from `x`. In the GPS family `long` grows with `y`; in the engine
//! family it shrinks as `y` grows, matching the engine's southward `y`.

use crate::map::{DisplayPoint, GpsPoint, GridConfig, MAP_EXTENT, PlanePoint, WorldPoint};

/// Display units per gameplay unit.
pub const GPS_SCALE: f64 = 1.28;

/// Gameplay coordinate of the grid's west and north edges, negated.
pub const GPS_OFFSET: f64 = 100.0;

/// Gameplay-coordinate projection. Stateless: the scale is fixed.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GpsProjection;

impl GpsProjection {
    /// Projects a gameplay point into display space.
    pub fn to_display(&self, p: GpsPoint) -> DisplayPoint {
        DisplayPoint::new((p.y - GPS_OFFSET) * GPS_SCALE, (GPS_OFFSET + p.x) * GPS_SCALE)
    }

    /// Recovers gameplay coordinates from a map-plane position.
    ///
    /// Inverse of [`GpsProjection::to_display`] followed by
    /// [`DisplayPoint::to_plane`].
    pub fn plane_to_gps(&self, p: PlanePoint) -> GpsPoint {
        GpsPoint::new(scale_to_gps(p.x) - GPS_OFFSET, GPS_OFFSET - scale_to_gps(p.y))
    }
}

/// Converts a display-unit length to gameplay units.
pub fn scale_to_gps(display_units: f64) -> f64 {
    display_units / GPS_SCALE
}

/// Engine-coordinate projection for a given grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineProjection {
    span: f64,
}

impl EngineProjection {
    /// Builds the projection for `config`.
    ///
    /// The display square covers `grid_size * max(servers_x, servers_y)`
    /// engine units.
    pub fn new(config: &GridConfig) -> Self {
        Self {
            span: config.world_span(),
        }
    }

    /// Engine units covered by the display square.
    pub fn span(&self) -> f64 {
        self.span
    }

    /// Projects an engine point into display space.
    pub fn to_display(&self, p: WorldPoint) -> DisplayPoint {
        let lat = (p.x / self.span) * MAP_EXTENT;
        let long = -((p.y / self.span) * MAP_EXTENT);
        DisplayPoint::new(long, lat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_gps_to_display() {
        let gps = GpsProjection;
        let d = gps.to_display(GpsPoint::new(0.0, 0.0));
        assert!((d.long - -128.0).abs() < EPSILON);
        assert!((d.lat - 128.0).abs() < EPSILON);

        // North-west corner of the grid sits at the display origin.
        let d = gps.to_display(GpsPoint::new(-100.0, 100.0));
        assert!(d.long.abs() < EPSILON);
        assert!(d.lat.abs() < EPSILON);

        // South-east corner.
        let d = gps.to_display(GpsPoint::new(100.0, -100.0));
        assert!((d.long - -256.0).abs() < EPSILON);
        assert!((d.lat - 256.0).abs() < EPSILON);
    }

    #[test]
    fn test_gps_plane_round_trip() {
        let gps = GpsProjection;
        for (x, y) in [(0.0, 0.0), (-73.25, 12.5), (99.9, -99.9), (-150.0, 300.0)] {
            let back = gps.plane_to_gps(gps.to_display(GpsPoint::new(x, y)).to_plane());
            assert!((back.x - x).abs() < 1e-9, "x: {} vs {}", back.x, x);
            assert!((back.y - y).abs() < 1e-9, "y: {} vs {}", back.y, y);
        }
    }

    #[test]
    fn test_engine_to_display() {
        let config = GridConfig::new(4, 4, 100.0).unwrap();
        let engine = EngineProjection::new(&config);
        assert!((engine.span() - 400.0).abs() < EPSILON);

        let d = engine.to_display(WorldPoint::new(200.0, 100.0));
        assert!((d.lat - 128.0).abs() < EPSILON);
        assert!((d.long - -64.0).abs() < EPSILON);

        let d = engine.to_display(WorldPoint::new(0.0, 0.0));
        assert_eq!(d.lat, 0.0);
        assert!(d.long.abs() < EPSILON);
    }

    #[test]
    fn test_engine_axis_direction_differs_from_gps() {
        let engine = EngineProjection::new(&GridConfig::new(2, 2, 1_000.0).unwrap());
        let gps = GpsProjection;

        // Increasing y lowers `long` in the engine family but raises it in the GPS family.
        let e0 = engine.to_display(WorldPoint::new(0.0, 0.0));
        let e1 = engine.to_display(WorldPoint::new(0.0, 10.0));
        assert!(e1.long < e0.long);

        let g0 = gps.to_display(GpsPoint::new(0.0, 0.0));
        let g1 = gps.to_display(GpsPoint::new(0.0, 10.0));
        assert!(g1.long > g0.long);
    }

    #[test]
    fn test_engine_span_uses_larger_axis() {
        let engine = EngineProjection::new(&GridConfig::new(2, 8, 50.0).unwrap());
        let d = engine.to_display(WorldPoint::new(400.0, 0.0));
        assert!((d.lat - 256.0).abs() < EPSILON);
    }
}
