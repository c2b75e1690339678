use serde::Serialize;

/// Waypoint is a single timestamped geographic sample
///
/// The timestamp is unit-agnostic, only differences between timestamps are
/// ever computed. Coordinates are in degrees and are not range-checked on
/// construction; they are validated when a distance involving them is computed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Waypoint {
    pub timestamp: f64,
    pub latitude: f64,
    pub longitude: f64,
}

/// WaypointList is an ordered series of waypoints, in ingestion order
pub type WaypointList = Vec<Waypoint>;

/// GeoPoint is a bare coordinate, used as the center of region queries
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl Waypoint {
    pub fn new(timestamp: f64, latitude: f64, longitude: f64) -> Self {
        Waypoint {
            timestamp,
            latitude,
            longitude,
        }
    }

    /// Returns the coordinate of this waypoint without its timestamp
    pub fn position(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        GeoPoint {
            latitude,
            longitude,
        }
    }
}

impl From<Waypoint> for GeoPoint {
    fn from(w: Waypoint) -> Self {
        w.position()
    }
}
