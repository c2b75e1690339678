//! Geometric aggregation over a waypoint series: farthest point from start,
//! most frequented area and geofence exclusion, all on a spherical earth
pub mod distance;
pub mod error;
pub mod region;
pub mod scan;
pub mod waypoint;

#[cfg(test)]
mod distance_test;

pub use error::AnalysisError;
pub use scan::{AnalysisParams, AnalysisResult, analyze};
pub use waypoint::{GeoPoint, Waypoint, WaypointList};
// Public API exports - allow unused imports as these are part of the public API
#[allow(unused_imports)]
pub use scan::{
    FrequentedAreaResult, GeofenceResult, MaxDistanceResult, max_distance_from_start,
    most_frequented_area, waypoints_outside_geofence,
};
#[allow(unused_imports)]
pub use distance::{EARTH_RADIUS_KM, haversine_distance};
#[allow(unused_imports)]
pub use region::{time_spent_within, waypoints_within};
