use std::ops::RangeInclusive;

use super::error::AnalysisError;
use super::waypoint::GeoPoint;

/// Mean Earth radius in kilometers
#[allow(dead_code)] // Part of public API, may be used by external code
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Valid latitude range in degrees
pub const LATITUDE_RANGE: RangeInclusive<f64> = -90.0..=90.0;

/// Valid longitude range in degrees
pub const LONGITUDE_RANGE: RangeInclusive<f64> = -180.0..=180.0;

/// Calculates great-circle distance between two points with the haversine formula
///
/// # Arguments
///
/// * `lat1`, `lon1` - First point, degrees
/// * `lat2`, `lon2` - Second point, degrees
/// * `earth_radius_km` - Radius of the sphere, must be finite and greater than 0
///
/// # Returns
///
/// Distance in kilometers. Exactly `0.0` for identical points.
///
/// # Errors
///
/// `InvalidCoordinate` naming the first offending argument (checked in the
/// order `lat1`, `lon1`, `lat2`, `lon2`), or `InvalidParameter` for a bad radius.
pub fn haversine_distance(
    lat1: f64,
    lon1: f64,
    lat2: f64,
    lon2: f64,
    earth_radius_km: f64,
) -> Result<f64, AnalysisError> {
    check_coordinate("lat1", lat1, &LATITUDE_RANGE)?;
    check_coordinate("lon1", lon1, &LONGITUDE_RANGE)?;
    check_coordinate("lat2", lat2, &LATITUDE_RANGE)?;
    check_coordinate("lon2", lon2, &LONGITUDE_RANGE)?;
    check_earth_radius(earth_radius_km)?;

    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let d_lat = lat2_rad - lat1_rad;
    let d_lon = (lon2 - lon1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (d_lon / 2.0).sin().powi(2);
    // Rounding can push `a` a hair above 1 for antipodal points
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    Ok(earth_radius_km * c)
}

/// Same as [`haversine_distance`] for two [`GeoPoint`]s
pub fn distance_between(
    p1: &GeoPoint,
    p2: &GeoPoint,
    earth_radius_km: f64,
) -> Result<f64, AnalysisError> {
    haversine_distance(
        p1.latitude,
        p1.longitude,
        p2.latitude,
        p2.longitude,
        earth_radius_km,
    )
}

/// Checks that a radius parameter is finite and non-negative
pub fn check_radius(name: &'static str, value: f64) -> Result<(), AnalysisError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(AnalysisError::InvalidParameter {
            name,
            value,
            requirement: "a finite number not less than 0",
        })
    }
}

/// Checks that the sphere radius is finite and strictly positive
pub fn check_earth_radius(value: f64) -> Result<(), AnalysisError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(AnalysisError::InvalidParameter {
            name: "earth_radius_km",
            value,
            requirement: "a finite number greater than 0",
        })
    }
}

fn check_coordinate(
    name: &'static str,
    value: f64,
    range: &RangeInclusive<f64>,
) -> Result<(), AnalysisError> {
    // NaN is never contained, so it is rejected here too
    if range.contains(&value) {
        Ok(())
    } else {
        Err(AnalysisError::InvalidCoordinate {
            name,
            value,
            min: *range.start(),
            max: *range.end(),
        })
    }
}
