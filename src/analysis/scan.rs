use bitvec::prelude::*;
use log::debug;
use serde::Serialize;

use super::distance::{check_earth_radius, check_radius, distance_between};
use super::error::AnalysisError;
use super::region::{region_mask, select, time_span};
use super::waypoint::{GeoPoint, Waypoint};

/// Divisor applied to the max distance from start to derive a default
/// frequented-area radius
pub const DEFAULT_AREA_RADIUS_DIVISOR: f64 = 10.0;

/// Farthest waypoint from the first waypoint of a series
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaxDistanceResult {
    pub waypoint: Waypoint,
    pub distance_km: f64,
}

/// Waypoint with the densest neighbourhood
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrequentedAreaResult {
    pub central_waypoint: Waypoint,
    /// Radius the neighbourhood was computed with
    pub area_radius_km: f64,
    /// Waypoints in the neighbourhood, the central waypoint included
    pub entries_count: usize,
    /// Time span covered by the waypoints in the neighbourhood
    pub time_spent: f64,
}

/// Waypoints lying outside a circular geofence
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeofenceResult {
    #[serde(rename = "centralWaypoint")]
    pub center: GeoPoint,
    #[serde(rename = "areaRadiusKm")]
    pub radius_km: f64,
    pub count: usize,
    pub waypoints: Vec<Waypoint>,
}

/// Aggregate of the three scans
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub max_distance_from_start: MaxDistanceResult,
    pub most_frequented_area: FrequentedAreaResult,
    pub waypoints_outside_geofence: GeofenceResult,
}

/// Scalar parameters of an analysis run
///
/// Built once by the caller and passed by reference to [`analyze`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalysisParams {
    pub earth_radius_km: f64,
    pub geofence_center: GeoPoint,
    pub geofence_radius_km: f64,
    /// When `None`, derived as max distance from start / [`DEFAULT_AREA_RADIUS_DIVISOR`]
    pub most_frequented_area_radius_km: Option<f64>,
}

/// Finds the waypoint farthest from the first waypoint
///
/// The first waypoint reaching the maximum wins, so a single-waypoint or
/// all-identical series yields the start waypoint at distance `0.0`.
pub fn max_distance_from_start(
    waypoints: &[Waypoint],
    earth_radius_km: f64,
) -> Result<MaxDistanceResult, AnalysisError> {
    let start = waypoints.first().ok_or(AnalysisError::EmptySeries)?;
    let origin = start.position();

    let mut result = MaxDistanceResult {
        waypoint: *start,
        distance_km: 0.0,
    };
    for waypoint in waypoints {
        let distance = distance_between(&origin, &waypoint.position(), earth_radius_km)?;
        if distance > result.distance_km {
            result = MaxDistanceResult {
                waypoint: *waypoint,
                distance_km: distance,
            };
        }
    }

    Ok(result)
}

/// Finds the waypoint whose `radius_km` neighbourhood holds the most waypoints
///
/// Every waypoint is tried as a center, which makes this quadratic in the
/// series length. Ties go to the earliest candidate in series order.
pub fn most_frequented_area(
    radius_km: f64,
    earth_radius_km: f64,
    waypoints: &[Waypoint],
) -> Result<FrequentedAreaResult, AnalysisError> {
    let mut best: Option<(usize, BitVec)> = None;
    for (i, candidate) in waypoints.iter().enumerate() {
        let mask = region_mask(&candidate.position(), radius_km, earth_radius_km, waypoints)?;
        if best
            .as_ref()
            .is_none_or(|(_, best_mask)| mask.count_ones() > best_mask.count_ones())
        {
            best = Some((i, mask));
        }
    }

    let (index, mask) = best.ok_or(AnalysisError::EmptySeries)?;
    let entries = select(waypoints, &mask);

    Ok(FrequentedAreaResult {
        central_waypoint: waypoints[index],
        area_radius_km: radius_km,
        entries_count: entries.len(),
        time_spent: time_span(&entries),
    })
}

/// Returns every waypoint strictly farther than `radius_km` from the center
///
/// A waypoint exactly on the fence is inside and is not returned. An empty
/// series is not an error and yields an empty result.
pub fn waypoints_outside_geofence(
    radius_km: f64,
    center_latitude: f64,
    center_longitude: f64,
    earth_radius_km: f64,
    waypoints: &[Waypoint],
) -> Result<GeofenceResult, AnalysisError> {
    let center = GeoPoint::new(center_latitude, center_longitude);

    // Outside is the complement of the inclusive region
    let outside = !region_mask(&center, radius_km, earth_radius_km, waypoints)?;
    let waypoints = select(waypoints, &outside);

    Ok(GeofenceResult {
        center,
        radius_km,
        count: waypoints.len(),
        waypoints,
    })
}

/// Runs the three scans over one waypoint series
pub fn analyze(
    params: &AnalysisParams,
    waypoints: &[Waypoint],
) -> Result<AnalysisResult, AnalysisError> {
    check_earth_radius(params.earth_radius_km)?;

    let max_distance = max_distance_from_start(waypoints, params.earth_radius_km)?;
    debug!(
        "Max distance from start: {:.4} km at t={}",
        max_distance.distance_km, max_distance.waypoint.timestamp
    );

    let area_radius_km = match params.most_frequented_area_radius_km {
        Some(radius) => radius,
        None => {
            let radius = max_distance.distance_km / DEFAULT_AREA_RADIUS_DIVISOR;
            debug!("No frequented area radius configured, using {:.4} km", radius);
            radius
        }
    };
    check_radius("most_frequented_area_radius_km", area_radius_km)?;

    let frequented = most_frequented_area(area_radius_km, params.earth_radius_km, waypoints)?;
    debug!(
        "Most frequented area: {} entries around t={}",
        frequented.entries_count, frequented.central_waypoint.timestamp
    );

    let geofence = waypoints_outside_geofence(
        params.geofence_radius_km,
        params.geofence_center.latitude,
        params.geofence_center.longitude,
        params.earth_radius_km,
        waypoints,
    )?;
    debug!("{} waypoints outside geofence", geofence.count);

    Ok(AnalysisResult {
        max_distance_from_start: max_distance,
        most_frequented_area: frequented,
        waypoints_outside_geofence: geofence,
    })
}
