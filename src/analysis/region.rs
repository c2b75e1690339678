use bitvec::prelude::*;

use super::distance::{check_radius, distance_between};
use super::error::AnalysisError;
use super::waypoint::{GeoPoint, Waypoint};

/// Marks every waypoint within `radius_km` of `center`
///
/// Bit `i` is set when `distance(center, waypoints[i]) <= radius_km`, so a
/// waypoint lying exactly on the boundary is a member of the region.
/// All other region operations are derived from this mask.
pub fn region_mask(
    center: &GeoPoint,
    radius_km: f64,
    earth_radius_km: f64,
    waypoints: &[Waypoint],
) -> Result<BitVec, AnalysisError> {
    check_radius("radius_km", radius_km)?;

    let mut mask = bitvec![0; waypoints.len()];
    for (i, waypoint) in waypoints.iter().enumerate() {
        let distance = distance_between(center, &waypoint.position(), earth_radius_km)?;
        if distance <= radius_km {
            mask.set(i, true);
        }
    }

    Ok(mask)
}

/// Returns the waypoints within `radius_km` of `center` (boundary inclusive)
///
/// Relative order of the input is preserved.
#[allow(dead_code)] // Part of public API, may be used by external code
pub fn waypoints_within(
    center: &GeoPoint,
    radius_km: f64,
    earth_radius_km: f64,
    waypoints: &[Waypoint],
) -> Result<Vec<Waypoint>, AnalysisError> {
    let mask = region_mask(center, radius_km, earth_radius_km, waypoints)?;
    Ok(select(waypoints, &mask))
}

/// Time span covered by the waypoints within `radius_km` of `center`
///
/// Returns `max(timestamp) - min(timestamp)` over the selected waypoints,
/// truncated (not rounded) to 4 decimal digits. A selection with fewer than
/// two waypoints covers no time and yields `0.0`.
#[allow(dead_code)] // Part of public API, may be used by external code
pub fn time_spent_within(
    center: &GeoPoint,
    radius_km: f64,
    earth_radius_km: f64,
    waypoints: &[Waypoint],
) -> Result<f64, AnalysisError> {
    let inside = waypoints_within(center, radius_km, earth_radius_km, waypoints)?;
    Ok(time_span(&inside))
}

/// Truncated time span of a selection, see [`time_spent_within`]
pub fn time_span(waypoints: &[Waypoint]) -> f64 {
    if waypoints.len() < 2 {
        return 0.0;
    }

    let (min, max) = waypoints
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), w| {
            (min.min(w.timestamp), max.max(w.timestamp))
        });

    truncate_4((max - min).max(0.0))
}

/// Collects the waypoints whose bit is set, in input order
pub fn select(waypoints: &[Waypoint], mask: &BitSlice) -> Vec<Waypoint> {
    mask.iter_ones().map(|i| waypoints[i]).collect()
}

fn truncate_4(value: f64) -> f64 {
    (value * 10_000.0).trunc() / 10_000.0
}
