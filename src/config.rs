//! Analysis parameters loaded from a YAML file
//!
//! ```yaml
//! earthRadiusKm: 6371.0
//! geofenceCenterLatitude: 45.0721
//! geofenceCenterLongitude: 7.6812
//! geofenceRadiusKm: 9.5
//! mostFrequentedAreaRadiusKm: 1.0   # optional
//! ```

use log::debug;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::analysis::distance::{LATITUDE_RANGE, LONGITUDE_RANGE};
use crate::analysis::{AnalysisParams, GeoPoint};
use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    pub earth_radius_km: f64,
    pub geofence_center_latitude: f64,
    pub geofence_center_longitude: f64,
    pub geofence_radius_km: f64,
    #[serde(default)]
    pub most_frequented_area_radius_km: Option<f64>,
}

impl Config {
    /// Reads and validates a config file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let config = Self::from_yaml_str(&contents)?;
        debug!("Loaded config from {:?}: {:?}", path, config);
        Ok(config)
    }

    /// Parses and validates YAML text
    ///
    /// Missing required keys and non-numeric values fail as [`Error::Yaml`].
    pub fn from_yaml_str(contents: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.earth_radius_km.is_finite() && self.earth_radius_km > 0.0) {
            return Err(invalid(
                "earthRadiusKm",
                self.earth_radius_km,
                "must be a finite number greater than 0",
            ));
        }
        if !LATITUDE_RANGE.contains(&self.geofence_center_latitude) {
            return Err(invalid(
                "geofenceCenterLatitude",
                self.geofence_center_latitude,
                "must be between -90 and 90",
            ));
        }
        if !LONGITUDE_RANGE.contains(&self.geofence_center_longitude) {
            return Err(invalid(
                "geofenceCenterLongitude",
                self.geofence_center_longitude,
                "must be between -180 and 180",
            ));
        }
        check_radius("geofenceRadiusKm", self.geofence_radius_km)?;
        if let Some(radius) = self.most_frequented_area_radius_km {
            check_radius("mostFrequentedAreaRadiusKm", radius)?;
        }
        Ok(())
    }

    /// Analysis context for this configuration
    pub fn params(&self) -> AnalysisParams {
        AnalysisParams {
            earth_radius_km: self.earth_radius_km,
            geofence_center: GeoPoint::new(
                self.geofence_center_latitude,
                self.geofence_center_longitude,
            ),
            geofence_radius_km: self.geofence_radius_km,
            most_frequented_area_radius_km: self.most_frequented_area_radius_km,
        }
    }
}

fn check_radius(key: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(invalid(key, value, "must be a finite number not less than 0"))
    }
}

fn invalid(key: &'static str, value: f64, requirement: &str) -> Error {
    Error::Config {
        key,
        message: format!("{:?} {}", value, requirement),
    }
}
