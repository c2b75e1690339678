use thiserror::Error;

/// Errors raised by the analysis scans
///
/// All of them are local failures: a scan either returns a complete result
/// or one of these, never a partial result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    /// A latitude/longitude argument is outside its valid range
    #[error("Invalid {name}: {value:?}. Must be between {min} and {max}.")]
    InvalidCoordinate {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// A scan that needs at least one waypoint got none
    #[error("Waypoint series is empty")]
    EmptySeries,

    /// A radius parameter is out of its domain (negative, zero earth radius, NaN, infinite)
    #[error("Invalid {name}: {value:?}. Must be {requirement}.")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        requirement: &'static str,
    },
}
