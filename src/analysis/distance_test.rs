#[cfg(test)]
mod tests {
    use crate::analysis::AnalysisError;
    use crate::analysis::distance::{EARTH_RADIUS_KM, haversine_distance};
    use quickcheck::quickcheck;

    /// Folds an arbitrary float into `[-limit, limit]`
    fn fold(x: f64, limit: f64) -> f64 {
        if x.is_finite() { x % limit } else { 0.0 }
    }

    fn invalid(name: &'static str, value: f64, limit: f64) -> AnalysisError {
        AnalysisError::InvalidCoordinate {
            name,
            value,
            min: -limit,
            max: limit,
        }
    }

    #[test]
    fn test_haversine_distance() {
        let distance = haversine_distance(45.0, 90.0, 46.0, 91.0, EARTH_RADIUS_KM).unwrap();
        assert!((distance - 135.78).abs() < 0.01, "distance: {}", distance);
    }

    #[test]
    fn test_haversine_distance_same_point() {
        assert_eq!(
            haversine_distance(45.0, 90.0, 45.0, 90.0, EARTH_RADIUS_KM).unwrap(),
            0.0
        );
        assert_eq!(
            haversine_distance(-90.0, 180.0, -90.0, 180.0, EARTH_RADIUS_KM).unwrap(),
            0.0
        );
    }

    #[test]
    fn test_haversine_distance_antipodal() {
        let half_circumference = std::f64::consts::PI * EARTH_RADIUS_KM;
        let d1 = haversine_distance(0.0, 0.0, 0.0, 180.0, EARTH_RADIUS_KM).unwrap();
        let d2 = haversine_distance(90.0, 0.0, -90.0, 0.0, EARTH_RADIUS_KM).unwrap();
        assert!((d1 - half_circumference).abs() < 1e-6);
        assert!((d2 - half_circumference).abs() < 1e-6);
    }

    #[test]
    fn test_haversine_distance_scales_with_radius() {
        let d1 = haversine_distance(45.0, 7.0, 46.0, 8.0, 1.0).unwrap();
        let d2 = haversine_distance(45.0, 7.0, 46.0, 8.0, 2.0).unwrap();
        assert!((d2 - 2.0 * d1).abs() < 1e-12);
    }

    #[test]
    fn test_haversine_distance_monotonic() {
        let mut previous = 0.0;
        for step in 1..=18 {
            let lat = -90.0 + step as f64 * 10.0;
            let distance = haversine_distance(-90.0, 0.0, lat, 0.0, EARTH_RADIUS_KM).unwrap();
            assert!(distance > previous, "not increasing at lat {}", lat);
            previous = distance;
        }
    }

    #[test]
    fn test_invalid_positive_latitude() {
        let err = haversine_distance(100.0, 90.0, 45.0, 90.0, EARTH_RADIUS_KM).unwrap_err();
        assert_eq!(err, invalid("lat1", 100.0, 90.0));
        assert_eq!(
            err.to_string(),
            "Invalid lat1: 100.0. Must be between -90 and 90."
        );

        let err = haversine_distance(45.0, 90.0, 100.0, 90.0, EARTH_RADIUS_KM).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid lat2: 100.0. Must be between -90 and 90."
        );
    }

    #[test]
    fn test_invalid_negative_latitude() {
        let err = haversine_distance(-100.0, 90.0, 45.0, 90.0, EARTH_RADIUS_KM).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid lat1: -100.0. Must be between -90 and 90."
        );

        let err = haversine_distance(45.0, 90.0, -100.0, 90.0, EARTH_RADIUS_KM).unwrap_err();
        assert_eq!(err, invalid("lat2", -100.0, 90.0));
    }

    #[test]
    fn test_invalid_longitude() {
        let err = haversine_distance(45.0, 190.0, 45.0, 90.0, EARTH_RADIUS_KM).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid lon1: 190.0. Must be between -180 and 180."
        );

        let err = haversine_distance(45.0, 90.0, 45.0, -190.0, EARTH_RADIUS_KM).unwrap_err();
        assert_eq!(err, invalid("lon2", -190.0, 180.0));
        assert_eq!(
            err.to_string(),
            "Invalid lon2: -190.0. Must be between -180 and 180."
        );
    }

    #[test]
    fn test_nan_coordinate_rejected() {
        let err = haversine_distance(45.0, f64::NAN, 45.0, 90.0, EARTH_RADIUS_KM).unwrap_err();
        assert!(matches!(
            err,
            AnalysisError::InvalidCoordinate { name: "lon1", .. }
        ));
    }

    #[test]
    fn test_range_bounds_are_valid() {
        assert!(haversine_distance(90.0, 180.0, -90.0, -180.0, EARTH_RADIUS_KM).is_ok());
    }

    #[test]
    fn test_invalid_earth_radius() {
        for radius in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = haversine_distance(45.0, 7.0, 46.0, 8.0, radius).unwrap_err();
            assert!(matches!(
                err,
                AnalysisError::InvalidParameter {
                    name: "earth_radius_km",
                    ..
                }
            ));
        }
    }

    quickcheck! {
        fn prop_same_point_is_zero(lat: f64, lon: f64) -> bool {
            let (lat, lon) = (fold(lat, 90.0), fold(lon, 180.0));
            haversine_distance(lat, lon, lat, lon, EARTH_RADIUS_KM) == Ok(0.0)
        }

        fn prop_symmetric(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> bool {
            let (lat1, lon1) = (fold(lat1, 90.0), fold(lon1, 180.0));
            let (lat2, lon2) = (fold(lat2, 90.0), fold(lon2, 180.0));
            haversine_distance(lat1, lon1, lat2, lon2, EARTH_RADIUS_KM)
                == haversine_distance(lat2, lon2, lat1, lon1, EARTH_RADIUS_KM)
        }

        fn prop_bounded_by_half_circumference(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> bool {
            let (lat1, lon1) = (fold(lat1, 90.0), fold(lon1, 180.0));
            let (lat2, lon2) = (fold(lat2, 90.0), fold(lon2, 180.0));
            let d = haversine_distance(lat1, lon1, lat2, lon2, EARTH_RADIUS_KM).unwrap();
            (0.0..=std::f64::consts::PI * EARTH_RADIUS_KM + 1e-9).contains(&d)
        }
    }
}
