#[cfg(test)]
mod tests {
    use crate::analysis::Waypoint;
    use crate::error::Error;
    use crate::ingest::{parse_waypoints, read_waypoints};
    use std::fs;

    #[test]
    fn test_read_waypoints() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("waypoints.csv");
        fs::write(
            &path,
            "1741358198673;45.06271;7.67905
1741358198686.5452;45.06312;7.67791
1741358198700.0903;45.06353;7.67678
",
        )
        .unwrap();

        let waypoints = read_waypoints(&path).unwrap();
        assert_eq!(
            waypoints,
            vec![
                Waypoint::new(1741358198673.0, 45.06271, 7.67905),
                Waypoint::new(1741358198686.5452, 45.06312, 7.67791),
                Waypoint::new(1741358198700.0903, 45.06353, 7.67678),
            ]
        );
    }

    #[test]
    fn test_read_waypoints_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_waypoints(&dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn test_parse_empty_input() {
        let waypoints = parse_waypoints("".as_bytes()).unwrap();
        assert!(waypoints.is_empty());
    }

    #[test]
    fn test_parse_skips_blank_lines_and_trims() {
        let input = "1.0; 45.0 ;7.0\n\n2.0;46.0;8.0\n";
        let waypoints = parse_waypoints(input.as_bytes()).unwrap();
        assert_eq!(
            waypoints,
            vec![Waypoint::new(1.0, 45.0, 7.0), Waypoint::new(2.0, 46.0, 8.0)]
        );
    }

    #[test]
    fn test_parse_keeps_out_of_range_coordinates() {
        let waypoints = parse_waypoints("1.0;95.0;200.0".as_bytes()).unwrap();
        assert_eq!(waypoints, vec![Waypoint::new(1.0, 95.0, 200.0)]);
    }

    #[test]
    fn test_parse_non_numeric_field() {
        let input = "1.0;45.0;7.0\n2.0;north;8.0\n";
        let err = parse_waypoints(input.as_bytes()).unwrap_err();
        match err {
            Error::Waypoint { line, message } => {
                assert_eq!(line, 2);
                assert!(message.contains("latitude"), "message: {}", message);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_non_finite() {
        let err = parse_waypoints("NaN;45.0;7.0".as_bytes()).unwrap_err();
        assert!(matches!(err, Error::Waypoint { line: 1, .. }));
    }

    #[test]
    fn test_parse_missing_field() {
        let err = parse_waypoints("1.0;45.0".as_bytes()).unwrap_err();
        match err {
            Error::Waypoint { line, message } => {
                assert_eq!(line, 1);
                assert!(message.contains("found 2"), "message: {}", message);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
