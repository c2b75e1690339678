//! Waypoint CSV reader
//!
//! One waypoint per line as `timestamp;latitude;longitude`, no header row.

use csv::{ReaderBuilder, StringRecord, Trim};
use log::debug;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::analysis::{Waypoint, WaypointList};
use crate::error::{Error, Result};

/// Field delimiter of the waypoint file
pub const DELIMITER: u8 = b';';

const FIELDS: [&str; 3] = ["timestamp", "latitude", "longitude"];

/// Reads all waypoints from a file, in file order
pub fn read_waypoints(path: &Path) -> Result<WaypointList> {
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    let waypoints = parse_waypoints(file)?;
    debug!("Read {} waypoints from {:?}", waypoints.len(), path);
    Ok(waypoints)
}

/// Parses waypoints from any reader
///
/// Every row must hold three numeric fields; extra trailing fields are
/// ignored. Blank lines are skipped. Coordinates are not range-checked here,
/// that happens when distances are computed.
pub fn parse_waypoints<R: Read>(reader: R) -> Result<WaypointList> {
    let mut reader = ReaderBuilder::new()
        .delimiter(DELIMITER)
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut waypoints = WaypointList::new();
    for result in reader.records() {
        let record = result?;
        let line = record.position().map_or(0, |p| p.line());
        waypoints.push(parse_record(&record, line)?);
    }

    Ok(waypoints)
}

fn parse_record(record: &StringRecord, line: u64) -> Result<Waypoint> {
    if record.len() < FIELDS.len() {
        return Err(Error::Waypoint {
            line,
            message: format!(
                "expected {} fields separated by '{}', found {}",
                FIELDS.len(),
                DELIMITER as char,
                record.len()
            ),
        });
    }

    let mut values = [0.0; 3];
    for (i, name) in FIELDS.iter().enumerate() {
        let raw = &record[i];
        values[i] = match raw.parse::<f64>() {
            Ok(value) if value.is_finite() => value,
            _ => {
                return Err(Error::Waypoint {
                    line,
                    message: format!("{} {:?} is not a finite number", name, raw),
                });
            }
        };
    }

    Ok(Waypoint::new(values[0], values[1], values[2]))
}
