//! AIS CSV ingestion and row cleaning
//!
//! Reads NOAA-style AIS exports (columns MMSI, LAT, LON, SOG, BaseDateTime,
//! VesselName). Every row is coerced independently so a handful of corrupt
//! cells never aborts the load; bad rows are dropped and counted.

use crate::types::{AisLoadResult, PositionReport, RawAisRecord};
use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDateTime, Utc};
use std::path::Path;

/// Timestamp formats seen in AIS CSV exports, tried in order
const TIMESTAMP_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// Load and clean an AIS CSV file
///
/// Rows whose coordinates or timestamp fail to parse are dropped, not
/// fatal. A missing vessel name becomes `"Unknown"` and the row is kept.
pub fn load_ais_csv(path: &Path, debug: bool) -> Result<AisLoadResult> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("failed to open AIS CSV: {}", path.display()))?;

    let mut result = AisLoadResult::default();

    for row in reader.deserialize::<RawAisRecord>() {
        result.rows_read += 1;
        let raw = match row {
            Ok(raw) => raw,
            Err(e) => {
                if debug {
                    eprintln!("Dropping malformed row {}: {}", result.rows_read, e);
                }
                result.rows_dropped += 1;
                continue;
            }
        };

        match clean_record(&raw) {
            Some(report) => result.reports.push(report),
            None => {
                if debug {
                    eprintln!(
                        "Dropping row {} (MMSI {}): unparseable coordinates or timestamp",
                        result.rows_read, raw.mmsi
                    );
                }
                result.rows_dropped += 1;
            }
        }
    }

    if debug {
        println!(
            "Loaded {} reports from {} rows ({} dropped)",
            result.reports.len(),
            result.rows_read,
            result.rows_dropped
        );
    }

    Ok(result)
}

/// Coerce one raw CSV row into a position report
///
/// Returns `None` when latitude, longitude or timestamp cannot be parsed.
/// SOG is optional and never drops a row; an empty vessel name is replaced
/// by `"Unknown"`.
pub fn clean_record(raw: &RawAisRecord) -> Option<PositionReport> {
    let latitude: f64 = raw.lat.parse().ok()?;
    let longitude: f64 = raw.lon.parse().ok()?;
    let timestamp = parse_ais_timestamp(&raw.base_date_time)?;

    let vessel_name = if raw.vessel_name.trim().is_empty() {
        "Unknown".to_string()
    } else {
        raw.vessel_name.trim().to_string()
    };

    Some(PositionReport {
        mmsi: raw.mmsi.clone(),
        latitude,
        longitude,
        speed_over_ground: raw.sog.parse().ok(),
        timestamp,
        vessel_name,
    })
}

/// Parse an AIS timestamp string, trying the known formats in order
pub fn parse_ais_timestamp(text: &str) -> Option<DateTime<Utc>> {
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text.trim(), format).ok())
        .map(|naive| naive.and_utc())
}
