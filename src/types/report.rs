use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A cleaned AIS position report
///
/// Produced by parsing a raw CSV row; coordinates, timestamp and vessel name
/// are guaranteed present. Rows that fail coercion never become a
/// `PositionReport` - they are dropped during loading and counted in
/// [`AisLoadResult::rows_dropped`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PositionReport {
    pub mmsi: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Speed over ground in knots, absent when the SOG column is empty
    pub speed_over_ground: Option<f64>,
    pub timestamp: DateTime<Utc>,
    pub vessel_name: String,
}

/// Raw AIS CSV row as read from disk, before coercion
///
/// All fields are strings so a single bad cell doesn't abort the whole read;
/// coercion to `PositionReport` happens per-row afterwards.
#[derive(Debug, Clone, Deserialize)]
pub struct RawAisRecord {
    #[serde(rename = "MMSI")]
    pub mmsi: String,
    #[serde(rename = "LAT")]
    pub lat: String,
    #[serde(rename = "LON")]
    pub lon: String,
    #[serde(rename = "SOG", default)]
    pub sog: String,
    #[serde(rename = "BaseDateTime")]
    pub base_date_time: String,
    #[serde(rename = "VesselName", default)]
    pub vessel_name: String,
}

/// Result of loading an AIS CSV file, with data-quality counters
#[derive(Debug, Clone, Default)]
pub struct AisLoadResult {
    pub reports: Vec<PositionReport>,
    /// Data rows read from the file, header excluded
    pub rows_read: usize,
    /// Rows dropped because coordinates or timestamp failed to parse
    pub rows_dropped: usize,
}
