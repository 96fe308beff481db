//! End-to-end pipeline tests: CSV on disk -> clean -> dedupe -> centroid -> HTML
//!
//! These exercise the same path the CLI takes, using the library API against
//! temp files.

#![cfg(feature = "csv")]

use ais_visualizer::{
    dedupe, export_to_html, geojson_center, load_ais_csv, load_geojson, ExportOptions,
};
use chrono::Duration;
use std::fs;
use tempfile::TempDir;

const SAMPLE_CSV: &str = "\
MMSI,BaseDateTime,LAT,LON,SOG,VesselName
367001234,2024-03-01T12:00:00,31.5000,-64.8000,12.0,ATLANTIC TRADER
367001234,2024-03-01T12:03:00,31.5100,-64.7900,12.1,ATLANTIC TRADER
367001234,2024-03-01T12:11:00,31.5400,-64.7600,12.3,ATLANTIC TRADER
367005678,2024-03-01T12:01:00,32.1000,-64.2000,8.0,SEA WATCHER
367005678,2024-03-01T12:04:00,32.1100,-64.2100,,SEA WATCHER
bad-row,not-a-date,xx,yy,1.0,GHOST SHIP
367009999,2024-03-01T12:02:00,30.9000,-63.0000,5.5,
";

const SAMPLE_GEOJSON: &str = r#"{
  "type": "Feature",
  "geometry": {
    "type": "Polygon",
    "coordinates": [[
      [-70.0, 25.0], [-55.0, 25.0], [-55.0, 35.0], [-70.0, 35.0], [-70.0, 25.0]
    ]]
  }
}"#;

#[test]
fn test_full_pipeline_produces_artifact() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let csv_path = temp_dir.path().join("sample.csv");
    let geojson_path = temp_dir.path().join("boundary.json");
    fs::write(&csv_path, SAMPLE_CSV).unwrap();
    fs::write(&geojson_path, SAMPLE_GEOJSON).unwrap();

    let loaded = load_ais_csv(&csv_path, false).expect("CSV should load");
    assert_eq!(loaded.rows_read, 7);
    assert_eq!(loaded.rows_dropped, 1, "only the unparseable row is dropped");
    assert_eq!(loaded.reports.len(), 6);

    // Empty vessel name survives cleaning as "Unknown"
    assert!(loaded.reports.iter().any(|r| r.vessel_name == "Unknown"));

    let reports = dedupe(loaded.reports, Duration::minutes(10));
    // 367001234: 12:00 + 12:11 survive; 367005678: 12:01; 367009999: 12:02
    assert_eq!(reports.len(), 4);

    let boundary = load_geojson(&geojson_path).expect("GeoJSON should load");
    let center = geojson_center(&boundary);
    // Mean of the five ring vertices (closing vertex counted, as documented)
    assert!((center.latitude - 29.0).abs() < 1e-9);
    assert!((center.longitude - (-64.0)).abs() < 1e-9);

    let options = ExportOptions::default();
    let artifact = export_to_html(&reports, &boundary, center, &csv_path, &options)
        .expect("export should succeed");

    assert_eq!(artifact, temp_dir.path().join("sample.html"));
    let content = fs::read_to_string(&artifact).unwrap();
    assert!(content.contains("ATLANTIC TRADER"));
    assert!(content.contains("keplergl"));
}

#[test]
fn test_missing_csv_is_an_error_for_library_callers() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let missing = temp_dir.path().join("nope.csv");
    assert!(
        load_ais_csv(&missing, false).is_err(),
        "library callers see the error; the CLI downgrades it to a warning"
    );
}

#[test]
fn test_dedupe_then_export_with_zero_window() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let csv_path = temp_dir.path().join("sample.csv");
    fs::write(&csv_path, SAMPLE_CSV).unwrap();

    let loaded = load_ais_csv(&csv_path, false).unwrap();
    let cleaned_count = loaded.reports.len();
    let reports = dedupe(loaded.reports, Duration::zero());
    assert_eq!(
        reports.len(),
        cleaned_count,
        "zero window keeps every cleaned report"
    );
}
