//! CLI binary for the AIS Visualizer
//!
//! Loads an AIS CSV and an optional boundary GeoJSON, deduplicates position
//! reports per vessel per time window, and writes a self-contained Kepler.gl
//! HTML map.

use ais_visualizer::{
    dedupe, export_to_html, geojson_center, load_ais_csv, load_geojson, AisLoadResult,
    ExportOptions,
};
use anyhow::Result;
use chrono::Duration;
use clap::{Arg, Command};
use serde_json::Value;
use std::path::Path;

fn main() -> Result<()> {
    let matches = Command::new("AIS Visualizer")
        .version(concat!(
            env!("CARGO_PKG_VERSION"),
            " (",
            env!("VERGEN_GIT_SHA"),
            ")"
        ))
        .about("Deduplicate AIS position reports and render them with an MPA boundary on an interactive map.")
        .arg(
            Arg::new("csv")
                .help("AIS CSV file with MMSI, LAT, LON, SOG, BaseDateTime, VesselName columns")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("geojson")
                .long("geojson")
                .help("Boundary region GeoJSON file (rendered as an outlined polygon, used for map centering)")
                .value_name("FILE"),
        )
        .arg(
            Arg::new("window-minutes")
                .long("window-minutes")
                .help("Deduplication window in minutes; one report per vessel per window survives (0 disables)")
                .value_name("N")
                .value_parser(clap::value_parser!(i64))
                .default_value("10"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Output HTML file (default: <input stem>.html beside the input)")
                .value_name("FILE"),
        )
        .arg(
            Arg::new("output-dir")
                .long("output-dir")
                .help("Directory for the output HTML file (ignored when --output is given)")
                .value_name("DIR"),
        )
        .arg(
            Arg::new("region-name")
                .long("region-name")
                .help("Label for the boundary region layer")
                .value_name("NAME")
                .default_value("Boundary"),
        )
        .arg(
            Arg::new("zoom")
                .long("zoom")
                .help("Initial map zoom level")
                .value_name("Z")
                .value_parser(clap::value_parser!(f64))
                .default_value("4"),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .help("Enable debug output and per-row drop reporting")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    let debug = matches.get_flag("debug");
    let csv_path = Path::new(matches.get_one::<String>("csv").unwrap());
    let window_minutes = *matches.get_one::<i64>("window-minutes").unwrap();

    let export_options = ExportOptions {
        output: matches.get_one::<String>("output").cloned(),
        output_dir: matches.get_one::<String>("output-dir").cloned(),
        window_minutes,
        region_name: matches.get_one::<String>("region-name").unwrap().clone(),
        zoom: *matches.get_one::<f64>("zoom").unwrap(),
        ..ExportOptions::default()
    };

    // Missing or unreadable inputs are data-quality problems, not fatal:
    // the artifact still renders with whatever layers have data.
    let loaded = match load_ais_csv(csv_path, debug) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Warning: could not load AIS data: {e}");
            AisLoadResult::default()
        }
    };

    let rows_before_dedup = loaded.reports.len();
    let reports = dedupe(loaded.reports, Duration::minutes(window_minutes));

    let boundary = match matches.get_one::<String>("geojson") {
        Some(geojson_path) => match load_geojson(Path::new(geojson_path)) {
            Ok(value) => value,
            Err(e) => {
                eprintln!("Warning: could not load boundary GeoJSON: {e}");
                Value::Null
            }
        },
        None => Value::Null,
    };

    let center = geojson_center(&boundary);
    if debug {
        println!(
            "Map center: ({:.5}, {:.5})",
            center.latitude, center.longitude
        );
    }

    // Writing the artifact is the one fatal step
    let artifact = export_to_html(&reports, &boundary, center, csv_path, &export_options)?;

    println!(
        "Read {} rows ({} dropped), {} reports after {}-minute dedup ({} duplicates removed)",
        loaded.rows_read,
        loaded.rows_dropped,
        reports.len(),
        window_minutes,
        rows_before_dedup - reports.len()
    );
    println!("Exported map to: {}", artifact.display());

    Ok(())
}
