//! AIS Visualizer Library
//!
//! A Rust library for cleaning AIS vessel position reports and rendering
//! them together with a marine-protected-area boundary on an interactive
//! Kepler.gl map. The pipeline is a single batch transform: load CSV, drop
//! unparseable rows, deduplicate per vessel per time window, compute the
//! boundary centroid, write one self-contained HTML artifact.
//!
//! # Features
//!
//! - **`csv`** (default): Enable AIS CSV ingestion
//! - **`cli`** (default): Build the command-line binary
//!
//! # Quick Start
//!
//! Clean, deduplicate and export a day of AIS traffic:
//! ```rust,no_run
//! use ais_visualizer::{
//!     dedupe, export_to_html, geojson_center, load_ais_csv, load_geojson, ExportOptions,
//! };
//! use chrono::Duration;
//! use std::path::Path;
//!
//! let csv_path = Path::new("ais_reports.csv");
//! let loaded = load_ais_csv(csv_path, false).unwrap();
//! let reports = dedupe(loaded.reports, Duration::minutes(10));
//!
//! let boundary = load_geojson(Path::new("mpa_boundary.json")).unwrap();
//! let center = geojson_center(&boundary);
//!
//! let options = ExportOptions::default();
//! let artifact = export_to_html(&reports, &boundary, center, csv_path, &options).unwrap();
//! println!("Wrote {}", artifact.display());
//! ```
//!
//! # Public API
//!
//! ## Ingestion
//! - [`load_ais_csv`] - Load and clean an AIS CSV file
//! - [`clean_record`] - Coerce a single raw row
//! - [`load_geojson`] - Load a boundary GeoJSON document
//!
//! ## Core transforms
//! - [`dedupe`] / [`dedupe_sorted`] - Time-windowed deduplication
//! - [`geojson_center`] - Recursive GeoJSON centroid
//!
//! ## Export
//! - [`export_to_html`] - Write the Kepler.gl HTML artifact
//! - [`build_map_config`] / [`build_datasets`] - Kepler.gl document builders
//! - [`compute_export_path`] - Consistent output path computation
//!
//! ## Data Types
//! - [`PositionReport`] - Cleaned AIS position report
//! - [`AisLoadResult`] - Reports plus data-quality counters
//! - [`MapCenter`] - Map framing coordinate
//! - [`ExportOptions`] - Export configuration

// Module declarations
pub mod centroid;
pub mod dedup;
pub mod error;
pub mod export;
pub mod parser;
pub mod types;

// Re-export everything from modules for convenience
#[allow(ambiguous_glob_reexports)]
pub use centroid::*;
#[allow(ambiguous_glob_reexports)]
pub use dedup::*;
#[allow(ambiguous_glob_reexports)]
pub use error::*;
#[allow(ambiguous_glob_reexports)]
pub use export::*;
#[allow(ambiguous_glob_reexports)]
pub use parser::*;
#[allow(ambiguous_glob_reexports)]
pub use types::*;

// Re-export Result type for convenience
pub use anyhow::Result;
