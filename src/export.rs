//! Kepler.gl HTML export
//!
//! Builds the Kepler.gl `v1` map configuration (point layer colored by
//! vessel, outlined boundary polygon, animated time-range filter) and writes
//! a self-contained HTML artifact embedding both datasets plus the config.

use crate::error::AisError;
use crate::types::{MapCenter, PositionReport};
use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// Dataset id of the vessel position layer
pub const AIS_DATASET_ID: &str = "AIS";
/// Dataset id of the boundary region layer
pub const REGION_DATASET_ID: &str = "Region";

/// Export options for the HTML artifact
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Explicit output file; overrides `output_dir`
    pub output: Option<String>,
    /// Directory for the output file (default: same as input file)
    pub output_dir: Option<String>,
    /// Dedup window in minutes; the initial time filter spans twice this
    pub window_minutes: i64,
    /// Label for the boundary region layer
    pub region_name: String,
    /// Initial map zoom level
    pub zoom: f64,
    /// Map height in pixels
    pub map_height: u32,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            output: None,
            output_dir: None,
            window_minutes: 10,
            region_name: "Boundary".to_string(),
            zoom: 4.0,
            map_height: 1600,
        }
    }
}

/// Compute the output HTML path for a given input file
///
/// `--output` wins outright; otherwise the file is named after the input
/// stem and placed in `--output-dir` or beside the input.
pub fn compute_export_path(input_path: &Path, options: &ExportOptions) -> PathBuf {
    if let Some(output) = &options.output {
        return PathBuf::from(output);
    }

    let base_name = input_path
        .file_stem()
        .and_then(|n| n.to_str())
        .unwrap_or("ais_visualizer");

    let output_dir = options
        .output_dir
        .as_ref()
        .map(PathBuf::from)
        .or_else(|| input_path.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."));

    output_dir.join(format!("{}.html", base_name))
}

/// Initial time-filter bounds in epoch milliseconds
///
/// Spans twice the dedup window from the earliest report so the first view
/// always shows at least two buckets of traffic. Precondition: `reports`
/// sorted ascending by timestamp. Empty input yields `(0, 0)`.
pub fn time_filter_range(reports: &[PositionReport], window_minutes: i64) -> (i64, i64) {
    match reports.first() {
        Some(first) => {
            let start_ms = first.timestamp.timestamp_millis();
            (start_ms, start_ms + window_minutes * 2 * 60_000)
        }
        None => (0, 0),
    }
}

/// Build the Kepler.gl `v1` configuration document
pub fn build_map_config(
    center: MapCenter,
    time_range: (i64, i64),
    options: &ExportOptions,
) -> Value {
    json!({
        "version": "v1",
        "config": {
            "mapState": {
                "latitude": center.latitude,
                "longitude": center.longitude,
                "zoom": options.zoom
            },
            "visState": {
                "filters": [
                    {
                        "dataId": AIS_DATASET_ID,
                        "id": "time-filter",
                        "name": "BaseDateTime",
                        "type": "timeRange",
                        "value": [time_range.0, time_range.1],
                        "isAnimating": true,
                        "enlarged": true,
                        "speed": 1
                    }
                ],
                "layers": [
                    {
                        "id": "ais-points",
                        "type": "point",
                        "config": {
                            "dataId": AIS_DATASET_ID,
                            "label": "Vessel Positions",
                            "columns": {
                                "lat": "latitude",
                                "lng": "longitude"
                            },
                            "isVisible": true,
                            "visConfig": {
                                "radius": 8,
                                "opacity": 0.9,
                                "colorRange": {
                                    "name": "ColorBrewer Set1",
                                    "type": "qualitative",
                                    "category": "ColorBrewer",
                                    "colors": [
                                        "#e41a1c", "#377eb8", "#4daf4a", "#984ea3",
                                        "#ff7f00", "#ffff33", "#a65628", "#f781bf", "#999999"
                                    ]
                                }
                            },
                            "colorField": {
                                "name": "VesselName",
                                "type": "string"
                            }
                        }
                    },
                    {
                        "id": "boundary-region",
                        "type": "geojson",
                        "config": {
                            "dataId": REGION_DATASET_ID,
                            "label": options.region_name,
                            "columns": {"geojson": "geometry"},
                            "isVisible": true,
                            "visConfig": {
                                "opacity": 0.8,
                                "strokeOpacity": 0.8,
                                "thickness": 3,
                                "strokeColor": [0, 0, 255],
                                "filled": false,
                                "stroked": true
                            }
                        }
                    }
                ],
                "interactionConfig": {
                    "tooltip": {
                        "fieldsToShow": {
                            AIS_DATASET_ID: [
                                {"name": "VesselName", "format": null},
                                {"name": "BaseDateTime", "format": null},
                                {"name": "longitude", "format": null},
                                {"name": "latitude", "format": null}
                            ]
                        },
                        "enabled": true
                    }
                }
            }
        }
    })
}

/// Build both Kepler.gl datasets: AIS rows plus a one-row region table
/// holding the boundary document as a serialized geometry string
pub fn build_datasets(
    reports: &[PositionReport],
    boundary_geojson: &Value,
    options: &ExportOptions,
) -> Value {
    let rows: Vec<Value> = reports
        .iter()
        .map(|r| {
            json!([
                r.mmsi,
                r.speed_over_ground,
                r.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
                r.vessel_name,
                r.latitude,
                r.longitude
            ])
        })
        .collect();

    json!([
        {
            "info": {"id": AIS_DATASET_ID, "label": "Vessel Positions"},
            "data": {
                "fields": [
                    {"name": "MMSI", "type": "string"},
                    {"name": "SOG", "type": "real"},
                    {"name": "BaseDateTime", "type": "timestamp"},
                    {"name": "VesselName", "type": "string"},
                    {"name": "latitude", "type": "real"},
                    {"name": "longitude", "type": "real"}
                ],
                "rows": rows
            }
        },
        {
            "info": {"id": REGION_DATASET_ID, "label": options.region_name},
            "data": {
                "fields": [
                    {"name": "name", "type": "string"},
                    {"name": "geometry", "type": "geojson"}
                ],
                "rows": [[options.region_name, boundary_geojson.to_string()]]
            }
        }
    ])
}

/// Write the self-contained HTML artifact
///
/// Creates the output directory if missing. An empty report set still
/// produces an artifact (the boundary layer renders alone). Any write
/// failure is fatal and propagated to the caller.
pub fn export_to_html(
    reports: &[PositionReport],
    boundary_geojson: &Value,
    center: MapCenter,
    input_path: &Path,
    options: &ExportOptions,
) -> Result<PathBuf> {
    let output_path = compute_export_path(input_path, options);

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("failed to create output directory: {}", parent.display())
            })?;
        }
    }

    let time_range = time_filter_range(reports, options.window_minutes);
    let config = build_map_config(center, time_range, options);
    let datasets = build_datasets(reports, boundary_geojson, options);

    let html = render_html(&datasets, &config, options);
    fs::write(&output_path, html).map_err(|e| {
        AisError::Export(format!(
            "failed to write artifact {}: {}",
            output_path.display(),
            e
        ))
    })?;

    Ok(output_path)
}

const HTML_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8"/>
  <title>AIS Visualizer</title>
  <style>
    body { margin: 0; padding: 0; }
    #app { width: 100vw; height: __HEIGHT__px; }
  </style>
  <script src="https://unpkg.com/react@16.8.4/umd/react.production.min.js"></script>
  <script src="https://unpkg.com/react-dom@16.8.4/umd/react-dom.production.min.js"></script>
  <script src="https://unpkg.com/redux@3.7.2/dist/redux.min.js"></script>
  <script src="https://unpkg.com/react-redux@7.1.3/dist/react-redux.min.js"></script>
  <script src="https://unpkg.com/styled-components@4.1.3/dist/styled-components.min.js"></script>
  <script src="https://unpkg.com/kepler.gl@2.5.5/umd/keplergl.min.js"></script>
</head>
<body>
<div id="app"></div>
<script>
  var datasets = __DATASETS__;
  var config = __CONFIG__;

  var reducers = Redux.combineReducers({
    keplerGl: KeplerGl.keplerGlReducer
  });
  var middlewares = KeplerGl.enhanceReduxMiddleware([]);
  var store = Redux.createStore(
    reducers,
    {},
    Redux.compose(Redux.applyMiddleware.apply(null, middlewares))
  );

  var map = React.createElement(KeplerGl.KeplerGl, {
    mapboxApiAccessToken: "",
    id: "map",
    width: window.innerWidth,
    height: window.innerHeight
  });
  ReactDOM.render(
    React.createElement(ReactRedux.Provider, { store: store }, map),
    document.getElementById("app")
  );

  store.dispatch(KeplerGl.addDataToMap({
    datasets: datasets,
    config: config,
    options: { centerMap: false, readOnly: false }
  }));
</script>
</body>
</html>
"#;

fn render_html(datasets: &Value, config: &Value, options: &ExportOptions) -> String {
    HTML_TEMPLATE
        .replace("__HEIGHT__", &options.map_height.to_string())
        .replace("__DATASETS__", &escape_json(datasets))
        .replace("__CONFIG__", &escape_json(config))
}

/// Serialize JSON for inline `<script>` embedding
///
/// `</` must not appear literally or a vessel name containing "</script>"
/// would terminate the script block early.
fn escape_json(value: &Value) -> String {
    value.to_string().replace("</", "<\\/")
}
