//! GeoJSON centroid computation for initial map framing
//!
//! Walks an arbitrary GeoJSON document depth-first, collects every
//! `[lon, lat]` coordinate pair, and averages them. The traversal is
//! structural: it works on any well-formed Point / LineString / Polygon /
//! Feature / FeatureCollection nesting without knowing the geometry type.

use crate::types::MapCenter;
use serde_json::Value;

/// Classification of a GeoJSON tree node for the coordinate walk
///
/// Dispatching on this tag instead of probing keys at every call site keeps
/// the recursion in one match.
#[derive(Debug)]
pub enum GeoNode<'a> {
    /// A bare `[lon, lat]` pair: an array of exactly two numbers
    CoordinatePair(f64, f64),
    /// An object carrying a `coordinates` key (any Geometry object)
    ObjectWithCoordinates(&'a Value),
    /// An object carrying a `features` array (a FeatureCollection)
    FeatureCollection(&'a [Value]),
    /// An object carrying a `geometry` key (a Feature)
    Feature(&'a Value),
    /// Any other array: a nested coordinate list, recurse per element
    NestedList(&'a [Value]),
    /// Scalars and unrecognized objects contribute nothing
    Other,
}

impl<'a> GeoNode<'a> {
    /// Classify a JSON value for the coordinate walk
    ///
    /// Known limitation: an array of exactly two numbers is ALWAYS treated
    /// as a single `[lon, lat]` pair. A degenerate geometry whose outer
    /// array also has length 2 (e.g. a two-point LineString) is only
    /// recursed into because its elements are arrays, not numbers; there is
    /// no way to tell a bare two-number array apart from anything else, and
    /// this heuristic is kept as-is rather than resolved silently.
    pub fn classify(value: &'a Value) -> GeoNode<'a> {
        match value {
            Value::Object(map) => {
                if let Some(coords) = map.get("coordinates") {
                    GeoNode::ObjectWithCoordinates(coords)
                } else if let Some(features) = map.get("features") {
                    match features {
                        Value::Array(items) => GeoNode::FeatureCollection(items),
                        _ => GeoNode::Other,
                    }
                } else if let Some(geometry) = map.get("geometry") {
                    GeoNode::Feature(geometry)
                } else {
                    GeoNode::Other
                }
            }
            Value::Array(items) => {
                if let [a, b] = items.as_slice() {
                    if let (Some(lon), Some(lat)) = (a.as_f64(), b.as_f64()) {
                        return GeoNode::CoordinatePair(lon, lat);
                    }
                }
                GeoNode::NestedList(items)
            }
            _ => GeoNode::Other,
        }
    }
}

/// Compute the mean position of every coordinate pair in a GeoJSON document
///
/// GeoJSON stores pairs as `[lon, lat]`; the result swaps to latitude-first
/// to match map-center conventions. Malformed input, or a document with no
/// extractable coordinates, yields the degenerate `(0, 0)` center.
pub fn geojson_center(geojson: &Value) -> MapCenter {
    let mut pairs = Vec::new();
    extract_coordinates(geojson, &mut pairs);

    if pairs.is_empty() {
        return MapCenter::default();
    }

    let count = pairs.len() as f64;
    let lon_sum: f64 = pairs.iter().map(|&(lon, _)| lon).sum();
    let lat_sum: f64 = pairs.iter().map(|&(_, lat)| lat).sum();

    MapCenter::new(lat_sum / count, lon_sum / count)
}

fn extract_coordinates(value: &Value, pairs: &mut Vec<(f64, f64)>) {
    match GeoNode::classify(value) {
        GeoNode::CoordinatePair(lon, lat) => pairs.push((lon, lat)),
        GeoNode::ObjectWithCoordinates(inner) | GeoNode::Feature(inner) => {
            extract_coordinates(inner, pairs)
        }
        GeoNode::FeatureCollection(items) | GeoNode::NestedList(items) => {
            for item in items {
                extract_coordinates(item, pairs);
            }
        }
        GeoNode::Other => {}
    }
}
