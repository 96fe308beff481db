//! Boundary GeoJSON loading

use crate::error::AisError;
use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Load a GeoJSON document as an untyped JSON tree
///
/// No shape validation beyond JSON well-formedness; the centroid walk and
/// the boundary layer both tolerate arbitrary structure. Callers that want
/// the non-fatal behavior (missing boundary file still renders a map)
/// substitute `Value::Null` on error.
pub fn load_geojson(path: &Path) -> Result<Value> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read GeoJSON: {}", path.display()))?;
    let value = serde_json::from_str(&text)
        .map_err(AisError::Json)
        .with_context(|| format!("invalid JSON in {}", path.display()))?;
    Ok(value)
}
