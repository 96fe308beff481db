use serde::{Deserialize, Serialize};

/// Map framing coordinate computed from a GeoJSON document
///
/// Arithmetic mean of every coordinate pair found in the document. The
/// default `(0, 0)` is the degenerate center used when no coordinates could
/// be extracted - not an error, the map just opens off-center.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MapCenter {
    pub latitude: f64,
    pub longitude: f64,
}

impl MapCenter {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}
