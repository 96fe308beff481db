#[cfg(feature = "csv")]
pub mod ais;
pub mod geojson;

#[cfg(feature = "csv")]
pub use ais::*;
pub use geojson::*;
