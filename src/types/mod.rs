pub mod geo;
pub mod report;

pub use geo::*;
pub use report::*;
