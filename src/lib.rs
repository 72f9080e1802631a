pub mod error;
pub mod io;
pub mod math;
pub mod polygon;
pub mod winding;

pub use error::{PolywindError, Result};
pub use polygon::Polygon;
pub use winding::{BoundaryRule, Variant, WindingNumberAlgorithm};
