//! Fixed-precision geometry for simple 2D polygons.
//!
//! Area, centroid and rotation of origin-anchored polygons, computed in
//! scaled-integer arithmetic so results are reproducible across platforms.
//!
//! Layout
//! - `codec`: `FixedPointCodec`, the `f64` ⇄ `i128` conversion at a fixed precision.
//! - `geom2`: Shoelace area, centroid and rotation over vertex slices.
//! - `polygon`: the `Polygon` aggregate used by callers.
//! - `error`: the shared `Error` enum.

pub mod codec;
pub mod error;
pub mod geom2;
pub mod polygon;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// A 2D point with `f64` coordinates.
pub type Point = nalgebra::Point2<f64>;

pub use codec::{FixedPointCodec, DEFAULT_PRECISION};
pub use error::{Error, Result};
pub use polygon::Polygon;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::codec::{FixedPointCodec, DEFAULT_PRECISION};
    pub use crate::error::{Error, Result};
    pub use crate::geom2::{compute_area, compute_centroid, rotate_point, rotate_polygon};
    pub use crate::polygon::Polygon;
    pub use crate::Point;
    pub use nalgebra::point;
}
