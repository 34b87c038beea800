//! Fixed-precision 2D polygon geometry.
//!
//! Purpose
//! - Shoelace area (signed/unsigned) and centroid over an ordered vertex list,
//!   evaluated in exact integer arithmetic after a single quantization step.
//! - Rotation of points and vertex lists about an arbitrary origin.
//!
//! All routines take the `FixedPointCodec` explicitly; none of them keeps
//! state between calls.

mod area;
pub mod rand;
mod rotate;

pub use area::{compute_area, compute_centroid};
pub(crate) use area::{measure, Measure};
pub use rotate::{rotate_point, rotate_polygon};
