//! Error type shared by the codec, the geometry routines and `Polygon`.

use thiserror::Error;

/// Failure of a geometry operation.
///
/// Every variant is a local, deterministic failure of the call that raised it;
/// nothing here is transient.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Centroid requested for a vertex configuration with zero signed area.
    #[error("centroid is undefined for a degenerate polygon (signed area {signed_area})")]
    DegenerateGeometry { signed_area: f64 },

    /// A scaled integer or an intermediate product left the `i128` range.
    #[error("fixed-point overflow in {op}")]
    Overflow { op: &'static str },

    /// Too few points, non-finite numbers, or an unusable configuration.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, Error>;
