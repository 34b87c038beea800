//! `Polygon`: origin-anchored vertex list with derived area and centroid.
//!
//! Conventions
//! - Caller points never include the origin; `(0, 0)` is prepended as vertex 0
//!   and takes part in every Shoelace pair and every rotation.
//! - Area and centroid are derived once at construction (unsigned area, then
//!   signed area, then the centroid from the exact doubled signed area, so
//!   areas below the last decoded digit still get their true centroid).
//!   Rotations replace
//!   the vertices only: rotation preserves both quantities, so they are never
//!   recomputed and cannot drift.
//! - Degenerate input is rejected at construction, so every `Polygon` has a
//!   defined centroid.

use std::fmt;

use crate::codec::FixedPointCodec;
use crate::error::{Error, Result};
use crate::geom2::{measure, rotate_point, rotate_polygon, Measure};
use crate::Point;

/// Minimum number of caller points (four vertices with the origin).
pub const MIN_POINTS: usize = 3;

/// Simple polygon anchored at the origin, with its area and centroid.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    codec: FixedPointCodec,
    vertices: Vec<Point>,
    area: f64,
    signed_area: f64,
    centroid: Point,
}

impl Polygon {
    /// Build from caller points using the default codec.
    pub fn new(points: &[Point]) -> Result<Self> {
        Self::with_codec(points, FixedPointCodec::default())
    }

    /// Build from caller points (origin excluded).
    ///
    /// Fails with `InvalidInput` for fewer than `MIN_POINTS` points and with
    /// `DegenerateGeometry` when the outline encloses no area.
    pub fn with_codec(points: &[Point], codec: FixedPointCodec) -> Result<Self> {
        if points.len() < MIN_POINTS {
            return Err(Error::InvalidInput(format!(
                "a polygon needs at least {MIN_POINTS} points besides the origin, got {}",
                points.len()
            )));
        }
        let mut vertices = Vec::with_capacity(points.len() + 1);
        vertices.push(Point::origin());
        vertices.extend_from_slice(points);

        let Measure {
            area,
            signed_area,
            centroid,
        } = measure(&codec, &vertices)?;
        tracing::debug!(n = vertices.len(), area, signed_area, "polygon constructed");
        Ok(Self {
            codec,
            vertices,
            area,
            signed_area,
            centroid,
        })
    }

    /// Rotate in place about the centroid by `angle` radians (counter-clockwise
    /// for positive angles). Area and centroid are unchanged.
    pub fn rotate(&mut self, angle: f64) -> Result<()> {
        self.vertices = rotate_polygon(&self.codec, &self.vertices, angle, self.centroid)?;
        Ok(())
    }

    /// Rotate in place about an arbitrary `origin`. The stored centroid is
    /// carried along by the same rotation; the area is unchanged.
    pub fn rotate_about(&mut self, angle: f64, origin: Point) -> Result<()> {
        let vertices = rotate_polygon(&self.codec, &self.vertices, angle, origin)?;
        self.centroid = rotate_point(&self.codec, self.centroid, angle, origin)?;
        self.vertices = vertices;
        Ok(())
    }

    /// All vertices, origin vertex first.
    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Unsigned area.
    #[inline]
    pub fn area(&self) -> f64 {
        self.area
    }

    /// Signed area of the construction-time outline (positive = counter-clockwise).
    #[inline]
    pub fn signed_area(&self) -> f64 {
        self.signed_area
    }

    #[inline]
    pub fn centroid(&self) -> Point {
        self.centroid
    }

    #[inline]
    pub fn codec(&self) -> FixedPointCodec {
        self.codec
    }
}

impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Polygon with vertices:")?;
        for v in &self.vertices {
            write!(f, "\n({}, {})", v.x, v.y)?;
        }
        Ok(())
    }
}
