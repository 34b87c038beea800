//! Shoelace area and polygon centroid in the fixed-point domain.
//!
//! Both routines walk consecutive vertex pairs `(i, i+1 mod n)`, so the
//! closing edge from the last vertex back to the first is always included.
//!
//! Sign convention: with x to the right and y up, counter-clockwise vertex
//! order gives a positive signed area. The centroid formula divides by the
//! signed area, so it yields the true centroid for either winding as long as
//! area and centroid are evaluated over the same vertex list.
//!
//! The cubic centroid sums are accumulated as `BigInt`; everything else stays
//! in checked `i128`.

use num_bigint::BigInt;

use crate::codec::{self, FixedPointCodec};
use crate::error::{Error, Result};
use crate::Point;

fn encode_all(codec: &FixedPointCodec, vertices: &[Point]) -> Result<Vec<(i128, i128)>> {
    vertices.iter().map(|&v| codec.encode_point(v)).collect()
}

/// Consecutive pairs including the wraparound `(last, first)`.
fn edges<T: Copy>(v: &[T]) -> impl Iterator<Item = (T, T)> + '_ {
    (0..v.len()).map(move |i| (v[i], v[(i + 1) % v.len()]))
}

/// `x_i·y_j − x_j·y_i` at power 2.
#[inline]
fn cross((xi, yi): (i128, i128), (xj, yj): (i128, i128)) -> Result<i128> {
    codec::sub(
        codec::mul(xi, yj, "shoelace")?,
        codec::mul(xj, yi, "shoelace")?,
        "shoelace",
    )
}

/// Twice the signed area at power 2.
fn doubled_area(encoded: &[(i128, i128)]) -> Result<i128> {
    edges(encoded).try_fold(0i128, |acc, (a, b)| codec::add(acc, cross(a, b)?, "shoelace"))
}

/// Halve a doubled Shoelace sum and decode it at power 2.
fn decode_doubled(codec: &FixedPointCodec, twice: i128) -> f64 {
    codec.decode(codec::div_round(twice, 2), 2)
}

/// Polygon area by the Shoelace formula.
///
/// Returns the signed area (positive for counter-clockwise order) when
/// `signed` is true, its absolute value otherwise. Collinear vertices give 0.
pub fn compute_area(codec: &FixedPointCodec, vertices: &[Point], signed: bool) -> Result<f64> {
    if vertices.is_empty() {
        return Err(Error::InvalidInput(
            "area needs at least one vertex".to_string(),
        ));
    }
    let encoded = encode_all(codec, vertices)?;
    let mut twice = doubled_area(&encoded)?;
    if !signed {
        twice = twice.checked_abs().ok_or(Error::Overflow { op: "shoelace" })?;
    }
    let area = decode_doubled(codec, twice);
    tracing::debug!(n = vertices.len(), signed, area, "area");
    Ok(area)
}

/// Centroid of the region enclosed by `vertices`.
///
/// `signed_area` must be the signed area of the same vertex list, as returned
/// by `compute_area(.., true)`; passing the unsigned area flips the result for
/// clockwise input. The decoded area carries only `decimals()` places, so for
/// shapes whose area is near the last decoded digit `Polygon` is the more
/// accurate route: it divides by the exact Shoelace sum instead.
///
/// Fails with `DegenerateGeometry` when the signed area is zero.
pub fn compute_centroid(
    codec: &FixedPointCodec,
    vertices: &[Point],
    signed_area: f64,
) -> Result<Point> {
    if signed_area == 0.0 {
        return Err(Error::DegenerateGeometry { signed_area });
    }
    let area2 = codec.encode(signed_area, 2)?;
    if area2 == 0 {
        return Err(Error::DegenerateGeometry { signed_area });
    }
    let twice = codec::mul(2, area2, "centroid")?;
    let encoded = encode_all(codec, vertices)?;
    let centroid = centroid_from_doubled(codec, &encoded, twice)?;
    tracing::debug!(signed_area, x = centroid.x, y = centroid.y, "centroid");
    Ok(centroid)
}

/// Centroid given twice the signed area at power 2. `twice` must be non-zero.
fn centroid_from_doubled(
    codec: &FixedPointCodec,
    encoded: &[(i128, i128)],
    twice: i128,
) -> Result<Point> {
    // c_x = Σ (x_i + x_j)(x_i y_j − x_j y_i), c_y likewise with y; power 3.
    let mut cx = BigInt::default();
    let mut cy = BigInt::default();
    for (a, b) in edges(encoded) {
        let c = BigInt::from(cross(a, b)?);
        cx += (BigInt::from(a.0) + BigInt::from(b.0)) * &c;
        cy += (BigInt::from(a.1) + BigInt::from(b.1)) * &c;
    }

    // power 3 / power 2 -> power 1; 6·area = 3·twice
    let denom = BigInt::from(twice) * 3i32;
    let x = codec::narrow(codec::div_round_wide(&cx, &denom), "centroid")?;
    let y = codec::narrow(codec::div_round_wide(&cy, &denom), "centroid")?;
    Ok(codec.decode_point(x, y, 1))
}

/// Derived quantities of one vertex list.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Measure {
    pub area: f64,
    pub signed_area: f64,
    pub centroid: Point,
}

/// Unsigned area, signed area and centroid from a single encoding.
///
/// The centroid is divided by the exact doubled Shoelace sum, not by the
/// decoded signed area, so it stays exact for areas below the last decoded
/// digit. Fails with `DegenerateGeometry` only when that sum is zero.
pub(crate) fn measure(codec: &FixedPointCodec, vertices: &[Point]) -> Result<Measure> {
    let encoded = encode_all(codec, vertices)?;
    let twice = doubled_area(&encoded)?;
    let signed_area = decode_doubled(codec, twice);
    if twice == 0 {
        return Err(Error::DegenerateGeometry { signed_area });
    }
    let abs = twice.checked_abs().ok_or(Error::Overflow { op: "shoelace" })?;
    let area = decode_doubled(codec, abs);
    let centroid = centroid_from_doubled(codec, &encoded, twice)?;
    tracing::debug!(
        n = vertices.len(),
        signed_area,
        x = centroid.x,
        y = centroid.y,
        "measure"
    );
    Ok(Measure {
        area,
        signed_area,
        centroid,
    })
}
