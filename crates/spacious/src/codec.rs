//! Fixed-point codec: `f64` ⇄ scaled `i128`.
//!
//! Purpose
//! - Quantize floating-point coordinates exactly once, so that Shoelace sums,
//!   centroid sums and rotation products run in exact integer arithmetic.
//! - Decode with explicit rounding to `precision - 1` decimals; the last
//!   encoded digit only absorbs quantization noise and never reaches callers.
//!
//! Conventions
//! - A value encoded at `power = k` is scaled by `10^(precision·k)`. The
//!   product of two power-1 integers is a power-2 quantity (area), of three a
//!   power-3 quantity (centroid sums).
//! - Power-1 and power-2 values are `i128`; all arithmetic on them goes
//!   through the checked helpers below and reports `Error::Overflow` rather
//!   than wrapping. Power-3 sums are accumulated as `BigInt` and narrowed back
//!   to `i128` after the division that brings them down to power 1.
//! - Usable range: `|coordinate| · 10^precision` up to about `10^18`, i.e.
//!   ±10^9 at the default precision and ±10^6 at `MAX_PRECISION`.

use num_bigint::{BigInt, Sign};

use crate::error::{Error, Result};
use crate::Point;

/// Decimal digits used when no precision is configured.
pub const DEFAULT_PRECISION: u32 = 9;

/// Largest accepted precision.
pub const MAX_PRECISION: u32 = 12;

/// `i128::MAX` as `f64` (rounded up to 2^127), the first magnitude that no
/// longer converts.
const I128_LIMIT: f64 = 170_141_183_460_469_231_731_687_303_715_884_105_728.0;

/// Fixed-point configuration and conversions.
///
/// The precision is fixed when the codec is built; there is no global state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedPointCodec {
    precision: u32,
}

impl Default for FixedPointCodec {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
        }
    }
}

impl FixedPointCodec {
    /// Codec with `precision` decimal digits (1..=`MAX_PRECISION`).
    pub fn new(precision: u32) -> Result<Self> {
        if !(1..=MAX_PRECISION).contains(&precision) {
            return Err(Error::InvalidInput(format!(
                "precision must be in 1..={MAX_PRECISION}, got {precision}"
            )));
        }
        Ok(Self { precision })
    }

    #[inline]
    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// Decimal places kept by `decode`.
    #[inline]
    pub fn decimals(&self) -> u32 {
        self.precision - 1
    }

    /// One unit in the last decoded decimal place.
    #[inline]
    pub fn tolerance(&self) -> f64 {
        10f64.powi(-(self.decimals() as i32))
    }

    /// `10^(precision·power)` as an integer.
    pub fn scale(&self, power: u32) -> Result<i128> {
        pow10(self.precision * power).ok_or(Error::Overflow { op: "scale" })
    }

    /// `round(value · 10^(precision·power))`.
    pub fn encode(&self, value: f64, power: u32) -> Result<i128> {
        if !value.is_finite() {
            return Err(Error::InvalidInput(format!(
                "cannot encode non-finite value {value}"
            )));
        }
        let scaled = (value * 10f64.powi((self.precision * power) as i32)).round();
        // NaN comes from `0 · inf` when the scale itself overflows f64.
        if scaled.is_nan() || scaled.abs() >= I128_LIMIT {
            return Err(Error::Overflow { op: "encode" });
        }
        Ok(scaled as i128)
    }

    /// `scaled / 10^(precision·power)`, rounded to `decimals()` places.
    ///
    /// Rounding happens on the integer before the single conversion to `f64`,
    /// so noise below the last decoded digit (e.g. `-1e-9`) becomes exactly 0.
    pub fn decode(&self, scaled: i128, power: u32) -> f64 {
        let exp = self.precision * power;
        let decimals = self.decimals();
        if exp <= decimals {
            return scaled as f64 / 10f64.powi(exp as i32);
        }
        match pow10(exp - decimals) {
            Some(divisor) => div_round(scaled, divisor) as f64 / 10f64.powi(decimals as i32),
            // Divisor beyond i128: every representable `scaled` rounds to zero.
            None => 0.0,
        }
    }

    /// Encode both coordinates at power 1.
    #[inline]
    pub fn encode_point(&self, p: Point) -> Result<(i128, i128)> {
        Ok((self.encode(p.x, 1)?, self.encode(p.y, 1)?))
    }

    /// Decode a coordinate pair encoded at `power`.
    #[inline]
    pub fn decode_point(&self, x: i128, y: i128, power: u32) -> Point {
        Point::new(self.decode(x, power), self.decode(y, power))
    }
}

fn pow10(exp: u32) -> Option<i128> {
    10i128.checked_pow(exp)
}

/// Integer division rounding half away from zero. `d` must be non-zero.
pub(crate) fn div_round(n: i128, d: i128) -> i128 {
    let q = n / d;
    let r = (n % d).unsigned_abs();
    // 2r >= |d| without forming 2r
    if r >= d.unsigned_abs() - r {
        if (n < 0) == (d < 0) {
            q + 1
        } else {
            q - 1
        }
    } else {
        q
    }
}

/// `div_round` for power-3 sums that no longer fit in `i128`.
pub(crate) fn div_round_wide(n: &BigInt, d: &BigInt) -> BigInt {
    let q = n / d;
    let r = n - &q * d;
    if r.magnitude() * 2u32 >= *d.magnitude() {
        if (n.sign() == Sign::Minus) == (d.sign() == Sign::Minus) {
            q + 1i32
        } else {
            q - 1i32
        }
    } else {
        q
    }
}

/// Back to `i128`, or `Overflow` if the value does not fit.
#[inline]
pub(crate) fn narrow(v: BigInt, op: &'static str) -> Result<i128> {
    i128::try_from(v).map_err(|_| Error::Overflow { op })
}

#[inline]
pub(crate) fn mul(a: i128, b: i128, op: &'static str) -> Result<i128> {
    a.checked_mul(b).ok_or(Error::Overflow { op })
}

#[inline]
pub(crate) fn add(a: i128, b: i128, op: &'static str) -> Result<i128> {
    a.checked_add(b).ok_or(Error::Overflow { op })
}

#[inline]
pub(crate) fn sub(a: i128, b: i128, op: &'static str) -> Result<i128> {
    a.checked_sub(b).ok_or(Error::Overflow { op })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn encode_known_values() {
        let c = FixedPointCodec::default();
        assert_eq!(c.encode(1.4, 1).unwrap(), 1_400_000_000);
        assert_eq!(c.encode(-8.5, 1).unwrap(), -8_500_000_000);
        assert_eq!(c.encode(6.0, 2).unwrap(), 6_000_000_000_000_000_000);
        assert_eq!(c.encode(0.0, 1).unwrap(), 0);
        // round-to-nearest on the last digit
        assert_eq!(c.encode(1e-9 * 0.6, 1).unwrap(), 1);
        assert_eq!(c.encode(-1e-9 * 0.4, 1).unwrap(), 0);
    }

    #[test]
    fn decode_drops_sub_digit_noise() {
        let c = FixedPointCodec::default();
        assert_eq!(c.decode(-1, 1), 0.0);
        assert_eq!(c.decode(4, 1), 0.0);
        assert_eq!(c.decode(5, 1), 1e-8);
        assert_eq!(c.decode(1_135_000_000_000_000_003, 2), 1.135);
        assert_eq!(c.decode(-56_300_000_000_000_000_000, 2), -56.3);
    }

    #[test]
    fn div_round_half_away_from_zero() {
        assert_eq!(div_round(5, 2), 3);
        assert_eq!(div_round(-5, 2), -3);
        assert_eq!(div_round(5, -2), -3);
        assert_eq!(div_round(4, 3), 1);
        assert_eq!(div_round(-4, 3), -1);
        assert_eq!(div_round(i128::MAX, i128::MAX), 1);
    }

    #[test]
    fn wide_division_matches_narrow() {
        for (n, d) in [(5i128, 2i128), (-5, 2), (5, -2), (4, 3), (-4, 3), (-7, -2), (0, 9)] {
            let q = div_round_wide(&BigInt::from(n), &BigInt::from(d));
            assert_eq!(narrow(q, "test").unwrap(), div_round(n, d), "{n}/{d}");
        }
        let huge = BigInt::from(i128::MAX) * 1000i32;
        let back = div_round_wide(&huge, &BigInt::from(1000i32));
        assert_eq!(narrow(back, "test").unwrap(), i128::MAX);
        assert_eq!(narrow(huge, "test"), Err(Error::Overflow { op: "test" }));
    }

    #[test]
    fn precision_is_validated() {
        assert!(FixedPointCodec::new(0).is_err());
        assert!(FixedPointCodec::new(MAX_PRECISION + 1).is_err());
        let c = FixedPointCodec::new(5).unwrap();
        assert_eq!(c.decimals(), 4);
        assert_eq!(c.scale(2).unwrap(), 10_000_000_000);
        assert!((c.tolerance() - 1e-4).abs() < 1e-18);
    }

    #[test]
    fn encode_rejects_overflow_and_non_finite() {
        let c = FixedPointCodec::default();
        assert!(matches!(c.encode(1e30, 1), Err(Error::Overflow { .. })));
        assert!(matches!(c.encode(1e21, 2), Err(Error::Overflow { .. })));
        assert!(matches!(c.encode(f64::NAN, 1), Err(Error::InvalidInput(_))));
        assert!(matches!(
            c.encode(f64::INFINITY, 1),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn point_helpers() {
        let c = FixedPointCodec::default();
        let (x, y) = c.encode_point(Point::new(-2.0, 0.25)).unwrap();
        assert_eq!((x, y), (-2_000_000_000, 250_000_000));
        assert_eq!(c.decode_point(x, y, 1), Point::new(-2.0, 0.25));
    }

    proptest! {
        #[test]
        fn round_trip_within_last_digit(v in -1.0e6f64..1.0e6) {
            let c = FixedPointCodec::default();
            let back = c.decode(c.encode(v, 1).unwrap(), 1);
            prop_assert!((back - v).abs() <= c.tolerance());
        }

        #[test]
        fn round_trip_near_zero(v in -1.0e-6f64..1.0e-6) {
            let c = FixedPointCodec::default();
            let back = c.decode(c.encode(v, 1).unwrap(), 1);
            prop_assert!((back - v).abs() <= c.tolerance());
        }

        #[test]
        fn round_trip_power_two(v in -1.0e3f64..1.0e3) {
            let c = FixedPointCodec::default();
            let back = c.decode(c.encode(v, 2).unwrap(), 2);
            prop_assert!((back - v).abs() <= c.tolerance());
        }
    }
}
