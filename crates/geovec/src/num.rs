//! Scalar numeric helpers.
//!
//! All of these are generic over [`Scalar`] and perform their floating-point math in [`f64`],
//! narrowing the result back to the element type. For integer types, any fractional part of the
//! result is truncated.

use crate::{MinMax, Scalar};

/// Magnitudes strictly below this value are considered "effectively zero" by [`near_zero`].
pub const NEAR_ZERO_EPSILON: f64 = 1e-8;

/// Restricts `value` to the range `min..=max`.
///
/// Computes `max(min(value, max), min)`. The caller must ensure that `min <= max`; if that is
/// violated, `min` is returned.
///
/// # Examples
///
/// ```
/// # use geovec::num::clamp;
/// assert_eq!(clamp(7, 0, 5), 5);
/// assert_eq!(clamp(-0.5, 0.0, 1.0), 0.0);
/// ```
#[inline]
pub fn clamp<T: Scalar>(value: T, min: T, max: T) -> T {
    MinMax::clamp(value, min, max)
}

/// Linearly interpolates between `start` and `end`.
///
/// An `amount` of 0 yields `start`, 1 yields `end`. Values outside of `0.0..=1.0` extrapolate.
///
/// # Examples
///
/// ```
/// # use geovec::num::lerp;
/// assert_eq!(lerp(0.0, 1.0, 0.5), 0.5);
/// assert_eq!(lerp(1, 3, 0.5), 2);
/// ```
pub fn lerp<T: Scalar>(start: T, end: T, amount: f64) -> T {
    let (start, end) = (start.to_f64(), end.to_f64());
    T::from_f64(start + amount * (end - start))
}

/// Computes where `value` lies between `start` and `end`, the inverse of [`lerp`].
///
/// Returns 0 for `value == start` and 1 for `value == end`.
pub fn inverse_lerp<T: Scalar>(value: T, start: T, end: T) -> f64 {
    let (value, start, end) = (value.to_f64(), start.to_f64(), end.to_f64());
    (value - start) / (end - start)
}

/// Maps `value` from the range `in_start..in_end` to the range `out_start..out_end`.
///
/// # Examples
///
/// ```
/// # use geovec::num::remap;
/// assert_eq!(remap(5.0, 0.0, 10.0, 100.0, 200.0), 150.0);
/// ```
pub fn remap<T: Scalar>(value: T, in_start: T, in_end: T, out_start: T, out_end: T) -> T {
    let t = inverse_lerp(value, in_start, in_end);
    T::from_f64(t * (out_end.to_f64() - out_start.to_f64()) + out_start.to_f64())
}

/// Wraps `value` into the range `min..max`.
///
/// # Examples
///
/// ```
/// # use geovec::num::wrap;
/// assert_eq!(wrap(370.0, 0.0, 360.0), 10.0);
/// assert_eq!(wrap(-1, 0, 4), 3);
/// ```
pub fn wrap<T: Scalar>(value: T, min: T, max: T) -> T {
    let range = max.to_f64() - min.to_f64();
    let value = value.to_f64();
    T::from_f64(value - range * ((value - min.to_f64()) / range).floor())
}

/// Returns whether `value` is *effectively* zero, ie. its magnitude is below
/// [`NEAR_ZERO_EPSILON`].
///
/// # Examples
///
/// ```
/// # use geovec::num::near_zero;
/// assert!(near_zero(1e-10));
/// assert!(near_zero(-1e-9f32));
/// assert!(!near_zero(1e-7));
/// assert!(near_zero(0));
/// ```
#[inline]
pub fn near_zero<T: Scalar>(value: T) -> bool {
    value.to_f64().abs() < NEAR_ZERO_EPSILON
}

/// Computes the smallest power of two that is greater than or equal to `value`.
///
/// The result is found by doubling, starting at 1, so any `value <= 1` yields 1. Returns [`None`]
/// if the power of two is not representable in `T` (eg. `npot(100i8)`, since 128 overflows).
///
/// # Examples
///
/// ```
/// # use geovec::num::npot;
/// assert_eq!(npot(5), Some(8));
/// assert_eq!(npot(64), Some(64));
/// assert_eq!(npot(0.3), Some(1.0));
/// assert_eq!(npot(100i8), None);
/// ```
pub fn npot<T: Scalar>(value: T) -> Option<T> {
    let mut pot = T::ONE;
    while pot < value {
        match pot.checked_double() {
            Some(next) => pot = next,
            None => {
                log::warn!(
                    "next power of two of {value} is not representable as `{}`",
                    T::NAME,
                );
                return None;
            }
        }
    }
    Some(pot)
}

macro_rules! unary_f64 {
    ($($(#[$attr:meta])* $name:ident => $f:expr;)+) => {
        $(
            $(#[$attr])*
            #[inline]
            pub fn $name<T: Scalar>(value: T) -> T {
                let f: fn(f64) -> f64 = $f;
                T::from_f64(f(value.to_f64()))
            }
        )+
    };
}

unary_f64! {
    /// Computes the absolute value of `value`.
    abs => f64::abs;
    /// Rounds `value` to the nearest integer, rounding half-way cases away from zero.
    round => f64::round;
    /// Rounds `value` toward negative infinity.
    floor => f64::floor;
    /// Rounds `value` toward positive infinity.
    ceil => f64::ceil;
    /// Computes the square root of `value`. Negative inputs yield NaN for floats (and 0 for
    /// integers).
    sqrt => f64::sqrt;
    /// Computes the natural logarithm of `value`.
    ln => f64::ln;
    /// Computes the base 10 logarithm of `value`.
    log10 => f64::log10;
    /// Computes the base 2 logarithm of `value`.
    log2 => f64::log2;
    /// Computes `e^value`.
    exp => f64::exp;
    /// Computes `2^value`.
    exp2 => f64::exp2;
    /// Computes `e^value - 1`, more accurately than `exp(value) - 1` near zero.
    exp_m1 => f64::exp_m1;
    /// Computes the sine of `value` (in radians).
    sin => f64::sin;
    /// Computes the cosine of `value` (in radians).
    cos => f64::cos;
    /// Computes the tangent of `value` (in radians).
    tan => f64::tan;
    /// Computes the arcsine of `value`, in radians.
    asin => f64::asin;
    /// Computes the arccosine of `value`, in radians.
    acos => f64::acos;
    /// Computes the arctangent of `value`, in radians.
    atan => f64::atan;
}

/// Computes the four quadrant arctangent of `y` and `x`, in radians.
pub fn atan2<T: Scalar>(y: T, x: T) -> T {
    T::from_f64(y.to_f64().atan2(x.to_f64()))
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(0.0, 1.0, 0.0), 0.0);
        assert_eq!(lerp(0.0, 1.0, 0.5), 0.5);
        assert_eq!(lerp(0.0, 1.0, 1.0), 1.0);

        assert_eq!(lerp(1, 3, 0.0), 1);
        assert_eq!(lerp(1, 3, 0.5), 2);
        assert_eq!(lerp(1, 3, 1.0), 3);
    }

    #[test]
    fn test_inverse_lerp() {
        assert_eq!(inverse_lerp(1.0, 1.0, 2.0), 0.0);
        assert_eq!(inverse_lerp(1.5, 1.0, 2.0), 0.5);
        assert_eq!(inverse_lerp(2.0, 1.0, 2.0), 1.0);
        assert_eq!(inverse_lerp(3, 1, 5), 0.5);
    }

    #[test]
    fn test_remap() {
        assert_eq!(remap(0.5, 0.0, 1.0, 10.0, 20.0), 15.0);
        assert_eq!(remap(2, 0, 4, 0, 100), 50);
    }

    #[test]
    fn test_wrap() {
        assert_relative_eq!(wrap(7.5, 0.0, 5.0), 2.5);
        assert_relative_eq!(wrap(-2.5, 0.0, 5.0), 2.5);
        assert_relative_eq!(wrap(3.0, 0.0, 5.0), 3.0);
        assert_eq!(wrap(9, 2, 5), 3);
    }

    #[test]
    fn test_rounding() {
        assert_eq!(round(2.5), 3.0);
        assert_eq!(round(-2.5), -3.0);
        assert_eq!(floor(-1.2), -2.0);
        assert_eq!(ceil(-1.2), -1.0);
        assert_eq!(abs(-3i16), 3);
        assert_eq!(abs(-1.25f32), 1.25);

        // Integers round-trip unchanged.
        assert_eq!(round(7i32), 7);
        assert_eq!(floor(-7i64), -7);
    }

    #[test]
    fn test_sqrt() {
        assert_eq!(sqrt(16.0), 4.0);
        assert_eq!(sqrt(17), 4);
        assert!(sqrt(-1.0).is_nan());
    }

    #[test]
    fn test_trig() {
        assert_relative_eq!(acos(-1.0), PI);
        assert_relative_eq!(sin(PI / 2.0), 1.0);
        assert_relative_eq!(atan2(1.0, 1.0), PI / 4.0);
    }

    #[test]
    fn test_near_zero() {
        assert!(near_zero(0.0));
        assert!(near_zero(0.000_000_000_1));
        assert!(!near_zero(1.0));
        assert!(!near_zero(NEAR_ZERO_EPSILON));
        assert!(!near_zero(1));
    }

    #[test]
    fn test_npot() {
        assert_eq!(npot(-4), Some(1));
        assert_eq!(npot(0), Some(1));
        assert_eq!(npot(1), Some(1));
        assert_eq!(npot(3), Some(4));
        assert_eq!(npot(1000i16), Some(1024));
        assert_eq!(npot(64i8), Some(64));
        assert_eq!(npot(65i8), None);
        assert_eq!(npot(i64::MAX), None);
        assert_eq!(npot(0.75f32), Some(1.0));
        assert_eq!(npot(300.5), Some(512.0));
        assert_eq!(npot(f64::MAX), None);
    }

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(1.2, 1.0, 2.0), 1.2);
        assert_eq!(clamp(-2.4, 1.0, 2.0), 1.0);
        assert_eq!(clamp(3.7, 1.0, 2.0), 2.0);
    }
}
