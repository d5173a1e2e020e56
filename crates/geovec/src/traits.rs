use std::{fmt, mem, ops};

use crate::codec::ByteOrder;

/// Types that support a `min` and `max` operation.
///
/// [`f32`] and [`f64`] implement this trait in terms of the [`f32::min`] and [`f32::max`] functions
/// ([`f64::min`] and [`f64::max`] respectively). Built-in integer types implement it in terms of
/// [`Ord::min`] and [`Ord::max`].
pub trait MinMax: Sized {
    fn min(self, other: Self) -> Self;
    fn max(self, other: Self) -> Self;

    /// Restricts `self` to the range `min..=max`.
    ///
    /// This computes `max(min(self, max), min)`, in that order. If `min > max`, the result is
    /// `min`; the bounds are not validated.
    fn clamp(self, min: Self, max: Self) -> Self {
        self.min(max).max(min)
    }
}

/// Types that have a "zero" value (an additive identity).
pub trait Zero {
    /// The *0* value of this type.
    const ZERO: Self;
}

/// Types that have a "one" value (a multiplicative identity).
pub trait One {
    /// The *1* value of this type.
    const ONE: Self;
}

mod sealed {
    pub trait Sealed {}
}

/// The element types a [`Vector`][crate::Vector] can be made of.
///
/// This trait is sealed and implemented for exactly [`i8`], [`i16`], [`i32`], [`i64`], [`f32`] and
/// [`f64`]. Every operation that needs floating-point math widens the elements to [`f64`] and
/// narrows the result back, so integer vectors follow `as` cast semantics (truncation toward
/// zero, saturation at the bounds of the type, NaN becoming 0).
///
/// Element arithmetic on vectors goes through the `wrapping_*` methods, so integer overflow wraps
/// around in two's complement instead of panicking, in debug and release builds alike.
pub trait Scalar:
    sealed::Sealed
    + Zero
    + One
    + MinMax
    + ops::Neg<Output = Self>
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + PartialEq
    + PartialOrd
    + Copy
    + Default
    + fmt::Debug
    + fmt::Display
    + Send
    + Sync
    + 'static
{
    /// The *-1* value of this type.
    const NEG_ONE: Self;

    /// Size of the fixed-width binary representation, in bytes.
    const BYTES: usize;

    /// Name of the type, used in diagnostics.
    const NAME: &'static str;

    /// Whether this is an integer type.
    const INTEGRAL: bool;

    /// Widens `self` to an [`f64`].
    fn to_f64(self) -> f64;

    /// Narrows an [`f64`] to this type.
    fn from_f64(value: f64) -> Self;

    /// Returns whether `self` is NaN. Always `false` for integers.
    fn is_nan(self) -> bool;

    /// Returns `self * 2`, or [`None`] if that isn't representable.
    fn checked_double(self) -> Option<Self>;

    /// `self + rhs`, wrapping around at the bounds of integer types.
    fn wrapping_add(self, rhs: Self) -> Self;

    /// `self - rhs`, wrapping around at the bounds of integer types.
    fn wrapping_sub(self, rhs: Self) -> Self;

    /// `self * rhs`, wrapping around at the bounds of integer types.
    fn wrapping_mul(self, rhs: Self) -> Self;

    /// `self / rhs`, wrapping around at the bounds of integer types.
    ///
    /// # Panics
    ///
    /// Integer division by zero panics.
    fn wrapping_div(self, rhs: Self) -> Self;

    /// `-self`, wrapping around at the bounds of integer types (so `-i8::MIN == i8::MIN`).
    fn wrapping_neg(self) -> Self;

    /// Writes the [`Self::BYTES`] bytes representing `self` into `out`.
    ///
    /// Integers are written as their two's complement bit pattern, floats as their IEEE-754 bit
    /// pattern.
    ///
    /// # Panics
    ///
    /// Panics if `out.len()` is not [`Self::BYTES`].
    fn put_bytes(self, order: ByteOrder, out: &mut [u8]);

    /// Reads a value from the [`Self::BYTES`] bytes in `bytes`.
    ///
    /// # Panics
    ///
    /// Panics if `bytes.len()` is not [`Self::BYTES`].
    fn get_bytes(order: ByteOrder, bytes: &[u8]) -> Self;
}

macro_rules! scalar_common {
    ($t:ty, $zero:expr, $one:expr) => {
        impl sealed::Sealed for $t {}

        impl Zero for $t {
            const ZERO: Self = $zero;
        }

        impl One for $t {
            const ONE: Self = $one;
        }
    };
}

macro_rules! int_scalar {
    ($($t:ident),+) => {
        $(
            scalar_common!($t, 0, 1);

            impl MinMax for $t {
                fn min(self, other: Self) -> Self {
                    Ord::min(self, other)
                }

                fn max(self, other: Self) -> Self {
                    Ord::max(self, other)
                }
            }

            impl Scalar for $t {
                const NEG_ONE: Self = -1;
                const BYTES: usize = mem::size_of::<$t>();
                const NAME: &'static str = stringify!($t);
                const INTEGRAL: bool = true;

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn from_f64(value: f64) -> Self {
                    value as $t
                }

                #[inline]
                fn is_nan(self) -> bool {
                    false
                }

                fn checked_double(self) -> Option<Self> {
                    self.checked_mul(2)
                }

                #[inline]
                fn wrapping_add(self, rhs: Self) -> Self {
                    <$t>::wrapping_add(self, rhs)
                }

                #[inline]
                fn wrapping_sub(self, rhs: Self) -> Self {
                    <$t>::wrapping_sub(self, rhs)
                }

                #[inline]
                fn wrapping_mul(self, rhs: Self) -> Self {
                    <$t>::wrapping_mul(self, rhs)
                }

                #[inline]
                fn wrapping_div(self, rhs: Self) -> Self {
                    <$t>::wrapping_div(self, rhs)
                }

                #[inline]
                fn wrapping_neg(self) -> Self {
                    <$t>::wrapping_neg(self)
                }

                fn put_bytes(self, order: ByteOrder, out: &mut [u8]) {
                    let bytes = match order {
                        ByteOrder::Big => self.to_be_bytes(),
                        ByteOrder::Little => self.to_le_bytes(),
                    };
                    out.copy_from_slice(&bytes);
                }

                fn get_bytes(order: ByteOrder, bytes: &[u8]) -> Self {
                    let mut buf = [0; mem::size_of::<$t>()];
                    buf.copy_from_slice(bytes);
                    match order {
                        ByteOrder::Big => $t::from_be_bytes(buf),
                        ByteOrder::Little => $t::from_le_bytes(buf),
                    }
                }
            }
        )+
    };
}

macro_rules! float_scalar {
    ($($t:ident),+) => {
        $(
            scalar_common!($t, 0.0, 1.0);

            impl MinMax for $t {
                fn min(self, other: Self) -> Self {
                    self.min(other)
                }

                fn max(self, other: Self) -> Self {
                    self.max(other)
                }
            }

            impl Scalar for $t {
                const NEG_ONE: Self = -1.0;
                const BYTES: usize = mem::size_of::<$t>();
                const NAME: &'static str = stringify!($t);
                const INTEGRAL: bool = false;

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn from_f64(value: f64) -> Self {
                    value as $t
                }

                #[inline]
                fn is_nan(self) -> bool {
                    $t::is_nan(self)
                }

                fn checked_double(self) -> Option<Self> {
                    let doubled = self * 2.0;
                    doubled.is_finite().then_some(doubled)
                }

                #[inline]
                fn wrapping_add(self, rhs: Self) -> Self {
                    self + rhs
                }

                #[inline]
                fn wrapping_sub(self, rhs: Self) -> Self {
                    self - rhs
                }

                #[inline]
                fn wrapping_mul(self, rhs: Self) -> Self {
                    self * rhs
                }

                #[inline]
                fn wrapping_div(self, rhs: Self) -> Self {
                    self / rhs
                }

                #[inline]
                fn wrapping_neg(self) -> Self {
                    -self
                }

                fn put_bytes(self, order: ByteOrder, out: &mut [u8]) {
                    let bytes = match order {
                        ByteOrder::Big => self.to_bits().to_be_bytes(),
                        ByteOrder::Little => self.to_bits().to_le_bytes(),
                    };
                    out.copy_from_slice(&bytes);
                }

                fn get_bytes(order: ByteOrder, bytes: &[u8]) -> Self {
                    let mut buf = [0; mem::size_of::<$t>()];
                    buf.copy_from_slice(bytes);
                    match order {
                        ByteOrder::Big => $t::from_be_bytes(buf),
                        ByteOrder::Little => $t::from_le_bytes(buf),
                    }
                }
            }
        )+
    };
}

int_scalar!(i8, i16, i32, i64);
float_scalar!(f32, f64);
