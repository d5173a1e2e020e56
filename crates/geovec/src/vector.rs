use std::{array, fmt};

use crate::{num, Error, MinMax, One, Result, Scalar, Zero};

mod approx_eq;
mod ops;
mod random;
mod view;

/// A 2-dimensional vector.
pub type Vec2<T> = Vector<T, 2>;
/// A 2-dimensional vector with [`f32`] elements.
pub type Vec2f = Vec2<f32>;
/// A 2-dimensional vector with [`f64`] elements.
pub type Vec2d = Vec2<f64>;
/// A 3-dimensional vector.
pub type Vec3<T> = Vector<T, 3>;
/// A 3-dimensional vector with [`f32`] elements.
pub type Vec3f = Vec3<f32>;
/// A 3-dimensional vector with [`f64`] elements.
pub type Vec3d = Vec3<f64>;
/// A 4-dimensional vector.
pub type Vec4<T> = Vector<T, 4>;
/// A 4-dimensional vector with [`f32`] elements.
pub type Vec4f = Vec4<f32>;
/// A 4-dimensional vector with [`f64`] elements.
pub type Vec4d = Vec4<f64>;

/// An immutable `N`-element vector storing elements of type `T`.
///
/// Every operation returns a new vector and leaves its inputs untouched. Element types are
/// restricted to the [`Scalar`] types for most operations. Geometric quantities (dot products,
/// lengths, distances and angles) are computed and returned as [`f64`], regardless of `T`.
///
/// # Construction
///
/// - The freestanding [`vec2`], [`vec3`] and [`vec4`] functions directly create vectors from
///   provided values.
/// - [`Vector::splat`] creates a vector by copying the given value into each element.
/// - [`Vector::from_fn`] creates a vector by invoking a closure with the index of each element.
/// - [`Vector::from_slice`] copies as many elements as available out of a slice.
/// - Vectors can be created from arrays using their [`From`] implementation.
/// - [`Vector::ZERO`] and [`Vector::ONE`] contain all-zeroes and all-ones respectively.
/// - Unit vectors are available as `Vector::X`, `Vector::Y`, `Vector::Z` and `Vector::W`, and as
///   the named directions `UP`, `DOWN`, `LEFT`, `RIGHT` (and `FORWARD`, `BACKWARDS` in 3D).
/// - [`Vector::rand`] and friends sample random vectors from a caller-provided [`fastrand::Rng`].
///
/// # Element Access
///
/// - For vectors with 2 to 4 dimensions, elements can be read as fields `x`, `y`, `z`, or `w`.
/// - The [`Index`] impl can be used just like on arrays.
/// - [`Vector::component`] returns an error instead of panicking on an out-of-range index.
/// - [`Vector::as_array`], [`Vector::as_slice`], and [`Vector::into_array`] expose the underlying
///   elements.
/// - With the `bytemuck` feature, [`bytemuck::Zeroable`] and [`bytemuck::Pod`] are implemented to
///   allow safe transmutation of vector buffers.
///
/// [`Index`]: std::ops::Index
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>([T; N]);

#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Vector<T, N> {}
#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N> {}

impl<T: Zero, const N: usize> Vector<T, N> {
    /// A vector with each element initialized to 0.
    pub const ZERO: Self = Self([T::ZERO; N]);
}

impl<T: One, const N: usize> Vector<T, N> {
    /// A vector with each element initialized to 1.
    pub const ONE: Self = Self([T::ONE; N]);
}

impl<T: Scalar> Vector<T, 2> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE]);

    /// `(0, 1)`
    pub const UP: Self = Self([T::ZERO, T::ONE]);
    /// `(0, -1)`
    pub const DOWN: Self = Self([T::ZERO, T::NEG_ONE]);
    /// `(-1, 0)`
    pub const LEFT: Self = Self([T::NEG_ONE, T::ZERO]);
    /// `(1, 0)`
    pub const RIGHT: Self = Self([T::ONE, T::ZERO]);
}

impl<T: Scalar> Vector<T, 3> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE]);

    /// `(0, 1, 0)`
    pub const UP: Self = Self([T::ZERO, T::ONE, T::ZERO]);
    /// `(0, -1, 0)`
    pub const DOWN: Self = Self([T::ZERO, T::NEG_ONE, T::ZERO]);
    /// `(-1, 0, 0)`
    pub const LEFT: Self = Self([T::NEG_ONE, T::ZERO, T::ZERO]);
    /// `(1, 0, 0)`
    pub const RIGHT: Self = Self([T::ONE, T::ZERO, T::ZERO]);
    /// `(0, 0, 1)`
    pub const FORWARD: Self = Self([T::ZERO, T::ZERO, T::ONE]);
    /// `(0, 0, -1)`
    pub const BACKWARDS: Self = Self([T::ZERO, T::ZERO, T::NEG_ONE]);
}

impl<T: Scalar> Vector<T, 4> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the W direction.
    pub const W: Self = Self([T::ZERO, T::ZERO, T::ZERO, T::ONE]);
}

impl<T, const N: usize> Vector<T, N> {
    /// Creates a vector with each element initialized to `elem`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use geovec::*;
    /// let v = Vector::splat(2);
    /// assert_eq!(v, vec3(2, 2, 2));
    /// ```
    #[inline]
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        Self([elem; N])
    }

    /// Creates a vector where each element is initialized by invoking a closure with its index.
    ///
    /// # Examples
    ///
    /// ```
    /// # use geovec::*;
    /// let v = Vector::from_fn(|i| i as i32 * 10);
    /// assert_eq!(v, vec3(0, 10, 20));
    /// ```
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self(array::from_fn(cb))
    }

    /// Applies a closure to each element, returning a new vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use geovec::*;
    /// let v = vec3(1, 2, 3).map(|i| i * 10);
    /// assert_eq!(v, vec3(10, 20, 30));
    /// ```
    pub fn map<F, U>(self, f: F) -> Vector<U, N>
    where
        F: FnMut(T) -> U,
    {
        Vector(self.0.map(f))
    }

    /// Merges two [`Vector`]s into one that contains tuples of the original elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use geovec::*;
    /// let v = vec3(1, 2, 3).zip(vec3(1.5, 2.5, 3.5));
    /// assert_eq!(v, vec3((1, 1.5), (2, 2.5), (3, 3.5)));
    /// ```
    pub fn zip<U>(self, other: Vector<U, N>) -> Vector<(T, U), N>
    where
        T: Copy,
        U: Copy,
    {
        Vector::from_fn(|i| (self.0[i], other.0[i]))
    }

    /// Returns a reference to the underlying elements as an array of length `N`.
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    /// Returns a reference to the underlying elements as a slice.
    ///
    /// # Examples
    ///
    /// ```
    /// # use geovec::*;
    /// assert_eq!(vec3(1, 2, 3).as_slice(), &[1, 2, 3]);
    /// ```
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Converts this [`Vector`] into an `N`-element array.
    ///
    /// There is an equivalent [`From`] impl that can also be used, but this method is often shorter
    /// and requires no type annotation.
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    fn with_component(mut self, index: usize, value: T) -> Self {
        self.0[index] = value;
        self
    }
}

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// Builds a vector from the leading elements of `data`.
    ///
    /// Components that `data` has no element for are 0. Extra elements are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// # use geovec::*;
    /// assert_eq!(Vec3::from_slice(&[1, 2]), vec3(1, 2, 0));
    /// assert_eq!(Vec3::from_slice(&[1, 2, 3, 4]), vec3(1, 2, 3));
    /// ```
    pub fn from_slice(data: &[T]) -> Self {
        Self::from_fn(|i| data.get(i).copied().unwrap_or(T::ZERO))
    }

    /// Returns the component at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ComponentIndex`] if `index` is not less than `N`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use geovec::*;
    /// let v = vec3(7, 8, 9);
    /// assert_eq!(v.component(2)?, 9);
    /// assert!(v.component(3).is_err());
    /// # Ok::<_, Error>(())
    /// ```
    pub fn component(&self, index: usize) -> Result<T> {
        self.0
            .get(index)
            .copied()
            .ok_or(Error::ComponentIndex { index, len: N })
    }

    /// Multiplies each element by `t`, narrowing the results back to `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use geovec::*;
    /// assert_eq!(vec3(2, 4, 5).scale(0.5), vec3(1, 2, 2));
    /// ```
    pub fn scale(self, t: f64) -> Self {
        self.map(|elem| T::from_f64(elem.to_f64() * t))
    }

    /// Multiplies each element by the matching element of `f`, narrowing the results back to `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use geovec::*;
    /// assert_eq!(vec2(10, 10).scale_by_vector(vec2(0.5, 3.0)), vec2(5, 30));
    /// ```
    pub fn scale_by_vector(self, f: Vector<f64, N>) -> Self {
        self.zip(f).map(|(elem, f)| T::from_f64(elem.to_f64() * f))
    }

    /// Divides each element by `t`, narrowing the results back to `T`.
    ///
    /// Division by zero follows [`f64`] semantics before narrowing: float vectors end up with
    /// infinities or NaN, integer vectors saturate (or become 0 for NaN).
    pub fn div_by_constant(self, t: f64) -> Self {
        self.map(|elem| T::from_f64(elem.to_f64() / t))
    }

    /// Returns the vector pointing in the opposite direction. Equivalent to `-self`.
    #[inline]
    pub fn negated(self) -> Self {
        -self
    }

    /// Computes the dot product between `self` and `other`.
    ///
    /// Each element is widened to [`f64`] before multiplying, so integer vectors cannot overflow.
    ///
    /// # Examples
    ///
    /// ```
    /// # use geovec::*;
    /// let a = vec3(1, 3, -5);
    /// let b = vec3(4, -2, -1);
    /// assert_eq!(a.dot(b), 3.0);
    /// ```
    pub fn dot(self, other: Self) -> f64 {
        self.0
            .into_iter()
            .zip(other.0)
            .map(|(a, b)| a.to_f64() * b.to_f64())
            .sum()
    }

    /// Returns the squared length of this [`Vector`].
    ///
    /// Prefer this over [`Vector::length`] when only comparing magnitudes.
    #[inline]
    pub fn length_squared(self) -> f64 {
        self.dot(self)
    }

    /// Returns the length of this [`Vector`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use geovec::*;
    /// assert_eq!(vec2(3, 4).length(), 5.0);
    /// ```
    #[inline]
    pub fn length(self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Divides this vector by its length, resulting in a unit vector.
    ///
    /// The zero vector is not special-cased: dividing by a length of 0 produces NaN elements for
    /// float vectors and zeroes for integer vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// # use geovec::*;
    /// let z = vec3(0.0, 0.0, 4.0).normalized();
    /// assert_eq!(z, vec3(0.0, 0.0, 1.0));
    /// ```
    pub fn normalized(self) -> Self {
        self.div_by_constant(self.length())
    }

    /// Returns the squared Euclidean distance between the points `self` and `other`.
    pub fn distance_squared(self, other: Self) -> f64 {
        self.0
            .into_iter()
            .zip(other.0)
            .map(|(a, b)| {
                let d = b.to_f64() - a.to_f64();
                d * d
            })
            .sum()
    }

    /// Returns the Euclidean distance between the points `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use geovec::*;
    /// assert_eq!(Vec3::<f64>::ZERO.distance(vec3(0.0, 1.0, 0.0)), 1.0);
    /// ```
    #[inline]
    pub fn distance(self, other: Self) -> f64 {
        self.distance_squared(other).sqrt()
    }

    /// Computes the smallest positive angle between `self` and `other`, in radians.
    ///
    /// If either vector has (nearly) zero length, the angle is undefined and 0 is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// # use geovec::*;
    /// use std::f64::consts::PI;
    ///
    /// assert_eq!(Vec3d::X.angle(Vec3d::X), 0.0);
    /// assert_eq!(Vec3d::X.angle(-Vec3d::X), PI);
    /// assert_eq!(Vec3d::X.angle(Vec3d::Y), PI / 2.0);
    /// assert_eq!(Vec3d::ZERO.angle(Vec3d::Y), 0.0);
    /// ```
    pub fn angle(self, other: Self) -> f64 {
        let denominator = (self.length_squared() * other.length_squared()).sqrt();
        if denominator < 1e-15 {
            log::debug!("angle between {self} and {other} is undefined, using 0");
            return 0.0;
        }
        num::clamp(self.dot(other) / denominator, -1.0, 1.0).acos()
    }

    /// Projects `self` onto the line through `normal`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use geovec::*;
    /// assert_eq!(vec3(3, 4, 0).project(vec3(2, 0, 0)), vec3(3, 0, 0));
    /// ```
    pub fn project(self, normal: Self) -> Self {
        normal.scale(self.dot(normal) / normal.dot(normal))
    }

    /// Returns the part of `self` that is perpendicular to `normal`.
    ///
    /// `v.project(n) + v.reject(n)` yields `v` again.
    pub fn reject(self, normal: Self) -> Self {
        self - self.project(normal)
    }

    /// Reflects `self` off a surface with the given unit-length `normal`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use geovec::*;
    /// assert_eq!(vec3(1, -1, 0).reflect(Vec3::UP), vec3(1, 1, 0));
    /// ```
    pub fn reflect(self, normal: Self) -> Self {
        self - normal.scale(2.0 * self.dot(normal))
    }

    /// Refracts the unit vector `self` through a surface with the unit-length `normal`.
    ///
    /// `eta_ratio` is the ratio of the refractive indices of the medium the ray leaves and the one
    /// it enters. Beyond the critical angle there is no refracted ray, but this is not detected:
    /// the length of the parallel part is clamped to 0 instead.
    pub fn refract(self, normal: Self, eta_ratio: f64) -> Self {
        let cos_theta = (-self).dot(normal).min(1.0);
        let perpendicular = (self + normal.scale(cos_theta)).scale(eta_ratio);
        let parallel = normal.scale(-(1.0 - perpendicular.length_squared()).max(0.0).sqrt());
        perpendicular + parallel
    }

    /// Linearly interpolates between `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use geovec::*;
    /// assert_eq!(vec2(0, 10).lerp(vec2(10, 20), 0.5), vec2(5, 15));
    /// ```
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self::from_fn(|i| num::lerp(self.0[i], other.0[i], t))
    }

    /// Returns the point halfway between `self` and `other`.
    pub fn midpoint(self, other: Self) -> Self {
        Self::from_fn(|i| T::from_f64((self.0[i].to_f64() + other.0[i].to_f64()) * 0.5))
    }

    /// Element-wise minimum between `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use geovec::*;
    /// let a = vec3(-1.0, 2.0, f32::NAN);
    /// let b = vec3(3.0, f32::NEG_INFINITY, 0.0);
    /// assert_eq!(a.min(b), vec3(-1.0, f32::NEG_INFINITY, 0.0));
    /// ```
    pub fn min(self, other: Self) -> Self {
        Self::from_fn(|i| self.0[i].min(other.0[i]))
    }

    /// Element-wise maximum between `self` and `other`.
    pub fn max(self, other: Self) -> Self {
        Self::from_fn(|i| self.0[i].max(other.0[i]))
    }

    /// Returns the smallest element. The empty vector yields 0.
    pub fn min_component(self) -> T {
        self.0.into_iter().reduce(MinMax::min).unwrap_or(T::ZERO)
    }

    /// Returns the largest element. The empty vector yields 0.
    pub fn max_component(self) -> T {
        self.0.into_iter().reduce(MinMax::max).unwrap_or(T::ZERO)
    }

    /// Multiplies all elements together. Integer products wrap on overflow.
    pub fn product(self) -> T {
        self.0.into_iter().fold(T::ONE, T::wrapping_mul)
    }

    /// Restricts every element to the range `min..=max`.
    ///
    /// See [`num::clamp`] for how inverted bounds behave.
    ///
    /// # Examples
    ///
    /// ```
    /// # use geovec::*;
    /// assert_eq!(vec3(-5, 2, 9).clamp(0, 5), vec3(0, 2, 5));
    /// ```
    pub fn clamp(self, min: T, max: T) -> Self {
        self.map(|elem| num::clamp(elem, min, max))
    }

    /// Restricts every element to the range given by the matching elements of `min` and `max`.
    pub fn clamp_vec(self, min: Self, max: Self) -> Self {
        Self::from_fn(|i| num::clamp(self.0[i], min.0[i], max.0[i]))
    }

    /// Rounds each element to the nearest integer, rounding half-way cases away from zero.
    pub fn round(self) -> Self {
        self.map(num::round)
    }

    /// Rounds each element toward negative infinity.
    pub fn floor(self) -> Self {
        self.map(num::floor)
    }

    /// Rounds each element toward positive infinity.
    pub fn ceil(self) -> Self {
        self.map(num::ceil)
    }

    /// Computes the absolute value of each element.
    pub fn abs(self) -> Self {
        self.map(num::abs)
    }

    /// Computes the square root of each element.
    pub fn sqrt(self) -> Self {
        self.map(num::sqrt)
    }

    /// Natural logarithm of each element.
    pub fn log(self) -> Self {
        self.map(num::ln)
    }

    /// Base 10 logarithm of each element.
    pub fn log10(self) -> Self {
        self.map(num::log10)
    }

    /// Base 2 logarithm of each element.
    pub fn log2(self) -> Self {
        self.map(num::log2)
    }

    /// Computes `e^x` for each element `x`.
    pub fn exp(self) -> Self {
        self.map(num::exp)
    }

    /// Computes `2^x` for each element `x`.
    pub fn exp2(self) -> Self {
        self.map(num::exp2)
    }

    /// Computes `e^x - 1` for each element `x`.
    pub fn exp_m1(self) -> Self {
        self.map(num::exp_m1)
    }

    /// Rounds each element to the nearest integer and converts the result to [`i64`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use geovec::*;
    /// assert_eq!(vec3(1.5, -1.5, 0.2).round_to_int(), vec3(2, -2, 0));
    /// ```
    pub fn round_to_int(self) -> Vector<i64, N> {
        self.map(|elem| elem.to_f64().round() as i64)
    }

    /// Rounds each element toward negative infinity and converts the result to [`i64`].
    pub fn floor_to_int(self) -> Vector<i64, N> {
        self.map(|elem| elem.to_f64().floor() as i64)
    }

    /// Rounds each element toward positive infinity and converts the result to [`i64`].
    pub fn ceil_to_int(self) -> Vector<i64, N> {
        self.map(|elem| elem.to_f64().ceil() as i64)
    }

    /// Computes `1 / x` for every element `x`.
    pub fn reciprocal(self) -> Vector<f64, N> {
        self.map(|elem| 1.0 / elem.to_f64())
    }

    /// Converts every element to another [`Scalar`] type.
    ///
    /// The conversion goes through [`f64`], so [`i64`] values beyond 2<sup>53</sup> lose
    /// precision, and narrowing conversions saturate.
    ///
    /// # Examples
    ///
    /// ```
    /// # use geovec::*;
    /// assert_eq!(vec2(1.9, -300.0).cast::<i8>(), vec2(1, -128));
    /// ```
    pub fn cast<U: Scalar>(self) -> Vector<U, N> {
        self.map(|elem| U::from_f64(elem.to_f64()))
    }

    /// Rounds every element up to the next power of two.
    ///
    /// Returns [`None`] if any result is not representable in `T`. See [`num::npot`].
    pub fn to_npot(self) -> Option<Self> {
        let mut out = self;
        for elem in &mut out.0 {
            *elem = num::npot(*elem)?;
        }
        Some(out)
    }

    /// Returns whether any element is NaN. Always `false` for integer vectors.
    pub fn contains_nan(self) -> bool {
        self.0.iter().any(|elem| elem.is_nan())
    }

    /// Returns whether every element is [effectively zero][num::near_zero].
    pub fn near_zero(self) -> bool {
        self.0.iter().all(|&elem| num::near_zero(elem))
    }

    /// Returns whether every element of `self` is less than the matching element of `other`.
    pub fn all_lt(self, other: Self) -> bool {
        self.0.iter().zip(&other.0).all(|(a, b)| a < b)
    }

    /// Returns whether every element of `self` is less than or equal to the matching element of
    /// `other`.
    pub fn all_le(self, other: Self) -> bool {
        self.0.iter().zip(&other.0).all(|(a, b)| a <= b)
    }

    /// Returns whether every element of `self` is greater than the matching element of `other`.
    pub fn all_gt(self, other: Self) -> bool {
        self.0.iter().zip(&other.0).all(|(a, b)| a > b)
    }

    /// Returns whether every element of `self` is greater than or equal to the matching element of
    /// `other`.
    pub fn all_ge(self, other: Self) -> bool {
        self.0.iter().zip(&other.0).all(|(a, b)| a >= b)
    }
}

macro_rules! component_setters {
    ($n:literal: $($idx:literal => $with:ident, $add:ident, $flip:ident, $name:literal;)+) => {
        impl<T: Scalar> Vector<T, $n> {
            $(
                #[doc = concat!("Returns a copy of `self` with the ", $name, " component replaced by `value`.")]
                #[inline]
                pub fn $with(self, value: T) -> Self {
                    self.with_component($idx, value)
                }

                #[doc = concat!("Returns a copy of `self` with `delta` added to the ", $name, " component.")]
                #[inline]
                pub fn $add(self, delta: T) -> Self {
                    self.with_component($idx, self.0[$idx].wrapping_add(delta))
                }

                #[doc = concat!("Returns a copy of `self` with the ", $name, " component negated.")]
                #[inline]
                pub fn $flip(self) -> Self {
                    self.with_component($idx, self.0[$idx].wrapping_neg())
                }
            )+
        }
    };
}

component_setters!(2:
    0 => with_x, add_x, flip_x, "X";
    1 => with_y, add_y, flip_y, "Y";
);
component_setters!(3:
    0 => with_x, add_x, flip_x, "X";
    1 => with_y, add_y, flip_y, "Y";
    2 => with_z, add_z, flip_z, "Z";
);
component_setters!(4:
    0 => with_x, add_x, flip_x, "X";
    1 => with_y, add_y, flip_y, "Y";
    2 => with_z, add_z, flip_z, "Z";
    3 => with_w, add_w, flip_w, "W";
);

impl<T> Vector<T, 2> {
    /// Appends another value to the vector, yielding a vector with 3 dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// # use geovec::*;
    /// let v = vec2(-1.0, 2.0).extend(5.0);
    /// assert_eq!(v, vec3(-1.0, 2.0, 5.0));
    /// ```
    pub fn extend(self, value: T) -> Vector<T, 3> {
        let [x, y] = self.into_array();
        [x, y, value].into()
    }
}

impl<T: Scalar> Vector<T, 2> {
    /// Returns `(y, -x)`, the vector rotated clockwise by a quarter turn.
    ///
    /// # Examples
    ///
    /// ```
    /// # use geovec::*;
    /// assert_eq!(vec2(1, 2).perpendicular(), vec2(2, -1));
    /// ```
    pub fn perpendicular(self) -> Self {
        let [x, y] = self.into_array();
        vec2(y, -x)
    }

    /// Moves `self` back by `anchor` times the size `wh`, element-wise.
    ///
    /// With an `anchor` of `(0.5, 0.5)`, this turns the center of a `wh`-sized box into its
    /// minimum corner.
    ///
    /// # Examples
    ///
    /// ```
    /// # use geovec::*;
    /// assert_eq!(vec2(10.0, 10.0).pivot(vec2(0.5, 1.0), vec2(4.0, 6.0)), vec2(8.0, 4.0));
    /// ```
    pub fn pivot(self, anchor: Self, wh: Self) -> Self {
        self - wh * anchor
    }

    /// Computes the [perpendicular dot product] of `self` and `other`.
    ///
    /// This is equivalent to the Z coordinate of the cross product of `self` and `other`, extended
    /// with Z=0 in the third dimension.
    ///
    /// # Examples
    ///
    /// ```
    /// # use geovec::*;
    /// assert_eq!(Vec2f::X.perp_dot(Vec2f::Y), 1.0);
    /// assert_eq!(Vec2f::Y.perp_dot(Vec2f::X), -1.0);
    /// ```
    ///
    /// [perpendicular dot product]: https://mathworld.wolfram.com/PerpDotProduct.html
    pub fn perp_dot(self, other: Self) -> f64 {
        let [ax, ay] = self.0.map(T::to_f64);
        let [bx, by] = other.0.map(T::to_f64);
        ax * by - ay * bx
    }
}

impl<T> Vector<T, 3> {
    /// Removes the last element of this vector, yielding a vector with 2 elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use geovec::*;
    /// let v = vec3(-1.0, 2.0, 3.5).truncate();
    /// assert_eq!(v, vec2(-1.0, 2.0));
    /// ```
    pub fn truncate(self) -> Vector<T, 2> {
        let [x, y, ..] = self.into_array();
        [x, y].into()
    }

    /// Appends another value to the vector, yielding a vector with 4 dimensions.
    pub fn extend(self, value: T) -> Vector<T, 4> {
        let [x, y, z] = self.into_array();
        [x, y, z, value].into()
    }
}

macro_rules! swizzles {
    ($($name:ident => $n:literal [$($i:literal),+];)+) => {
        impl<T: Copy> Vector<T, 3> {
            $(
                #[doc = concat!("Returns the `", stringify!($name), "` swizzle of this vector.")]
                #[inline]
                pub fn $name(self) -> Vector<T, $n> {
                    Vector([$(self.0[$i]),+])
                }
            )+
        }
    };
}

swizzles! {
    xy => 2 [0, 1];
    xz => 2 [0, 2];
    yx => 2 [1, 0];
    yz => 2 [1, 2];
    zx => 2 [2, 0];
    zy => 2 [2, 1];
    xzy => 3 [0, 2, 1];
    yxz => 3 [1, 0, 2];
    yzx => 3 [1, 2, 0];
    zxy => 3 [2, 0, 1];
    zyx => 3 [2, 1, 0];
}

impl<T: Scalar> Vector<T, 3> {
    /// Computes the cross product of `self` and `other`.
    ///
    /// The result is a vector that is perpendicular to both `self` and `other`. Swapping the
    /// operands inverts the direction of the result.
    ///
    /// # Examples
    ///
    /// ```
    /// # use geovec::*;
    /// assert_eq!(vec3(1, 0, 0).cross(vec3(0, 1, 0)), vec3(0, 0, 1));
    /// assert_eq!(Vec3f::Y.cross(Vec3f::X), -Vec3f::Z);
    /// ```
    pub fn cross(self, other: Self) -> Self {
        let [a1, a2, a3] = self.into_array();
        let [b1, b2, b3] = other.into_array();

        let mul = T::wrapping_mul;
        #[rustfmt::skip]
        let cross = vec3(
            mul(a2, b3).wrapping_sub(mul(a3, b2)),
            mul(a3, b1).wrapping_sub(mul(a1, b3)),
            mul(a1, b2).wrapping_sub(mul(a2, b1)),
        );
        cross
    }

    /// Returns a vector perpendicular to `self`.
    ///
    /// This is the cross product with [`Vector::RIGHT`], unless `self` lies on the X axis, in which
    /// case [`Vector::UP`] is used instead.
    ///
    /// # Examples
    ///
    /// ```
    /// # use geovec::*;
    /// assert_eq!(vec3(0, 2, 0).perpendicular(), vec3(0, 0, -2));
    /// assert_eq!(vec3(3, 0, 0).perpendicular(), vec3(0, 0, 3));
    /// ```
    pub fn perpendicular(self) -> Self {
        let [_, y, z] = self.into_array();
        if y != T::ZERO || z != T::ZERO {
            self.cross(Self::RIGHT)
        } else {
            self.cross(Self::UP)
        }
    }
}

impl<T> Vector<T, 4> {
    /// Removes the last element of this vector, yielding a vector with 3 elements.
    pub fn truncate(self) -> Vector<T, 3> {
        let [x, y, z, ..] = self.into_array();
        [x, y, z].into()
    }
}

impl<T, const N: usize> Default for Vector<T, N>
where
    T: Default,
{
    #[inline]
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(value: [T; N]) -> Self {
        Self(value)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(value: Vector<T, N>) -> Self {
        value.0
    }
}

impl<T, const N: usize> fmt::Debug for Vector<T, N>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(elem);
        }
        tup.finish()
    }
}

impl<T, const N: usize> fmt::Display for Vector<T, N>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, elem) in self.0.iter().enumerate() {
            if i != 0 {
                f.write_str(", ")?;
            }
            elem.fmt(f)?;
        }
        f.write_str(")")
    }
}

impl<T, const N: usize> AsRef<[T]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T, const N: usize> AsRef<[T; N]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T; N] {
        &self.0
    }
}

/// Constructs a [`Vec2`] from its two elements.
#[inline]
pub const fn vec2<T>(x: T, y: T) -> Vec2<T> {
    Vector([x, y])
}

/// Constructs a [`Vec3`] from its three elements.
#[inline]
pub const fn vec3<T>(x: T, y: T, z: T) -> Vec3<T> {
    Vector([x, y, z])
}

/// Constructs a [`Vec4`] from its four elements.
#[inline]
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vec4<T> {
    Vector([x, y, z, w])
}
