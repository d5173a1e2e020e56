//! Axis-aligned rectangles.

use std::fmt;

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::{Error, Result, Scalar, Vec2};

/// An axis-aligned rectangle, described by its minimum corner and its size.
///
/// Like [`Vector`][crate::Vector], a [`Rect`] is an immutable value: every method returns a new
/// rectangle.
///
/// # Examples
///
/// ```
/// # use geovec::*;
/// let r = Rect::new(vec2(1, 2), vec2(3, 4));
/// assert_eq!(r.a(), vec2(1, 2));
/// assert_eq!(r.b(), vec2(4, 6));
/// assert!(r.contains(vec2(4, 6)));
/// assert!(!r.contains(vec2(0, 2)));
/// ```
#[derive(Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(bound = "T: Scalar")
)]
pub struct Rect<T> {
    /// Position of the minimum corner.
    pub xy: Vec2<T>,
    /// Width and height.
    pub wh: Vec2<T>,
}

impl<T: Scalar> Rect<T> {
    /// A rectangle at the origin with a size of 0.
    pub const ZERO: Self = Self {
        xy: Vec2::ZERO,
        wh: Vec2::ZERO,
    };

    /// A rectangle at the origin with a width and height of 1.
    pub const ONE: Self = Self {
        xy: Vec2::ZERO,
        wh: Vec2::ONE,
    };

    /// Creates a rectangle from its minimum corner `xy` and its size `wh`.
    #[inline]
    pub fn new(xy: Vec2<T>, wh: Vec2<T>) -> Self {
        Self { xy, wh }
    }

    /// Computes the (axis-aligned) bounding rectangle that encompasses `points`.
    ///
    /// NaN coordinates are skipped the same way [`VectorSliceExt::bounds`] skips them.
    ///
    /// [`VectorSliceExt::bounds`]: crate::VectorSliceExt::bounds
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] if `points` is empty.
    pub fn bounding(points: &[Vec2<T>]) -> Result<Self> {
        let (first, rest) = points.split_first().ok_or(Error::Empty {
            operation: "bounding rectangle",
        })?;

        let (min, max) = rest
            .iter()
            .fold((*first, *first), |(min, max), pt| (min.min(*pt), max.max(*pt)));
        Ok(Self::new(min, max - min))
    }

    /// Returns the position of the minimum corner.
    #[inline]
    pub fn position(&self) -> Vec2<T> {
        self.xy
    }

    /// Returns the width and height.
    #[inline]
    pub fn size(&self) -> Vec2<T> {
        self.wh
    }

    /// Returns the minimum corner.
    #[inline]
    pub fn a(&self) -> Vec2<T> {
        self.xy
    }

    /// Returns the maximum corner.
    #[inline]
    pub fn b(&self) -> Vec2<T> {
        self.xy + self.wh
    }

    /// Moves the rectangle by `dxy` and grows it by `dwh`.
    #[must_use]
    pub fn delta(&self, dxy: Vec2<T>, dwh: Vec2<T>) -> Self {
        Self::new(self.xy + dxy, self.wh + dwh)
    }

    /// Scales the width and height of this [`Rect`] by `f`.
    ///
    /// The minimum corner stays where it is.
    #[must_use]
    pub fn scale(&self, f: f64) -> Self {
        Self::new(self.xy, self.wh.scale(f))
    }

    /// Scales the width by `f.x` and the height by `f.y`.
    #[must_use]
    pub fn scale_by_vector(&self, f: Vec2<f64>) -> Self {
        Self::new(self.xy, self.wh.scale_by_vector(f))
    }

    /// Returns whether `point` lies inside this rectangle or on its border.
    pub fn contains(&self, point: Vec2<T>) -> bool {
        point.all_ge(self.a()) && point.all_le(self.b())
    }
}

impl<T: fmt::Display> fmt::Debug for Rect<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rect @ ({},{})/{}x{}",
            self.xy.x, self.xy.y, self.wh.x, self.wh.y
        )
    }
}

impl<T> AbsDiffEq for Rect<T>
where
    T: AbsDiffEq,
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.xy.abs_diff_eq(&other.xy, epsilon) && self.wh.abs_diff_eq(&other.wh, epsilon)
    }
}

impl<T> RelativeEq for Rect<T>
where
    T: RelativeEq,
    T::Epsilon: Copy,
{
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.xy.relative_eq(&other.xy, epsilon, max_relative)
            && self.wh.relative_eq(&other.wh, epsilon, max_relative)
    }
}

impl<T> UlpsEq for Rect<T>
where
    T: UlpsEq,
    T::Epsilon: Copy,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.xy.ulps_eq(&other.xy, epsilon, max_ulps)
            && self.wh.ulps_eq(&other.wh, epsilon, max_ulps)
    }
}
