//! Random vector sampling.
//!
//! All functions take the generator as an argument, so callers control seeding and results are
//! reproducible with [`fastrand::Rng::with_seed`].

use fastrand::Rng;

use crate::{Scalar, Vector};

impl<const N: usize> Vector<f64, N> {
    /// Returns a vector whose elements are independently drawn from `[0, 1)`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use geovec::*;
    /// let mut rng = fastrand::Rng::with_seed(7);
    /// let v = Vec3d::rand(&mut rng);
    /// assert!(v.all_ge(Vec3::ZERO) && v.all_lt(Vec3::ONE));
    /// ```
    pub fn rand(rng: &mut Rng) -> Self {
        Self::from_fn(|_| rng.f64())
    }

    /// Returns a random point inside the unit sphere (or disc, or hypersphere, depending on `N`).
    ///
    /// Samples [`Vector::rand_range`] in `[-1, 1)` until a point with a length less than 1 comes up.
    pub fn rand_in_unit_sphere(rng: &mut Rng) -> Self {
        loop {
            let p = Self::rand_range(rng, -1.0, 1.0);
            if p.length_squared() < 1.0 {
                return p;
            }
        }
    }

    /// Returns a random unit vector.
    ///
    /// This normalizes a point sampled uniformly from the cube `[-1, 1)^N`. The resulting
    /// directions are *not* uniformly distributed over the sphere: they are biased toward the
    /// corners of the cube. Use [`Vector::rand_in_unit_sphere`] and normalize its result if that
    /// matters.
    pub fn rand_normal(rng: &mut Rng) -> Self {
        Self::from_fn(|_| -1.0 + rng.f64() * 2.0).normalized()
    }
}

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// Returns a vector whose elements are independently drawn from `[min, max)`.
    ///
    /// For integer types, each element is one of the integers in `min..max`. For float types, the
    /// final addition `min + offset` is rounded, so an element can come out equal to `max`
    /// (most noticeably for [`f32`]).
    ///
    /// # Examples
    ///
    /// ```
    /// # use geovec::*;
    /// let mut rng = fastrand::Rng::with_seed(123);
    /// let v = Vec3::rand_range(&mut rng, -3, 3);
    /// assert!(v.all_ge(Vector::splat(-3)) && v.all_lt(Vector::splat(3)));
    /// ```
    pub fn rand_range(rng: &mut Rng, min: T, max: T) -> Self {
        let dist = max.to_f64() - min.to_f64();
        Self::from_fn(|_| {
            let offset = rng.f64() * dist;
            let offset = if T::INTEGRAL { offset.floor() } else { offset };
            T::from_f64(min.to_f64() + offset)
        })
    }
}
