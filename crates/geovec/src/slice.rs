//! Batch operations on slices of vectors.
//!
//! A slice of vectors is treated as an ordered sequence of points, eg. the vertices of a path.
//! Apart from the `*_in_place` methods, all operations leave the slice untouched and return
//! freshly allocated results.

use itertools::Itertools;

use crate::{Error, Result, Scalar, Vector};

/// Extension methods for slices of [`Vector`]s.
///
/// # Examples
///
/// ```
/// use geovec::{vec3, VectorSliceExt};
///
/// let path = [vec3(0, 0, 0), vec3(0, 1, 0), vec3(0, 1, 1), vec3(0, 1, -1)];
/// assert_eq!(path.distance(), 4.0);
///
/// let (min, max) = path.bounds()?;
/// assert_eq!(min, vec3(0, 0, -1));
/// assert_eq!(max, vec3(0, 1, 1));
/// # Ok::<_, geovec::Error>(())
/// ```
pub trait VectorSliceExt<T, const N: usize> {
    /// Adds `v` to every vector.
    fn add(&self, v: Vector<T, N>) -> Vec<Vector<T, N>>;

    /// Adds `v` to every vector, overwriting the elements of the slice.
    fn add_in_place(&mut self, v: Vector<T, N>);

    /// Subtracts `v` from every vector.
    fn sub(&self, v: Vector<T, N>) -> Vec<Vector<T, N>>;

    /// Subtracts `v` from every vector, overwriting the elements of the slice.
    fn sub_in_place(&mut self, v: Vector<T, N>);

    /// Scales every vector by `t`. See [`Vector::scale`].
    fn scale(&self, t: f64) -> Vec<Vector<T, N>>;

    /// Scales every vector by `t`, overwriting the elements of the slice.
    fn scale_in_place(&mut self, t: f64);

    /// Divides every vector by `t`. See [`Vector::div_by_constant`].
    fn div_by_constant(&self, t: f64) -> Vec<Vector<T, N>>;

    /// Normalizes every vector. See [`Vector::normalized`].
    fn normalized(&self) -> Vec<Vector<T, N>>;

    /// Applies `f` to every vector, collecting the results.
    fn modify<F>(&self, f: F) -> Vec<Vector<T, N>>
    where
        F: FnMut(Vector<T, N>) -> Vector<T, N>;

    /// Sums up all vectors. The empty slice yields [`Vector::ZERO`].
    fn sum(&self) -> Vector<T, N>;

    /// Returns the total length of the path through all vectors, in order.
    ///
    /// Slices with fewer than 2 elements have a length of 0.
    fn distance(&self) -> f64;

    /// Returns the minimum and maximum corner of the axis-aligned bounding box around all vectors.
    ///
    /// Float components are compared with [`f64::min`] and [`f64::max`], which skip NaN: a NaN
    /// component only shows up in the result if every vector has NaN there. Use
    /// [`VectorSliceExt::contains_nan`] to detect NaN inputs.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] if the slice is empty.
    fn bounds(&self) -> Result<(Vector<T, N>, Vector<T, N>)>;

    /// Computes the element-wise mean of all vectors.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] if the slice is empty.
    fn average(&self) -> Result<Vector<f64, N>>;

    /// Computes the element-wise mean and population standard deviation of all vectors.
    ///
    /// The deviation of each component is `sqrt(sum((x_i - mean)^2) / n)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] if the slice is empty.
    fn standard_deviation(&self) -> Result<(Vector<f64, N>, Vector<f64, N>)>;

    /// Returns whether any vector contains a NaN element.
    fn contains_nan(&self) -> bool;

    /// Returns the largest [`Vector::length`] of all vectors, or 0 for an empty slice.
    fn max_length(&self) -> f64;
}

impl<T: Scalar, const N: usize> VectorSliceExt<T, N> for [Vector<T, N>] {
    fn add(&self, v: Vector<T, N>) -> Vec<Vector<T, N>> {
        self.modify(|elem| elem + v)
    }

    fn add_in_place(&mut self, v: Vector<T, N>) {
        self.iter_mut().for_each(|elem| *elem = *elem + v);
    }

    fn sub(&self, v: Vector<T, N>) -> Vec<Vector<T, N>> {
        self.modify(|elem| elem - v)
    }

    fn sub_in_place(&mut self, v: Vector<T, N>) {
        self.iter_mut().for_each(|elem| *elem = *elem - v);
    }

    fn scale(&self, t: f64) -> Vec<Vector<T, N>> {
        self.modify(|elem| elem.scale(t))
    }

    fn scale_in_place(&mut self, t: f64) {
        self.iter_mut().for_each(|elem| *elem = elem.scale(t));
    }

    fn div_by_constant(&self, t: f64) -> Vec<Vector<T, N>> {
        self.modify(|elem| elem.div_by_constant(t))
    }

    fn normalized(&self) -> Vec<Vector<T, N>> {
        self.modify(Vector::normalized)
    }

    fn modify<F>(&self, f: F) -> Vec<Vector<T, N>>
    where
        F: FnMut(Vector<T, N>) -> Vector<T, N>,
    {
        self.iter().copied().map(f).collect()
    }

    fn sum(&self) -> Vector<T, N> {
        self.iter().sum()
    }

    fn distance(&self) -> f64 {
        self.iter()
            .tuple_windows()
            .map(|(a, b)| a.distance(*b))
            .sum()
    }

    fn bounds(&self) -> Result<(Vector<T, N>, Vector<T, N>)> {
        let (first, rest) = self
            .split_first()
            .ok_or(Error::Empty { operation: "bounds" })?;

        Ok(rest
            .iter()
            .fold((*first, *first), |(min, max), v| (min.min(*v), max.max(*v))))
    }

    fn average(&self) -> Result<Vector<f64, N>> {
        if self.is_empty() {
            return Err(Error::Empty {
                operation: "average",
            });
        }

        let total: Vector<f64, N> = self.iter().map(|v| v.cast::<f64>()).sum();
        Ok(total.div_by_constant(self.len() as f64))
    }

    fn standard_deviation(&self) -> Result<(Vector<f64, N>, Vector<f64, N>)> {
        let mean = self.average().map_err(|_| Error::Empty {
            operation: "standard deviation",
        })?;

        let squares: Vector<f64, N> = self
            .iter()
            .map(|v| {
                let diff = v.cast::<f64>() - mean;
                diff * diff
            })
            .sum();
        let deviation = squares.div_by_constant(self.len() as f64).sqrt();

        Ok((mean, deviation))
    }

    fn contains_nan(&self) -> bool {
        self.iter().any(|v| v.contains_nan())
    }

    fn max_length(&self) -> f64 {
        self.iter().map(|v| v.length()).fold(0.0, f64::max)
    }
}

/// Computes the element-wise mean of `vectors`, narrowed to the element type.
///
/// For integer vectors, the fractional part of the mean is truncated. Use
/// [`VectorSliceExt::average`] to get the exact mean.
///
/// # Errors
///
/// Returns [`Error::Empty`] if `vectors` is empty.
///
/// # Examples
///
/// ```
/// # use geovec::*;
/// assert_eq!(average(&[vec2(0, 0), vec2(3, 5)])?, vec2(1, 2));
/// # Ok::<_, Error>(())
/// ```
pub fn average<T: Scalar, const N: usize>(vectors: &[Vector<T, N>]) -> Result<Vector<T, N>> {
    Ok(vectors.average()?.cast())
}
