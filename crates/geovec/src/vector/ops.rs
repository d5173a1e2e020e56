//! Implementations of `std::ops` and `std::iter`.
//!
//! Vectors are immutable, so only the value-returning operators are provided.

use std::{
    iter::Sum,
    ops::{Add, Div, Index, Mul, Neg, Sub},
};

use crate::Scalar;

use super::Vector;

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

// More general impl than what the derive generates.
impl<T, U, const N: usize> PartialEq<Vector<U, N>> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vector<U, N>) -> bool {
        self.0 == other.0
    }
}

impl<T, const N: usize> Eq for Vector<T, N> where T: Eq {}

impl<T, U, const N: usize> PartialEq<[U; N]> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        self.0.eq(other)
    }
}

impl<T, U, const N: usize> PartialEq<Vector<U, N>> for [T; N]
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vector<U, N>) -> bool {
        *self == other.0
    }
}

/// Element-wise negation.
impl<T: Scalar, const N: usize> Neg for Vector<T, N> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.map(T::wrapping_neg)
    }
}

/// Element-wise addition.
impl<T: Scalar, const N: usize> Add<Vector<T, N>> for Vector<T, N> {
    type Output = Self;

    fn add(self, rhs: Vector<T, N>) -> Self::Output {
        self.zip(rhs).map(|(l, r)| l.wrapping_add(r))
    }
}

/// Element-wise subtraction.
impl<T: Scalar, const N: usize> Sub<Vector<T, N>> for Vector<T, N> {
    type Output = Self;

    fn sub(self, rhs: Vector<T, N>) -> Self::Output {
        self.zip(rhs).map(|(l, r)| l.wrapping_sub(r))
    }
}

/// Element-wise (Hadamard) multiplication.
impl<T: Scalar, const N: usize> Mul<Vector<T, N>> for Vector<T, N> {
    type Output = Self;

    fn mul(self, rhs: Vector<T, N>) -> Self::Output {
        self.zip(rhs).map(|(a, b)| a.wrapping_mul(b))
    }
}

// NB: element-wise vector-vector multiplication and vector-scalar multiplication are both
// supported, which rules out a more generic `Mul<U> for Vector<T, N> where T: Mul<U>`.

/// Vector-Scalar multiplication.
///
/// Unlike [`Vector::scale`], the factor has the element type, so no rounding takes place.
impl<T: Scalar, const N: usize> Mul<T> for Vector<T, N> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self::Output {
        self.map(|elem| elem.wrapping_mul(rhs))
    }
}

/// Element-wise division.
///
/// Integer division by zero panics, like it does for the element type.
impl<T: Scalar, const N: usize> Div<Vector<T, N>> for Vector<T, N> {
    type Output = Self;

    fn div(self, rhs: Vector<T, N>) -> Self::Output {
        self.zip(rhs).map(|(a, b)| a.wrapping_div(b))
    }
}

/// Vector-Scalar division.
impl<T: Scalar, const N: usize> Div<T> for Vector<T, N> {
    type Output = Self;

    fn div(self, rhs: T) -> Self::Output {
        self.map(|elem| elem.wrapping_div(rhs))
    }
}

/// Sums up vectors, starting at [`Vector::ZERO`].
impl<T: Scalar, const N: usize> Sum for Vector<T, N> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, v| acc + v)
    }
}

impl<'a, T: Scalar, const N: usize> Sum<&'a Vector<T, N>> for Vector<T, N> {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
