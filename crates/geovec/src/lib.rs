//! Immutable, element-generic vector and rectangle math.
//!
//! The central type is [`Vector<T, N>`], a small fixed-size vector (usually aliased as [`Vec2`],
//! [`Vec3`] or [`Vec4`]) over one of the [`Scalar`] types `i8`, `i16`, `i32`, `i64`, `f32` and
//! `f64`. It is accompanied by:
//!
//! - [`VectorSliceExt`], batch operations on slices of vectors (bounds, path length, mean and
//!   standard deviation, ...).
//! - The [`codec`] module, a fixed-width binary encoding with explicit byte order.
//! - [`Rect`], an axis-aligned rectangle built from two [`Vec2`]s.
//! - The [`num`] module, scalar helpers that the vector operations are built from.
//!
//! # Numeric model
//!
//! All operations that need floating-point math widen the elements to [`f64`], compute, and then
//! narrow the result back to the element type with `as` semantics. Integer results are therefore
//! truncated toward zero and saturate at the bounds of the type. Scalar-valued geometric results
//! (dot products, lengths, distances, angles) stay in [`f64`].
//!
//! Degenerate inputs are not errors: the angle between zero-length vectors is 0, and normalizing
//! the zero vector divides by zero. Operations that are undefined on an empty input (bounds,
//! averages) and out-of-range component indices return an [`Error`].
//!
//! # Cargo features
//!
//! - `serde` (default): serialization of vectors as `{"x": .., "y": .., ...}` maps of `f64`s, and
//!   of [`Rect`]s.
//! - `bytemuck` (default): `Zeroable` and `Pod` impls for [`Vector`].
//!
//! # Logging
//!
//! Diagnostics are emitted through the [`log`] facade. The library never installs a logger.

pub mod codec;
mod error;
pub mod num;
mod rect;
#[cfg(feature = "serde")]
mod serde_impls;
mod slice;
mod traits;
mod vector;

pub use codec::ByteOrder;
pub use error::*;
pub use rect::*;
pub use slice::*;
pub use traits::*;
pub use vector::*;
