//! Fixed-width binary encoding of vectors.
//!
//! A [`Vector<T, N>`] is encoded as exactly `N * T::BYTES` bytes: its components in order (X, Y,
//! Z, W), each written in the [`ByteOrder`] chosen by the caller. Integers use their two's
//! complement bit pattern, floats their IEEE-754 bit pattern. There is no header, padding, or type
//! tag, so the reader has to know the element type and byte order.
//!
//! Only the element types implementing [`Scalar`] can be encoded. Any other type is rejected at
//! compile time.
//!
//! # Examples
//!
//! ```
//! use geovec::{codec::{self, ByteOrder}, vec3};
//!
//! let mut buf = Vec::new();
//! codec::write(&vec3(1i16, -2, 3), &mut buf, ByteOrder::Big)?;
//! assert_eq!(buf, [0, 1, 0xff, 0xfe, 0, 3]);
//!
//! let v = codec::read::<i16, 3, _>(&buf[..], ByteOrder::Big)?;
//! assert_eq!(v, vec3(1, -2, 3));
//! # Ok::<_, geovec::Error>(())
//! ```

use std::io::{Read, Write};

use crate::{Result, Scalar, Vector};

/// The order in which the bytes of each component are stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    /// Most significant byte first.
    Big,
    /// Least significant byte first.
    Little,
}

impl ByteOrder {
    /// The byte order of the target platform.
    #[cfg(target_endian = "big")]
    pub const NATIVE: Self = Self::Big;
    /// The byte order of the target platform.
    #[cfg(target_endian = "little")]
    pub const NATIVE: Self = Self::Little;
}

/// Returns the number of bytes a `Vector<T, N>` is encoded as.
#[inline]
pub const fn encoded_len<T: Scalar, const N: usize>() -> usize {
    N * T::BYTES
}

/// Writes `vector` to `writer`, using `order` for each component.
///
/// Exactly [`encoded_len::<T, N>()`][encoded_len] bytes are written in a single `write_all` call.
pub fn write<T, const N: usize, W>(
    vector: &Vector<T, N>,
    mut writer: W,
    order: ByteOrder,
) -> Result<()>
where
    T: Scalar,
    W: Write,
{
    let mut buf = vec![0; encoded_len::<T, N>()];
    for (chunk, elem) in buf.chunks_exact_mut(T::BYTES).zip(vector.as_slice()) {
        elem.put_bytes(order, chunk);
    }

    writer.write_all(&buf)?;
    log::trace!("wrote {}-byte `Vector<{}, {N}>` ({order:?} endian)", buf.len(), T::NAME);
    Ok(())
}

/// Reads a `Vector<T, N>` from `reader`, decoding each component with `order`.
///
/// This is the inverse of [`write`]. If the reader runs out of data before
/// [`encoded_len::<T, N>()`][encoded_len] bytes were read, an [`Error::Io`] with
/// [`UnexpectedEof`] is returned.
///
/// [`Error::Io`]: crate::Error::Io
/// [`UnexpectedEof`]: std::io::ErrorKind::UnexpectedEof
pub fn read<T, const N: usize, R>(mut reader: R, order: ByteOrder) -> Result<Vector<T, N>>
where
    T: Scalar,
    R: Read,
{
    let mut buf = vec![0; encoded_len::<T, N>()];
    reader.read_exact(&mut buf)?;
    log::trace!("read {}-byte `Vector<{}, {N}>` ({order:?} endian)", buf.len(), T::NAME);

    Ok(Vector::from_fn(|i| {
        T::get_bytes(order, &buf[i * T::BYTES..(i + 1) * T::BYTES])
    }))
}

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// Writes this vector to `writer` in the binary format described in the [`codec`] module.
    ///
    /// [`codec`]: crate::codec
    pub fn write_to<W: Write>(&self, writer: W, order: ByteOrder) -> Result<()> {
        write(self, writer, order)
    }

    /// Reads a vector from `reader` in the binary format described in the [`codec`] module.
    ///
    /// [`codec`]: crate::codec
    pub fn read_from<R: Read>(reader: R, order: ByteOrder) -> Result<Self> {
        read(reader, order)
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use crate::{vec2, vec3, vec4, Error};

    use super::*;

    #[test]
    fn byte_layout() {
        let mut buf = Vec::new();
        write(&vec3(1i32, 2, -1), &mut buf, ByteOrder::Little).unwrap();
        #[rustfmt::skip]
        assert_eq!(buf, [
            1, 0, 0, 0,
            2, 0, 0, 0,
            0xff, 0xff, 0xff, 0xff,
        ]);

        buf.clear();
        write(&vec3(1i32, 2, -1), &mut buf, ByteOrder::Big).unwrap();
        #[rustfmt::skip]
        assert_eq!(buf, [
            0, 0, 0, 1,
            0, 0, 0, 2,
            0xff, 0xff, 0xff, 0xff,
        ]);

        buf.clear();
        write(&vec2(-1.0f32, 2.0), &mut buf, ByteOrder::Big).unwrap();
        assert_eq!(buf, [0xbf, 0x80, 0, 0, 0x40, 0, 0, 0]);

        buf.clear();
        write(&vec3(-128i8, 0, 127), &mut buf, ByteOrder::Little).unwrap();
        assert_eq!(buf, [0x80, 0, 0x7f]);
    }

    #[test]
    fn lengths() {
        assert_eq!(encoded_len::<i8, 3>(), 3);
        assert_eq!(encoded_len::<i16, 3>(), 6);
        assert_eq!(encoded_len::<f32, 3>(), 12);
        assert_eq!(encoded_len::<f64, 3>(), 24);
        assert_eq!(encoded_len::<i64, 4>(), 32);
    }

    #[test]
    fn methods() {
        let v = vec4(0.5f64, -0.25, f64::INFINITY, 1e300);
        let mut buf = Vec::new();
        v.write_to(&mut buf, ByteOrder::NATIVE).unwrap();
        let back = Vector::<f64, 4>::read_from(&buf[..], ByteOrder::NATIVE).unwrap();
        assert_eq!(back, v);
    }

    #[test]
    fn reads_consecutive_records() {
        let mut buf = Vec::new();
        vec3(1i16, 2, 3).write_to(&mut buf, ByteOrder::Big).unwrap();
        vec3(4i16, 5, 6).write_to(&mut buf, ByteOrder::Big).unwrap();

        let mut reader = &buf[..];
        let a = read::<i16, 3, _>(&mut reader, ByteOrder::Big).unwrap();
        let b = read::<i16, 3, _>(&mut reader, ByteOrder::Big).unwrap();
        assert_eq!(a, vec3(1, 2, 3));
        assert_eq!(b, vec3(4, 5, 6));
        assert!(reader.is_empty());
    }

    #[test]
    fn short_read() {
        let buf = [0u8; 11];
        let err = read::<f32, 3, _>(&buf[..], ByteOrder::Little).unwrap_err();
        match err {
            Error::Io(e) => assert_eq!(e.kind(), io::ErrorKind::UnexpectedEof),
            e => panic!("unexpected error {e:?}"),
        }
    }

    #[test]
    fn failing_writer() {
        struct Full;

        impl io::Write for Full {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Ok(0)
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let err = write(&vec3(1i64, 2, 3), Full, ByteOrder::Big).unwrap_err();
        assert!(matches!(err, Error::Io(e) if e.kind() == io::ErrorKind::WriteZero));
    }
}
