//! Read-only named field access (`v.x`, `v.y`, ...) for small vectors.

use std::{mem, ops::Deref};

use crate::Vector;

#[repr(C)]
pub struct XY<T> {
    pub x: T,
    pub y: T,
    _priv: (), // prevent external construction
}

#[repr(C)]
pub struct XYZ<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    _priv: (), // prevent external construction
}

#[repr(C)]
pub struct XYZW<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
    _priv: (), // prevent external construction
}

// No `DerefMut`: vectors are only ever modified by building a new one.

impl<T> Deref for Vector<T, 2> {
    type Target = XY<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        unsafe { mem::transmute(self) }
    }
}

impl<T> Deref for Vector<T, 3> {
    type Target = XYZ<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        unsafe { mem::transmute(self) }
    }
}

impl<T> Deref for Vector<T, 4> {
    type Target = XYZW<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        unsafe { mem::transmute(self) }
    }
}

#[cfg(test)]
mod tests {
    use crate::{vec2, vec3, vec4};

    #[test]
    fn fields() {
        let v = vec2(1, 2);
        assert_eq!((v.x, v.y), (1, 2));

        let v = vec3(1.5, -2.5, 3.5);
        assert_eq!((v.x, v.y, v.z), (1.5, -2.5, 3.5));

        let v = vec4(1i8, 2, 3, 4);
        assert_eq!((v.x, v.y, v.z, v.w), (1, 2, 3, 4));
    }
}
