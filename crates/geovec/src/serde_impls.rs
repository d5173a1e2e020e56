//! [`serde`] support.
//!
//! Vectors are represented as maps with the keys `x`, `y`, `z` and `w` (as many as the vector has
//! elements). Values are always 64-bit floats, independent of the element type; deserializing
//! narrows them back to `T`. Missing keys are treated as 0.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{Scalar, Vector};

macro_rules! serde_repr {
    ($n:literal => $repr:ident { $($field:ident: $idx:literal),+ }) => {
        #[derive(Serialize, Deserialize)]
        struct $repr {
            $(
                #[serde(default)]
                $field: f64,
            )+
        }

        impl<T: Scalar> Serialize for Vector<T, $n> {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                $repr {
                    $($field: self[$idx].to_f64(),)+
                }
                .serialize(serializer)
            }
        }

        impl<'de, T: Scalar> Deserialize<'de> for Vector<T, $n> {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let repr = $repr::deserialize(deserializer)?;
                Ok(Vector::from([$(T::from_f64(repr.$field)),+]))
            }
        }
    };
}

serde_repr!(2 => Xy { x: 0, y: 1 });
serde_repr!(3 => Xyz { x: 0, y: 1, z: 2 });
serde_repr!(4 => Xyzw { x: 0, y: 1, z: 2, w: 3 });
