//! Serde support for [arkworks](http://arkworks.rs/) values.
//!
//! Values are always written in compressed form and read back with full
//! validation, so curve points off the curve or outside the prime-order
//! subgroup, and non-canonical field elements, are rejected while decoding.

use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use serde_with::{Bytes, DeserializeAs, SerializeAs};

/// Use [SerdeAs] with [serde_with] to (de)serialize arkworks values, or
/// containers of them, as byte strings:
/// `#[serde_as(as = "Vec<snark_utils::serialization::SerdeAs>")]`.
pub struct SerdeAs;

impl<T> SerializeAs<T> for SerdeAs
where
    T: CanonicalSerialize,
{
    fn serialize_as<S>(val: &T, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut bytes = vec![];
        val.serialize_compressed(&mut bytes)
            .map_err(serde::ser::Error::custom)?;

        Bytes::serialize_as(&bytes, serializer)
    }
}

impl<'de, T> DeserializeAs<'de, T> for SerdeAs
where
    T: CanonicalDeserialize,
{
    fn deserialize_as<D>(deserializer: D) -> Result<T, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bytes: Vec<u8> = Bytes::deserialize_as(deserializer)?;
        let mut reader = &bytes[..];
        let value = T::deserialize_compressed(&mut reader).map_err(serde::de::Error::custom)?;
        if !reader.is_empty() {
            return Err(serde::de::Error::custom(format!(
                "{} trailing bytes after arkworks value",
                reader.len()
            )));
        }
        Ok(value)
    }
}
