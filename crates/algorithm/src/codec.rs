//! JSON codec for [`SymmetricAlgorithm`].
//!
//! On the wire an algorithm is a single JSON string holding its canonical
//! identifier:
//!
//! ```text
//! "algorithm": "ED25519"
//! ```
//!
//! The [`Serialize`] / [`Deserialize`] impls below are the hooks serde invokes
//! whenever a document containing a [`SymmetricAlgorithm`] field is built or
//! parsed. [`encode`] and [`decode`] expose the same mapping over
//! [`serde_json::Value`] with the typed [`AlgorithmError`] intact.
//!
//! Decoding never falls back to a default algorithm. An unknown identifier or a
//! non-string node is an error, and serde aborts the enclosing document.

use std::fmt;

use serde::{
    de::{self, MapAccess, SeqAccess, Visitor},
    Deserialize, Deserializer, Serialize, Serializer,
};
use serde_json::Value;

use crate::error::{AlgorithmError, JsonKind};
use crate::registry::{identifier_of, variant_of, SymmetricAlgorithm};

/// Encode `alg` as a JSON string scalar.
pub fn encode(alg: SymmetricAlgorithm) -> Value {
    Value::String(identifier_of(alg).to_owned())
}

/// Decode a JSON node into a [`SymmetricAlgorithm`].
///
/// # Errors
///
/// - [`AlgorithmError::TypeMismatch`] if `node` is not a string.
/// - [`AlgorithmError::UnknownAlgorithm`] if the string is not an exact
///   canonical identifier.
pub fn decode(node: &Value) -> Result<SymmetricAlgorithm, AlgorithmError> {
    match node {
        Value::String(s) => variant_of(s),
        other => Err(AlgorithmError::TypeMismatch(JsonKind::of(other))),
    }
}

impl Serialize for SymmetricAlgorithm {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(identifier_of(*self))
    }
}

impl<'de> Deserialize<'de> for SymmetricAlgorithm {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // `deserialize_any` so non-string nodes reach the visitor and are
        // reported with their JSON kind.
        deserializer.deserialize_any(AlgorithmVisitor)
    }
}

struct AlgorithmVisitor;

fn mismatch<E: de::Error>(kind: JsonKind) -> E {
    E::custom(AlgorithmError::TypeMismatch(kind))
}

impl<'de> Visitor<'de> for AlgorithmVisitor {
    type Value = SymmetricAlgorithm;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a canonical algorithm identifier string")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        variant_of(v).map_err(E::custom)
    }

    fn visit_bool<E: de::Error>(self, _v: bool) -> Result<Self::Value, E> {
        Err(mismatch(JsonKind::Boolean))
    }

    fn visit_i64<E: de::Error>(self, _v: i64) -> Result<Self::Value, E> {
        Err(mismatch(JsonKind::Number))
    }

    fn visit_u64<E: de::Error>(self, _v: u64) -> Result<Self::Value, E> {
        Err(mismatch(JsonKind::Number))
    }

    fn visit_f64<E: de::Error>(self, _v: f64) -> Result<Self::Value, E> {
        Err(mismatch(JsonKind::Number))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Err(mismatch(JsonKind::Null))
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Err(mismatch(JsonKind::Null))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, _seq: A) -> Result<Self::Value, A::Error> {
        Err(mismatch(JsonKind::Array))
    }

    fn visit_map<A: MapAccess<'de>>(self, _map: A) -> Result<Self::Value, A::Error> {
        Err(mismatch(JsonKind::Object))
    }
}
