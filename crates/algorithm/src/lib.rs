//! Symmetric algorithm registry and its JSON codec, shared by every crate that
//! reads or writes the messaging client's documents.
//!
//! - [`registry`]: the closed set of algorithms with their canonical
//!   identifiers, wire codes and cipher parameters.
//! - [`codec`]: the serde hooks and [`serde_json::Value`] encode/decode pair.
//! - [`protocol`]: profile documents that embed the algorithm field.

pub mod codec;
pub mod error;
pub mod protocol;
pub mod registry;

pub use error::{AlgorithmError, JsonKind};
pub use protocol::{DocumentError, PublicKeyEntry, UserProfile};
pub use registry::{
    all_variants, identifier_of, variant_of, AlgorithmParams, SymmetricAlgorithm,
};
