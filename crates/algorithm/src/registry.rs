//! The closed set of symmetric algorithms and their canonical identifiers.
//!
//! Identifiers and wire codes are persisted in stored documents and binary
//! message envelopes. Once assigned they are never changed and never reused
//! for a different algorithm.
//!
//! | Variant | Identifier | Code | Key | Nonce | Tag | AEAD |
//! |---|---|---|---|---|---|---|
//! | [`SymmetricAlgorithm::Ed25519`] | `ED25519` | `0x00` | 32 | 12 | 16 | yes |

use std::{fmt, str::FromStr};

use crate::error::AlgorithmError;

/// A symmetric encryption configuration understood by the client.
///
/// Has no `Default`: every document must name its algorithm explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum SymmetricAlgorithm {
    /// Ed25519 signatures, X25519 key agreement, HKDF-SHA256 key derivation
    /// and AES-256-GCM message encryption.
    Ed25519,
}

/// Cipher parameters of an algorithm. Opaque to this crate; carried for the
/// encryption layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AlgorithmParams {
    /// Symmetric key length in bytes.
    pub key_len: usize,
    /// Nonce / IV length in bytes.
    pub nonce_len: usize,
    /// Authentication tag length in bytes (0 when not AEAD).
    pub tag_len: usize,
    /// Whether the cipher is an AEAD construction.
    pub aead: bool,
}

impl SymmetricAlgorithm {
    /// Every registered algorithm, in declaration order.
    pub const ALL: &'static [SymmetricAlgorithm] = &[SymmetricAlgorithm::Ed25519];

    /// Canonical identifier used in JSON documents.
    pub const fn identifier(self) -> &'static str {
        match self {
            SymmetricAlgorithm::Ed25519 => "ED25519",
        }
    }

    /// One-byte code leading binary message envelopes.
    pub const fn code(self) -> u8 {
        match self {
            SymmetricAlgorithm::Ed25519 => 0x00,
        }
    }

    /// Cipher parameters handed to the encryption layer.
    pub const fn params(self) -> AlgorithmParams {
        match self {
            SymmetricAlgorithm::Ed25519 => AlgorithmParams {
                key_len: 32,
                nonce_len: 12,
                tag_len: 16,
                aead: true,
            },
        }
    }

    /// Look up an algorithm by its canonical identifier.
    ///
    /// Only an exact, case-sensitive match is accepted. The input is never
    /// trimmed or normalised.
    ///
    /// # Errors
    ///
    /// Returns [`AlgorithmError::UnknownAlgorithm`] if `identifier` matches no
    /// registered algorithm.
    pub fn from_identifier(identifier: &str) -> Result<Self, AlgorithmError> {
        Self::ALL
            .iter()
            .copied()
            .find(|alg| alg.identifier() == identifier)
            .ok_or_else(|| AlgorithmError::UnknownAlgorithm(identifier.to_owned()))
    }

    /// Look up an algorithm by its wire code.
    ///
    /// # Errors
    ///
    /// Returns [`AlgorithmError::UnknownCode`] if no algorithm uses `code`.
    pub fn from_code(code: u8) -> Result<Self, AlgorithmError> {
        Self::ALL
            .iter()
            .copied()
            .find(|alg| alg.code() == code)
            .ok_or(AlgorithmError::UnknownCode(code))
    }
}

impl fmt::Display for SymmetricAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

impl FromStr for SymmetricAlgorithm {
    type Err = AlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_identifier(s)
    }
}

impl TryFrom<u8> for SymmetricAlgorithm {
    type Error = AlgorithmError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(code)
    }
}

// ---------------------------------------------------------------------------
// Module-level lookups
// ---------------------------------------------------------------------------

/// Canonical identifier of `alg`.
pub fn identifier_of(alg: SymmetricAlgorithm) -> &'static str {
    alg.identifier()
}

/// Resolve a canonical identifier. See [`SymmetricAlgorithm::from_identifier`].
///
/// # Errors
///
/// Returns [`AlgorithmError::UnknownAlgorithm`] for anything but an exact match.
pub fn variant_of(identifier: &str) -> Result<SymmetricAlgorithm, AlgorithmError> {
    SymmetricAlgorithm::from_identifier(identifier)
}

/// Stable enumeration of every registered algorithm.
pub fn all_variants() -> &'static [SymmetricAlgorithm] {
    SymmetricAlgorithm::ALL
}

/// Wire code of `alg`.
pub fn code_of(alg: SymmetricAlgorithm) -> u8 {
    alg.code()
}

/// Resolve a wire code. See [`SymmetricAlgorithm::from_code`].
///
/// # Errors
///
/// Returns [`AlgorithmError::UnknownCode`] if the byte is unassigned.
pub fn variant_of_code(code: u8) -> Result<SymmetricAlgorithm, AlgorithmError> {
    SymmetricAlgorithm::from_code(code)
}

/// Cipher parameters of `alg`.
pub fn params_of(alg: SymmetricAlgorithm) -> AlgorithmParams {
    alg.params()
}
