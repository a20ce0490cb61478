//! Profile documents exchanged with the user directory service.
//!
//! These types are serialised as JSON both on the wire and in local storage.
//! Each public key entry names the algorithm it belongs to; an entry with an
//! unknown or malformed algorithm makes the whole document unreadable.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::registry::SymmetricAlgorithm;

/// Errors from reading or writing a profile document.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The document is not valid JSON, does not match the expected shape, or
    /// references an algorithm that is not registered.
    #[error("invalid profile document: {0}")]
    Json(#[from] serde_json::Error),
}

// ---------------------------------------------------------------------------
// Public keys
// ---------------------------------------------------------------------------

/// One set of public keys published by a user for a given algorithm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicKeyEntry {
    /// Algorithm these keys are used with.
    pub algorithm: SymmetricAlgorithm,
    /// Ed25519 verification key.
    pub signature_key: String,
    /// X25519 key-agreement public key.
    pub exchange_key: String,
    /// RSA public key used to wrap outgoing envelopes.
    pub rsa_key: String,
}

// ---------------------------------------------------------------------------
// User profile
// ---------------------------------------------------------------------------

/// A user record as published to and fetched from the directory service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Directory-assigned row id; `0` for profiles not yet stored.
    #[serde(default)]
    pub id: i64,
    /// Stable user identifier.
    pub uid: String,
    pub username: String,
    pub public_keys: Vec<PublicKeyEntry>,
    /// Base64-encoded profile picture, if any.
    pub profile_picture: Option<String>,
    pub description: Option<String>,
}

impl UserProfile {
    /// Parse a profile document.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::Json`] if the document is malformed or any
    /// `algorithm` field is not a registered identifier.
    pub fn from_json(s: &str) -> Result<Self, DocumentError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Serialise this profile to a compact JSON string.
    pub fn to_json(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Distinct algorithms referenced by this profile, in first-seen order.
    pub fn algorithms(&self) -> Vec<SymmetricAlgorithm> {
        let mut out = Vec::new();
        for key in &self.public_keys {
            if !out.contains(&key.algorithm) {
                out.push(key.algorithm);
            }
        }
        out
    }
}
