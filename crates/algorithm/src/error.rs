//! Error types raised by the registry and the codec.

use std::fmt;

use thiserror::Error;

/// Errors produced when mapping between algorithm variants and their
/// external representations.
///
/// Every variant is raised at the point of failure and handed back unchanged;
/// nothing in this crate recovers from, logs, or substitutes a fallback for it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlgorithmError {
    /// The identifier is a well-formed string but names no registered algorithm.
    #[error("unknown algorithm: {0:?}")]
    UnknownAlgorithm(String),

    /// The JSON node presented for decoding is not a string.
    #[error("algorithm must be a JSON string, got {0}")]
    TypeMismatch(JsonKind),

    /// The wire code byte is not assigned to any registered algorithm.
    #[error("unknown algorithm code: 0x{0:02x}")]
    UnknownCode(u8),
}

/// Kind of a JSON node, used to report what was found instead of a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsonKind {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl JsonKind {
    /// Classify a parsed [`serde_json::Value`].
    pub fn of(value: &serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => JsonKind::Null,
            Value::Bool(_) => JsonKind::Boolean,
            Value::Number(_) => JsonKind::Number,
            Value::String(_) => JsonKind::String,
            Value::Array(_) => JsonKind::Array,
            Value::Object(_) => JsonKind::Object,
        }
    }

    /// Lowercase name as it appears in error messages.
    pub fn as_str(self) -> &'static str {
        match self {
            JsonKind::Null => "null",
            JsonKind::Boolean => "boolean",
            JsonKind::Number => "number",
            JsonKind::String => "string",
            JsonKind::Array => "array",
            JsonKind::Object => "object",
        }
    }
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
