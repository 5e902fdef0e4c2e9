//! Error types for Stackboard.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the Stackboard crates.
///
/// Stack generation can only fail on an unrecognized type code; the layout
/// engine itself is total. The remaining variants cover configuration
/// loading and parsing of user-supplied identifiers.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StackboardError {
    /// Type code outside the 16 known base types
    #[error("Unknown personality type: '{code}'")]
    UnknownType { code: String },

    /// Function code outside the 8 cognitive functions
    #[error("Unknown cognitive function: '{code}'")]
    UnknownFunction { code: String },

    /// Variant name other than `standard` or `jumper`
    #[error("Unknown variant: '{value}'")]
    UnknownVariant { value: String },

    /// Stack table entry violating the pairing invariants (data bug)
    #[error("Malformed stack: {reason}")]
    MalformedStack { reason: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON"
        message: String,
    },

    /// Coin name other than `outer` or `inner`
    #[error("Unknown coin: '{value}', expected 'outer' or 'inner'")]
    UnknownCoin { value: String },
}

impl StackboardError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates an UnknownType error
    pub fn unknown_type(code: impl Into<String>) -> Self {
        Self::UnknownType { code: code.into() }
    }

    /// Creates an UnknownFunction error
    pub fn unknown_function(code: impl Into<String>) -> Self {
        Self::UnknownFunction { code: code.into() }
    }

    /// Creates an UnknownVariant error
    pub fn unknown_variant(value: impl Into<String>) -> Self {
        Self::UnknownVariant {
            value: value.into(),
        }
    }

    /// Creates a MalformedStack error
    pub fn malformed_stack(reason: impl Into<String>) -> Self {
        Self::MalformedStack {
            reason: reason.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates an UnknownCoin error
    pub fn unknown_coin(value: impl Into<String>) -> Self {
        Self::UnknownCoin {
            value: value.into(),
        }
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is an UnknownType error
    pub fn is_unknown_type(&self) -> bool {
        matches!(self, Self::UnknownType { .. })
    }

    /// Check if this is a MalformedStack error
    pub fn is_malformed_stack(&self) -> bool {
        matches!(self, Self::MalformedStack { .. })
    }

    /// Check if this is a config error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// Check if this is an IO error
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }

    /// Check if this is a serialization error
    pub fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization { .. })
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for StackboardError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for StackboardError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for StackboardError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for StackboardError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, StackboardError>`.
pub type Result<T> = std::result::Result<T, StackboardError>;
