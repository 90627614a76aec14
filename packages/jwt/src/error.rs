//! Token generation error types

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Token operation result type
pub type TokenResult<T> = Result<T, TokenError>;

/// Token generation errors
#[derive(Debug, Error)]
pub enum TokenError {
    /// Key file missing, unreadable, or not a decodable private key
    #[error("Failed to load signing key from {}: {reason}", path.display())]
    KeyLoad {
        /// Path the key was read from
        path: PathBuf,
        /// What went wrong
        reason: String,
    },

    /// Key rejected by ES256 or the signing primitive failed
    #[error("Signing error: {0}")]
    Signing(String),

    /// Configuration rejected before any key access
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Header or claims could not be encoded
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Output could not be written
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl TokenError {
    /// Create a key load error
    #[inline]
    #[must_use]
    pub fn key_load(path: &Path, reason: impl Into<String>) -> Self {
        TokenError::KeyLoad {
            path: path.to_path_buf(),
            reason: reason.into(),
        }
    }

    /// Create a signing error
    #[inline]
    #[must_use]
    pub fn signing(msg: impl Into<String>) -> Self {
        TokenError::Signing(msg.into())
    }

    /// Create an invalid configuration error
    #[inline]
    #[must_use]
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        TokenError::InvalidConfig(msg.into())
    }

    /// Create a serialization error
    #[inline]
    #[must_use]
    pub fn serialization(msg: impl Into<String>) -> Self {
        TokenError::Serialization(msg.into())
    }

    /// Whether this error came from reading or decoding the key file
    #[must_use]
    pub fn is_key_load(&self) -> bool {
        matches!(self, TokenError::KeyLoad { .. })
    }

    /// Whether this error came from the ES256 primitive
    #[must_use]
    pub fn is_signing(&self) -> bool {
        matches!(self, TokenError::Signing(_))
    }
}
