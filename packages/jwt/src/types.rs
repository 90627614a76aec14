//! JWT type definitions

use crate::config::TokenConfig;
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// JWT claims payload
///
/// Exactly the four claims App Store Connect expects; nothing else is
/// serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Issuer
    pub iss: String,
    /// Issued at (unix seconds)
    pub iat: i64,
    /// Expiration time (unix seconds)
    pub exp: i64,
    /// Audience
    pub aud: String,
}

impl Claims {
    /// Claims issued at the current wall-clock time
    #[must_use]
    pub fn issued_now(config: &TokenConfig) -> Self {
        Self::issued_at(config, Utc::now().timestamp())
    }

    fn issued_at(config: &TokenConfig, iat: i64) -> Self {
        Self {
            iss: config.issuer_id.clone(),
            iat,
            exp: iat + i64::from(config.validity_seconds),
            aud: config.audience.clone(),
        }
    }
}

/// JWT header structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwtHeader {
    /// Signing algorithm
    pub alg: String,
    /// Key ID
    pub kid: String,
    /// Token type
    pub typ: String,
}

impl JwtHeader {
    /// ES256 header naming the signing key
    #[must_use]
    pub fn es256(kid: &str) -> Self {
        Self {
            alg: "ES256".to_string(),
            kid: kid.to_string(),
            typ: "JWT".to_string(),
        }
    }
}

/// JWT token string wrapper
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JwtToken(String);

impl JwtToken {
    /// Borrow the compact serialization
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Take the compact serialization
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for JwtToken {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl AsRef<str> for JwtToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for JwtToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
