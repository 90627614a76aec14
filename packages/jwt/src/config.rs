//! Token generator configuration

use crate::error::{TokenError, TokenResult};
use log::warn;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Key identifier of the App Store Connect API key
pub const DEFAULT_KEY_ID: &str = "XKU8846XS8";

/// Issuer identifier of the App Store Connect team
pub const DEFAULT_ISSUER_ID: &str = "e0939399-8b49-4818-b044-e769c1fbff8e";

/// Audience expected by the App Store Connect API
pub const DEFAULT_AUDIENCE: &str = "appstoreconnect-v1";

/// Token lifetime: 20 minutes
pub const DEFAULT_VALIDITY_SECONDS: u32 = 1200;

/// Everything the generator needs to produce one token
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenConfig {
    /// Header `kid`
    pub key_id: String,
    /// Payload `iss`
    pub issuer_id: String,
    /// PEM private key location
    pub key_path: PathBuf,
    /// Payload `aud`
    #[serde(default = "default_audience")]
    pub audience: String,
    /// `exp - iat`
    #[serde(default = "default_validity_seconds")]
    pub validity_seconds: u32,
}

fn default_audience() -> String {
    DEFAULT_AUDIENCE.to_string()
}

fn default_validity_seconds() -> u32 {
    DEFAULT_VALIDITY_SECONDS
}

/// `~/.appstoreconnect/AuthKey_<key_id>.p8`
pub fn default_key_path(key_id: &str) -> PathBuf {
    let home = match dirs::home_dir() {
        Some(dir) => dir,
        None => {
            warn!("Could not determine home directory, using current directory");
            PathBuf::from(".")
        }
    };

    home.join(".appstoreconnect")
        .join(format!("AuthKey_{key_id}.p8"))
}

impl TokenConfig {
    /// Explicit key, issuer and path with the default audience and lifetime
    pub fn new(
        key_id: impl Into<String>,
        issuer_id: impl Into<String>,
        key_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            key_id: key_id.into(),
            issuer_id: issuer_id.into(),
            key_path: key_path.into(),
            audience: default_audience(),
            validity_seconds: default_validity_seconds(),
        }
    }

    /// Override the audience
    #[must_use]
    pub fn with_audience(mut self, audience: impl Into<String>) -> Self {
        self.audience = audience.into();
        self
    }

    /// Override the token lifetime
    #[must_use]
    pub fn with_validity_seconds(mut self, validity_seconds: u32) -> Self {
        self.validity_seconds = validity_seconds;
        self
    }

    /// Override the key location
    #[must_use]
    pub fn with_key_path(mut self, key_path: impl Into<PathBuf>) -> Self {
        self.key_path = key_path.into();
        self
    }

    /// Reject configurations that cannot produce a usable token
    ///
    /// # Errors
    /// Returns `TokenError::InvalidConfig` for an empty key id, issuer or
    /// audience, or a zero lifetime.
    pub fn validate(&self) -> TokenResult<()> {
        if self.key_id.trim().is_empty() {
            return Err(TokenError::invalid_config("key id must not be empty"));
        }
        if self.issuer_id.trim().is_empty() {
            return Err(TokenError::invalid_config("issuer id must not be empty"));
        }
        if self.audience.trim().is_empty() {
            return Err(TokenError::invalid_config("audience must not be empty"));
        }
        if self.validity_seconds == 0 {
            return Err(TokenError::invalid_config(
                "validity window must be at least one second",
            ));
        }
        Ok(())
    }
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self::new(
            DEFAULT_KEY_ID,
            DEFAULT_ISSUER_ID,
            default_key_path(DEFAULT_KEY_ID),
        )
    }
}
