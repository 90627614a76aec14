//! ES256 token generator
//!
//! One pass per call: read the key, stamp the claims with the current time,
//! sign, return. Nothing is cached between calls.

use crate::{
    config::TokenConfig,
    crypto::{es256_keys::load_signing_key, es256_signing::es256_sign},
    error::TokenResult,
    types::{Claims, JwtHeader, JwtToken},
};
use ascjwt_common::LoggingTransformer;

/// Core token generator
pub struct TokenGenerator {
    config: TokenConfig,
}

impl TokenGenerator {
    /// Create a generator for a validated configuration
    ///
    /// # Errors
    /// `TokenError::InvalidConfig` if [`TokenConfig::validate`] fails.
    pub fn new(config: TokenConfig) -> TokenResult<Self> {
        config
            .validate()
            .inspect_err(|e| LoggingTransformer::log_token_error("config_validation", e))?;
        Ok(Self { config })
    }

    /// Configuration in use
    #[must_use]
    pub fn config(&self) -> &TokenConfig {
        &self.config
    }

    /// Generate a freshly signed token
    ///
    /// # Errors
    /// `TokenError::KeyLoad` or `TokenError::Signing` from the key file,
    /// `TokenError::Serialization` or `TokenError::Signing` from signing.
    pub fn generate(&self) -> TokenResult<JwtToken> {
        // Fresh read every call, never cached
        let signing_key = load_signing_key(&self.config.key_path)
            .inspect_err(|e| LoggingTransformer::log_token_error("key_load", e))?;

        // iat comes from the wall clock here, exp follows from it
        let header = JwtHeader::es256(&self.config.key_id);
        let claims = Claims::issued_now(&self.config);

        let token = es256_sign(&signing_key, &header, &claims)
            .inspect_err(|e| LoggingTransformer::log_token_error("jwt_signing", e))?;

        LoggingTransformer::log_token_issued(&self.config.key_id, &self.config.issuer_id, claims.exp);
        Ok(token)
    }
}

/// Validate `config` and generate one token
///
/// # Errors
/// See [`TokenGenerator::new`] and [`TokenGenerator::generate`].
pub fn generate_token(config: TokenConfig) -> TokenResult<JwtToken> {
    TokenGenerator::new(config)?.generate()
}
