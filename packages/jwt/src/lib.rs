//! ES256 JSON Web Tokens for the App Store Connect API
//!
//! Reads an `AuthKey_<kid>.p8` private key, builds the `iss`/`iat`/`exp`/`aud`
//! payload and signs it with ECDSA P-256:
//!
//! ```no_run
//! use ascjwt::{generate_token, TokenConfig};
//!
//! let token = generate_token(TokenConfig::default())?;
//! println!("{token}");
//! # Ok::<(), ascjwt::TokenError>(())
//! ```

pub mod config;
pub mod crypto;
mod error;
pub mod generator;
mod types;

pub use config::{
    default_key_path, TokenConfig, DEFAULT_AUDIENCE, DEFAULT_ISSUER_ID, DEFAULT_KEY_ID,
    DEFAULT_VALIDITY_SECONDS,
};
pub use crypto::es256_keys::{load_signing_key, parse_signing_key, KeyFormat};
pub use crypto::es256_signing::es256_sign;
pub use error::*;
pub use generator::{generate_token, TokenGenerator};
pub use types::*;
