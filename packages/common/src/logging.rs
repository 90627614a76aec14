//! Structured logging infrastructure
//!
//! `env_logger`-based logging with hashed identifiers. Everything goes to
//! stderr and, with `RUST_LOG` unset, only `error` records are shown. The
//! helpers below never log above `warn`, so a default run writes nothing.

use log::{debug, info, warn};
use sha2::{Digest, Sha256};
use std::path::Path;
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Logging entry points shared by the ascjwt crates
pub struct LoggingTransformer;

impl LoggingTransformer {
    /// Initialize logging system (call once at application startup)
    ///
    /// Configure levels via `RUST_LOG`:
    /// - `RUST_LOG=debug` - key loading and token issuance details
    /// - `RUST_LOG=warn` - failed operations
    /// - `RUST_LOG=ascjwt=debug` - module-specific levels
    pub fn init() {
        INIT_LOGGER.call_once(|| {
            env_logger::Builder::from_default_env()
                .format_timestamp_micros()
                .init();

            info!("Structured logging initialized");
        });
    }

    /// Initialize logging for test environments
    pub fn init_test() {
        let _ = env_logger::Builder::from_default_env()
            .is_test(true)
            .try_init();
    }

    /// Log a successfully parsed signing key
    ///
    /// Only the path and the container format are recorded.
    pub fn log_key_loaded(path: &Path, format: &str) {
        debug!("Signing key loaded: {} (format: {format})", path.display());
    }

    /// Log an issued token
    ///
    /// The issuer is hashed; the key id is a public header value.
    pub fn log_token_issued(key_id: &str, issuer_id: &str, expires_at: i64) {
        let issuer_hash = Self::secure_hash_key(issuer_id);
        debug!("Token issued: kid={key_id} (issuer_hash: {issuer_hash}, exp: {expires_at})");
    }

    /// Log a failed token operation
    ///
    /// Records the operation and the error message. Callers must not pass
    /// errors that embed key material.
    pub fn log_token_error(operation: &str, error: &dyn std::error::Error) {
        warn!("Token operation failed: {operation} ({error})");
    }

    /// SHA-256 based identifier hashing for logging
    ///
    /// Returns `#` followed by the first 12 hex characters of the digest.
    fn secure_hash_key(key: &str) -> String {
        let hash = Sha256::digest(key.as_bytes());
        let hex_hash = format!("{hash:x}");
        format!("#{}", &hex_hash[..12])
    }
}
