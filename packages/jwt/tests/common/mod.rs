//! Shared helpers for integration tests: fixtures and token inspection

#![allow(dead_code)]

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use p256::{
    ecdsa::{signature::Verifier, Signature, SigningKey, VerifyingKey},
    pkcs8::DecodePrivateKey,
};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const KEY_ID: &str = "TESTKEY123";
pub const ISSUER_ID: &str = "57246542-96fe-1a63-e053-0824d011072a";

/// Path of a PEM file under `tests/fixtures`
pub fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Public half of a PKCS#8 fixture
pub fn verifying_key(name: &str) -> VerifyingKey {
    let pem = std::fs::read_to_string(fixture_path(name)).unwrap();
    *SigningKey::from_pkcs8_pem(&pem).unwrap().verifying_key()
}

/// Copy a fixture into a fresh temp dir as `AuthKey_<KEY_ID>.p8`
pub fn install_key(fixture: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(format!("AuthKey_{KEY_ID}.p8"));
    std::fs::copy(fixture_path(fixture), &path).unwrap();
    (dir, path)
}

/// Decoded token segments
pub struct DecodedToken {
    pub header: Value,
    pub claims: Value,
    pub signing_input: String,
    pub signature: Vec<u8>,
}

/// Split and base64url-decode a compact token without verifying it
pub fn decode(token: &str) -> DecodedToken {
    let parts: Vec<&str> = token.split('.').collect();
    assert_eq!(parts.len(), 3, "token must have three segments: {token}");

    let header = serde_json::from_slice(&URL_SAFE_NO_PAD.decode(parts[0]).unwrap()).unwrap();
    let claims = serde_json::from_slice(&URL_SAFE_NO_PAD.decode(parts[1]).unwrap()).unwrap();

    DecodedToken {
        header,
        claims,
        signing_input: format!("{}.{}", parts[0], parts[1]),
        signature: URL_SAFE_NO_PAD.decode(parts[2]).unwrap(),
    }
}

/// ES256 signature check against `key`
pub fn verify(token: &str, key: &VerifyingKey) -> bool {
    let decoded = decode(token);
    match Signature::from_slice(&decoded.signature) {
        Ok(signature) => key
            .verify(decoded.signing_input.as_bytes(), &signature)
            .is_ok(),
        Err(_) => false,
    }
}
