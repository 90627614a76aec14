//! ES256 signing with ECDSA P-256

use crate::{
    error::{TokenError, TokenResult},
    types::{Claims, JwtHeader, JwtToken},
};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use p256::ecdsa::{signature::Signer, Signature, SigningKey};

/// Sign `header` and `claims` into a compact JWS
///
/// The signature segment is the fixed-width `r || s` encoding JWS requires
/// for ECDSA, not DER. Nonces are derived per RFC 6979.
///
/// # Errors
/// `TokenError::Serialization` if the JSON encoding fails,
/// `TokenError::Signing` if the ECDSA primitive rejects the input.
pub fn es256_sign(
    signing_key: &SigningKey,
    header: &JwtHeader,
    claims: &Claims,
) -> TokenResult<JwtToken> {
    // Encode header to base64url
    let header_json =
        serde_json::to_vec(header).map_err(|e| TokenError::serialization(e.to_string()))?;
    let header_b64 = URL_SAFE_NO_PAD.encode(&header_json);

    // Encode claims to base64url
    let claims_json =
        serde_json::to_vec(claims).map_err(|e| TokenError::serialization(e.to_string()))?;
    let claims_b64 = URL_SAFE_NO_PAD.encode(&claims_json);

    // Create signing input
    let mut signing_input = String::with_capacity(header_b64.len() + 1 + claims_b64.len());
    signing_input.push_str(&header_b64);
    signing_input.push('.');
    signing_input.push_str(&claims_b64);

    // Sign with ECDSA P-256, fixed-width r || s
    let signature: Signature = signing_key
        .try_sign(signing_input.as_bytes())
        .map_err(|e| TokenError::signing(format!("ECDSA P-256 signing failed: {e}")))?;
    let signature_b64 = URL_SAFE_NO_PAD.encode(signature.to_bytes());

    // Append the signature segment in place
    let mut jwt = signing_input;
    jwt.reserve(1 + signature_b64.len());
    jwt.push('.');
    jwt.push_str(&signature_b64);

    Ok(JwtToken::from(jwt))
}
