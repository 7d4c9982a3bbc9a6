//! Token issuing
//!
//! Serializes a [`Token`] into compact form. No signing happens here: the
//! signature segment is empty unless the token already carries a pre-computed
//! one.

use crate::compact;
use crate::error::{Error, Result};
use crate::token::Token;
use crate::utils::base64url;

/// Serialize `token` into `header.payload.signature`
///
/// Absent header parameters and claims are omitted from the JSON. Fails only
/// when an attached signature segment is not base64url.
pub fn issue(token: &Token) -> Result<String> {
    let signature = match token.signature() {
        Some(signature) if !base64url::is_base64url(signature.as_str()) => {
            return Err(Error::FormatInvalidBase64(
                "Signature segment is not Base64URL".to_string(),
            ));
        }
        Some(signature) => signature.as_str(),
        None => "",
    };

    let header_b64 = base64url::encode(&token.header().to_json());
    let payload_b64 = base64url::encode(&token.claims().to_json());

    tracing::trace!(
        alg = token.algorithm(),
        signed = !signature.is_empty(),
        "issued token"
    );

    Ok(compact::join(&header_b64, &payload_b64, signature))
}

impl Token {
    /// Serialize this token into compact form, see [`issue`]
    pub fn encode(&self) -> Result<String> {
        issue(self)
    }
}
