//! Compact serialization: three dot-separated segments

use crate::error::{Error, Result};

/// Raw segments of a compact token, still base64url-encoded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Segments<'a> {
    pub header: &'a str,
    pub payload: &'a str,
    /// May be empty for unsecured tokens
    pub signature: &'a str,
}

/// Split a compact token into header, payload, and signature
pub(crate) fn split(token: &str) -> Result<Segments<'_>> {
    let mut parts = token.split('.');
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(header), Some(payload), Some(signature), None) => Ok(Segments {
            header,
            payload,
            signature,
        }),
        _ => Err(Error::FormatInvalid {
            segments: token.split('.').count(),
        }),
    }
}

/// Join encoded segments into a compact token
pub(crate) fn join(header_b64: &str, payload_b64: &str, signature_b64: &str) -> String {
    format!("{header_b64}.{payload_b64}.{signature_b64}")
}
