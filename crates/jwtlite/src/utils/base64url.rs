//! Base64URL encoding/decoding per RFC 4648
//!
//! Segments travel as URL-safe, unpadded base64url. Decoding transcodes them
//! back into padded standard base64 and decodes with the `base64` crate, with
//! a size limit for security.

use crate::error::{Error, Result};
use base64::{Engine, engine::general_purpose::STANDARD};

/// Check that every byte belongs to the URL-safe alphabet (`A-Z a-z 0-9 - _`)
pub(crate) fn is_base64url(input: &str) -> bool {
    input
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}

/// Transcode standard base64 into unpadded base64url
pub fn from_standard(input: &str) -> String {
    input
        .trim_end_matches('=')
        .chars()
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            c => c,
        })
        .collect()
}

/// Transcode unpadded base64url into padded standard base64
///
/// Padding is re-derived from the length: residue 2 gets `==`, residue 3 gets
/// `=`, residue 0 needs nothing and residue 1 can never be valid.
pub fn to_standard(input: &str) -> Result<String> {
    if !is_base64url(input) {
        return Err(Error::FormatInvalidBase64(
            "Invalid character in Base64URL input".to_string(),
        ));
    }

    let padding = match input.len() % 4 {
        0 => "",
        2 => "==",
        3 => "=",
        _ => {
            return Err(Error::FormatInvalidBase64(format!(
                "Invalid Base64URL length: {}",
                input.len()
            )));
        }
    };

    let mut standard: String = input
        .chars()
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            c => c,
        })
        .collect();
    standard.push_str(padding);
    Ok(standard)
}

/// Encode bytes to Base64URL string
pub fn encode_bytes(input: &[u8]) -> String {
    from_standard(&STANDARD.encode(input))
}

/// Encode string to Base64URL
pub fn encode(input: &str) -> String {
    encode_bytes(input.as_bytes())
}

/// Decode Base64URL string to bytes with maximum size limit
pub fn decode_bytes(input: &str, max_size: usize) -> Result<Vec<u8>> {
    let standard = to_standard(input)?;
    let result = STANDARD
        .decode(standard)
        .map_err(|e| Error::FormatInvalidBase64(format!("Base64URL decode failed: {e}")))?;

    if result.len() > max_size {
        return Err(Error::FormatInvalidBase64(format!(
            "Decoded size exceeds limit: {} bytes (max: {})",
            result.len(),
            max_size
        )));
    }

    Ok(result)
}

/// Decode Base64URL string to UTF-8 string with size limit
pub fn decode_string(input: &str, max_size: usize) -> Result<String> {
    decode_bytes(input, max_size).and_then(|bytes| {
        String::from_utf8(bytes)
            .map_err(|e| Error::FormatInvalidBase64(format!("Invalid UTF-8: {e}")))
    })
}
