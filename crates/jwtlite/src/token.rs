//! Token model and the unchecked decoder
//!
//! A [`Token`] owns one [`Header`], one [`Claims`] set, and an optional
//! [`Signature`]. Decoding only checks structure; the validation rules live in
//! [`crate::validation`].

use crate::claims::Claims;
use crate::compact;
use crate::error::{Error, Result};
use crate::header::Header;
use crate::limits::{MAX_DECODED_HEADER_SIZE, MAX_DECODED_PAYLOAD_SIZE, MAX_TOKEN_LENGTH};
use crate::utils::base64url;
use miniserde::json::Value;

/// Raw base64url signature segment
///
/// The bytes are never decoded or verified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature(String);

impl Signature {
    /// Wrap a pre-computed base64url signature segment
    ///
    /// Returns `None` for the empty segment, which marks an unsecured token.
    pub fn new(segment: impl Into<String>) -> Option<Self> {
        let segment = segment.into();
        if segment.is_empty() {
            None
        } else {
            Some(Self(segment))
        }
    }

    /// The segment exactly as it appears on the wire
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A decoded or caller-built JWT
#[derive(Debug, Clone, Default)]
pub struct Token {
    header: Header,
    claims: Claims,
    signature: Option<Signature>,
}

impl Token {
    /// Create an unsigned token for issuing
    pub fn new(header: Header, claims: Claims) -> Self {
        Self {
            header,
            claims,
            signature: None,
        }
    }

    /// Attach a pre-computed signature segment
    pub fn with_signature(mut self, signature: Signature) -> Self {
        self.signature = Some(signature);
        self
    }

    /// Decode a compact token without running any validation rule
    ///
    /// # Example
    /// ```ignore
    /// let token = Token::decode("eyJ...")?;
    /// println!("Issuer: {:?}", token.issuer());
    /// ```
    pub fn decode(token: &str) -> Result<Self> {
        if token.len() > MAX_TOKEN_LENGTH {
            return Err(Error::TokenTooLarge {
                size: token.len(),
                max: MAX_TOKEN_LENGTH,
            });
        }

        let segments = compact::split(token)?;

        // Never decoded, only held to the alphabet
        if !base64url::is_base64url(segments.signature) {
            return Err(Error::FormatInvalidBase64(
                "Signature segment is not Base64URL".to_string(),
            ));
        }

        let header_json = base64url::decode_string(segments.header, MAX_DECODED_HEADER_SIZE)?;
        let payload_json = base64url::decode_string(segments.payload, MAX_DECODED_PAYLOAD_SIZE)?;

        let header = Header::from_json(&header_json)?;
        let claims = Claims::from_json(&payload_json)?;

        tracing::trace!(
            alg = header.algorithm.as_deref(),
            signed = !segments.signature.is_empty(),
            "decoded token"
        );

        Ok(Self {
            header,
            claims,
            signature: Signature::new(segments.signature),
        })
    }

    /// Get the token header
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Get all claims
    pub fn claims(&self) -> &Claims {
        &self.claims
    }

    /// Get the signature segment, `None` for unsecured tokens
    pub fn signature(&self) -> Option<&Signature> {
        self.signature.as_ref()
    }

    /// Whether the token has no signature segment
    pub fn is_unsecured(&self) -> bool {
        self.signature.is_none()
    }

    /// Get the algorithm (alg header)
    pub fn algorithm(&self) -> Option<&str> {
        self.header.algorithm.as_deref()
    }

    /// Get the issuer (iss claim)
    pub fn issuer(&self) -> Option<&str> {
        self.claims.issuer.as_deref()
    }

    /// Get the subject (sub claim)
    pub fn subject(&self) -> Option<&str> {
        self.claims.subject.as_deref()
    }

    /// Get the audience (aud claim), always as a list
    pub fn audience(&self) -> Option<&[String]> {
        self.claims.audience.as_deref()
    }

    /// Get the expiration time (exp claim) as Unix timestamp
    pub fn expiration(&self) -> Option<i64> {
        self.claims.expiration
    }

    /// Get the not-before time (nbf claim) as Unix timestamp
    pub fn not_before(&self) -> Option<i64> {
        self.claims.not_before
    }

    /// Get the issued-at time (iat claim) as Unix timestamp
    pub fn issued_at(&self) -> Option<i64> {
        self.claims.issued_at
    }

    /// Get the JWT ID (jti claim)
    pub fn jwt_id(&self) -> Option<&str> {
        self.claims.jwt_id.as_deref()
    }

    /// Get an extra claim from the body
    pub fn claim(&self, name: &str) -> Option<&Value> {
        self.claims.claim(name)
    }

    /// Get an unrecognized header parameter
    pub fn header_param(&self, name: &str) -> Option<&Value> {
        self.header.param(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compact(header: &str, payload: &str, signature: &str) -> String {
        format!(
            "{}.{}.{}",
            base64url::encode(header),
            base64url::encode(payload),
            signature
        )
    }

    #[test]
    fn test_decode_valid_token() {
        let token = Token::decode(&compact(
            r#"{"alg":"HS256","typ":"JWT"}"#,
            r#"{"iss":"test","sub":"user","aud":"api"}"#,
            "c2ln",
        ))
        .unwrap();

        assert_eq!(token.algorithm(), Some("HS256"));
        assert_eq!(token.header().token_type.as_deref(), Some("JWT"));
        assert_eq!(token.issuer(), Some("test"));
        assert_eq!(token.subject(), Some("user"));
        assert_eq!(token.audience(), Some(&["api".to_string()][..]));
        assert_eq!(token.signature().map(Signature::as_str), Some("c2ln"));
        assert!(!token.is_unsecured());
    }

    #[test]
    fn test_decode_unsecured_token() {
        let token = Token::decode(&compact(r#"{"alg":"none"}"#, "{}", "")).unwrap();
        assert!(token.is_unsecured());
        assert!(token.signature().is_none());
    }

    #[test]
    fn test_decode_invalid_format() {
        assert!(matches!(
            Token::decode("not.enough"),
            Err(Error::FormatInvalid { segments: 2 })
        ));
        assert!(matches!(
            Token::decode("too.many.parts.here"),
            Err(Error::FormatInvalid { segments: 4 })
        ));
    }

    #[test]
    fn test_decode_invalid_base64() {
        assert!(matches!(
            Token::decode("!!!.abc.def"),
            Err(Error::FormatInvalidBase64(_))
        ));
    }

    #[test]
    fn test_decode_invalid_json() {
        let result = Token::decode(&compact("not json", r#"{"iss":"test"}"#, "sig"));
        assert!(matches!(result, Err(Error::FormatInvalidJson(_))));

        let result = Token::decode(&compact(r#"{"alg":"none"}"#, "", ""));
        assert!(matches!(result, Err(Error::FormatInvalidJson(_))));
    }

    #[test]
    fn test_decode_fractional_exp() {
        let result = Token::decode(&compact(r#"{"alg":"none"}"#, r#"{"exp":1.5}"#, ""));
        assert!(matches!(
            result,
            Err(Error::NumericDateInvalid { claim: "exp" })
        ));
    }

    #[test]
    fn test_decode_too_large() {
        let token = "a".repeat(MAX_TOKEN_LENGTH + 1);
        assert!(matches!(
            Token::decode(&token),
            Err(Error::TokenTooLarge { .. })
        ));
    }

    #[test]
    fn test_signature_new() {
        assert!(Signature::new("").is_none());
        assert_eq!(Signature::new("abc").unwrap().as_str(), "abc");
    }
}
