//! Errors for jwtlite

use std::fmt;
use thiserror::Error;

/// JWTLite Errors
///
/// Every variant belongs to exactly one [`ErrorKind`]; use [`Error::kind`] when
/// only the category matters.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    // ============================================================================
    // Structure Errors
    // ============================================================================
    #[error("Token too large: {size} bytes (maximum: {max} bytes)")]
    TokenTooLarge { size: usize, max: usize },

    #[error("Invalid JWT format: expected three parts separated by '.', found {segments}")]
    FormatInvalid { segments: usize },

    #[error("Base64URL decoding failed: {0}")]
    FormatInvalidBase64(String),

    #[error("JSON parsing failed: {0}")]
    FormatInvalidJson(String),

    #[error("Claim '{claim}' has an invalid type (expected {expected})")]
    ClaimInvalidType {
        claim: &'static str,
        expected: &'static str,
    },

    #[error("Claim '{claim}' is not a whole-number NumericDate")]
    NumericDateInvalid { claim: &'static str },

    // ============================================================================
    // Claim Errors
    // ============================================================================
    #[error("Required token claim '{0}' is missing")]
    TokenMissingClaim(&'static str),

    #[error("Token claim '{claim}' mismatch: expected '{expected}', found '{found}'")]
    TokenTypeMismatch {
        claim: &'static str,
        expected: String,
        found: String,
    },

    #[error("Token expired at {expired_at} (now: {now}, skew: {skew}s)")]
    TokenExpired {
        expired_at: i64,
        now: i64,
        skew: u64,
    },

    #[error("Token not valid until {not_before} (now: {now}, skew: {skew}s)")]
    TokenNotYetValid {
        not_before: i64,
        now: i64,
        skew: u64,
    },

    #[error("Token audience mismatch: expected {expected:?}, found {found:?}")]
    TokenAudienceMismatch {
        expected: Option<String>,
        found: Vec<String>,
    },

    // ============================================================================
    // Signature Errors
    // ============================================================================
    #[error("Token is unsecured but unsecured tokens are not allowed")]
    SignatureMissing,

    #[error("Unsecured token must declare alg 'none', found {0:?}")]
    SignatureAlgorithmNotNone(Option<String>),
}

impl Error {
    /// The category this error belongs to
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::TokenTooLarge { .. }
            | Error::FormatInvalid { .. }
            | Error::FormatInvalidBase64(_)
            | Error::FormatInvalidJson(_)
            | Error::ClaimInvalidType { .. }
            | Error::NumericDateInvalid { .. } => ErrorKind::InvalidTokenStructure,
            Error::TokenMissingClaim(_) => ErrorKind::MissingRequiredClaim,
            Error::TokenTypeMismatch { .. } => ErrorKind::InvalidTokenType,
            Error::TokenExpired { .. } => ErrorKind::TokenExpired,
            Error::TokenNotYetValid { .. } => ErrorKind::TokenNotBefore,
            Error::TokenAudienceMismatch { .. } => ErrorKind::InvalidAudience,
            Error::SignatureMissing | Error::SignatureAlgorithmNotNone(_) => {
                ErrorKind::InvalidTokenSignature
            }
        }
    }
}

/// Error taxonomy shared by decoding and validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Wrong segment count, bad base64url, bad JSON, or a non-integer NumericDate
    InvalidTokenStructure,
    /// A claim configured as required is absent
    MissingRequiredClaim,
    /// Header `typ` or `cty` is present but does not match
    InvalidTokenType,
    /// `exp` is at or before `now + skew`
    TokenExpired,
    /// `nbf` is after `now - skew`
    TokenNotBefore,
    /// Principal audience not listed in `aud`, or `aud` absent with a principal configured
    InvalidAudience,
    /// Unsecured token that is not allowed, or not declared as `alg: none`
    InvalidTokenSignature,
}

impl ErrorKind {
    /// Stable short code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::InvalidTokenStructure => "E1",
            ErrorKind::TokenExpired => "E2",
            ErrorKind::MissingRequiredClaim => "E3",
            ErrorKind::InvalidAudience => "E4",
            ErrorKind::TokenNotBefore => "E5",
            ErrorKind::InvalidTokenType => "E6",
            ErrorKind::InvalidTokenSignature => "E7",
        }
    }

    fn description(&self) -> &'static str {
        match self {
            ErrorKind::InvalidTokenStructure => "Invalid token structure.",
            ErrorKind::TokenExpired => "Token expired.",
            ErrorKind::MissingRequiredClaim => "Missing required claim.",
            ErrorKind::InvalidAudience => "Invalid audience.",
            ErrorKind::TokenNotBefore => "Token not before.",
            ErrorKind::InvalidTokenType => "Invalid token type.",
            ErrorKind::InvalidTokenSignature => "Invalid token signature.",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code(), self.description())
    }
}

/// Result type alias for JWTLite operations
pub type Result<T> = std::result::Result<T, Error>;
