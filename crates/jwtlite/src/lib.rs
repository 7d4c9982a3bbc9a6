//! # jwtlite - Decode, validate, and issue compact JWTs
//!
//! **jwtlite** reads and writes JSON Web Tokens in compact serialization
//! (`header.payload.signature`) and checks their claims against an ordered,
//! individually configurable rule set.
//!
//! Signatures are never computed or verified. A token either carries a
//! signature segment, kept as raw base64url text, or it is unsecured. The
//! validator only enforces a policy about that presence.
//!
//! ## Quick Start
//!
//! ```ignore
//! use jwtlite::*;
//!
//! let validator = TokenValidator::new()
//!     .options(ValidationOptions::default().require_audience("my-api"))
//!     .build();
//!
//! let token = validator.validate(raw)?;
//! println!("Subject: {:?}", token.subject());
//! ```
//!
//! ## Validation Flow
//!
//! ```text
//! compact string
//!     │ split on '.'; exactly three segments
//!     ▼
//! base64url header / payload
//!     │ decode, parse JSON, capture extra claims
//!     ▼
//! Token (header, claims, optional signature)
//!     │ cty → typ → exp → nbf → aud → signature presence
//!     ▼
//! Ok(Token) or the first failing rule's Error
//! ```
//!
//! ## Time Boundaries
//!
//! - `exp` is exclusive: a token with `exp == now + skew` is already expired.
//! - `nbf` is inclusive: a token with `nbf == now - skew` is valid.
//!
//! Clock skew is configured separately for each of the two rules, and the
//! current time comes from an injected [`Clock`].
//!
//! ## Defaults
//!
//! | Rule | Enabled | Claim required |
//! |------|---------|----------------|
//! | `cty` | no | - |
//! | `typ` | yes | no |
//! | `exp` | yes | yes |
//! | `nbf` | yes | yes |
//! | `aud` | yes | yes |
//!
//! Unsecured tokens (empty signature segment, `alg: none`) are rejected unless
//! [`ValidationOptions::allow_unsecured()`] is set.
//!
//! ## Issuing
//!
//! ```ignore
//! let token = Token::new(Header::unsecured(), Claims {
//!     issuer: Some("joe".into()),
//!     expiration: Some(1300819380),
//!     ..Claims::default()
//! });
//! let raw = issue(&token)?;
//! ```
//!
//! ## References
//!
//! - [RFC 7515](https://datatracker.ietf.org/doc/html/rfc7515) - JSON Web Signature (JWS)
//! - [RFC 7519](https://datatracker.ietf.org/doc/html/rfc7519) - JSON Web Token (JWT)

mod error;

// Internal modules
pub(crate) mod claims;
pub(crate) mod clock;
pub(crate) mod compact;
pub(crate) mod header;
pub(crate) mod issuer;
pub(crate) mod limits;
pub(crate) mod token;
pub(crate) mod utils;
pub(crate) mod validation;
pub(crate) mod validator;

// Public Interface
pub use claims::Claims;
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{Error, ErrorKind, Result};
pub use header::Header;
pub use issuer::issue;
pub use token::{Signature, Token};
pub use utils::base64url;
pub use utils::json::ExtraClaims;
pub use validation::{
    AudienceOptions, ContentTypeOptions, ExpirationOptions, JWT_TYPE, NotBeforeOptions,
    TypeOptions, ValidationOptions, evaluate,
};
pub use validator::TokenValidator;

/// Re-exported so callers can inspect extra claims without a direct dependency
pub use miniserde::json::Value;
