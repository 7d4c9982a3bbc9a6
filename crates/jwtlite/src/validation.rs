//! Claim validation policy
//!
//! Rules run in a fixed order and stop at the first failure:
//!
//! ```text
//! cty -> typ -> exp -> nbf -> aud -> signature presence
//! ```
//!
//! Each claim family has its own options record. `validation_enabled` gates
//! whether the rule runs at all; `claim_required` gates whether a missing claim
//! is itself a failure. Defaults are the restrictive posture: `exp`, `nbf` and
//! `aud` are required, and unsecured tokens are rejected.

use crate::clock::{expiration_boundary, not_before_boundary};
use crate::error::{Error, Result};
use crate::token::Token;

/// Value both `typ` and `cty` are compared against by default
pub const JWT_TYPE: &str = "JWT";

/// Options for the `typ` header check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeOptions {
    /// Compared case-insensitively against `typ`
    pub expected_type: String,
    pub claim_required: bool,
    pub validation_enabled: bool,
}

impl Default for TypeOptions {
    fn default() -> Self {
        Self {
            expected_type: JWT_TYPE.to_string(),
            claim_required: false,
            validation_enabled: true,
        }
    }
}

impl TypeOptions {
    /// Expect a different `typ` value, e.g. `at+jwt`
    pub fn expected_type(mut self, expected: impl Into<String>) -> Self {
        self.expected_type = expected.into();
        self
    }

    /// Reject tokens without a `typ` header
    pub fn required(mut self, required: bool) -> Self {
        self.claim_required = required;
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.validation_enabled = enabled;
        self
    }
}

/// Options for the `cty` header check
///
/// Only a present `cty` is checked, and always against `"JWT"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentTypeOptions {
    pub validation_enabled: bool,
}

impl ContentTypeOptions {
    pub fn expected_type(&self) -> &'static str {
        JWT_TYPE
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.validation_enabled = enabled;
        self
    }
}

/// Options for the `exp` claim check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpirationOptions {
    /// Leeway in seconds added to the current time
    pub clock_skew: u64,
    pub claim_required: bool,
    pub validation_enabled: bool,
}

impl Default for ExpirationOptions {
    fn default() -> Self {
        Self {
            clock_skew: 0,
            claim_required: true,
            validation_enabled: true,
        }
    }
}

impl ExpirationOptions {
    /// Set clock skew tolerance
    pub fn clock_skew(mut self, seconds: u64) -> Self {
        self.clock_skew = seconds;
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.claim_required = required;
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.validation_enabled = enabled;
        self
    }
}

/// Options for the `nbf` claim check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotBeforeOptions {
    /// Leeway in seconds subtracted from the current time
    pub clock_skew: u64,
    pub claim_required: bool,
    pub validation_enabled: bool,
}

impl Default for NotBeforeOptions {
    fn default() -> Self {
        Self {
            clock_skew: 0,
            claim_required: true,
            validation_enabled: true,
        }
    }
}

impl NotBeforeOptions {
    /// Set clock skew tolerance
    pub fn clock_skew(mut self, seconds: u64) -> Self {
        self.clock_skew = seconds;
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.claim_required = required;
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.validation_enabled = enabled;
        self
    }
}

/// Options for the `aud` claim check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudienceOptions {
    /// The audience this validator identifies itself as
    ///
    /// When unset, any token carrying an `aud` claim is rejected.
    pub principal_audience: Option<String>,
    pub claim_required: bool,
    pub validation_enabled: bool,
}

impl Default for AudienceOptions {
    fn default() -> Self {
        Self {
            principal_audience: None,
            claim_required: true,
            validation_enabled: true,
        }
    }
}

impl AudienceOptions {
    pub fn principal(mut self, audience: impl Into<String>) -> Self {
        self.principal_audience = Some(audience.into());
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.claim_required = required;
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.validation_enabled = enabled;
        self
    }
}

/// Configuration for token validation
///
/// # Example
/// ```ignore
/// let options = ValidationOptions::default()
///     .require_audience("my-api")
///     .expiration(ExpirationOptions::default().clock_skew(60))
///     .no_nbf_validation();
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationOptions {
    pub token_type: TypeOptions,
    pub content_type: ContentTypeOptions,
    pub expiration: ExpirationOptions,
    pub not_before: NotBeforeOptions,
    pub audience: AudienceOptions,
    /// Accept tokens without a signature segment when `alg` is `"none"`
    pub allow_unsecured: bool,
}

impl ValidationOptions {
    /// Create a new validation config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    pub fn token_type(mut self, options: TypeOptions) -> Self {
        self.token_type = options;
        self
    }

    pub fn content_type(mut self, options: ContentTypeOptions) -> Self {
        self.content_type = options;
        self
    }

    pub fn expiration(mut self, options: ExpirationOptions) -> Self {
        self.expiration = options;
        self
    }

    pub fn not_before(mut self, options: NotBeforeOptions) -> Self {
        self.not_before = options;
        self
    }

    pub fn audience(mut self, options: AudienceOptions) -> Self {
        self.audience = options;
        self
    }

    /// Require a specific principal audience
    pub fn require_audience(mut self, audience: impl Into<String>) -> Self {
        self.audience.principal_audience = Some(audience.into());
        self
    }

    /// Accept or reject unsecured (`alg: none`) tokens
    pub fn allow_unsecured(mut self, allow: bool) -> Self {
        self.allow_unsecured = allow;
        self
    }

    /// Disable type header validation
    pub fn no_typ_validation(mut self) -> Self {
        self.token_type.validation_enabled = false;
        self
    }

    /// Disable expiration validation
    pub fn no_exp_validation(mut self) -> Self {
        self.expiration.validation_enabled = false;
        self
    }

    /// Disable not-before validation
    pub fn no_nbf_validation(mut self) -> Self {
        self.not_before.validation_enabled = false;
        self
    }

    /// Disable audience validation
    pub fn no_aud_validation(mut self) -> Self {
        self.audience.validation_enabled = false;
        self
    }

    /// Disable every claim rule (cty, typ, exp, nbf, aud)
    ///
    /// The signature presence rule still applies.
    pub fn skip_claims(self) -> Self {
        self.content_type(ContentTypeOptions::default())
            .no_typ_validation()
            .no_exp_validation()
            .no_nbf_validation()
            .no_aud_validation()
    }
}

/// Evaluate every enabled rule against `token` at time `now`
pub fn evaluate(token: &Token, options: &ValidationOptions, now: i64) -> Result<()> {
    validate_content_type(token, &options.content_type)?;
    validate_type(token, &options.token_type)?;
    validate_expiration(token, &options.expiration, now)?;
    validate_not_before(token, &options.not_before, now)?;
    validate_audience(token, &options.audience)?;
    validate_signature_presence(token, options.allow_unsecured)
}

fn validate_content_type(token: &Token, options: &ContentTypeOptions) -> Result<()> {
    if !options.validation_enabled {
        return Ok(());
    }

    match token.header().content_type.as_deref() {
        Some(cty) if !eq_ignore_case(cty, options.expected_type()) => {
            tracing::debug!(cty, expected = options.expected_type(), "content type mismatch");
            Err(Error::TokenTypeMismatch {
                claim: "cty",
                expected: options.expected_type().to_string(),
                found: cty.to_string(),
            })
        }
        _ => Ok(()),
    }
}

fn validate_type(token: &Token, options: &TypeOptions) -> Result<()> {
    if !options.validation_enabled {
        return Ok(());
    }

    match token.header().token_type.as_deref() {
        None if options.claim_required => {
            tracing::debug!(claim = "typ", "required header claim missing");
            Err(Error::TokenMissingClaim("typ"))
        }
        Some(typ) if !eq_ignore_case(typ, &options.expected_type) => {
            tracing::debug!(typ, expected = %options.expected_type, "token type mismatch");
            Err(Error::TokenTypeMismatch {
                claim: "typ",
                expected: options.expected_type.clone(),
                found: typ.to_string(),
            })
        }
        _ => Ok(()),
    }
}

fn validate_expiration(token: &Token, options: &ExpirationOptions, now: i64) -> Result<()> {
    if !options.validation_enabled {
        return Ok(());
    }

    match token.expiration() {
        None if options.claim_required => {
            tracing::debug!(claim = "exp", "required claim missing");
            Err(Error::TokenMissingClaim("exp"))
        }
        // The boundary second itself is already expired
        Some(exp) if exp <= expiration_boundary(now, options.clock_skew) => {
            tracing::debug!(exp, now, skew = options.clock_skew, "token expired");
            Err(Error::TokenExpired {
                expired_at: exp,
                now,
                skew: options.clock_skew,
            })
        }
        _ => Ok(()),
    }
}

fn validate_not_before(token: &Token, options: &NotBeforeOptions, now: i64) -> Result<()> {
    if !options.validation_enabled {
        return Ok(());
    }

    match token.not_before() {
        None if options.claim_required => {
            tracing::debug!(claim = "nbf", "required claim missing");
            Err(Error::TokenMissingClaim("nbf"))
        }
        // The boundary second itself is already valid
        Some(nbf) if nbf > not_before_boundary(now, options.clock_skew) => {
            tracing::debug!(nbf, now, skew = options.clock_skew, "token not yet valid");
            Err(Error::TokenNotYetValid {
                not_before: nbf,
                now,
                skew: options.clock_skew,
            })
        }
        _ => Ok(()),
    }
}

fn validate_audience(token: &Token, options: &AudienceOptions) -> Result<()> {
    if !options.validation_enabled {
        return Ok(());
    }

    let principal = options.principal_audience.as_deref();
    match (token.audience(), principal) {
        (None, _) if options.claim_required => {
            tracing::debug!(claim = "aud", "required claim missing");
            Err(Error::TokenMissingClaim("aud"))
        }
        (None, None) => Ok(()),
        (Some(_), Some(principal)) if token.claims().has_audience(principal) => Ok(()),
        (found, _) => {
            tracing::debug!(?found, expected = principal, "audience mismatch");
            Err(Error::TokenAudienceMismatch {
                expected: options.principal_audience.clone(),
                found: found.map(<[String]>::to_vec).unwrap_or_default(),
            })
        }
    }
}

fn validate_signature_presence(token: &Token, allow_unsecured: bool) -> Result<()> {
    if !token.is_unsecured() {
        return Ok(());
    }

    if !allow_unsecured {
        tracing::debug!("unsecured token rejected");
        return Err(Error::SignatureMissing);
    }

    match token.algorithm() {
        Some(alg) if eq_ignore_case(alg, "none") => Ok(()),
        alg => {
            tracing::debug!(alg, "unsecured token must use alg none");
            Err(Error::SignatureAlgorithmNotNone(alg.map(str::to_string)))
        }
    }
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a == b || a.to_uppercase() == b.to_uppercase()
}
