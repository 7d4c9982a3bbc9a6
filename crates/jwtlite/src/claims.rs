//! JWT claims set
//!
//! Registered claims from RFC 7519 Section 4.1 are parsed into typed fields.
//! Everything else lands in `extra` as raw JSON values.

use crate::error::Result;
use crate::utils::json::{
    ExtraClaims, ObjectWriter, parse_object, take_numeric_date, take_string, take_string_list,
};
use miniserde::json::Value;

/// Claims carried in the token body
#[derive(Debug, Clone, Default)]
pub struct Claims {
    /// Issuer (iss) - identifies the principal that issued the JWT
    pub issuer: Option<String>,

    /// Subject (sub) - identifies the principal that is the subject of the JWT
    pub subject: Option<String>,

    /// Audience (aud) - recipients the JWT is intended for
    ///
    /// The wire form may be a single string or a list; both are stored as a list.
    pub audience: Option<Vec<String>>,

    /// Expiration Time (exp) - seconds since Unix epoch
    pub expiration: Option<i64>,

    /// Not Before (nbf) - seconds since Unix epoch
    pub not_before: Option<i64>,

    /// Issued At (iat) - seconds since Unix epoch
    pub issued_at: Option<i64>,

    /// JWT ID (jti) - unique identifier for the JWT
    pub jwt_id: Option<String>,

    /// Public and private claims not listed above
    pub extra: ExtraClaims,
}

impl Claims {
    /// Get an extra (non-registered) claim
    pub fn claim(&self, name: &str) -> Option<&Value> {
        self.extra.get(name)
    }

    /// Whether the audience list contains `audience` (case-sensitive)
    pub fn has_audience(&self, audience: &str) -> bool {
        self.audience
            .as_deref()
            .is_some_and(|list| list.iter().any(|aud| aud == audience))
    }

    pub(crate) fn from_json(input: &str) -> Result<Self> {
        let mut members = parse_object(input, "payload")?;
        Ok(Self {
            issuer: take_string(&mut members, "iss")?,
            subject: take_string(&mut members, "sub")?,
            audience: take_string_list(&mut members, "aud")?,
            expiration: take_numeric_date(&mut members, "exp")?,
            not_before: take_numeric_date(&mut members, "nbf")?,
            issued_at: take_numeric_date(&mut members, "iat")?,
            jwt_id: take_string(&mut members, "jti")?,
            extra: members,
        })
    }

    pub(crate) fn to_json(&self) -> String {
        ObjectWriter::new(&self.extra)
            .string("iss", self.issuer.as_deref())
            .string("sub", self.subject.as_deref())
            .string_list("aud", self.audience.as_deref())
            .numeric_date("exp", self.expiration)
            .numeric_date("nbf", self.not_before)
            .numeric_date("iat", self.issued_at)
            .string("jti", self.jwt_id.as_deref())
            .finish()
    }
}
