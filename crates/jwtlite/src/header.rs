use crate::error::Result;
use crate::utils::json::{ExtraClaims, ObjectWriter, parse_object, take_string};
use miniserde::json::Value;

/// JWT header (JOSE header) structure
///
/// Registered parameters are parsed into fields; every other member is kept
/// verbatim in `extra`.
#[derive(Debug, Clone, Default)]
pub struct Header {
    /// Token type (typ), usually "JWT"
    pub token_type: Option<String>,

    /// Content type (cty)
    pub content_type: Option<String>,

    /// Algorithm (alg), "none" for unsecured tokens
    pub algorithm: Option<String>,

    /// Unrecognized header parameters
    pub extra: ExtraClaims,
}

impl Header {
    /// Header for an unsecured JWT: `{"alg":"none","typ":"JWT"}`
    pub fn unsecured() -> Self {
        Self {
            token_type: Some("JWT".to_string()),
            algorithm: Some("none".to_string()),
            ..Self::default()
        }
    }

    /// Get an unrecognized header parameter
    pub fn param(&self, name: &str) -> Option<&Value> {
        self.extra.get(name)
    }

    pub(crate) fn from_json(input: &str) -> Result<Self> {
        let mut members = parse_object(input, "header")?;
        Ok(Self {
            token_type: take_string(&mut members, "typ")?,
            content_type: take_string(&mut members, "cty")?,
            algorithm: take_string(&mut members, "alg")?,
            extra: members,
        })
    }

    pub(crate) fn to_json(&self) -> String {
        ObjectWriter::new(&self.extra)
            .string("typ", self.token_type.as_deref())
            .string("cty", self.content_type.as_deref())
            .string("alg", self.algorithm.as_deref())
            .finish()
    }
}
