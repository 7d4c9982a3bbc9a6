//! JSON object helpers shared by the header and claims models
//!
//! Segments are parsed into a `miniserde` object first, so duplicate member
//! names collapse to the lexically last occurrence. Registered members are
//! then removed one by one and whatever remains is kept as extra claims.

use crate::error::{Error, Result};
use miniserde::json::{self, Array, Number, Object, Value};
use std::collections::BTreeMap;

/// Unrecognized members of a header or claims object, kept verbatim
pub type ExtraClaims = BTreeMap<String, Value>;

/// Parse a JSON document that must be an object
pub(crate) fn parse_object(input: &str, segment: &str) -> Result<ExtraClaims> {
    let value: Value = json::from_str(input)
        .map_err(|e| Error::FormatInvalidJson(format!("Failed to parse {segment}: {e}")))?;

    match value {
        Value::Object(mut object) => Ok(std::mem::take(&mut *object)),
        _ => Err(Error::FormatInvalidJson(format!(
            "Failed to parse {segment}: not a JSON object"
        ))),
    }
}

/// Remove a string member; `null` counts as absent
pub(crate) fn take_string(members: &mut ExtraClaims, claim: &'static str) -> Result<Option<String>> {
    match members.remove(claim) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(value)) => Ok(Some(value)),
        Some(_) => Err(Error::ClaimInvalidType {
            claim,
            expected: "string",
        }),
    }
}

/// Remove a NumericDate member, which must be a whole number
pub(crate) fn take_numeric_date(
    members: &mut ExtraClaims,
    claim: &'static str,
) -> Result<Option<i64>> {
    match members.remove(claim) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(Number::I64(value))) => Ok(Some(value)),
        Some(Value::Number(Number::U64(value))) => i64::try_from(value)
            .map(Some)
            .map_err(|_| Error::NumericDateInvalid { claim }),
        Some(_) => Err(Error::NumericDateInvalid { claim }),
    }
}

/// Remove a StringOrURI-or-list member, normalizing a single string to a list
pub(crate) fn take_string_list(
    members: &mut ExtraClaims,
    claim: &'static str,
) -> Result<Option<Vec<String>>> {
    let invalid = || Error::ClaimInvalidType {
        claim,
        expected: "string or array of strings",
    };

    match members.remove(claim) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(value)) => Ok(Some(vec![value])),
        Some(Value::Array(values)) => values
            .iter()
            .map(|value| match value {
                Value::String(value) => Ok(value.clone()),
                _ => Err(invalid()),
            })
            .collect::<Result<Vec<_>>>()
            .map(Some),
        Some(_) => Err(invalid()),
    }
}

/// Builder for a serialized JSON object that skips absent members
pub(crate) struct ObjectWriter {
    object: Object,
}

impl ObjectWriter {
    /// Start from the extra members; registered members written later replace them
    pub fn new(extra: &ExtraClaims) -> Self {
        let mut object = Object::new();
        for (name, value) in extra {
            object.insert(name.clone(), value.clone());
        }
        Self { object }
    }

    pub fn string(&mut self, claim: &str, value: Option<&str>) -> &mut Self {
        if let Some(value) = value {
            self.object
                .insert(claim.to_string(), Value::String(value.to_string()));
        }
        self
    }

    pub fn numeric_date(&mut self, claim: &str, value: Option<i64>) -> &mut Self {
        if let Some(value) = value {
            self.object
                .insert(claim.to_string(), Value::Number(Number::I64(value)));
        }
        self
    }

    /// A one-element list is written as a bare string
    pub fn string_list(&mut self, claim: &str, values: Option<&[String]>) -> &mut Self {
        match values {
            None => {}
            Some([single]) => {
                self.object
                    .insert(claim.to_string(), Value::String(single.clone()));
            }
            Some(values) => {
                let mut array = Array::new();
                for value in values {
                    array.push(Value::String(value.clone()));
                }
                self.object.insert(claim.to_string(), Value::Array(array));
            }
        }
        self
    }

    pub fn finish(&self) -> String {
        json::to_string(&self.object)
    }
}
