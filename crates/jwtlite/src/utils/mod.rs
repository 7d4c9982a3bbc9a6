pub mod base64url;
pub(crate) mod json;
