//! Input bounds enforced before and during decoding
//!
//! Every limit violation is a structural error.

/// Longest accepted compact token, checked before splitting
pub(crate) const MAX_TOKEN_LENGTH: usize = 64 * 1024;

/// Largest decoded header JSON
pub(crate) const MAX_DECODED_HEADER_SIZE: usize = 8 * 1024;

/// Largest decoded claims JSON; extra claims make payloads grow, headers rarely do
pub(crate) const MAX_DECODED_PAYLOAD_SIZE: usize = 64 * 1024;
