//! Content transport encoding
//!
//! The remote write API only accepts file content as base64. Text is first
//! converted to UTF-8 bytes and the whole byte sequence is encoded at once,
//! so multi-byte characters are never split at an encoding boundary.

use base64::Engine;
use thiserror::Error;

use super::newtypes::TransportContent;

/// Errors produced when decoding transport content
#[derive(Debug, Error)]
pub enum CodecError {
    /// Input is not valid base64
    #[error("Invalid base64 content: {0}")]
    InvalidBase64(#[from] base64::DecodeError),

    /// Decoded bytes are not valid UTF-8
    #[error("Decoded content is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

/// Encodes text into the transport encoding
pub fn encode(text: &str) -> TransportContent {
    TransportContent::from_encoded(base64::engine::general_purpose::STANDARD.encode(text.as_bytes()))
}

/// Decodes transport content back into text
///
/// ASCII whitespace is ignored, since the contents API returns base64
/// wrapped at 60 columns.
///
/// # Errors
/// Returns [`CodecError`] if the input is not base64 or not UTF-8
pub fn decode(encoded: &str) -> Result<String, CodecError> {
    let compact: String = encoded
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    let bytes = base64::engine::general_purpose::STANDARD.decode(compact)?;
    Ok(String::from_utf8(bytes)?)
}
