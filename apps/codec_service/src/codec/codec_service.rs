use base64::{engine::general_purpose::STANDARD, Engine as _};

use super::codec_error::CodecError;

#[derive(Clone, Default)]
pub struct CodecService;

impl CodecService {
    pub fn new() -> Self {
        Self
    }

    /// Base64 of the UTF-8 bytes of `text`, standard alphabet, padded.
    pub fn encode(&self, text: &str) -> String {
        STANDARD.encode(text.as_bytes())
    }

    /// Strict inverse of [`CodecService::encode`]. Non-canonical padding,
    /// characters outside the standard alphabet and decoded bytes that are
    /// not UTF-8 all fail with [`CodecError::InvalidEncoding`].
    pub fn decode(&self, text: &str) -> Result<String, CodecError> {
        let bytes = STANDARD.decode(text)?;
        let decoded = String::from_utf8(bytes)?;
        Ok(decoded)
    }
}
