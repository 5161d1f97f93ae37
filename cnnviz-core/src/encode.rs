use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::types::InferenceRequest;

/// Standard padded base64 of the raw file bytes.
pub fn encode_audio(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Inverse of [`encode_audio`].
pub fn decode_audio(encoded: &str) -> Result<Vec<u8>, base64::DecodeError> {
    STANDARD.decode(encoded)
}

/// Serialize the `{"audio_data": ...}` request body.
pub fn request_body(bytes: &[u8]) -> Result<String, serde_json::Error> {
    serde_json::to_string(&InferenceRequest {
        audio_data: encode_audio(bytes),
    })
}
