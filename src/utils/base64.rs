use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;
use base64::{DecodeError, Engine as _};

/// Standard alphabet, accepting input with or without `=` padding.
const LENIENT_STANDARD: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Reverses a URL-safe Base64 string to standard Base64 format.
pub fn url_safe_base64_reverse(input: &str) -> String {
    input.replace('-', "+").replace('_', "/")
}

/// Decodes a Base64 string that may be URL-safe and may have lost its padding.
///
/// Whitespace inside the input is ignored, so payloads wrapped across lines
/// still decode.
pub fn url_safe_base64_decode(input: &str) -> Result<Vec<u8>, DecodeError> {
    let cleaned: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    LENIENT_STANDARD.decode(url_safe_base64_reverse(&cleaned))
}

/// Decodes a URL-safe Base64 string into UTF-8 text, `None` when either step fails.
pub fn url_safe_base64_decode_str(input: &str) -> Option<String> {
    url_safe_base64_decode(input)
        .ok()
        .and_then(|bytes| String::from_utf8(bytes).ok())
}
