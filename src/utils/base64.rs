use base64::{engine::general_purpose, Engine as _};

/// Encodes a string to Base64 format.
pub fn base64_encode(input: &str) -> String {
    general_purpose::STANDARD.encode(input)
}

/// Decodes Base64 into raw bytes, accepting the variants subscription providers emit.
///
/// Whitespace (including line breaks inside the blob) is ignored, and both the
/// standard and URL-safe alphabets are accepted, with or without padding.
///
/// # Returns
/// The decoded bytes, or `None` if no variant accepts the input.
pub fn base64_decode_bytes(input: &str) -> Option<Vec<u8>> {
    let cleaned: String = input.chars().filter(|c| !c.is_whitespace()).collect();

    [
        &general_purpose::STANDARD,
        &general_purpose::URL_SAFE,
        &general_purpose::STANDARD_NO_PAD,
        &general_purpose::URL_SAFE_NO_PAD,
    ]
    .iter()
    .find_map(|engine| engine.decode(&cleaned).ok())
}

/// Decodes a Base64 string to its original UTF-8 text.
///
/// # Returns
/// The decoded string, or `None` if the input is not Base64 or not UTF-8 once decoded.
pub fn base64_decode(input: &str) -> Option<String> {
    base64_decode_bytes(input).and_then(|bytes| String::from_utf8(bytes).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base64_round_trip() {
        let encoded = base64_encode("aes-256-gcm:pass123");
        assert_eq!(encoded, "YWVzLTI1Ni1nY206cGFzczEyMw==");
        assert_eq!(base64_decode(&encoded).as_deref(), Some("aes-256-gcm:pass123"));
    }

    #[test]
    fn test_base64_decode_variants() {
        // Missing padding
        assert_eq!(
            base64_decode("YWVzLTI1Ni1nY206cGFzczEyMw").as_deref(),
            Some("aes-256-gcm:pass123")
        );
        // URL-safe alphabet ("???" encodes to "Pz8/" in the standard alphabet)
        assert_eq!(base64_decode("Pz8_").as_deref(), Some("???"));
        // Line-wrapped blob
        assert_eq!(
            base64_decode("YWVzLTI1Ni1n\nY206cGFzczEyMw==\n").as_deref(),
            Some("aes-256-gcm:pass123")
        );
    }

    #[test]
    fn test_base64_decode_invalid() {
        assert_eq!(base64_decode("not base64!"), None);
        // Valid Base64, but not UTF-8
        assert_eq!(base64_decode("//79"), None);
    }
}
