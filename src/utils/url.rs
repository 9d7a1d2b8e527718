//! URL encoding/decoding utilities

/// Encodes a string using URL encoding
///
/// # Arguments
/// * `input` - The string to encode
///
/// # Returns
/// * String containing the URL-encoded input
///
/// # Examples
/// ```
/// use clash_subconverter::utils::url::url_encode;
///
/// let encoded = url_encode("Hello World!");
/// assert_eq!(encoded, "Hello%20World%21");
/// ```
pub fn url_encode(input: &str) -> String {
    urlencoding::encode(input).into_owned()
}

/// Decodes a URL-encoded string
///
/// # Arguments
/// * `input` - The URL-encoded string to decode
///
/// # Returns
/// * String containing the decoded input
/// * Returns the original string if decoding fails
///
/// # Examples
/// ```
/// use clash_subconverter::utils::url::url_decode;
///
/// let decoded = url_decode("Hello%20World%21");
/// assert_eq!(decoded, "Hello World!");
/// ```
pub fn url_decode(input: &str) -> String {
    urlencoding::decode(input)
        .map(|cow| cow.into_owned())
        .unwrap_or_else(|_| input.to_string())
}

/// Whether the input looks like a remote subscription address rather than link content
pub fn is_link(input: &str) -> bool {
    input.starts_with("http://") || input.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_decode_utf8() {
        assert_eq!(url_decode("%E9%A6%99%E6%B8%AF%2001"), "香港 01");
    }

    #[test]
    fn test_url_decode_invalid_utf8_falls_back() {
        assert_eq!(url_decode("%FF%FE"), "%FF%FE");
    }

    #[test]
    fn test_is_link() {
        assert!(is_link("https://example.com/sub"));
        assert!(is_link("http://example.com/sub"));
        assert!(!is_link("ss://YWVz@example.com:8388"));
        assert!(!is_link("dm1lc3M6Ly9leGFtcGxl"));
    }
}
