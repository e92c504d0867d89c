use crate::compat::Cow;

/// Percent-decode token text.
/// Borrows when there is nothing to decode; invalid UTF-8 is replaced with U+FFFD.
/// `+` is left as-is since it only means space in form-encoded queries.
pub fn percent_decode(input: &str) -> Cow<'_, str> {
    if memchr::memchr(b'%', input.as_bytes()).is_none() {
        return Cow::Borrowed(input);
    }
    percent_encoding::percent_decode_str(input).decode_utf8_lossy()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_decode() {
        assert_eq!(percent_decode("hello%20world"), "hello world");
        assert_eq!(percent_decode("%2Fpath%2Fto"), "/path/to");
        assert_eq!(percent_decode("%C3%A9t%C3%A9"), "été");
        assert_eq!(percent_decode("a+b"), "a+b");
    }

    #[test]
    fn test_percent_decode_borrows_plain_text() {
        assert!(matches!(percent_decode("plain"), Cow::Borrowed("plain")));
    }

    #[test]
    fn test_percent_decode_invalid_sequences() {
        // Incomplete escapes are kept verbatim
        assert_eq!(percent_decode("100%"), "100%");
        assert_eq!(percent_decode("%zz"), "%zz");
        // Invalid UTF-8 is replaced
        assert_eq!(percent_decode("%FF"), "\u{FFFD}");
    }
}
