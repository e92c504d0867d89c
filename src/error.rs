use crate::compat::String;

/// Reasons a URL could not be split into components
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// Input is empty or only whitespace
    EmptyInput,
    /// No `scheme:` prefix was found
    MissingScheme,
    /// Scheme contains characters outside `[A-Za-z0-9+.-]`
    InvalidScheme,
    /// Port is not a decimal number in `0..=65535`
    InvalidPort,
    /// Bracketed IPv6 host is not terminated by `]`
    InvalidIpv6,
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Self::EmptyInput => "Empty input",
            Self::MissingScheme => "Missing scheme",
            Self::InvalidScheme => "Invalid scheme",
            Self::InvalidPort => "Invalid port",
            Self::InvalidIpv6 => "Invalid IPv6 address",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

/// Errors surfaced by [`UrlTokenizer`](crate::UrlTokenizer) and [`UrlPart`](crate::UrlPart)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenizerError {
    /// A part name did not match any [`UrlPart`](crate::UrlPart)
    UnrecognizedPart(String),
    /// The input could not be split and malformed URLs are not allowed
    MalformedUrl(ParseError),
    /// The token stream was pulled before `reset` or after it was exhausted
    NotReset,
}

impl core::fmt::Display for TokenizerError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::UnrecognizedPart(part) => write!(f, "Unrecognized URL part: {part}"),
            Self::MalformedUrl(err) => write!(f, "Malformed URL: {err}"),
            Self::NotReset => f.write_str("Token stream used without reset"),
        }
    }
}

impl From<ParseError> for TokenizerError {
    fn from(err: ParseError) -> Self {
        Self::MalformedUrl(err)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TokenizerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::MalformedUrl(err) => Some(err),
            _ => None,
        }
    }
}

/// Analysis pipelines treat a bad URL as a failed read of the field.
#[cfg(feature = "std")]
impl From<TokenizerError> for std::io::Error {
    fn from(err: TokenizerError) -> Self {
        let kind = match err {
            TokenizerError::MalformedUrl(_) => std::io::ErrorKind::InvalidData,
            _ => std::io::ErrorKind::InvalidInput,
        };
        std::io::Error::new(kind, err)
    }
}

/// Result type for tokenizer operations
pub type Result<T> = core::result::Result<T, TokenizerError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compat::ToString;

    #[test]
    fn test_error_display() {
        assert_eq!(ParseError::InvalidPort.to_string(), "Invalid port");
        assert_eq!(
            TokenizerError::UnrecognizedPart("fragment".to_string()).to_string(),
            "Unrecognized URL part: fragment"
        );
        assert_eq!(
            TokenizerError::MalformedUrl(ParseError::MissingScheme).to_string(),
            "Malformed URL: Missing scheme"
        );
    }

    #[test]
    fn test_parse_error_conversion() {
        let err: TokenizerError = ParseError::InvalidIpv6.into();
        assert_eq!(err, TokenizerError::MalformedUrl(ParseError::InvalidIpv6));
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_io_error_conversion() {
        use std::error::Error as _;

        let io: std::io::Error = TokenizerError::MalformedUrl(ParseError::MissingScheme).into();
        assert_eq!(io.kind(), std::io::ErrorKind::InvalidData);
        assert!(io.get_ref().and_then(|inner| inner.source()).is_some());

        let io: std::io::Error = TokenizerError::NotReset.into();
        assert_eq!(io.kind(), std::io::ErrorKind::InvalidInput);
    }
}
