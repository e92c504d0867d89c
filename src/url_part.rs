use crate::compat::{String, ToString};
use crate::error::{Result, TokenizerError};

/// A URL component that a [`UrlTokenizer`](crate::UrlTokenizer) can be restricted to.
///
/// Variants are ordered by declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(try_from = "String"))]
pub enum UrlPart {
    /// Scheme, e.g. `https`
    Protocol,
    /// Host name or IP literal
    Host,
    /// Path, including the leading `/`
    Path,
    /// Fragment, without the leading `#`
    Ref,
    /// Query, split into `key=value` pairs
    Query,
    /// Explicit port, or the scheme's default port
    Port,
    /// The entire input
    Whole,
}

/// Lookup table for case-insensitive name matching
const PART_NAMES: [(&str, UrlPart); 7] = [
    ("protocol", UrlPart::Protocol),
    ("host", UrlPart::Host),
    ("path", UrlPart::Path),
    ("ref", UrlPart::Ref),
    ("query", UrlPart::Query),
    ("port", UrlPart::Port),
    ("whole", UrlPart::Whole),
];

impl UrlPart {
    /// All parts in declaration order
    pub const ALL: [UrlPart; 7] = [
        Self::Protocol,
        Self::Host,
        Self::Path,
        Self::Ref,
        Self::Query,
        Self::Port,
        Self::Whole,
    ];

    /// Canonical lower-case name
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Protocol => "protocol",
            Self::Host => "host",
            Self::Path => "path",
            Self::Ref => "ref",
            Self::Query => "query",
            Self::Port => "port",
            Self::Whole => "whole",
        }
    }

    /// Look up a part by name, ignoring ASCII case.
    ///
    /// # Errors
    ///
    /// Returns [`TokenizerError::UnrecognizedPart`] carrying `name` if no part matches.
    ///
    /// # Examples
    ///
    /// ```
    /// use url_tokenizer::UrlPart;
    ///
    /// assert_eq!(UrlPart::from_name("HOST"), Ok(UrlPart::Host));
    /// assert!(UrlPart::from_name("fragment").is_err());
    /// ```
    pub fn from_name(name: &str) -> Result<Self> {
        PART_NAMES
            .iter()
            .find(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
            .map(|&(_, part)| part)
            .ok_or_else(|| TokenizerError::UnrecognizedPart(name.to_string()))
    }
}

impl core::fmt::Display for UrlPart {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.pad(self.as_str())
    }
}

impl core::str::FromStr for UrlPart {
    type Err = TokenizerError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}

impl TryFrom<&str> for UrlPart {
    type Error = TokenizerError;

    fn try_from(value: &str) -> Result<Self> {
        Self::from_name(value)
    }
}

impl TryFrom<String> for UrlPart {
    type Error = TokenizerError;

    fn try_from(value: String) -> Result<Self> {
        Self::from_name(&value)
    }
}
