use crate::scheme::get_scheme_type;
use crate::types::{SchemeType, Span};

/// Spans of each URL component within the original input
///
/// Input: "https://user@example.com:8080/path?query#hash"
/// - scheme: 0..5 ("https")
/// - userinfo: 8..12 ("user")
/// - host: 13..24 ("example.com")
/// - port: 25..29 ("8080")
/// - path: 29..34 ("/path")
/// - query: 35..40 ("query", without '?')
/// - fragment: 41..45 ("hash", without '#')
///
/// A component that is absent from the input is `None`. Present components may be
/// empty (`"http://host?"` has an empty query).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlComponents {
    pub scheme: Span,
    pub userinfo: Option<Span>,
    pub host: Option<Span>,
    pub port: Option<Span>,
    pub path: Span,
    pub query: Option<Span>,
    pub fragment: Option<Span>,
}

impl UrlComponents {
    /// Create components with only the scheme set
    pub fn new(scheme: Span) -> Self {
        Self {
            scheme,
            path: Span::empty_at(scheme.end + 1),
            ..Self::default()
        }
    }

    /// Get the scheme type used for default port resolution
    pub fn scheme_type(&self, input: &str) -> SchemeType {
        get_scheme_type(self.scheme.slice(input))
    }

    /// Position where a synthesized port would sit: right after the host,
    /// or right after `scheme:` for URLs without authority
    pub fn port_sentinel(&self) -> usize {
        self.host.map_or(self.scheme.end + 1, |host| host.end)
    }
}
