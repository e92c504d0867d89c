//! Per-part token generators.
//!
//! Generators hold positions into the tokenizer's input buffer rather than borrowing
//! it, and take the input on every pull. Each one runs once per reset.

use crate::compat::String;
use crate::types::Span;

/// Where a token's text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum TokenText {
    /// The token's own span of the input
    Source,
    /// Text that does not occur verbatim in the input, already decoded
    Synthetic(String),
}

/// A token whose text has not been materialized yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PendingToken {
    pub span: Span,
    pub text: TokenText,
}

impl PendingToken {
    pub fn source(span: Span) -> Self {
        Self {
            span,
            text: TokenText::Source,
        }
    }

    pub fn synthetic(span: Span, text: String) -> Self {
        Self {
            span,
            text: TokenText::Synthetic(text),
        }
    }
}

/// Token sequence for one URL part
#[derive(Debug, Clone)]
pub(crate) enum PartTokens {
    Once(Option<PendingToken>),
    HostSuffixes(HostSuffixes),
    PathPrefixes(PathPrefixes),
    QuerySegments(QuerySegments),
}

impl PartTokens {
    pub fn next(&mut self, input: &str) -> Option<PendingToken> {
        match self {
            Self::Once(token) => token.take(),
            Self::HostSuffixes(suffixes) => suffixes.next(input).map(PendingToken::source),
            Self::PathPrefixes(prefixes) => prefixes.next(input).map(PendingToken::source),
            Self::QuerySegments(segments) => segments.next(input).map(PendingToken::source),
        }
    }
}

/// Host suffixes from the full host down to the last label:
/// `www.foo.com`, `foo.com`, `com`
#[derive(Debug, Clone)]
pub(crate) struct HostSuffixes {
    next_start: Option<usize>,
    end: usize,
}

impl HostSuffixes {
    pub fn new(host: Span) -> Self {
        Self {
            next_start: Some(host.start),
            end: host.end,
        }
    }

    fn next(&mut self, input: &str) -> Option<Span> {
        loop {
            let start = self.next_start?;
            self.next_start = memchr::memchr(b'.', &input.as_bytes()[start..self.end])
                .map(|dot| start + dot + 1);
            // A trailing dot leaves an empty suffix
            if start < self.end {
                return Some(Span::new(start, self.end));
            }
        }
    }
}

/// Path prefixes ending before each '/' that closes a non-empty segment,
/// then the full path: `/a`, `/a/b`, `/a/b/c.html`
#[derive(Debug, Clone)]
pub(crate) struct PathPrefixes {
    start: usize,
    end: usize,
    cursor: Option<usize>,
}

impl PathPrefixes {
    pub fn new(path: Span) -> Self {
        Self {
            start: path.start,
            end: path.end,
            cursor: Some(path.start),
        }
    }

    fn next(&mut self, input: &str) -> Option<Span> {
        let bytes = input.as_bytes();
        loop {
            let from = self.cursor?;
            let Some(pos) = memchr::memchr(b'/', &bytes[from..self.end]) else {
                self.cursor = None;
                return Some(Span::new(self.start, self.end));
            };
            let slash = from + pos;
            self.cursor = Some(slash + 1);
            if slash > self.start && bytes[slash - 1] != b'/' {
                return Some(Span::new(self.start, slash));
            }
        }
    }
}

/// Non-empty `&`-separated query segments in input order
#[derive(Debug, Clone)]
pub(crate) struct QuerySegments {
    cursor: Option<usize>,
    end: usize,
}

impl QuerySegments {
    pub fn new(query: Span) -> Self {
        Self {
            cursor: Some(query.start),
            end: query.end,
        }
    }

    fn next(&mut self, input: &str) -> Option<Span> {
        loop {
            let from = self.cursor?;
            let segment = match memchr::memchr(b'&', &input.as_bytes()[from..self.end]) {
                Some(pos) => {
                    self.cursor = Some(from + pos + 1);
                    Span::new(from, from + pos)
                }
                None => {
                    self.cursor = None;
                    Span::new(from, self.end)
                }
            };
            if !segment.is_empty() {
                return Some(segment);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compat::Vec;

    fn drain<'a>(mut tokens: PartTokens, input: &'a str) -> Vec<(&'a str, usize, usize)> {
        let mut out = Vec::new();
        while let Some(token) = tokens.next(input) {
            out.push((token.span.slice(input), token.span.start, token.span.end));
        }
        out
    }

    fn span_of(input: &str, needle: &str) -> Span {
        let start = input.find(needle).unwrap_or(0);
        Span::new(start, start + needle.len())
    }

    #[test]
    fn test_host_suffixes() {
        let input = "http://www.foo.bar.com:9200/";
        let host = span_of(input, "www.foo.bar.com");
        let tokens = drain(PartTokens::HostSuffixes(HostSuffixes::new(host)), input);
        assert_eq!(
            tokens,
            [
                ("www.foo.bar.com", 7, 22),
                ("foo.bar.com", 11, 22),
                ("bar.com", 15, 22),
                ("com", 19, 22),
            ]
        );
    }

    #[test]
    fn test_host_suffixes_single_label() {
        let input = "http://localhost/";
        let host = span_of(input, "localhost");
        let tokens = drain(PartTokens::HostSuffixes(HostSuffixes::new(host)), input);
        assert_eq!(tokens, [("localhost", 7, 16)]);
    }

    #[test]
    fn test_host_suffixes_trailing_dot() {
        let input = "http://foo.com./";
        let host = span_of(input, "foo.com.");
        let tokens = drain(PartTokens::HostSuffixes(HostSuffixes::new(host)), input);
        assert_eq!(tokens, [("foo.com.", 7, 15), ("com.", 11, 15)]);
    }

    #[test]
    fn test_path_prefixes() {
        let input = "http://h/index_name/type_name/_search.html";
        let path = span_of(input, "/index_name/type_name/_search.html");
        let tokens: Vec<&str> = drain(PartTokens::PathPrefixes(PathPrefixes::new(path)), input)
            .into_iter()
            .map(|(text, _, _)| text)
            .collect();
        assert_eq!(
            tokens,
            [
                "/index_name",
                "/index_name/type_name",
                "/index_name/type_name/_search.html",
            ]
        );
    }

    #[test]
    fn test_path_prefixes_skip_empty_segments() {
        let input = "http://h/a//b/";
        let path = span_of(input, "/a//b/");
        let tokens: Vec<&str> = drain(PartTokens::PathPrefixes(PathPrefixes::new(path)), input)
            .into_iter()
            .map(|(text, _, _)| text)
            .collect();
        assert_eq!(tokens, ["/a", "/a//b", "/a//b/"]);
    }

    #[test]
    fn test_path_prefixes_root() {
        let input = "http://h/";
        let tokens = drain(
            PartTokens::PathPrefixes(PathPrefixes::new(Span::new(8, 9))),
            input,
        );
        assert_eq!(tokens, [("/", 8, 9)]);
    }

    #[test]
    fn test_query_segments() {
        let input = "http://h/?foo=bar&&baz=bat&flag&";
        let query = span_of(input, "foo=bar&&baz=bat&flag&");
        let tokens = drain(PartTokens::QuerySegments(QuerySegments::new(query)), input);
        assert_eq!(
            tokens,
            [("foo=bar", 10, 17), ("baz=bat", 19, 26), ("flag", 27, 31)]
        );
    }

    #[test]
    fn test_once() {
        let input = "http://h";
        let mut once = PartTokens::Once(Some(PendingToken::source(Span::new(0, 4))));
        assert_eq!(once.next(input), Some(PendingToken::source(Span::new(0, 4))));
        assert_eq!(once.next(input), None);
    }
}
