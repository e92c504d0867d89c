mod authority;

use authority::parse_authority;

use crate::character_sets::{is_scheme_byte, is_scheme_start_byte};
use crate::error::ParseError;
use crate::helpers::{authority_end, prune_fragment, prune_query, trim_span};
use crate::types::Span;
use crate::url_components::UrlComponents;

/// Split a URL into component spans without copying or normalizing anything.
///
/// Every span refers to `input` as given, so offsets can be reported against the
/// original text. Leading and trailing whitespace is skipped.
///
/// # Errors
///
/// Returns an error if the input is empty, has no valid scheme, has an invalid
/// port, or an unterminated IPv6 literal.
pub fn split_url(input: &str) -> Result<UrlComponents, ParseError> {
    let trimmed = trim_span(input);
    if trimmed.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let scheme = parse_scheme(input, trimmed)?;
    let mut components = UrlComponents::new(scheme);

    // Fragment first: '?' and '/' inside it are not delimiters
    let (rest, fragment) = prune_fragment(input, Span::new(scheme.end + 1, trimmed.end));
    let (rest, query) = prune_query(input, rest);
    components.fragment = fragment;
    components.query = query;

    let mut path_start = rest.start;
    if rest.slice(input).starts_with("//") {
        let auth_start = rest.start + 2;
        let auth_end = authority_end(input, auth_start, rest.end);
        parse_authority(input, Span::new(auth_start, auth_end), &mut components)?;
        path_start = auth_end;
    }
    components.path = Span::new(path_start, rest.end);

    Ok(components)
}

/// Find the scheme at the start of `trimmed`, excluding the ':'
fn parse_scheme(input: &str, trimmed: Span) -> Result<Span, ParseError> {
    let bytes = &input.as_bytes()[trimmed.start..trimmed.end];
    let colon = memchr::memchr(b':', bytes).ok_or(ParseError::MissingScheme)?;
    let scheme = &bytes[..colon];

    match scheme.split_first() {
        None => Err(ParseError::MissingScheme),
        Some((&first, rest))
            if is_scheme_start_byte(first) && rest.iter().all(|&b| is_scheme_byte(b)) =>
        {
            Ok(Span::new(trimmed.start, trimmed.start + colon))
        }
        Some(_) => Err(ParseError::InvalidScheme),
    }
}
