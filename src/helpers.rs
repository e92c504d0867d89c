use crate::character_sets::is_c0_control_or_space;
use crate::types::Span;

/// Span of `input` without leading/trailing C0 controls and spaces.
/// Returns an empty span at the end of input when nothing is left.
pub fn trim_span(input: &str) -> Span {
    let bytes = input.as_bytes();
    let Some(start) = bytes.iter().position(|&b| !is_c0_control_or_space(b)) else {
        return Span::empty_at(bytes.len());
    };
    let end = bytes
        .iter()
        .rposition(|&b| !is_c0_control_or_space(b))
        .map_or(start, |pos| pos + 1);
    Span::new(start, end)
}

/// Split `span` at the first '#'.
/// Returns (`span_before_hash`, `fragment_without_hash`)
pub fn prune_fragment(input: &str, span: Span) -> (Span, Option<Span>) {
    let bytes = &input.as_bytes()[span.start..span.end];
    memchr::memchr(b'#', bytes).map_or((span, None), |pos| {
        let hash = span.start + pos;
        (
            Span::new(span.start, hash),
            Some(Span::new(hash + 1, span.end)),
        )
    })
}

/// Split `span` at the first '?'.
/// Returns (`span_before_question_mark`, `query_without_question_mark`)
pub fn prune_query(input: &str, span: Span) -> (Span, Option<Span>) {
    let bytes = &input.as_bytes()[span.start..span.end];
    memchr::memchr(b'?', bytes).map_or((span, None), |pos| {
        let mark = span.start + pos;
        (
            Span::new(span.start, mark),
            Some(Span::new(mark + 1, span.end)),
        )
    })
}

/// End of the authority that starts at `start`: the first '/', '?' or '#', or `end`
pub fn authority_end(input: &str, start: usize, end: usize) -> usize {
    memchr::memchr3(b'/', b'?', b'#', &input.as_bytes()[start..end]).map_or(end, |pos| start + pos)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_span() {
        assert_eq!(trim_span("http://a"), Span::new(0, 8));
        assert_eq!(trim_span("  http://a\r\n"), Span::new(2, 10));
        assert_eq!(trim_span("\t\n "), Span::empty_at(3));
        assert_eq!(trim_span(""), Span::empty_at(0));
    }

    #[test]
    fn test_prune_fragment() {
        let input = "http://foo.com?a=1#baz?x";
        let (rest, fragment) = prune_fragment(input, Span::new(0, input.len()));
        assert_eq!(rest.slice(input), "http://foo.com?a=1");
        assert_eq!(fragment.map(|f| f.slice(input)), Some("baz?x"));

        let (rest, fragment) = prune_fragment("http://foo.com", Span::new(0, 14));
        assert_eq!(rest, Span::new(0, 14));
        assert_eq!(fragment, None);
    }

    #[test]
    fn test_prune_query() {
        let input = "/path?a=1&b=2";
        let (path, query) = prune_query(input, Span::new(0, input.len()));
        assert_eq!(path.slice(input), "/path");
        assert_eq!(query.map(|q| q.slice(input)), Some("a=1&b=2"));
    }

    #[test]
    fn test_authority_end() {
        let input = "http://foo.com:80/path";
        assert_eq!(authority_end(input, 7, input.len()), 17);
        assert_eq!(authority_end("http://foo.com", 7, 14), 14);
        assert_eq!(authority_end("http://foo.com?q", 7, 16), 14);
    }
}
