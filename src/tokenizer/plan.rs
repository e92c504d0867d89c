//! Choose the generators for a parsed URL.

use super::config::TokenizerConfig;
use super::generators::{HostSuffixes, PartTokens, PathPrefixes, PendingToken, QuerySegments};
use crate::checkers::is_ip_literal;
use crate::compat::{String, Vec};
use crate::percent_decode::percent_decode;
use crate::types::Span;
use crate::url_components::UrlComponents;
use crate::url_part::UrlPart;

/// Generators for `part`, or for every part when none is selected.
///
/// With no part the order is: whole input, protocol, `scheme://host`, `host:port`,
/// host, explicit port, path, query, ref. Start offsets never decrease along that
/// order. Default ports are only synthesized when the part is [`UrlPart::Port`].
pub(crate) fn plan(
    part: Option<UrlPart>,
    input: &str,
    components: &UrlComponents,
    config: TokenizerConfig,
) -> Vec<PartTokens> {
    let Some(part) = part else {
        return plan_all(input, components, config);
    };
    let mut stages = Vec::with_capacity(1);
    stages.push(part_tokens(part, input, components, config));
    stages
}

/// Single token covering the whole input, used for unparsable input
pub(crate) fn plan_malformed(input: &str) -> Vec<PartTokens> {
    let mut stages = Vec::with_capacity(1);
    stages.push(once(Span::new(0, input.len())));
    stages
}

fn plan_all(input: &str, components: &UrlComponents, config: TokenizerConfig) -> Vec<PartTokens> {
    let mut stages = Vec::with_capacity(9);
    stages.push(part_tokens(UrlPart::Whole, input, components, config));
    stages.push(part_tokens(UrlPart::Protocol, input, components, config));

    if let Some(host) = non_empty(components.host) {
        stages.push(PartTokens::Once(Some(scheme_and_host(
            input, components, host, config,
        ))));
        if let Some(port) = components.port {
            stages.push(once(Span::new(host.start, port.end)));
        }
    }

    stages.push(part_tokens(UrlPart::Host, input, components, config));
    stages.push(PartTokens::Once(components.port.map(PendingToken::source)));
    for part in [UrlPart::Path, UrlPart::Query, UrlPart::Ref] {
        stages.push(part_tokens(part, input, components, config));
    }
    stages
}

fn part_tokens(
    part: UrlPart,
    input: &str,
    components: &UrlComponents,
    config: TokenizerConfig,
) -> PartTokens {
    match part {
        UrlPart::Protocol => once(components.scheme),
        UrlPart::Host => match non_empty(components.host) {
            Some(host) if config.tokenize_host && !is_ip_literal(host.slice(input)) => {
                PartTokens::HostSuffixes(HostSuffixes::new(host))
            }
            Some(host) => once(host),
            None => PartTokens::Once(None),
        },
        UrlPart::Path => match non_empty(Some(components.path)) {
            Some(path) if config.tokenize_path => PartTokens::PathPrefixes(PathPrefixes::new(path)),
            Some(path) => once(path),
            None => PartTokens::Once(None),
        },
        UrlPart::Query => non_empty(components.query).map_or(PartTokens::Once(None), |query| {
            PartTokens::QuerySegments(QuerySegments::new(query))
        }),
        UrlPart::Port => PartTokens::Once(port_token(input, components)),
        UrlPart::Ref => non_empty(components.fragment).map_or(PartTokens::Once(None), once),
        UrlPart::Whole => once(Span::new(0, input.len())),
    }
}

/// Explicit port, or the scheme's default port at a zero-length span after the host
fn port_token(input: &str, components: &UrlComponents) -> Option<PendingToken> {
    if let Some(port) = components.port {
        return Some(PendingToken::source(port));
    }
    let default_port = components.scheme_type(input).default_port()?;
    Some(PendingToken::synthetic(
        Span::empty_at(components.port_sentinel()),
        String::from(default_port),
    ))
}

/// `scheme://host` spanning from the scheme to the end of the host.
/// Userinfo sits between the two in the input, so it has to be rebuilt.
fn scheme_and_host(
    input: &str,
    components: &UrlComponents,
    host: Span,
    config: TokenizerConfig,
) -> PendingToken {
    let span = Span::new(components.scheme.start, host.end);
    if components.userinfo.is_none() {
        return PendingToken::source(span);
    }

    let scheme = components.scheme.slice(input);
    let host = host.slice(input);
    let host = if config.url_decode {
        percent_decode(host)
    } else {
        host.into()
    };
    let mut text = String::with_capacity(scheme.len() + 3 + host.len());
    text.push_str(scheme);
    text.push_str("://");
    text.push_str(&host);
    PendingToken::synthetic(span, text)
}

fn once(span: Span) -> PartTokens {
    PartTokens::Once(Some(PendingToken::source(span)))
}

fn non_empty(span: Option<Span>) -> Option<Span> {
    span.filter(|span| !span.is_empty())
}
