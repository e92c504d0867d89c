use crate::checkers::is_valid_port;
use crate::error::ParseError;
use crate::types::Span;
use crate::url_components::UrlComponents;

/// Split an authority span into userinfo, host and port.
///
/// Userinfo ends at the last '@'. A host starting with '[' is an IPv6 literal and
/// keeps its brackets; otherwise the port starts after the last ':'.
pub(super) fn parse_authority(
    input: &str,
    authority: Span,
    components: &mut UrlComponents,
) -> Result<(), ParseError> {
    let bytes = input.as_bytes();
    let auth = &bytes[authority.start..authority.end];

    let host_start = match memchr::memrchr(b'@', auth) {
        Some(at) => {
            components.userinfo = Some(Span::new(authority.start, authority.start + at));
            authority.start + at + 1
        }
        None => authority.start,
    };

    let host_port = &bytes[host_start..authority.end];
    let (host_end, port) = if host_port.first() == Some(&b'[') {
        let close = memchr::memchr(b']', host_port).ok_or(ParseError::InvalidIpv6)?;
        let host_end = host_start + close + 1;
        match bytes.get(host_end) {
            _ if host_end == authority.end => (host_end, None),
            Some(b':') => (host_end, Some(Span::new(host_end + 1, authority.end))),
            _ => return Err(ParseError::InvalidIpv6),
        }
    } else {
        match memchr::memrchr(b':', host_port) {
            Some(colon) => {
                let host_end = host_start + colon;
                (host_end, Some(Span::new(host_end + 1, authority.end)))
            }
            None => (authority.end, None),
        }
    };

    // "host:" has no port
    let port = port.filter(|port| !port.is_empty());
    if let Some(port) = port {
        if !is_valid_port(port.slice(input)) {
            return Err(ParseError::InvalidPort);
        }
    }

    components.host = Some(Span::new(host_start, host_end));
    components.port = port;
    Ok(())
}
