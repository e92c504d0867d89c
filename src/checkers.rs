/// Check if a host is a dotted-decimal IPv4 address.
/// Only the four-part decimal form is recognized; anything else is treated as a name.
pub fn is_ipv4(host: &str) -> bool {
    let host = host.strip_suffix('.').unwrap_or(host);
    let mut parts = 0;
    for part in host.split('.') {
        parts += 1;
        if part.is_empty() || part.len() > 3 || !part.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }
    }
    parts == 4
}

/// Check if a host is an IP literal, which is never split into labels
pub fn is_ip_literal(host: &str) -> bool {
    host.starts_with('[') || is_ipv4(host)
}

/// Check if a port string is a decimal number that fits in 16 bits.
/// Leading zeros are accepted and the text is kept verbatim.
pub fn is_valid_port(port: &str) -> bool {
    !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit()) && port.parse::<u16>().is_ok()
}
