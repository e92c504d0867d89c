use crate::types::SchemeType;

/// Get the scheme type from a scheme string (ASCII case-insensitive).
/// Filters by length first so most schemes need a single comparison.
pub fn get_scheme_type(scheme: &str) -> SchemeType {
    match scheme.len() {
        4 if scheme.eq_ignore_ascii_case("http") => SchemeType::Http,
        5 if scheme.eq_ignore_ascii_case("https") => SchemeType::Https,
        _ => SchemeType::Other,
    }
}
