/// Check if a byte is a C0 control or space (trimmed from both ends of the input)
pub fn is_c0_control_or_space(b: u8) -> bool {
    b <= 0x20
}

/// Scheme byte classification
/// 0=invalid, 1=valid anywhere, 2=valid after the first byte
const SCHEME_CHAR_TABLE: [u8; 256] = {
    let mut table = [0u8; 256];

    let mut i = b'a';
    while i <= b'z' {
        table[i as usize] = 1;
        i += 1;
    }
    let mut i = b'A';
    while i <= b'Z' {
        table[i as usize] = 1;
        i += 1;
    }
    let mut i = b'0';
    while i <= b'9' {
        table[i as usize] = 2;
        i += 1;
    }
    table[b'+' as usize] = 2;
    table[b'-' as usize] = 2;
    table[b'.' as usize] = 2;

    table
};

/// Check if a byte may start a scheme
pub fn is_scheme_start_byte(b: u8) -> bool {
    SCHEME_CHAR_TABLE[b as usize] == 1
}

/// Check if a byte may continue a scheme
pub fn is_scheme_byte(b: u8) -> bool {
    SCHEME_CHAR_TABLE[b as usize] != 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheme_bytes() {
        assert!(is_scheme_start_byte(b'h'));
        assert!(is_scheme_start_byte(b'H'));
        assert!(!is_scheme_start_byte(b'1'));
        assert!(!is_scheme_start_byte(b':'));

        assert!(is_scheme_byte(b'1'));
        assert!(is_scheme_byte(b'+'));
        assert!(is_scheme_byte(b'.'));
        assert!(!is_scheme_byte(b'/'));
        assert!(!is_scheme_byte(b' '));
    }

    #[test]
    fn test_c0_control_or_space() {
        assert!(is_c0_control_or_space(b' '));
        assert!(is_c0_control_or_space(b'\t'));
        assert!(!is_c0_control_or_space(b'a'));
    }
}
