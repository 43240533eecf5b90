//! Character constants for the rain animation.

/// Glyph alphabet for the rain: uppercase Latin letters and digits.
pub const RAIN_CHARS: &[char] = &[
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', '0', '1', '2', '3', '4', '5', '6', '7', '8', '9',
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_is_uppercase_alphanumeric() {
        assert_eq!(RAIN_CHARS.len(), 36);
        for &ch in RAIN_CHARS {
            assert!(ch.is_ascii_uppercase() || ch.is_ascii_digit());
        }
    }
}
