//! Hex color syntax shared by the build script and [`crate::HexColor`].

/// Whether `raw` is `#` followed by 3 or 6 hex digits.
pub(crate) fn is_hex_color(raw: &str) -> bool {
    match raw.strip_prefix('#') {
        Some(digits) => {
            matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit())
        }
        None => false,
    }
}
