/// Deterministic fallback avatar color via CRC32 hash of the username.
/// Returns (r, g, b) from the first 3 bytes of the hash, so initial-letter
/// avatars stay stable for a user across sessions and views.
pub fn fallback_color(username: &str) -> (u8, u8, u8) {
    let hash = crc32fast::hash(username.as_bytes());
    let bytes = hash.to_be_bytes();
    (bytes[0], bytes[1], bytes[2])
}

/// CSS color string for inline styles.
pub fn rgb_css(r: u8, g: u8, b: u8) -> String {
    format!("rgb({r}, {g}, {b})")
}

#[cfg(test)]
mod tests {
    use super::{fallback_color, rgb_css};

    #[test]
    fn fallback_color_is_deterministic() {
        assert_eq!(fallback_color("darkwall"), fallback_color("darkwall"));
    }

    #[test]
    fn fallback_color_varies_for_different_names() {
        assert_ne!(fallback_color("darkwall"), fallback_color("carry_main"));
    }

    #[test]
    fn css_formatting() {
        assert_eq!(rgb_css(22, 163, 74), "rgb(22, 163, 74)");
    }
}
