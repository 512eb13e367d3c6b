//! Color Helpers
//!
//! Hex parsing/formatting plus the translucent tier-row tint.

/// Parse `#rgb` or `#rrggbb` values into RGB channels.
pub fn parse_hex_rgb(raw: &str) -> Option<(u8, u8, u8)> {
    let trimmed = raw.trim();
    let hex = trimmed.strip_prefix('#')?;
    match hex.len() {
        3 => {
            let r = u8::from_str_radix(&hex[0..1].repeat(2), 16).ok()?;
            let g = u8::from_str_radix(&hex[1..2].repeat(2), 16).ok()?;
            let b = u8::from_str_radix(&hex[2..3].repeat(2), 16).ok()?;
            Some((r, g, b))
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some((r, g, b))
        }
        _ => None,
    }
}

/// Format RGB channels as lowercase `#rrggbb`.
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{r:02x}{g:02x}{b:02x}")
}

/// CSS `rgba(...)` tint for a tier hex colour. Unparsable input falls back
/// to a neutral gray so a bad colour never breaks rendering.
pub fn hex_to_rgba(hex: &str, alpha: f64) -> String {
    let (r, g, b) = parse_hex_rgb(hex).unwrap_or((128, 128, 128));
    format!("rgba({r},{g},{b},{alpha})")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_hex_rgb_supports_short_and_long_forms() {
        assert_eq!(parse_hex_rgb("#abc"), Some((170, 187, 204)));
        assert_eq!(parse_hex_rgb(" #7B112C "), Some((123, 17, 44)));
    }

    #[test]
    fn parse_hex_rgb_rejects_invalid_inputs() {
        assert_eq!(parse_hex_rgb("7b112c"), None);
        assert_eq!(parse_hex_rgb("#12"), None);
        assert_eq!(parse_hex_rgb("#12gg34"), None);
    }

    #[test]
    fn rgb_to_hex_is_lowercase_and_padded() {
        assert_eq!(rgb_to_hex(255, 165, 0), "#ffa500");
        assert_eq!(rgb_to_hex(0, 0, 15), "#00000f");
    }

    #[test]
    fn hex_to_rgba_tints_and_falls_back() {
        assert_eq!(hex_to_rgba("#ff0000", 0.1), "rgba(255,0,0,0.1)");
        assert_eq!(hex_to_rgba("nonsense", 0.5), "rgba(128,128,128,0.5)");
    }
}
