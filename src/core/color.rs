//! Validierung von Hex-Farbangaben für Polygon-Füll- und Randfarben.

/// Akzeptiert `#rgb`, `#rrggbb` und `#rrggbbaa` (Groß-/Kleinschreibung egal).
pub fn is_valid_hex_color(value: &str) -> bool {
    let Some(digits) = value.strip_prefix('#') else {
        return false;
    };
    matches!(digits.len(), 3 | 6 | 8) && digits.chars().all(|c| c.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_short_long_and_alpha_forms() {
        assert!(is_valid_hex_color("#fff"));
        assert!(is_valid_hex_color("#1A2b3C"));
        assert!(is_valid_hex_color("#4caf5080"));
    }

    #[test]
    fn rejects_malformed_values() {
        assert!(!is_valid_hex_color("fff"));
        assert!(!is_valid_hex_color("#ffff"));
        assert!(!is_valid_hex_color("#ggg"));
        assert!(!is_valid_hex_color("rot"));
        assert!(!is_valid_hex_color(""));
    }
}
