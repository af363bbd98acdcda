//! Color theme resolution.
//!
//! The config stores colors as hex strings; widgets consume resolved
//! ratatui colors. Unparseable values fall back to the reference palette.

use crate::config::ThemeConfig;
use ratatui::style::Color;

const PRIMARY: Color = Color::Rgb(0x52, 0x66, 0xFC);
const GRADIENT_START: Color = Color::Rgb(0x53, 0x67, 0xfc);
const GRADIENT_MID: Color = Color::Rgb(0x4d, 0x6f, 0xf7);
const GRADIENT_END: Color = Color::Rgb(0x00, 0xe8, 0xb0);
const SUCCESS: Color = Color::Rgb(0x10, 0xb9, 0x81);
const WARNING: Color = Color::Rgb(0xf5, 0x9e, 0x0b);
const ERROR: Color = Color::Rgb(0xef, 0x53, 0x50);

/// Resolved color theme.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub primary: Color,
    pub gradient_start: Color,
    pub gradient_mid: Color,
    pub gradient_end: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: PRIMARY,
            gradient_start: GRADIENT_START,
            gradient_mid: GRADIENT_MID,
            gradient_end: GRADIENT_END,
            success: SUCCESS,
            warning: WARNING,
            error: ERROR,
        }
    }
}

impl Theme {
    /// Resolve a theme from hex config values.
    pub fn from_config(config: &ThemeConfig) -> Self {
        Self {
            primary: parse_hex(&config.primary).unwrap_or(PRIMARY),
            gradient_start: parse_hex(&config.gradient_start).unwrap_or(GRADIENT_START),
            gradient_mid: parse_hex(&config.gradient_mid).unwrap_or(GRADIENT_MID),
            gradient_end: parse_hex(&config.gradient_end).unwrap_or(GRADIENT_END),
            success: parse_hex(&config.success).unwrap_or(SUCCESS),
            warning: parse_hex(&config.warning).unwrap_or(WARNING),
            error: parse_hex(&config.error).unwrap_or(ERROR),
        }
    }
}

/// Parse a `#rrggbb` hex string into a color.
fn parse_hex(s: &str) -> Option<Color> {
    let s = s.strip_prefix('#')?;
    // Byte slicing below requires six ASCII digits.
    if s.len() != 6 || !s.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&s[0..2], 16).ok()?;
    let g = u8::from_str_radix(&s[2..4], 16).ok()?;
    let b = u8::from_str_radix(&s[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_hex_colors() {
        assert_eq!(parse_hex("#10b981"), Some(Color::Rgb(0x10, 0xb9, 0x81)));
        assert_eq!(parse_hex("#FFFFFF"), Some(Color::Rgb(255, 255, 255)));
    }

    #[test]
    fn rejects_malformed_hex() {
        assert_eq!(parse_hex("10b981"), None);
        assert_eq!(parse_hex("#10b9"), None);
        assert_eq!(parse_hex("#zzzzzz"), None);
    }

    #[test]
    fn multibyte_hex_falls_back_to_palette() {
        // Six bytes but not six ASCII digits; must not panic on the
        // char boundary inside 'α'.
        assert_eq!(parse_hex("#aαbcd"), None);

        let config = ThemeConfig {
            primary: "#aαbcd".to_string(),
            ..Default::default()
        };
        assert_eq!(Theme::from_config(&config).primary, PRIMARY);
    }

    #[test]
    fn bad_config_values_fall_back_to_palette() {
        let config = ThemeConfig {
            success: "not-a-color".to_string(),
            ..Default::default()
        };
        let theme = Theme::from_config(&config);
        assert_eq!(theme.success, SUCCESS);
    }
}
