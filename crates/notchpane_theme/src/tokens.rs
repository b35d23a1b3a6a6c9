//! Color tokens and hex conversion

use notchpane_core::Color;
use thiserror::Error;

/// Error parsing a hex color string
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ThemeError {
    #[error("hex color must have 6 or 8 digits, got {0}")]
    InvalidLength(usize),
    #[error("invalid hex digit {0:?}")]
    InvalidDigit(char),
}

/// Named palette entries used by pane defaults
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorTokens {
    /// Light foreground / outline color
    pub font_white: Color,
    /// Dark foreground color
    pub font_black: Color,
    /// Accent color for emphasized outlines
    pub accent: Color,
    /// Panel surface color
    pub surface: Color,
    /// Hairline border color
    pub outline: Color,
}

impl Default for ColorTokens {
    fn default() -> Self {
        Self {
            font_white: Color::from_hex(0xFFFFFF),
            font_black: Color::from_hex(0x1D1D1F),
            accent: Color::from_hex(0x007AFF),
            surface: Color::from_hex(0xF5F5F7),
            outline: Color::rgba(0.0, 0.0, 0.0, 0.1),
        }
    }
}

/// The default token palette
pub fn tokens() -> ColorTokens {
    ColorTokens::default()
}

/// Parse a hex color string
///
/// Accepts `RRGGBB`, with an optional `#` or `0x` prefix, and `AARRGGBB`
/// for an explicit alpha component.
pub fn parse_hex(s: &str) -> Result<Color, ThemeError> {
    let digits = s
        .strip_prefix('#')
        .or_else(|| s.strip_prefix("0x"))
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);

    if digits.len() != 6 && digits.len() != 8 {
        return Err(ThemeError::InvalidLength(digits.len()));
    }

    let mut value: u32 = 0;
    for c in digits.chars() {
        let d = c.to_digit(16).ok_or(ThemeError::InvalidDigit(c))?;
        value = (value << 4) | d;
    }

    if digits.len() == 8 {
        let a = ((value >> 24) & 0xFF) as f32 / 255.0;
        Ok(Color::from_hex(value & 0x00FF_FFFF).with_alpha(a))
    } else {
        Ok(Color::from_hex(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_forms() {
        let white = Color::from_hex(0xFFFFFF);
        assert_eq!(parse_hex("FFFFFF").unwrap(), white);
        assert_eq!(parse_hex("#FFFFFF").unwrap(), white);
        assert_eq!(parse_hex("0xFFFFFF").unwrap(), white);
    }

    #[test]
    fn test_parse_hex_alpha() {
        let c = parse_hex("80FF0000").unwrap();
        assert_eq!(c.r, 1.0);
        assert!((c.a - 128.0 / 255.0).abs() < 0.001);
    }

    #[test]
    fn test_parse_hex_errors() {
        assert_eq!(parse_hex("FFF"), Err(ThemeError::InvalidLength(3)));
        assert_eq!(parse_hex("#GGGGGG"), Err(ThemeError::InvalidDigit('G')));
    }

    #[test]
    fn test_default_tokens() {
        let t = tokens();
        assert_eq!(t.font_white, Color::WHITE);
        assert_ne!(t.font_black, Color::BLACK);
    }
}
