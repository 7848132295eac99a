//! RGBA colors and hex parsing

use thiserror::Error;

/// Errors produced when parsing a hex color literal
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// Literal had no digits after the prefix
    #[error("empty color literal")]
    Empty,

    /// Literal length is not 3, 6 or 8 hex digits
    #[error("invalid color length {len} in {literal:?} (expected 3, 6 or 8 hex digits)")]
    InvalidLength { literal: String, len: usize },

    /// Literal contains a non-hex character
    #[error("invalid hex digit in color {0:?}")]
    InvalidDigit(String),
}

/// RGBA color with components in 0.0..=1.0
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Grayscale color with the given alpha
    pub const fn white(white: f32, alpha: f32) -> Self {
        Self::rgba(white, white, white, alpha)
    }

    /// Opaque color from a packed `0xRRGGBB` value
    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::rgb(r, g, b)
    }

    /// Parse `#rgb`, `#rrggbb` or `#rrggbbaa`. The `#` may be omitted or
    /// written as `0x`.
    pub fn parse_hex(literal: &str) -> Result<Self, ColorParseError> {
        let trimmed = literal.trim();
        let digits = trimmed
            .strip_prefix('#')
            .or_else(|| trimmed.strip_prefix("0x"))
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);

        if digits.is_empty() {
            return Err(ColorParseError::Empty);
        }
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidDigit(literal.to_string()));
        }

        let channel = |s: &str| -> Result<f32, ColorParseError> {
            u8::from_str_radix(s, 16)
                .map(|v| v as f32 / 255.0)
                .map_err(|_| ColorParseError::InvalidDigit(literal.to_string()))
        };

        match digits.len() {
            3 => {
                // #rgb expands each nibble: f -> ff
                let mut expanded = String::with_capacity(6);
                for c in digits.chars() {
                    expanded.push(c);
                    expanded.push(c);
                }
                Ok(Self::rgb(
                    channel(&expanded[0..2])?,
                    channel(&expanded[2..4])?,
                    channel(&expanded[4..6])?,
                ))
            }
            6 => Ok(Self::rgb(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            8 => Ok(Self::rgba(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
                channel(&digits[6..8])?,
            )),
            len => Err(ColorParseError::InvalidLength {
                literal: literal.to_string(),
                len,
            }),
        }
    }

    /// Format as `#rrggbb`, or `#rrggbbaa` when not fully opaque
    pub fn to_hex_string(&self) -> String {
        let byte = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        if byte(self.a) == 255 {
            format!("#{:02x}{:02x}{:02x}", byte(self.r), byte(self.g), byte(self.b))
        } else {
            format!(
                "#{:02x}{:02x}{:02x}{:02x}",
                byte(self.r),
                byte(self.g),
                byte(self.b),
                byte(self.a)
            )
        }
    }

    /// Linear interpolation between two colors
    pub fn lerp(a: &Color, b: &Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        Color {
            r: a.r + (b.r - a.r) * t,
            g: a.g + (b.g - a.g) * t,
            b: a.b + (b.b - a.b) * t,
            a: a.a + (b.a - a.a) * t,
        }
    }
}

impl std::str::FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_hex(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn test_from_hex_matches_parse() {
        let packed = Color::from_hex(0xfd3870);
        let parsed = Color::parse_hex("#fd3870").unwrap();
        assert_eq!(packed, parsed);
        assert!(close(parsed.r, 253.0 / 255.0));
        assert!(close(parsed.g, 56.0 / 255.0));
        assert!(close(parsed.b, 112.0 / 255.0));
        assert_eq!(parsed.a, 1.0);
    }

    #[test]
    fn test_parse_prefixes_and_alpha() {
        assert_eq!(Color::parse_hex("39d3d3").unwrap(), Color::from_hex(0x39d3d3));
        assert_eq!(Color::parse_hex("0x39d3d3").unwrap(), Color::from_hex(0x39d3d3));

        let stroke = Color::parse_hex("#ffffffcc").unwrap();
        assert!(close(stroke.a, 0.8));
        assert_eq!(Color::parse_hex("#fff").unwrap(), Color::WHITE);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(Color::parse_hex("#"), Err(ColorParseError::Empty));
        assert!(matches!(
            Color::parse_hex("#12345"),
            Err(ColorParseError::InvalidLength { len: 5, .. })
        ));
        assert!(matches!(
            Color::parse_hex("#gg0000"),
            Err(ColorParseError::InvalidDigit(_))
        ));
    }

    #[test]
    fn test_hex_string_round_trip() {
        assert_eq!(Color::from_hex(0xe66f5e).to_hex_string(), "#e66f5e");
        assert_eq!(Color::white(1.0, 0.8).to_hex_string(), "#ffffffcc");
    }
}
