use std::fmt;
use std::str::FromStr;

use crate::error::ColorParseError;

/// RGB colour with components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const BLACK: Color = Color::rgb8(0, 0, 0);
    pub const WHITE: Color = Color::rgb8(255, 255, 255);

    pub const fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Color {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// Parse `#RRGGBB` or `#RGB` (leading `#` optional).
    pub fn from_hex(input: &str) -> Result<Self, ColorParseError> {
        let digits = input.trim().trim_start_matches('#');
        let invalid = || ColorParseError {
            input: input.to_string(),
        };

        if !digits.chars().all(|ch| ch.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |hex: &str| u8::from_str_radix(hex, 16).map_err(|_| invalid());

        match digits.len() {
            6 => Ok(Color::rgb8(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            3 => {
                let expand = |idx: usize| channel(&digits[idx..idx + 1]).map(|v| v * 17);
                Ok(Color::rgb8(expand(0)?, expand(1)?, expand(2)?))
            }
            _ => Err(invalid()),
        }
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Color::from_hex(value)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let to_byte = |v: f32| (v * 255.0).round() as u8;
        write!(
            f,
            "#{:02X}{:02X}{:02X}",
            to_byte(self.r),
            to_byte(self.g),
            to_byte(self.b)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_long_and_short_hex() {
        assert_eq!(Color::from_hex("#1A5276").unwrap().to_string(), "#1A5276");
        assert_eq!(Color::from_hex("#333").unwrap(), Color::rgb8(0x33, 0x33, 0x33));
        assert_eq!("d4e6f1".parse::<Color>().unwrap().to_string(), "#D4E6F1");
    }

    #[test]
    fn rejects_malformed_hex() {
        assert!(Color::from_hex("#12345").is_err());
        assert!(Color::from_hex("#GG0000").is_err());
        assert!(Color::from_hex("").is_err());
    }
}
