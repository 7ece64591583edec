//! Hex color parsing for translucent icon backgrounds

use std::fmt;

/// An 8-bit-per-channel color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };

    /// Parse exactly six hex digits with an optional leading `#`.
    /// Case-insensitive. Returns `None` for anything else.
    pub fn parse(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }

        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        Some(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        })
    }
}

/// Formats as `R, G, B`, ready for `rgba(..., alpha)`
impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.r, self.g, self.b)
    }
}

/// Convert `#rrggbb` to `"r, g, b"`. Malformed input yields `"0, 0, 0"`.
pub fn hex_to_rgb(hex: &str) -> String {
    Rgb::parse(hex).unwrap_or(Rgb::BLACK).to_string()
}
