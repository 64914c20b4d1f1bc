//! Frame background fill: sRGB color parsing and presets.

use core::fmt;
use core::str::FromStr;

use crate::error::LayoutError;

/// sRGB color with alpha, 8 bits per channel.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct BackgroundColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Which color picker choice a background corresponds to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ColorMode {
    White,
    Black,
    Custom,
}

impl BackgroundColor {
    /// `#FFFFFF`.
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// `#000000`.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// `#808080`.
    pub const GRAY: Self = Self::rgb(128, 128, 128);

    /// Opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Picker mode this color maps to. Only exact opaque white and black are presets.
    pub fn mode(&self) -> ColorMode {
        match *self {
            Self::WHITE => ColorMode::White,
            Self::BLACK => ColorMode::Black,
            _ => ColorMode::Custom,
        }
    }

    /// Parse a color string.
    ///
    /// Accepts:
    /// - `#RGB` / `RGB` — 3-digit hex, alpha = 0xFF
    /// - `#RGBA` / `RGBA` — 4-digit hex
    /// - `#RRGGBB` / `RRGGBB` — 6-digit hex, alpha = 0xFF
    /// - `#RRGGBBAA` / `RRGGBBAA` — 8-digit hex
    /// - `white`, `black`, `gray` / `grey` (case-insensitive)
    pub fn parse(s: &str) -> Result<Self, LayoutError> {
        let s = s.trim();
        let hex = s.strip_prefix('#').unwrap_or(s);
        parse_hex(hex)
            .or_else(|| lookup_named(s))
            .ok_or(LayoutError::InvalidColor)
    }
}

impl Default for BackgroundColor {
    fn default() -> Self {
        Self::WHITE
    }
}

impl FromStr for BackgroundColor {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// `#RRGGBB` for opaque colors, `#RRGGBBAA` otherwise.
impl fmt::Display for BackgroundColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)?;
        if self.a != 255 {
            write!(f, "{:02X}", self.a)?;
        }
        Ok(())
    }
}

fn parse_hex(hex: &str) -> Option<BackgroundColor> {
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let bytes = hex.as_bytes();

    match bytes.len() {
        3 | 4 => {
            let r = expand_nibble(bytes[0])?;
            let g = expand_nibble(bytes[1])?;
            let b = expand_nibble(bytes[2])?;
            let a = match bytes.get(3) {
                Some(&ch) => expand_nibble(ch)?,
                None => 255,
            };
            Some(BackgroundColor { r, g, b, a })
        }
        6 | 8 => {
            let r = parse_byte(&bytes[0..2])?;
            let g = parse_byte(&bytes[2..4])?;
            let b = parse_byte(&bytes[4..6])?;
            let a = if bytes.len() == 8 {
                parse_byte(&bytes[6..8])?
            } else {
                255
            };
            Some(BackgroundColor { r, g, b, a })
        }
        _ => None,
    }
}

/// Expand a single hex nibble: 'f' → 0xFF, 'a' → 0xAA.
fn expand_nibble(ch: u8) -> Option<u8> {
    let n = hex_val(ch)?;
    Some(n << 4 | n)
}

fn hex_val(ch: u8) -> Option<u8> {
    match ch {
        b'0'..=b'9' => Some(ch - b'0'),
        b'a'..=b'f' => Some(ch - b'a' + 10),
        b'A'..=b'F' => Some(ch - b'A' + 10),
        _ => None,
    }
}

fn parse_byte(pair: &[u8]) -> Option<u8> {
    let hi = hex_val(pair[0])?;
    let lo = hex_val(pair[1])?;
    Some(hi << 4 | lo)
}

fn lookup_named(name: &str) -> Option<BackgroundColor> {
    const NAMED: [(&str, BackgroundColor); 4] = [
        ("black", BackgroundColor::BLACK),
        ("gray", BackgroundColor::GRAY),
        ("grey", BackgroundColor::GRAY),
        ("white", BackgroundColor::WHITE),
    ];
    NAMED
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|&(_, c)| c)
}
