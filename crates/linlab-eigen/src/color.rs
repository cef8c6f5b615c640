//! Display colours attached to vectors and eigenpairs.

use std::{fmt, str::FromStr};

use crate::error::ColorError;

/// An sRGB colour, written as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Color {
    /// Create a colour from its channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a colour from a packed `0xrrggbb` value.
    pub const fn from_u32(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xff) as u8,
            g: ((value >> 8) & 0xff) as u8,
            b: (value & 0xff) as u8,
        }
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ColorError::InvalidHex(s.to_string());
        let hex = s.strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let value = u32::from_str_radix(hex, 16).map_err(|_| invalid())?;
        Ok(Self::from_u32(value))
    }
}

impl TryFrom<String> for Color {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Colour tag that ties an eigenpair to its on-screen decoration.
///
/// Tags cycle with the eigenpair index, so the first eigenpair is always amber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EigenColor {
    /// `#fbbf24`
    Amber,
    /// `#fb7185`
    Rose,
    /// `#2dd4bf`
    Teal,
}

impl EigenColor {
    /// Tag for the eigenpair at `index`.
    pub fn from_index(index: usize) -> Self {
        match index % 3 {
            0 => Self::Amber,
            1 => Self::Rose,
            _ => Self::Teal,
        }
    }

    /// The display colour of the tag.
    pub fn color(self) -> Color {
        match self {
            Self::Amber => Color::from_u32(0xfbbf24),
            Self::Rose => Color::from_u32(0xfb7185),
            Self::Teal => Color::from_u32(0x2dd4bf),
        }
    }
}
